//! The roll protocol: compute totals, detect ties, order the roster.

use rand::rngs::StdRng;

use vh_core::{EntityKind, Roster};

use crate::dice::d20;
use crate::session::TieResolutionSession;

/// Outcome of rolling initiative for a roster.
#[derive(Debug)]
pub enum RollOutcome {
    /// Every total is distinct; the roster has been sorted in place.
    Ordered,
    /// At least two entities share a total. The roster stays in its
    /// rolled-but-unsorted state until the session is finalized.
    Tied(TieResolutionSession),
}

/// Roll initiative for every entity that needs it.
///
/// NPCs always roll; a player rolls only while their total is unset, so
/// both hand-entered and previously rolled totals survive a re-roll.
/// Every tie-breaker is reset regardless. Tied totals open a
/// [`TieResolutionSession`] over the union of all tied groups; otherwise
/// the roster is sorted by total, descending.
pub fn roll_all(roster: &mut Roster, rng: &mut StdRng) -> RollOutcome {
    for entity in roster.entities_mut() {
        let needs_roll = match entity.kind {
            EntityKind::Npc => true,
            EntityKind::Player => entity.total == 0 && !entity.has_manual_total,
        };
        if needs_roll {
            entity.total = d20(rng) + entity.initiative_modifier;
        }
        entity.tie_breaker = 0;
    }

    match TieResolutionSession::open(roster) {
        Some(session) => RollOutcome::Tied(session),
        None => {
            sort_by_initiative(roster);
            RollOutcome::Ordered
        }
    }
}

/// Sort the roster by total descending, then tie-breaker descending.
/// The sort is stable, so entities with equal keys keep their order.
pub(crate) fn sort_by_initiative(roster: &mut Roster) {
    roster
        .entities_mut()
        .sort_by(|a, b| b.total.cmp(&a.total).then(b.tie_breaker.cmp(&a.tie_breaker)));
}
