//! The tie-resolution sub-state-machine.
//!
//! Opened by [`roll_all`](crate::engine::roll_all) when totals collide.
//! The session holds a snapshot of the tied entities; tie-breaker edits
//! accumulate on the session and merge back into the roster in one step
//! at [`TieResolutionSession::finalize`]. Residual collisions narrow the
//! session and hand it back instead of closing it.

use rand::rngs::StdRng;

use vh_core::{EntityId, EntityKind, Roster};

use crate::dice::d20;
use crate::engine::sort_by_initiative;
use crate::error::{EngineError, EngineResult};

/// One entity participating in an open tie-resolution session.
#[derive(Debug, Clone)]
pub struct Contender {
    /// ID of the roster entity this row mirrors.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Player or NPC. Players type their tie-breaker; NPCs roll it.
    pub kind: EntityKind,
    /// The initiative total shared by this contender's tied group.
    pub group_total: i32,
    /// Current tie-breaker value. 0 means not yet supplied.
    pub tie_breaker: i32,
}

/// Result of a finalize attempt.
#[derive(Debug)]
pub enum FinalizeOutcome {
    /// Every collision resolved; the roster is now fully ordered.
    Resolved,
    /// Some contenders still collide on (total, tie-breaker). The narrowed
    /// session must collect fresh values and finalize again.
    StillTied(TieResolutionSession),
}

/// Collects secondary scores for entities whose initiative totals collide.
#[derive(Debug)]
pub struct TieResolutionSession {
    contenders: Vec<Contender>,
}

impl TieResolutionSession {
    /// Scan a rolled roster for tied totals and open a session over the
    /// union of all tied groups. Returns `None` when every total is
    /// distinct. Contenders are ordered by group total descending, keeping
    /// roster order within a group.
    pub(crate) fn open(roster: &Roster) -> Option<Self> {
        let entities = roster.entities();
        let mut contenders: Vec<Contender> = entities
            .iter()
            .filter(|e| entities.iter().filter(|o| o.total == e.total).count() >= 2)
            .map(|e| Contender {
                id: e.id,
                name: e.name.clone(),
                kind: e.kind,
                group_total: e.total,
                tie_breaker: 0,
            })
            .collect();

        if contenders.is_empty() {
            return None;
        }
        contenders.sort_by(|a, b| b.group_total.cmp(&a.group_total));
        Some(Self { contenders })
    }

    /// Supply a typed tie-breaker for a contender. Zero does not count as
    /// supplied; the finalize gate stays shut until the value is nonzero.
    pub fn set_tie_breaker(&mut self, id: EntityId, value: i32) -> EngineResult<()> {
        self.contender_mut(id)?.tie_breaker = value;
        Ok(())
    }

    /// Roll a fresh d20 tie-breaker for a contender, overwriting any
    /// previous value. Every call re-rolls; nothing is kept until the
    /// session finalizes.
    pub fn roll_tie_breaker(&mut self, id: EntityId, rng: &mut StdRng) -> EngineResult<i32> {
        let value = d20(rng);
        self.contender_mut(id)?.tie_breaker = value;
        Ok(value)
    }

    /// True once every contender carries a nonzero tie-breaker.
    pub fn is_ready(&self) -> bool {
        self.contenders.iter().all(|c| c.tie_breaker != 0)
    }

    /// Contenders in display order (group totals descending).
    pub fn contenders(&self) -> &[Contender] {
        &self.contenders
    }

    /// Contenders grouped by their shared total, descending, for display.
    pub fn groups(&self) -> Vec<(i32, Vec<&Contender>)> {
        let mut groups: Vec<(i32, Vec<&Contender>)> = Vec::new();
        for c in &self.contenders {
            match groups.last_mut() {
                Some((total, members)) if *total == c.group_total => members.push(c),
                _ => groups.push((c.group_total, vec![c])),
            }
        }
        groups
    }

    /// Merge the collected tie-breakers into the roster and try to close.
    ///
    /// Errors unless every contender has a nonzero tie-breaker. Two
    /// contenders still collide when both total and tie-breaker are equal;
    /// only members of this session are candidates for that check. A
    /// residual collision narrows the session to exactly the colliding
    /// entities, resets their tie-breakers, and returns
    /// [`FinalizeOutcome::StillTied`]. Otherwise the roster is sorted by
    /// (total descending, tie-breaker descending) and the session closes.
    pub fn finalize(self, roster: &mut Roster) -> EngineResult<FinalizeOutcome> {
        let missing = self
            .contenders
            .iter()
            .filter(|c| c.tie_breaker == 0)
            .count();
        if missing > 0 {
            return Err(EngineError::TieBreakersMissing(missing));
        }

        for c in &self.contenders {
            if let Ok(entity) = roster.entity_mut(c.id) {
                entity.tie_breaker = c.tie_breaker;
            }
        }

        let mut collided: Vec<Contender> = self
            .contenders
            .iter()
            .filter(|c| {
                self.contenders
                    .iter()
                    .filter(|o| o.group_total == c.group_total && o.tie_breaker == c.tie_breaker)
                    .count()
                    >= 2
            })
            .cloned()
            .collect();

        if !collided.is_empty() {
            for c in &mut collided {
                c.tie_breaker = 0;
                if let Ok(entity) = roster.entity_mut(c.id) {
                    entity.tie_breaker = 0;
                }
            }
            return Ok(FinalizeOutcome::StillTied(Self {
                contenders: collided,
            }));
        }

        sort_by_initiative(roster);
        Ok(FinalizeOutcome::Resolved)
    }

    fn contender_mut(&mut self, id: EntityId) -> EngineResult<&mut Contender> {
        self.contenders
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(EngineError::UnknownContender(id))
    }
}
