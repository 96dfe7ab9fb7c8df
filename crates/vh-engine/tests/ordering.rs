//! Property tests for the final ordering law: after a roll and however many
//! finalize rounds it takes, no two entities share both total and
//! tie-breaker, and the roster is ordered by (total desc, tie-breaker desc).

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use vh_core::{EntityKind, Roster, Template};
use vh_engine::{FinalizeOutcome, RollOutcome, roll_all};

proptest! {
    #[test]
    fn resolved_rosters_never_share_both_keys(
        manual_totals in proptest::collection::vec(1..30i32, 0..5),
        npc_count in 0..5usize,
        seed in any::<u64>(),
    ) {
        prop_assume!(manual_totals.len() + npc_count >= 2);

        let mut roster = Roster::new();
        for (i, total) in manual_totals.iter().enumerate() {
            let id = roster
                .add_from_template(&Template::new(
                    format!("Player {i}"),
                    EntityKind::Player,
                    0,
                    0,
                ))
                .unwrap()
                .id;
            roster.set_manual_initiative(id, *total).unwrap();
        }
        let goblin = Template::new("Goblin", EntityKind::Npc, 7, 0);
        for _ in 0..npc_count {
            roster.add_from_template(&goblin).unwrap();
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut pending = match roll_all(&mut roster, &mut rng) {
            RollOutcome::Ordered => None,
            RollOutcome::Tied(session) => Some(session),
        };

        // Assign pairwise-distinct breakers; one round then resolves.
        while let Some(mut session) = pending.take() {
            let assignments: Vec<_> = session
                .contenders()
                .iter()
                .enumerate()
                .map(|(i, c)| (c.id, i as i32 + 1))
                .collect();
            for (id, value) in assignments {
                session.set_tie_breaker(id, value).unwrap();
            }
            match session.finalize(&mut roster).unwrap() {
                FinalizeOutcome::Resolved => {}
                FinalizeOutcome::StillTied(narrowed) => pending = Some(narrowed),
            }
        }

        let entities = roster.entities();
        for (i, a) in entities.iter().enumerate() {
            for b in &entities[i + 1..] {
                prop_assert!(
                    !(a.total == b.total && a.tie_breaker == b.tie_breaker),
                    "{} and {} share total {} and tie-breaker {}",
                    a.name, b.name, a.total, a.tie_breaker,
                );
            }
        }
        for pair in entities.windows(2) {
            prop_assert!(
                (pair[0].total, pair[0].tie_breaker) >= (pair[1].total, pair[1].tie_breaker)
            );
        }
    }
}
