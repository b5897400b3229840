//! World-level invariants: vitals bounded, positions bounded, death
//! one-way, and owner uniqueness under concurrent spawns.

use std::sync::Arc;
use std::thread;

use proptest::prelude::*;

use petworld::consts::WORLD_SIZE;
use petworld::time::ManualClock;
use petworld::{Action, Engine, MemoryStore, OwnerId, PetStore, Timestamp};

fn engine_at(
    start_ms: u64,
) -> (Engine<MemoryStore, Arc<ManualClock>>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(Timestamp::from_millis(start_ms)));
    let engine = Engine::with_clock(MemoryStore::new(), Arc::clone(&clock)).with_seed(7);
    (engine, clock)
}

#[derive(Debug, Clone)]
enum Op {
    Advance(u64),
    Tick,
    Interact(Action),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u64..20_000).prop_map(Op::Advance),
        Just(Op::Tick),
        prop_oneof![Just(Action::Feed), Just(Action::Pet), Just(Action::Heal)]
            .prop_map(Op::Interact),
    ]
}

proptest! {
    /// Any interleaving of clock advances, ticks, and interactions keeps
    /// every vital in [0, 100], the position inside the world, and death
    /// one-directional.
    #[test]
    fn world_invariants_hold(ops in prop::collection::vec(op_strategy(), 1..120)) {
        let (engine, clock) = engine_at(1_000);
        let id = engine.spawn(OwnerId::new("prop"), "Blob", None).unwrap();
        let mut seen_dead = false;

        for op in ops {
            match op {
                Op::Advance(ms) => clock.advance(ms),
                Op::Tick => {
                    engine.tick().unwrap();
                }
                Op::Interact(action) => {
                    engine.interact(id, action).unwrap();
                }
            }

            let pet = engine.store().get(id).unwrap().unwrap();
            for v in [pet.vitals.hunger, pet.vitals.happiness, pet.vitals.health] {
                prop_assert!((0.0..=100.0).contains(&v), "vital out of range: {v}");
            }
            prop_assert!((0.0..=WORLD_SIZE).contains(&pet.position.x));
            prop_assert!((0.0..=WORLD_SIZE).contains(&pet.position.y));

            if seen_dead {
                prop_assert!(!pet.alive, "a dead pet came back to life");
            }
            seen_dead = !pet.alive;
        }
    }
}

#[test]
fn concurrent_spawns_leave_one_live_pet_per_owner() {
    let engine = Arc::new(Engine::new(MemoryStore::new()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                engine
                    .spawn(OwnerId::new("shared-owner"), "Rex", None)
                    .is_ok()
            })
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().expect("spawner thread panicked"))
        .filter(|ok| *ok)
        .count();

    assert_eq!(successes, 1);
    assert_eq!(engine.list_live().unwrap().len(), 1);
    assert!(engine
        .get_by_owner(&OwnerId::new("shared-owner"))
        .unwrap()
        .is_some());
}

#[test]
fn starvation_eventually_kills_and_then_freezes() {
    let (engine, clock) = engine_at(0);
    let id = engine.spawn(OwnerId::new("u1"), "Doomed", None).unwrap();

    // Hunger decays at 0.5/s, capped at 5s per tick: 100 points is gone
    // within 40 five-second sweeps. Give it headroom.
    let mut died_at_tick = None;
    for i in 0..60 {
        clock.advance(5_000);
        let report = engine.tick().unwrap();
        if report.died > 0 {
            died_at_tick = Some(i);
            break;
        }
    }
    assert!(died_at_tick.is_some(), "pet never starved");

    let dead = engine.store().get(id).unwrap().unwrap();
    assert!(!dead.alive);

    clock.advance(5_000);
    engine.tick().unwrap();
    assert_eq!(engine.store().get(id).unwrap().unwrap(), dead);
}
