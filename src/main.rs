//! Demo world - stands in for the external collaborators: an in-process
//! scheduler driving Tick, plus a handful of demo pets and random player
//! interactions. The engine contract lives in the library; this binary is
//! a harness around it.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use petworld::{Action, Engine, MemoryStore, OwnerId};

/// Seconds between tick sweeps (the reference scheduler interval).
const DEFAULT_TICK_SECS: u64 = 5;
/// Demo pets spawned at startup.
const DEFAULT_PET_COUNT: usize = 6;
/// Chance per sweep of fussing over a random pet.
const INTERACT_CHANCE: f32 = 0.3;

fn main() {
    env_logger::init();
    log::info!("petworld demo starting up");

    let tick_secs: u64 = env_or("PETWORLD_TICK_SECS", DEFAULT_TICK_SECS);
    let pet_count: usize = env_or("PETWORLD_PETS", DEFAULT_PET_COUNT);

    let engine = Engine::new(MemoryStore::new());
    let mut rng = fastrand::Rng::new();

    for i in 0..pet_count {
        let owner = OwnerId::new(format!("demo-{i}"));
        let name = generate_pet_name(&mut rng);
        if let Err(e) = engine.spawn(owner, &name, None) {
            log::error!("spawn failed: {e}");
        }
    }

    match engine.list_live() {
        Ok(pets) => match serde_json::to_string_pretty(&pets) {
            Ok(json) => log::debug!("initial world:\n{json}"),
            Err(e) => log::warn!("world dump failed: {e}"),
        },
        Err(e) => log::error!("listing the world failed: {e}"),
    }

    loop {
        thread::sleep(Duration::from_secs(tick_secs));

        match engine.tick() {
            Ok(report) if report.processed == 0 && report.failed == 0 => {
                log::info!("the world is empty - every pet has died");
                break;
            }
            Ok(report) => log::info!(
                "tick: {} pets ({} died, {} failed)",
                report.processed,
                report.died,
                report.failed
            ),
            Err(e) => log::error!("tick failed: {e}"),
        }

        // Wander past occasionally and fuss over a random pet.
        if rng.f32() < INTERACT_CHANCE {
            fuss(&engine, &mut rng);
        }
    }
}

fn fuss(engine: &Engine<MemoryStore>, rng: &mut fastrand::Rng) {
    let pets = match engine.list_live() {
        Ok(pets) if !pets.is_empty() => pets,
        Ok(_) => return,
        Err(e) => {
            log::error!("listing the world failed: {e}");
            return;
        }
    };

    let pet = &pets[rng.usize(0..pets.len())];
    let action = [Action::Feed, Action::Pet, Action::Heal][rng.usize(0..3)];
    match engine.interact(pet.id, action) {
        Ok(Some(updated)) => log::info!(
            "{} got {:?}: hunger {:.0}, happiness {:.0}, health {:.0} ({:?})",
            updated.name,
            action,
            updated.vitals.hunger,
            updated.vitals.happiness,
            updated.vitals.health,
            updated.animation.kind,
        ),
        Ok(None) => {} // died between listing and interacting - benign
        Err(e) => log::error!("interaction failed: {e}"),
    }
}

/// Read a tunable from the environment, falling back with a warning on
/// unparseable values.
fn env_or<T: FromStr + Display + Copy>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("invalid {key} value ({e}), using default {default}");
            default
        }),
        Err(_) => default,
    }
}

/// Generate a procedural pet name from name parts.
fn generate_pet_name(rng: &mut fastrand::Rng) -> String {
    const PREFIXES: &[&str] = &[
        "", "", "", "", "Sir ", "Lady ", "Captain ", "Little ", "Big ",
    ];
    const NAMES: &[&str] = &[
        "Mochi", "Pixel", "Noodle", "Biscuit", "Tofu", "Widget", "Nugget",
        "Waffles", "Beans", "Pepper", "Clover", "Sprout", "Ziggy", "Pudding",
    ];
    format!(
        "{}{}",
        PREFIXES[rng.usize(0..PREFIXES.len())],
        NAMES[rng.usize(0..NAMES.len())],
    )
}
