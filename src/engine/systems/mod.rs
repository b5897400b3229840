pub mod animation;
pub mod movement;
pub mod vitals;

use crate::consts::MAX_TICK_DELTA_SECS;
use crate::pet::Pet;
use crate::time::Timestamp;

/// Advance one live pet by the wall-clock time since its own last update.
///
/// The elapsed delta is capped so scheduler gaps or downtime cannot
/// teleport a pet across the world or starve it in a single jump.
///
/// Returns true if the pet died on this step.
pub fn step(pet: &mut Pet, now: Timestamp, rng: &mut fastrand::Rng) -> bool {
    let elapsed = now.millis_since(pet.last_updated) as f32 / 1000.0;
    let dt = elapsed.min(MAX_TICK_DELTA_SECS);

    // 1. Movement integration (velocity + wall bounce)
    movement::integrate(pet, dt);

    // 2. Random redirection - undirected wandering
    movement::rewander(pet, rng);

    // 3. Vital decay + death condition
    let died = vitals::decay(pet, dt);

    // 4. Stale animation cleanup
    animation::decay(pet, now);

    pet.last_updated = now;
    died
}
