use crate::pet::Pet;

/// Hunger decay rate in vital points per second.
const HUNGER_DECAY_PER_SEC: f32 = 0.5;
/// Happiness decays at 80% of the hunger rate.
const HAPPINESS_FACTOR: f32 = 0.8;
/// Health decays at 50% of the hunger rate.
const HEALTH_FACTOR: f32 = 0.5;

/// Decay vitals by elapsed time and apply the death condition.
///
/// Each vital floors at zero. Any vital hitting zero kills the pet; the
/// transition is one-way and callers stop processing dead pets entirely.
///
/// Returns true if the pet died on this step.
pub fn decay(pet: &mut Pet, dt: f32) -> bool {
    let base = HUNGER_DECAY_PER_SEC * dt;
    let v = &mut pet.vitals;
    v.hunger = (v.hunger - base).max(0.0);
    v.happiness = (v.happiness - base * HAPPINESS_FACTOR).max(0.0);
    v.health = (v.health - base * HEALTH_FACTOR).max(0.0);

    if pet.alive && !v.sustaining() {
        pet.alive = false;
        return true;
    }
    false
}
