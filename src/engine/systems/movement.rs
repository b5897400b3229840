use crate::consts::WORLD_SIZE;
use crate::pet::{random_velocity, Pet};

/// Per-tick probability of replacing a pet's velocity with a fresh random
/// drift - undirected wandering.
const REDIRECT_CHANCE: f32 = 0.01;

/// Integrate velocity into position and reflect off the world walls.
///
/// Each axis is handled independently: a coordinate that would leave
/// [0, WORLD_SIZE] inverts that axis's velocity component and is clamped
/// back into bounds. Reflective boundary, not wrap-around.
pub fn integrate(pet: &mut Pet, dt: f32) {
    let mut pos = pet.position + pet.velocity * dt;
    let mut vel = pet.velocity;

    if pos.x < 0.0 || pos.x > WORLD_SIZE {
        vel.x = -vel.x;
        pos.x = pos.x.clamp(0.0, WORLD_SIZE);
    }
    if pos.y < 0.0 || pos.y > WORLD_SIZE {
        vel.y = -vel.y;
        pos.y = pos.y.clamp(0.0, WORLD_SIZE);
    }

    pet.position = pos;
    pet.velocity = vel;
}

/// Occasionally pick a brand-new drift direction, bounced or not.
pub fn rewander(pet: &mut Pet, rng: &mut fastrand::Rng) {
    if rng.f32() < REDIRECT_CHANCE {
        pet.velocity = random_velocity(rng);
    }
}
