pub mod sprite;

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SPAWN_AREA_FRACTION, WORLD_SIZE};
use crate::time::Timestamp;

/// Unique pet identifier, assigned by the store at creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PetId(u64);

impl PetId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque identifier of the controlling client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three decaying/replenishable scalars, each clamped to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    pub hunger: f32,
    pub happiness: f32,
    pub health: f32,
}

impl Vitals {
    /// Ceiling for every vital.
    pub const MAX: f32 = 100.0;

    /// Fresh pet - everything full.
    pub const fn full() -> Self {
        Self {
            hunger: Self::MAX,
            happiness: Self::MAX,
            health: Self::MAX,
        }
    }

    /// True while every vital is strictly positive.
    pub fn sustaining(&self) -> bool {
        self.hunger > 0.0 && self.happiness > 0.0 && self.health > 0.0
    }

    /// True when every vital is at or above `threshold`.
    pub fn all_at_least(&self, threshold: f32) -> bool {
        self.hunger >= threshold && self.happiness >= threshold && self.health >= threshold
    }
}

/// Player interaction on a live pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Feed,
    Pet,
    Heal,
}

impl Action {
    /// Animation shown for this action when no override applies.
    pub fn animation(self) -> AnimationKind {
        match self {
            Action::Feed => AnimationKind::Feed,
            Action::Pet => AnimationKind::Pet,
            Action::Heal => AnimationKind::Heal,
        }
    }
}

/// Transient presentation hint - not authoritative game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    Idle,
    Feed,
    Pet,
    Heal,
    /// Rapid-fire interaction override.
    Dance,
    /// All vitals high after an interaction.
    Celebrate,
}

/// Current animation and when it started. Decays back to idle on tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub kind: AnimationKind,
    pub started_at: Timestamp,
}

impl Animation {
    pub const fn idle(now: Timestamp) -> Self {
        Self {
            kind: AnimationKind::Idle,
            started_at: now,
        }
    }
}

/// A pet record - the sole entity of the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub owner: OwnerId,
    /// Display name, 1-20 characters, immutable after spawn.
    pub name: String,
    /// World-space position, each axis in [0, WORLD_SIZE].
    pub position: Vec2,
    /// Drift in units/second, components in [-1, 1].
    pub velocity: Vec2,
    pub vitals: Vitals,
    /// Terminal once false - a dead pet is never revived, only excluded
    /// from live views.
    pub alive: bool,
    pub birth_time: Timestamp,
    pub last_updated: Timestamp,
    pub animation: Animation,
    /// Pre-rendered data-URL sprite, generated once at spawn.
    pub sprite: String,
}

impl Pet {
    /// Build a freshly spawned pet: random placement away from the walls,
    /// random drift, full vitals. The id is assigned by the store on
    /// insert.
    pub fn spawned(
        owner: OwnerId,
        name: String,
        sprite: String,
        now: Timestamp,
        rng: &mut fastrand::Rng,
    ) -> Self {
        let span = WORLD_SIZE * SPAWN_AREA_FRACTION;
        Self {
            id: PetId::from_raw(0),
            owner,
            name,
            position: Vec2::new(rng.f32() * span, rng.f32() * span),
            velocity: random_velocity(rng),
            vitals: Vitals::full(),
            alive: true,
            birth_time: now,
            last_updated: now,
            animation: Animation::idle(now),
            sprite,
        }
    }
}

/// Random drift vector - both components uniform in [-1, 1].
pub fn random_velocity(rng: &mut fastrand::Rng) -> Vec2 {
    Vec2::new(rng.f32() * 2.0 - 1.0, rng.f32() * 2.0 - 1.0)
}
