//! The engine facade - Spawn, Interact, Tick, and the query surface.
//!
//! The engine holds no world state of its own: everything lives in the
//! store, and each operation runs to completion against it. External
//! collaborators drive it - a scheduler invokes `tick`, clients invoke
//! `spawn`/`interact`, renderers read `list_live`/`get_by_owner`.

pub mod systems;

use std::sync::{Mutex, MutexGuard};

use log::{debug, info, warn};

use crate::error::EngineError;
use crate::pet::{Action, Animation, AnimationKind, OwnerId, Pet, PetId, Vitals};
use crate::store::{PetStore, StoreError};
use crate::time::{Clock, SystemClock};

/// Vital points restored by feeding.
const FEED_DELTA: f32 = 30.0;
/// Vital points restored by petting.
const PET_DELTA: f32 = 20.0;
/// Vital points restored by healing.
const HEAL_DELTA: f32 = 25.0;
/// Interactions closer together than this read as rapid-fire (ms).
const RAPID_INTERACT_WINDOW_MS: u64 = 500;
/// All vitals at or above this after an interaction trigger a celebration.
const CELEBRATE_THRESHOLD: f32 = 90.0;
/// Longest accepted pet name, in chars after trimming.
const MAX_NAME_LEN: usize = 20;

/// Summary of one tick sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Live pets advanced and written back this tick.
    pub processed: usize,
    /// Pets whose vitals hit zero this tick.
    pub died: usize,
    /// Pets skipped because their store write failed.
    pub failed: usize,
}

/// The pet simulation engine.
pub struct Engine<S, C = SystemClock> {
    store: S,
    clock: C,
    rng: Mutex<fastrand::Rng>,
}

impl<S: PetStore> Engine<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: PetStore, C: Clock> Engine<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Reseed the engine RNG - deterministic spawns and ticks for tests.
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
            ..self
        }
    }

    /// Direct store access, mainly for harnesses and tests.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn rng(&self) -> MutexGuard<'_, fastrand::Rng> {
        // Generator state survives a poisoning panic intact.
        self.rng.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Create a new live pet for `owner`.
    ///
    /// Fails with `AlreadyOwnsLivePet` while the owner's current pet lives
    /// and with `InvalidName` for an empty or oversized name. When no
    /// pre-rendered sprite is supplied, one is generated from the owner id
    /// and spawn time.
    pub fn spawn(
        &self,
        owner: OwnerId,
        name: &str,
        sprite: Option<String>,
    ) -> Result<PetId, EngineError> {
        let name = name.trim();
        if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
            return Err(EngineError::InvalidName);
        }

        let now = self.clock.now();
        let sprite = sprite.unwrap_or_else(|| {
            crate::pet::sprite::generate(&format!("{}{}", owner.as_str(), now.millis()))
        });

        let pet = {
            let mut rng = self.rng();
            Pet::spawned(owner, name.to_owned(), sprite, now, &mut rng)
        };

        let id = self.store.create_live(pet).map_err(|e| match e {
            StoreError::LiveOwnerConflict => EngineError::AlreadyOwnsLivePet,
            other => EngineError::Store(other),
        })?;
        info!("spawned pet {id} ({name})");
        Ok(id)
    }

    /// Apply a player action to a live pet.
    ///
    /// Missing or dead pets are a silent no-op (`Ok(None)`): clients race
    /// with the tick that kills a pet, and that race is benign.
    pub fn interact(&self, id: PetId, action: Action) -> Result<Option<Pet>, EngineError> {
        let Some(mut pet) = self.store.get(id)? else {
            return Ok(None);
        };
        if !pet.alive {
            return Ok(None);
        }

        let now = self.clock.now();
        let rapid = now.millis_since(pet.last_updated) < RAPID_INTERACT_WINDOW_MS;

        match action {
            Action::Feed => {
                pet.vitals.hunger = (pet.vitals.hunger + FEED_DELTA).min(Vitals::MAX)
            }
            Action::Pet => {
                pet.vitals.happiness = (pet.vitals.happiness + PET_DELTA).min(Vitals::MAX)
            }
            Action::Heal => {
                pet.vitals.health = (pet.vitals.health + HEAL_DELTA).min(Vitals::MAX)
            }
        }

        // Precedence: rapid-fire beats celebration beats the action's own
        // kind. Celebration looks at the vitals after this delta.
        let kind = if rapid {
            AnimationKind::Dance
        } else if pet.vitals.all_at_least(CELEBRATE_THRESHOLD) {
            AnimationKind::Celebrate
        } else {
            action.animation()
        };

        pet.animation = Animation {
            kind,
            started_at: now,
        };
        pet.last_updated = now;
        self.store.update(&pet)?;
        Ok(Some(pet))
    }

    /// Advance every live pet by its own elapsed delta.
    ///
    /// Per-entity isolation: one pet's storage failure is logged and
    /// skipped, the rest of the sweep proceeds.
    pub fn tick(&self) -> Result<TickReport, EngineError> {
        let pets = self.store.list_live()?;
        let now = self.clock.now();
        let mut report = TickReport::default();

        for mut pet in pets {
            let died = {
                let mut rng = self.rng();
                systems::step(&mut pet, now, &mut rng)
            };
            if let Err(e) = self.store.update(&pet) {
                warn!("tick: failed to write pet {} back: {e}", pet.id);
                report.failed += 1;
                continue;
            }
            if died {
                info!("pet {} ({}) has died", pet.id, pet.name);
                report.died += 1;
            }
            report.processed += 1;
        }

        debug!(
            "tick: {} processed, {} died, {} failed",
            report.processed, report.died, report.failed
        );
        Ok(report)
    }

    /// All live pets, for rendering.
    pub fn list_live(&self) -> Result<Vec<Pet>, EngineError> {
        Ok(self.store.list_live()?)
    }

    /// The live pet owned by `owner`, if any.
    pub fn get_by_owner(&self, owner: &OwnerId) -> Result<Option<Pet>, EngineError> {
        Ok(self.store.live_by_owner(owner)?)
    }
}
