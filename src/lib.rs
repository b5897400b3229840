//! petworld - server-side virtual-pet world simulation
//!
//! Core modules:
//! - `pet`: the entity model (vitals, animation state, sprite generation)
//! - `engine`: Spawn / Interact / Tick operations and the query surface
//! - `store`: repository seam over the pet collection
//! - `time`: clock seam (epoch-millisecond timestamps)

pub mod engine;
pub mod error;
pub mod pet;
pub mod store;
pub mod time;

pub use engine::{Engine, TickReport};
pub use error::EngineError;
pub use pet::{Action, Animation, AnimationKind, OwnerId, Pet, PetId, Vitals};
pub use store::memory::MemoryStore;
pub use store::{PetStore, StoreError};
pub use time::{Clock, SystemClock, Timestamp};

/// World configuration constants
pub mod consts {
    /// World bounds - positions live in [0, WORLD_SIZE] on each axis.
    pub const WORLD_SIZE: f32 = 84.0;
    /// Fraction of the world used for spawn placement, keeping new pets
    /// off the walls so they don't bounce on their first tick.
    pub const SPAWN_AREA_FRACTION: f32 = 0.84;
    /// Cap on the per-pet elapsed time fed into a single tick (seconds).
    /// Bounds the effect of scheduler gaps and downtime.
    pub const MAX_TICK_DELTA_SECS: f32 = 5.0;
}
