//! Repository seam over the pet collection.
//!
//! Spawn, Interact, and Tick are written against this trait so an
//! in-memory store serves tests and demos while a durable document store
//! serves production, without touching engine logic.

pub mod memory;

use thiserror::Error;

use crate::pet::{OwnerId, Pet, PetId};

/// Storage failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `create_live` found an existing live pet for the same owner.
    #[error("owner already has a live pet")]
    LiveOwnerConflict,

    /// Backend failure (I/O, connection loss, ...). The in-memory store
    /// never emits this; durable implementations map their transport
    /// errors here.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Repository over the pet collection.
pub trait PetStore: Send + Sync {
    /// Insert a new live pet and return its freshly assigned id.
    ///
    /// Must enforce, atomically with the insert, that the owner has no
    /// other live pet (`LiveOwnerConflict`). The invariant has to hold
    /// under concurrent calls for the same owner. The id on the passed
    /// record is ignored.
    fn create_live(&self, pet: Pet) -> Result<PetId, StoreError>;

    /// Fetch a pet by id.
    fn get(&self, id: PetId) -> Result<Option<Pet>, StoreError>;

    /// Write a pet record back by id. Unknown ids are ignored - records
    /// are never deleted, so this only happens for foreign records.
    fn update(&self, pet: &Pet) -> Result<(), StoreError>;

    /// All live pets, for rendering and the tick sweep.
    fn list_live(&self) -> Result<Vec<Pet>, StoreError>;

    /// The live pet owned by `owner`, if any.
    fn live_by_owner(&self, owner: &OwnerId) -> Result<Option<Pet>, StoreError>;
}
