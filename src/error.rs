use thiserror::Error;

use crate::store::StoreError;

/// Failures surfaced by the engine operations.
///
/// A missing pet is deliberately never an error: Interact silently no-ops
/// and queries return `None`, since clients race benignly with a tick that
/// kills the pet.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Spawn precondition: the owner's current pet is still alive.
    #[error("owner already has a live pet")]
    AlreadyOwnsLivePet,

    /// Spawn validation: name empty or over 20 characters after trimming.
    #[error("pet name must be 1-20 characters")]
    InvalidName,

    /// Storage-layer failure, propagated as-is. Callers own retry policy.
    #[error(transparent)]
    Store(#[from] StoreError),
}
