use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{PetStore, StoreError};
use crate::pet::{OwnerId, Pet, PetId};

/// In-memory pet store - a locked map plus an id counter.
///
/// Writes serialize on the lock, which is what makes the owner-uniqueness
/// check-and-insert in `create_live` atomic under concurrent spawns.
#[derive(Debug)]
pub struct MemoryStore {
    pets: RwLock<HashMap<PetId, Pet>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            pets: RwLock::new(HashMap::new()),
            // Ids start at 1; 0 is the unassigned placeholder.
            next_id: AtomicU64::new(1),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<PetId, Pet>>, StoreError> {
        self.pets
            .read()
            .map_err(|_| StoreError::Backend("pet table lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<PetId, Pet>>, StoreError> {
        self.pets
            .write()
            .map_err(|_| StoreError::Backend("pet table lock poisoned".into()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PetStore for MemoryStore {
    fn create_live(&self, mut pet: Pet) -> Result<PetId, StoreError> {
        let mut pets = self.write()?;
        if pets.values().any(|p| p.alive && p.owner == pet.owner) {
            return Err(StoreError::LiveOwnerConflict);
        }
        let id = PetId::from_raw(self.next_id.fetch_add(1, Ordering::Relaxed));
        pet.id = id;
        pets.insert(id, pet);
        Ok(id)
    }

    fn get(&self, id: PetId) -> Result<Option<Pet>, StoreError> {
        Ok(self.read()?.get(&id).cloned())
    }

    fn update(&self, pet: &Pet) -> Result<(), StoreError> {
        let mut pets = self.write()?;
        if let Some(slot) = pets.get_mut(&pet.id) {
            *slot = pet.clone();
        }
        Ok(())
    }

    fn list_live(&self) -> Result<Vec<Pet>, StoreError> {
        Ok(self.read()?.values().filter(|p| p.alive).cloned().collect())
    }

    fn live_by_owner(&self, owner: &OwnerId) -> Result<Option<Pet>, StoreError> {
        Ok(self
            .read()?
            .values()
            .find(|p| p.alive && &p.owner == owner)
            .cloned())
    }
}
