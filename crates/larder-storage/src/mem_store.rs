use larder_core::error::{LarderError, Result};
use larder_core::recipe::Recipe;
use larder_core::store::RecipeStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// The authoritative id→recipe table.
///
/// One `RwLock` guards the whole map: readers (`get`, `list`) share the
/// read lock, every mutation takes the write lock, so check-then-insert
/// in `add` is a single atomic step and no reader can observe half an
/// operation. Operations on the same id are linearized by the lock.
#[derive(Debug, Default)]
pub struct MemStore {
    entries: RwLock<HashMap<String, Recipe>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.read().map(|m| m.contains_key(id)).unwrap_or(false)
    }
}

// A poisoned lock means a panic elsewhere while the guard was held; the
// store itself never panics under the lock, but the failure still has to
// surface as an error rather than a second panic.
fn poisoned<T>(_: T) -> LarderError {
    LarderError::Internal("store lock poisoned".into())
}

impl RecipeStore for MemStore {
    fn add(&self, id: &str, recipe: Recipe) -> Result<()> {
        if id.is_empty() {
            return Err(LarderError::InvalidInput("empty recipe id".into()));
        }
        let mut entries = self.entries.write().map_err(poisoned)?;
        if entries.contains_key(id) {
            return Err(LarderError::DuplicateId(id.into()));
        }
        entries.insert(id.into(), recipe);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Recipe> {
        let entries = self.entries.read().map_err(poisoned)?;
        entries
            .get(id)
            .cloned()
            .ok_or_else(|| LarderError::NotFound(id.into()))
    }

    fn list(&self) -> Result<HashMap<String, Recipe>> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.clone())
    }

    fn update(&self, id: &str, recipe: Recipe) -> Result<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        match entries.get_mut(id) {
            Some(slot) => {
                *slot = recipe;
                Ok(())
            }
            None => Err(LarderError::NotFound(id.into())),
        }
    }

    fn remove(&self, id: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        match entries.remove(id) {
            Some(_) => Ok(()),
            None => Err(LarderError::NotFound(id.into())),
        }
    }
}
