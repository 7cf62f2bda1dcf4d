use crate::error::Result;
use crate::recipe::Recipe;
use std::collections::HashMap;

/// The contract every adapter binds to: a concurrency-safe mapping from
/// id to [`Recipe`] with atomic CRUD operations.
///
/// Implementations hand out clones; callers can never mutate stored state
/// through a returned value. Every mutation is visible to all subsequent
/// reads from any thread once the call returns.
pub trait RecipeStore: Send + Sync {
    /// Stores `recipe` under `id`. Fails with `DuplicateId` if the id is
    /// already taken and `InvalidInput` if the id is empty.
    fn add(&self, id: &str, recipe: Recipe) -> Result<()>;

    /// Returns a clone of the recipe stored under `id`, or `NotFound`.
    fn get(&self, id: &str) -> Result<Recipe>;

    /// Returns a detached snapshot of every entry.
    fn list(&self) -> Result<HashMap<String, Recipe>>;

    /// Replaces the value under `id` wholesale, or fails with `NotFound`.
    /// The id itself never changes, even if the new recipe's name differs.
    fn update(&self, id: &str, recipe: Recipe) -> Result<()>;

    /// Deletes the entry under `id`, or fails with `NotFound`.
    fn remove(&self, id: &str) -> Result<()>;
}
