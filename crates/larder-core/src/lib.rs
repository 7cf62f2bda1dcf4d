pub mod error;
pub mod recipe;
pub mod slug;
pub mod store;

pub use error::{LarderError, Result};
pub use recipe::{Ingredient, Recipe};
pub use slug::recipe_id;
pub use store::RecipeStore;
