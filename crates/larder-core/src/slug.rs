use rslug::slugify;

/// Derives the storage id for a recipe from its display name.
///
/// Lowercase, hyphen-joined: `"Ham and Cheese Toasties"` becomes
/// `"ham-and-cheese-toasties"`. Returns `None` when the name contains
/// nothing sluggable (empty or all punctuation), which adapters reject
/// before the store is ever called.
pub fn recipe_id(name: &str) -> Option<String> {
    let id = slugify!(name.trim()).to_string();
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}
