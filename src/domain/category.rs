/// A category name is usable when it has at least one non-whitespace character.
/// The name is stored exactly as given.
pub fn is_valid_category_name(name: &str) -> bool {
    !name.trim().is_empty()
}
