//! Array and sequence handling: absence lives at the collection level, never
//! inside the elements.

/// First element of a fixed-size numeric array. Every slot is
/// zero-initialized at construction, so there is no absent element to guard
/// against.
pub fn first_element() -> i32 {
    let numbers = [0i32; 5];
    numbers[0]
}

pub fn describe_first_element() -> String {
    format!("First element: {}", first_element())
}

/// Renders one line per item when the collection is present, or a single
/// marker line when the whole collection is absent.
pub fn list_items(items: Option<&[String]>) -> Vec<String> {
    match items {
        Some(items) => items.iter().map(|item| format!("Item: {}", item)).collect(),
        None => vec!["Collection is null".to_string()],
    }
}

/// Substitutes an empty collection for an absent one before iterating, so an
/// absent input simply produces no lines.
pub fn list_items_or_empty(items: Option<Vec<String>>) -> Vec<String> {
    items
        .unwrap_or_default()
        .iter()
        .map(|item| format!("Item: {}", item))
        .collect()
}
