pub mod items;
pub mod orders;

mod fields;

/// A query parameter counts as given only when it is present and non-empty.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn invalid_query(key: &str, value: &str, expected: &str) -> crate::error::AppError {
    crate::error::AppError::Validation(format!(
        "Invalid query: {key} '{value}' is not {expected}"
    ))
}
