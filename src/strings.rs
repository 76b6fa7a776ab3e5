//! Separator splitting for list-valued text columns

use store_object::StoreError;

/// Split on `separator`, trim each part and drop the empty ones.
/// Blank input is rejected.
pub fn split_for_separator(input: &str, separator: char) -> Result<Vec<String>, StoreError> {
    if input.trim().is_empty() {
        return Err(StoreError::validation("Input to split cannot be empty."));
    }

    Ok(input
        .split(separator)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect())
}

pub fn split_comma_separated(input: &str) -> Result<Vec<String>, StoreError> {
    split_for_separator(input, ',')
}
