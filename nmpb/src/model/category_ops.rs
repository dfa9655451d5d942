use super::EmissionError;
use itertools::Itertools;
use std::fmt::Display;

/// puts a category name into the canonical snake_case form used for matching,
/// so that "Pulsed Accelerated", "pulsed-accelerated" and "pulsed_accelerated"
/// all compare equal.
pub fn normalize(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|s| !s.is_empty())
        .join("_")
}

/// builds the error for a category value that is not in its enumerated set.
pub fn invalid_category<T: Display>(
    category: &'static str,
    value: &str,
    options: &[T],
) -> EmissionError {
    EmissionError::InvalidCategory {
        category,
        value: value.to_string(),
        expected: options.iter().join(", "),
    }
}
