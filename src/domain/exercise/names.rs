//! Ordering of exercise names for pickers.

use std::cmp::Ordering;

/// Compares names the way a user expects to see them listed: letters compare
/// case-insensitively first, then the raw value breaks ties so that
/// "bench press" sorts next to "Bench Press" with a stable result.
pub fn compare_exercise_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Removes exact duplicates and sorts with [`compare_exercise_names`].
pub fn sort_exercise_names(mut names: Vec<String>) -> Vec<String> {
    names.sort_by(|a, b| compare_exercise_names(a, b));
    names.dedup();
    names
}
