// src/render/classify.rs
use crate::config::consts::NO_CLASS;
use crate::core::sanitize::strip_digits;

/// Short lowercase label for a cell, e.g. `"Roll No. 1234"` → `"roll-no."`.
///
/// Digits are dropped, the first two remaining words are joined with `-`.
/// Cells with no words left map to `"no-class"`.
pub fn classify(cell: &str) -> String {
    let stripped = strip_digits(cell);
    let words: Vec<&str> = stripped.split_whitespace().take(2).collect();
    if words.is_empty() {
        return s!(NO_CLASS);
    }
    words.join("-").to_lowercase()
}
