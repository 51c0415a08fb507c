//! Batch input parsing
//!
//! A batch is free text holding several names separated by commas or
//! newlines, e.g. pasted from a spreadsheet column.

/// Fewest names accepted in one batch
pub const BATCH_MIN: usize = 3;

/// Most names accepted in one batch
pub const BATCH_MAX: usize = 10;

/// Split raw batch text into trimmed, non-empty names.
///
/// Separators are `,`, `\n` and `\r\n`. Order is preserved and repeated
/// names inside the batch are kept.
pub fn parse_batch(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Check whether a parsed batch has an acceptable size
pub fn is_batch_size_valid(count: usize) -> bool {
    (BATCH_MIN..=BATCH_MAX).contains(&count)
}
