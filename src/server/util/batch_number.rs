//! Batch number formatting.
//!
//! Batch numbers are zero-padded decimal sequences scoped to a (bread type, shift) pair:
//! `"001"`, `"002"`, ... Numbers beyond 999 simply grow a fourth digit.

/// Width batch numbers are zero-padded to
pub const BATCH_NUMBER_WIDTH: usize = 3;

/// Sequence value following `last`, starting at 1.
///
/// Only the trailing run of ASCII digits is considered, so legacy numbers with a prefix
/// such as `"B-012"` still continue their sequence. A missing, non-numeric or
/// unparsable suffix restarts the sequence at 1 rather than failing.
pub fn next_sequence(last: Option<&str>) -> u32 {
    last.and_then(trailing_number)
        .map(|number| number.saturating_add(1))
        .unwrap_or(1)
}

/// Zero-padded batch number following `last`.
///
/// # Example
/// ```ignore
/// assert_eq!(next_batch_number(None), "001");
/// assert_eq!(next_batch_number(Some("007")), "008");
/// ```
pub fn next_batch_number(last: Option<&str>) -> String {
    format_batch_number(next_sequence(last))
}

pub fn format_batch_number(sequence: u32) -> String {
    format!("{:0width$}", sequence, width = BATCH_NUMBER_WIDTH)
}

fn trailing_number(batch_number: &str) -> Option<u32> {
    let trimmed = batch_number.trim();
    let digits_start = trimmed
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(index, _)| index)?;

    trimmed[digits_start..].parse::<u32>().ok()
}
