//! Whitespace normalization and length capping for extracted text.

/// Character budget for extracted text embedded in prompts.
pub const MAX_TEXT_CHARS: usize = 15_000;

/// Marker appended when text is cut at the budget.
pub const TRUNCATION_MARKER: &str = "... [truncated]";

/// Normalize raw extracted text.
///
/// Collapses every whitespace run (including newlines and tabs) to a single
/// space, trims the ends, and caps the result at [`MAX_TEXT_CHARS`]
/// characters with [`TRUNCATION_MARKER`] appended when the cap is exceeded.
/// Applied identically to every source's output so prompt size stays within
/// the model's context budget.
pub fn normalize_extracted(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= MAX_TEXT_CHARS {
        return collapsed;
    }

    let mut capped: String = collapsed.chars().take(MAX_TEXT_CHARS).collect();
    capped.push_str(TRUNCATION_MARKER);
    capped
}
