// Output formatting: terminal display and JSON rendering.

pub mod terminal;

use anyhow::Result;

use crate::engine::types::AnalysisReport;

/// Width of the score bars drawn in the terminal.
pub const BAR_WIDTH: usize = 20;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..60]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Draw a `[====    ]` bar for a 0-100 score.
pub fn score_bar(score: u32, width: usize) -> String {
    let filled = ((score.min(100) as f64 / 100.0) * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

/// Pretty-printed JSON for a report.
pub fn render_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
