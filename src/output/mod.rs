// Output formatting: terminal dashboard and markdown report.

pub mod markdown;
pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Headlines and article text routinely carry curly quotes and accented
/// names, so this counts characters rather than slicing bytes.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{truncated}...")
}
