//! Markdown character escaping.

/// Characters that receive a backslash prefix in escaped output.
pub const MARKDOWN_ESCAPES: &[char] = &[
    '\\', '`', '*', '_', '{', '}', '[', ']', '(', ')', '#', '+', '-', '.', '!',
];

/// Escape Markdown-sensitive characters in a cell value.
///
/// The input is scanned exactly once, left to right; backslashes inserted
/// here are never themselves escaped again.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if MARKDOWN_ESCAPES.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
