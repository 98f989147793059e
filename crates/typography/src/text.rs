//! String-level typography for text that never lives in a document tree:
//! comment bodies, feed summaries, article previews.

use crate::rules::default_rules;

const ELLIPSIS: char = '\u{2026}';

/// Apply the built-in rule table to a plain string.
pub fn typogrify(text: &str) -> String {
    default_rules().apply(text)
}

/// At most `max_chars` characters from the start of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        None => text,
        Some((idx, _)) => &text[..idx],
    }
}

/// A typografied preview of `text`, cut to `max_chars` characters. When the
/// result still reaches the limit an ellipsis is appended to mark the cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut out = typogrify(truncate_chars(text, max_chars));
    if out.chars().count() >= max_chars {
        out.push(ELLIPSIS);
    }
    out
}
