//! Response shaping helpers.
//!
//! # Responsibilities
//! - Truncate preview bodies to their fixed character budget
//! - Decode imported catalog bodies the way the client expects them

use serde_json::Value;

/// Take the first `limit` characters of `text`.
///
/// Operates on Unicode scalar values, so a multi-byte character at the
/// boundary is kept whole or dropped, never split.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Decode an imported catalog body.
///
/// JSON bodies import as structured values; everything else imports as the
/// raw string. Either way the full body is passed through untruncated.
pub fn decode_import_data(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
