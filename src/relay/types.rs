//! Relay request options and upstream response snapshot.

use std::collections::BTreeMap;
use std::time::Duration;

use bytes::Bytes;

/// How the upstream body is decoded before being handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyMode {
    /// Keep the raw bytes untouched.
    Binary,
    /// Decode as text (lossy UTF-8).
    Text,
}

/// Per-call options for an outbound fetch.
#[derive(Debug, Clone)]
pub struct RelayOptions {
    /// Total request timeout.
    pub timeout: Duration,

    /// Redirect budget for the underlying client.
    pub max_redirects: usize,

    /// Body decoding mode.
    pub mode: BodyMode,
}

impl Default for RelayOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(5000),
            max_redirects: 5,
            mode: BodyMode::Text,
        }
    }
}

/// Decoded upstream body.
#[derive(Debug, Clone)]
pub enum RelayBody {
    Binary(Bytes),
    Text(String),
}

impl RelayBody {
    /// Body as raw bytes, regardless of decoding mode.
    pub fn into_bytes(self) -> Bytes {
        match self {
            RelayBody::Binary(bytes) => bytes,
            RelayBody::Text(text) => Bytes::from(text),
        }
    }

    /// Body as text, decoding lossily if it was fetched as binary.
    pub fn into_text(self) -> String {
        match self {
            RelayBody::Binary(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            RelayBody::Text(text) => text,
        }
    }
}

/// Snapshot of one upstream response, taken per invocation and never cached.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    /// Upstream HTTP status code.
    pub status: u16,

    /// Upstream Content-Type header, if present.
    pub content_type: Option<String>,

    /// All upstream headers, stringified.
    pub headers: BTreeMap<String, String>,

    /// Response body, decoded per the requested mode.
    pub body: RelayBody,

    /// Final URL after redirect resolution.
    pub final_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_relay_contract() {
        let options = RelayOptions::default();
        assert_eq!(options.timeout, Duration::from_millis(5000));
        assert_eq!(options.max_redirects, 5);
        assert_eq!(options.mode, BodyMode::Text);
    }

    #[test]
    fn body_converts_between_modes() {
        let text = RelayBody::Text("hello".to_string());
        assert_eq!(&text.into_bytes()[..], b"hello");

        let binary = RelayBody::Binary(Bytes::from_static(b"hello"));
        assert_eq!(binary.into_text(), "hello");

        // Invalid UTF-8 decodes lossily rather than failing.
        let invalid = RelayBody::Binary(Bytes::from_static(&[0xff, 0xfe]));
        assert_eq!(invalid.into_text(), "\u{fffd}\u{fffd}");
    }
}
