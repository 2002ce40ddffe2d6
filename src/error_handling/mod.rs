//! Error taxonomy and categorization.
//!
//! Failures inside the engine fall into four categories: transport errors
//! (timeout, DNS failure, connection refused, TLS failure), parse errors
//! (malformed JSON/XML/HTML), validation errors (unparseable URLs met during
//! traversal), and systemic errors (a whole sub-operation could not produce
//! data, e.g. neither protocol reachable). None of them abort a lookup;
//! sub-operations convert them into per-service error entries and return
//! best-effort partial results.

use thiserror::Error;

/// Error types produced by the engine's sub-operations.
#[derive(Error, Debug)]
pub enum ReconError {
    /// Network-level failure: timeout, DNS, connect, or TLS error.
    #[error("transport error: {0}")]
    Transport(String),

    /// A third-party response could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// An upstream service answered with a non-success status.
    #[error("unexpected status: HTTP {0}")]
    Status(u16),

    /// A whole sub-operation produced no data (e.g. target unreachable
    /// over both protocols).
    #[error("{0}")]
    Systemic(String),
}

/// Categorizes a `reqwest::Error` into a `ReconError`.
///
/// HTTP status errors keep their status code; everything else is a
/// transport failure with a short human-readable cause.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ReconError {
    if let Some(status) = error.status() {
        return ReconError::Status(status.as_u16());
    }

    let cause = if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        format!("connection failed: {error}")
    } else if error.is_redirect() {
        "redirect policy exhausted".to_string()
    } else if error.is_body() || error.is_decode() {
        return ReconError::Parse(error.to_string());
    } else {
        error.to_string()
    };

    ReconError::Transport(cause)
}
