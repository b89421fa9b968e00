//! Error type for URL component parsing.

use thiserror::Error;

/// Reasons a string could not be split into URL components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlParseError {
    /// `scheme://` or `//` was present but nothing usable followed it.
    #[error("authority is present but the host is empty")]
    EmptyHost,
    /// Port was not a decimal number in `0..=65535`.
    #[error("invalid port {0:?}")]
    InvalidPort(String),
    /// Host contains whitespace, control characters, or URL delimiters.
    #[error("invalid character {ch:?} in host {host:?}")]
    InvalidHostChar { host: String, ch: char },
    /// IPv6 literal opened with `[` but never closed.
    #[error("unterminated IPv6 literal in {0:?}")]
    UnterminatedIpv6(String),
}
