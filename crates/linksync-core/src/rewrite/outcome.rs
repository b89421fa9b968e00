//! Result types for a single URL rewrite decision.

use thiserror::Error;

use crate::url_parts::UrlParseError;

/// What happened to a URL that was not malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// New URL, guaranteed to differ from the input.
    Rewritten(String),
    /// No rule applied; the input stands.
    Unchanged(Skip),
}

impl Rewrite {
    pub fn is_rewritten(&self) -> bool {
        matches!(self, Rewrite::Rewritten(_))
    }
}

/// Why a well-formed URL was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    NoActivePattern,
    EmptyHostMap,
    /// Relative or otherwise host-less URL.
    NoHost,
    /// Absolute URL with a scheme other than http(s).
    UnsupportedScheme,
    HostNotMapped,
    /// Applying the rule reproduced the input exactly.
    Identical,
}

/// Input URL or the pattern-derived replacement could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    #[error("malformed URL {url:?}: {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: UrlParseError,
    },
    #[error("pattern produced malformed URL {replacement:?}: {source}")]
    MalformedReplacement {
        replacement: String,
        #[source]
        source: UrlParseError,
    },
}
