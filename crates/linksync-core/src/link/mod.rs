//! Structured link values and their rewriting.
//!
//! A [`Link`] is either internal (a site path or route) or external (an
//! absolute URI on a foreign host). Only external links are rewrite
//! candidates; the presentation options attached to a link travel with it
//! when it is rebuilt.

mod options;

use thiserror::Error;

use crate::rewrite::{try_rewrite_url, Rewrite};
use crate::rules::HostMap;

pub use options::LinkOptions;

/// URI schemes that address the site itself rather than another host.
const INTERNAL_SCHEMES: &[&str] = &["internal", "base", "route", "entity"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("URI {uri:?} is invalid: {reason}")]
    InvalidUri { uri: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    /// Site-relative link, stored as its `internal:`-style URI.
    Internal { uri: String, options: LinkOptions },
    /// Absolute link to another host.
    External { uri: String, options: LinkOptions },
}

impl Link {
    /// Builds a link from a URI string.
    ///
    /// `internal:`, `base:`, `route:`, and `entity:` URIs are internal.
    /// Absolute URIs (and scheme-relative `//host/...`) are external.
    /// Anything else, including bare paths, is rejected.
    pub fn from_uri(uri: &str) -> Result<Self, LinkError> {
        let invalid = |reason: String| LinkError::InvalidUri {
            uri: uri.to_string(),
            reason,
        };

        if let Some(rest) = uri.strip_prefix("//") {
            url::Url::parse(&format!("http://{rest}")).map_err(|e| invalid(e.to_string()))?;
            return Ok(Link::External {
                uri: uri.to_string(),
                options: LinkOptions::default(),
            });
        }

        let parsed = url::Url::parse(uri).map_err(|e| invalid(e.to_string()))?;
        if INTERNAL_SCHEMES.contains(&parsed.scheme()) {
            Ok(Link::Internal {
                uri: uri.to_string(),
                options: LinkOptions::default(),
            })
        } else {
            Ok(Link::External {
                uri: uri.to_string(),
                options: LinkOptions::default(),
            })
        }
    }

    /// Internal link to a site path such as `/node/1`.
    pub fn internal(path: &str) -> Self {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        Link::Internal {
            uri: format!("internal:{path}"),
            options: LinkOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LinkOptions) -> Self {
        *self.options_mut() = options;
        self
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Link::External { .. })
    }

    /// URI exactly as the link was built from.
    pub fn uri(&self) -> &str {
        match self {
            Link::Internal { uri, .. } | Link::External { uri, .. } => uri,
        }
    }

    pub fn options(&self) -> &LinkOptions {
        match self {
            Link::Internal { options, .. } | Link::External { options, .. } => options,
        }
    }

    pub fn options_mut(&mut self) -> &mut LinkOptions {
        match self {
            Link::Internal { options, .. } | Link::External { options, .. } => options,
        }
    }
}

/// Rewrites an external link; internal links and links no rule applies to
/// are returned as the same value that was passed in.
pub fn rewrite_link(link: Link, active_pattern: &str, host_map: &HostMap) -> Link {
    let Link::External { uri, options } = &link else {
        return link;
    };

    let new_uri = match try_rewrite_url(uri, active_pattern, host_map) {
        Ok(Rewrite::Rewritten(new_uri)) => new_uri,
        Ok(Rewrite::Unchanged(_)) => return link,
        Err(err) => {
            tracing::debug!("leaving link untouched: {}", err);
            return link;
        }
    };

    match Link::from_uri(&new_uri) {
        Ok(rebuilt) => rebuilt.with_options(options.clone()),
        Err(err) => {
            tracing::debug!("rewritten link rejected: {}", err);
            link
        }
    }
}
