//! Single URL rewriting.
//!
//! An absolute http(s) URL whose host appears in the host map is rebuilt
//! from the active pattern: `{{hostname}}` is replaced by the mapped token,
//! the result is parsed, and every component it defines overrides the
//! original. Components the pattern leaves out (typically path, query, and
//! fragment) are kept from the original URL.

mod outcome;

pub use outcome::{Rewrite, RewriteError, Skip};

use crate::rules::{HostMap, HOSTNAME_TOKEN};
use crate::url_parts::UrlComponents;

/// Decides whether and how `url` is rewritten.
pub fn try_rewrite_url(
    url: &str,
    active_pattern: &str,
    host_map: &HostMap,
) -> Result<Rewrite, RewriteError> {
    if active_pattern.is_empty() {
        return Ok(Rewrite::Unchanged(Skip::NoActivePattern));
    }
    if host_map.is_empty() {
        return Ok(Rewrite::Unchanged(Skip::EmptyHostMap));
    }

    let mut parts = UrlComponents::parse(url).map_err(|source| RewriteError::MalformedUrl {
        url: url.to_string(),
        source,
    })?;

    let Some(host) = parts.host() else {
        return Ok(Rewrite::Unchanged(Skip::NoHost));
    };
    if !is_web_scheme(parts.scheme.as_deref()) {
        return Ok(Rewrite::Unchanged(Skip::UnsupportedScheme));
    }
    let Some(token) = host_map.get(host) else {
        return Ok(Rewrite::Unchanged(Skip::HostNotMapped));
    };

    let replacement = active_pattern.replace(HOSTNAME_TOKEN, token);
    let overlay = UrlComponents::parse(&replacement).map_err(|source| {
        RewriteError::MalformedReplacement {
            replacement: replacement.clone(),
            source,
        }
    })?;
    parts.overlay(overlay);

    let rebuilt = parts.build();
    if rebuilt == url {
        Ok(Rewrite::Unchanged(Skip::Identical))
    } else {
        Ok(Rewrite::Rewritten(rebuilt))
    }
}

/// Rewritten URL, or `url` itself when no rule applies or anything is malformed.
pub fn rewrite_url(url: &str, active_pattern: &str, host_map: &HostMap) -> String {
    match try_rewrite_url(url, active_pattern, host_map) {
        Ok(Rewrite::Rewritten(new_url)) => new_url,
        Ok(Rewrite::Unchanged(_)) => url.to_string(),
        Err(err) => {
            tracing::debug!("leaving URL untouched: {}", err);
            url.to_string()
        }
    }
}

fn is_web_scheme(scheme: Option<&str>) -> bool {
    match scheme {
        None => true,
        Some(s) => s.eq_ignore_ascii_case("http") || s.eq_ignore_ascii_case("https"),
    }
}
