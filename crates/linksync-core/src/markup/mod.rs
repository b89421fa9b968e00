//! Anchor rewriting in rendered markup.
//!
//! Every `<a href>` is passed through [`crate::rewrite::try_rewrite_url`].
//! The tree is serialized again only when at least one `href` changed;
//! otherwise the caller gets back the exact input string.

mod tree;

use std::borrow::Cow;

use thiserror::Error;

use crate::rewrite::{try_rewrite_url, Rewrite};
use crate::rules::HostMap;

pub use tree::{HtmlTree, MarkupTree};

#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("markup could not be parsed: {0}")]
    Parse(String),
    #[error("parsed fragment has no root element")]
    MissingRoot,
    #[error("serializing markup failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialized markup is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result of rewriting the anchors in one piece of markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorRewrite<'a> {
    /// Borrowed input when nothing changed, reserialized markup otherwise.
    pub html: Cow<'a, str>,
    pub changed: bool,
    /// Number of `href` attributes that were rewritten.
    pub rewritten: usize,
}

impl<'a> AnchorRewrite<'a> {
    fn unchanged(html: &'a str) -> Self {
        Self {
            html: Cow::Borrowed(html),
            changed: false,
            rewritten: 0,
        }
    }

    pub fn into_string(self) -> String {
        self.html.into_owned()
    }
}

/// Rewrites anchors using tree implementation `T`, surfacing markup errors.
///
/// Individual malformed `href` values are skipped, not reported.
pub fn try_rewrite_anchors<'a, T: MarkupTree>(
    html: &'a str,
    active_pattern: &str,
    host_map: &HostMap,
) -> Result<AnchorRewrite<'a>, MarkupError> {
    if active_pattern.is_empty() || host_map.is_empty() {
        return Ok(AnchorRewrite::unchanged(html));
    }

    let mut tree = T::parse(html)?;
    let mut rewritten = 0;
    for anchor in tree.select("a", "href") {
        let Some(href) = tree.attribute(&anchor, "href") else {
            continue;
        };
        match try_rewrite_url(&href, active_pattern, host_map) {
            Ok(Rewrite::Rewritten(new_href)) => {
                tracing::trace!("rewriting href {} -> {}", href, new_href);
                tree.set_attribute(&anchor, "href", &new_href);
                rewritten += 1;
            }
            Ok(Rewrite::Unchanged(_)) => {}
            Err(err) => tracing::debug!("skipping href: {}", err),
        }
    }

    if rewritten == 0 {
        return Ok(AnchorRewrite::unchanged(html));
    }
    Ok(AnchorRewrite {
        html: Cow::Owned(tree.serialize()?),
        changed: true,
        rewritten,
    })
}

/// Rewrites anchors in an HTML document or fragment.
///
/// Never fails: if the markup cannot be handled the input is returned
/// unchanged with `changed == false`.
pub fn rewrite_anchors<'a>(
    html: &'a str,
    active_pattern: &str,
    host_map: &HostMap,
) -> AnchorRewrite<'a> {
    match try_rewrite_anchors::<HtmlTree>(html, active_pattern, host_map) {
        Ok(result) => result,
        Err(err) => {
            tracing::debug!("leaving markup untouched: {}", err);
            AnchorRewrite::unchanged(html)
        }
    }
}
