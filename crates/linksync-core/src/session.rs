//! One processing unit: the entry points a render pipeline calls.
//!
//! A [`RewriteSession`] is created per render pass or request and dropped
//! when the unit ends. Rules are resolved lazily on the first rewrite and
//! reused for every link in the unit. When the source is disabled every
//! entry point returns its input untouched without resolving anything.

use std::borrow::Cow;

use crate::cache::ConfigCache;
use crate::link::{rewrite_link, Link};
use crate::markup::rewrite_anchors;
use crate::rules::{EnvLookup, ResolvedConfig, RuleSource};

/// Value handed to the single `alter` hook: rendered markup or a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alterable {
    Markup(String),
    Link(Link),
}

pub struct RewriteSession<'a, S: ?Sized, E> {
    source: &'a S,
    env: E,
    cache: ConfigCache,
}

impl<'a, S, E> RewriteSession<'a, S, E>
where
    S: RuleSource + ?Sized,
    E: EnvLookup,
{
    pub fn new(source: &'a S, env: E) -> Self {
        Self {
            source,
            env,
            cache: ConfigCache::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.source.enabled()
    }

    /// Rules for this unit, resolved on first call.
    pub fn config(&self) -> &ResolvedConfig {
        self.cache.get_or_resolve(self.source, &self.env)
    }

    pub fn rewrite_url(&self, url: &str) -> String {
        if !self.is_enabled() {
            return url.to_string();
        }
        self.config().rewrite_url(url)
    }

    /// Rewrites anchors in `html`; borrows the input when nothing changed.
    pub fn alter_markup<'h>(&self, html: &'h str) -> Cow<'h, str> {
        if !self.is_enabled() {
            return Cow::Borrowed(html);
        }
        let config = self.config();
        let result = rewrite_anchors(html, &config.active_pattern, &config.host_map);
        if result.changed {
            tracing::debug!("rewrote {} link(s) in markup", result.rewritten);
        }
        result.html
    }

    pub fn alter_link(&self, link: Link) -> Link {
        if !self.is_enabled() {
            return link;
        }
        let config = self.config();
        rewrite_link(link, &config.active_pattern, &config.host_map)
    }

    /// Dispatches on the kind of value. Unchanged values are handed back as is.
    pub fn alter(&self, value: Alterable) -> Alterable {
        match value {
            Alterable::Link(link) => Alterable::Link(self.alter_link(link)),
            Alterable::Markup(html) => {
                let rewritten = match self.alter_markup(&html) {
                    Cow::Owned(new_html) => Some(new_html),
                    Cow::Borrowed(_) => None,
                };
                Alterable::Markup(rewritten.unwrap_or(html))
            }
        }
    }

    /// Starts a new unit on the same source, discarding resolved rules.
    pub fn reset(&mut self) {
        self.cache.reset();
    }
}
