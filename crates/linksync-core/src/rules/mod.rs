//! Rule resolution: raw configuration text to the active pattern and host map.
//!
//! Two text blocks drive rewriting. `condition_pattern` holds one
//! `VAR=VALUE, pattern` rule per line; the first rule whose variable matches
//! the environment supplies the active pattern. `search_replace` holds one
//! `searchHost, replacementToken` pair per line. Malformed lines never fail
//! resolution, they are simply left out (and reported by the `*_lines`
//! iterators for diagnostics).

mod condition;
mod env;
mod error;
mod host_map;

use serde::Serialize;

pub use condition::{condition_lines, parse_condition_patterns, select_active_pattern, ConditionPattern};
pub use env::{EnvLookup, FnEnv, Overlay, ProcessEnv};
pub use error::{LineError, LineErrorKind};
pub use host_map::{host_lines, parse_host_map, HostEntry, HostMap};

/// Placeholder in a pattern replaced by the mapped host token.
pub const HOSTNAME_TOKEN: &str = "{{hostname}}";

/// Where rewrite rules come from.
pub trait RuleSource {
    /// Whether the rewrite hooks run at all.
    fn enabled(&self) -> bool;
    fn condition_pattern(&self) -> &str;
    fn search_replace(&self) -> &str;
}

/// Rules in effect for one processing unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    /// Empty when no condition matched.
    pub active_pattern: String,
    pub host_map: HostMap,
}

impl ResolvedConfig {
    /// Parses both text blocks and selects the pattern for `env`.
    pub fn resolve<S, E>(source: &S, env: &E) -> Self
    where
        S: RuleSource + ?Sized,
        E: EnvLookup + ?Sized,
    {
        let patterns = parse_condition_patterns(source.condition_pattern().trim());
        let active_pattern = select_active_pattern(&patterns, env).to_string();
        let host_map = parse_host_map(source.search_replace().trim());

        tracing::debug!(
            "resolved link rules: {} condition(s), {} host mapping(s), active pattern {:?}",
            patterns.len(),
            host_map.len(),
            active_pattern
        );

        Self {
            active_pattern,
            host_map,
        }
    }

    /// False when either the pattern or the host map is empty.
    pub fn is_active(&self) -> bool {
        !self.active_pattern.is_empty() && !self.host_map.is_empty()
    }

    /// Rewrites one URL with these rules. See [`crate::rewrite::rewrite_url`].
    pub fn rewrite_url(&self, url: &str) -> String {
        crate::rewrite::rewrite_url(url, &self.active_pattern, &self.host_map)
    }
}

/// Non-blank lines of `raw` with their 1-based line numbers.
fn numbered_lines(raw: &str) -> impl Iterator<Item = (usize, &str)> {
    raw.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}
