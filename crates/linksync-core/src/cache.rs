//! Per-processing-unit memo of resolved rules.
//!
//! A cache belongs to exactly one render pass or request. It is not `Sync`,
//! so concurrent units cannot share one; create a new cache (or `reset`)
//! at every unit boundary.

use std::cell::OnceCell;

use crate::rules::{EnvLookup, ResolvedConfig, RuleSource};

#[derive(Debug, Default)]
pub struct ConfigCache {
    resolved: OnceCell<ResolvedConfig>,
}

impl ConfigCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved rules, parsing `source` on first use only.
    pub fn get_or_resolve<S, E>(&self, source: &S, env: &E) -> &ResolvedConfig
    where
        S: RuleSource + ?Sized,
        E: EnvLookup + ?Sized,
    {
        self.resolved
            .get_or_init(|| ResolvedConfig::resolve(source, env))
    }

    /// Rules already resolved in this unit, if any.
    pub fn get(&self) -> Option<&ResolvedConfig> {
        self.resolved.get()
    }

    /// Drops the memoized rules so the next lookup resolves again.
    pub fn reset(&mut self) {
        self.resolved.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    struct CountingSource {
        condition_pattern: String,
        search_replace: String,
        reads: Cell<usize>,
    }

    impl RuleSource for CountingSource {
        fn enabled(&self) -> bool {
            true
        }
        fn condition_pattern(&self) -> &str {
            self.reads.set(self.reads.get() + 1);
            &self.condition_pattern
        }
        fn search_replace(&self) -> &str {
            &self.search_replace
        }
    }

    fn source() -> CountingSource {
        CountingSource {
            condition_pattern: "A=1, https://{{hostname}}".into(),
            search_replace: "a.com, b.com".into(),
            reads: Cell::new(0),
        }
    }

    #[test]
    fn resolves_once_per_unit() {
        let src = source();
        let env: HashMap<String, String> = [("A".to_string(), "1".to_string())].into();
        let cache = ConfigCache::new();
        assert!(cache.get().is_none());

        for _ in 0..5 {
            assert_eq!(cache.get_or_resolve(&src, &env).active_pattern, "https://{{hostname}}");
        }
        assert_eq!(src.reads.get(), 1);
    }

    #[test]
    fn reset_forgets_previous_unit() {
        let src = source();
        let mut cache = ConfigCache::new();

        let env: HashMap<String, String> = [("A".to_string(), "1".to_string())].into();
        assert!(cache.get_or_resolve(&src, &env).is_active());

        cache.reset();
        assert!(cache.get().is_none());

        let env: HashMap<String, String> = HashMap::new();
        assert!(!cache.get_or_resolve(&src, &env).is_active());
        assert_eq!(src.reads.get(), 2);
    }
}
