//! Environment variable lookup used to pick the active pattern.

use std::collections::HashMap;

/// Read access to environment variables.
///
/// Rules compare against `var(name).unwrap_or_default()`, so an absent
/// variable behaves like an empty one.
pub trait EnvLookup {
    fn var(&self, name: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).and_then(|v| v.into_string().ok())
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<E: EnvLookup + ?Sized> EnvLookup for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Adapts a closure into an [`EnvLookup`].
pub struct FnEnv<F>(pub F);

impl<F> EnvLookup for FnEnv<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, name: &str) -> Option<String> {
        (self.0)(name)
    }
}

/// Fixed values layered over another lookup. Overrides win.
#[derive(Debug, Clone)]
pub struct Overlay<E> {
    overrides: HashMap<String, String>,
    base: E,
}

impl<E: EnvLookup> Overlay<E> {
    pub fn new(base: E) -> Self {
        Self {
            overrides: HashMap::new(),
            base,
        }
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(name.into(), value.into());
        self
    }
}

impl<E: EnvLookup> EnvLookup for Overlay<E> {
    fn var(&self, name: &str) -> Option<String> {
        self.overrides
            .get(name)
            .cloned()
            .or_else(|| self.base.var(name))
    }
}
