use std::collections::BTreeMap;

/// Presentation options carried alongside a link.
///
/// These are applied when the link is rendered and are never inspected by
/// rewriting; they are copied verbatim onto a rewritten link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkOptions {
    pub fragment: Option<String>,
    /// Extra query parameters, in insertion order.
    pub query: Vec<(String, String)>,
    /// HTML attributes for the rendered anchor (`target`, `rel`, `class`, ...).
    pub attributes: BTreeMap<String, String>,
    pub absolute: bool,
    /// Force (`Some(true)`) or forbid (`Some(false)`) https when rendering.
    pub https: Option<bool>,
}

impl LinkOptions {
    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn absolute(mut self, absolute: bool) -> Self {
        self.absolute = absolute;
        self
    }

    pub fn https(mut self, https: bool) -> Self {
        self.https = Some(https);
        self
    }
}
