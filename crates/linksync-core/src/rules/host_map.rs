//! `searchHost, replacementToken` lines.

use std::collections::BTreeMap;

use serde::Serialize;

use super::error::{LineError, LineErrorKind};
use super::numbered_lines;

/// Source host to the token substituted for `{{hostname}}`.
///
/// Keys are matched case-sensitively, exactly as written in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HostMap(BTreeMap<String, String>);

impl HostMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a mapping, replacing (and returning) any earlier value for `search`.
    pub fn insert(&mut self, search: impl Into<String>, replace: impl Into<String>) -> Option<String> {
        self.0.insert(search.into(), replace.into())
    }

    pub fn get(&self, host: &str) -> Option<&str> {
        self.0.get(host).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HostMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HostMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// One parsed `search, replace` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub search: String,
    pub replace: String,
}

/// Parses every non-blank line, reporting skipped lines as errors.
pub fn host_lines(raw: &str) -> impl Iterator<Item = Result<HostEntry, LineError>> + '_ {
    numbered_lines(raw).map(|(line, text)| {
        parse_host_line(text).map_err(|kind| LineError::new(line, text, kind))
    })
}

fn parse_host_line(text: &str) -> Result<HostEntry, LineErrorKind> {
    let (search, replace) = text.split_once(',').ok_or(LineErrorKind::MissingComma)?;
    let search = search.trim();
    if search.is_empty() {
        return Err(LineErrorKind::EmptySearch);
    }
    Ok(HostEntry {
        search: search.to_string(),
        replace: replace.trim().to_string(),
    })
}

/// Host map built from `raw`; later lines overwrite earlier ones with the same key.
pub fn parse_host_map(raw: &str) -> HostMap {
    host_lines(raw)
        .filter_map(Result::ok)
        .map(|e| (e.search, e.replace))
        .collect()
}
