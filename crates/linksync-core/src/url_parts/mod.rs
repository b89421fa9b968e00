//! URL components codec.
//!
//! Splits a URL string into optional typed parts and rebuilds a string from
//! them in a fixed order. Only components that were actually present in the
//! input are reported, so a partial URL can be overlaid onto a full one.

mod error;
mod parse;

use std::fmt;

pub use error::UrlParseError;
pub use parse::parse_url;

/// Parts of a URL. Every field is optional; empty values are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlComponents {
    pub scheme: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl UrlComponents {
    /// Parses `input`. See [`parse_url`].
    pub fn parse(input: &str) -> Result<Self, UrlParseError> {
        parse_url(input)
    }

    /// Host, if the URL is absolute (`scheme://host` or `//host`).
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Overrides every field of `self` that is present in `overlay`.
    ///
    /// Fields absent from `overlay` keep their current value, so a pattern
    /// like `https://mirror.example` swaps scheme and host while path, query,
    /// and fragment survive.
    pub fn overlay(&mut self, overlay: UrlComponents) {
        fn take<T>(dst: &mut Option<T>, src: Option<T>) {
            if src.is_some() {
                *dst = src;
            }
        }
        take(&mut self.scheme, overlay.scheme);
        take(&mut self.user, overlay.user);
        take(&mut self.password, overlay.password);
        take(&mut self.host, overlay.host);
        take(&mut self.port, overlay.port);
        take(&mut self.path, overlay.path);
        take(&mut self.query, overlay.query);
        take(&mut self.fragment, overlay.fragment);
    }

    /// Rebuilds the URL string:
    /// `scheme:` `//[user[:password]@]host[:port]` `path` `?query` `#fragment`.
    ///
    /// Credentials and port are only emitted together with a host.
    pub fn build(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for UrlComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }
        if let Some(host) = &self.host {
            f.write_str("//")?;
            if let Some(user) = &self.user {
                f.write_str(user)?;
                if let Some(password) = &self.password {
                    write!(f, ":{password}")?;
                }
                f.write_str("@")?;
            }
            f.write_str(host)?;
            if let Some(port) = self.port {
                write!(f, ":{port}")?;
            }
        }
        if let Some(path) = &self.path {
            f.write_str(path)?;
        }
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}
