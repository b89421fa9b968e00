//! Environment-aware rewriting of external links.
//!
//! Rules come from two text blocks: conditions that pick a URL pattern from
//! the process environment, and a host map naming which external hosts to
//! rewrite. Links are rewritten either inside rendered HTML ([`markup`]) or as
//! structured values ([`link`]); a [`session::RewriteSession`] ties both to a
//! single processing unit.

pub mod config;
pub mod logging;

pub mod cache;
pub mod link;
pub mod markup;
pub mod rewrite;
pub mod rules;
pub mod session;
pub mod url_parts;

pub use cache::ConfigCache;
pub use config::Settings;
pub use link::{rewrite_link, Link, LinkOptions};
pub use markup::{rewrite_anchors, AnchorRewrite};
pub use rewrite::{rewrite_url, try_rewrite_url, Rewrite, RewriteError, Skip};
pub use rules::{EnvLookup, HostMap, ProcessEnv, ResolvedConfig, RuleSource};
pub use session::{Alterable, RewriteSession};
pub use url_parts::UrlComponents;
