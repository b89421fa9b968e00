//! `linksync url <URL>...` – rewrite individual URLs.

use anyhow::Result;
use linksync_core::{EnvLookup, RewriteSession, RuleSource};

pub fn run_url<S, E>(session: &RewriteSession<'_, S, E>, urls: &[String]) -> Result<()>
where
    S: RuleSource + ?Sized,
    E: EnvLookup,
{
    if !session.is_enabled() {
        tracing::info!("rewriting is disabled; printing URLs unchanged");
    }
    for url in urls {
        println!("{}", session.rewrite_url(url));
    }
    Ok(())
}
