//! `linksync html [PATH]` – rewrite anchors in a document.

use anyhow::{Context, Result};
use linksync_core::{EnvLookup, RewriteSession, RuleSource};
use std::borrow::Cow;
use std::io::{self, Read, Write};
use std::path::Path;

pub fn run_html<S, E>(session: &RewriteSession<'_, S, E>, path: Option<&Path>) -> Result<()>
where
    S: RuleSource + ?Sized,
    E: EnvLookup,
{
    let input = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("reading {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading HTML from stdin")?;
            buf
        }
    };

    let output = session.alter_markup(&input);
    match &output {
        Cow::Borrowed(_) => tracing::info!("no links rewritten"),
        Cow::Owned(_) => tracing::info!("links rewritten"),
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
