//! `linksync show` – print the rules in effect for this environment.

use anyhow::Result;
use linksync_core::{EnvLookup, RewriteSession, RuleSource};

pub fn run_show<S, E>(session: &RewriteSession<'_, S, E>, json: bool) -> Result<()>
where
    S: RuleSource + ?Sized,
    E: EnvLookup,
{
    let config = session.config();

    if json {
        let value = serde_json::json!({
            "enabled": session.is_enabled(),
            "active_pattern": config.active_pattern,
            "host_map": config.host_map,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("enabled:        {}", session.is_enabled());
    if config.active_pattern.is_empty() {
        println!("active pattern: (none; no condition matches this environment)");
    } else {
        println!("active pattern: {}", config.active_pattern);
    }
    if config.host_map.is_empty() {
        println!("host map:       (empty)");
    } else {
        println!("host map:");
        println!("  {:<32} {}", "SEARCH", "REPLACE");
        for (search, replace) in config.host_map.iter() {
            println!("  {:<32} {}", search, replace);
        }
    }
    Ok(())
}
