//! `linksync check` – report configuration lines that are ignored.

use anyhow::{bail, Result};
use linksync_core::config::Settings;
use linksync_core::rules::{condition_lines, host_lines, HOSTNAME_TOKEN};

pub fn run_check(settings: &Settings) -> Result<()> {
    let mut problems = 0usize;

    println!("condition_pattern:");
    for entry in condition_lines(&settings.condition_pattern) {
        match entry {
            Ok(rule) if !rule.pattern.contains(HOSTNAME_TOKEN) => {
                println!(
                    "  warning: {}={} pattern {:?} has no {} placeholder",
                    rule.env_var_name, rule.env_var_value, rule.pattern, HOSTNAME_TOKEN
                );
            }
            Ok(_) => {}
            Err(err) => {
                problems += 1;
                println!("  {err}");
            }
        }
    }

    println!("search_replace:");
    for entry in host_lines(&settings.search_replace) {
        if let Err(err) = entry {
            problems += 1;
            println!("  {err}");
        }
    }

    if problems > 0 {
        bail!("{problems} malformed line(s) will be ignored");
    }
    println!("ok");
    Ok(())
}
