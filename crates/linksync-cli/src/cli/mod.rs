//! CLI for previewing and applying linksync rules.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use linksync_core::config::{self, Settings};
use linksync_core::rules::Overlay;
use linksync_core::{ProcessEnv, RewriteSession};
use std::path::{Path, PathBuf};

use commands::{run_check, run_completions, run_html, run_show, run_url};

/// Top-level CLI for linksync.
#[derive(Debug, Parser)]
#[command(name = "linksync")]
#[command(about = "linksync: rewrite external links for the current environment", long_about = None)]
pub struct Cli {
    /// Settings file to use instead of ~/.config/linksync/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Pretend an environment variable has this value while matching rules. Repeatable.
    #[arg(long = "env", global = true, value_name = "NAME=VALUE", value_parser = parse_env_pair)]
    pub env: Vec<(String, String)>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Rewrite one or more URLs and print the results, one per line.
    Url {
        /// URLs to rewrite.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Rewrite anchor hrefs in an HTML file (or stdin) and print the markup.
    Html {
        /// HTML file; omit or pass `-` to read stdin.
        path: Option<PathBuf>,
    },

    /// Show the active pattern and host map for the current environment.
    Show {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Report malformed lines in the settings file.
    Check,

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Url { urls } => {
                let settings = load_settings(cli.config.as_deref())?;
                run_url(&session(&settings, cli.env), &urls)
            }
            CliCommand::Html { path } => {
                let settings = load_settings(cli.config.as_deref())?;
                run_html(&session(&settings, cli.env), path.as_deref())
            }
            CliCommand::Show { json } => {
                let settings = load_settings(cli.config.as_deref())?;
                run_show(&session(&settings, cli.env), json)
            }
            CliCommand::Check => run_check(&load_settings(cli.config.as_deref())?),
            CliCommand::Completions { shell } => run_completions(shell),
        }
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let settings = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_init().context("loading default settings")?,
    };
    tracing::debug!("loaded settings: {:?}", settings);
    Ok(settings)
}

fn session(
    settings: &Settings,
    overrides: Vec<(String, String)>,
) -> RewriteSession<'_, Settings, Overlay<ProcessEnv>> {
    let env = overrides
        .into_iter()
        .fold(Overlay::new(ProcessEnv), |env, (name, value)| env.set(name, value));
    RewriteSession::new(settings, env)
}

fn parse_env_pair(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got {raw:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty variable name in {raw:?}"));
    }
    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests;
