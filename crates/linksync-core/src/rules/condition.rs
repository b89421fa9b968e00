//! `VAR=VALUE, pattern` rules and active pattern selection.

use serde::Serialize;

use super::env::EnvLookup;
use super::error::{LineError, LineErrorKind};
use super::numbered_lines;

/// One environment condition paired with the URL template it activates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionPattern {
    pub env_var_name: String,
    pub env_var_value: String,
    /// URL template with trailing `/` removed; usually contains `{{hostname}}`.
    pub pattern: String,
}

impl ConditionPattern {
    /// True when the environment holds exactly the expected value.
    pub fn matches<E: EnvLookup + ?Sized>(&self, env: &E) -> bool {
        env.var(&self.env_var_name).unwrap_or_default() == self.env_var_value
    }
}

/// Parses every non-blank line, reporting skipped lines as errors.
pub fn condition_lines(
    raw: &str,
) -> impl Iterator<Item = Result<ConditionPattern, LineError>> + '_ {
    numbered_lines(raw).map(|(line, text)| {
        parse_condition_line(text).map_err(|kind| LineError::new(line, text, kind))
    })
}

fn parse_condition_line(text: &str) -> Result<ConditionPattern, LineErrorKind> {
    let (condition, pattern) = text.split_once(',').ok_or(LineErrorKind::MissingComma)?;
    let (name, value) = condition
        .split_once('=')
        .ok_or(LineErrorKind::MissingEquals)?;

    let name = name.trim();
    let pattern = pattern.trim().trim_end_matches('/');
    if name.is_empty() {
        return Err(LineErrorKind::EmptyVarName);
    }
    if pattern.is_empty() {
        return Err(LineErrorKind::EmptyPattern);
    }

    Ok(ConditionPattern {
        env_var_name: name.to_string(),
        env_var_value: value.trim().to_string(),
        pattern: pattern.to_string(),
    })
}

/// Ordered rule list; malformed lines are omitted.
pub fn parse_condition_patterns(raw: &str) -> Vec<ConditionPattern> {
    condition_lines(raw).filter_map(Result::ok).collect()
}

/// Pattern of the first rule whose condition holds, or `""` when none does.
pub fn select_active_pattern<'a, E: EnvLookup + ?Sized>(
    patterns: &'a [ConditionPattern],
    env: &E,
) -> &'a str {
    patterns
        .iter()
        .find(|p| p.matches(env))
        .map(|p| p.pattern.as_str())
        .unwrap_or("")
}
