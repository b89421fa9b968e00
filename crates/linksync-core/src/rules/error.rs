//! Error types for rule-line parsing.

use std::fmt;

/// A configuration line that was skipped, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    pub line: usize,
    pub text: String,
    pub kind: LineErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineErrorKind {
    /// No `,` separating the two halves of the line.
    MissingComma,
    /// Condition half has no `=` between variable name and value.
    MissingEquals,
    /// Environment variable name is blank.
    EmptyVarName,
    /// Pattern is blank once trailing slashes are removed.
    EmptyPattern,
    /// Search host is blank.
    EmptySearch,
}

impl LineError {
    pub(super) fn new(line: usize, text: &str, kind: LineErrorKind) -> Self {
        Self {
            line,
            text: text.trim().to_string(),
            kind,
        }
    }
}

impl fmt::Display for LineErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            LineErrorKind::MissingComma => "expected a comma between the two fields",
            LineErrorKind::MissingEquals => "expected NAME=VALUE before the comma",
            LineErrorKind::EmptyVarName => "environment variable name is empty",
            LineErrorKind::EmptyPattern => "pattern is empty",
            LineErrorKind::EmptySearch => "search host is empty",
        };
        f.write_str(msg)
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({:?})", self.line, self.kind, self.text)
    }
}

impl std::error::Error for LineError {}
