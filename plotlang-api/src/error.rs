//! API error types
//!
//! Wraps the core parse errors and adds the transport-level failures,
//! plus a structured report format for CLI and machine consumers.

use plotlang_config::Phase;
use plotlang_core::{ParseError, Token};
use thiserror::Error;

/// Plotlang error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    /// Lexing, parsing or evaluation failure
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// Command longer than the configured maximum
    #[error("command is {len} characters, limit is {limit}")]
    CommandTooLong { len: usize, limit: usize },

    /// Blank input
    #[error("empty command")]
    EmptyCommand,
}

impl PlotError {
    /// Pipeline phase the failure belongs to
    pub fn phase(&self) -> Phase {
        match self {
            PlotError::Parse(ParseError::Lexical { .. }) => Phase::Lexer,
            PlotError::Parse(_) => Phase::Parser,
            PlotError::CommandTooLong { .. } | PlotError::EmptyCommand => Phase::Session,
        }
    }

    /// Token index the error points at, when one applies
    pub fn position(&self) -> Option<usize> {
        match self {
            PlotError::Parse(e) => e.position(),
            _ => None,
        }
    }

    /// Convert to a structured error report.
    ///
    /// `tokens` is the sequence the parser was consuming; when the error
    /// carries a position, the report includes a marker line with `!`
    /// inserted after the tokens that were accepted.
    pub fn to_report(&self, tokens: &[Token]) -> ErrorReport {
        ErrorReport {
            phase: self.phase().as_str(),
            position: self.position(),
            error_kind: self.kind_name(),
            message: self.to_string(),
            marker: self.position().map(|at| marker_line(tokens, at)),
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            PlotError::Parse(ParseError::Lexical { .. }) => "Lexical",
            PlotError::Parse(ParseError::Unrecognized { .. }) => "Unrecognized",
            PlotError::Parse(ParseError::UnexpectedToken { .. }) => "UnexpectedToken",
            PlotError::Parse(ParseError::UnexpectedEnd { .. }) => "UnexpectedEnd",
            PlotError::Parse(ParseError::DegenerateRange { .. }) => "DegenerateRange",
            PlotError::Parse(ParseError::SampleBudget { .. }) => "SampleBudget",
            PlotError::CommandTooLong { .. } => "CommandTooLong",
            PlotError::EmptyCommand => "EmptyCommand",
        }
    }
}

/// Render the token texts with a `!` inserted in front of the token the
/// parser stopped at.
fn marker_line(tokens: &[Token], at: usize) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(tokens.len() + 1);
    for (index, token) in tokens.iter().enumerate() {
        if index == at {
            parts.push(format!("!{}", token.text));
        } else {
            parts.push(token.text.clone());
        }
    }
    if at >= tokens.len() {
        parts.push("!".to_string());
    }
    parts.join(" ")
}

/// Structured error report
///
/// Consumers (CLI, web) format it to their own needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    /// Failing phase: lexer, parser, session
    pub phase: &'static str,
    /// Token index (0-based, if any)
    pub position: Option<usize>,
    /// Error kind for programmatic handling
    pub error_kind: &'static str,
    /// Human-readable message
    pub message: String,
    /// Command tokens with `!` marking the point of failure
    pub marker: Option<String>,
}

impl std::fmt::Display for ErrorReport {
    /// Default CLI-friendly format
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.marker {
            Some(marker) => write!(f, "{} error: {}\n  {}", self.phase, self.message, marker),
            None => write!(f, "{} error: {}", self.phase, self.message),
        }
    }
}

impl ErrorReport {
    /// JSON form for machine consumers; built by hand so the report type
    /// stays serde-free.
    pub fn to_json(&self) -> String {
        let position = self
            .position
            .map(|p| p.to_string())
            .unwrap_or_else(|| "null".to_string());
        let marker = self
            .marker
            .as_ref()
            .map(|m| format!("\"{}\"", escape_json(m)))
            .unwrap_or_else(|| "null".to_string());

        format!(
            r#"{{"phase":"{}","position":{},"error_kind":"{}","message":"{}","marker":{}}}"#,
            self.phase,
            position,
            self.error_kind,
            escape_json(&self.message),
            marker
        )
    }

    /// Compact single-line form
    pub fn to_short(&self) -> String {
        format!("{}: {}", self.phase, self.message)
    }
}

fn escape_json(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
