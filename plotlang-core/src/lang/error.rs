//! Parse-time error taxonomy
//!
//! Every variant aborts the whole statement: there is no recovery and no
//! partial result. NaN/Infinity produced by arithmetic are NOT errors;
//! they propagate as valid-but-degenerate values per IEEE-754.

use thiserror::Error;

/// Result alias used throughout the parser and evaluator.
pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The lexer emitted a structural error token at this position.
    #[error("lexical error near '{text}' at token {position}")]
    Lexical { text: String, position: usize },

    /// Valid identifier shape, but not a reserved word.
    #[error("unrecognized identifier '{text}' at token {position}")]
    Unrecognized { text: String, position: usize },

    /// The grammar expected a different token kind here.
    #[error("expected {expected}, found {found} at token {position}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        position: usize,
    },

    /// The cursor ran past the end of the token sequence.
    #[error("unexpected end of command at token {position}")]
    UnexpectedEnd { position: usize },

    /// Iteration range that could never terminate: zero or non-finite
    /// start/end/step. Rejected before any sampling happens.
    #[error("degenerate iteration range: start {start}, end {end}, step {step}")]
    DegenerateRange { start: f64, end: f64, step: f64 },

    /// The draw statement would exceed the configured sample budget.
    #[error("draw statement exceeds the sample budget of {limit} points")]
    SampleBudget { limit: usize },
}

impl ParseError {
    /// Token index at which the parse stopped, when one applies.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Lexical { position, .. }
            | ParseError::Unrecognized { position, .. }
            | ParseError::UnexpectedToken { position, .. }
            | ParseError::UnexpectedEnd { position } => Some(*position),
            ParseError::DegenerateRange { .. } | ParseError::SampleBudget { .. } => None,
        }
    }
}
