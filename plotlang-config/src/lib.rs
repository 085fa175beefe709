//! Plotlang Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all plotlang
//! crates.

use serde::{Deserialize, Serialize};

/// Configuration for iteration limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    /// Maximum number of sampled points a single draw statement may produce
    pub max_points_per_draw: usize,
}

/// Configuration for the lexer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexerConfig {
    /// Maximum accepted command length in characters
    pub max_command_len: usize,
}

/// Pipeline phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Parser,
    Eval,
    Session,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Parser => "parser",
            Phase::Eval => "eval",
            Phase::Session => "session",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("plotlang::{}", self.as_str())
    }
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_points_per_draw: 100_000,
        }
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_command_len: 4096,
        }
    }
}
