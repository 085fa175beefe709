//! Plotlang Core - the command pipeline (pure logic, no IO)
//!
//! Contains the table-driven DFA tokenizer, the statement parser and the
//! embedded arithmetic evaluator. Only operates on in-memory data
//! structures; configuration and loggers are passed explicitly via
//! parameters, not via global state.

pub mod kit;
pub mod lang;

// Re-export common types
pub use lang::error::ParseError;
pub use lang::lexer::Lexer;
pub use lang::parser::Parser;
pub use lang::statement::{Point, Statement};
pub use lang::token::{Token, TokenKind};

// Re-export config types from plotlang-config
pub use plotlang_config::{LexerConfig, LimitConfig, Phase};
