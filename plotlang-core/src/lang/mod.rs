//! The plot language itself: token vocabulary, lexer configuration,
//! cursor, expression evaluator and statement parser.

pub mod cursor;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod statement;
pub mod token;
