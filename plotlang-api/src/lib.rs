//! Plotlang API - Execution orchestration layer
//!
//! Provides the unified execution interface:
//! - Command execution against a persistent [`Session`]
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (PlotError)
//!
//! For CLI convenience, this crate provides a global singleton API.
//! For library use, prefer the explicit `run(source, &mut session, &config)`
//! API.

use plotlang_core::{Lexer, Parser, Statement, Token};
use plotlang_log::{debug, info};

// Re-export config
pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

// Re-export config types from plotlang_config
pub use plotlang_config::{LexerConfig, LimitConfig, Phase};

// Re-export error and types
pub mod error;
pub mod session;
pub mod types;
pub use error::{ErrorReport, PlotError};
pub use plotlang_core::{ParseError, Point};
pub use session::Session;
pub use types::ExecuteOutput;

/// Execute one command against a session, with explicit configuration
///
/// This is the recommended API for library users.
pub fn run(
    source: &str,
    session: &mut Session,
    config: &RunConfig,
) -> Result<ExecuteOutput, PlotError> {
    info!(config.logger, "executing command");
    let statement = parse_statement(source, config)?;
    let output = session.apply(statement);
    info!(config.logger, "command completed: {}", output.message);
    Ok(output)
}

/// Parse and evaluate one command, with explicit configuration
///
/// The returned statement carries every number already computed; it has
/// not touched any session state yet.
pub fn parse_statement(source: &str, config: &RunConfig) -> Result<Statement, PlotError> {
    let tokens = tokenize(source, config)?;
    let mut parser =
        Parser::with_logger(tokens, config.limits.clone(), config.logger.clone());
    parser.parse().map_err(PlotError::Parse)
}

/// Tokenize one command, enforcing the transport-level limits and
/// appending the terminating `;` when the caller omitted it.
pub fn tokenize(source: &str, config: &RunConfig) -> Result<Vec<Token>, PlotError> {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        return Err(PlotError::EmptyCommand);
    }
    let len = trimmed.chars().count();
    if len > config.lexer.max_command_len {
        return Err(PlotError::CommandTooLong {
            len,
            limit: config.lexer.max_command_len,
        });
    }

    let mut command = trimmed.to_string();
    if !command.ends_with(';') {
        command.push(';');
    }

    let mut lexer = Lexer::with_logger(config.logger.clone());
    let tokens = lexer.scan(&command);
    debug!(config.logger, "{} tokens from {} chars", tokens.len(), len);
    Ok(tokens)
}

/// Execute one command, mapping failures to structured reports.
///
/// The marker line in the report needs the token sequence, so this
/// wrapper keeps the tokens across the parse.
pub fn run_with_report(
    source: &str,
    session: &mut Session,
    config: &RunConfig,
) -> Result<ExecuteOutput, ErrorReport> {
    let tokens = match tokenize(source, config) {
        Ok(tokens) => tokens,
        Err(e) => return Err(e.to_report(&[])),
    };
    let mut parser =
        Parser::with_logger(tokens, config.limits.clone(), config.logger.clone());
    match parser.parse() {
        Ok(statement) => Ok(session.apply(statement)),
        Err(e) => Err(PlotError::Parse(e).to_report(parser.cursor().tokens())),
    }
}

// ==================== Legacy API (using global config) ====================

/// Execute one command against a session (uses global config)
///
/// # Panics
/// If global config is not initialized
pub fn execute(source: &str, session: &mut Session) -> Result<ExecuteOutput, PlotError> {
    run(source, session, get_config())
}

/// Quick run against a throwaway session with default config
/// (auto-initializes the global config if needed)
pub fn quick_run(source: &str) -> Result<ExecuteOutput, PlotError> {
    if !is_initialized() {
        init_config(RunConfig::default());
    }
    let mut session = Session::new();
    execute(source, &mut session)
}
