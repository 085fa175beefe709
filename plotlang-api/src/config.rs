//! API layer configuration
//!
//! Holds the execution configuration RunConfig and a global singleton
//! for CLI convenience.

use once_cell::sync::OnceCell;
use plotlang_config::{LexerConfig, LimitConfig};
use plotlang_log::Logger;
use std::sync::Arc;

/// Execution configuration
#[derive(Clone)]
pub struct RunConfig {
    /// Whether to echo each command before executing it
    pub echo_source: bool,
    /// Lexer configuration
    pub lexer: LexerConfig,
    /// Sampling limits
    pub limits: LimitConfig,
    /// Logger (pass [`Logger::noop`] to silence)
    pub logger: Arc<Logger>,
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("echo_source", &self.echo_source)
            .field("lexer", &self.lexer)
            .field("limits", &self.limits)
            .finish()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            echo_source: false,
            lexer: LexerConfig::default(),
            limits: LimitConfig::default(),
            logger: Logger::noop(),
        }
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration (must be called once before any operation)
///
/// # Panics
/// If config is already initialized
pub fn init(config: RunConfig) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// Get global config reference
///
/// # Panics
/// If config is not initialized
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run_config() {
        let cfg = RunConfig::default();
        assert!(!cfg.echo_source);
        assert_eq!(cfg.lexer.max_command_len, 4096);
        assert_eq!(cfg.limits.max_points_per_draw, 100_000);
    }

    #[test]
    fn test_run_config_debug_skips_logger() {
        let cfg = RunConfig::default();
        let debug_str = format!("{:?}", cfg);
        assert!(debug_str.contains("echo_source"));
        assert!(!debug_str.contains("logger"));
    }

    #[test]
    fn test_global_config_init_and_get() {
        // global state: only meaningful the first time it runs in a process
        if !is_initialized() {
            init(RunConfig::default());
            assert!(is_initialized());
            assert!(!config().echo_source);
        }
    }
}
