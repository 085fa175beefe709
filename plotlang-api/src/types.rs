//! API type definitions
//!
//! Input and output types for command execution.

use plotlang_core::Point;
use serde::Serialize;

/// Execution output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecuteOutput {
    /// Confirmation line for the executed command
    pub message: String,
    /// Transformed points; empty for non-draw commands
    pub points: Vec<Point>,
    /// Plot sequence number; set for draw commands only
    pub sequence: Option<usize>,
}

impl ExecuteOutput {
    pub fn message(message: String) -> Self {
        Self {
            message,
            points: Vec::new(),
            sequence: None,
        }
    }

    pub fn plot(message: String, points: Vec<Point>, sequence: usize) -> Self {
        Self {
            message,
            points,
            sequence: Some(sequence),
        }
    }
}
