//! Parsed statement records handed to collaborators

use serde::{Deserialize, Serialize};

/// One sampled plot coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One parsed command. Built fresh per parse call, handed to the
/// collaborator, then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// `origin is ( x , y ) ;`
    SetOrigin { x: f64, y: f64 },
    /// `scale is ( x , y ) ;`
    SetScale { x: f64, y: f64 },
    /// `rot is angle ;` — angle in radians
    SetRotation { angle: f64 },
    /// `reset ;`
    Reset,
    /// `for t from start to end step step draw ( x-expr , y-expr ) ;`
    ///
    /// `points` holds one entry per computed sample, in ascending
    /// parameter order.
    IteratePlot {
        start: f64,
        end: f64,
        step: f64,
        points: Vec<Point>,
    },
}
