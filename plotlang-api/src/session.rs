//! Session state and coordinate transformation
//!
//! A session holds the drawing attributes (origin, scale, rotation) and
//! a monotonically increasing plot sequence number. Statements mutate
//! the attributes; draw statements transform their sampled points
//! through scale, then rotation, then translation.

use crate::types::ExecuteOutput;
use plotlang_core::{Point, Statement};
use plotlang_log::{info, Logger};
use std::sync::Arc;

pub struct Session {
    origin: Point,
    scale: Point,
    rotation: f64,
    /// Number of draw statements executed so far; survives `reset`
    sequence: usize,
    logger: Arc<Logger>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_logger(Logger::noop())
    }

    pub fn with_logger(logger: Arc<Logger>) -> Self {
        Self {
            origin: Point::new(0.0, 0.0),
            scale: Point::new(1.0, 1.0),
            rotation: 0.0,
            sequence: 0,
            logger,
        }
    }

    /// Apply one parsed statement to the session.
    pub fn apply(&mut self, statement: Statement) -> ExecuteOutput {
        match statement {
            Statement::SetOrigin { x, y } => {
                self.origin = Point::new(x, y);
                info!(self.logger, "origin set to ({x}, {y})");
                ExecuteOutput::message(format!("Origin is ( {x}, {y} )"))
            }
            Statement::SetScale { x, y } => {
                self.scale = Point::new(x, y);
                info!(self.logger, "scale set to ({x}, {y})");
                ExecuteOutput::message(format!("Scale is ( {x}, {y} )"))
            }
            Statement::SetRotation { angle } => {
                self.rotation = angle;
                info!(self.logger, "rotation set to {angle} rad");
                ExecuteOutput::message(format!("Rot is {angle}"))
            }
            Statement::Reset => {
                self.origin = Point::new(0.0, 0.0);
                self.scale = Point::new(1.0, 1.0);
                self.rotation = 0.0;
                info!(self.logger, "attributes reset, sequence preserved");
                ExecuteOutput::message("Reset".to_string())
            }
            Statement::IteratePlot { points, .. } => {
                self.sequence += 1;
                let transformed: Vec<Point> =
                    points.iter().map(|p| self.transform(*p)).collect();
                info!(
                    self.logger,
                    "plot #{} with {} points",
                    self.sequence,
                    transformed.len()
                );
                ExecuteOutput::plot(
                    format!("Plot #{} ( {} points )", self.sequence, transformed.len()),
                    transformed,
                    self.sequence,
                )
            }
        }
    }

    /// Scale, then rotate, then translate.
    fn transform(&self, p: Point) -> Point {
        let x = p.x * self.scale.x;
        let y = p.y * self.scale.y;
        let (sin, cos) = self.rotation.sin_cos();
        let rx = x * cos + y * sin;
        let ry = y * cos - x * sin;
        Point::new(rx + self.origin.x, ry + self.origin.y)
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn scale(&self) -> Point {
        self.scale
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn sequence(&self) -> usize {
        self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot(points: Vec<Point>) -> Statement {
        Statement::IteratePlot {
            start: 0.0,
            end: 1.0,
            step: 1.0,
            points,
        }
    }

    #[test]
    fn test_defaults_are_identity() {
        let mut session = Session::new();
        let out = session.apply(plot(vec![Point::new(3.0, 4.0)]));
        assert_eq!(out.points, vec![Point::new(3.0, 4.0)]);
    }

    #[test]
    fn test_scale_applies_before_translation() {
        let mut session = Session::new();
        session.apply(Statement::SetScale { x: 2.0, y: 3.0 });
        session.apply(Statement::SetOrigin { x: 10.0, y: 20.0 });
        let out = session.apply(plot(vec![Point::new(1.0, 1.0)]));
        assert_eq!(out.points, vec![Point::new(12.0, 23.0)]);
    }

    #[test]
    fn test_rotation_is_clockwise_for_positive_angle() {
        let mut session = Session::new();
        session.apply(Statement::SetRotation {
            angle: std::f64::consts::FRAC_PI_2,
        });
        let out = session.apply(plot(vec![Point::new(0.0, 1.0)]));
        // (0, 1) maps onto the x axis
        assert!((out.points[0].x - 1.0).abs() < 1e-12);
        assert!(out.points[0].y.abs() < 1e-12);
    }

    #[test]
    fn test_reset_restores_attributes_but_keeps_sequence() {
        let mut session = Session::new();
        session.apply(Statement::SetOrigin { x: 5.0, y: 5.0 });
        session.apply(plot(vec![Point::new(0.0, 0.0)]));
        assert_eq!(session.sequence(), 1);

        session.apply(Statement::Reset);
        assert_eq!(session.origin(), Point::new(0.0, 0.0));
        assert_eq!(session.scale(), Point::new(1.0, 1.0));
        assert_eq!(session.rotation(), 0.0);
        assert_eq!(session.sequence(), 1);

        let out = session.apply(plot(vec![Point::new(0.0, 0.0)]));
        assert_eq!(out.sequence, Some(2));
    }

    #[test]
    fn test_attribute_messages() {
        let mut session = Session::new();
        let out = session.apply(Statement::SetOrigin { x: 1.0, y: 2.0 });
        assert_eq!(out.message, "Origin is ( 1, 2 )");
        let out = session.apply(Statement::Reset);
        assert_eq!(out.message, "Reset");
    }
}
