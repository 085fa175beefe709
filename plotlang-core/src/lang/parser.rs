//! Recursive-descent statement parser
//!
//! One parser instance handles one token sequence, already produced by
//! the lexer from a single `;`-terminated command. Recognition and
//! evaluation are fused: by the time a statement record comes back,
//! every number in it has been computed.

use crate::lang::cursor::TokenCursor;
use crate::lang::error::{ParseError, ParseResult};
use crate::lang::eval::expression;
use crate::lang::statement::{Point, Statement};
use crate::lang::token::{Token, TokenKind};

use plotlang_config::LimitConfig;
use plotlang_log::{debug, trace, Logger};
use std::sync::Arc;

pub struct Parser {
    cursor: TokenCursor,
    limits: LimitConfig,
    logger: Arc<Logger>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_logger(tokens, LimitConfig::default(), Logger::noop())
    }

    pub fn with_logger(tokens: Vec<Token>, limits: LimitConfig, logger: Arc<Logger>) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            limits,
            logger,
        }
    }

    /// Parse and evaluate the single statement held by the cursor.
    pub fn parse(&mut self) -> ParseResult<Statement> {
        let statement = match self.cursor.current()?.kind {
            TokenKind::Origin => self.parse_origin(),
            TokenKind::Scale => self.parse_scale(),
            TokenKind::Rot => self.parse_rotation(),
            TokenKind::Reset => self.parse_reset(),
            TokenKind::For => self.parse_for(),
            _ => Err(self.cursor.mismatch("ORIGIN, SCALE, ROT, RESET or FOR")),
        }?;
        debug!(self.logger, "parsed statement: {statement:?}");
        Ok(statement)
    }

    /// `origin is '(' expression ',' expression ')' ';'`
    fn parse_origin(&mut self) -> ParseResult<Statement> {
        self.cursor.expect(TokenKind::Origin)?;
        let (x, y) = self.parse_pair_assignment()?;
        Ok(Statement::SetOrigin { x, y })
    }

    /// `scale is '(' expression ',' expression ')' ';'`
    fn parse_scale(&mut self) -> ParseResult<Statement> {
        self.cursor.expect(TokenKind::Scale)?;
        let (x, y) = self.parse_pair_assignment()?;
        Ok(Statement::SetScale { x, y })
    }

    /// Shared tail of origin and scale: `is ( x , y ) ;` with the loop
    /// parameter bound to zero, these expressions sit outside any loop.
    fn parse_pair_assignment(&mut self) -> ParseResult<(f64, f64)> {
        self.cursor
            .expect_all(&[TokenKind::Is, TokenKind::LeftParen])?;
        let x = expression(&mut self.cursor, 0.0)?;
        self.cursor.expect(TokenKind::Comma)?;
        let y = expression(&mut self.cursor, 0.0)?;
        self.cursor
            .expect_all(&[TokenKind::RightParen, TokenKind::Semicolon])?;
        Ok((x, y))
    }

    /// `rot is expression ';'` — the angle is in radians
    fn parse_rotation(&mut self) -> ParseResult<Statement> {
        self.cursor.expect_all(&[TokenKind::Rot, TokenKind::Is])?;
        let angle = expression(&mut self.cursor, 0.0)?;
        self.cursor.expect(TokenKind::Semicolon)?;
        Ok(Statement::SetRotation { angle })
    }

    /// `reset ';'`
    fn parse_reset(&mut self) -> ParseResult<Statement> {
        self.cursor
            .expect_all(&[TokenKind::Reset, TokenKind::Semicolon])?;
        Ok(Statement::Reset)
    }

    /// `for t from expr to expr step expr draw '(' expr ',' expr ')' ';'`
    ///
    /// The range expressions are evaluated once, with `t` bound to zero.
    /// The draw body is then re-evaluated per sample by rewinding the
    /// cursor to just after `draw (`.
    fn parse_for(&mut self) -> ParseResult<Statement> {
        self.cursor
            .expect_all(&[TokenKind::For, TokenKind::Param, TokenKind::From])?;
        let start = expression(&mut self.cursor, 0.0)?;
        self.cursor.expect(TokenKind::To)?;
        let end = expression(&mut self.cursor, 0.0)?;
        self.cursor.expect(TokenKind::Step)?;
        let step = expression(&mut self.cursor, 0.0)?;
        self.cursor
            .expect_all(&[TokenKind::Draw, TokenKind::LeftParen])?;

        let samples = sample_range(start, end, step, &self.limits)?;
        trace!(
            self.logger,
            "sampling {} points from {start} to {end} by {step}",
            samples.len()
        );

        // a validated range always holds at least one sample, so the
        // body is read at least once and the cursor ends past it
        let body = self.cursor.position();
        let mut points = Vec::with_capacity(samples.len());
        for t in samples {
            self.cursor.rewind_to(body);
            let x = expression(&mut self.cursor, t)?;
            self.cursor.expect(TokenKind::Comma)?;
            let y = expression(&mut self.cursor, t)?;
            points.push(Point::new(x, y));
        }

        self.cursor
            .expect_all(&[TokenKind::RightParen, TokenKind::Semicolon])?;
        Ok(Statement::IteratePlot {
            start,
            end,
            step,
            points,
        })
    }

    pub fn cursor(&self) -> &TokenCursor {
        &self.cursor
    }
}

/// Sample values covering `[min(start, end), max(start, end)]` in
/// ascending order by `|step|`, endpoint inclusive.
///
/// Zero or non-finite range parameters are rejected before any sample is
/// produced, as is a range wider than the configured point budget.
fn sample_range(start: f64, end: f64, step: f64, limits: &LimitConfig) -> ParseResult<Vec<f64>> {
    if step == 0.0 || !start.is_finite() || !end.is_finite() || !step.is_finite() {
        return Err(ParseError::DegenerateRange { start, end, step });
    }

    let lo = start.min(end);
    let hi = start.max(end);
    let stride = step.abs();

    let span = (hi - lo) / stride;
    if span >= limits.max_points_per_draw as f64 {
        return Err(ParseError::SampleBudget {
            limit: limits.max_points_per_draw,
        });
    }

    let mut samples = Vec::new();
    let mut t = lo;
    while t <= hi {
        samples.push(t);
        t += stride;
    }
    Ok(samples)
}
