//! Expression evaluation fused with recognition
//!
//! Each grammar rule consumes tokens from the cursor and returns the
//! numeric value of what it recognized, with the loop parameter bound to
//! `t`. There is no AST; an iteration body is re-read from the token
//! sequence once per sample.
//!
//! Arithmetic follows IEEE-754: `1/0` is infinity and `ln(-1)` is NaN,
//! neither is an error.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expression -> term (('+' | '-') term)*
//! term       -> factor (('*' | '/') factor)*
//! factor     -> ('+' | '-') factor | component
//! component  -> atom ('**' component)?
//! atom       -> CONST | T | FUNC '(' expression ')' | '(' expression ')'
//! ```

use crate::lang::cursor::TokenCursor;
use crate::lang::error::ParseResult;
use crate::lang::token::TokenKind;

/// `term (('+' | '-') term)*`, left-associative.
pub fn expression(cursor: &mut TokenCursor, t: f64) -> ParseResult<f64> {
    let mut value = term(cursor, t)?;
    loop {
        match cursor.current()?.kind {
            TokenKind::Plus => {
                cursor.advance();
                value += term(cursor, t)?;
            }
            TokenKind::Minus => {
                cursor.advance();
                value -= term(cursor, t)?;
            }
            _ => return Ok(value),
        }
    }
}

/// `factor (('*' | '/') factor)*`, left-associative.
fn term(cursor: &mut TokenCursor, t: f64) -> ParseResult<f64> {
    let mut value = factor(cursor, t)?;
    loop {
        match cursor.current()?.kind {
            TokenKind::Star => {
                cursor.advance();
                value *= factor(cursor, t)?;
            }
            TokenKind::Slash => {
                cursor.advance();
                value /= factor(cursor, t)?;
            }
            _ => return Ok(value),
        }
    }
}

/// Unary sign, recursing so `--1` works.
fn factor(cursor: &mut TokenCursor, t: f64) -> ParseResult<f64> {
    match cursor.current()?.kind {
        TokenKind::Plus => {
            cursor.advance();
            factor(cursor, t)
        }
        TokenKind::Minus => {
            cursor.advance();
            Ok(-factor(cursor, t)?)
        }
        _ => component(cursor, t),
    }
}

/// `atom ('**' component)?`, right-associative by recursing on the
/// exponent.
fn component(cursor: &mut TokenCursor, t: f64) -> ParseResult<f64> {
    let base = atom(cursor, t)?;
    if cursor.current()?.kind == TokenKind::Power {
        cursor.advance();
        let exponent = component(cursor, t)?;
        return Ok(base.powf(exponent));
    }
    Ok(base)
}

fn atom(cursor: &mut TokenCursor, t: f64) -> ParseResult<f64> {
    let token = cursor.current()?.clone();
    match token.kind {
        TokenKind::Const => {
            cursor.advance();
            Ok(token.value.unwrap_or(0.0))
        }
        TokenKind::Param => {
            cursor.advance();
            Ok(t)
        }
        TokenKind::Func => {
            cursor.advance();
            cursor.expect(TokenKind::LeftParen)?;
            let argument = expression(cursor, t)?;
            cursor.expect(TokenKind::RightParen)?;
            let func = token.func.unwrap_or(std::convert::identity);
            Ok(func(argument))
        }
        TokenKind::LeftParen => {
            cursor.advance();
            let value = expression(cursor, t)?;
            cursor.expect(TokenKind::RightParen)?;
            Ok(value)
        }
        _ => Err(cursor.mismatch("CONST, T, FUNC or '('")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::error::ParseError;
    use crate::lang::lexer::Lexer;

    fn eval(input: &str, t: f64) -> ParseResult<f64> {
        // ';' terminates the command so the cursor never runs off the end
        let tokens = Lexer::new().scan(&format!("{input} ;"));
        let mut cursor = TokenCursor::new(tokens);
        expression(&mut cursor, t)
    }

    #[test]
    fn test_precedence_of_sum_and_product() {
        assert_eq!(eval("2 + 3 * 4", 0.0).unwrap(), 14.0);
    }

    #[test]
    fn test_power_is_right_associative() {
        assert_eq!(eval("2 ** 3 ** 2", 0.0).unwrap(), 512.0);
    }

    #[test]
    fn test_unary_minus_and_double_negation() {
        assert_eq!(eval("-3 + 5", 0.0).unwrap(), 2.0);
        assert_eq!(eval("--3", 0.0).unwrap(), 3.0);
    }

    #[test]
    fn test_parameter_binding() {
        assert_eq!(eval("2 * t", 1.5).unwrap(), 3.0);
    }

    #[test]
    fn test_function_application() {
        assert_eq!(eval("sin ( 0 )", 0.0).unwrap(), 0.0);
        assert!((eval("cos ( 0 )", 0.0).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_division_by_zero_is_infinity() {
        assert_eq!(eval("1 / 0", 0.0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_ln_of_negative_is_nan() {
        assert!(eval("ln ( 0 - 1 )", 0.0).unwrap().is_nan());
    }

    #[test]
    fn test_parenthesized_grouping() {
        assert_eq!(eval("( 2 + 3 ) * 4", 0.0).unwrap(), 20.0);
    }

    #[test]
    fn test_missing_close_paren_reports_position() {
        let err = eval("( 1 + 2", 0.0).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { expected: "')'", .. }));
    }

    #[test]
    fn test_dangling_operator_is_error() {
        assert!(eval("1 +", 0.0).is_err());
    }
}
