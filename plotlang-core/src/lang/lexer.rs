//! Lexer for plot commands
//!
//! Configures the DFA table once per instance and drives it character by
//! character. Whitespace finalizes a pending token; any other character
//! is fed and, on a boundary signal, fed once more so matching restarts
//! from the initial state. Command strings are `;`-terminated by the
//! caller, which guarantees a clean trailing flush.

use crate::kit::dfa::{Dfa, FeedOutcome};
use crate::lang::token::{LexClass, Token};

use plotlang_log::{debug, trace, Logger};
use std::sync::Arc;

// state ids; 0 is the DFA's initial state
const ST_IDENT_HEAD: usize = 1; // single letter other than e/p
const ST_INT: usize = 2; // digits
const ST_IDENT: usize = 3; // identifier continuation
const ST_DOT: usize = 4; // digits '.'
const ST_FRACTION: usize = 5; // digits '.' digits
const ST_OPERATOR: usize = 6; // + - / and the second char of **
const ST_STAR: usize = 7; // lone *
const ST_DELIMITER: usize = 8; // , ; ( )
const ST_E: usize = 9; // the constant e
const ST_P: usize = 10; // the letter p
const ST_PI: usize = 11; // the constant pi

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Lexer holding the configured automaton.
///
/// Receives an explicit logger; use [`Logger::noop`] where output is
/// unwanted.
pub struct Lexer {
    dfa: Dfa<LexClass, Token>,
    logger: Arc<Logger>,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    pub fn new() -> Self {
        Self::with_logger(Logger::noop())
    }

    pub fn with_logger(logger: Arc<Logger>) -> Self {
        trace!(logger, "configuring lexer DFA table");
        Self {
            dfa: build_table(),
            logger,
        }
    }

    /// Tokenize one command string.
    ///
    /// The table is reused across calls; only the current state, the
    /// accumulation buffer and the emitted-token list are per-call.
    pub fn scan(&mut self, input: &str) -> Vec<Token> {
        trace!(self.logger, "scanning {} chars", input.chars().count());
        self.dfa.reset();
        let _ = self.dfa.drain_results();

        for c in input.chars() {
            if c.is_whitespace() {
                if self.dfa.is_mid_match() {
                    let _ = self.dfa.finalize();
                }
            } else if let FeedOutcome::Boundary(_) = self.dfa.feed(c) {
                // restart from the initial state; a character no state
                // accepts becomes an error token carrying that character
                let _ = self.dfa.feed(c);
            }
        }
        if self.dfa.is_mid_match() {
            let _ = self.dfa.finalize();
        }

        let tokens = self.dfa.drain_results();
        debug!(self.logger, "produced {} tokens", tokens.len());
        tokens
    }
}

/// The fixed token alphabet of the plot language.
fn build_table() -> Dfa<LexClass, Token> {
    let mut dfa: Dfa<LexClass, Token> = Dfa::new(Box::new(Token::build));

    dfa.register_state(ST_IDENT_HEAD, Some(LexClass::Identifier));
    dfa.register_state(ST_INT, Some(LexClass::Number));
    dfa.register_state(ST_IDENT, Some(LexClass::Identifier));
    dfa.register_state(ST_DOT, None);
    dfa.register_state(ST_FRACTION, Some(LexClass::Number));
    dfa.register_state(ST_OPERATOR, Some(LexClass::Operator));
    dfa.register_state(ST_STAR, Some(LexClass::Operator));
    dfa.register_state(ST_DELIMITER, Some(LexClass::Delimiter));
    dfa.register_state(ST_E, Some(LexClass::Number));
    dfa.register_state(ST_P, None);
    dfa.register_state(ST_PI, Some(LexClass::Number));

    // registration cannot fail here: every state id above was registered
    let transitions: Vec<(usize, usize, fn(char) -> bool)> = vec![
        // initial state: letters other than e/p start a generic identifier
        (0, ST_IDENT_HEAD, |c| is_letter(c) && c != 'e' && c != 'p'),
        (0, ST_INT, is_digit),
        (0, ST_OPERATOR, |c| c == '+' || c == '-' || c == '/'),
        (0, ST_STAR, |c| c == '*'),
        (0, ST_DELIMITER, |c| {
            c == ',' || c == ';' || c == '(' || c == ')'
        }),
        (0, ST_E, |c| c == 'e'),
        (0, ST_P, |c| c == 'p'),
        // identifier continuation
        (ST_IDENT_HEAD, ST_IDENT, |c| is_letter(c) || is_digit(c)),
        (ST_IDENT, ST_IDENT, |c| is_letter(c) || is_digit(c)),
        // numbers: digits ('.' digits)?
        (ST_INT, ST_INT, is_digit),
        (ST_INT, ST_DOT, |c| c == '.'),
        (ST_DOT, ST_FRACTION, is_digit),
        (ST_FRACTION, ST_FRACTION, is_digit),
        // '**' via the intermediate lone-star state
        (ST_STAR, ST_OPERATOR, |c| c == '*'),
        // 'e' followed by more word characters is a plain identifier
        (ST_E, ST_IDENT_HEAD, |c| is_letter(c) || is_digit(c)),
        // 'p' continues to 'pi' or falls back to a plain identifier
        (ST_P, ST_IDENT_HEAD, |c| {
            (is_letter(c) && c != 'i') || is_digit(c)
        }),
        (ST_P, ST_PI, |c| c == 'i'),
        // 'pi' followed by more word characters is a plain identifier
        (ST_PI, ST_IDENT, |c| is_letter(c) || is_digit(c)),
    ];
    for (from, to, guard) in transitions {
        let _ = dfa.register_transition(from, to, guard);
    }

    dfa
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::token::TokenKind;

    fn lex_all(input: &str) -> Vec<Token> {
        Lexer::new().scan(input)
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex_all(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_origin_statement_token_sequence() {
        assert_eq!(
            kinds("origin is ( 1 , 2 ) ;"),
            vec![
                TokenKind::Origin,
                TokenKind::Is,
                TokenKind::LeftParen,
                TokenKind::Const,
                TokenKind::Comma,
                TokenKind::Const,
                TokenKind::RightParen,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_pi_is_a_constant_not_an_identifier() {
        let tokens = lex_all("pi");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Const);
        assert!((tokens[0].value.unwrap() - 3.14159265358979).abs() < 1e-11);
    }

    #[test]
    fn test_pix_is_a_single_unrecognized_identifier() {
        let tokens = lex_all("pix");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Unrecognized);
        assert_eq!(tokens[0].text, "pix");
    }

    #[test]
    fn test_pi_prefix_with_digits_is_one_identifier() {
        let tokens = lex_all("pi2");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Unrecognized);
        assert_eq!(tokens[0].text, "pi2");
    }

    #[test]
    fn test_e_is_a_constant() {
        let tokens = lex_all("e");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Const);
        assert!((tokens[0].value.unwrap() - std::f64::consts::E).abs() < 1e-12);
    }

    #[test]
    fn test_exp_is_a_function_not_e_then_xp() {
        let tokens = lex_all("exp");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Func);
    }

    #[test]
    fn test_double_star_is_one_power_token() {
        assert_eq!(kinds("2**3"), vec![TokenKind::Const, TokenKind::Power, TokenKind::Const]);
    }

    #[test]
    fn test_adjacent_tokens_without_spaces() {
        assert_eq!(
            kinds("rot is 2*pi;"),
            vec![
                TokenKind::Rot,
                TokenKind::Is,
                TokenKind::Const,
                TokenKind::Star,
                TokenKind::Const,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_fractional_literal() {
        let tokens = lex_all("12.5");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value, Some(12.5));
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(
            kinds("ORIGIN Is ( 0 , 0 ) ;")[0..2],
            [TokenKind::Origin, TokenKind::Is]
        );
    }

    #[test]
    fn test_dangling_dot_is_lexical_error() {
        // "12." reaches the non-final dot state
        let tokens = lex_all("12. ;");
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[0].text, "12.");
    }

    #[test]
    fn test_illegal_character_becomes_error_token_with_text() {
        let tokens = lex_all("@ ;");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[0].text, "@");
        assert_eq!(tokens[1].kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_illegal_character_between_tokens() {
        let tokens = lex_all("1@2;");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["1", "@", "2", ";"]);
        assert_eq!(tokens[1].kind, TokenKind::Error);
    }

    #[test]
    fn test_scan_is_reusable() {
        let mut lexer = Lexer::new();
        let first = lexer.scan("rot is 0 ;");
        let second = lexer.scan("rot is 0 ;");
        assert_eq!(first, second);
    }
}
