//! Token vocabulary and token construction
//!
//! The DFA only classifies raw text into coarse lexical classes; this
//! module refines a (class, text) pair into the precise token kind via a
//! case-insensitive reserved-word table.

use std::fmt;

/// Unary math function bound to a `FUNC` token.
pub type UnaryFunc = fn(f64) -> f64;

/// Coarse classification attached to the DFA's final states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexClass {
    /// Identifier shape: keyword, function name, `t`, or unknown word
    Identifier,
    /// Numeric constant shape, including the named constants `e` and `pi`
    Number,
    /// One of `+ - * / **`
    Operator,
    /// One of `, ; ( )`
    Delimiter,
}

/// Exact token kind visible to the parser and to collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // keywords
    Origin,
    Scale,
    Rot,
    Is,
    For,
    From,
    To,
    Step,
    Draw,
    Reset,
    /// The bound loop parameter `t`
    Param,
    /// Numeric constant: literal, `pi` or `e`
    Const,
    /// Named unary function: sin/cos/tan/ln/exp/sqrt
    Func,
    // delimiters
    Semicolon,
    Comma,
    LeftParen,
    RightParen,
    // operators
    Plus,
    Minus,
    Star,
    Slash,
    Power,
    /// Identifier shape absent from the reserved-word table
    Unrecognized,
    /// Structural lexical error
    Error,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Origin => "ORIGIN",
            TokenKind::Scale => "SCALE",
            TokenKind::Rot => "ROT",
            TokenKind::Is => "IS",
            TokenKind::For => "FOR",
            TokenKind::From => "FROM",
            TokenKind::To => "TO",
            TokenKind::Step => "STEP",
            TokenKind::Draw => "DRAW",
            TokenKind::Reset => "RESET",
            TokenKind::Param => "T",
            TokenKind::Const => "CONST",
            TokenKind::Func => "FUNC",
            TokenKind::Semicolon => "';'",
            TokenKind::Comma => "','",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Power => "'**'",
            TokenKind::Unrecognized => "unrecognized identifier",
            TokenKind::Error => "lexical error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One classified lexical unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw matched text
    pub text: String,
    /// Numeric payload for `Const` tokens
    pub value: Option<f64>,
    /// Function payload for `Func` tokens
    pub func: Option<UnaryFunc>,
}

impl Token {
    fn plain(kind: TokenKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
            value: None,
            func: None,
        }
    }

    fn constant(text: &str, value: f64) -> Self {
        Self {
            kind: TokenKind::Const,
            text: text.to_string(),
            value: Some(value),
            func: None,
        }
    }

    fn function(text: &str, func: UnaryFunc) -> Self {
        Self {
            kind: TokenKind::Func,
            text: text.to_string(),
            value: None,
            func: Some(func),
        }
    }

    /// Build a token from the DFA's (class, text) emission. `None` is the
    /// automaton's lexical-error path.
    pub fn build(class: Option<LexClass>, text: &str) -> Self {
        let Some(class) = class else {
            return Self::plain(TokenKind::Error, text);
        };

        let lower = text.to_ascii_lowercase();
        match class {
            LexClass::Delimiter | LexClass::Operator => match reserved(&lower) {
                Some(entry) => entry.to_token(text),
                None => Self::plain(TokenKind::Error, text),
            },
            LexClass::Identifier => match reserved(&lower) {
                Some(entry) => entry.to_token(text),
                None => Self::plain(TokenKind::Unrecognized, text),
            },
            // named constants arrive through dedicated number-class
            // states, so unknown text here is a decimal literal
            LexClass::Number => match reserved(&lower) {
                Some(entry) => entry.to_token(text),
                None => Self::constant(text, lower.parse().unwrap_or(0.0)),
            },
        }
    }
}

/// Reserved-word table entry.
enum Reserved {
    Keyword(TokenKind),
    Constant(f64),
    Function(UnaryFunc),
}

impl Reserved {
    fn to_token(&self, text: &str) -> Token {
        match self {
            Reserved::Keyword(kind) => Token::plain(*kind, text),
            Reserved::Constant(value) => Token::constant(text, *value),
            Reserved::Function(func) => Token::function(text, *func),
        }
    }
}

/// Case-insensitive reserved-word lookup; callers pass lowercased text.
fn reserved(lower: &str) -> Option<Reserved> {
    use std::f64::consts;

    let entry = match lower {
        "origin" => Reserved::Keyword(TokenKind::Origin),
        "scale" => Reserved::Keyword(TokenKind::Scale),
        "rot" => Reserved::Keyword(TokenKind::Rot),
        "is" => Reserved::Keyword(TokenKind::Is),
        "for" => Reserved::Keyword(TokenKind::For),
        "from" => Reserved::Keyword(TokenKind::From),
        "to" => Reserved::Keyword(TokenKind::To),
        "step" => Reserved::Keyword(TokenKind::Step),
        "draw" => Reserved::Keyword(TokenKind::Draw),
        "reset" => Reserved::Keyword(TokenKind::Reset),
        "t" => Reserved::Keyword(TokenKind::Param),

        "sin" => Reserved::Function(f64::sin),
        "cos" => Reserved::Function(f64::cos),
        "tan" => Reserved::Function(f64::tan),
        "ln" => Reserved::Function(f64::ln),
        "exp" => Reserved::Function(f64::exp),
        "sqrt" => Reserved::Function(f64::sqrt),

        "pi" => Reserved::Constant(consts::PI),
        "e" => Reserved::Constant(consts::E),

        "," => Reserved::Keyword(TokenKind::Comma),
        ";" => Reserved::Keyword(TokenKind::Semicolon),
        "(" => Reserved::Keyword(TokenKind::LeftParen),
        ")" => Reserved::Keyword(TokenKind::RightParen),

        "+" => Reserved::Keyword(TokenKind::Plus),
        "-" => Reserved::Keyword(TokenKind::Minus),
        "*" => Reserved::Keyword(TokenKind::Star),
        "/" => Reserved::Keyword(TokenKind::Slash),
        "**" => Reserved::Keyword(TokenKind::Power),

        _ => return None,
    };
    Some(entry)
}
