//
// Tokens produced by the lexer.
//

use core::fmt;
use derive_more::Display;

///
/// The closed set of token kinds.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TokenKind {
    #[display("end of input")]
    Eof,
    #[display("integer")]
    Integer,
    #[display("float")]
    Float,
    #[display("`(`")]
    LParen,
    #[display("`)`")]
    RParen,
    #[display("`+`")]
    Add,
    #[display("`-`")]
    Sub,
    #[display("`*`")]
    Mul,
    #[display("`/`")]
    Div,
}

///
/// The payload carried by a [`Token`].
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue {
    None,
    Integer(i64),
    Float(f64),
    Char(char),
}

///
/// An immutable `(kind, value)` pair.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    kind: TokenKind,
    value: TokenValue,
}

impl TokenKind {
    ///
    /// Single-character tokens and the kind each one maps to.
    ///
    pub const ONE_CHAR: &'static [(char, TokenKind)] = &[
        ('(', TokenKind::LParen),
        (')', TokenKind::RParen),
        ('+', TokenKind::Add),
        ('-', TokenKind::Sub),
        ('*', TokenKind::Mul),
        ('/', TokenKind::Div),
    ];

    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        Self::ONE_CHAR
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, kind)| *kind)
    }

    #[must_use]
    pub fn as_char(self) -> Option<char> {
        Self::ONE_CHAR
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(ch, _)| *ch)
    }
}

impl Token {
    #[must_use]
    pub const fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            value: TokenValue::None,
        }
    }

    #[must_use]
    pub const fn integer(i: i64) -> Self {
        Self {
            kind: TokenKind::Integer,
            value: TokenValue::Integer(i),
        }
    }

    #[must_use]
    pub const fn float(f: f64) -> Self {
        Self {
            kind: TokenKind::Float,
            value: TokenValue::Float(f),
        }
    }

    ///
    /// A single-character token, or `None` if `c` is not in
    /// [`TokenKind::ONE_CHAR`].
    ///
    #[must_use]
    pub fn one_char(c: char) -> Option<Self> {
        TokenKind::from_char(c).map(|kind| Self {
            kind,
            value: TokenValue::Char(c),
        })
    }

    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    #[must_use]
    pub const fn value(&self) -> TokenValue {
        self.value
    }

    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            TokenValue::None => write!(f, "{}", self.kind),
            TokenValue::Integer(i) => write!(f, "{i}"),
            TokenValue::Float(x) => write!(f, "{x:?}"),
            TokenValue::Char(c) => write!(f, "{c}"),
        }
    }
}
