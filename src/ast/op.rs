//
// Operators represented in the AST.
//

use crate::lex::TokenKind;
use crate::value::{EvalError, Number};
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Neg,
}

///
/// The character of an operator token, as listed in [`TokenKind::ONE_CHAR`].
///
fn symbol_of(kind: TokenKind) -> char {
    // operator kinds are always in the table
    kind.as_char().unwrap_or('?')
}

impl BinaryOp {
    #[must_use]
    pub const fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            _ => None,
        }
    }

    #[must_use]
    pub const fn kind(self) -> TokenKind {
        match self {
            Self::Add => TokenKind::Add,
            Self::Sub => TokenKind::Sub,
            Self::Mul => TokenKind::Mul,
            Self::Div => TokenKind::Div,
        }
    }

    #[must_use]
    pub fn symbol(self) -> char {
        symbol_of(self.kind())
    }

    ///
    /// Apply the operator as `lhs op rhs`.
    ///
    #[allow(clippy::missing_errors_doc)]
    pub fn apply(self, lhs: Number, rhs: Number) -> Result<Number, EvalError> {
        match self {
            Self::Add => lhs.try_add(rhs),
            Self::Sub => lhs.try_sub(rhs),
            Self::Mul => lhs.try_mul(rhs),
            Self::Div => lhs.try_div(rhs),
        }
    }
}

impl UnaryOp {
    #[must_use]
    pub const fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Plus),
            TokenKind::Sub => Some(Self::Neg),
            _ => None,
        }
    }

    #[must_use]
    pub const fn kind(self) -> TokenKind {
        match self {
            Self::Plus => TokenKind::Add,
            Self::Neg => TokenKind::Sub,
        }
    }

    #[must_use]
    pub fn symbol(self) -> char {
        symbol_of(self.kind())
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn apply(self, arg: Number) -> Result<Number, EvalError> {
        match self {
            Self::Plus => Ok(arg),
            Self::Neg => arg.try_neg(),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
