//
// Recursive-descent parser:
//
//   expr   := term ( (ADD|MINUS) term )*
//   term   := factor ( (MULT|DIV) factor )*
//   factor := INTEGER | FLOAT
//           | L_PAREN expr R_PAREN
//           | (ADD|MINUS) expr
//

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::lex::{LexError, Lexer, Token, TokenKind, TokenValue};
use crate::value::Number;
use derive_more::{Display, From};

///
/// A grammar violation, or a lexer failure met while pulling tokens.
///
#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum ParseError {
    #[from]
    Lex(LexError),
    #[display("expected {expected}, found {found}")]
    UnexpectedToken { expected: TokenKind, found: Token },
    #[display("expected a number, `(` or a sign, found {found}")]
    ExpectedFactor { found: Token },
    #[display("expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },
}

impl core::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            _ => None,
        }
    }
}

///
/// Most parentheses and sign prefixes the parser will descend into.
///
pub const MAX_NESTING: usize = 256;

///
/// Most nodes on any root-to-leaf path of a parsed tree.
///
/// Long operator chains such as `1+1+...+1` grow the tree one level per
/// operator without any nesting, so they are bounded separately.
///
pub const MAX_HEIGHT: usize = 4096;

///
/// A one-token-lookahead parser driving a [`Lexer`].
///
/// Every tree it returns is at most [`MAX_HEIGHT`] deep, so the recursive
/// consumers of [`Expr`] cannot exhaust the stack.
///
#[derive(Debug, Clone)]
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token,
    nesting: usize,
}

///
/// A subtree together with its height.
///
struct Parsed {
    expr: Expr,
    height: usize,
}

impl Parsed {
    fn leaf(n: Number) -> Self {
        Self {
            expr: Expr::from(n),
            height: 1,
        }
    }
}

impl<'src> Parser<'src> {
    #[must_use]
    pub fn new(lexer: Lexer<'src>) -> Self {
        Self {
            lexer,
            current: Token::eof(),
            nesting: 0,
        }
    }

    ///
    /// Parse the whole input as one expression.
    ///
    /// Anything left over after the expression is an error.
    ///
    #[allow(clippy::missing_errors_doc)]
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        self.current = self.lexer.next_token()?;
        let parsed = self.expr()?;
        self.eat(TokenKind::Eof)?;

        Ok(parsed.expr)
    }

    ///
    /// Consume the lookahead if it is of kind `expected`.
    ///
    fn eat(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        if self.current.kind() != expected {
            return Err(ParseError::UnexpectedToken {
                expected,
                found: self.current,
            });
        }

        let next = self.lexer.next_token()?;
        Ok(core::mem::replace(&mut self.current, next))
    }

    fn expr(&mut self) -> Result<Parsed, ParseError> {
        let mut lhs = self.term()?;
        while let Some(op) = self.binary_op(&[TokenKind::Add, TokenKind::Sub])? {
            let rhs = self.term()?;
            lhs = binary(op, lhs, rhs)?;
        }

        Ok(lhs)
    }

    fn term(&mut self) -> Result<Parsed, ParseError> {
        let mut lhs = self.factor()?;
        while let Some(op) = self.binary_op(&[TokenKind::Mul, TokenKind::Div])? {
            let rhs = self.factor()?;
            lhs = binary(op, lhs, rhs)?;
        }

        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Parsed, ParseError> {
        let token = self.current;
        match (token.kind(), token.value()) {
            (TokenKind::Integer, TokenValue::Integer(i)) => {
                self.eat(TokenKind::Integer)?;
                Ok(Parsed::leaf(Number::Int(i)))
            }
            (TokenKind::Float, TokenValue::Float(f)) => {
                self.eat(TokenKind::Float)?;
                Ok(Parsed::leaf(Number::Float(f)))
            }
            (TokenKind::LParen, _) => {
                self.eat(TokenKind::LParen)?;
                let parsed = self.nested()?;
                self.eat(TokenKind::RParen)?;
                Ok(parsed)
            }
            (kind, _) => {
                let Some(op) = UnaryOp::from_kind(kind) else {
                    return Err(ParseError::ExpectedFactor { found: token });
                };
                self.eat(kind)?;
                // the sign applies to a whole expression, so `-1+2` is `-(1+2)`
                let operand = self.nested()?;
                let height = grow(operand.height)?;
                Ok(Parsed {
                    expr: Expr::unary(op, operand.expr),
                    height,
                })
            }
        }
    }

    ///
    /// Parse an `expr` one nesting level down.
    ///
    fn nested(&mut self) -> Result<Parsed, ParseError> {
        if self.nesting >= MAX_NESTING {
            return Err(ParseError::TooDeep { limit: MAX_NESTING });
        }

        self.nesting += 1;
        let parsed = self.expr();
        self.nesting -= 1;
        parsed
    }

    ///
    /// Eat the lookahead if it is one of `kinds`, returning its operator.
    ///
    fn binary_op(
        &mut self,
        kinds: &[TokenKind],
    ) -> Result<Option<BinaryOp>, ParseError> {
        let kind = self.current.kind();
        if !kinds.contains(&kind) {
            return Ok(None);
        }

        self.eat(kind)?;
        Ok(BinaryOp::from_kind(kind))
    }
}

fn binary(op: BinaryOp, lhs: Parsed, rhs: Parsed) -> Result<Parsed, ParseError> {
    let height = grow(lhs.height.max(rhs.height))?;
    Ok(Parsed {
        expr: Expr::binary(op, lhs.expr, rhs.expr),
        height,
    })
}

///
/// Height of a node whose tallest child is `height` high.
///
fn grow(height: usize) -> Result<usize, ParseError> {
    if height >= MAX_HEIGHT {
        return Err(ParseError::TooDeep { limit: MAX_HEIGHT });
    }
    Ok(height + 1)
}
