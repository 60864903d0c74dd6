use crate::value::Number;
use alloc::boxed::Box;
use core::fmt;

pub mod op;

pub use op::{BinaryOp, UnaryOp};

///
/// A parsed arithmetic expression.
///
/// Every node owns its children; the tree is never mutated after parsing.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Number),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    #[must_use]
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Self::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    #[must_use]
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    ///
    /// Number of nodes in the tree, literals included.
    ///
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Literal(_) => 1,
            Self::Unary { operand, .. } => 1 + operand.node_count(),
            Self::Binary { lhs, rhs, .. } => 1 + lhs.node_count() + rhs.node_count(),
        }
    }
}

impl From<Number> for Expr {
    fn from(n: Number) -> Self {
        Self::Literal(n)
    }
}

//
// Fully parenthesised infix form, so the grouping the parser chose is visible.
//
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(n) => write!(f, "{n}"),
            Self::Unary { op, operand } => write!(f, "({op}{operand})"),
            Self::Binary { op, lhs, rhs } => write!(f, "({lhs} {op} {rhs})"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{BinaryOp, Expr, UnaryOp};
    use crate::value::Number;
    use alloc::string::ToString;

    #[test]
    fn display() {
        let expr = Expr::binary(
            BinaryOp::Sub,
            Expr::binary(
                BinaryOp::Add,
                Number::Int(1).into(),
                Number::Float(2.5).into(),
            ),
            Expr::unary(UnaryOp::Neg, Number::Int(1).into()),
        );

        assert_eq!(expr.to_string(), "((1 + 2.5) - (-1))");
        assert_eq!(expr.node_count(), 6);
    }
}
