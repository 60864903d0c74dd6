use crate::ast::Expr;
use crate::value::Number;
use alloc::{vec, vec::Vec};
use core::fmt;

///
/// The nested-list view of an [`Expr`].
///
/// Operators become [`Sexp::Symbol`] heads, literals become atoms.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Sexp {
    Number(Number),
    Symbol(char),
    List(Vec<Sexp>),
}

impl From<&Expr> for Sexp {
    fn from(expr: &Expr) -> Self {
        match expr {
            Expr::Literal(n) => Self::Number(*n),
            Expr::Unary { op, operand } => Self::List(vec![
                Self::Symbol(op.symbol()),
                Self::from(&**operand),
            ]),
            Expr::Binary { op, lhs, rhs } => Self::List(vec![
                Self::Symbol(op.symbol()),
                Self::from(&**lhs),
                Self::from(&**rhs),
            ]),
        }
    }
}

impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Symbol(c) => write!(f, "{c}"),
            Self::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::Sexp;
    use crate::lex::Lexer;
    use crate::parse::Parser;
    use crate::value::Number;
    use alloc::{string::ToString, vec};

    fn sexp(src: &str) -> Sexp {
        let expr = Parser::new(Lexer::new(src).unwrap()).parse().unwrap();
        Sexp::from(&expr)
    }

    fn int(i: i64) -> Sexp {
        Sexp::Number(Number::Int(i))
    }

    #[test]
    fn nested() {
        let expected = Sexp::List(vec![
            Sexp::Symbol('+'),
            int(1),
            Sexp::List(vec![
                Sexp::Symbol('*'),
                Sexp::List(vec![
                    Sexp::Symbol('/'),
                    int(2),
                    Sexp::List(vec![Sexp::Symbol('-'), int(42)]),
                ]),
                int(3),
            ]),
        ]);

        let actual = sexp("1+2/(-42)*3");
        assert_eq!(actual, expected);
        assert_eq!(actual.to_string(), "(+ 1 (* (/ 2 (- 42)) 3))");
    }

    #[test]
    fn literal_is_an_atom() {
        assert_eq!(sexp("3.5"), Sexp::Number(Number::Float(3.5)));
        assert_eq!(sexp("(12)").to_string(), "12");
    }

    #[test]
    fn unary_plus() {
        assert_eq!(sexp("+-2").to_string(), "(+ (- 2))");
    }
}
