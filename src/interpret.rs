use crate::ast::Expr;
use crate::eval::Evaluator;
use crate::value::{EvalError, Number};

///
/// Evaluates an [`Expr`] by walking it recursively, children first.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct Interpreter;

impl Interpreter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn interpret(&self, expr: &Expr) -> Result<Number, EvalError> {
        match expr {
            Expr::Literal(n) => Ok(*n),
            Expr::Unary { op, operand } => op.apply(self.interpret(operand)?),
            Expr::Binary { op, lhs, rhs } => {
                let lhs = self.interpret(lhs)?;
                let rhs = self.interpret(rhs)?;
                op.apply(lhs, rhs)
            }
        }
    }
}

impl Evaluator for Interpreter {
    type Error = EvalError;

    fn evaluate(&mut self, expr: &Expr) -> Result<Number, Self::Error> {
        self.interpret(expr)
    }
}

#[cfg(test)]
mod test {
    use super::Interpreter;
    use crate::lex::Lexer;
    use crate::parse::Parser;
    use crate::value::{EvalError, Number};

    fn interpret(src: &str) -> Result<Number, EvalError> {
        let expr = Parser::new(Lexer::new(src).unwrap()).parse().unwrap();
        Interpreter::new().interpret(&expr)
    }

    ///
    /// Declares a test case with a name, given input and expected result.
    ///
    macro_rules! test_case {
        ($name:ident, $input:expr, $expected:expr $(,)?) => {
            #[test]
            fn $name() {
                assert_eq!(interpret($input), $expected);
            }
        };
    }

    #[test]
    fn mixed() {
        let result = interpret("1+2/(-42)*3").unwrap();

        assert!(result.is_float());
        assert!(result.approx_eq(Number::Float(0.857_142_857_1), 1e-9));
    }

    test_case!(integers_stay_exact, "2*3+4", Ok(Number::Int(10)));
    test_case!(subtraction_order, "10-3", Ok(Number::Int(7)));
    test_case!(division_is_real, "10/2", Ok(Number::Float(5.0)));
    test_case!(division_order, "1/4", Ok(Number::Float(0.25)));
    test_case!(float_promotes, "1+0.5", Ok(Number::Float(1.5)));
    test_case!(unary_plus, "+3", Ok(Number::Int(3)));
    test_case!(unary_is_loose, "-1+2", Ok(Number::Int(-3)));
    test_case!(unary_in_parens, "1+2-(-1)", Ok(Number::Int(4)));
    test_case!(double_negation, "--5", Ok(Number::Int(5)));
    test_case!(division_by_zero, "1/(2-2)", Err(EvalError::DivisionByZero));
    test_case!(
        overflow,
        "9223372036854775807+1",
        Err(EvalError::Overflow),
    );
}
