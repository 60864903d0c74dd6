#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

use alloc::vec::Vec;
use derive_more::{Display, From};

pub mod ast;
pub mod eval;
pub mod interpret;
pub mod lex;
pub mod parse;
pub mod sexp;
pub mod value;
pub mod vm;

pub mod prelude {
    pub use crate::ast::{BinaryOp, Expr, UnaryOp};
    pub use crate::eval::Evaluator;
    pub use crate::interpret::Interpreter;
    pub use crate::lex::{Lexer, Token, TokenKind, TokenValue};
    pub use crate::parse::Parser;
    pub use crate::sexp::Sexp;
    pub use crate::value::Number;
    pub use crate::vm::{Instruction, Program, Vm};
}

///
/// Any failure of the pipeline, from lexing to evaluation.
///
#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum Error {
    Lex(lex::LexError),
    Parse(parse::ParseError),
    Eval(value::EvalError),
    Vm(vm::VmError),
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
            Self::Vm(e) => Some(e),
        }
    }
}

///
/// Tokenize `src`, excluding the final end-of-input token.
///
#[allow(clippy::missing_errors_doc)]
pub fn tokenize(src: &str) -> Result<Vec<lex::Token>, Error> {
    Ok(lex::Lexer::new(src)?.all_tokens()?)
}

///
/// Parse `src` into an expression tree.
///
#[allow(clippy::missing_errors_doc)]
pub fn parse(src: &str) -> Result<ast::Expr, Error> {
    let lexer = lex::Lexer::new(src)?;
    Ok(parse::Parser::new(lexer).parse()?)
}

///
/// Parse and interpret `src`.
///
#[allow(clippy::missing_errors_doc)]
pub fn eval(src: &str) -> Result<value::Number, Error> {
    Ok(interpret::Interpreter::new().interpret(&parse(src)?)?)
}

#[cfg(test)]
mod test {
    use super::{eval, parse, tokenize, Error};
    use crate::lex::LexError;
    use crate::parse::ParseError;
    use crate::value::{EvalError, Number};
    use alloc::string::{String, ToString};

    #[test]
    fn pipeline() {
        assert_eq!(tokenize(" 314      + 42 ").map(|t| t.len()), Ok(3));
        assert_eq!(parse("1*(2+3)").unwrap().to_string(), "(1 * (2 + 3))");
        assert_eq!(eval("10-3"), Ok(Number::Int(7)));
    }

    #[test]
    fn errors_by_stage() {
        assert_eq!(eval(""), Err(Error::Lex(LexError::EmptyInput)));
        assert!(matches!(
            eval("\\"),
            Err(Error::Parse(ParseError::Lex(LexError::UnexpectedChar { .. })))
        ));
        assert!(matches!(
            eval("(1"),
            Err(Error::Parse(ParseError::UnexpectedToken { .. }))
        ));
        assert_eq!(eval("1/0"), Err(Error::Eval(EvalError::DivisionByZero)));
        assert_eq!(eval("").unwrap_err().to_string(), "empty input");
    }

    #[test]
    fn deep_input_is_an_error() {
        let mut src: String = core::iter::repeat('-').take(50_000).collect();
        src.push('1');

        assert!(matches!(
            eval(&src),
            Err(Error::Parse(ParseError::TooDeep { .. }))
        ));
    }
}
