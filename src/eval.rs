use crate::ast::Expr;
use crate::value::Number;

///
/// A back end that reduces an [`Expr`] to a [`Number`].
///
pub trait Evaluator {
    type Error;

    #[allow(clippy::missing_errors_doc)]
    fn evaluate(&mut self, expr: &Expr) -> Result<Number, Self::Error>;
}

impl<T: Evaluator + ?Sized> Evaluator for &mut T {
    type Error = T::Error;

    fn evaluate(&mut self, expr: &Expr) -> Result<Number, Self::Error> {
        (**self).evaluate(expr)
    }
}
