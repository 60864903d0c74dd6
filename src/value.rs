use core::fmt;
use derive_more::{Display, From};

///
/// A number produced by a literal or by evaluating an expression.
///
/// Integers stay exact until they meet a float or a division.
///
#[derive(Debug, Clone, Copy, PartialEq, From)]
pub enum Number {
    Int(i64),
    Float(f64),
}

///
/// An arithmetic failure while evaluating an expression.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EvalError {
    #[display("integer overflow")]
    Overflow,
    #[display("division by zero")]
    DivisionByZero,
}

impl core::error::Error for EvalError {}

impl Number {
    ///
    /// The value as a float, promoting integers.
    ///
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }

    ///
    /// Compare with a tolerance; integers compare through their float value.
    ///
    #[must_use]
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (a, b) => libm::fabs(a.as_f64() - b.as_f64()) <= epsilon,
        }
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn try_add(self, rhs: Self) -> Result<Self, EvalError> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => {
                a.checked_add(b).map(Self::Int).ok_or(EvalError::Overflow)
            }
            (a, b) => Ok(Self::Float(a.as_f64() + b.as_f64())),
        }
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn try_sub(self, rhs: Self) -> Result<Self, EvalError> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => {
                a.checked_sub(b).map(Self::Int).ok_or(EvalError::Overflow)
            }
            (a, b) => Ok(Self::Float(a.as_f64() - b.as_f64())),
        }
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn try_mul(self, rhs: Self) -> Result<Self, EvalError> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => {
                a.checked_mul(b).map(Self::Int).ok_or(EvalError::Overflow)
            }
            (a, b) => Ok(Self::Float(a.as_f64() * b.as_f64())),
        }
    }

    ///
    /// Real division: the result is always a float, even for two integers.
    ///
    /// A zero divisor is an error for floats too.
    ///
    #[allow(clippy::missing_errors_doc)]
    pub fn try_div(self, rhs: Self) -> Result<Self, EvalError> {
        let divisor = rhs.as_f64();
        if divisor == 0.0 {
            return Err(EvalError::DivisionByZero);
        }

        Ok(Self::Float(self.as_f64() / divisor))
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn try_neg(self) -> Result<Self, EvalError> {
        match self {
            Self::Int(i) => {
                i.checked_neg().map(Self::Int).ok_or(EvalError::Overflow)
            }
            Self::Float(f) => Ok(Self::Float(-f)),
        }
    }
}

// floats keep a fractional part: `5.0`, never `5`
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
        }
    }
}
