//
// A stack machine over a flattened, post-order form of the AST.
//

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::eval::Evaluator;
use crate::value::{EvalError, Number};
use alloc::{collections::VecDeque, vec::Vec};
use core::fmt;
use derive_more::{Display, From};

///
/// One step of a flattened expression.
///
#[derive(Debug, Clone, Copy, PartialEq, Display)]
pub enum Instruction {
    #[display("push {_0}")]
    Push(Number),
    #[display("unary {_0}")]
    Unary(UnaryOp),
    #[display("binary {_0}")]
    Binary(BinaryOp),
}

///
/// A post-order instruction stream: operands always come before the operator
/// that combines them, left operand before right.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program(Vec<Instruction>);

#[derive(Debug, Clone, Copy, PartialEq, Display, From)]
pub enum VmError {
    #[from]
    Eval(EvalError),
    #[display("`{op}` needs {needed} operand(s), {available} available")]
    StackUnderflow {
        op: char,
        needed: usize,
        available: usize,
    },
    #[display("program left {_0} operands instead of one")]
    Unbalanced(usize),
}

impl core::error::Error for VmError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Eval(e) => Some(e),
            _ => None,
        }
    }
}

///
/// The virtual machine.
///
/// Pending instructions are taken from the front of one queue; operands are
/// pushed to and popped from the front of another, so the most recent result
/// is always consumed first.
///
#[derive(Debug, Clone, Default)]
pub struct Vm {
    pending: VecDeque<Instruction>,
    operands: VecDeque<Number>,
}

impl Program {
    ///
    /// Lower an [`Expr`] into a post-order instruction stream.
    ///
    #[must_use]
    pub fn flatten(expr: &Expr) -> Self {
        let mut code = Vec::with_capacity(expr.node_count());
        Self::emit(expr, &mut code);
        Self(code)
    }

    fn emit(expr: &Expr, code: &mut Vec<Instruction>) {
        match expr {
            Expr::Literal(n) => code.push(Instruction::Push(*n)),
            Expr::Unary { op, operand } => {
                Self::emit(operand, code);
                code.push(Instruction::Unary(*op));
            }
            Expr::Binary { op, lhs, rhs } => {
                Self::emit(lhs, code);
                Self::emit(rhs, code);
                code.push(Instruction::Binary(*op));
            }
        }
    }

    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.0
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(code: Vec<Instruction>) -> Self {
        Self(code)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, instruction) in self.0.iter().enumerate() {
            writeln!(f, "{i:>4}  {instruction}")?;
        }
        Ok(())
    }
}

impl Vm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Flatten `expr` and reduce it.
    ///
    #[allow(clippy::missing_errors_doc)]
    pub fn run(&mut self, expr: &Expr) -> Result<Number, VmError> {
        self.load(&Program::flatten(expr));
        self.reduce()
    }

    ///
    /// Replace any leftover state with `program`.
    ///
    pub fn load(&mut self, program: &Program) {
        self.pending.clear();
        self.operands.clear();
        self.pending.extend(program.instructions().iter().copied());
    }

    ///
    /// Execute every pending instruction, returning the single operand left.
    ///
    /// On failure the machine is cleared.
    ///
    #[allow(clippy::missing_errors_doc)]
    pub fn reduce(&mut self) -> Result<Number, VmError> {
        let result = self.drain();
        if result.is_err() {
            self.pending.clear();
            self.operands.clear();
        }
        result
    }

    ///
    /// True when no instruction or operand is left over.
    ///
    #[must_use]
    pub fn is_drained(&self) -> bool {
        self.pending.is_empty() && self.operands.is_empty()
    }

    fn drain(&mut self) -> Result<Number, VmError> {
        while let Some(instruction) = self.pending.pop_front() {
            let result = match instruction {
                Instruction::Push(n) => n,
                Instruction::Unary(op) => {
                    let arg = self.pop(op.symbol(), 1)?;
                    op.apply(arg)?
                }
                Instruction::Binary(op) => {
                    // the right operand was pushed last, so it comes out first
                    let rhs = self.pop(op.symbol(), 2)?;
                    let lhs = self.pop(op.symbol(), 2)?;
                    op.apply(lhs, rhs)?
                }
            };
            self.operands.push_front(result);
        }

        match self.operands.len() {
            1 => self.operands.pop_front().ok_or(VmError::Unbalanced(0)),
            n => Err(VmError::Unbalanced(n)),
        }
    }

    fn pop(&mut self, op: char, needed: usize) -> Result<Number, VmError> {
        let available = self.operands.len();
        self.operands.pop_front().ok_or(VmError::StackUnderflow {
            op,
            needed,
            available,
        })
    }
}

impl Evaluator for Vm {
    type Error = VmError;

    fn evaluate(&mut self, expr: &Expr) -> Result<Number, Self::Error> {
        self.run(expr)
    }
}
