//! Postfix evaluation under a single assignment.

use std::fmt::{Display, Formatter};

use crate::parser::Postfix;
use crate::token::Token;
use crate::vars::VarOrder;

/// Error type for postfix evaluation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum EvalError {
    /// A symbol other than `&` or `|` reached binary evaluation.
    InvalidOperator(Token),
    /// A variable that is not part of the variable order.
    UnknownVariable(char),
    /// An operator found fewer operands than it needs.
    StackUnderflow,
    /// More than one value is left on the stack after the last atom.
    LeftoverOperands(usize),
}

impl Display for EvalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::InvalidOperator(op) => write!(f, "invalid logic operator: {}", op),
            EvalError::UnknownVariable(v) => write!(f, "unknown variable: {}", v),
            EvalError::StackUnderflow => write!(f, "operator is missing an operand"),
            EvalError::LeftoverOperands(n) => write!(f, "{} values left after evaluation", n),
        }
    }
}

impl std::error::Error for EvalError {}

/// Apply a binary gate to two values.
///
/// ```
/// use logic_table::eval::eval_binary;
/// use logic_table::token::Token;
///
/// assert_eq!(eval_binary(true, false, Token::Or), Ok(true));
/// assert_eq!(eval_binary(true, false, Token::And), Ok(false));
/// assert!(eval_binary(true, false, Token::Not).is_err());
/// ```
pub fn eval_binary(a: bool, b: bool, op: Token) -> Result<bool, EvalError> {
    match op {
        Token::Or => Ok(a | b),
        Token::And => Ok(a & b),
        _ => Err(EvalError::InvalidOperator(op)),
    }
}

/// Something that yields a Boolean value under an assignment.
///
/// The assignment holds one value per variable, indexed by the variable's position in `order`.
pub trait Eval {
    fn eval(&self, order: &VarOrder, assignment: &[bool]) -> Result<bool, EvalError>;
}

impl Eval for Postfix {
    /// Single-pass stack machine over the postfix atoms.
    fn eval(&self, order: &VarOrder, assignment: &[bool]) -> Result<bool, EvalError> {
        debug_assert_eq!(order.len(), assignment.len());

        let mut stack: Vec<bool> = Vec::with_capacity(self.len());

        for &token in self.tokens() {
            match token {
                Token::Var(v) => {
                    let i = order.position(v).ok_or(EvalError::UnknownVariable(v))?;
                    stack.push(assignment[i]);
                }
                Token::Not => {
                    let a = stack.pop().ok_or(EvalError::StackUnderflow)?;
                    stack.push(!a);
                }
                op => {
                    // The right operand is on top.
                    let b = stack.pop().ok_or(EvalError::StackUnderflow)?;
                    let a = stack.pop().ok_or(EvalError::StackUnderflow)?;
                    stack.push(eval_binary(a, b, op)?);
                }
            }
        }

        match stack.len() {
            1 => Ok(stack[0]),
            0 => Err(EvalError::StackUnderflow),
            n => Err(EvalError::LeftoverOperands(n)),
        }
    }
}
