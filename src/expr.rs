//! The logic expression entity.
//!
//! A [`LogicExpr`] owns the infix text it was built from, the postfix form of that text,
//! a variable order and the truth table computed under that order. Every mutation
//! recomputes the table eagerly, so all queries read an up-to-date table.
//!
//! ```
//! use logic_table::expr::LogicExpr;
//!
//! let e = LogicExpr::new("a&b").unwrap();
//! assert_eq!(e.postfix().to_string(), "ab&");
//! assert_eq!(e.variables(), &['a', 'b']);
//! assert_eq!(e.outputs(), &[false, false, false, true]);
//! ```

use std::fmt::{Display, Formatter};

use log::debug;

use crate::eval::{Eval, EvalError};
use crate::parser::{to_postfix, ParseError, Postfix};
use crate::table::TruthTable;
use crate::vars::VarOrder;

/// Error type for building or replacing a [`LogicExpr`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ExprError {
    /// The infix text is malformed.
    Parse(ParseError),
    /// The expression cannot be evaluated under the established variable order.
    Eval(EvalError),
}

impl From<ParseError> for ExprError {
    fn from(e: ParseError) -> Self {
        ExprError::Parse(e)
    }
}

impl From<EvalError> for ExprError {
    fn from(e: EvalError) -> Self {
        ExprError::Eval(e)
    }
}

impl Display for ExprError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExprError::Parse(e) => write!(f, "Parse error: {}", e),
            ExprError::Eval(e) => write!(f, "Evaluation error: {}", e),
        }
    }
}

impl std::error::Error for ExprError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExprError::Parse(e) => Some(e),
            ExprError::Eval(e) => Some(e),
        }
    }
}

/// A propositional expression together with its truth table.
#[derive(Debug, Clone)]
pub struct LogicExpr {
    infix: String,
    postfix: Postfix,
    order: VarOrder,
    table: TruthTable,
}

impl LogicExpr {
    /// Parses `infix` and computes its truth table over the variables in ascending order.
    pub fn new(infix: &str) -> Result<Self, ExprError> {
        let postfix = to_postfix(infix)?;
        let order = VarOrder::from_set(&postfix.variables());
        let mut table = TruthTable::new(order.len());
        table.evaluate(&postfix, &order)?;

        Ok(Self {
            infix: infix.to_string(),
            postfix,
            order,
            table,
        })
    }

    /// Replaces the expression, re-deriving the variable order and all assignments.
    ///
    /// On error the expression is left unchanged.
    pub fn set_expression(&mut self, infix: &str) -> Result<(), ExprError> {
        *self = Self::new(infix)?;
        Ok(())
    }

    /// Replaces the expression but keeps the established variable order and assignments.
    ///
    /// Only the outputs are recomputed. Every variable of `infix` must already be in the
    /// order, otherwise [`EvalError::UnknownVariable`] is returned. Variables of the order
    /// that `infix` no longer mentions stay in the order. On error the expression is left
    /// unchanged.
    pub fn set_expression_partial(&mut self, infix: &str) -> Result<(), ExprError> {
        let postfix = to_postfix(infix)?;
        self.table.evaluate(&postfix, &self.order)?;
        debug!("Partial reset to {:?} over {}", infix, self.order);

        self.infix = infix.to_string();
        self.postfix = postfix;
        Ok(())
    }

    /// The infix text this expression was built from.
    pub fn infix(&self) -> &str {
        &self.infix
    }

    pub fn postfix(&self) -> &Postfix {
        &self.postfix
    }

    /// Variables in their current order (the column order of the truth table).
    pub fn variables(&self) -> &[char] {
        self.order.vars()
    }

    pub fn order(&self) -> &VarOrder {
        &self.order
    }

    pub fn truth_table(&self) -> &TruthTable {
        &self.table
    }

    /// Outputs of the truth table, in row order.
    pub fn outputs(&self) -> &[bool] {
        self.table.outputs()
    }

    /// Evaluates the expression at a single assignment given in the current variable order.
    pub fn eval_at(&self, assignment: &[bool]) -> Result<bool, EvalError> {
        assert_eq!(
            assignment.len(),
            self.order.len(),
            "Expected {} values, got {}",
            self.order.len(),
            assignment.len()
        );
        self.postfix.eval(&self.order, assignment)
    }

    /// Changes the variable order and recomputes the whole table under it.
    ///
    /// # Panics
    ///
    /// Panics if `order` is not a permutation of the current variables.
    pub(crate) fn set_order(&mut self, order: VarOrder) {
        assert_eq!(
            order.to_set(),
            self.order.to_set(),
            "New order {} is not a permutation of {}",
            order,
            self.order
        );
        debug!("Reordering {} from {} to {}", self.postfix, self.order, order);

        let mut table = TruthTable::new(order.len());
        table
            .evaluate(&self.postfix, &order)
            .expect("a permutation of the evaluable order is evaluable");
        self.order = order;
        self.table = table;
    }
}

impl Display for LogicExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.postfix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_new() {
        let e = LogicExpr::new("b|~a").unwrap();
        assert_eq!(e.infix(), "b|~a");
        assert_eq!(e.postfix().to_string(), "ba~|");
        assert_eq!(e.variables(), &['a', 'b']);
        assert_eq!(e.truth_table().len(), 4);
        assert_eq!(e.outputs(), &[true, true, false, true]);
    }

    #[test]
    fn test_new_parse_error() {
        let e = LogicExpr::new("a&(b");
        assert_eq!(e.unwrap_err(), ExprError::Parse(ParseError::UnmatchedOpen));
    }

    #[test]
    fn test_display_is_postfix() {
        let e = LogicExpr::new("(a|b)&c").unwrap();
        assert_eq!(e.to_string(), "ab|c&");
    }

    #[test]
    fn test_set_expression_full_reset() {
        let mut e = LogicExpr::new("a&b").unwrap();
        e.set_expression("x|y|z").unwrap();
        assert_eq!(e.variables(), &['x', 'y', 'z']);
        assert_eq!(e.truth_table().len(), 8);
        assert_eq!(e.outputs()[0], false);
        assert!(e.outputs()[1..].iter().all(|&o| o));
    }

    #[test]
    fn test_set_expression_error_keeps_state() {
        let mut e = LogicExpr::new("a&b").unwrap();
        assert!(e.set_expression("a&").is_err());
        assert_eq!(e.infix(), "a&b");
        assert_eq!(e.outputs(), &[false, false, false, true]);
    }

    #[test]
    fn test_set_expression_partial() {
        let mut e = LogicExpr::new("a&b").unwrap();
        e.set_expression_partial("a|b").unwrap();
        assert_eq!(e.infix(), "a|b");
        assert_eq!(e.variables(), &['a', 'b']);
        assert_eq!(e.outputs(), &[false, true, true, true]);
    }

    #[test]
    fn test_set_expression_partial_subset_of_vars() {
        let mut e = LogicExpr::new("a&b").unwrap();
        e.set_expression_partial("~b").unwrap();
        assert_eq!(e.variables(), &['a', 'b']);
        assert_eq!(e.outputs(), &[true, false, true, false]);
    }

    #[test]
    fn test_set_expression_partial_unknown_variable() {
        let mut e = LogicExpr::new("a&b").unwrap();
        let res = e.set_expression_partial("a&c");
        assert_eq!(res, Err(ExprError::Eval(EvalError::UnknownVariable('c'))));
        assert_eq!(e.infix(), "a&b");
        assert_eq!(e.outputs(), &[false, false, false, true]);
    }

    #[test]
    fn test_set_expression_partial_keeps_order() {
        let mut e = LogicExpr::new("a&~b").unwrap();
        e.set_order(VarOrder::new(vec!['b', 'a']));
        e.set_expression_partial("a|b").unwrap();
        assert_eq!(e.variables(), &['b', 'a']);
    }

    #[test]
    fn test_eval_at() {
        let e = LogicExpr::new("a&~b").unwrap();
        assert_eq!(e.eval_at(&[true, false]), Ok(true));
        assert_eq!(e.eval_at(&[true, true]), Ok(false));
    }

    #[test]
    fn test_set_order_recomputes() {
        let mut e = LogicExpr::new("a&~b").unwrap();
        assert_eq!(e.outputs(), &[false, false, true, false]);
        e.set_order(VarOrder::new(vec!['b', 'a']));
        assert_eq!(e.variables(), &['b', 'a']);
        // Rows are now (b, a): 00, 01, 10, 11.
        assert_eq!(e.outputs(), &[false, true, false, false]);
    }

    #[test]
    #[should_panic(expected = "is not a permutation")]
    fn test_set_order_foreign_vars() {
        let mut e = LogicExpr::new("a&b").unwrap();
        e.set_order(VarOrder::new(vec!['a', 'c']));
    }
}
