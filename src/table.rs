//! Exhaustive truth tables.
//!
//! For `n` variables the table holds all `2^n` assignments in the order produced by fixing
//! the first variable to `false` then `true`, and for each of those the second variable,
//! and so on. Row `i` is the binary expansion of `i`, with the first variable as the most
//! significant bit:
//!
//! ```text
//! row  a b
//!   0  0 0
//!   1  0 1
//!   2  1 0
//!   3  1 1
//! ```
//!
//! Zero variables yield a single empty assignment.

use log::debug;

use crate::eval::{Eval, EvalError};
use crate::vars::VarOrder;

/// One value per variable, indexed by variable position.
pub type Assignment = Vec<bool>;

/// All `2^n` assignments of `n` variables in enumeration order.
///
/// # Panics
///
/// Panics if `2^n` does not fit into `usize`.
pub fn enumerate_assignments(n: usize) -> Vec<Assignment> {
    assert!(n < usize::BITS as usize, "Too many variables for exhaustive enumeration: {}", n);

    let size = 1usize << n;
    (0..size)
        .map(|i| (0..n).map(|j| (i >> (n - 1 - j)) & 1 == 1).collect())
        .collect()
}

/// Assignments paired with the outputs of an expression.
///
/// # Invariants
///
/// - Once evaluated, `outputs().len() == assignments().len()` and output `i` belongs to
///   assignment `i`.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TruthTable {
    num_vars: usize,
    assignments: Vec<Assignment>,
    outputs: Vec<bool>,
}

impl TruthTable {
    /// Creates a table with all assignments of `num_vars` variables and no outputs yet.
    pub fn new(num_vars: usize) -> Self {
        let assignments = enumerate_assignments(num_vars);
        debug!("Generated {} assignments for {} variables", assignments.len(), num_vars);
        Self {
            num_vars,
            assignments,
            outputs: Vec::new(),
        }
    }

    /// Recomputes every output, discarding the previous ones.
    ///
    /// `order` gives the variable at each assignment position and must have exactly
    /// `num_vars()` variables. On error the previous outputs are kept.
    pub fn evaluate(&mut self, expr: &impl Eval, order: &VarOrder) -> Result<(), EvalError> {
        assert_eq!(
            order.len(),
            self.num_vars,
            "Variable order has {} variables, table has {}",
            order.len(),
            self.num_vars
        );

        self.outputs = self
            .assignments
            .iter()
            .map(|assignment| expr.eval(order, assignment))
            .collect::<Result<Vec<bool>, EvalError>>()?;
        Ok(())
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn outputs(&self) -> &[bool] {
        &self.outputs
    }

    /// Number of rows (`2^n`).
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Rows as `(assignment, output)` pairs.
    pub fn rows(&self) -> impl Iterator<Item = (&[bool], bool)> + '_ {
        self.assignments
            .iter()
            .zip(self.outputs.iter())
            .map(|(a, &o)| (a.as_slice(), o))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::parser::to_postfix;

    #[test]
    fn test_enumerate_zero() {
        assert_eq!(enumerate_assignments(0), vec![Vec::<bool>::new()]);
    }

    #[test]
    fn test_enumerate_two() {
        let rows = enumerate_assignments(2);
        assert_eq!(
            rows,
            vec![
                vec![false, false],
                vec![false, true],
                vec![true, false],
                vec![true, true],
            ]
        );
    }

    #[test]
    fn test_enumerate_sizes() {
        for n in 0..=6 {
            let rows = enumerate_assignments(n);
            assert_eq!(rows.len(), 1 << n);
            assert!(rows.iter().all(|r| r.len() == n));
        }
    }

    #[test]
    fn test_enumerate_matches_recursive_branching() {
        fn recurse(state: &mut Vec<bool>, i: usize, out: &mut Vec<Assignment>) {
            if i == state.len() {
                out.push(state.clone());
                return;
            }
            state[i] = false;
            recurse(state, i + 1, out);
            state[i] = true;
            recurse(state, i + 1, out);
        }

        for n in 0..=5 {
            let mut expected = Vec::new();
            recurse(&mut vec![false; n], 0, &mut expected);
            assert_eq!(enumerate_assignments(n), expected);
        }
    }

    #[test]
    fn test_evaluate_and() {
        let p = to_postfix("a&b").unwrap();
        let order = VarOrder::from_set(&p.variables());
        let mut table = TruthTable::new(order.len());
        table.evaluate(&p, &order).unwrap();
        assert_eq!(table.outputs(), &[false, false, false, true]);
        assert_eq!(table.len(), table.outputs().len());
    }

    #[test]
    fn test_evaluate_replaces_outputs() {
        let order = VarOrder::new(vec!['a']);
        let mut table = TruthTable::new(1);
        table.evaluate(&to_postfix("a").unwrap(), &order).unwrap();
        table.evaluate(&to_postfix("~a").unwrap(), &order).unwrap();
        assert_eq!(table.outputs(), &[true, false]);
    }

    #[test]
    fn test_rows() {
        let p = to_postfix("~a").unwrap();
        let order = VarOrder::from_set(&p.variables());
        let mut table = TruthTable::new(1);
        table.evaluate(&p, &order).unwrap();
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows, vec![(&[false][..], true), (&[true][..], false)]);
    }

    #[test]
    #[should_panic(expected = "Variable order has")]
    fn test_evaluate_order_mismatch() {
        let mut table = TruthTable::new(2);
        let _ = table.evaluate(&to_postfix("a").unwrap(), &VarOrder::new(vec!['a']));
    }
}
