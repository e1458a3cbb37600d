//! Redundant variables and semantic equivalence.
//!
//! A set of variables is *redundant* for an expression when no change of their values ever
//! changes the output. The check moves the variables to keep (`subset`) to the end of the
//! variable order. `subset` then occupies the least significant bits of the enumeration, so
//! for a fixed valuation of `subset` the rows that vary only the other variables are
//! `i, i + 2^k, i + 2 * 2^k, ...` with `k = |subset|`. The others are redundant iff every
//! row equals the row at `i mod 2^k`.
//!
//! Both [`LogicExpr::is_other_variables_redundant`] and [`LogicExpr::equivalent`] reorder the
//! variables of the expressions they inspect, and the reordering is kept afterwards.
//! `PartialEq` runs the same comparison on copies and leaves its operands untouched.
//!
//! ```
//! use logic_table::expr::LogicExpr;
//!
//! let mut a = LogicExpr::new("a|~a|b|~b").unwrap();
//! let mut b = LogicExpr::new("a|~a").unwrap();
//! assert!(a.equivalent(&mut b));
//!
//! let c = LogicExpr::new("(a|b)&c").unwrap();
//! let d = LogicExpr::new("a&c|c&b").unwrap();
//! assert!(c == d);
//! ```

use log::debug;

use crate::expr::LogicExpr;
use crate::utils;

impl LogicExpr {
    /// Returns `true` if all variables outside `subset` are redundant.
    ///
    /// Afterwards the variable order is: the other variables (ascending), then `subset` in the
    /// given order.
    ///
    /// # Panics
    ///
    /// Panics if `subset` contains a variable the expression does not have, or the same
    /// variable twice.
    pub fn is_other_variables_redundant(&mut self, subset: &[char]) -> bool {
        let vars = self.order().to_set();
        assert!(
            utils::includes(&vars, &utils::to_set(subset)),
            "Variables {:?} are not a subset of {}",
            subset,
            self.order()
        );

        let order = self.order().with_suffix(subset);
        self.set_order(order);

        let boundary = 1usize << subset.len();
        let outputs = self.outputs();
        let redundant = (0..outputs.len()).all(|i| outputs[i] == outputs[i % boundary]);

        debug!(
            "Variables {} outside {:?} are {}redundant for {}",
            self.order(),
            subset,
            if redundant { "" } else { "not " },
            self
        );
        redundant
    }

    /// Semantic equivalence with `other`.
    ///
    /// - Without shared variables, the two are equivalent iff both are tautologies or both
    ///   are unsatisfiable.
    /// - Otherwise every unshared variable of either side must be redundant, and the two
    ///   must agree on every valuation of the shared variables.
    ///
    /// Either expression may have its variable order changed.
    pub fn equivalent(&mut self, other: &mut LogicExpr) -> bool {
        let vars1 = self.order().to_set();
        let vars2 = other.order().to_set();
        let common = utils::intersection(&vars1, &vars2);

        if common.is_empty() {
            let res = (self.is_tautology() && other.is_tautology()) || (!self.is_satisfiable() && !other.is_satisfiable());
            debug!("{} and {} share no variables, equivalent = {}", self, other, res);
            return res;
        }

        // Also reorders a side whose variables are exactly `common` but are not laid out in
        // that order, so that the first `2^k` rows of both sides line up.
        if self.variables() != common.as_slice() && !self.is_other_variables_redundant(&common) {
            debug!("{} depends on variables outside {:?}", self, common);
            return false;
        }
        if other.variables() != common.as_slice() && !other.is_other_variables_redundant(&common) {
            debug!("{} depends on variables outside {:?}", other, common);
            return false;
        }

        let boundary = 1usize << common.len();
        let res = self.outputs()[..boundary] == other.outputs()[..boundary];
        debug!("{} and {} over {:?}: equivalent = {}", self, other, common, res);
        res
    }
}

impl PartialEq for LogicExpr {
    /// Semantic equivalence, computed on copies of both operands.
    fn eq(&self, other: &Self) -> bool {
        self.clone().equivalent(&mut other.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn expr(s: &str) -> LogicExpr {
        LogicExpr::new(s).unwrap()
    }

    #[test]
    fn test_redundant_tautology_vars() {
        let mut e = expr("a|~a|b|~b");
        assert!(e.is_other_variables_redundant(&['a']));
        assert_eq!(e.variables(), &['b', 'a']);
    }

    #[test]
    fn test_not_redundant() {
        let mut e = expr("a&b");
        assert!(!e.is_other_variables_redundant(&['b']));
        assert_eq!(e.variables(), &['a', 'b']);
    }

    #[test]
    fn test_redundant_absorbed_var() {
        // a | (a & b) == a
        let mut e = expr("a|a&b");
        assert!(e.is_other_variables_redundant(&['a']));
        assert_eq!(e.variables(), &['b', 'a']);
    }

    #[test]
    fn test_redundant_full_subset() {
        let mut e = expr("a&b|c");
        assert!(e.is_other_variables_redundant(&['c', 'a', 'b']));
        assert_eq!(e.variables(), &['c', 'a', 'b']);
    }

    #[test]
    fn test_redundant_empty_subset() {
        let mut e = expr("a|~a");
        assert!(e.is_other_variables_redundant(&[]));
        let mut e = expr("a");
        assert!(!e.is_other_variables_redundant(&[]));
    }

    #[test]
    #[should_panic(expected = "are not a subset of")]
    fn test_redundant_precondition() {
        let mut e = expr("a&b");
        e.is_other_variables_redundant(&['c']);
    }

    #[test]
    fn test_equivalent_same_vars() {
        let mut a = expr("~(a&b)");
        let mut b = expr("~a|~b");
        assert!(a.equivalent(&mut b));
        assert!(b.equivalent(&mut a));
    }

    #[test]
    fn test_not_equivalent_same_vars() {
        let mut a = expr("a&b");
        let mut b = expr("a|b");
        assert!(!a.equivalent(&mut b));
    }

    #[test]
    fn test_equivalent_with_redundant_vars() {
        let mut a = expr("a|~a|b|~b");
        let mut b = expr("a|~a");
        assert!(a.equivalent(&mut b));
        assert_eq!(a.variables(), &['b', 'a']);
        assert_eq!(b.variables(), &['a']);
    }

    #[test]
    fn test_not_equivalent_with_relevant_extra_var() {
        let mut a = expr("a&b");
        let mut b = expr("a");
        assert!(!a.equivalent(&mut b));
        assert!(!b.equivalent(&mut a));
    }

    #[test]
    fn test_equivalent_disjoint_vars() {
        assert!(expr("a|~a").equivalent(&mut expr("b|~b")));
        assert!(expr("a&~a").equivalent(&mut expr("b&~b")));
        assert!(!expr("a|~a").equivalent(&mut expr("b&~b")));
        assert!(!expr("a").equivalent(&mut expr("b")));
    }

    #[test]
    fn test_equivalent_after_reorder() {
        let mut a = expr("a&~b");
        let mut b = expr("~b&a");
        // Permute `a` so that its columns no longer match `b`.
        assert!(a.is_other_variables_redundant(&['b', 'a']));
        assert_eq!(a.variables(), &['b', 'a']);
        assert!(a.equivalent(&mut b));
        assert!(b.equivalent(&mut a));
    }

    #[test]
    fn test_partial_eq_does_not_mutate() {
        let a = expr("a|~a|b|~b");
        let b = expr("a|~a");
        assert!(a == b);
        assert_eq!(a.variables(), &['a', 'b']);
    }

    #[test]
    fn test_partial_eq_reflexive() {
        for s in ["a", "a&b", "a|~a", "~(a|b)&c", "a&~a"] {
            let e = expr(s);
            assert!(e == e.clone(), "{} is not equal to itself", s);
        }
    }
}
