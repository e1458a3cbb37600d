use num_bigint::BigUint;

use crate::expr::LogicExpr;
use crate::table::TruthTable;

impl TruthTable {
    /// Returns `true` if every output is `true`.
    ///
    /// Stops at the first `false` output.
    pub fn is_tautology(&self) -> bool {
        self.outputs().iter().all(|&o| o)
    }

    /// Returns `true` if at least one output is `true`.
    ///
    /// Stops at the first `true` output.
    pub fn is_satisfiable(&self) -> bool {
        self.outputs().iter().any(|&o| o)
    }

    /// Number of rows with a `true` output.
    pub fn sat_count(&self) -> BigUint {
        self.outputs().iter().filter(|&&o| o).fold(BigUint::ZERO, |acc, _| acc + 1u32)
    }

    /// Assignments whose output is `true`, in row order.
    pub fn sat_assignments(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.rows().filter(|&(_, o)| o).map(|(a, _)| a)
    }
}

impl LogicExpr {
    /// Returns `true` if the expression is true under every assignment.
    pub fn is_tautology(&self) -> bool {
        self.truth_table().is_tautology()
    }

    /// Returns `true` if the expression is true under some assignment.
    pub fn is_satisfiable(&self) -> bool {
        self.truth_table().is_satisfiable()
    }

    /// Number of satisfying assignments over the current variables.
    pub fn sat_count(&self) -> BigUint {
        self.truth_table().sat_count()
    }

    /// Returns the first satisfying assignment in row order, if any exists.
    ///
    /// The assignment is returned as `(variable, value)` pairs in the current variable order.
    pub fn one_sat(&self) -> Option<Vec<(char, bool)>> {
        self.sat_assignments().next()
    }

    /// All satisfying assignments as `(variable, value)` pairs, in row order.
    pub fn sat_assignments(&self) -> impl Iterator<Item = Vec<(char, bool)>> + '_ {
        let vars = self.variables();
        self.truth_table()
            .sat_assignments()
            .map(move |a| vars.iter().copied().zip(a.iter().copied()).collect())
    }
}
