//! Variable orders.
//!
//! A [`VarOrder`] assigns each variable of an expression a fixed index. The index is the
//! bit position of the variable in every assignment and the column of the variable in the
//! rendered truth table. The first variable is the most significant one: it is fixed by the
//! outermost level of the enumeration.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::utils;

/// An ordered sequence of distinct variables.
///
/// # Invariants
///
/// - No variable appears twice.
/// - `position(vars()[i]) == Some(i)` for every index `i`.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct VarOrder {
    vars: Vec<char>,
    index: HashMap<char, usize>,
}

impl VarOrder {
    /// Creates an order from an explicit sequence of variables.
    ///
    /// # Panics
    ///
    /// Panics if a variable appears more than once.
    pub fn new(vars: Vec<char>) -> Self {
        let mut index = HashMap::with_capacity(vars.len());
        for (i, &v) in vars.iter().enumerate() {
            let prev = index.insert(v, i);
            assert!(prev.is_none(), "Variable '{}' appears twice in the order", v);
        }
        Self { vars, index }
    }

    /// The natural (ascending) order of a variable set.
    pub fn from_set(vars: &BTreeSet<char>) -> Self {
        Self::new(vars.iter().copied().collect())
    }

    pub fn vars(&self) -> &[char] {
        &self.vars
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Index of the variable in this order.
    pub fn position(&self, var: char) -> Option<usize> {
        self.index.get(&var).copied()
    }

    pub fn contains(&self, var: char) -> bool {
        self.index.contains_key(&var)
    }

    /// The variables as a set, forgetting the order.
    pub fn to_set(&self) -> BTreeSet<char> {
        self.vars.iter().copied().collect()
    }

    /// An order that places every variable outside `subset` first (ascending), followed by
    /// `subset` in the given order.
    ///
    /// With this order, `subset` occupies the least significant bits of the enumeration.
    pub fn with_suffix(&self, subset: &[char]) -> Self {
        let mut vars = utils::difference(&self.to_set(), &utils::to_set(subset));
        vars.extend_from_slice(subset);
        Self::new(vars)
    }
}

impl fmt::Display for VarOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.vars.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}
