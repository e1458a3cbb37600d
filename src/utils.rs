use std::collections::BTreeSet;

/// Elements of `s1` that are also in `s2`, in ascending order.
///
/// ```text
/// {a, b, c} ∩ {b, c, d} = [b, c]
/// ```
pub fn intersection(s1: &BTreeSet<char>, s2: &BTreeSet<char>) -> Vec<char> {
    s1.intersection(s2).copied().collect()
}

/// Elements of `s1` that are not in `s2`, in ascending order.
///
/// ```text
/// {a, b, c} \ {b, d} = [a, c]
/// ```
pub fn difference(s1: &BTreeSet<char>, s2: &BTreeSet<char>) -> Vec<char> {
    s1.difference(s2).copied().collect()
}

/// Whether every element of `subset` is in `set` (non-strict inclusion).
pub fn includes(set: &BTreeSet<char>, subset: &BTreeSet<char>) -> bool {
    subset.is_subset(set)
}

/// Collect variables into a set, dropping duplicates.
pub fn to_set(vars: &[char]) -> BTreeSet<char> {
    vars.iter().copied().collect()
}
