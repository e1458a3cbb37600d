//! # logic-table: truth tables for propositional expressions
//!
//! **`logic-table`** parses propositional expressions over single-letter variables, computes
//! their full truth tables, and answers satisfiability, tautology and equivalence queries by
//! exhaustive enumeration.
//!
//! ## Syntax
//!
//! - Variables are single alphabetic characters (case-sensitive).
//! - `~` is negation, `&` is conjunction, `|` is disjunction.
//! - `~` binds tightest, then `&`, then `|`. Brackets group as usual.
//!
//! ## Basic Usage
//!
//! ```rust
//! use logic_table::expr::LogicExpr;
//!
//! let e = LogicExpr::new("a&b").unwrap();
//! assert_eq!(e.postfix().to_string(), "ab&");
//! assert!(e.is_satisfiable());
//! assert!(!e.is_tautology());
//!
//! // Variables that never affect the output do not break equivalence:
//! let mut f = LogicExpr::new("a|~a|b|~b").unwrap();
//! let mut g = LogicExpr::new("a|~a").unwrap();
//! assert!(f.is_tautology());
//! assert!(f.equivalent(&mut g));
//! ```
//!
//! ## Core Components
//!
//! - **[`parser`]**: infix to postfix conversion.
//! - **[`eval`]**: the postfix stack machine.
//! - **[`table`]**: assignment enumeration and truth tables.
//! - **[`expr`]**: the [`LogicExpr`][crate::expr::LogicExpr] entity.
//! - **[`redundancy`]**: redundant variables and semantic equivalence.
//! - **[`render`]**: plain-text tables.
//!
//! The cost of every query is exponential in the number of variables.

pub mod eval;
pub mod expr;
pub mod parser;
pub mod redundancy;
pub mod render;
pub mod sat;
pub mod table;
pub mod token;
pub mod utils;
pub mod vars;
