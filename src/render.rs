//! Plain-text truth tables.
//!
//! The default layout has a header with one column per variable followed by the output
//! column, a horizontal rule, and one line per row:
//!
//! ```text
//! a | b | Expr
//! ------------
//! 0 | 0 | 0
//! 0 | 1 | 0
//! 1 | 0 | 0
//! 1 | 1 | 1
//! ```
//!
//! # Examples
//!
//! ```
//! use logic_table::expr::LogicExpr;
//! use logic_table::render::RenderConfig;
//!
//! let e = LogicExpr::new("a|b").unwrap();
//! let config = RenderConfig {
//!     satisfying_only: true,
//!     ..RenderConfig::default()
//! };
//! let table = e.to_table_string_with_config(&config).unwrap();
//! assert_eq!(table.lines().count(), 2 + 3);
//! ```

use std::fmt::Write as _;

use crate::expr::LogicExpr;

/// Configuration options for truth table rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Column separator (default: `" | "`)
    pub separator: &'static str,
    /// Header of the output column (default: `"Expr"`)
    pub output_label: &'static str,
    /// Character repeated to form the rule under the header (default: `'-'`)
    pub rule_char: char,
    /// Only list rows whose output is true (default: `false`)
    pub satisfying_only: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            separator: " | ",
            output_label: "Expr",
            rule_char: '-',
            satisfying_only: false,
        }
    }
}

impl LogicExpr {
    /// Renders the truth table with the default configuration.
    pub fn to_table_string(&self) -> Result<String, std::fmt::Error> {
        self.to_table_string_with_config(&RenderConfig::default())
    }

    /// Renders the truth table, columns in the current variable order.
    pub fn to_table_string_with_config(&self, config: &RenderConfig) -> Result<String, std::fmt::Error> {
        let mut out = String::new();

        for var in self.variables() {
            write!(out, "{}{}", var, config.separator)?;
        }
        writeln!(out, "{}", config.output_label)?;

        let width = self.variables().len() * (1 + config.separator.chars().count()) + config.output_label.chars().count();
        let rule: String = std::iter::repeat(config.rule_char).take(width).collect();
        writeln!(out, "{}", rule)?;

        for (assignment, output) in self.truth_table().rows() {
            if config.satisfying_only && !output {
                continue;
            }
            for &value in assignment {
                write!(out, "{}{}", value as u8, config.separator)?;
            }
            writeln!(out, "{}", output as u8)?;
        }

        Ok(out)
    }
}
