//! Infix to postfix conversion.
//!
//! The conversion is the classic operator-precedence (shunting) algorithm:
//!
//! - variables are emitted to the output directly,
//! - `(` is pushed onto the operator stack unconditionally,
//! - on `)`, operators are popped to the output until the matching `(`, which is discarded,
//! - any other operator first pops every stack-top operator whose priority is *strictly*
//!   greater than its own, and is then pushed,
//! - at the end of input, all remaining operators are popped to the output.
//!
//! Operators of equal priority are not popped, so `a|b|c` becomes `abc||`.
//!
//! The infix text is checked for well-formedness in the same pass: each operand position must
//! be filled by a variable, a negation, or a bracketed group, and each operator position by a
//! binary gate or a closing bracket. Whitespace is skipped.
//!
//! # Examples
//!
//! ```
//! use logic_table::parser::to_postfix;
//!
//! let postfix = to_postfix("a&b").unwrap();
//! assert_eq!(postfix.to_string(), "ab&");
//!
//! let postfix = to_postfix("~(a|b)&c").unwrap();
//! assert_eq!(postfix.to_string(), "ab|~c&");
//! ```

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use log::debug;

use crate::token::Token;

/// Error type for infix parsing.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// The input contains no tokens.
    Empty,
    /// A character outside the expression alphabet.
    UnexpectedChar { pos: usize, ch: char },
    /// An operand (variable, `~` or `(`) was expected at this position.
    MissingOperand { pos: usize },
    /// A binary gate or `)` was expected at this position.
    MissingOperator { pos: usize },
    /// A `)` without a matching `(`.
    UnmatchedClose { pos: usize },
    /// A `(` that is never closed.
    UnmatchedOpen,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty expression"),
            ParseError::UnexpectedChar { pos, ch } => write!(f, "unexpected character '{}' at {}", ch, pos),
            ParseError::MissingOperand { pos } => write!(f, "missing operand at {}", pos),
            ParseError::MissingOperator { pos } => write!(f, "missing operator at {}", pos),
            ParseError::UnmatchedClose { pos } => write!(f, "unmatched ')' at {}", pos),
            ParseError::UnmatchedOpen => write!(f, "unmatched '('"),
        }
    }
}

impl std::error::Error for ParseError {}

/// An expression in postfix order: operands first, then their operator.
///
/// Contains no brackets when produced by [`to_postfix`].
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Postfix(Vec<Token>);

impl Postfix {
    /// Wrap a raw token sequence without any validation.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Distinct variables appearing in the expression, in ascending order.
    pub fn variables(&self) -> BTreeSet<char> {
        self.0
            .iter()
            .filter_map(|t| match t {
                Token::Var(c) => Some(*c),
                _ => None,
            })
            .collect()
    }
}

impl Display for Postfix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for token in &self.0 {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Convert an infix expression over `~`, `&`, `|`, brackets and single-letter variables
/// into postfix order.
pub fn to_postfix(infix: &str) -> Result<Postfix, ParseError> {
    let mut output: Vec<Token> = Vec::with_capacity(infix.len());
    let mut stack: Vec<Token> = Vec::new();

    // Parser state: whether the next token must start an operand.
    let mut expect_operand = true;
    let mut end = 0;

    for (pos, c) in infix.chars().enumerate() {
        end = pos + 1;
        if c.is_whitespace() {
            continue;
        }
        let token = Token::from_char(c).ok_or(ParseError::UnexpectedChar { pos, ch: c })?;

        match token {
            Token::Var(_) | Token::Not | Token::Open if !expect_operand => {
                return Err(ParseError::MissingOperator { pos });
            }
            Token::And | Token::Or | Token::Close if expect_operand => {
                return Err(ParseError::MissingOperand { pos });
            }
            _ => {}
        }

        match token {
            Token::Var(_) => {
                output.push(token);
                expect_operand = false;
            }
            Token::Open => {
                stack.push(token);
            }
            Token::Close => loop {
                match stack.pop() {
                    Some(Token::Open) => break,
                    Some(op) => output.push(op),
                    None => return Err(ParseError::UnmatchedClose { pos }),
                }
            },
            op => {
                let priority = op.priority();
                while let Some(&top) = stack.last() {
                    if top.priority() > priority {
                        output.push(top);
                        stack.pop();
                    } else {
                        break;
                    }
                }
                stack.push(op);
                expect_operand = true;
            }
        }
    }

    if output.is_empty() && stack.is_empty() {
        return Err(ParseError::Empty);
    }
    if expect_operand {
        return Err(ParseError::MissingOperand { pos: end });
    }

    while let Some(op) = stack.pop() {
        if op == Token::Open {
            return Err(ParseError::UnmatchedOpen);
        }
        output.push(op);
    }

    let postfix = Postfix(output);
    debug!("to_postfix({:?}) = {}", infix, postfix);
    Ok(postfix)
}
