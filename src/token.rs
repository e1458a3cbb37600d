//! Atoms of a propositional expression.
//!
//! Every character of an infix expression is either a variable (a single alphabetic
//! symbol, case-sensitive) or one of the five operator symbols:
//!
//! ```text
//! ~   negation (unary, prefix)
//! &   conjunction
//! |   disjunction
//! (   open bracket
//! )   close bracket
//! ```

use std::fmt::{Display, Formatter};

/// A single atom of an infix or postfix expression.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Token {
    Var(char),
    Not,
    And,
    Or,
    Open,
    Close,
}

impl Token {
    /// Classify a single character, or return `None` if it is not part of the alphabet.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '~' => Some(Token::Not),
            '&' => Some(Token::And),
            '|' => Some(Token::Or),
            '(' => Some(Token::Open),
            ')' => Some(Token::Close),
            c if c.is_alphabetic() => Some(Token::Var(c)),
            _ => None,
        }
    }

    /// The character this token is written as.
    pub const fn symbol(self) -> char {
        match self {
            Token::Var(c) => c,
            Token::Not => '~',
            Token::And => '&',
            Token::Or => '|',
            Token::Open => '(',
            Token::Close => ')',
        }
    }

    /// Binding strength of an operator: `~` = 2, `&` = 1, `|` = 0.
    ///
    /// Brackets and variables have no priority; an open bracket on the operator stack acts
    /// as a barrier that is never popped by an incoming operator.
    pub const fn priority(self) -> Option<u8> {
        match self {
            Token::Not => Some(2),
            Token::And => Some(1),
            Token::Or => Some(0),
            _ => None,
        }
    }

    /// The opposite binary gate (`&` <-> `|`), used when exploring single-gate flips.
    pub const fn flipped(self) -> Option<Self> {
        match self {
            Token::And => Some(Token::Or),
            Token::Or => Some(Token::And),
            _ => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
