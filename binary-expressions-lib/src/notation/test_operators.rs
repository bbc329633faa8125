//! Integer operators and token shorthands shared by the unit tests.

use crate::notation::operator::{Associativity, BinaryOperator};
use crate::notation::token::Token;
use std::fmt;
use std::fmt::Formatter;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum MockOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Custom {
        symbol: char,
        priority: i32,
        associativity: Associativity,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MockError {
    DivisionByZero,
    NegativeExponent,
    Overflow,
}

impl fmt::Display for MockError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MockError::DivisionByZero => write!(f, "division by zero"),
            MockError::NegativeExponent => write!(f, "negative exponent"),
            MockError::Overflow => write!(f, "overflow"),
        }
    }
}

impl MockOperator {
    pub(crate) fn custom(symbol: char, priority: i32, associativity: Associativity) -> Self {
        MockOperator::Custom {
            symbol,
            priority,
            associativity,
        }
    }

    fn symbol(&self) -> char {
        match self {
            MockOperator::Add => '+',
            MockOperator::Subtract => '-',
            MockOperator::Multiply => '*',
            MockOperator::Divide => '/',
            MockOperator::Power => '^',
            MockOperator::Custom { symbol, .. } => *symbol,
        }
    }
}

impl BinaryOperator for MockOperator {
    type Operand = i64;
    type Error = MockError;

    fn priority(&self) -> i32 {
        match self {
            MockOperator::Add | MockOperator::Subtract => 30,
            MockOperator::Multiply | MockOperator::Divide => 50,
            MockOperator::Power => 70,
            MockOperator::Custom { priority, .. } => *priority,
        }
    }

    fn associativity(&self) -> Associativity {
        match self {
            MockOperator::Power => Associativity::Right,
            MockOperator::Custom { associativity, .. } => *associativity,
            _ => Associativity::Left,
        }
    }

    fn apply(&self, lhs: i64, rhs: i64) -> Result<i64, MockError> {
        match self {
            MockOperator::Add => lhs.checked_add(rhs).ok_or(MockError::Overflow),
            MockOperator::Subtract => lhs.checked_sub(rhs).ok_or(MockError::Overflow),
            MockOperator::Multiply => lhs.checked_mul(rhs).ok_or(MockError::Overflow),
            MockOperator::Divide if rhs == 0 => Err(MockError::DivisionByZero),
            MockOperator::Divide => lhs.checked_div(rhs).ok_or(MockError::Overflow),
            MockOperator::Power => {
                let exponent = u32::try_from(rhs).map_err(|_| MockError::NegativeExponent)?;
                lhs.checked_pow(exponent).ok_or(MockError::Overflow)
            }
            MockOperator::Custom { .. } => Ok(lhs.wrapping_mul(31).wrapping_add(rhs)),
        }
    }
}

impl fmt::Display for MockOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

pub(crate) fn n(value: i64) -> Token<MockOperator> {
    Token::Operand(value)
}

pub(crate) fn op(operator: MockOperator) -> Token<MockOperator> {
    Token::Operator(operator)
}

pub(crate) fn open() -> Token<MockOperator> {
    Token::OpeningBracket
}

pub(crate) fn close() -> Token<MockOperator> {
    Token::ClosingBracket
}

/// Splits `text` on whitespace: brackets, `+ - * / ^` and integers.
pub(crate) fn tokens(text: &str) -> Vec<Token<MockOperator>> {
    text.split_whitespace()
        .map(|word| match word {
            "(" => open(),
            ")" => close(),
            "+" => op(MockOperator::Add),
            "-" => op(MockOperator::Subtract),
            "*" => op(MockOperator::Multiply),
            "/" => op(MockOperator::Divide),
            "^" => op(MockOperator::Power),
            number => n(number.parse().unwrap()),
        })
        .collect()
}
