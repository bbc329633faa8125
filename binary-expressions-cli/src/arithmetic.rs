use binary_expressions::notation::operator::{Associativity, BinaryOperator};
use std::fmt;
use std::fmt::Formatter;
use thiserror::Error;

/// Integer arithmetic on `i64`, with the usual priorities.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Arithmetic {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Power,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("negative exponent {0}")]
    NegativeExponent(i64),
    #[error("result does not fit in a 64-bit integer")]
    Overflow,
}

impl Arithmetic {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Arithmetic::Add),
            '-' => Some(Arithmetic::Subtract),
            '*' => Some(Arithmetic::Multiply),
            '/' => Some(Arithmetic::Divide),
            '%' => Some(Arithmetic::Remainder),
            '^' => Some(Arithmetic::Power),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Arithmetic::Add => '+',
            Arithmetic::Subtract => '-',
            Arithmetic::Multiply => '*',
            Arithmetic::Divide => '/',
            Arithmetic::Remainder => '%',
            Arithmetic::Power => '^',
        }
    }
}

impl BinaryOperator for Arithmetic {
    type Operand = i64;
    type Error = ArithmeticError;

    fn priority(&self) -> i32 {
        match self {
            Arithmetic::Add | Arithmetic::Subtract => 30,
            Arithmetic::Multiply | Arithmetic::Divide | Arithmetic::Remainder => 50,
            Arithmetic::Power => 70,
        }
    }

    fn associativity(&self) -> Associativity {
        match self {
            Arithmetic::Power => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    fn apply(&self, lhs: i64, rhs: i64) -> Result<i64, ArithmeticError> {
        match self {
            Arithmetic::Add => lhs.checked_add(rhs).ok_or(ArithmeticError::Overflow),
            Arithmetic::Subtract => lhs.checked_sub(rhs).ok_or(ArithmeticError::Overflow),
            Arithmetic::Multiply => lhs.checked_mul(rhs).ok_or(ArithmeticError::Overflow),
            Arithmetic::Divide | Arithmetic::Remainder if rhs == 0 => {
                Err(ArithmeticError::DivisionByZero)
            }
            Arithmetic::Divide => lhs.checked_div(rhs).ok_or(ArithmeticError::Overflow),
            Arithmetic::Remainder => lhs.checked_rem(rhs).ok_or(ArithmeticError::Overflow),
            Arithmetic::Power => {
                let exponent =
                    u32::try_from(rhs).map_err(|_| ArithmeticError::NegativeExponent(rhs))?;
                lhs.checked_pow(exponent).ok_or(ArithmeticError::Overflow)
            }
        }
    }
}

impl fmt::Display for Arithmetic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
