pub mod adjacency;
mod infix_converter;

pub(crate) use crate::notation::parser::infix_converter::infix_to_postfix;

use crate::notation::operator::BinaryOperator;
use crate::notation::token::Token;
use log::debug;

/// Whether `tokens` is a valid expression in infix notation.
///
/// The empty expression is valid. Otherwise every adjacent pair of tokens has to be
/// grammatical and the brackets have to balance out into a valid postfix expression.
///
/// # Examples
///
/// ```
/// use binary_expressions::notation::any_operator::FunctionOperator;
/// use binary_expressions::notation::parser::is_valid_infix;
/// use binary_expressions::notation::token::Token;
/// use std::convert::Infallible;
///
/// let add = FunctionOperator::new("+", |a: i64, b: i64| Ok::<i64, Infallible>(a + b));
/// let infix = vec![Token::Operand(1), Token::Operator(add.clone()), Token::Operand(2)];
/// let postfix = vec![Token::Operand(1), Token::Operand(2), Token::Operator(add)];
///
/// assert!(is_valid_infix(&infix));
/// assert!(!is_valid_infix(&postfix));
/// ```
pub fn is_valid_infix<Op>(tokens: &[Token<Op>]) -> bool
where
    Op: BinaryOperator + Clone,
    Op::Operand: Clone,
{
    match infix_to_postfix(tokens) {
        Ok(_) => true,
        Err(error) => {
            debug!("Rejected infix expression: {}", error);
            false
        }
    }
}
