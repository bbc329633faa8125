pub mod any_operator;
pub mod error;
mod evaluator;
pub mod operator;
pub mod parser;
pub mod syntax;
#[cfg(test)]
mod test_operators;
pub mod token;

pub use crate::notation::error::{EvaluationError, StructuralError};
pub use crate::notation::evaluator::{evaluate_by_mapping, is_valid_postfix};
pub use crate::notation::parser::is_valid_infix;
pub use crate::notation::syntax::expression_tree::render_tree;

use crate::notation::evaluator::evaluate_postfix;
use crate::notation::operator::{BinaryOperator, RepresentableAsEmpty};
use crate::notation::parser::infix_to_postfix;
use crate::notation::syntax::postfix_to_infix;
use crate::notation::token::Token;
use anyhow::{Context, Result};
use log::debug;
use std::fmt::Display;
use string_builder::Builder;

/// Converts an expression in either notation into postfix notation.
///
/// Input that already is valid postfix is returned unchanged, anything else is parsed
/// as infix.
pub fn valid_postfix<Op>(tokens: &[Token<Op>]) -> Result<Vec<Token<Op>>, StructuralError>
where
    Op: BinaryOperator + Clone,
    Op::Operand: Clone,
{
    if is_valid_postfix(tokens) {
        return Ok(tokens.to_vec());
    }
    infix_to_postfix(tokens)
}

/// Converts an expression in either notation into infix notation with the fewest
/// brackets that keep its evaluation order.
pub fn valid_infix<Op>(tokens: &[Token<Op>]) -> Result<Vec<Token<Op>>, StructuralError>
where
    Op: BinaryOperator + Clone,
    Op::Operand: Clone,
{
    let postfix = valid_postfix(tokens)?;
    postfix_to_infix(&postfix)
}

fn non_empty_postfix<Op>(tokens: &[Token<Op>]) -> Result<Vec<Token<Op>>, StructuralError>
where
    Op: BinaryOperator + Clone,
    Op::Operand: Clone,
{
    let postfix = valid_postfix(tokens)?;
    if postfix.is_empty() {
        return Err(StructuralError::new("operand expression is empty"));
    }
    Ok(postfix)
}

/// Joins two expressions with `operator`, as `lhs operator rhs` in postfix notation.
///
/// Each side may be in either notation but has to be non-empty.
///
/// # Examples
///
/// ```
/// use binary_expressions::notation::any_operator::FunctionOperator;
/// use binary_expressions::notation::postfix_by;
/// use binary_expressions::notation::token::Token;
/// use std::convert::Infallible;
///
/// let add = FunctionOperator::new("+", |a: i64, b: i64| Ok::<i64, Infallible>(a + b));
/// let joined = postfix_by(&[Token::Operand(1)], add.clone(), &[Token::Operand(2)]).unwrap();
///
/// assert_eq!(joined, vec![Token::Operand(1), Token::Operand(2), Token::Operator(add)]);
/// ```
pub fn postfix_by<Op>(
    lhs: &[Token<Op>],
    operator: Op,
    rhs: &[Token<Op>],
) -> Result<Vec<Token<Op>>, StructuralError>
where
    Op: BinaryOperator + Clone,
    Op::Operand: Clone,
{
    let mut postfix = non_empty_postfix(lhs)?;
    postfix.append(&mut non_empty_postfix(rhs)?);
    postfix.push(Token::Operator(operator));
    Ok(postfix)
}

/// Same as [`postfix_by`], with the result in minimally bracketed infix notation.
pub fn infix_by<Op>(
    lhs: &[Token<Op>],
    operator: Op,
    rhs: &[Token<Op>],
) -> Result<Vec<Token<Op>>, StructuralError>
where
    Op: BinaryOperator + Clone,
    Op::Operand: Clone,
{
    let postfix = postfix_by(lhs, operator, rhs)?;
    postfix_to_infix(&postfix)
}

/// Evaluates an expression in either notation.
///
/// # Arguments
///
/// * `tokens`: The expression, infix or postfix.
/// * `propagate_operator_errors`: Whether an operator failure is returned as
/// [`EvaluationError::Operator`]. Otherwise the result is the empty value.
///
/// returns: The value of the expression, or the empty value for an empty expression.
///
/// # Examples
///
/// ```
/// use binary_expressions::notation::any_operator::FunctionOperator;
/// use binary_expressions::notation::evaluate;
/// use binary_expressions::notation::token::Token;
///
/// let divide = FunctionOperator::new("/", |a: i64, b: i64| {
///     a.checked_div(b).ok_or("division by zero")
/// });
/// let by_zero = vec![Token::Operand(1), Token::Operator(divide), Token::Operand(0)];
///
/// assert!(evaluate(&by_zero, true).is_err());
/// assert_eq!(evaluate(&by_zero, false), Ok(0));
/// ```
pub fn evaluate<Op>(
    tokens: &[Token<Op>],
    propagate_operator_errors: bool,
) -> Result<Op::Operand, EvaluationError<Op::Error>>
where
    Op: BinaryOperator + Clone,
    Op::Operand: Clone + RepresentableAsEmpty,
{
    let postfix = valid_postfix(tokens)?;
    let value = evaluate_postfix(&postfix, propagate_operator_errors);
    if let Err(EvaluationError::Operator(_)) = &value {
        debug!("Operator failed while evaluating {} tokens", postfix.len());
    }
    value
}

/// Writes the tokens separated by single spaces, except on the inner side of brackets.
///
/// # Examples
///
/// ```
/// # fn main() -> anyhow::Result<()> {
/// use binary_expressions::notation::any_operator::FunctionOperator;
/// use binary_expressions::notation::token::Token;
/// use binary_expressions::notation::tokens_to_string;
/// use std::convert::Infallible;
///
/// let add = FunctionOperator::new("+", |a: i64, b: i64| Ok::<i64, Infallible>(a + b));
/// let tokens = vec![
///     Token::OpeningBracket,
///     Token::Operand(1),
///     Token::Operator(add),
///     Token::Operand(2),
///     Token::ClosingBracket,
/// ];
/// assert_eq!(tokens_to_string(&tokens)?, "(1 + 2)");
/// # Ok(()) }
/// ```
pub fn tokens_to_string<Op>(tokens: &[Token<Op>]) -> Result<String>
where
    Op: BinaryOperator + Display,
    Op::Operand: Display,
{
    let mut builder = Builder::new(tokens.len() * 2);
    let mut previous: Option<&Token<Op>> = None;
    for token in tokens {
        match (previous, token) {
            (None, _) | (Some(Token::OpeningBracket), _) | (_, Token::ClosingBracket) => {}
            _ => builder.append(' '),
        }
        builder.append(token.to_string());
        previous = Some(token);
    }
    builder
        .string()
        .context("Could not build string from tokens")
}
