use crate::notation::error::{EvaluationError, StructuralError};
use crate::notation::operator::{BinaryOperator, RepresentableAsEmpty};
use crate::notation::token::Token;
use std::cell::Cell;
use std::convert::Infallible;

/// Folds a postfix expression, mapping every operand with `on_operand` and every
/// operator to a binary function with `on_operator`.
///
/// Operands are mapped and pushed on a stack. Each operator pops its right then its
/// left value, and pushes the result of applying its mapped function to them. Exactly
/// one value has to remain once all tokens are consumed.
///
/// # Arguments
///
/// * `tokens`: The expression, in postfix notation.
/// * `on_operand`: Maps an operand to the result type.
/// * `on_operator`: Maps an operator to a binary function over the result type.
///
/// returns: `None` for an empty expression, otherwise the folded value.
///
/// Brackets, missing operands and leftover operands are reported as
/// [`EvaluationError::NotValid`]. Failures of either mapping, or of a mapped function,
/// are forwarded as [`EvaluationError::Operator`].
///
/// # Examples
///
/// ```
/// use binary_expressions::notation::any_operator::FunctionOperator;
/// use binary_expressions::notation::evaluate_by_mapping;
/// use binary_expressions::notation::token::Token;
/// use std::convert::Infallible;
///
/// let add = FunctionOperator::new("+", |a: i64, b: i64| Ok::<i64, Infallible>(a + b));
/// let postfix = vec![Token::Operand(1), Token::Operand(2), Token::Operator(add)];
///
/// // Count the operands instead of adding them.
/// let count = evaluate_by_mapping(
///     &postfix,
///     |_| Ok::<usize, Infallible>(1),
///     |_| Ok(|lhs: usize, rhs: usize| Ok(lhs + rhs)),
/// );
/// assert_eq!(count, Ok(Some(2)));
/// ```
pub fn evaluate_by_mapping<'a, Op, R, E, B>(
    tokens: &'a [Token<Op>],
    mut on_operand: impl FnMut(&'a Op::Operand) -> Result<R, E>,
    mut on_operator: impl FnMut(&'a Op) -> Result<B, E>,
) -> Result<Option<R>, EvaluationError<E>>
where
    Op: BinaryOperator,
    B: FnOnce(R, R) -> Result<R, E>,
{
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut values: Vec<R> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::Operand(operand) => {
                let value = on_operand(operand).map_err(EvaluationError::Operator)?;
                values.push(value);
            }
            Token::Operator(operator) => {
                let rhs = values
                    .pop()
                    .ok_or(StructuralError::new("operator is missing its right operand"))?;
                let lhs = values
                    .pop()
                    .ok_or(StructuralError::new("operator is missing its left operand"))?;
                let operation = on_operator(operator).map_err(EvaluationError::Operator)?;
                let value = operation(lhs, rhs).map_err(EvaluationError::Operator)?;
                values.push(value);
            }
            Token::OpeningBracket | Token::ClosingBracket => {
                let reason = "brackets are not allowed in postfix notation";
                return Err(StructuralError::new(reason).into());
            }
        }
    }

    let result = values
        .pop()
        .ok_or(StructuralError::new("expression has no value"))?;
    if !values.is_empty() {
        return Err(StructuralError::new("operands are not all consumed by operators").into());
    }
    Ok(Some(result))
}

type ProbeOperation = fn((), ()) -> Result<(), Infallible>;

fn probe_operand<V>(_: &V) -> Result<(), Infallible> {
    Ok(())
}

fn probe_operation(_: (), _: ()) -> Result<(), Infallible> {
    Ok(())
}

fn probe_operator<Op>(_: &Op) -> Result<ProbeOperation, Infallible> {
    Ok(probe_operation as ProbeOperation)
}

/// Checks the shape of the expression as postfix without running a single operator.
pub(crate) fn check_postfix<Op: BinaryOperator>(
    tokens: &[Token<Op>],
) -> Result<(), StructuralError> {
    evaluate_by_mapping(tokens, probe_operand, probe_operator)
        .map(|_| ())
        .map_err(EvaluationError::into_structural)
}

/// Whether `tokens` is a valid expression in postfix notation.
///
/// The empty expression is valid. Operator semantics never affect the verdict.
pub fn is_valid_postfix<Op: BinaryOperator>(tokens: &[Token<Op>]) -> bool {
    check_postfix(tokens).is_ok()
}

/// Evaluates a postfix expression with the operators' own functions.
///
/// When `propagate_operator_errors` is false, a failing operator yields the empty value
/// as a placeholder so the fold can complete, and the whole result is then replaced by
/// the empty value.
pub(crate) fn evaluate_postfix<Op>(
    postfix: &[Token<Op>],
    propagate_operator_errors: bool,
) -> Result<Op::Operand, EvaluationError<Op::Error>>
where
    Op: BinaryOperator,
    Op::Operand: Clone + RepresentableAsEmpty,
{
    let operator_failed = Cell::new(false);
    let failed = &operator_failed;

    let result: Result<Option<Op::Operand>, EvaluationError<Op::Error>> = evaluate_by_mapping(
        postfix,
        |operand| Ok(operand.clone()),
        |operator| {
            Ok(move |lhs: Op::Operand, rhs: Op::Operand| match operator.apply(lhs, rhs) {
                Ok(value) => Ok(value),
                Err(error) if propagate_operator_errors => Err(error),
                Err(_) => {
                    failed.set(true);
                    Ok(RepresentableAsEmpty::empty())
                }
            })
        },
    );

    match result? {
        Some(value) if !operator_failed.get() => Ok(value),
        _ => Ok(RepresentableAsEmpty::empty()),
    }
}
