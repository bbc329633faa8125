use crate::notation::error::{EvaluationError, StructuralError};
use crate::notation::evaluator::evaluate_by_mapping;
use crate::notation::operator::BinaryOperator;
use crate::notation::token::Token;
use std::convert::Infallible;

/// A piece of infix expression together with its main operator, the operator applied
/// last when evaluating it.
///
/// Without a main operator the tokens are a single operand. The main operator decides
/// whether the piece needs brackets when combined with another operator.
pub(crate) struct SubInfixExpression<Op: BinaryOperator> {
    tokens: Vec<Token<Op>>,
    main_operator: Option<Op>,
}

impl<Op> SubInfixExpression<Op>
where
    Op: BinaryOperator + Clone,
{
    pub(crate) fn operand(value: Op::Operand) -> Self {
        SubInfixExpression {
            tokens: vec![Token::Operand(value)],
            main_operator: None,
        }
    }

    /// Joins `lhs` and `rhs` with `operator`, bracketing either side when its main
    /// operator would otherwise not be applied before `operator`.
    pub(crate) fn combine(lhs: Self, operator: Op, rhs: Self) -> Self {
        let bracket_lhs = needs_brackets_on_left(lhs.main_operator.as_ref(), &operator);
        let bracket_rhs = needs_brackets_on_right(&operator, rhs.main_operator.as_ref());

        let mut tokens = Vec::with_capacity(lhs.tokens.len() + rhs.tokens.len() + 5);
        push_bracketed_if(&mut tokens, bracket_lhs, lhs.tokens);
        tokens.push(Token::Operator(operator.clone()));
        push_bracketed_if(&mut tokens, bracket_rhs, rhs.tokens);

        SubInfixExpression {
            tokens,
            main_operator: Some(operator),
        }
    }

    pub(crate) fn into_tokens(self) -> Vec<Token<Op>> {
        self.tokens
    }
}

/// A left side stays bare only if the converter would flush its main operator when
/// reaching `operator`.
fn needs_brackets_on_left<Op: BinaryOperator>(main_operator: Option<&Op>, operator: &Op) -> bool {
    match main_operator {
        None => false,
        Some(main_operator) => !main_operator.goes_before(operator),
    }
}

/// A right side stays bare only if `operator` keeps waiting on the stack when the
/// converter reaches the side's main operator.
fn needs_brackets_on_right<Op: BinaryOperator>(operator: &Op, main_operator: Option<&Op>) -> bool {
    match main_operator {
        None => false,
        Some(main_operator) => operator.goes_before(main_operator),
    }
}

fn push_bracketed_if<Op: BinaryOperator>(
    tokens: &mut Vec<Token<Op>>,
    bracketed: bool,
    mut interior: Vec<Token<Op>>,
) {
    if bracketed {
        tokens.push(Token::OpeningBracket);
    }

    tokens.append(&mut interior);

    if bracketed {
        tokens.push(Token::ClosingBracket);
    }
}

/// Rebuilds an infix expression from a postfix one, adding only the brackets needed to
/// keep the evaluation order.
pub(crate) fn postfix_to_infix<Op>(postfix: &[Token<Op>]) -> Result<Vec<Token<Op>>, StructuralError>
where
    Op: BinaryOperator + Clone,
    Op::Operand: Clone,
{
    let root = evaluate_by_mapping(
        postfix,
        |operand| Ok::<_, Infallible>(SubInfixExpression::<Op>::operand(operand.clone())),
        |operator| {
            Ok(move |lhs: SubInfixExpression<Op>, rhs: SubInfixExpression<Op>| {
                Ok(SubInfixExpression::combine(lhs, operator.clone(), rhs))
            })
        },
    )
    .map_err(EvaluationError::into_structural)?;

    Ok(root.map(SubInfixExpression::into_tokens).unwrap_or_default())
}
