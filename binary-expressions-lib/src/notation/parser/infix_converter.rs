use crate::notation::error::StructuralError;
use crate::notation::evaluator::check_postfix;
use crate::notation::operator::BinaryOperator;
use crate::notation::parser::adjacency::validate_pair;
use crate::notation::token::Token;
use log::trace;

/// An entry of the operator stack. Operands and closing brackets never wait there.
enum Pending<'a, Op> {
    OpeningBracket,
    Operator(&'a Op),
}

pub(crate) fn infix_to_postfix<Op>(tokens: &[Token<Op>]) -> Result<Vec<Token<Op>>, StructuralError>
where
    Op: BinaryOperator + Clone,
    Op::Operand: Clone,
{
    if tokens.is_empty() {
        return Ok(vec![]);
    }

    let mut operators: Vec<Pending<Op>> = vec![];
    let mut output: Vec<Token<Op>> = Vec::with_capacity(tokens.len());
    let mut previous: Option<&Token<Op>> = None;
    for token in tokens {
        validate_pair(previous, token)?;
        match token {
            Token::Operand(_) => output.push(token.clone()),
            Token::OpeningBracket => operators.push(Pending::OpeningBracket),
            Token::ClosingBracket => parse_closing_bracket_token(&mut operators, &mut output)?,
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, operator)
            }
        };
        previous = Some(token);
    }

    // Only brackets and operators.
    if output.is_empty() {
        return Err(StructuralError::new("expression has no operands"));
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    // Catches dangling operators such as "10 +" that the pairwise check lets through.
    check_postfix(&output)?;

    trace!(
        "Converted {} infix tokens into {} postfix tokens",
        tokens.len(),
        output.len()
    );
    Ok(output)
}

fn transfer_leftover_operators<Op>(
    operators: &mut Vec<Pending<Op>>,
    output: &mut Vec<Token<Op>>,
) -> Result<(), StructuralError>
where
    Op: BinaryOperator + Clone,
{
    while let Some(pending) = operators.pop() {
        match pending {
            Pending::OpeningBracket => {
                return Err(StructuralError::new("opening bracket is never closed"));
            }
            Pending::Operator(operator) => output.push(Token::Operator(operator.clone())),
        }
    }
    Ok(())
}

fn parse_closing_bracket_token<Op>(
    operators: &mut Vec<Pending<Op>>,
    output: &mut Vec<Token<Op>>,
) -> Result<(), StructuralError>
where
    Op: BinaryOperator + Clone,
{
    while let Some(pending) = operators.pop() {
        match pending {
            // Discard the opening bracket.
            Pending::OpeningBracket => return Ok(()),
            Pending::Operator(operator) => output.push(Token::Operator(operator.clone())),
        }
    }
    Err(StructuralError::new(
        "closing bracket has no matching opening bracket",
    ))
}

fn parse_operator_token<'a, Op>(
    operators: &mut Vec<Pending<'a, Op>>,
    output: &mut Vec<Token<Op>>,
    operator: &'a Op,
) where
    Op: BinaryOperator + Clone,
{
    while let Some(&Pending::Operator(other_operator)) = operators.last() {
        if !other_operator.goes_before(operator) {
            break;
        }
        operators.pop();
        output.push(Token::Operator(other_operator.clone()));
    }

    operators.push(Pending::Operator(operator));
}
