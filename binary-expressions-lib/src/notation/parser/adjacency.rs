use crate::notation::error::StructuralError;
use crate::notation::operator::BinaryOperator;
use crate::notation::token::{Token, TokenCategory};

/// Checks whether `current` may directly follow `previous` in an infix expression.
///
/// Only the token categories matter. Bracket balance is not checked here.
pub(crate) fn validate_pair<Op: BinaryOperator>(
    previous: Option<&Token<Op>>,
    current: &Token<Op>,
) -> Result<(), StructuralError> {
    let previous = match previous {
        None => return Ok(()),
        Some(previous) => previous.category(),
    };

    use TokenCategory::*;
    match (previous, current.category()) {
        // "( 10", "+ 10", "10 +", ") +", "( (", "+ (", "10 )", ") )"
        (OpeningBracket, Operand)
        | (Operator, Operand)
        | (Operand, Operator)
        | (ClosingBracket, Operator)
        | (OpeningBracket, OpeningBracket)
        | (Operator, OpeningBracket)
        | (Operand, ClosingBracket)
        | (ClosingBracket, ClosingBracket) => Ok(()),
        // "10 20", "10 (", ") 10", ") ("
        (Operand, Operand)
        | (Operand, OpeningBracket)
        | (ClosingBracket, Operand)
        | (ClosingBracket, OpeningBracket) => {
            Err(StructuralError::new("operand or bracket cannot follow an operand here"))
        }
        // "+ *", "+ )", "( +", "( )"
        (Operator, Operator)
        | (Operator, ClosingBracket)
        | (OpeningBracket, Operator)
        | (OpeningBracket, ClosingBracket) => {
            Err(StructuralError::new("operator or closing bracket is missing an operand"))
        }
    }
}

/// Applies [`validate_pair`] to every consecutive pair of `tokens`, stopping at the first
/// invalid one.
pub fn validate_adjacency<Op: BinaryOperator>(tokens: &[Token<Op>]) -> Result<(), StructuralError> {
    let mut previous = None;
    for token in tokens {
        validate_pair(previous, token)?;
        previous = Some(token);
    }
    Ok(())
}
