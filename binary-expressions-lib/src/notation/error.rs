use std::convert::Infallible;
use thiserror::Error;

/// The token sequence does not form a valid binary expression in the notation it was
/// checked against.
///
/// Shape problems (unbalanced brackets, operators missing operands, brackets in postfix
/// input, ...) all map to this single error. The reason is informational only.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("not a valid binary expression: {reason}")]
pub struct StructuralError {
    reason: &'static str,
}

impl StructuralError {
    pub(crate) const fn new(reason: &'static str) -> Self {
        StructuralError { reason }
    }
}

/// Failure while folding a postfix expression.
///
/// `E` is the error type of the mapping functions, which for a real evaluation is the
/// operator's own error type. It is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError<E> {
    #[error(transparent)]
    NotValid(#[from] StructuralError),
    #[error("operator failed: {0}")]
    Operator(E),
}

impl<E> EvaluationError<E> {
    pub fn is_structural(&self) -> bool {
        matches!(self, EvaluationError::NotValid(_))
    }
}

impl EvaluationError<Infallible> {
    /// A fold whose mappings cannot fail can only fail on shape.
    pub(crate) fn into_structural(self) -> StructuralError {
        match self {
            EvaluationError::NotValid(error) => error,
            EvaluationError::Operator(never) => match never {},
        }
    }
}
