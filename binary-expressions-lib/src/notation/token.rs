use crate::notation::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of a binary expression, in either infix or postfix notation.
pub enum Token<Op: BinaryOperator> {
    OpeningBracket,
    ClosingBracket,
    Operand(Op::Operand),
    Operator(Op),
}

/// The grammatical category of a token, disregarding its payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    OpeningBracket,
    ClosingBracket,
    Operand,
    Operator,
}

impl<Op: BinaryOperator> Token<Op> {
    pub fn category(&self) -> TokenCategory {
        match self {
            Token::OpeningBracket => TokenCategory::OpeningBracket,
            Token::ClosingBracket => TokenCategory::ClosingBracket,
            Token::Operand(_) => TokenCategory::Operand,
            Token::Operator(_) => TokenCategory::Operator,
        }
    }

    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Operand(_))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }

    pub fn is_bracket(&self) -> bool {
        matches!(self, Token::OpeningBracket | Token::ClosingBracket)
    }
}

impl<Op> Clone for Token<Op>
where
    Op: BinaryOperator + Clone,
    Op::Operand: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Token::OpeningBracket => Token::OpeningBracket,
            Token::ClosingBracket => Token::ClosingBracket,
            Token::Operand(value) => Token::Operand(value.clone()),
            Token::Operator(operator) => Token::Operator(operator.clone()),
        }
    }
}

impl<Op> PartialEq for Token<Op>
where
    Op: BinaryOperator + PartialEq,
    Op::Operand: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Token::OpeningBracket, Token::OpeningBracket) => true,
            (Token::ClosingBracket, Token::ClosingBracket) => true,
            (Token::Operand(value1), Token::Operand(value2)) => value1 == value2,
            (Token::Operator(operator1), Token::Operator(operator2)) => operator1 == operator2,
            _ => false, // token1 and token2 are different variants
        }
    }
}

impl<Op> Eq for Token<Op>
where
    Op: BinaryOperator + Eq,
    Op::Operand: Eq,
{
}

impl<Op> fmt::Display for Token<Op>
where
    Op: BinaryOperator + fmt::Display,
    Op::Operand: fmt::Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpeningBracket => write!(f, "("),
            Token::ClosingBracket => write!(f, ")"),
            Token::Operand(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
        }
    }
}

impl<Op> fmt::Debug for Token<Op>
where
    Op: BinaryOperator + fmt::Debug,
    Op::Operand: fmt::Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpeningBracket => write!(f, "("),
            Token::ClosingBracket => write!(f, ")"),
            Token::Operand(value) => write!(f, "{:?}", value),
            Token::Operator(operator) => write!(f, "{:?}", operator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::test_operators::{close, n, op, open, MockOperator};

    #[test]
    fn tokens_are_equal_when_variant_and_payload_are_equal() {
        assert_eq!(n(10), n(10));
        assert_eq!(op(MockOperator::Add), op(MockOperator::Add));
        assert_eq!(open(), open());
        assert_eq!(close(), close());
    }

    #[test]
    fn tokens_differ_when_payload_differs() {
        assert_ne!(n(10), n(20));
        assert_ne!(op(MockOperator::Add), op(MockOperator::Subtract));
    }

    #[test]
    fn tokens_differ_when_variant_differs() {
        assert_ne!(open(), close());
        assert_ne!(n(10), op(MockOperator::Add));
    }

    #[test]
    fn category_ignores_payload() {
        assert_eq!(n(1).category(), n(2).category());
        assert_eq!(
            op(MockOperator::Add).category(),
            op(MockOperator::Power).category()
        );
        assert_eq!(open().category(), TokenCategory::OpeningBracket);
        assert_eq!(close().category(), TokenCategory::ClosingBracket);
    }

    #[test]
    fn predicates_match_variants() {
        assert!(n(1).is_operand());
        assert!(op(MockOperator::Add).is_operator());
        assert!(open().is_bracket());
        assert!(close().is_bracket());
        assert!(!n(1).is_bracket());
    }

    #[test]
    fn tokens_display_as_their_symbols() {
        let tokens = [open(), n(3), op(MockOperator::Multiply), n(4), close()];
        let text: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();
        assert_eq!(text, ["(", "3", "*", "4", ")"]);
    }
}
