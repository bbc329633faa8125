use crate::arithmetic::Arithmetic;
use binary_expressions::notation::token::Token;
use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("integer {0} does not fit in a 64-bit integer")]
    OperandOutOfRange(String),
}

/// Splits `expression` into brackets, operators and non-negative integer operands.
///
/// Whitespace only separates tokens. A `-` is always the subtraction operator.
pub fn tokenize(expression: &str) -> Result<Vec<Token<Arithmetic>>, LexError> {
    let mut tokens = Vec::new();
    let mut characters = expression.char_indices().peekable();
    while let Some(&(position, character)) = characters.peek() {
        if character.is_ascii_digit() {
            let digits: String = characters
                .peeking_take_while(|(_, character)| character.is_ascii_digit())
                .map(|(_, digit)| digit)
                .collect();
            let value = digits
                .parse()
                .map_err(|_| LexError::OperandOutOfRange(digits.clone()))?;
            tokens.push(Token::Operand(value));
            continue;
        }

        characters.next();
        match character {
            '(' => tokens.push(Token::OpeningBracket),
            ')' => tokens.push(Token::ClosingBracket),
            whitespace if whitespace.is_whitespace() => {}
            symbol => match Arithmetic::from_symbol(symbol) {
                Some(operator) => tokens.push(Token::Operator(operator)),
                None => {
                    return Err(LexError::UnexpectedCharacter {
                        character: symbol,
                        position,
                    })
                }
            },
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tokenize_bracketed_expression() {
        let actual = tokenize("(10+2)*3").unwrap();

        assert_eq!(
            actual,
            vec![
                Token::OpeningBracket,
                Token::Operand(10),
                Token::Operator(Arithmetic::Add),
                Token::Operand(2),
                Token::ClosingBracket,
                Token::Operator(Arithmetic::Multiply),
                Token::Operand(3),
            ]
        )
    }

    #[test]
    fn whitespace_separates_operands() {
        let actual = tokenize(" 1  2\t^ ").unwrap();

        assert_eq!(
            actual,
            vec![
                Token::Operand(1),
                Token::Operand(2),
                Token::Operator(Arithmetic::Power),
            ]
        )
    }

    #[test]
    fn minus_is_always_an_operator() {
        let actual = tokenize("-5").unwrap();

        assert_eq!(
            actual,
            vec![Token::Operator(Arithmetic::Subtract), Token::Operand(5)]
        )
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("   ").unwrap().is_empty())
    }

    #[test]
    fn unknown_character_is_rejected_with_position() {
        let actual = tokenize("1 + x").unwrap_err();

        assert_eq!(
            actual,
            LexError::UnexpectedCharacter {
                character: 'x',
                position: 4
            }
        )
    }

    #[test]
    fn too_large_operand_is_rejected() {
        let actual = tokenize("99999999999999999999").unwrap_err();

        assert_eq!(
            actual,
            LexError::OperandOutOfRange("99999999999999999999".to_string())
        )
    }
}
