use crate::notation::operator::{Associativity, BinaryOperator};
use std::fmt;
use std::fmt::Formatter;
use std::rc::Rc;

/// An operator defined by a name, a priority, an associativity and a function.
///
/// Defaults to priority 30 and left associativity.
pub struct FunctionOperator<V, E> {
    name: String,
    priority: i32,
    associativity: Associativity,
    function: Rc<dyn Fn(V, V) -> Result<V, E>>,
}

impl<V, E> FunctionOperator<V, E> {
    pub const DEFAULT_PRIORITY: i32 = 30;

    pub fn new(name: impl Into<String>, function: impl Fn(V, V) -> Result<V, E> + 'static) -> Self {
        FunctionOperator {
            name: name.into(),
            priority: Self::DEFAULT_PRIORITY,
            associativity: Associativity::Left,
            function: Rc::new(function),
        }
    }

    pub fn with_priority(self, priority: i32) -> Self {
        FunctionOperator { priority, ..self }
    }

    pub fn with_associativity(self, associativity: Associativity) -> Self {
        FunctionOperator {
            associativity,
            ..self
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<V, E> BinaryOperator for FunctionOperator<V, E> {
    type Operand = V;
    type Error = E;

    fn priority(&self) -> i32 {
        self.priority
    }

    fn associativity(&self) -> Associativity {
        self.associativity
    }

    fn apply(&self, lhs: V, rhs: V) -> Result<V, E> {
        (self.function)(lhs, rhs)
    }
}

impl<V, E> Clone for FunctionOperator<V, E> {
    fn clone(&self) -> Self {
        FunctionOperator {
            name: self.name.clone(),
            priority: self.priority,
            associativity: self.associativity,
            function: Rc::clone(&self.function),
        }
    }
}

impl<V, E> PartialEq for FunctionOperator<V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.priority == other.priority
            && self.associativity == other.associativity
    }
}

impl<V, E> fmt::Debug for FunctionOperator<V, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionOperator")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("associativity", &self.associativity)
            .finish()
    }
}

impl<V, E> fmt::Display for FunctionOperator<V, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Either a concrete operator or an ad-hoc [`FunctionOperator`] over the same operand
/// and error types, so both can appear in one expression.
pub enum AnyOperator<Op: BinaryOperator> {
    Concrete(Op),
    Function(FunctionOperator<Op::Operand, Op::Error>),
}

impl<Op: BinaryOperator> BinaryOperator for AnyOperator<Op> {
    type Operand = Op::Operand;
    type Error = Op::Error;

    fn priority(&self) -> i32 {
        match self {
            AnyOperator::Concrete(operator) => operator.priority(),
            AnyOperator::Function(operator) => operator.priority(),
        }
    }

    fn associativity(&self) -> Associativity {
        match self {
            AnyOperator::Concrete(operator) => operator.associativity(),
            AnyOperator::Function(operator) => operator.associativity(),
        }
    }

    fn apply(&self, lhs: Self::Operand, rhs: Self::Operand) -> Result<Self::Operand, Self::Error> {
        match self {
            AnyOperator::Concrete(operator) => operator.apply(lhs, rhs),
            AnyOperator::Function(operator) => operator.apply(lhs, rhs),
        }
    }
}

impl<Op: BinaryOperator> From<Op> for AnyOperator<Op> {
    fn from(operator: Op) -> Self {
        AnyOperator::Concrete(operator)
    }
}

impl<Op: BinaryOperator + Clone> Clone for AnyOperator<Op> {
    fn clone(&self) -> Self {
        match self {
            AnyOperator::Concrete(operator) => AnyOperator::Concrete(operator.clone()),
            AnyOperator::Function(operator) => AnyOperator::Function(operator.clone()),
        }
    }
}

impl<Op: BinaryOperator + PartialEq> PartialEq for AnyOperator<Op> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AnyOperator::Concrete(operator1), AnyOperator::Concrete(operator2)) => {
                operator1 == operator2
            }
            (AnyOperator::Function(operator1), AnyOperator::Function(operator2)) => {
                operator1 == operator2
            }
            _ => false,
        }
    }
}

impl<Op: BinaryOperator + fmt::Debug> fmt::Debug for AnyOperator<Op> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AnyOperator::Concrete(operator) => write!(f, "{:?}", operator),
            AnyOperator::Function(operator) => write!(f, "{:?}", operator),
        }
    }
}

impl<Op: BinaryOperator + fmt::Display> fmt::Display for AnyOperator<Op> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AnyOperator::Concrete(operator) => write!(f, "{}", operator),
            AnyOperator::Function(operator) => write!(f, "{}", operator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::test_operators::{MockError, MockOperator};
    use crate::notation::token::Token;
    use crate::notation::{evaluate, valid_infix};
    use pretty_assertions::assert_eq;

    fn modulo() -> FunctionOperator<i64, MockError> {
        FunctionOperator::new("%", |a: i64, b: i64| {
            a.checked_rem(b).ok_or(MockError::DivisionByZero)
        })
        .with_priority(50)
    }

    #[test]
    fn function_operator_uses_defaults() {
        let operator = FunctionOperator::new("max", |a: i64, b: i64| Ok::<i64, ()>(a.max(b)));

        assert_eq!(operator.priority(), 30);
        assert_eq!(operator.associativity(), Associativity::Left);
        assert_eq!(operator.name(), "max");
        assert_eq!(operator.apply(3, 7), Ok(7));
    }

    #[test]
    fn function_operator_builders_override_defaults() {
        let operator = modulo().with_associativity(Associativity::Right);

        assert_eq!(operator.priority(), 50);
        assert_eq!(operator.associativity(), Associativity::Right);
        assert_eq!(operator.apply(7, 0), Err(MockError::DivisionByZero));
    }

    #[test]
    fn any_operator_forwards_to_concrete_operator() {
        let operator = AnyOperator::from(MockOperator::Power);

        assert_eq!(operator.priority(), 70);
        assert_eq!(operator.associativity(), Associativity::Right);
        assert_eq!(operator.apply(2, 10), Ok(1024));
    }

    #[test]
    fn concrete_and_function_operators_mix_in_one_expression() {
        // 7 + 10 % 4
        let infix: Vec<Token<AnyOperator<MockOperator>>> = vec![
            Token::Operand(7),
            Token::Operator(MockOperator::Add.into()),
            Token::Operand(10),
            Token::Operator(AnyOperator::Function(modulo())),
            Token::Operand(4),
        ];

        assert_eq!(evaluate(&infix, true), Ok(9));
        assert_eq!(valid_infix(&infix), Ok(infix.clone()));
    }

    #[test]
    fn function_operators_compare_by_name_and_shape() {
        assert_eq!(modulo(), modulo());
        assert_ne!(modulo(), modulo().with_priority(10));
        assert_ne!(
            AnyOperator::<MockOperator>::Function(modulo()),
            AnyOperator::Concrete(MockOperator::Multiply)
        );
    }

    #[test]
    fn any_operator_displays_inner_symbol() {
        let concrete = AnyOperator::from(MockOperator::Add);
        let function = AnyOperator::<MockOperator>::Function(modulo());

        assert_eq!(concrete.to_string(), "+");
        assert_eq!(function.to_string(), "%");
    }
}
