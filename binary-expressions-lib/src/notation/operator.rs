use std::fmt;
use std::fmt::Formatter;

/// The direction in which a chain of operators of equal priority groups.
///
/// Given `a # b # c`, a left associative `#` evaluates `a # b` first,
/// a right associative `#` evaluates `b # c` first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// A binary operator over values of type [`BinaryOperator::Operand`].
///
/// Implementors supply the priority (higher binds tighter), the associativity and
/// the binary function itself, which may fail with [`BinaryOperator::Error`].
pub trait BinaryOperator {
    type Operand;
    type Error;

    fn priority(&self) -> i32;

    fn associativity(&self) -> Associativity;

    fn apply(&self, lhs: Self::Operand, rhs: Self::Operand) -> Result<Self::Operand, Self::Error>;

    /// Whether `self`, already waiting on the operator stack, has to be emitted before
    /// `incoming` when converting to postfix.
    ///
    /// A left associative incoming operator flushes waiting operators of equal
    /// priority, a right associative one does not.
    fn goes_before(&self, incoming: &Self) -> bool
    where
        Self: Sized,
    {
        match incoming.associativity() {
            Associativity::Left => self.precedence_ge(incoming),
            Associativity::Right => self.precedence_gt(incoming),
        }
    }

    fn precedence_eq(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.priority().eq(&other.priority())
    }

    fn precedence_gt(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.priority().gt(&other.priority())
    }

    fn precedence_ge(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.priority().ge(&other.priority())
    }
}

/// A type with a designated empty value.
///
/// Evaluating an empty expression yields this value, as does an evaluation whose
/// operator failures were swallowed.
pub trait RepresentableAsEmpty {
    fn empty() -> Self;

    fn is_empty(&self) -> bool;
}

macro_rules! impl_empty_for_numbers {
    ($($number:ty => $zero:expr),* $(,)?) => {
        $(
            impl RepresentableAsEmpty for $number {
                fn empty() -> Self {
                    $zero
                }

                fn is_empty(&self) -> bool {
                    *self == $zero
                }
            }
        )*
    };
}

impl_empty_for_numbers!(
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    i128 => 0,
    isize => 0,
    u8 => 0,
    u16 => 0,
    u32 => 0,
    u64 => 0,
    u128 => 0,
    usize => 0,
    f32 => 0.0,
    f64 => 0.0,
);

impl RepresentableAsEmpty for String {
    fn empty() -> Self {
        String::new()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> RepresentableAsEmpty for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Associativity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Associativity::Left => write!(f, "left"),
            Associativity::Right => write!(f, "right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::test_operators::MockOperator;

    #[test]
    fn operator_equality_correspond_with_precedence() {
        let equal1 = MockOperator::Multiply;
        let equal2 = MockOperator::Divide;
        assert!(equal1.precedence_eq(&equal2))
    }

    #[test]
    fn operator_gt_correspond_with_precedence() {
        let greater = MockOperator::Multiply;
        let lesser = MockOperator::Add;
        assert!(greater.precedence_gt(&lesser))
    }

    #[test]
    fn operator_ge_correspond_with_precedence() {
        let equal1 = MockOperator::Multiply;
        let equal2 = MockOperator::Divide;
        assert!(equal1.precedence_ge(&equal2))
    }

    #[test]
    fn equal_priority_left_associative_waiting_operator_goes_before() {
        let waiting = MockOperator::Add;
        let incoming = MockOperator::Subtract;
        assert!(waiting.goes_before(&incoming))
    }

    #[test]
    fn equal_priority_right_associative_waiting_operator_stays() {
        let waiting = MockOperator::Power;
        let incoming = MockOperator::Power;
        assert!(!waiting.goes_before(&incoming))
    }

    #[test]
    fn lower_priority_waiting_operator_stays() {
        let waiting = MockOperator::Add;
        let incoming = MockOperator::Multiply;
        assert!(!waiting.goes_before(&incoming))
    }

    #[test]
    fn higher_priority_waiting_operator_goes_before_right_associative() {
        let waiting = MockOperator::Power;
        let incoming = MockOperator::custom('#', 10, Associativity::Right);
        assert!(waiting.goes_before(&incoming))
    }

    #[test]
    fn empty_values_are_empty() {
        assert!(RepresentableAsEmpty::is_empty(&i64::empty()));
        assert!(RepresentableAsEmpty::is_empty(&f64::empty()));
        assert!(RepresentableAsEmpty::is_empty(&String::empty()));
        assert!(RepresentableAsEmpty::is_empty(&Vec::<u8>::empty()));
        assert!(!RepresentableAsEmpty::is_empty(&"text".to_string()));
        assert!(!RepresentableAsEmpty::is_empty(&3u8));
    }

    #[test]
    fn associativity_displays_its_direction() {
        assert_eq!(Associativity::Left.to_string(), "left");
        assert_eq!(Associativity::Right.to_string(), "right");
    }
}
