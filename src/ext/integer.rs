//! Built-in scalars.
//!
//! Every integer primitive `T` is tagged `IntegerTag<T>` and is Comparable,
//! Orderable, Enumerable and a Monoid. Signed types are also a Group, a
//! Ring and an IntegralDomain; unsigned types have no `negate`.
//!
//! Operations only combine integers of the same type and behave like the
//! built-in operators, overflow and division by zero included.
//!
//! `bool` is tagged `BoolTag` and is Comparable and Logical.

use core::marker::PhantomData;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::concepts::{
    EqualImpl, EvalIfImpl, LessImpl, MinusImpl, MultImpl, NegateImpl, NotImpl, OneImpl,
    PlusImpl, PredImpl, QuotImpl, RemImpl, SuccImpl, WhileImpl, ZeroImpl,
};
use crate::dispatch::Tagged;
use crate::primitives::Eval;

/// Tag of the integer primitive `T`.
pub struct IntegerTag<T>(PhantomData<fn() -> T>);

/// Tag of `bool`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoolTag;

/// Integer primitives.
pub trait Integer:
    Copy
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
}

macro_rules! integers {
    ($($t:ty),* $(,)?) => {
        $(
            impl Integer for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
            }

            impl Tagged for $t {
                type Tag = IntegerTag<$t>;
            }
        )*
    };
}

integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Tagged for bool {
    type Tag = BoolTag;
}

// =============================================================================
// Integers
// =============================================================================

impl<T: Integer> EqualImpl<T, T> for (IntegerTag<T>, IntegerTag<T>) {
    type Output = bool;

    fn apply(x: T, y: T) -> bool {
        x == y
    }
}

impl<T: Integer> LessImpl<T, T> for (IntegerTag<T>, IntegerTag<T>) {
    type Output = bool;

    fn apply(x: T, y: T) -> bool {
        x < y
    }
}

impl<T: Integer> SuccImpl<T> for IntegerTag<T> {
    type Output = T;

    fn apply(x: T) -> T {
        x + T::ONE
    }
}

impl<T: Integer> PredImpl<T> for IntegerTag<T> {
    type Output = T;

    fn apply(x: T) -> T {
        x - T::ONE
    }
}

impl<T: Integer> PlusImpl<T, T> for (IntegerTag<T>, IntegerTag<T>) {
    type Output = T;

    fn apply(x: T, y: T) -> T {
        x + y
    }
}

impl<T: Integer> ZeroImpl for IntegerTag<T> {
    type Output = T;

    fn apply() -> T {
        T::ZERO
    }
}

impl<T: Integer> MinusImpl<T, T> for (IntegerTag<T>, IntegerTag<T>) {
    type Output = T;

    fn apply(x: T, y: T) -> T {
        x - y
    }
}

impl<T: Integer + Neg<Output = T>> NegateImpl<T> for IntegerTag<T> {
    type Output = T;

    fn apply(x: T) -> T {
        -x
    }
}

impl<T: Integer> MultImpl<T, T> for (IntegerTag<T>, IntegerTag<T>) {
    type Output = T;

    fn apply(x: T, y: T) -> T {
        x * y
    }
}

impl<T: Integer> OneImpl for IntegerTag<T> {
    type Output = T;

    fn apply() -> T {
        T::ONE
    }
}

impl<T: Integer> QuotImpl<T, T> for (IntegerTag<T>, IntegerTag<T>) {
    type Output = T;

    fn apply(x: T, y: T) -> T {
        x / y
    }
}

impl<T: Integer> RemImpl<T, T> for (IntegerTag<T>, IntegerTag<T>) {
    type Output = T;

    fn apply(x: T, y: T) -> T {
        x % y
    }
}

// =============================================================================
// bool
// =============================================================================

impl EqualImpl<bool, bool> for (BoolTag, BoolTag) {
    type Output = bool;

    fn apply(x: bool, y: bool) -> bool {
        x == y
    }
}

impl<T, E> EvalIfImpl<bool, T, E> for BoolTag
where
    T: Eval,
    E: Eval<Output = T::Output>,
{
    type Output = T::Output;

    fn apply(cond: bool, then: T, otherwise: E) -> T::Output {
        if cond { then.eval() } else { otherwise.eval() }
    }
}

impl NotImpl<bool> for BoolTag {
    type Output = bool;

    fn apply(x: bool) -> bool {
        !x
    }
}

impl WhileImpl<bool> for BoolTag {
    fn apply<S, P, F>(mut pred: P, state: S, mut f: F) -> S
    where
        P: FnMut(&S) -> bool,
        F: FnMut(S) -> S,
    {
        let mut state = state;
        while pred(&state) {
            state = f(state);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use crate::concepts::*;
    use super::IntegerTag;

    #[test]
    fn test_integer_arithmetic() {
        assert_eq!(plus(2u16, 3u16), 5);
        assert_eq!(minus(2i64, 3i64), -1);
        assert_eq!(negate(-8i8), 8);
        assert_eq!(mult(6usize, 7usize), 42);
        assert_eq!(quot(-7i32, 2i32), -3);
        assert_eq!(rem(-7i32, 2i32), -1);
        assert_eq!(zero::<IntegerTag<u128>>(), 0);
        assert_eq!(one::<IntegerTag<i128>>(), 1);
    }

    #[test]
    fn test_integer_order() {
        assert!(equal(4u8, 4u8));
        assert!(less(-1isize, 0isize));
        assert_eq!(succ(9u32), 10);
        assert_eq!(pred(0i32), -1);
    }

    #[test]
    fn test_bool_logic() {
        assert!(not_(false));
        assert!(and_(true, true));
        assert!(!and_(true, false));
        assert!(or_(false, true));
        assert_eq!(if_(true, 'a', 'b'), 'a');
        assert_eq!(while_(|n: &u32| *n < 100, 1u32, |n| n * 3), 243);
    }

    #[test]
    #[should_panic]
    fn test_division_by_zero_panics() {
        let divisor = zero::<IntegerTag<i32>>();
        let _ = quot(1i32, divisor);
    }
}
