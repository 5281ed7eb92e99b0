//! Type-level booleans as Logical and Comparable objects.
//!
//! `True` and `False` share the tag `ConstBoolTag`. Every operation is
//! resolved by the type checker: results are again `True` or `False`, and
//! `eval_if` selects its branch statically, so the two branches may have
//! unrelated types.
//!
//! ```
//! use tola_concepts::prelude::*;
//!
//! expect_type::<False, _>(&not_(True));
//! expect_type::<True, _>(&equal(False, False));
//! expect_type::<True, _>(&less(False, True));
//! expect_type::<False, _>(&and_(True, False));
//! ```

use crate::concepts::{EqualImpl, EvalIfImpl, LessImpl, NotImpl, WhileImpl};
use crate::dispatch::Tagged;
use crate::primitives::{Bool, BoolEq, Eval, False, True};

/// Tag of `True` and `False`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ConstBoolTag;

impl Tagged for True {
    type Tag = ConstBoolTag;
}

impl Tagged for False {
    type Tag = ConstBoolTag;
}

impl<A, B> EqualImpl<A, B> for (ConstBoolTag, ConstBoolTag)
where
    A: BoolEq<B>,
    B: Bool,
{
    type Output = <A as BoolEq<B>>::Out;

    fn apply(_x: A, _y: B) -> Self::Output {
        Default::default()
    }
}

/// `False < True`.
impl<A, B> LessImpl<A, B> for (ConstBoolTag, ConstBoolTag)
where
    A: Bool,
    B: Bool,
{
    type Output = <A::Not as Bool>::And<B>;

    fn apply(_x: A, _y: B) -> Self::Output {
        Default::default()
    }
}

impl<A: Bool> NotImpl<A> for ConstBoolTag {
    type Output = A::Not;

    fn apply(_x: A) -> A::Not {
        Default::default()
    }
}

impl<T: Eval, E> EvalIfImpl<True, T, E> for ConstBoolTag {
    type Output = T::Output;

    fn apply(_cond: True, then: T, _otherwise: E) -> T::Output {
        then.eval()
    }
}

impl<T, E: Eval> EvalIfImpl<False, T, E> for ConstBoolTag {
    type Output = E::Output;

    fn apply(_cond: False, _then: T, otherwise: E) -> E::Output {
        otherwise.eval()
    }
}

/// A predicate that is statically true never stops.
impl WhileImpl<True> for ConstBoolTag {
    fn apply<S, P, F>(mut pred: P, state: S, mut f: F) -> S
    where
        P: FnMut(&S) -> True,
        F: FnMut(S) -> S,
    {
        let mut state = state;
        loop {
            pred(&state);
            state = f(state);
        }
    }
}

impl WhileImpl<False> for ConstBoolTag {
    fn apply<S, P, F>(mut pred: P, state: S, _f: F) -> S
    where
        P: FnMut(&S) -> False,
        F: FnMut(S) -> S,
    {
        pred(&state);
        state
    }
}

#[cfg(test)]
mod tests {
    use crate::concepts::*;
    use crate::primitives::{False, True};
    use crate::assert_type_eq;

    #[test]
    fn test_type_level_results() {
        assert_type_eq!(Not<True>, False);
        assert_type_eq!(Equal<True, False>, False);
        assert_type_eq!(Less<True, False>, False);
        assert_type_eq!(Or<False, True>, True);
        assert_type_eq!(And<True, True>, True);
    }

    #[test]
    fn test_branches_may_differ() {
        let then: &str = eval_if(True, || "yes", || 1u64);
        let otherwise: u64 = eval_if(False, || "yes", || 1u64);
        assert_eq!((then, otherwise), ("yes", 1));
    }

    #[test]
    fn test_while_false_returns_state() {
        let state = while_(|_: &Vec<u8>| False, vec![1u8], |mut v| {
            v.push(2);
            v
        });
        assert_eq!(state, [1]);
    }
}
