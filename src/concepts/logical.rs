//! Logical: objects usable as conditions.
//!
//! Minimal complete definition: `eval_if`, `not_` and `while_`.
//! `if_`, `and_` and `or_` are derived from `eval_if`.
//!
//! Branches of `eval_if` are [`Eval`] computations and only the selected
//! one is forced. With type-level conditions (`True` / `False`) the two
//! branches may even produce different types:
//!
//! ```
//! use tola_concepts::prelude::*;
//!
//! let picked: &str = eval_if(True, || "then", || 0u8);
//! assert_eq!(picked, "then");
//!
//! let value = eval_if(false, || -> i32 { unreachable!() }, || 7);
//! assert_eq!(value, 7);
//! ```
//!
//! [`Eval`]: crate::primitives::Eval

use crate::dispatch::{Tagged, TagOf};
use crate::primitives::Ready;

/// `eval_if` with a condition of type `C`, registered on `TagOf<C>`.
///
/// Implementations force exactly one of `then` / `otherwise`.
#[diagnostic::on_unimplemented(
    message = "`{C}` cannot be used as a condition",
    label = "no `EvalIfImpl<{C}, ..>` for the tag `{Self}`",
    note = "the branches must be `Eval` computations, e.g. closures or `Ready`"
)]
pub trait EvalIfImpl<C, T, E> {
    type Output;

    fn apply(cond: C, then: T, otherwise: E) -> Self::Output;
}

/// `not_` for objects of type `X`, registered on `TagOf<X>`.
#[diagnostic::on_unimplemented(
    message = "`not_` is not defined for `{X}`",
    label = "no `NotImpl<{X}>` for the tag `{Self}`"
)]
pub trait NotImpl<X> {
    type Output;

    fn apply(x: X) -> Self::Output;
}

/// `while_` with predicates returning `C`, registered on `TagOf<C>`.
#[diagnostic::on_unimplemented(
    message = "`while_` cannot loop on predicates returning `{C}`",
    label = "no `WhileImpl<{C}>` for the tag `{Self}`"
)]
pub trait WhileImpl<C> {
    fn apply<S, P, F>(pred: P, state: S, f: F) -> S
    where
        P: FnMut(&S) -> C,
        F: FnMut(S) -> S;
}

pub type EvalIf<C, T, E> = <TagOf<C> as EvalIfImpl<C, T, E>>::Output;
pub type Not<X> = <TagOf<X> as NotImpl<X>>::Output;
pub type Or<X, Y> = EvalIf<X, Ready<X>, Ready<Y>>;
pub type And<X, Y> = EvalIf<X, Ready<Y>, Ready<X>>;

/// Force `then` if `cond` is true-valued, `otherwise` if not.
#[inline]
pub fn eval_if<C, T, E>(cond: C, then: T, otherwise: E) -> EvalIf<C, T, E>
where
    C: Tagged,
    TagOf<C>: EvalIfImpl<C, T, E>,
{
    <TagOf<C> as EvalIfImpl<C, T, E>>::apply(cond, then, otherwise)
}

/// Logical negation.
#[inline]
pub fn not_<X>(x: X) -> Not<X>
where
    X: Tagged,
    TagOf<X>: NotImpl<X>,
{
    <TagOf<X> as NotImpl<X>>::apply(x)
}

/// Apply `f` to `state` while `pred` holds; return the final state.
///
/// There is no iteration bound: a predicate that never fails loops forever.
#[inline]
pub fn while_<C, S, P, F>(pred: P, state: S, f: F) -> S
where
    C: Tagged,
    TagOf<C>: WhileImpl<C>,
    P: FnMut(&S) -> C,
    F: FnMut(S) -> S,
{
    <TagOf<C> as WhileImpl<C>>::apply(pred, state, f)
}

/// Select one of two already computed values.
#[inline]
pub fn if_<C, T, E>(cond: C, then: T, otherwise: E) -> EvalIf<C, Ready<T>, Ready<E>>
where
    C: Tagged,
    TagOf<C>: EvalIfImpl<C, Ready<T>, Ready<E>>,
{
    eval_if(cond, Ready(then), Ready(otherwise))
}

/// `x` if it is true-valued, `y` otherwise.
#[inline]
pub fn or_<X, Y>(x: X, y: Y) -> Or<X, Y>
where
    X: Tagged + Clone,
    TagOf<X>: EvalIfImpl<X, Ready<X>, Ready<Y>>,
{
    eval_if(x.clone(), Ready(x), Ready(y))
}

/// `y` if `x` is true-valued, `x` otherwise.
#[inline]
pub fn and_<X, Y>(x: X, y: Y) -> And<X, Y>
where
    X: Tagged + Clone,
    TagOf<X>: EvalIfImpl<X, Ready<Y>, Ready<X>>,
{
    eval_if(x.clone(), Ready(y), Ready(x))
}

/// Types whose objects can be used as conditions.
pub trait Logical: Tagged {}

impl<T> Logical for T
where
    T: Tagged,
    TagOf<T>: EvalIfImpl<T, Ready<T>, Ready<T>> + NotImpl<T> + WhileImpl<T>,
{
}
