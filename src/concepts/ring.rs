//! Ring: a Group with an associative `mult` and its identity `one`.

use crate::dispatch::{Tagged, TagOf};
use super::group::{MinusImpl, NegateImpl};
use super::monoid::{PlusImpl, ZeroImpl};

/// `mult` for objects `X` and `Y`, registered on `(TagOf<X>, TagOf<Y>)`.
#[diagnostic::on_unimplemented(
    message = "`mult` is not defined between `{X}` and `{Y}`",
    label = "no `MultImpl<{X}, {Y}>` for the tag pair `{Self}`"
)]
pub trait MultImpl<X, Y> {
    type Output;

    fn apply(x: X, y: Y) -> Self::Output;
}

/// `one`, registered on the tag whose identity it is.
#[diagnostic::on_unimplemented(
    message = "the tag `{Self}` has no `one`",
    label = "no `OneImpl` for `{Self}`"
)]
pub trait OneImpl {
    type Output;

    fn apply() -> Self::Output;
}

pub type Mult<X, Y> = <(TagOf<X>, TagOf<Y>) as MultImpl<X, Y>>::Output;
pub type One<T> = <T as OneImpl>::Output;

/// Ring multiplication.
#[inline]
pub fn mult<X, Y>(x: X, y: Y) -> Mult<X, Y>
where
    X: Tagged,
    Y: Tagged,
    (TagOf<X>, TagOf<Y>): MultImpl<X, Y>,
{
    <(TagOf<X>, TagOf<Y>) as MultImpl<X, Y>>::apply(x, y)
}

/// Identity of `mult` for the tag `T`.
#[inline]
pub fn one<T: OneImpl>() -> One<T> {
    T::apply()
}

/// `x` multiplied by itself `n` times; `one()` when `n` is zero.
///
/// ```
/// use tola_concepts::prelude::*;
///
/// assert_eq!(power(3i32, 4), 81);
/// assert_eq!(power(7u8, 0), 1);
/// ```
pub fn power<X>(x: X, n: u32) -> X
where
    X: Tagged + Clone,
    TagOf<X>: OneImpl<Output = X>,
    (TagOf<X>, TagOf<X>): MultImpl<X, X, Output = X>,
{
    let mut result = one::<TagOf<X>>();
    let mut base = x;
    let mut n = n;
    while n > 0 {
        if n & 1 == 1 {
            result = mult(result, base.clone());
        }
        n >>= 1;
        if n > 0 {
            base = mult(base.clone(), base);
        }
    }
    result
}

/// Types forming a ring under `plus` and `mult`.
pub trait Ring: Tagged {}

impl<T> Ring for T
where
    T: Tagged,
    (TagOf<T>, TagOf<T>): PlusImpl<T, T> + MinusImpl<T, T> + MultImpl<T, T>,
    TagOf<T>: ZeroImpl + NegateImpl<T> + OneImpl,
{
}
