//! Monoid: an associative `plus` with an identity `zero`.
//!
//! Laws, for all objects `x`, `y`, `z` of the same tag `T`:
//!
//! ```text
//! plus(zero::<T>(), x) == x == plus(x, zero::<T>())
//! plus(x, plus(y, z)) == plus(plus(x, y), z)
//! ```

use crate::dispatch::{Tagged, TagOf};

/// `plus` for objects `X` and `Y`, registered on `(TagOf<X>, TagOf<Y>)`.
#[diagnostic::on_unimplemented(
    message = "`plus` is not defined between `{X}` and `{Y}`",
    label = "no `PlusImpl<{X}, {Y}>` for the tag pair `{Self}`"
)]
pub trait PlusImpl<X, Y> {
    type Output;

    fn apply(x: X, y: Y) -> Self::Output;
}

/// `zero`, registered on the tag whose identity it is.
#[diagnostic::on_unimplemented(
    message = "the tag `{Self}` has no `zero`",
    label = "no `ZeroImpl` for `{Self}`"
)]
pub trait ZeroImpl {
    type Output;

    fn apply() -> Self::Output;
}

pub type Plus<X, Y> = <(TagOf<X>, TagOf<Y>) as PlusImpl<X, Y>>::Output;
pub type Zero<T> = <T as ZeroImpl>::Output;

/// Monoid operation.
#[inline]
pub fn plus<X, Y>(x: X, y: Y) -> Plus<X, Y>
where
    X: Tagged,
    Y: Tagged,
    (TagOf<X>, TagOf<Y>): PlusImpl<X, Y>,
{
    <(TagOf<X>, TagOf<Y>) as PlusImpl<X, Y>>::apply(x, y)
}

/// Identity of `plus` for the tag `T`.
///
/// ```
/// use tola_concepts::prelude::*;
/// use tola_concepts::ext::IntegerTag;
///
/// assert_eq!(zero::<IntegerTag<u64>>(), 0);
/// assert_eq!(plus(zero::<IntegerTag<u64>>(), 5u64), 5);
/// ```
#[inline]
pub fn zero<T: ZeroImpl>() -> Zero<T> {
    T::apply()
}

/// Types forming a monoid under `plus`.
pub trait Monoid: Tagged {}

impl<T> Monoid for T
where
    T: Tagged,
    (TagOf<T>, TagOf<T>): PlusImpl<T, T>,
    TagOf<T>: ZeroImpl,
{
}
