//! IntegralDomain: a Ring with a Euclidean division.
//!
//! For every `x` and every nonzero `y` of the same tag:
//!
//! ```text
//! plus(mult(quot(x, y), y), rem(x, y)) == x
//! ```

use crate::dispatch::{Tagged, TagOf};
use super::group::{MinusImpl, NegateImpl};
use super::monoid::{PlusImpl, ZeroImpl};
use super::ring::{MultImpl, OneImpl};

/// `quot` for objects `X` and `Y`, registered on `(TagOf<X>, TagOf<Y>)`.
#[diagnostic::on_unimplemented(
    message = "`quot` is not defined between `{X}` and `{Y}`",
    label = "no `QuotImpl<{X}, {Y}>` for the tag pair `{Self}`"
)]
pub trait QuotImpl<X, Y> {
    type Output;

    fn apply(x: X, y: Y) -> Self::Output;
}

/// `rem` for objects `X` and `Y`, registered on `(TagOf<X>, TagOf<Y>)`.
#[diagnostic::on_unimplemented(
    message = "`rem` is not defined between `{X}` and `{Y}`",
    label = "no `RemImpl<{X}, {Y}>` for the tag pair `{Self}`"
)]
pub trait RemImpl<X, Y> {
    type Output;

    fn apply(x: X, y: Y) -> Self::Output;
}

pub type Quot<X, Y> = <(TagOf<X>, TagOf<Y>) as QuotImpl<X, Y>>::Output;
pub type Rem<X, Y> = <(TagOf<X>, TagOf<Y>) as RemImpl<X, Y>>::Output;

/// Quotient of `x` by `y`.
#[inline]
pub fn quot<X, Y>(x: X, y: Y) -> Quot<X, Y>
where
    X: Tagged,
    Y: Tagged,
    (TagOf<X>, TagOf<Y>): QuotImpl<X, Y>,
{
    <(TagOf<X>, TagOf<Y>) as QuotImpl<X, Y>>::apply(x, y)
}

/// Remainder of `x` by `y`.
#[inline]
pub fn rem<X, Y>(x: X, y: Y) -> Rem<X, Y>
where
    X: Tagged,
    Y: Tagged,
    (TagOf<X>, TagOf<Y>): RemImpl<X, Y>,
{
    <(TagOf<X>, TagOf<Y>) as RemImpl<X, Y>>::apply(x, y)
}

/// Types forming an integral domain.
pub trait IntegralDomain: Tagged {}

impl<T> IntegralDomain for T
where
    T: Tagged,
    (TagOf<T>, TagOf<T>): PlusImpl<T, T>
        + MinusImpl<T, T>
        + MultImpl<T, T>
        + QuotImpl<T, T>
        + RemImpl<T, T>,
    TagOf<T>: ZeroImpl + NegateImpl<T> + OneImpl,
{
}
