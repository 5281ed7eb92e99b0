//! Orderable: a strict total order.
//!
//! Minimal complete definition: `less`. The other comparisons and
//! `min`/`max` are derived from it.
//!
//! ```
//! use tola_concepts::prelude::*;
//!
//! assert!(less(1u32, 2u32));
//! assert!(less_equal(2u32, 2u32));
//! assert!(greater(-1i8, -2i8));
//! assert_eq!(min(4i16, -4i16), -4);
//! assert_eq!(max(4i16, -4i16), 4);
//! ```
//!
//! Type tokens are Comparable but not Orderable:
//!
//! ```compile_fail
//! use tola_concepts::prelude::*;
//!
//! let _ = less(type_c::<u8>(), type_c::<u16>());
//! ```

use crate::dispatch::{Tagged, TagOf};
use crate::primitives::Ready;
use super::logical::{EvalIf, EvalIfImpl, Not, NotImpl, if_, not_};

/// `less` for objects `X` and `Y`, registered on `(TagOf<X>, TagOf<Y>)`.
#[diagnostic::on_unimplemented(
    message = "`less` is not defined between `{X}` and `{Y}`",
    label = "no `LessImpl<{X}, {Y}>` for the tag pair `{Self}`",
    note = "implement `LessImpl` on the tag pair to make these types Orderable"
)]
pub trait LessImpl<X, Y> {
    type Output;

    fn apply(x: X, y: Y) -> Self::Output;
}

/// Result of `less(x, y)`.
pub type Less<X, Y> = <(TagOf<X>, TagOf<Y>) as LessImpl<X, Y>>::Output;

/// Result of `min(x, y)`.
pub type MinOf<X, Y> = EvalIf<Less<X, Y>, Ready<X>, Ready<Y>>;

/// Result of `max(x, y)`.
pub type MaxOf<X, Y> = EvalIf<Less<X, Y>, Ready<Y>, Ready<X>>;

/// Whether `x` is strictly less than `y`.
#[inline]
pub fn less<X, Y>(x: X, y: Y) -> Less<X, Y>
where
    X: Tagged,
    Y: Tagged,
    (TagOf<X>, TagOf<Y>): LessImpl<X, Y>,
{
    <(TagOf<X>, TagOf<Y>) as LessImpl<X, Y>>::apply(x, y)
}

/// `x <= y`, as `not_(less(y, x))`.
#[inline]
pub fn less_equal<X, Y>(x: X, y: Y) -> Not<Less<Y, X>>
where
    X: Tagged,
    Y: Tagged,
    (TagOf<Y>, TagOf<X>): LessImpl<Y, X>,
    Less<Y, X>: Tagged,
    TagOf<Less<Y, X>>: NotImpl<Less<Y, X>>,
{
    not_(less(y, x))
}

/// `x > y`, as `less(y, x)`.
#[inline]
pub fn greater<X, Y>(x: X, y: Y) -> Less<Y, X>
where
    X: Tagged,
    Y: Tagged,
    (TagOf<Y>, TagOf<X>): LessImpl<Y, X>,
{
    less(y, x)
}

/// `x >= y`, as `not_(less(x, y))`.
#[inline]
pub fn greater_equal<X, Y>(x: X, y: Y) -> Not<Less<X, Y>>
where
    X: Tagged,
    Y: Tagged,
    (TagOf<X>, TagOf<Y>): LessImpl<X, Y>,
    Less<X, Y>: Tagged,
    TagOf<Less<X, Y>>: NotImpl<Less<X, Y>>,
{
    not_(less(x, y))
}

/// The smaller of `x` and `y`; `y` when they are equivalent.
#[inline]
pub fn min<X, Y>(x: X, y: Y) -> MinOf<X, Y>
where
    X: Tagged + Clone,
    Y: Tagged + Clone,
    (TagOf<X>, TagOf<Y>): LessImpl<X, Y>,
    Less<X, Y>: Tagged,
    TagOf<Less<X, Y>>: EvalIfImpl<Less<X, Y>, Ready<X>, Ready<Y>>,
{
    let cond = less(x.clone(), y.clone());
    if_(cond, x, y)
}

/// The larger of `x` and `y`; `x` when they are equivalent.
#[inline]
pub fn max<X, Y>(x: X, y: Y) -> MaxOf<X, Y>
where
    X: Tagged + Clone,
    Y: Tagged + Clone,
    (TagOf<X>, TagOf<Y>): LessImpl<X, Y>,
    Less<X, Y>: Tagged,
    TagOf<Less<X, Y>>: EvalIfImpl<Less<X, Y>, Ready<Y>, Ready<X>>,
{
    let cond = less(x.clone(), y.clone());
    if_(cond, y, x)
}

/// Types with a total order on their objects.
pub trait Orderable: Tagged {}

impl<T> Orderable for T
where
    T: Tagged,
    (TagOf<T>, TagOf<T>): LessImpl<T, T>,
{
}
