//! Group: a Monoid with inverses.
//!
//! Minimal complete definitions:
//! - `negate`, with `minus` derived by [`MinusViaNegate`];
//! - `minus`, with `negate` derived by [`NegateViaMinus`].
//!
//! The derived operation is registered by delegation:
//!
//! ```
//! use tola_concepts::Tagged;
//! use tola_concepts::concepts::group::{MinusImpl, NegateImpl, NegateViaMinus, negate};
//! use tola_concepts::concepts::monoid::{PlusImpl, ZeroImpl};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Tagged)]
//! struct Cents(i64);
//!
//! impl PlusImpl<Cents, Cents> for (Cents, Cents) {
//!     type Output = Cents;
//!     fn apply(x: Cents, y: Cents) -> Cents { Cents(x.0 + y.0) }
//! }
//!
//! impl ZeroImpl for Cents {
//!     type Output = Cents;
//!     fn apply() -> Cents { Cents(0) }
//! }
//!
//! impl MinusImpl<Cents, Cents> for (Cents, Cents) {
//!     type Output = Cents;
//!     fn apply(x: Cents, y: Cents) -> Cents { Cents(x.0 - y.0) }
//! }
//!
//! impl NegateImpl<Cents> for Cents {
//!     type Output = <NegateViaMinus as NegateImpl<Cents>>::Output;
//!     fn apply(x: Cents) -> Self::Output { NegateViaMinus::apply(x) }
//! }
//!
//! assert_eq!(negate(Cents(250)), Cents(-250));
//! ```

use crate::dispatch::{Tagged, TagOf};
use super::monoid::{Plus, PlusImpl, Zero, ZeroImpl, plus, zero};

/// `negate` for objects of type `X`, registered on `TagOf<X>`.
#[diagnostic::on_unimplemented(
    message = "`negate` is not defined for `{X}`",
    label = "no `NegateImpl<{X}>` for the tag `{Self}`",
    note = "implement `NegateImpl`, or delegate to `NegateViaMinus` if `minus` is defined"
)]
pub trait NegateImpl<X> {
    type Output;

    fn apply(x: X) -> Self::Output;
}

/// `minus` for objects `X` and `Y`, registered on `(TagOf<X>, TagOf<Y>)`.
#[diagnostic::on_unimplemented(
    message = "`minus` is not defined between `{X}` and `{Y}`",
    label = "no `MinusImpl<{X}, {Y}>` for the tag pair `{Self}`",
    note = "implement `MinusImpl`, or delegate to `MinusViaNegate` if `negate` is defined"
)]
pub trait MinusImpl<X, Y> {
    type Output;

    fn apply(x: X, y: Y) -> Self::Output;
}

pub type Negate<X> = <TagOf<X> as NegateImpl<X>>::Output;
pub type Minus<X, Y> = <(TagOf<X>, TagOf<Y>) as MinusImpl<X, Y>>::Output;

/// Inverse of `x` under `plus`.
#[inline]
pub fn negate<X>(x: X) -> Negate<X>
where
    X: Tagged,
    TagOf<X>: NegateImpl<X>,
{
    <TagOf<X> as NegateImpl<X>>::apply(x)
}

/// `x` plus the inverse of `y`.
#[inline]
pub fn minus<X, Y>(x: X, y: Y) -> Minus<X, Y>
where
    X: Tagged,
    Y: Tagged,
    (TagOf<X>, TagOf<Y>): MinusImpl<X, Y>,
{
    <(TagOf<X>, TagOf<Y>) as MinusImpl<X, Y>>::apply(x, y)
}

// =============================================================================
// Derivations
// =============================================================================

/// `negate(x) = minus(zero(), x)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NegateViaMinus;

impl<X> NegateImpl<X> for NegateViaMinus
where
    X: Tagged,
    TagOf<X>: ZeroImpl,
    Zero<TagOf<X>>: Tagged,
    (TagOf<Zero<TagOf<X>>>, TagOf<X>): MinusImpl<Zero<TagOf<X>>, X>,
{
    type Output = Minus<Zero<TagOf<X>>, X>;

    fn apply(x: X) -> Self::Output {
        minus(zero::<TagOf<X>>(), x)
    }
}

/// `minus(x, y) = plus(x, negate(y))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinusViaNegate;

impl<X, Y> MinusImpl<X, Y> for MinusViaNegate
where
    X: Tagged,
    Y: Tagged,
    TagOf<Y>: NegateImpl<Y>,
    Negate<Y>: Tagged,
    (TagOf<X>, TagOf<Negate<Y>>): PlusImpl<X, Negate<Y>>,
{
    type Output = Plus<X, Negate<Y>>;

    fn apply(x: X, y: Y) -> Self::Output {
        plus(x, negate(y))
    }
}

/// Types forming a group under `plus`.
pub trait Group: Tagged {}

impl<T> Group for T
where
    T: Tagged,
    (TagOf<T>, TagOf<T>): PlusImpl<T, T> + MinusImpl<T, T>,
    TagOf<T>: ZeroImpl + NegateImpl<T>,
{
}
