//! Enumerable: successor and predecessor.

use crate::dispatch::{Tagged, TagOf};

/// `succ` for objects of type `X`, registered on `TagOf<X>`.
#[diagnostic::on_unimplemented(
    message = "`succ` is not defined for `{X}`",
    label = "no `SuccImpl<{X}>` for the tag `{Self}`"
)]
pub trait SuccImpl<X> {
    type Output;

    fn apply(x: X) -> Self::Output;
}

/// `pred` for objects of type `X`, registered on `TagOf<X>`.
#[diagnostic::on_unimplemented(
    message = "`pred` is not defined for `{X}`",
    label = "no `PredImpl<{X}>` for the tag `{Self}`"
)]
pub trait PredImpl<X> {
    type Output;

    fn apply(x: X) -> Self::Output;
}

pub type Succ<X> = <TagOf<X> as SuccImpl<X>>::Output;
pub type Pred<X> = <TagOf<X> as PredImpl<X>>::Output;

/// The successor of `x`.
#[inline]
pub fn succ<X>(x: X) -> Succ<X>
where
    X: Tagged,
    TagOf<X>: SuccImpl<X>,
{
    <TagOf<X> as SuccImpl<X>>::apply(x)
}

/// The predecessor of `x`.
#[inline]
pub fn pred<X>(x: X) -> Pred<X>
where
    X: Tagged,
    TagOf<X>: PredImpl<X>,
{
    <TagOf<X> as PredImpl<X>>::apply(x)
}

/// Types whose objects have a successor and a predecessor.
pub trait Enumerable: Tagged {}

impl<T> Enumerable for T
where
    T: Tagged,
    TagOf<T>: SuccImpl<T> + PredImpl<T>,
{
}
