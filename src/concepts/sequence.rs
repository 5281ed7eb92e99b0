//! Sequence: Foldable structures that can be built from their elements.
//!
//! Minimal complete definition: `make`, building a value of the sequence
//! from an HList of elements. Conversion between sequences is derived from
//! it: `to::<Target, _>(x)` unpacks any Foldable `x` and makes a `Target`
//! sequence from the elements, preserving their order.
//!
//! ```
//! use tola_concepts::prelude::*;
//!
//! let tuple = to::<TupleTag, _>(hlist![1u8, 'x', "three"]);
//! assert_eq!(tuple, (1u8, 'x', "three"));
//!
//! let list = to::<HListTag, _>(tuple);
//! assert_eq!(at::<D1, _>(list), 'x');
//! ```
//!
//! Conversion to a type list only accepts type tokens:
//!
//! ```compile_fail
//! use tola_concepts::prelude::*;
//!
//! let _ = to::<TListTag, _>(hlist![1u8]);
//! ```

use core::marker::PhantomData;

use crate::dispatch::{Tagged, TagOf};
use crate::primitives::Get;
use super::foldable::{Unpacked, UnpackImpl, unpack};

/// `make` for the sequence tagged `Self`, from the elements `Elems`.
#[diagnostic::on_unimplemented(
    message = "cannot make a `{Self}` sequence from `{Elems}`",
    label = "no `MakeImpl<{Elems}>` for the tag `{Self}`"
)]
pub trait MakeImpl<Elems> {
    type Output;

    fn apply(elems: Elems) -> Self::Output;
}

/// Conversion of `X` into a sequence, registered on `(Target, TagOf<X>)`.
#[diagnostic::on_unimplemented(
    message = "cannot convert `{X}` to the sequence `{Self}`",
    label = "no `ToImpl<{X}>` for `{Self}`",
    note = "the target must be a Sequence tag and `{X}` must be Foldable"
)]
pub trait ToImpl<X> {
    type Output;

    fn apply(x: X) -> Self::Output;
}

pub type Make<T, Elems> = <T as MakeImpl<Elems>>::Output;
pub type To<T, X> = <(T, TagOf<X>) as ToImpl<X>>::Output;

/// Build a `T` sequence holding `elems`.
#[inline]
pub fn make<T, Elems>(elems: Elems) -> Make<T, Elems>
where
    T: MakeImpl<Elems>,
{
    T::apply(elems)
}

/// Convert the Foldable `x` into the sequence tagged `T`.
#[inline]
pub fn to<T, X>(x: X) -> To<T, X>
where
    X: Tagged,
    (T, TagOf<X>): ToImpl<X>,
{
    <(T, TagOf<X>) as ToImpl<X>>::apply(x)
}

/// Element at Peano index `N`.
#[inline]
pub fn at<N, X>(x: X) -> <Unpacked<X> as Get<N>>::Output
where
    X: Tagged,
    TagOf<X>: UnpackImpl<X>,
    Unpacked<X>: Get<N>,
{
    unpack(x).get()
}

// =============================================================================
// Derivation
// =============================================================================

/// Conversion of any Foldable into the sequence tagged `T`:
/// `to::<T>(x) = make::<T>(unpack(x))`.
///
/// A sequence registers it for every source with a blanket `ToImpl` on
/// `(T, From)` delegating here.
pub struct ToViaFoldable<T>(PhantomData<fn() -> T>);

impl<T, X> ToImpl<X> for ToViaFoldable<T>
where
    X: Tagged,
    TagOf<X>: UnpackImpl<X>,
    T: MakeImpl<Unpacked<X>>,
{
    type Output = Make<T, Unpacked<X>>;

    fn apply(x: X) -> Self::Output {
        make::<T, _>(unpack(x))
    }
}

/// Foldable structures that can be rebuilt from their elements.
pub trait Sequence: Tagged {}

impl<T> Sequence for T
where
    T: Tagged,
    TagOf<T>: UnpackImpl<T> + MakeImpl<Unpacked<T>>,
{
}
