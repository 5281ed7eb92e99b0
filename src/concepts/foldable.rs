//! Foldable: structures that can be reduced to a sequence of elements.
//!
//! Minimal complete definitions:
//! - `unpack`, turning the structure into an [`HList`] of its elements,
//!   with `fold_left` derived by [`FoldLeftViaUnpack`];
//! - `fold_left`, with `unpack` derived by [`UnpackViaFoldLeft`].
//!
//! Folds are heterogeneous: the folding function is a [`Folder`], which may
//! accept each element type with its own output type.
//!
//! ```
//! use tola_concepts::prelude::*;
//!
//! let xs = hlist![1u8, 2u8, 3u8];
//! assert_eq!(length(&xs), 3);
//! assert_eq!(fold_left(xs, 0u8, |acc: u8, x: u8| acc * 10 + x), 123);
//! assert_eq!(sum::<IntegerTag<u8>, _>((1u8, 2u8, 3u8)), 6);
//! ```
//!
//! [`HList`]: crate::primitives::HList
//! [`Folder`]: crate::primitives::Folder

use crate::dispatch::{Tagged, TagOf};
use crate::primitives::{Folder, HFoldLeft, HList, HNil, PushBack};
use super::monoid::{Plus, PlusImpl, Zero, ZeroImpl, plus};
use super::ring::{Mult, MultImpl, One, OneImpl, mult};

/// `unpack` for structures of type `X`, registered on `TagOf<X>`.
#[diagnostic::on_unimplemented(
    message = "`{X}` is not Foldable",
    label = "no `UnpackImpl<{X}>` for the tag `{Self}`",
    note = "implement `UnpackImpl`, or delegate to `UnpackViaFoldLeft` if `fold_left` is defined"
)]
pub trait UnpackImpl<X> {
    /// The elements, in order.
    type Elements: HList;

    fn apply(x: X) -> Self::Elements;
}

/// `fold_left` for structures of type `X`, registered on `TagOf<X>`.
#[diagnostic::on_unimplemented(
    message = "cannot fold `{X}` from `{Acc}` with `{F}`",
    label = "no `FoldLeftImpl<{X}, {Acc}, {F}>` for the tag `{Self}`",
    note = "the folder must accept the accumulator and every element of `{X}`"
)]
pub trait FoldLeftImpl<X, Acc, F> {
    type Output;

    fn apply(x: X, acc: Acc, f: F) -> Self::Output;
}

/// Elements of `X`, as an HList type.
pub type Unpacked<X> = <TagOf<X> as UnpackImpl<X>>::Elements;

/// Result of `fold_left(x, acc, f)`.
pub type FoldLeft<X, Acc, F> = <TagOf<X> as FoldLeftImpl<X, Acc, F>>::Output;

/// The elements of `x`, in order.
#[inline]
pub fn unpack<X>(x: X) -> Unpacked<X>
where
    X: Tagged,
    TagOf<X>: UnpackImpl<X>,
{
    <TagOf<X> as UnpackImpl<X>>::apply(x)
}

/// Left fold of `x`, starting from `acc`.
#[inline]
pub fn fold_left<X, Acc, F>(x: X, acc: Acc, f: F) -> FoldLeft<X, Acc, F>
where
    X: Tagged,
    TagOf<X>: FoldLeftImpl<X, Acc, F>,
{
    <TagOf<X> as FoldLeftImpl<X, Acc, F>>::apply(x, acc, f)
}

// =============================================================================
// Derivations
// =============================================================================

/// `fold_left` derived from `unpack`: fold the unpacked elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldLeftViaUnpack;

impl<X, Acc, F> FoldLeftImpl<X, Acc, F> for FoldLeftViaUnpack
where
    X: Tagged,
    TagOf<X>: UnpackImpl<X>,
    Unpacked<X>: HFoldLeft<Acc, F>,
{
    type Output = <Unpacked<X> as HFoldLeft<Acc, F>>::Output;

    fn apply(x: X, acc: Acc, f: F) -> Self::Output {
        unpack(x).fold_left(acc, f)
    }
}

/// `unpack` derived from `fold_left`: push every element onto an empty
/// HList.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnpackViaFoldLeft;

impl<X> UnpackImpl<X> for UnpackViaFoldLeft
where
    X: Tagged,
    TagOf<X>: FoldLeftImpl<X, HNil, PushBack>,
    FoldLeft<X, HNil, PushBack>: HList,
{
    type Elements = FoldLeft<X, HNil, PushBack>;

    fn apply(x: X) -> Self::Elements {
        fold_left(x, HNil, PushBack)
    }
}

// =============================================================================
// Derived operations
// =============================================================================

/// Number of elements of `x`.
#[inline]
pub fn length<X>(_x: &X) -> usize
where
    X: Tagged,
    TagOf<X>: UnpackImpl<X>,
{
    <Unpacked<X> as HList>::LEN
}

/// Whether `x` has no elements.
#[inline]
pub fn is_empty<X>(x: &X) -> bool
where
    X: Tagged,
    TagOf<X>: UnpackImpl<X>,
{
    length(x) == 0
}

/// Receives elements one at a time. Closures visit the one element type
/// they accept.
pub trait Visit<X> {
    fn visit(&mut self, x: X);
}

impl<F, X> Visit<X> for F
where
    F: FnMut(X),
{
    #[inline(always)]
    fn visit(&mut self, x: X) {
        self(x)
    }
}

/// Folder threading a visitor through the elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct Visiting;

impl<V, X> Folder<V, X> for Visiting
where
    V: Visit<X>,
{
    type Output = V;

    fn call(&mut self, mut visitor: V, x: X) -> V {
        visitor.visit(x);
        visitor
    }
}

/// Visit every element of `x` in order; returns the visitor.
///
/// ```
/// use tola_concepts::prelude::*;
/// use tola_concepts::concepts::foldable::Visit;
///
/// #[derive(Default)]
/// struct Names(Vec<&'static str>);
///
/// impl<T> Visit<Type<T>> for Names {
///     fn visit(&mut self, t: Type<T>) {
///         self.0.push(t.name());
///     }
/// }
///
/// let names = for_each(hlist![type_c::<u8>(), type_c::<bool>()], Names::default());
/// assert_eq!(names.0, ["u8", "bool"]);
/// ```
#[inline]
pub fn for_each<X, V>(x: X, visitor: V) -> V
where
    X: Tagged,
    TagOf<X>: FoldLeftImpl<X, V, Visiting, Output = V>,
{
    fold_left(x, visitor, Visiting)
}

/// Folder adding every element to the accumulator with `plus`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Summation;

impl<Acc, X> Folder<Acc, X> for Summation
where
    Acc: Tagged,
    X: Tagged,
    (TagOf<Acc>, TagOf<X>): PlusImpl<Acc, X>,
{
    type Output = Plus<Acc, X>;

    fn call(&mut self, acc: Acc, x: X) -> Self::Output {
        plus(acc, x)
    }
}

/// Folder multiplying the accumulator by every element with `mult`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Product;

impl<Acc, X> Folder<Acc, X> for Product
where
    Acc: Tagged,
    X: Tagged,
    (TagOf<Acc>, TagOf<X>): MultImpl<Acc, X>,
{
    type Output = Mult<Acc, X>;

    fn call(&mut self, acc: Acc, x: X) -> Self::Output {
        mult(acc, x)
    }
}

/// Sum of the elements of `x` in the monoid tagged `M`.
#[inline]
pub fn sum<M, X>(x: X) -> FoldLeft<X, Zero<M>, Summation>
where
    M: ZeroImpl,
    X: Tagged,
    TagOf<X>: FoldLeftImpl<X, Zero<M>, Summation>,
{
    fold_left(x, M::apply(), Summation)
}

/// Product of the elements of `x` in the ring tagged `R`.
#[inline]
pub fn product<R, X>(x: X) -> FoldLeft<X, One<R>, Product>
where
    R: OneImpl,
    X: Tagged,
    TagOf<X>: FoldLeftImpl<X, One<R>, Product>,
{
    fold_left(x, R::apply(), Product)
}

/// Structures whose elements can be enumerated.
pub trait Foldable: Tagged {}

impl<T> Foldable for T
where
    T: Tagged,
    TagOf<T>: UnpackImpl<T>,
{
}
