//! Heterogeneous lists.
//!
//! `HNil` / `HCons` form the value-level sequence every Foldable unpacks
//! into. Length and indices are tracked with Peano numbers.

use super::peano::{Peano, S, Z};

// =============================================================================
// HList
// =============================================================================

/// Empty HList
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HNil;

/// HList cons cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HCons<H, T> {
    pub head: H,
    pub tail: T,
}

/// A heterogeneous list.
pub trait HList: Sized {
    /// Type-level length.
    type Len: Peano;

    /// Number of elements.
    const LEN: usize = <Self::Len as Peano>::VALUE;

    fn len(&self) -> usize {
        Self::LEN
    }

    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }

    /// Prepend an element.
    fn prepend<X>(self, head: X) -> HCons<X, Self> {
        HCons { head, tail: self }
    }
}

impl HList for HNil {
    type Len = Z;
}

impl<H, T: HList> HList for HCons<H, T> {
    type Len = S<T::Len>;
}

// =============================================================================
// Append
// =============================================================================

/// Append an element at the end.
pub trait Append<X>: HList {
    type Output: HList;

    fn push_back(self, x: X) -> Self::Output;
}

impl<X> Append<X> for HNil {
    type Output = HCons<X, HNil>;

    fn push_back(self, x: X) -> Self::Output {
        HCons { head: x, tail: HNil }
    }
}

impl<H, T, X> Append<X> for HCons<H, T>
where
    T: Append<X>,
{
    type Output = HCons<H, <T as Append<X>>::Output>;

    fn push_back(self, x: X) -> Self::Output {
        HCons {
            head: self.head,
            tail: self.tail.push_back(x),
        }
    }
}

// =============================================================================
// Indexing
// =============================================================================

/// Element at Peano index `N`.
#[diagnostic::on_unimplemented(
    message = "index `{N}` is out of bounds for `{Self}`",
    label = "no element at this index"
)]
pub trait Get<N> {
    type Output;

    fn get(self) -> Self::Output;
}

impl<H, T> Get<Z> for HCons<H, T> {
    type Output = H;

    fn get(self) -> H {
        self.head
    }
}

impl<H, T, N> Get<S<N>> for HCons<H, T>
where
    T: Get<N>,
{
    type Output = <T as Get<N>>::Output;

    fn get(self) -> Self::Output {
        self.tail.get()
    }
}

// =============================================================================
// Left fold
// =============================================================================

/// A function that can be applied to an accumulator and an element of any
/// type it supports. Closures are folders over the one element type they
/// accept.
pub trait Folder<Acc, X> {
    type Output;

    fn call(&mut self, acc: Acc, x: X) -> Self::Output;
}

impl<F, Acc, X, R> Folder<Acc, X> for F
where
    F: FnMut(Acc, X) -> R,
{
    type Output = R;

    #[inline(always)]
    fn call(&mut self, acc: Acc, x: X) -> R {
        self(acc, x)
    }
}

/// Left fold over every element.
pub trait HFoldLeft<Acc, F> {
    type Output;

    fn fold_left(self, acc: Acc, f: F) -> Self::Output;
}

impl<Acc, F> HFoldLeft<Acc, F> for HNil {
    type Output = Acc;

    fn fold_left(self, acc: Acc, _f: F) -> Acc {
        acc
    }
}

impl<H, T, Acc, F> HFoldLeft<Acc, F> for HCons<H, T>
where
    F: Folder<Acc, H>,
    T: HFoldLeft<<F as Folder<Acc, H>>::Output, F>,
{
    type Output = <T as HFoldLeft<<F as Folder<Acc, H>>::Output, F>>::Output;

    fn fold_left(self, acc: Acc, mut f: F) -> Self::Output {
        let acc = f.call(acc, self.head);
        self.tail.fold_left(acc, f)
    }
}

/// Folder that appends every element to the accumulated list.
#[derive(Debug, Clone, Copy, Default)]
pub struct PushBack;

impl<Acc, X> Folder<Acc, X> for PushBack
where
    Acc: Append<X>,
{
    type Output = <Acc as Append<X>>::Output;

    fn call(&mut self, acc: Acc, x: X) -> Self::Output {
        acc.push_back(x)
    }
}

// =============================================================================
// Macros
// =============================================================================

/// Build an HList value.
#[macro_export]
macro_rules! hlist {
    () => { $crate::primitives::HNil };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::primitives::HCons { head: $head, tail: $crate::hlist![$($tail),*] }
    };
}

/// Build an HList type.
#[macro_export]
macro_rules! HList {
    () => { $crate::primitives::HNil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::primitives::HCons<$head, $crate::HList![$($tail),*]>
    };
}

/// Destructure an HList value.
#[macro_export]
macro_rules! hlist_pat {
    () => { $crate::primitives::HNil };
    ($head:pat $(, $tail:pat)* $(,)?) => {
        $crate::primitives::HCons { head: $head, tail: $crate::hlist_pat!($($tail),*) }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::peano::{D0, D2};

    #[test]
    fn test_len() {
        let list = hlist![1u8, "two", 3.0f32];
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
        assert!(HNil.is_empty());
        assert_eq!(<HList![u8, u16] as HList>::LEN, 2);
    }

    #[test]
    fn test_push_back_keeps_order() {
        let list = hlist![1u8].push_back('b').push_back("c");
        let hlist_pat!(a, b, c) = list;
        assert_eq!((a, b, c), (1u8, 'b', "c"));
    }

    #[test]
    fn test_get() {
        let list = hlist![10u8, 'x', "last"];
        assert_eq!(Get::<D0>::get(list), 10u8);
        assert_eq!(Get::<D2>::get(list), "last");
    }

    #[test]
    fn test_fold_with_closure() {
        let total = hlist![1i32, 2i32, 3i32, 4i32].fold_left(0, |acc: i32, x: i32| acc + x);
        assert_eq!(total, 10);
    }

    #[test]
    fn test_fold_push_back_rebuilds() {
        let list = hlist![1u8, 'x'];
        let rebuilt = list.fold_left(HNil, PushBack);
        assert_eq!(rebuilt, list);
    }
}
