//! The `Seq` fixture: a Foldable and nothing more.
//!
//! `Seq` registers `unpack` and derives `fold_left`. It is not a Sequence
//! and not Comparable, so it exercises conversions from a source that only
//! offers the Foldable interface.

use crate::concepts::{FoldLeftImpl, FoldLeftViaUnpack, UnpackImpl};
use crate::dispatch::Tagged;
use crate::primitives::HList;

/// A Foldable holding the elements `E`, an HList.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seq<E>(pub E);

/// Tag of `Seq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SeqTag;

/// A Foldable of the given elements.
pub fn seq<E: HList>(elements: E) -> Seq<E> {
    Seq(elements)
}

impl<E> Tagged for Seq<E> {
    type Tag = SeqTag;
}

impl<E: HList> UnpackImpl<Seq<E>> for SeqTag {
    type Elements = E;

    fn apply(x: Seq<E>) -> E {
        x.0
    }
}

impl<X, Acc, F> FoldLeftImpl<X, Acc, F> for SeqTag
where
    FoldLeftViaUnpack: FoldLeftImpl<X, Acc, F>,
{
    type Output = <FoldLeftViaUnpack as FoldLeftImpl<X, Acc, F>>::Output;

    fn apply(x: X, acc: Acc, f: F) -> Self::Output {
        <FoldLeftViaUnpack as FoldLeftImpl<X, Acc, F>>::apply(x, acc, f)
    }
}

/// Build a `Seq` from its elements.
///
/// ```
/// use tola_concepts::prelude::*;
/// use tola_concepts::seq;
///
/// let xs = seq![type_c::<u8>(), type_c::<u16>()];
/// assert_eq!(length(&xs), 2);
/// ```
#[macro_export]
macro_rules! seq {
    ($($x:expr),* $(,)?) => {
        $crate::testing::Seq($crate::hlist![$($x),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concepts::{fold_left, length, unpack};
    use crate::hlist;
    use crate::primitives::HFoldLeft;

    #[test]
    fn test_unpack_and_fold_agree() {
        let xs = seq(hlist![1i32, 2i32, 3i32]);
        let via_fold = fold_left(xs, 0i32, |acc: i32, x: i32| acc * 2 + x);
        let via_unpack = unpack(xs).fold_left(0i32, |acc: i32, x: i32| acc * 2 + x);
        assert_eq!(via_fold, via_unpack);
        assert_eq!(via_fold, 11);
    }

    #[test]
    fn test_empty() {
        assert_eq!(length(&seq![]), 0);
    }
}
