//! HLists as Foldable Sequences.
//!
//! An HList is its own unpacked form: `unpack` is the identity and `make`
//! accepts any HList.

use crate::concepts::{
    FoldLeftImpl, FoldLeftViaUnpack, MakeImpl, ToImpl, ToViaFoldable, UnpackImpl,
};
use crate::dispatch::Tagged;
use crate::primitives::{HCons, HList, HNil};

/// Tag of `HNil` and `HCons`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HListTag;

impl Tagged for HNil {
    type Tag = HListTag;
}

impl<H, T> Tagged for HCons<H, T> {
    type Tag = HListTag;
}

impl<X: HList> UnpackImpl<X> for HListTag {
    type Elements = X;

    #[inline(always)]
    fn apply(x: X) -> X {
        x
    }
}

impl<X, Acc, F> FoldLeftImpl<X, Acc, F> for HListTag
where
    FoldLeftViaUnpack: FoldLeftImpl<X, Acc, F>,
{
    type Output = <FoldLeftViaUnpack as FoldLeftImpl<X, Acc, F>>::Output;

    #[inline]
    fn apply(x: X, acc: Acc, f: F) -> Self::Output {
        <FoldLeftViaUnpack as FoldLeftImpl<X, Acc, F>>::apply(x, acc, f)
    }
}

impl<E: HList> MakeImpl<E> for HListTag {
    type Output = E;

    #[inline(always)]
    fn apply(elems: E) -> E {
        elems
    }
}

impl<Src, X> ToImpl<X> for (HListTag, Src)
where
    ToViaFoldable<HListTag>: ToImpl<X>,
{
    type Output = <ToViaFoldable<HListTag> as ToImpl<X>>::Output;

    #[inline]
    fn apply(x: X) -> Self::Output {
        <ToViaFoldable<HListTag> as ToImpl<X>>::apply(x)
    }
}

#[cfg(test)]
mod tests {
    use crate::concepts::*;
    use crate::hlist;
    use crate::primitives::HNil;
    use super::HListTag;

    #[test]
    fn test_unpack_is_identity() {
        let list = hlist![1u8, 'x'];
        assert_eq!(unpack(list), list);
        assert_eq!(length(&list), 2);
        assert!(is_empty(&HNil));
    }

    #[test]
    fn test_to_hlist_from_tuple() {
        let list = to::<HListTag, _>((1u8, "two", 3.0f64));
        assert_eq!(list, hlist![1u8, "two", 3.0f64]);
    }

    #[test]
    fn test_empty_round_trip() {
        assert_eq!(to::<HListTag, _>(()), HNil);
        assert_eq!(to::<HListTag, _>(HNil), HNil);
    }
}
