//! Rust tuples as Foldable Sequences.
//!
//! Tuples of arity 0 to 12 share the tag `TupleTag`.

use crate::concepts::{
    FoldLeftImpl, FoldLeftViaUnpack, MakeImpl, ToImpl, ToViaFoldable, UnpackImpl,
};
use crate::dispatch::Tagged;

/// Tag of every tuple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TupleTag;

macro_rules! tuple_impls {
    ($( ( $($T:ident),* ) )*) => {
        $(
            paste::paste! {
                impl<$($T),*> Tagged for ($($T,)*) {
                    type Tag = TupleTag;
                }

                impl<$($T),*> UnpackImpl<($($T,)*)> for TupleTag {
                    type Elements = crate::HList![$($T),*];

                    #[inline]
                    fn apply(x: ($($T,)*)) -> Self::Elements {
                        let ($([<$T:lower>],)*) = x;
                        crate::hlist![$([<$T:lower>]),*]
                    }
                }

                impl<$($T),*> MakeImpl<crate::HList![$($T),*]> for TupleTag {
                    type Output = ($($T,)*);

                    #[inline]
                    #[allow(clippy::unused_unit)]
                    fn apply(elems: crate::HList![$($T),*]) -> Self::Output {
                        let crate::hlist_pat!($([<$T:lower>]),*) = elems;
                        ($([<$T:lower>],)*)
                    }
                }
            }
        )*
    };
}

tuple_impls! {
    ()
    (A)
    (A, B)
    (A, B, C)
    (A, B, C, D)
    (A, B, C, D, E)
    (A, B, C, D, E, F)
    (A, B, C, D, E, F, G)
    (A, B, C, D, E, F, G, H)
    (A, B, C, D, E, F, G, H, I)
    (A, B, C, D, E, F, G, H, I, J)
    (A, B, C, D, E, F, G, H, I, J, K)
    (A, B, C, D, E, F, G, H, I, J, K, L)
}

impl<X, Acc, F> FoldLeftImpl<X, Acc, F> for TupleTag
where
    FoldLeftViaUnpack: FoldLeftImpl<X, Acc, F>,
{
    type Output = <FoldLeftViaUnpack as FoldLeftImpl<X, Acc, F>>::Output;

    #[inline]
    fn apply(x: X, acc: Acc, f: F) -> Self::Output {
        <FoldLeftViaUnpack as FoldLeftImpl<X, Acc, F>>::apply(x, acc, f)
    }
}

impl<Src, X> ToImpl<X> for (TupleTag, Src)
where
    ToViaFoldable<TupleTag>: ToImpl<X>,
{
    type Output = <ToViaFoldable<TupleTag> as ToImpl<X>>::Output;

    #[inline]
    fn apply(x: X) -> Self::Output {
        <ToViaFoldable<TupleTag> as ToImpl<X>>::apply(x)
    }
}

#[cfg(test)]
mod tests {
    use crate::concepts::*;
    use crate::hlist;
    use super::TupleTag;

    #[test]
    fn test_unpack_preserves_order() {
        let elems = unpack((1u8, 'b', "c"));
        assert_eq!(elems, hlist![1u8, 'b', "c"]);
        assert!(is_empty(&()));
        assert_eq!(length(&(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12)), 12);
    }

    #[test]
    fn test_make_from_hlist() {
        assert_eq!(make::<TupleTag, _>(hlist![1i32]), (1i32,));
        assert_eq!(make::<TupleTag, _>(hlist![1u8, 'b']), (1u8, 'b'));
    }

    #[test]
    fn test_fold() {
        let total = fold_left((1u8, 2u8), 0u32, |acc: u32, x: u8| acc + u32::from(x));
        assert_eq!(total, 3);
    }
}
