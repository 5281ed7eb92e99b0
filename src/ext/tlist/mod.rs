//! Type lists as Foldable Sequences.
//!
//! [`list`] is an independent type-list library; this module registers it
//! with the concepts:
//!
//! - Foldable, through a direct `fold_left` yielding one `Type<T>` token per
//!   element type (`unpack` is derived from it);
//! - Sequence, by making a list from an HList of type tokens;
//! - Comparable, two lists being equal when they hold the same types.
//!
//! Any Foldable of type tokens therefore converts to a type list:
//!
//! ```
//! use tola_concepts::prelude::*;
//!
//! let list = to::<TListTag, _>(hlist![type_c::<u8>(), type_c::<char>()]);
//! expect_type::<TList![u8, char], _>(&list);
//! ```

pub mod list;

pub use list::{TCons, TNil, TypeList};

use crate::concepts::{
    EqualImpl, FoldLeftImpl, MakeImpl, ToImpl, ToViaFoldable, UnpackImpl, UnpackViaFoldLeft, To,
};
use crate::dispatch::Tagged;
use crate::primitives::{Folder, HCons, HNil, Type};

/// Tag of `TNil` and `TCons`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TListTag;

impl Tagged for TNil {
    type Tag = TListTag;
}

impl<H, T> Tagged for TCons<H, T> {
    type Tag = TListTag;
}

// =============================================================================
// Foldable
// =============================================================================

impl<Acc, F> FoldLeftImpl<TNil, Acc, F> for TListTag {
    type Output = Acc;

    #[inline(always)]
    fn apply(_x: TNil, acc: Acc, _f: F) -> Acc {
        acc
    }
}

impl<H, T, Acc, F> FoldLeftImpl<TCons<H, T>, Acc, F> for TListTag
where
    T: TypeList,
    F: Folder<Acc, Type<H>>,
    TListTag: FoldLeftImpl<T, <F as Folder<Acc, Type<H>>>::Output, F>,
{
    type Output = <TListTag as FoldLeftImpl<T, <F as Folder<Acc, Type<H>>>::Output, F>>::Output;

    #[inline]
    fn apply(_x: TCons<H, T>, acc: Acc, mut f: F) -> Self::Output {
        let acc = f.call(acc, Type::new());
        <TListTag as FoldLeftImpl<T, _, F>>::apply(T::default(), acc, f)
    }
}

impl<X> UnpackImpl<X> for TListTag
where
    UnpackViaFoldLeft: UnpackImpl<X>,
{
    type Elements = <UnpackViaFoldLeft as UnpackImpl<X>>::Elements;

    #[inline]
    fn apply(x: X) -> Self::Elements {
        <UnpackViaFoldLeft as UnpackImpl<X>>::apply(x)
    }
}

// =============================================================================
// Sequence
// =============================================================================

/// HLists of type tokens, convertible to a type list.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot become a type list",
    label = "every element must be a type token",
    note = "wrap each type with `type_c::<T>()`"
)]
pub trait IntoTypeList {
    type List: TypeList;
}

impl IntoTypeList for HNil {
    type List = TNil;
}

impl<T, R: IntoTypeList> IntoTypeList for HCons<Type<T>, R> {
    type List = TCons<T, R::List>;
}

impl<E: IntoTypeList> MakeImpl<E> for TListTag {
    type Output = E::List;

    #[inline(always)]
    fn apply(_elems: E) -> E::List {
        Default::default()
    }
}

impl<Src, X> ToImpl<X> for (TListTag, Src)
where
    ToViaFoldable<TListTag>: ToImpl<X>,
{
    type Output = <ToViaFoldable<TListTag> as ToImpl<X>>::Output;

    #[inline]
    fn apply(x: X) -> Self::Output {
        <ToViaFoldable<TListTag> as ToImpl<X>>::apply(x)
    }
}

/// Convert a Foldable of type tokens into a type list.
#[inline]
pub fn to_tlist<X>(x: X) -> To<TListTag, X>
where
    X: Tagged,
    (TListTag, X::Tag): ToImpl<X>,
{
    crate::concepts::to::<TListTag, X>(x)
}

// =============================================================================
// Comparable
// =============================================================================

impl<A, B> EqualImpl<A, B> for (TListTag, TListTag)
where
    A: TypeList + 'static,
    B: TypeList + 'static,
{
    type Output = bool;

    fn apply(_x: A, _y: B) -> bool {
        core::any::TypeId::of::<A>() == core::any::TypeId::of::<B>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concepts::{equal, length, unpack};
    use crate::primitives::type_c;
    use crate::{TList, assert_type_eq, hlist};

    #[test]
    fn test_unpack_yields_tokens() {
        let tokens = unpack(<TList![u8, bool]>::default());
        assert_eq!(tokens, hlist![type_c::<u8>(), type_c::<bool>()]);
        assert_eq!(length(&TNil), 0);
    }

    #[test]
    fn test_make_from_tokens() {
        let list = to_tlist(hlist![type_c::<i16>(), type_c::<()>()]);
        let _: TList![i16, ()] = list;
        assert_type_eq!(To<TListTag, HNil>, TNil);
    }

    #[test]
    fn test_equal_by_types() {
        assert!(equal(<TList![u8]>::default(), <TList![u8]>::default()));
        assert!(!equal(<TList![u8]>::default(), <TList![u8, u8]>::default()));
        assert!(equal(TNil, TNil));
    }
}
