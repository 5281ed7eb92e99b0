//! A minimal type-list library.
//!
//! `TNil` / `TCons` carry types, not values. This module is self-contained:
//! it knows nothing about tags or concepts.

use core::fmt;
use core::marker::PhantomData;

/// The empty type list.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TNil;

/// A type list with head `H` and tail `T`.
pub struct TCons<H, T>(PhantomData<fn() -> (H, T)>);

impl<H, T> TCons<H, T> {
    pub const fn new() -> Self {
        TCons(PhantomData)
    }
}

impl<H, T> Clone for TCons<H, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H, T> Copy for TCons<H, T> {}

impl<H, T> Default for TCons<H, T> {
    fn default() -> Self {
        TCons::new()
    }
}

/// A list of types.
pub trait TypeList: Copy + Default {
    /// Number of types.
    const LEN: usize;

    /// Call `f` with the name of every type, in order.
    fn for_each_name(f: &mut dyn FnMut(&'static str));
}

impl TypeList for TNil {
    const LEN: usize = 0;

    fn for_each_name(_f: &mut dyn FnMut(&'static str)) {}
}

impl<H, T: TypeList> TypeList for TCons<H, T> {
    const LEN: usize = T::LEN + 1;

    fn for_each_name(f: &mut dyn FnMut(&'static str)) {
        f(core::any::type_name::<H>());
        T::for_each_name(f);
    }
}

impl fmt::Debug for TNil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().finish()
    }
}

impl<H, T: TypeList> fmt::Debug for TCons<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        Self::for_each_name(&mut |name| {
            list.entry(&format_args!("{name}"));
        });
        list.finish()
    }
}

/// Build a type list type.
///
/// ```
/// use tola_concepts::TList;
/// use tola_concepts::ext::tlist::{TCons, TNil, TypeList};
///
/// type Ints = TList![u8, u16, u32];
///
/// assert_eq!(<Ints as TypeList>::LEN, 3);
/// assert_eq!(format!("{:?}", Ints::default()), "[u8, u16, u32]");
/// let _: TCons<u8, TNil> = <TList![u8]>::default();
/// ```
#[macro_export]
macro_rules! TList {
    () => { $crate::ext::tlist::TNil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::ext::tlist::TCons<$head, $crate::TList![$($tail),*]>
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len() {
        assert_eq!(TNil::LEN, 0);
        assert_eq!(<TCons<u8, TCons<bool, TNil>>>::LEN, 2);
    }

    #[test]
    fn test_names_in_order() {
        let mut names = Vec::new();
        <TCons<char, TCons<i64, TNil>>>::for_each_name(&mut |name| names.push(name));
        assert_eq!(names, ["char", "i64"]);
    }
}
