//! Structural type equality.
//!
//! `SameAs` holds only when both sides are the same type, so a mismatch is
//! reported by the compiler.

/// Implemented only for `T: SameAs<T>`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not the same type as `{T}`",
    label = "structural type mismatch",
    note = "expected `{T}`"
)]
pub trait SameAs<T: ?Sized> {}

impl<T: ?Sized> SameAs<T> for T {}

/// Statically check the type of a value.
///
/// ```
/// use tola_concepts::primitives::expect_type;
///
/// let pair = (1u8, 'x');
/// expect_type::<(u8, char), _>(&pair);
/// ```
pub fn expect_type<Expected: ?Sized, A: ?Sized + SameAs<Expected>>(_value: &A) {}

/// Statically assert that two types are the same.
///
/// ```
/// use tola_concepts::assert_type_eq;
///
/// type Alias = Option<u8>;
/// assert_type_eq!(Alias, Option<u8>);
/// ```
///
/// ```compile_fail
/// use tola_concepts::assert_type_eq;
///
/// assert_type_eq!(u8, u16);
/// ```
#[macro_export]
macro_rules! assert_type_eq {
    ($a:ty, $b:ty $(,)?) => {{
        fn __same<A: ?Sized + $crate::primitives::SameAs<B>, B: ?Sized>() {}
        __same::<$a, $b>();
    }};
}
