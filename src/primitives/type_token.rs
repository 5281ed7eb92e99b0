//! Type tokens: values that stand for types.

use core::marker::PhantomData;

/// A zero-sized value standing for the type `T`.
///
/// Type tokens let types travel through value-level code: they can be
/// stored in heterogeneous sequences, folded over, and converted into
/// type lists.
pub struct Type<T>(PhantomData<fn() -> T>);

impl<T> Type<T> {
    pub const fn new() -> Self {
        Type(PhantomData)
    }

    /// The name of the represented type.
    pub fn name(&self) -> &'static str {
        core::any::type_name::<T>()
    }
}

/// The token for `T`.
pub const fn type_c<T>() -> Type<T> {
    Type::new()
}

/// The token for the type of `value`.
pub fn type_of<T>(_value: &T) -> Type<T> {
    Type::new()
}

// Manual impls: a token is always copyable, whatever `T` is
impl<T> Clone for Type<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Type<T> {}

impl<T> Default for Type<T> {
    fn default() -> Self {
        Type::new()
    }
}

impl<T> PartialEq for Type<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for Type<T> {}

impl<T> core::hash::Hash for Type<T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl<T> core::fmt::Debug for Type<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Type<{}>", self.name())
    }
}

/// Recovers `T` from `Type<T>`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a type token",
    label = "expected `Type<_>`, found `{Self}`",
    note = "wrap the type with `type_c::<T>()`"
)]
pub trait Untype {
    type Type;
}

impl<T> Untype for Type<T> {
    type Type = T;
}
