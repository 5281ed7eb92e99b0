//! Type tokens as Comparable objects.
//!
//! Two tokens are equal exactly when they stand for the same type.

use core::any::TypeId;

use crate::concepts::EqualImpl;
use crate::dispatch::Tagged;
use crate::primitives::Type;

/// Tag of `Type<T>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TypeTag;

impl<T> Tagged for Type<T> {
    type Tag = TypeTag;
}

impl<A: 'static, B: 'static> EqualImpl<Type<A>, Type<B>> for (TypeTag, TypeTag) {
    type Output = bool;

    fn apply(_x: Type<A>, _y: Type<B>) -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }
}

#[cfg(test)]
mod tests {
    use crate::concepts::{equal, not_equal};
    use crate::primitives::type_c;

    #[test]
    fn test_token_equality() {
        assert!(equal(type_c::<u8>(), type_c::<u8>()));
        assert!(!equal(type_c::<u8>(), type_c::<i8>()));
        assert!(not_equal(type_c::<&'static str>(), type_c::<String>()));
    }
}
