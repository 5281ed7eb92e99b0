//! # Compile-Time Concept Checks
//!
//! ```
//! use tola_concepts::models;
//! use tola_concepts::prelude::*;
//!
//! assert!(models!(i32: Ring));
//! assert!(models!(u8: Orderable));
//! assert!(!models!(u8: Group));
//! assert!(!models!(Type<u8>: Orderable));
//! ```

// =============================================================================
// models! - concept detection (concrete types only)
// =============================================================================

/// Answer of every type that is not shown to model a concept.
///
/// Blanket-implemented for all types. [`models!`] shadows `MODELS` with an
/// inherent `true` that exists only when the concept bound holds.
///
/// [`models!`]: crate::models
#[doc(hidden)]
pub trait Unmodeled {
    const MODELS: bool = false;
}

impl<T: ?Sized> Unmodeled for T {}

/// Whether the concrete type `T` models `Concept`, as a `const bool`.
///
/// A local `Candidate<T>` gets an inherent `MODELS = true` under the bound
/// `T: Concept`. Inherent items win over trait items, so the answer is
/// `true` when the bound holds and falls back to [`Unmodeled::MODELS`]
/// otherwise.
///
/// **Note**: Only works for concrete types. In generic code, bound on the
/// concept's `*Impl` traits instead.
#[macro_export]
macro_rules! models {
    ($T:ty : $Concept:path) => {{
        #[allow(unused_imports)]
        use $crate::dispatch::models::Unmodeled as _;

        struct Candidate<T>(core::marker::PhantomData<T>);

        impl<T: $Concept> Candidate<T> {
            #[allow(dead_code)]
            const MODELS: bool = true;
        }

        Candidate::<$T>::MODELS
    }};
}

#[cfg(test)]
mod tests {
    use crate::concepts::{Comparable, Foldable, Logical, Monoid, Sequence};
    use crate::primitives::{HNil, True};

    #[test]
    fn test_models_builtin() {
        assert!(models!(bool: Comparable));
        assert!(models!(bool: Logical));
        assert!(models!(True: Logical));
        assert!(models!(i64: Monoid));
        assert!(!models!(bool: Monoid));
    }

    #[test]
    fn test_models_is_const() {
        const RING: bool = models!(i32: crate::concepts::Ring);
        const GROUP: bool = models!(u32: crate::concepts::Group);
        assert!(RING);
        assert!(!GROUP);
    }

    #[test]
    fn test_models_containers() {
        assert!(models!(HNil: Foldable));
        assert!(models!(HNil: Sequence));
        assert!(models!((u8, char): Sequence));
        assert!(!models!(u8: Foldable));
    }
}
