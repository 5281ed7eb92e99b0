//! Peano numbers.
//!
//! Used for type-level lengths and indices of heterogeneous sequences.

use core::marker::PhantomData;

/// Peano number trait
pub trait Peano: 'static {
    /// The number as a `usize`.
    const VALUE: usize;
}

/// Zero (base case)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Z;

impl Peano for Z {
    const VALUE: usize = 0;
}

/// Successor (S<N> = N + 1)
pub struct S<N>(PhantomData<N>);

impl<N: Peano> Peano for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

// Manual impls: don't require N to implement anything
impl<N> Clone for S<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for S<N> {}

impl<N> Default for S<N> {
    fn default() -> Self {
        S(PhantomData)
    }
}

impl<N: Peano> core::fmt::Debug for S<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "D{}", Self::VALUE)
    }
}

// Generate D0..D32 using proc-macro
macros::peano!(32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(D0::VALUE, 0);
        assert_eq!(D1::VALUE, 1);
        assert_eq!(D16::VALUE, 16);
        assert_eq!(<S<D31>>::VALUE, 32);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", D3::default()), "D3");
    }
}
