//! Type-level boolean logic.
//!
//! Core types: `True`, `False`, `Bool` trait.

/// Type-level boolean.
pub trait Bool: 'static + Copy + Default {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct True;

/// Type-level False.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type And<Other: Bool> = Other;
    type Or<Other: Bool> = True;
    type Not = False;
}

impl Bool for False {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type And<Other: Bool> = False;
    type Or<Other: Bool> = Other;
    type Not = True;
}

/// Type-level equality of two booleans (XNOR).
pub trait BoolEq<Other: Bool>: Bool {
    type Out: Bool;
}

impl<B: Bool> BoolEq<B> for True {
    type Out = B;
}

impl<B: Bool> BoolEq<B> for False {
    type Out = B::Not;
}

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = True;
}

impl SelectBool<false> for () {
    type Out = False;
}

/// The type-level boolean for a const `bool`.
pub type BoolOf<const B: bool> = <() as SelectBool<B>>::Out;

/// Conditional Type Alias
pub type If<const C: bool, T, E> = <BoolOf<C> as Bool>::If<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    fn value<B: Bool>() -> bool {
        B::VALUE
    }

    #[test]
    fn test_connectives() {
        assert!(value::<<True as Bool>::And<True>>());
        assert!(!value::<<True as Bool>::And<False>>());
        assert!(value::<<False as Bool>::Or<True>>());
        assert!(!value::<<False as Bool>::Or<False>>());
        assert!(value::<<False as Bool>::Not>());
    }

    #[test]
    fn test_bool_eq() {
        assert!(value::<<True as BoolEq<True>>::Out>());
        assert!(value::<<False as BoolEq<False>>::Out>());
        assert!(!value::<<True as BoolEq<False>>::Out>());
        assert!(!value::<<False as BoolEq<True>>::Out>());
    }

    #[test]
    fn test_const_selection() {
        let picked: If<true, u8, u16> = 7u8;
        assert_eq!(picked, 7);
        assert!(!value::<BoolOf<false>>());
    }
}
