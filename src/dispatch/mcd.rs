//! Minimal complete definitions.
//!
//! A concept with several equivalent minimal definitions lets a tag supply
//! any one of them and derives the rest:
//!
//! | Concept | Definition | Derived |
//! |---------|------------|---------|
//! | Comparable | `equal` | |
//! | Comparable | Orderable's `less` (`EqualViaLess`) | `equal` |
//! | Group | `negate` | `minus` (`MinusViaNegate`) |
//! | Group | `minus` | `negate` (`NegateViaMinus`) |
//! | Foldable | `unpack` | `fold_left` (`FoldLeftViaUnpack`) |
//! | Foldable | `fold_left` | `unpack` (`UnpackViaFoldLeft`) |
//!
//! A tag picks a definition by implementing its primitive directly and
//! delegating the other operation to the derivation type. Coherence forbids
//! registering an operation twice, so exactly one path is active per tag.
//!
//! The markers below name the paths, so a type can carry its choice as a
//! type parameter. When a type leaves the choice open, the defaults apply:
//! Comparable is derived from Orderable and Group is built on `minus`. The
//! `comparable-equal-mcd` and `group-negate-mcd` features switch the
//! defaults.

/// A minimal complete definition marker.
pub trait Mcd: 'static + Copy + Default + Send + Sync {
    /// Human-readable name of the definition.
    const NAME: &'static str;
}

/// Marker for the ways of being Comparable.
pub trait ComparableMcd: Mcd {}

/// Marker for the ways of being a Group.
pub trait GroupMcd: Mcd {}

/// Comparable through a primitive `equal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EqualMcd;

/// Comparable through Orderable's `less`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OrderableMcd;

/// Group through a primitive `negate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NegateMcd;

/// Group through a primitive `minus`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinusMcd;

impl Mcd for EqualMcd {
    const NAME: &'static str = "Comparable(equal)";
}

impl Mcd for OrderableMcd {
    const NAME: &'static str = "Comparable(Orderable::less)";
}

impl Mcd for NegateMcd {
    const NAME: &'static str = "Group(negate)";
}

impl Mcd for MinusMcd {
    const NAME: &'static str = "Group(minus)";
}

impl ComparableMcd for EqualMcd {}
impl ComparableMcd for OrderableMcd {}
impl GroupMcd for NegateMcd {}
impl GroupMcd for MinusMcd {}

/// Comparable definition used when none is named.
#[cfg(feature = "comparable-equal-mcd")]
pub type DefaultComparableMcd = EqualMcd;

/// Comparable definition used when none is named.
#[cfg(not(feature = "comparable-equal-mcd"))]
pub type DefaultComparableMcd = OrderableMcd;

/// Group definition used when none is named.
#[cfg(feature = "group-negate-mcd")]
pub type DefaultGroupMcd = NegateMcd;

/// Group definition used when none is named.
#[cfg(not(feature = "group-negate-mcd"))]
pub type DefaultGroupMcd = MinusMcd;

/// Name of a definition marker.
pub fn mcd_name<M: Mcd>() -> &'static str {
    M::NAME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_features() {
        let comparable = mcd_name::<DefaultComparableMcd>();
        let group = mcd_name::<DefaultGroupMcd>();

        if cfg!(feature = "comparable-equal-mcd") {
            assert_eq!(comparable, "Comparable(equal)");
        } else {
            assert_eq!(comparable, "Comparable(Orderable::less)");
        }

        if cfg!(feature = "group-negate-mcd") {
            assert_eq!(group, "Group(negate)");
        } else {
            assert_eq!(group, "Group(minus)");
        }
    }
}
