//! The concept laws, checked on `Numeric` under every combination of
//! minimal complete definitions.

#![cfg(feature = "testing")]

use tola_concepts::dispatch::{EqualMcd, MinusMcd, NegateMcd, OrderableMcd};
use tola_concepts::numeric_law_suite;
use tola_concepts::prelude::*;
use tola_concepts::testing::{Numeric, NumericTag, numeric};

// =============================================================================
// Law Suites
// =============================================================================

numeric_law_suite!(equal_negate, EqualMcd, NegateMcd);
numeric_law_suite!(equal_minus, EqualMcd, MinusMcd);
numeric_law_suite!(orderable_negate, OrderableMcd, NegateMcd);
numeric_law_suite!(orderable_minus, OrderableMcd, MinusMcd);

// =============================================================================
// Default Definitions
// =============================================================================

#[test]
fn test_default_comparable_mcd() {
    let expected = if cfg!(feature = "comparable-equal-mcd") {
        "Comparable(equal)"
    } else {
        "Comparable(Orderable::less)"
    };
    assert_eq!(<Numeric>::COMPARABLE_MCD, expected);
}

#[test]
fn test_default_group_mcd() {
    let expected = if cfg!(feature = "group-negate-mcd") {
        "Group(negate)"
    } else {
        "Group(minus)"
    };
    assert_eq!(<Numeric>::GROUP_MCD, expected);
}

#[test]
fn test_default_numeric_models_everything() {
    assert!(models!(Numeric: Comparable));
    assert!(models!(Numeric: Orderable));
    assert!(models!(Numeric: Enumerable));
    assert!(models!(Numeric: Logical));
    assert!(models!(Numeric: Monoid));
    assert!(models!(Numeric: Group));
    assert!(models!(Numeric: Ring));
    assert!(models!(Numeric: IntegralDomain));
    assert!(!models!(Numeric: Foldable));
}

// =============================================================================
// Mixed Use
// =============================================================================

#[test]
fn test_results_are_numerics() {
    let yes = equal(numeric(4), numeric(4));
    let no = less(numeric(4), numeric(4));
    assert_eq!(yes, numeric(1));
    assert_eq!(no, numeric(0));
    assert_eq!(not_(yes), no);
}

#[test]
fn test_sum_and_product_of_numerics() {
    type Tag = NumericTag;

    let xs = hlist![numeric(2), numeric(3), numeric(4)];
    assert_eq!(sum::<Tag, _>(xs), numeric(9));
    assert_eq!(product::<Tag, _>(xs), numeric(24));
    assert_eq!(sum::<Tag, _>(HNil), zero::<Tag>());
    assert_eq!(product::<Tag, _>(HNil), one::<Tag>());
}

#[test]
fn test_power_and_division() {
    assert_eq!(power(numeric(-2), 5), numeric(-32));
    assert_eq!(quot(numeric(-7), numeric(2)), numeric(-3));
    assert_eq!(rem(numeric(-7), numeric(2)), numeric(-1));
}

#[test]
fn test_debug() {
    assert_eq!(format!("{:?}", numeric(-5)), "numeric(-5)");
    assert_eq!(i32::from(numeric(8)), 8);
}
