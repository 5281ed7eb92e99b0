//! Property tests: concept laws on arbitrary values, for `Numeric` under
//! both Group definitions and for the primitive integers.

#![cfg(feature = "testing")]

use proptest::prelude::*;
use tola_concepts::dispatch::{EqualMcd, MinusMcd, NegateMcd, OrderableMcd};
use tola_concepts::prelude::*;
use tola_concepts::testing::{Numeric, NumericTag};

type ByNegate = Numeric<OrderableMcd, NegateMcd>;
type ByMinus = Numeric<EqualMcd, MinusMcd>;

fn small() -> impl Strategy<Value = i32> {
    -10_000i32..=10_000
}

fn nonzero() -> impl Strategy<Value = i32> {
    prop_oneof![-1_000i32..=-1, 1i32..=1_000]
}

proptest! {
    #[test]
    fn group_definitions_agree(x in small(), y in small()) {
        let a = minus(ByNegate::new(x), ByNegate::new(y));
        let b = minus(ByMinus::new(x), ByMinus::new(y));
        prop_assert_eq!(a.value, b.value);
        prop_assert_eq!(negate(ByNegate::new(x)).value, negate(ByMinus::new(x)).value);
    }

    #[test]
    fn comparable_definitions_agree(x in small(), y in small()) {
        let by_less = equal(ByNegate::new(x), ByNegate::new(y)).is_truthy();
        let by_equal = equal(ByMinus::new(x), ByMinus::new(y)).is_truthy();
        prop_assert_eq!(by_less, by_equal);
        prop_assert_eq!(by_less, x == y);
    }

    #[test]
    fn minus_is_plus_negate(x in small(), y in small()) {
        let (nx, ny) = (ByMinus::new(x), ByMinus::new(y));
        prop_assert_eq!(minus(nx, ny), plus(nx, negate(ny)));
        prop_assert_eq!(minus(nx, nx), zero::<NumericTag<EqualMcd, MinusMcd>>());
    }

    #[test]
    fn trichotomy(x in small(), y in small()) {
        let (nx, ny) = (ByNegate::new(x), ByNegate::new(y));
        let count = [less(nx, ny), less(ny, nx), equal(nx, ny)]
            .iter()
            .filter(|n| n.is_truthy())
            .count();
        prop_assert_eq!(count, 1);
    }

    #[test]
    fn min_max_partition(x in small(), y in small()) {
        let (nx, ny) = (ByNegate::new(x), ByNegate::new(y));
        prop_assert_eq!(plus(min(nx, ny), max(nx, ny)), plus(nx, ny));
        prop_assert!(less_equal(min(nx, ny), max(nx, ny)).is_truthy());
    }

    #[test]
    fn division_identity(x in small(), y in nonzero()) {
        let (nx, ny) = (ByNegate::new(x), ByNegate::new(y));
        prop_assert_eq!(plus(mult(quot(nx, ny), ny), rem(nx, ny)), nx);
    }

    #[test]
    fn group_laws_on_every_i32(x in any::<i32>(), y in any::<i32>()) {
        let (nx, ny) = (ByNegate::new(x), ByNegate::new(y));
        prop_assert_eq!(negate(negate(nx)), nx);
        prop_assert_eq!(minus(nx, nx), zero::<NumericTag<OrderableMcd, NegateMcd>>());
        prop_assert_eq!(minus(nx, ny), plus(nx, negate(ny)));
        prop_assert_eq!(negate(ByMinus::new(x)).value, negate(nx).value);
    }

    #[test]
    fn division_identity_on_every_i32(x in any::<i32>(), y in any::<i32>().prop_filter("nonzero divisor", |y| *y != 0)) {
        let (nx, ny) = (ByMinus::new(x), ByMinus::new(y));
        prop_assert_eq!(plus(mult(quot(nx, ny), ny), rem(nx, ny)), nx);
    }

    #[test]
    fn integer_division_identity(x in -1_000_000_000i64..=1_000_000_000, y in nonzero()) {
        let y = i64::from(y);
        prop_assert_eq!(plus(mult(quot(x, y), y), rem(x, y)), x);
    }

    #[test]
    fn integer_ordering_matches_std(x in any::<u32>(), y in any::<u32>()) {
        prop_assert_eq!(less(x, y), x < y);
        prop_assert_eq!(greater_equal(x, y), x >= y);
        prop_assert_eq!(min(x, y), x.min(y));
        prop_assert_eq!(max(x, y), x.max(y));
    }

    #[test]
    fn sum_matches_iterator(a in small(), b in small(), c in small()) {
        let folded = sum::<IntegerTag<i32>, _>((a, b, c));
        prop_assert_eq!(folded, [a, b, c].iter().sum::<i32>());
    }
}
