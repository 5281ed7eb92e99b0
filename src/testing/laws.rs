//! Algebraic laws of the `Numeric` fixture.
//!
//! [`numeric_law_suite!`] expands to one `#[test]` per concept, checking
//! every law on a fixed sample of values for one MCD configuration:
//!
//! ```
//! use tola_concepts::dispatch::{EqualMcd, MinusMcd};
//!
//! tola_concepts::numeric_law_suite!(by_equal_minus, EqualMcd, MinusMcd);
//! # fn main() {}
//! ```
//!
//! [`numeric_law_suite!`]: crate::numeric_law_suite

/// Values the laws are checked on, the `i32` extremes included.
pub const SAMPLES: &[i32] = &[i32::MIN, i32::MIN + 1, -12, -7, -2, -1, 0, 1, 2, 3, 7, 12, i32::MAX];

/// Generate the law tests for `Numeric<$cmp, $grp>`, prefixed with `$suite`.
#[macro_export]
macro_rules! numeric_law_suite {
    ($suite:ident, $cmp:ty, $grp:ty $(,)?) => {
        $crate::paste::paste! {
            #[test]
            fn [<$suite _comparable>]() {
                use $crate::concepts::*;
                type N = $crate::testing::Numeric<$cmp, $grp>;

                for &x in $crate::testing::laws::SAMPLES {
                    assert!(equal(N::new(x), N::new(x)).is_truthy(), "equal({x}, {x})");
                    for &y in $crate::testing::laws::SAMPLES {
                        assert_eq!(equal(N::new(x), N::new(y)).is_truthy(), x == y, "equal({x}, {y})");
                        assert_eq!(not_equal(N::new(x), N::new(y)).is_truthy(), x != y, "not_equal({x}, {y})");
                    }
                }
            }

            #[test]
            fn [<$suite _orderable>]() {
                use $crate::concepts::*;
                type N = $crate::testing::Numeric<$cmp, $grp>;

                for &x in $crate::testing::laws::SAMPLES {
                    for &y in $crate::testing::laws::SAMPLES {
                        let (nx, ny) = (N::new(x), N::new(y));
                        assert_eq!(less(nx, ny).is_truthy(), x < y, "less({x}, {y})");
                        assert_eq!(less_equal(nx, ny).is_truthy(), x <= y, "less_equal({x}, {y})");
                        assert_eq!(greater(nx, ny).is_truthy(), x > y, "greater({x}, {y})");
                        assert_eq!(greater_equal(nx, ny).is_truthy(), x >= y, "greater_equal({x}, {y})");
                        assert_eq!(min(nx, ny), N::new(x.min(y)));
                        assert_eq!(max(nx, ny), N::new(x.max(y)));

                        let ordered = less(nx, ny).is_truthy() || less(ny, nx).is_truthy();
                        assert_eq!(equal(nx, ny).is_truthy(), !ordered, "equal vs less at ({x}, {y})");
                    }
                }
            }

            #[test]
            fn [<$suite _enumerable>]() {
                use $crate::concepts::*;
                type N = $crate::testing::Numeric<$cmp, $grp>;

                for &x in $crate::testing::laws::SAMPLES {
                    assert_eq!(succ(N::new(x)), N::new(x.wrapping_add(1)));
                    assert_eq!(pred(N::new(x)), N::new(x.wrapping_sub(1)));
                    assert_eq!(pred(succ(N::new(x))), N::new(x));
                }
            }

            #[test]
            fn [<$suite _logical>]() {
                use $crate::concepts::*;
                type N = $crate::testing::Numeric<$cmp, $grp>;

                let then = eval_if(N::new(1), || 't', || -> char { panic!("else branch forced") });
                let otherwise = eval_if(N::new(0), || -> char { panic!("then branch forced") }, || 'e');
                assert_eq!((then, otherwise), ('t', 'e'));

                assert_eq!(not_(N::new(0)), N::new(1));
                assert_eq!(not_(N::new(5)), N::new(0));
                assert_eq!(if_(N::new(-3), 1u8, 2u8), 1);
                assert_eq!(and_(N::new(2), N::new(3)), N::new(3));
                assert_eq!(and_(N::new(0), N::new(3)), N::new(0));
                assert_eq!(or_(N::new(2), N::new(3)), N::new(2));
                assert_eq!(or_(N::new(0), N::new(3)), N::new(3));

                let counted = while_(|n: &N| less(*n, N::new(10)), N::new(0), succ::<N>);
                assert_eq!(counted, N::new(10));
                let untouched = while_(|_: &N| N::new(0), N::new(4), |_| -> N { panic!("body ran") });
                assert_eq!(untouched, N::new(4));
            }

            #[test]
            fn [<$suite _monoid>]() {
                use $crate::concepts::*;
                type N = $crate::testing::Numeric<$cmp, $grp>;
                type T = $crate::testing::NumericTag<$cmp, $grp>;

                for &x in $crate::testing::laws::SAMPLES {
                    assert_eq!(plus(N::new(x), zero::<T>()), N::new(x));
                    assert_eq!(plus(zero::<T>(), N::new(x)), N::new(x));
                    for &y in $crate::testing::laws::SAMPLES {
                        assert_eq!(plus(N::new(x), N::new(y)), N::new(x.wrapping_add(y)));
                        let z = N::new(3);
                        assert_eq!(
                            plus(N::new(x), plus(N::new(y), z)),
                            plus(plus(N::new(x), N::new(y)), z),
                        );
                    }
                }
            }

            #[test]
            fn [<$suite _group>]() {
                use $crate::concepts::*;
                type N = $crate::testing::Numeric<$cmp, $grp>;
                type T = $crate::testing::NumericTag<$cmp, $grp>;

                for &x in $crate::testing::laws::SAMPLES {
                    let n = N::new(x);
                    assert_eq!(minus(n, n), zero::<T>());
                    assert_eq!(negate(negate(n)), n);
                    assert_eq!(plus(n, negate(n)), zero::<T>());
                    assert_eq!(negate(n), N::new(x.wrapping_neg()));
                    for &y in $crate::testing::laws::SAMPLES {
                        assert_eq!(minus(n, N::new(y)), plus(n, negate(N::new(y))));
                        assert_eq!(minus(n, N::new(y)), N::new(x.wrapping_sub(y)));
                    }
                }
            }

            #[test]
            fn [<$suite _ring>]() {
                use $crate::concepts::*;
                type N = $crate::testing::Numeric<$cmp, $grp>;
                type T = $crate::testing::NumericTag<$cmp, $grp>;

                for &x in $crate::testing::laws::SAMPLES {
                    let n = N::new(x);
                    assert_eq!(mult(n, one::<T>()), n);
                    assert_eq!(mult(one::<T>(), n), n);
                    assert_eq!(power(n, 0), one::<T>());
                    assert_eq!(power(n, 3), N::new(x.wrapping_pow(3)));
                    for &y in $crate::testing::laws::SAMPLES {
                        let z = N::new(-2);
                        assert_eq!(
                            mult(n, plus(N::new(y), z)),
                            plus(mult(n, N::new(y)), mult(n, z)),
                        );
                    }
                }
            }

            #[test]
            fn [<$suite _integral_domain>]() {
                use $crate::concepts::*;
                type N = $crate::testing::Numeric<$cmp, $grp>;

                for &x in $crate::testing::laws::SAMPLES {
                    for &y in $crate::testing::laws::SAMPLES {
                        if y == 0 {
                            continue;
                        }
                        let (nx, ny) = (N::new(x), N::new(y));
                        assert_eq!(plus(mult(quot(nx, ny), ny), rem(nx, ny)), nx, "division of {x} by {y}");
                    }
                }
            }

            #[test]
            fn [<$suite _mcd_names>]() {
                type N = $crate::testing::Numeric<$cmp, $grp>;

                assert_eq!(N::COMPARABLE_MCD, <$cmp as $crate::dispatch::Mcd>::NAME);
                assert_eq!(N::GROUP_MCD, <$grp as $crate::dispatch::Mcd>::NAME);
            }
        }
    };
}
