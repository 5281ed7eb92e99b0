//! The `Numeric` fixture.
//!
//! A wrapped `i32` modeling every arithmetic and logical concept through
//! selectable minimal complete definitions:
//!
//! - `C` chooses how Comparable is defined: a primitive `equal`
//!   ([`EqualMcd`]) or `equal` derived from `less` ([`OrderableMcd`]);
//! - `G` chooses how Group is defined: a primitive `negate` ([`NegateMcd`])
//!   with `minus` derived, or a primitive `minus` ([`MinusMcd`]) with
//!   `negate` derived.
//!
//! Results of `equal`, `less` and `not_` are numerics holding 1 or 0.
//! Arithmetic wraps around at the `i32` bounds in every build profile, so
//! `quot(numeric(i32::MIN), numeric(-1))` is `numeric(i32::MIN)`. Division
//! by zero panics.
//!
//! ```
//! use tola_concepts::prelude::*;
//! use tola_concepts::testing::{Numeric, NumericTag, numeric};
//!
//! assert_eq!(plus(numeric(2), numeric(3)), numeric(5));
//! assert!(less(numeric(-1), numeric(0)).is_truthy());
//!
//! type ByNegate = Numeric<EqualMcd, NegateMcd>;
//! assert_eq!(minus(ByNegate::new(7), ByNegate::new(9)), ByNegate::new(-2));
//! assert_eq!(zero::<NumericTag<EqualMcd, NegateMcd>>(), ByNegate::new(0));
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::concepts::{
    EqualImpl, EqualViaLess, EvalIfImpl, LessImpl, MinusImpl, MinusViaNegate, MultImpl,
    NegateImpl, NegateViaMinus, NotImpl, OneImpl, PlusImpl, PredImpl, QuotImpl, RemImpl,
    SuccImpl, WhileImpl, ZeroImpl,
};
use crate::dispatch::{
    DefaultComparableMcd, DefaultGroupMcd, EqualMcd, Mcd, MinusMcd, NegateMcd, OrderableMcd,
    Tagged,
};
use crate::primitives::Eval;

/// An `i32` modeling the arithmetic concepts.
pub struct Numeric<C = DefaultComparableMcd, G = DefaultGroupMcd> {
    pub value: i32,
    mcd: PhantomData<fn() -> (C, G)>,
}

/// Tag of `Numeric<C, G>`.
pub struct NumericTag<C = DefaultComparableMcd, G = DefaultGroupMcd>(PhantomData<fn() -> (C, G)>);

/// A numeric with the default definitions.
pub const fn numeric(value: i32) -> Numeric {
    Numeric::new(value)
}

impl<C, G> Numeric<C, G> {
    pub const fn new(value: i32) -> Self {
        Numeric { value, mcd: PhantomData }
    }

    /// Whether the value is nonzero, as when used as a condition.
    pub const fn is_truthy(&self) -> bool {
        self.value != 0
    }

    const fn from_bool(b: bool) -> Self {
        Numeric::new(b as i32)
    }
}

impl<C: Mcd, G: Mcd> Numeric<C, G> {
    /// Name of the Comparable definition in use.
    pub const COMPARABLE_MCD: &'static str = C::NAME;

    /// Name of the Group definition in use.
    pub const GROUP_MCD: &'static str = G::NAME;
}

impl<C, G> Clone for Numeric<C, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, G> Copy for Numeric<C, G> {}

impl<C, G> PartialEq for Numeric<C, G> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<C, G> Eq for Numeric<C, G> {}

impl<C, G> Hash for Numeric<C, G> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<C, G> fmt::Debug for Numeric<C, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "numeric({})", self.value)
    }
}

impl<C, G> From<Numeric<C, G>> for i32 {
    fn from(n: Numeric<C, G>) -> i32 {
        n.value
    }
}

impl<C, G> Tagged for Numeric<C, G> {
    type Tag = NumericTag<C, G>;
}

// =============================================================================
// Comparable
// =============================================================================

impl<G> EqualImpl<Numeric<EqualMcd, G>, Numeric<EqualMcd, G>>
    for (NumericTag<EqualMcd, G>, NumericTag<EqualMcd, G>)
{
    type Output = Numeric<EqualMcd, G>;

    fn apply(x: Numeric<EqualMcd, G>, y: Numeric<EqualMcd, G>) -> Self::Output {
        Numeric::from_bool(x.value == y.value)
    }
}

impl<G> EqualImpl<Numeric<OrderableMcd, G>, Numeric<OrderableMcd, G>>
    for (NumericTag<OrderableMcd, G>, NumericTag<OrderableMcd, G>)
where
    EqualViaLess: EqualImpl<Numeric<OrderableMcd, G>, Numeric<OrderableMcd, G>>,
{
    type Output =
        <EqualViaLess as EqualImpl<Numeric<OrderableMcd, G>, Numeric<OrderableMcd, G>>>::Output;

    fn apply(x: Numeric<OrderableMcd, G>, y: Numeric<OrderableMcd, G>) -> Self::Output {
        <EqualViaLess as EqualImpl<_, _>>::apply(x, y)
    }
}

// =============================================================================
// Orderable
// =============================================================================

impl<C, G> LessImpl<Numeric<C, G>, Numeric<C, G>> for (NumericTag<C, G>, NumericTag<C, G>) {
    type Output = Numeric<C, G>;

    fn apply(x: Numeric<C, G>, y: Numeric<C, G>) -> Numeric<C, G> {
        Numeric::from_bool(x.value < y.value)
    }
}

// =============================================================================
// Enumerable
// =============================================================================

impl<C, G> SuccImpl<Numeric<C, G>> for NumericTag<C, G> {
    type Output = Numeric<C, G>;

    fn apply(n: Numeric<C, G>) -> Numeric<C, G> {
        Numeric::new(n.value.wrapping_add(1))
    }
}

impl<C, G> PredImpl<Numeric<C, G>> for NumericTag<C, G> {
    type Output = Numeric<C, G>;

    fn apply(n: Numeric<C, G>) -> Numeric<C, G> {
        Numeric::new(n.value.wrapping_sub(1))
    }
}

// =============================================================================
// Logical
// =============================================================================

impl<C, G, T, E> EvalIfImpl<Numeric<C, G>, T, E> for NumericTag<C, G>
where
    T: Eval,
    E: Eval<Output = T::Output>,
{
    type Output = T::Output;

    fn apply(cond: Numeric<C, G>, then: T, otherwise: E) -> T::Output {
        if cond.is_truthy() { then.eval() } else { otherwise.eval() }
    }
}

impl<C, G> NotImpl<Numeric<C, G>> for NumericTag<C, G> {
    type Output = Numeric<C, G>;

    fn apply(x: Numeric<C, G>) -> Numeric<C, G> {
        Numeric::from_bool(!x.is_truthy())
    }
}

impl<C, G> WhileImpl<Numeric<C, G>> for NumericTag<C, G> {
    fn apply<S, P, F>(mut pred: P, state: S, mut f: F) -> S
    where
        P: FnMut(&S) -> Numeric<C, G>,
        F: FnMut(S) -> S,
    {
        let mut state = state;
        while pred(&state).is_truthy() {
            state = f(state);
        }
        state
    }
}

// =============================================================================
// Monoid
// =============================================================================

impl<C, G> PlusImpl<Numeric<C, G>, Numeric<C, G>> for (NumericTag<C, G>, NumericTag<C, G>) {
    type Output = Numeric<C, G>;

    fn apply(x: Numeric<C, G>, y: Numeric<C, G>) -> Numeric<C, G> {
        Numeric::new(x.value.wrapping_add(y.value))
    }
}

impl<C, G> ZeroImpl for NumericTag<C, G> {
    type Output = Numeric<C, G>;

    fn apply() -> Numeric<C, G> {
        Numeric::new(0)
    }
}

// =============================================================================
// Group
// =============================================================================

impl<C> NegateImpl<Numeric<C, NegateMcd>> for NumericTag<C, NegateMcd> {
    type Output = Numeric<C, NegateMcd>;

    fn apply(x: Numeric<C, NegateMcd>) -> Numeric<C, NegateMcd> {
        Numeric::new(x.value.wrapping_neg())
    }
}

impl<C> MinusImpl<Numeric<C, NegateMcd>, Numeric<C, NegateMcd>>
    for (NumericTag<C, NegateMcd>, NumericTag<C, NegateMcd>)
where
    MinusViaNegate: MinusImpl<Numeric<C, NegateMcd>, Numeric<C, NegateMcd>>,
{
    type Output =
        <MinusViaNegate as MinusImpl<Numeric<C, NegateMcd>, Numeric<C, NegateMcd>>>::Output;

    fn apply(x: Numeric<C, NegateMcd>, y: Numeric<C, NegateMcd>) -> Self::Output {
        <MinusViaNegate as MinusImpl<_, _>>::apply(x, y)
    }
}

impl<C> MinusImpl<Numeric<C, MinusMcd>, Numeric<C, MinusMcd>>
    for (NumericTag<C, MinusMcd>, NumericTag<C, MinusMcd>)
{
    type Output = Numeric<C, MinusMcd>;

    fn apply(x: Numeric<C, MinusMcd>, y: Numeric<C, MinusMcd>) -> Numeric<C, MinusMcd> {
        Numeric::new(x.value.wrapping_sub(y.value))
    }
}

impl<C> NegateImpl<Numeric<C, MinusMcd>> for NumericTag<C, MinusMcd>
where
    NegateViaMinus: NegateImpl<Numeric<C, MinusMcd>>,
{
    type Output = <NegateViaMinus as NegateImpl<Numeric<C, MinusMcd>>>::Output;

    fn apply(x: Numeric<C, MinusMcd>) -> Self::Output {
        <NegateViaMinus as NegateImpl<_>>::apply(x)
    }
}

// =============================================================================
// Ring
// =============================================================================

impl<C, G> MultImpl<Numeric<C, G>, Numeric<C, G>> for (NumericTag<C, G>, NumericTag<C, G>) {
    type Output = Numeric<C, G>;

    fn apply(x: Numeric<C, G>, y: Numeric<C, G>) -> Numeric<C, G> {
        Numeric::new(x.value.wrapping_mul(y.value))
    }
}

impl<C, G> OneImpl for NumericTag<C, G> {
    type Output = Numeric<C, G>;

    fn apply() -> Numeric<C, G> {
        Numeric::new(1)
    }
}

// =============================================================================
// IntegralDomain
// =============================================================================

impl<C, G> QuotImpl<Numeric<C, G>, Numeric<C, G>> for (NumericTag<C, G>, NumericTag<C, G>) {
    type Output = Numeric<C, G>;

    fn apply(x: Numeric<C, G>, y: Numeric<C, G>) -> Numeric<C, G> {
        Numeric::new(x.value.wrapping_div(y.value))
    }
}

impl<C, G> RemImpl<Numeric<C, G>, Numeric<C, G>> for (NumericTag<C, G>, NumericTag<C, G>) {
    type Output = Numeric<C, G>;

    fn apply(x: Numeric<C, G>, y: Numeric<C, G>) -> Numeric<C, G> {
        Numeric::new(x.value.wrapping_rem(y.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concepts::{equal, eval_if, minus, mult, negate, plus, quot, rem, succ, zero};
    use crate::assert_type_eq;
    use crate::concepts::{Equal, Negate};

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", numeric(-3)), "numeric(-3)");
        assert_eq!(i32::from(numeric(8)), 8);
    }

    #[test]
    fn test_derived_equal_is_a_numeric() {
        type N = Numeric<OrderableMcd, MinusMcd>;
        assert_type_eq!(Equal<N, N>, N);
        assert!(equal(N::new(4), N::new(4)).is_truthy());
        assert!(!equal(N::new(4), N::new(5)).is_truthy());
    }

    #[test]
    fn test_derived_group_operations() {
        type ByMinus = Numeric<EqualMcd, MinusMcd>;
        type ByNegate = Numeric<EqualMcd, NegateMcd>;
        assert_type_eq!(Negate<ByMinus>, ByMinus);
        assert_eq!(negate(ByMinus::new(5)), ByMinus::new(-5));
        assert_eq!(minus(ByNegate::new(5), ByNegate::new(8)), ByNegate::new(-3));
    }

    #[test]
    fn test_eval_if_is_lazy() {
        let picked = eval_if(numeric(0), || -> i32 { panic!("forced") }, || 2);
        assert_eq!(picked, 2);
    }

    #[test]
    fn test_arithmetic_wraps_at_bounds() {
        type ByNegate = Numeric<EqualMcd, NegateMcd>;
        type ByMinus = Numeric<OrderableMcd, MinusMcd>;

        let min = ByNegate::new(i32::MIN);
        assert_eq!(negate(min), min);
        assert_eq!(negate(negate(min)), min);
        assert_eq!(minus(min, min), zero::<NumericTag<EqualMcd, NegateMcd>>());
        assert_eq!(negate(ByMinus::new(i32::MIN)), ByMinus::new(i32::MIN));
        assert_eq!(succ(ByNegate::new(i32::MAX)), min);
        assert_eq!(plus(ByNegate::new(i32::MAX), ByNegate::new(1)), min);
        assert_eq!(mult(ByNegate::new(i32::MAX), ByNegate::new(2)), ByNegate::new(-2));
    }

    #[test]
    fn test_division_of_min_by_minus_one() {
        let (x, y) = (numeric(i32::MIN), numeric(-1));
        assert_eq!(quot(x, y), numeric(i32::MIN));
        assert_eq!(rem(x, y), numeric(0));
        assert_eq!(plus(mult(quot(x, y), y), rem(x, y)), x);
    }

    #[test]
    #[should_panic]
    fn test_division_by_zero_panics() {
        let _ = quot(numeric(1), numeric(0));
    }

    #[test]
    fn test_mcd_names() {
        assert_eq!(Numeric::<EqualMcd, NegateMcd>::COMPARABLE_MCD, "Comparable(equal)");
        assert_eq!(Numeric::<OrderableMcd, MinusMcd>::GROUP_MCD, "Group(minus)");
    }
}
