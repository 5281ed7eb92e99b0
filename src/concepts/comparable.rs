//! Comparable: equality between objects, possibly of different tags.
//!
//! Minimal complete definitions:
//! - `equal`, registered directly on the tag pair;
//! - Orderable's `less`, through [`EqualViaLess`].
//!
//! ```
//! use tola_concepts::prelude::*;
//!
//! assert!(equal(3u8, 3u8));
//! assert!(not_equal(1i64, 2i64));
//! ```
//!
//! Comparing objects whose tags have no registered `equal` is rejected:
//!
//! ```compile_fail
//! use tola_concepts::prelude::*;
//!
//! let _ = equal(1u8, 1u16);
//! ```

use crate::dispatch::{Tagged, TagOf};
use crate::primitives::Ready;
use super::logical::{EvalIf, EvalIfImpl, Not, NotImpl, not_, or_};
use super::orderable::{Less, LessImpl, less};

/// `equal` for objects `X` and `Y`, registered on `(TagOf<X>, TagOf<Y>)`.
#[diagnostic::on_unimplemented(
    message = "`equal` is not defined between `{X}` and `{Y}`",
    label = "no `EqualImpl<{X}, {Y}>` for the tag pair `{Self}`",
    note = "implement `EqualImpl` on the tag pair, or delegate to `EqualViaLess` if the tags are Orderable"
)]
pub trait EqualImpl<X, Y> {
    type Output;

    fn apply(x: X, y: Y) -> Self::Output;
}

/// Result of `equal(x, y)`.
pub type Equal<X, Y> = <(TagOf<X>, TagOf<Y>) as EqualImpl<X, Y>>::Output;

/// Result of `not_equal(x, y)`.
pub type NotEqual<X, Y> = Not<Equal<X, Y>>;

/// Whether `x` and `y` are equal.
#[inline]
pub fn equal<X, Y>(x: X, y: Y) -> Equal<X, Y>
where
    X: Tagged,
    Y: Tagged,
    (TagOf<X>, TagOf<Y>): EqualImpl<X, Y>,
{
    <(TagOf<X>, TagOf<Y>) as EqualImpl<X, Y>>::apply(x, y)
}

/// Negation of [`equal`].
#[inline]
pub fn not_equal<X, Y>(x: X, y: Y) -> NotEqual<X, Y>
where
    X: Tagged,
    Y: Tagged,
    (TagOf<X>, TagOf<Y>): EqualImpl<X, Y>,
    Equal<X, Y>: Tagged,
    TagOf<Equal<X, Y>>: NotImpl<Equal<X, Y>>,
{
    not_(equal(x, y))
}

// =============================================================================
// Derivation from Orderable
// =============================================================================

/// `equal` derived from `less`:
/// `equal(x, y) = not_(or_(less(x, y), less(y, x)))`.
///
/// A tag pair adopts it by delegating its `EqualImpl` here.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualViaLess;

type EitherLess<X, Y> = EvalIf<Less<X, Y>, Ready<Less<X, Y>>, Ready<Less<Y, X>>>;

impl<X, Y> EqualImpl<X, Y> for EqualViaLess
where
    X: Tagged + Clone,
    Y: Tagged + Clone,
    (TagOf<X>, TagOf<Y>): LessImpl<X, Y>,
    (TagOf<Y>, TagOf<X>): LessImpl<Y, X>,
    Less<X, Y>: Tagged + Clone,
    TagOf<Less<X, Y>>: EvalIfImpl<Less<X, Y>, Ready<Less<X, Y>>, Ready<Less<Y, X>>>,
    EitherLess<X, Y>: Tagged,
    TagOf<EitherLess<X, Y>>: NotImpl<EitherLess<X, Y>>,
{
    type Output = Not<EitherLess<X, Y>>;

    fn apply(x: X, y: Y) -> Self::Output {
        let forward = less(x.clone(), y.clone());
        let backward = less(y, x);
        not_(or_(forward, backward))
    }
}

// =============================================================================
// Concept
// =============================================================================

/// Types whose objects can be compared with each other.
pub trait Comparable: Tagged {}

impl<T> Comparable for T
where
    T: Tagged,
    (TagOf<T>, TagOf<T>): EqualImpl<T, T>,
{
}
