//! # Layer 2: Concepts
//!
//! The algebraic vocabulary. Each concept is a set of `*Impl` traits (one
//! per primitive operation), frontend functions that dispatch on the tags
//! of their operands, the operations derived from the primitives, and a
//! marker trait implemented by every type that models the concept.
//!
//! ## Module Structure
//!
//! ```text
//! concepts/
//! ├── comparable.rs      - equal, not_equal, EqualViaLess
//! ├── orderable.rs       - less, less_equal, greater, greater_equal, min, max
//! ├── enumerable.rs      - succ, pred
//! ├── logical.rs         - eval_if, not_, while_, if_, and_, or_
//! ├── monoid.rs          - plus, zero
//! ├── group.rs           - negate, minus, NegateViaMinus, MinusViaNegate
//! ├── ring.rs            - mult, one, power
//! ├── integral_domain.rs - quot, rem
//! ├── foldable.rs        - unpack, fold_left, derivations, length, for_each, sum, product
//! └── sequence.rs        - make, to, at, ToViaFoldable
//! ```
//!
//! ## Dependencies
//!
//! ```text
//! Monoid <- Group <- Ring <- IntegralDomain
//! Logical <- Comparable (via EqualViaLess) <- Orderable
//! Foldable <- Sequence
//! ```

pub mod comparable;
pub mod orderable;
pub mod enumerable;
pub mod logical;
pub mod monoid;
pub mod group;
pub mod ring;
pub mod integral_domain;
pub mod foldable;
pub mod sequence;

pub use comparable::{Comparable, EqualImpl, Equal, NotEqual, EqualViaLess, equal, not_equal};
pub use orderable::{
    Orderable, LessImpl, Less, MinOf, MaxOf,
    less, less_equal, greater, greater_equal, min, max,
};
pub use enumerable::{Enumerable, SuccImpl, PredImpl, Succ, Pred, succ, pred};
pub use logical::{
    Logical, EvalIfImpl, NotImpl, WhileImpl, EvalIf, Not, Or, And,
    eval_if, not_, while_, if_, and_, or_,
};
pub use monoid::{Monoid, PlusImpl, ZeroImpl, Plus, Zero, plus, zero};
pub use group::{Group, NegateImpl, MinusImpl, Negate, Minus, NegateViaMinus, MinusViaNegate, negate, minus};
pub use ring::{Ring, MultImpl, OneImpl, Mult, One, mult, one, power};
pub use integral_domain::{IntegralDomain, QuotImpl, RemImpl, Quot, Rem, quot, rem};
pub use foldable::{
    Foldable, UnpackImpl, FoldLeftImpl, Unpacked, FoldLeft,
    FoldLeftViaUnpack, UnpackViaFoldLeft, Visit, Visiting, Summation, Product,
    unpack, fold_left, length, is_empty, for_each, sum, product,
};
pub use sequence::{Sequence, MakeImpl, ToImpl, Make, To, ToViaFoldable, make, to, at};
