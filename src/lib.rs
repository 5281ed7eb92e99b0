#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - std: default, enables std library
// - testing: default, exports the Numeric and Seq fixtures
// - comparable-equal-mcd / group-negate-mcd: default MCD selection

//! # tola-concepts
//!
//! Compile-time concept dispatch over heterogeneous data.
//!
//! **Algebraic concepts with minimal complete definitions, resolved by the
//! trait system.**
//!
//! ## Architecture
//!
//! Every type names a **tag** ([`Tagged`]). Every operation of a concept
//! (`equal`, `less`, `plus`, `unpack`, ...) is a trait implemented on the
//! tags of its operands, so many types share one implementation and
//! operands of different types can interact.
//!
//! ```text
//! equal(x, y)
//!   -> (TagOf<X>, TagOf<Y>): EqualImpl<X, Y>
//!   -> direct implementation, or a derivation such as EqualViaLess
//! ```
//!
//! A concept offering several **minimal complete definitions** lets a tag
//! implement one and delegate the rest to a derivation type. Resolution is
//! static: an unregistered combination is a compile error.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (True/False), Peano, HList, Type<T>, Eval, SameAs         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Dispatch                                                |
//! |  - Tagged, MCD markers, models!                                   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Concepts                                                |
//! |  - Comparable .. IntegralDomain, Foldable, Sequence               |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Data Types            |  Layer 4: Test Fixtures         |
//! |  - HList, tuples, TList,        |  - Numeric, Seq, law suites     |
//! |    integers, bool, True/False   |                                 |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_concepts::prelude::*;
//!
//! // Arithmetic dispatches on the tag of the operands
//! assert_eq!(plus(2i32, 3i32), 5);
//! assert_eq!(negate(4i64), -4);
//!
//! // Any Foldable converts to any Sequence
//! let tuple = to::<TupleTag, _>(hlist![1u8, 'b']);
//! assert_eq!(tuple, (1u8, 'b'));
//!
//! // Type tokens convert to a type list
//! let types = to::<TListTag, _>((type_c::<u8>(), type_c::<bool>()));
//! expect_type::<TList![u8, bool], _>(&types);
//!
//! // Concept checks
//! assert!(models!(i32: IntegralDomain));
//! assert!(!models!(u32: Group));
//! ```

// Allow `::tola_concepts` to work inside the crate itself
extern crate self as tola_concepts;

// Re-export paste for numeric_law_suite!
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Tag Dispatch
// =============================================================================
pub mod dispatch;

// =============================================================================
// Layer 2: Concepts
// =============================================================================
pub mod concepts;

// =============================================================================
// Layer 3: Data Types
// =============================================================================
pub mod ext;

// =============================================================================
// Layer 4: Test Fixtures
// =============================================================================
#[cfg(feature = "testing")]
pub mod testing;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use dispatch::{Tagged, TagOf};
pub use concepts::Foldable;
pub use primitives::{HList, Type, True, False, type_c};

// Re-export proc-macros (derive macros live in the macro namespace, next to
// the traits of the same name)
pub use macros::{Tagged, Foldable};

/// Common items for concept-based programming.
pub mod prelude {
    pub use crate::{Tagged, TagOf, Foldable, HList};
    pub use crate::primitives::{
        Bool, True, False, HNil, HCons, Type, type_c, type_of, Eval, Ready, eval, expect_type,
        D0, D1, D2, D3, D4, D5, D6, D7, D8, D9, D10, D11, D12,
    };
    pub use crate::dispatch::{Mcd, EqualMcd, OrderableMcd, NegateMcd, MinusMcd};
    pub use crate::concepts::{
        // Concepts
        Comparable, Orderable, Enumerable, Logical, Monoid, Group, Ring, IntegralDomain, Sequence,
        // Frontends
        equal, not_equal, less, less_equal, greater, greater_equal, min, max,
        succ, pred, eval_if, not_, while_, if_, and_, or_,
        plus, zero, negate, minus, mult, one, power, quot, rem,
        unpack, fold_left, length, is_empty, for_each, sum, product, make, to, at,
    };
    pub use crate::ext::{HListTag, TupleTag, TListTag, IntegerTag, BoolTag, ConstBoolTag, TypeTag};
    // Note: hlist!, TList!, models!, assert_type_eq! are #[macro_export] so they're at crate root
    pub use crate::{hlist, hlist_pat, TList, models, assert_type_eq};
}
