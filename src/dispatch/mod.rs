//! # Layer 1: Tag Dispatch
//!
//! How an operation finds its implementation.
//!
//! ## Module Structure
//!
//! ```text
//! dispatch/
//! ├── tag.rs    - Tagged: one tag per type
//! ├── mcd.rs    - Minimal complete definition markers and defaults
//! └── models.rs - models! compile-time concept checks
//! ```
//!
//! ## Resolution
//!
//! Each operation of a concept is one `*Impl` trait. The implementation of
//! a binary operation is registered on the pair of operand tags, a unary
//! operation on the operand's tag, a nullary one on the tag itself:
//!
//! ```text
//! equal(x, y)  ->  <(TagOf<X>, TagOf<Y>) as EqualImpl<X, Y>>::apply(x, y)
//! succ(x)      ->  <TagOf<X> as SuccImpl<X>>::apply(x)
//! zero::<T>()  ->  <T as ZeroImpl>::apply()
//! ```
//!
//! Resolution happens entirely in the trait solver. A tag combination with
//! no registered implementation and no derivation is a compile error whose
//! message names the operation and the tags.

pub mod tag;
pub mod mcd;
pub mod models;

pub use tag::{Tagged, TagOf, tag_name, tag_name_of};
pub use mcd::{
    Mcd, ComparableMcd, GroupMcd,
    EqualMcd, OrderableMcd, NegateMcd, MinusMcd,
    DefaultComparableMcd, DefaultGroupMcd, mcd_name,
};
