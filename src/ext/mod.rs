//! # Layer 3: Data Types
//!
//! Registration of concrete data types with the concepts.
//!
//! | Module | Tag | Models |
//! |--------|-----|--------|
//! | `hlist.rs` | `HListTag` | Foldable, Sequence |
//! | `tuple.rs` | `TupleTag` | Foldable, Sequence (arity 0 to 12) |
//! | `tlist/` | `TListTag` | Foldable, Sequence, Comparable |
//! | `integer.rs` | `IntegerTag<T>`, `BoolTag` | arithmetic concepts; Logical for `bool` |
//! | `const_bool.rs` | `ConstBoolTag` | Logical, Comparable, Orderable |
//! | `type_token.rs` | `TypeTag` | Comparable |
//! | `structs.rs` | `StructTag` | Foldable, via `#[derive(Foldable)]` |

pub mod hlist;
pub mod tuple;
pub mod tlist;
pub mod integer;
pub mod const_bool;
pub mod type_token;
pub mod structs;

pub use hlist::HListTag;
pub use tuple::TupleTag;
pub use tlist::{TListTag, TCons, TNil, TypeList, IntoTypeList, to_tlist};
pub use integer::{IntegerTag, BoolTag, Integer};
pub use const_bool::ConstBoolTag;
pub use type_token::TypeTag;
pub use structs::StructTag;
