//! # Layer 0: Primitives
//!
//! Basic building blocks with no knowledge of concepts or tags:
//! - `bool.rs`: Type-level boolean logic (True/False).
//! - `peano.rs`: Peano numbers for lengths and indices.
//! - `hlist.rs`: Heterogeneous lists, folds and folders.
//! - `type_token.rs`: `Type<T>` tokens.
//! - `lazy.rs`: Deferred computations for lazy branches.
//! - `type_eq.rs`: Structural type equality.

pub mod bool;
pub mod peano;
pub mod hlist;
pub mod type_token;
pub mod lazy;
pub mod type_eq;

// Re-export key types at this level
pub use bool::{Bool, True, False, BoolEq, SelectBool, BoolOf};
pub use peano::{Peano, Z, S, D0, D1, D2, D3, D4, D5, D6, D7, D8, D9, D10, D11, D12};
pub use hlist::{HList, HNil, HCons, Append, Get, Folder, HFoldLeft, PushBack};
pub use type_token::{Type, Untype, type_c, type_of};
pub use lazy::{Eval, Ready, eval};
pub use type_eq::{SameAs, expect_type};
