//! User-defined structs as Foldables.
//!
//! `#[derive(Foldable)]` tags a struct with `StructTag` and registers an
//! `unpack` moving its fields, in declaration order, into an HList.
//! `fold_left` is derived for every such struct.
//!
//! ```
//! use tola_concepts::prelude::*;
//!
//! #[derive(Foldable)]
//! struct Person {
//!     age: u32,
//!     name: &'static str,
//! }
//!
//! let person = Person { age: 42, name: "Ada" };
//! assert_eq!(unpack(person), hlist![42u32, "Ada"]);
//! ```
//!
//! Enums have no fixed list of fields:
//!
//! ```compile_fail
//! use tola_concepts::prelude::*;
//!
//! #[derive(Foldable)]
//! enum Shape {
//!     Circle(f64),
//! }
//! ```

use crate::concepts::{FoldLeftImpl, FoldLeftViaUnpack};

/// Tag of structs deriving `Foldable`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StructTag;

impl<X, Acc, F> FoldLeftImpl<X, Acc, F> for StructTag
where
    FoldLeftViaUnpack: FoldLeftImpl<X, Acc, F>,
{
    type Output = <FoldLeftViaUnpack as FoldLeftImpl<X, Acc, F>>::Output;

    #[inline]
    fn apply(x: X, acc: Acc, f: F) -> Self::Output {
        <FoldLeftViaUnpack as FoldLeftImpl<X, Acc, F>>::apply(x, acc, f)
    }
}
