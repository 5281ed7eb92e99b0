//! Procedural macros for tola-concepts
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Tagged)]` | any type | Assign a tag, `#[tag(..)]` or `Self` |
//! | `#[derive(Foldable)]` | struct | Fields become the Foldable elements |
//! | `peano!(n)` | - | Peano aliases `D0..Dn` (crate internal) |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Tagged)]
//! #[tag(LengthTag)]
//! struct Meters(f64);
//!
//! #[derive(Foldable)]
//! struct Person { name: &'static str, age: u8 }
//!
//! let elements = unpack(Person { name: "Ada", age: 36 });
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod inner;
mod common;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate Peano number type aliases D0..Dn.
///
/// # Usage
/// ```ignore
/// peano!(12);  // Generates D0 = Z, D1 = S<D0>, ..., D12 = S<D11>
/// ```
#[proc_macro]
pub fn peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_peano(input).into()
}

// =============================================================================
// User Derives (user/)
// =============================================================================

/// Implement `Tagged` for a type.
///
/// Without attributes the type is its own tag. `#[tag(T)]` names a shared
/// tag instead, so several types dispatch to the same implementations.
///
/// # Usage
/// ```ignore
/// #[derive(Tagged)]
/// #[tag(LengthTag)]
/// struct Meters(f64);
/// ```
#[proc_macro_derive(Tagged, attributes(tag))]
pub fn derive_tagged(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::expand_derive_tagged(input).into()
}

/// Make a struct Foldable over its fields.
///
/// The struct is tagged with `StructTag`, and `unpack` yields the fields in
/// declaration order. Enums and unions are rejected.
///
/// # Usage
/// ```ignore
/// #[derive(Foldable)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(sum::<IntegerTag<i32>, _>(Point { x: 1, y: 2 }), 3);
/// ```
#[proc_macro_derive(Foldable)]
pub fn derive_foldable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::expand_derive_foldable(input).into()
}
