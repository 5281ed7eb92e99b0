//! User-facing derive implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Tagged)]` | on any type | Assign a tag, optionally with `#[tag(..)]` |
//! | `#[derive(Foldable)]` | on struct | Fields become the Foldable elements |

mod tagged;
mod foldable;

pub use tagged::expand_derive_tagged;
pub use foldable::expand_derive_foldable;
