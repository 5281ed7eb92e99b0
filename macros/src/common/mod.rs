// Common utilities shared between the derives
//
// This module contains:
// - attrs: `#[tag]` parsing and the runtime crate path

mod attrs;

pub use attrs::*;
