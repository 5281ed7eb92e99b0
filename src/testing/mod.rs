//! # Layer 4: Test Fixtures
//!
//! Types built to exercise the concepts, available with the `testing`
//! feature (on by default).
//!
//! - `numeric.rs`: `Numeric`, an `i32` modeling eight concepts with
//!   selectable minimal complete definitions.
//! - `seq.rs`: `Seq`, a Foldable that is nothing else.
//! - `laws.rs`: `numeric_law_suite!`, the algebraic laws as tests.

pub mod numeric;
pub mod seq;
pub mod laws;

pub use numeric::{Numeric, NumericTag, numeric};
pub use seq::{Seq, SeqTag, seq};
