//! Prelude module for the math_date crate.
//!
//! Re-exports the derive_more macros the result types are built with.

#[allow(unused_imports)]
pub use derive_more::{Deref, Display, Into};
