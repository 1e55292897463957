//! # Rayon Parallelism
//!
//! Batch-level parallel wrappers using the ``rayon`` crate.

mod rayon_encoder;

#[doc(inline)]
pub use rayon_encoder::*;
