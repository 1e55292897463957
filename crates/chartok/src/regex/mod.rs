//! # Regex Utilities

mod exact_match_union;

#[doc(inline)]
pub use exact_match_union::*;
