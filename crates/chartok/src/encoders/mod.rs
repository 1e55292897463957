//! # Text Encoders
//!
//! The [`TextEncoder`] contract, and the [`CharactersAsr`] character encoder.

mod char_tokenize;
mod characters_asr;
mod characters_asr_options;
mod text_encoder;

#[doc(inline)]
pub use char_tokenize::*;
#[doc(inline)]
pub use characters_asr::*;
#[doc(inline)]
pub use characters_asr_options::*;
#[doc(inline)]
pub use text_encoder::*;
