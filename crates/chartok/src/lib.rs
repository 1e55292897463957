//! # `chartok` Character Tokenizer
//!
//! A character-level tokenizer for speech-recognition transcripts.
//!
//! Text is split into space-separated characters; literal spaces become a
//! configurable space symbol, and configured non-linguistic symbols
//! (such as `<NOISE>`) are kept whole.
//!
//! See:
//! * [`encoders`] for the [`TextEncoder`] contract and [`CharactersAsr`].
//! * [`registry`] to build encoders by name.
//! * [`resources`] for symbol-list path resolution and loading.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``rayon``
//!
//! #### feature: ``rayon``
//!
//! This enables some parallelism wrappers using the ``rayon`` crate.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Example
//!
//! ```rust
//! use chartok::{CharactersAsrOptions, TextEncoder};
//!
//! let encoder = CharactersAsrOptions::default()
//!     .with_non_lang_syms_list(["<NOISE>"])
//!     .build()?;
//!
//! let encoded = encoder.encode("ab <NOISE>c");
//! assert_eq!(encoded, "a b <space> <NOISE> c <space>");
//! assert_eq!(encoder.decode(&encoded), "ab <NOISE>c");
//! # Ok::<(), chartok::ChartokError>(())
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod encoders;
pub mod errors;
pub mod regex;
pub mod registry;
pub mod resources;

#[doc(inline)]
pub use encoders::{CharactersAsr, CharactersAsrOptions, NonLangSyms, TextEncoder};
#[doc(inline)]
pub use errors::{CTResult, ChartokError};
#[doc(inline)]
pub use registry::{build_encoder, list_encoders};
