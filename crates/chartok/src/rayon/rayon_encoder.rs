//! # Parallel Encoder

use rayon::prelude::*;

use crate::encoders::TextEncoder;

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding and decoding of batches.
#[derive(Debug, Clone)]
pub struct ParallelRayonEncoder<E: TextEncoder> {
    /// Inner encoder.
    pub inner: E,
}

impl<E: TextEncoder> ParallelRayonEncoder<E> {
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The text encoder to wrap.
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

impl<E: TextEncoder> TextEncoder for ParallelRayonEncoder<E> {
    fn encode(
        &self,
        text: &str,
    ) -> String {
        self.inner.encode(text)
    }

    fn decode(
        &self,
        text: &str,
    ) -> String {
        self.inner.decode(text)
    }

    fn encode_batch(
        &self,
        batch: &[String],
    ) -> Vec<String> {
        batch.par_iter().map(|text| self.inner.encode(text)).collect()
    }

    fn decode_batch(
        &self,
        batch: &[String],
    ) -> Vec<String> {
        batch.par_iter().map(|text| self.inner.decode(text)).collect()
    }
}
