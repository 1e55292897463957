//! # Text Encoder Trait

/// A trait for string-to-string subword encoders.
///
/// Implementations are pure functions of their configuration.
pub trait TextEncoder: Send + Sync {
    /// Encode text.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// The encoded form.
    fn encode(
        &self,
        text: &str,
    ) -> String;

    /// Decode previously encoded text.
    ///
    /// ## Arguments
    /// * `text` - The encoded text.
    ///
    /// ## Returns
    /// The decoded form.
    fn decode(
        &self,
        text: &str,
    ) -> String;

    /// Encode a batch of text.
    ///
    /// ## Arguments
    /// * `batch` - A slice of strings to encode.
    ///
    /// ## Returns
    /// The encoded strings, in batch order.
    fn encode_batch(
        &self,
        batch: &[String],
    ) -> Vec<String> {
        batch.iter().map(|s| self.encode(s)).collect()
    }

    /// Decode a batch of text.
    ///
    /// ## Arguments
    /// * `batch` - A slice of encoded strings.
    ///
    /// ## Returns
    /// The decoded strings, in batch order.
    fn decode_batch(
        &self,
        batch: &[String],
    ) -> Vec<String> {
        batch.iter().map(|s| self.decode(s)).collect()
    }
}
