/// Options for a [`Decoder`](super::Decoder).
///
/// The default computes no info hash and places no limit on nesting depth.
/// Decoding recurses once per container level, so input from an untrusted
/// source should be decoded with a depth limit.
///
/// # Examples
///
/// ```
/// use bdecode::bencode::{Decoder, DecoderConfig};
///
/// let config = DecoderConfig::default()
///     .with_info_hash(true)
///     .with_max_depth(64);
/// let mut decoder = Decoder::with_config(&b"d4:infod1:xi1eee"[..], config);
/// decoder.read_value().unwrap();
/// assert!(decoder.info_hash().is_some());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Compute the SHA-1 info hash of the top-level `info` value.
    pub compute_info_hash: bool,
    /// Maximum container nesting; `None` means unbounded.
    pub max_depth: Option<usize>,
}

impl DecoderConfig {
    pub fn with_info_hash(mut self, enabled: bool) -> Self {
        self.compute_info_hash = enabled;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}
