use super::error::BencodeError;
use super::source::ByteSource;
use crate::info_hash::{InfoHash, INFO_HASH_LEN};
use bytes::Bytes;
use sha1::{Digest, Sha1};

/// A byte-level tee over a [`ByteSource`].
///
/// Every read is forwarded to the wrapped source. While capture is on, the
/// same bytes are also fed into a SHA-1 accumulator, in the order they were
/// read. The reader knows nothing about bencode structure; the decoder
/// decides when capture starts and stops.
///
/// The accumulator exists only when digest computation was requested, and
/// it is consumed by [`finish_capture`](Self::finish_capture), so at most one
/// digest is ever produced.
pub struct CapturingReader<S> {
    source: S,
    hasher: Option<Sha1>,
    capturing: bool,
    position: u64,
}

impl<S: ByteSource> CapturingReader<S> {
    pub fn new(source: S, compute_digest: bool) -> Self {
        Self {
            source,
            hasher: compute_digest.then(Sha1::default),
            capturing: false,
            position: 0,
        }
    }

    pub fn read_exact_bytes(&mut self, n: usize) -> Result<Bytes, BencodeError> {
        let bytes = self.source.read_exact_bytes(n)?;
        self.position += bytes.len() as u64;
        if self.capturing {
            if let Some(hasher) = self.hasher.as_mut() {
                hasher.update(&bytes);
            }
        }
        Ok(bytes)
    }

    pub fn read_byte(&mut self) -> Result<u8, BencodeError> {
        let byte = self.source.read_byte()?;
        self.position += 1;
        if self.capturing {
            if let Some(hasher) = self.hasher.as_mut() {
                hasher.update([byte]);
            }
        }
        Ok(byte)
    }

    /// Returns true if a digest can still be captured.
    pub fn can_capture(&self) -> bool {
        self.hasher.is_some() && !self.capturing
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    /// Turns capture on. Returns false, leaving the flag off, when no
    /// accumulator is available.
    pub fn start_capture(&mut self) -> bool {
        if self.hasher.is_none() {
            return false;
        }
        self.capturing = true;
        true
    }

    /// Turns capture off and finalizes the digest.
    ///
    /// Returns `None` if capture was not active.
    pub fn finish_capture(&mut self) -> Option<InfoHash> {
        if !self.capturing {
            return None;
        }
        self.capturing = false;
        let digest = self.hasher.take()?.finalize();
        let mut arr = [0u8; INFO_HASH_LEN];
        arr.copy_from_slice(&digest);
        Some(InfoHash::new(arr))
    }

    /// Total number of bytes read from the source so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn get_ref(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}
