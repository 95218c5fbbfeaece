use super::error::BencodeError;
use bytes::Bytes;
use std::io::{self, Read};

/// A supplier of exact-length reads.
///
/// Reads either return exactly the requested number of bytes or fail; the
/// decoder never sees a partial read. Every [`Read`] implementation is a
/// `ByteSource`, so slices, cursors, files and buffered readers can be passed
/// to a [`Decoder`](super::Decoder) directly.
///
/// The decoder issues many single-byte reads while scanning tags and
/// numbers. Wrap unbuffered streams such as files in a [`std::io::BufReader`].
pub trait ByteSource {
    /// Reads exactly `n` bytes, failing with [`BencodeError::EndOfInput`] if
    /// fewer remain.
    fn read_exact_bytes(&mut self, n: usize) -> Result<Bytes, BencodeError>;

    /// Reads a single byte.
    fn read_byte(&mut self) -> Result<u8, BencodeError> {
        let bytes = self.read_exact_bytes(1)?;
        Ok(bytes[0])
    }
}

impl<R: Read> ByteSource for R {
    fn read_exact_bytes(&mut self, n: usize) -> Result<Bytes, BencodeError> {
        // `n` comes from an untrusted length prefix, so never preallocate it.
        let mut buf = Vec::new();
        self.by_ref().take(n as u64).read_to_end(&mut buf)?;
        if buf.len() < n {
            return Err(BencodeError::EndOfInput);
        }
        Ok(Bytes::from(buf))
    }

    fn read_byte(&mut self) -> Result<u8, BencodeError> {
        let mut byte = [0u8; 1];
        match self.read_exact(&mut byte) {
            Ok(()) => Ok(byte[0]),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(BencodeError::EndOfInput),
            Err(e) => Err(BencodeError::Io(e)),
        }
    }
}
