//! The BitTorrent v1 info hash.
//!
//! An info hash is the SHA-1 digest of the raw encoded bytes of a torrent's
//! `info` dictionary. [`Decoder`](crate::bencode::Decoder) computes it while
//! parsing; this module holds the resulting value.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of a SHA-1 digest in bytes.
pub const INFO_HASH_LEN: usize = 20;

#[derive(Debug, Error, PartialEq)]
pub enum InfoHashError {
    #[error("invalid info hash length: expected 20 bytes, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// A finalized info hash.
///
/// Displays as 40 uppercase hexadecimal characters.
///
/// # Examples
///
/// ```
/// use bdecode::InfoHash;
///
/// let hash: InfoHash = "c12fe1c06bba254a9dc9f519b335aa7c1367a88a".parse().unwrap();
/// assert_eq!(hash.to_hex(), "C12FE1C06BBA254A9DC9F519B335AA7C1367A88A");
/// assert_eq!(hash.as_bytes().len(), 20);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InfoHash([u8; INFO_HASH_LEN]);

impl InfoHash {
    pub fn new(bytes: [u8; INFO_HASH_LEN]) -> Self {
        InfoHash(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, InfoHashError> {
        let arr: [u8; INFO_HASH_LEN] = bytes
            .try_into()
            .map_err(|_| InfoHashError::InvalidLength(bytes.len()))?;
        Ok(InfoHash(arr))
    }

    /// Parses a hex string in either case.
    pub fn from_hex(s: &str) -> Result<Self, InfoHashError> {
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; INFO_HASH_LEN] {
        &self.0
    }

    /// Uppercase hex, the form BitTorrent tooling conventionally prints.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl fmt::Debug for InfoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InfoHash({})", self.to_hex())
    }
}

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for InfoHash {
    type Err = InfoHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for InfoHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests;
