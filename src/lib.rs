//! bdecode - a streaming bencode decoder
//!
//! Decodes the bencoding used by BitTorrent metadata into an in-memory value
//! tree, optionally computing the SHA-1 info hash of the top-level `info`
//! dictionary in the same pass.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 bencode decoding and info-hash capture
//! - [`info_hash`] - The info hash value type

pub mod bencode;
pub mod info_hash;

pub use bencode::{
    decode, decode_reader, decode_torrent, BencodeError, ByteSource, Decoder, DecoderConfig,
    Integer, Value,
};
pub use info_hash::{InfoHash, InfoHashError};
