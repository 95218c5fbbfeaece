//! Streaming bencode decoding ([BEP-3]).
//!
//! Bencode is the serialization format used for `.torrent` files and tracker
//! responses. This module reads it from any byte source, one value at a time,
//! and can compute the torrent's info hash while doing so.
//!
//! # Data Types
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! Integers are kept as digit strings ([`Integer`]) so values wider than 64
//! bits survive decoding. Dictionaries keep their keys in input order.
//!
//! # Examples
//!
//! ## Decoding a buffer
//!
//! ```
//! use bdecode::bencode::decode;
//!
//! let value = decode(b"d4:spaml1:ai42eee").unwrap();
//! let spam = value.get(b"spam").unwrap().as_list().unwrap();
//! assert_eq!(spam[0].as_str(), Some("a"));
//! assert_eq!(spam[1].as_integer().unwrap().as_str(), "42");
//! ```
//!
//! ## Decoding a torrent file with its info hash
//!
//! ```no_run
//! use bdecode::bencode::Decoder;
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = BufReader::new(File::open("example.torrent")?);
//! let mut decoder = Decoder::with_info_hash(file);
//! let torrent = decoder.read_value()?;
//!
//! println!("Name: {:?}", torrent.get(b"info").and_then(|i| i.get(b"name")));
//! if let Some(hash) = decoder.info_hash() {
//!     println!("Info hash: {}", hash);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Any malformed input aborts the decode:
//!
//! - [`BencodeError::EndOfInput`] - Input ended mid-value
//! - [`BencodeError::MalformedNumber`] - Unexpected byte inside `i...e`
//! - [`BencodeError::MalformedLength`] - Unexpected byte in a string length
//! - [`BencodeError::UnknownTag`] - A value starts with an unrecognized byte
//! - [`BencodeError::InvalidKeyType`] - A dictionary key is not a byte string
//! - [`BencodeError::DepthExceeded`] - Nesting limit exceeded, when one is set
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod capture;
mod config;
mod decode;
mod error;
mod source;
mod value;

pub use capture::CapturingReader;
pub use config::DecoderConfig;
pub use decode::{decode, decode_reader, decode_torrent, Decoder};
pub use error::BencodeError;
pub use source::ByteSource;
pub use value::{Dict, Integer, Value};
