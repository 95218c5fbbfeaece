use super::capture::CapturingReader;
use super::config::DecoderConfig;
use super::error::BencodeError;
use super::source::ByteSource;
use super::value::{Dict, Integer, Value};
use crate::info_hash::InfoHash;
use bytes::Bytes;
use std::io::Read;
use tracing::{debug, trace};

const INFO_KEY: &[u8] = b"info";

/// A streaming bencode decoder.
///
/// The decoder pulls bytes from its source one value at a time and never
/// buffers the whole input. When built with info-hash computation enabled, it
/// hashes the raw bytes of the value stored under the first `info` key of a
/// top-level dictionary as they stream past, and keeps the result available
/// through [`info_hash`](Self::info_hash).
///
/// A decoder is single-use after an error: the source has been partially
/// consumed and there is no way to resynchronize.
///
/// # Examples
///
/// ```
/// use bdecode::bencode::Decoder;
///
/// let data = b"d8:announce3:url4:infod6:lengthi12eee";
/// let mut decoder = Decoder::with_info_hash(&data[..]);
/// let torrent = decoder.read_value().unwrap();
///
/// assert_eq!(torrent.get(b"announce").and_then(|v| v.as_str()), Some("url"));
/// assert_eq!(decoder.info_hash().unwrap().to_hex().len(), 40);
/// ```
pub struct Decoder<S> {
    reader: CapturingReader<S>,
    max_depth: Option<usize>,
    info_hash: Option<InfoHash>,
}

impl<S: ByteSource> Decoder<S> {
    /// Creates a decoder that computes no info hash.
    pub fn new(source: S) -> Self {
        Self::with_config(source, DecoderConfig::default())
    }

    /// Creates a decoder that computes the info hash.
    pub fn with_info_hash(source: S) -> Self {
        Self::with_config(source, DecoderConfig::default().with_info_hash(true))
    }

    pub fn with_config(source: S, config: DecoderConfig) -> Self {
        Self {
            reader: CapturingReader::new(source, config.compute_info_hash),
            max_depth: config.max_depth,
            info_hash: None,
        }
    }

    /// Reads the next complete value from the source.
    ///
    /// # Errors
    ///
    /// Fails with [`BencodeError::UnexpectedEndMarker`] if the next byte is a
    /// bare `e`, and with the first error raised by any nested value
    /// otherwise. Nothing is returned for a value that was only partly read.
    pub fn read_value(&mut self) -> Result<Value, BencodeError> {
        self.read_item(0)?.ok_or(BencodeError::UnexpectedEndMarker)
    }

    /// The info hash, once the top-level `info` value has been read.
    ///
    /// `None` if computation was not requested or no `info` key has been seen.
    pub fn info_hash(&self) -> Option<&InfoHash> {
        self.info_hash.as_ref()
    }

    /// Number of bytes consumed from the source.
    pub fn position(&self) -> u64 {
        self.reader.position()
    }

    pub fn get_ref(&self) -> &S {
        self.reader.get_ref()
    }

    pub fn into_inner(self) -> S {
        self.reader.into_inner()
    }

    /// Reads one value, or `None` when the byte read is a container's `e`.
    fn read_item(&mut self, depth: usize) -> Result<Option<Value>, BencodeError> {
        let tag = self.reader.read_byte()?;
        let value = match tag {
            b'e' => return Ok(None),
            b'd' => {
                self.check_depth(depth)?;
                Value::Dict(self.read_dict(depth)?)
            }
            b'l' => {
                self.check_depth(depth)?;
                Value::List(self.read_list(depth)?)
            }
            b'i' => Value::Integer(self.read_integer()?),
            b'0'..=b'9' => Value::Bytes(self.read_bytes(tag)?),
            other => return Err(BencodeError::UnknownTag(other)),
        };
        Ok(Some(value))
    }

    fn check_depth(&self, depth: usize) -> Result<(), BencodeError> {
        match self.max_depth {
            Some(limit) if depth >= limit => Err(BencodeError::DepthExceeded(limit)),
            _ => Ok(()),
        }
    }

    fn read_integer(&mut self) -> Result<Integer, BencodeError> {
        let mut digits = String::new();
        loop {
            match self.reader.read_byte()? {
                b'e' => return Ok(Integer::from_digits(digits)),
                b @ (b'0'..=b'9' | b'-') => digits.push(char::from(b)),
                other => return Err(BencodeError::MalformedNumber(other)),
            }
        }
    }

    /// `first` is the leading digit of the length prefix, already consumed
    /// as the tag.
    fn read_bytes(&mut self, first: u8) -> Result<Bytes, BencodeError> {
        let mut len = String::from(char::from(first));
        loop {
            match self.reader.read_byte()? {
                b':' => break,
                b @ b'0'..=b'9' => len.push(char::from(b)),
                other => return Err(BencodeError::MalformedLength(other)),
            }
        }
        let len: usize = len
            .parse()
            .map_err(|_| BencodeError::LengthOverflow(len.clone()))?;
        self.reader.read_exact_bytes(len)
    }

    fn read_list(&mut self, depth: usize) -> Result<Vec<Value>, BencodeError> {
        let mut list = Vec::new();
        while let Some(item) = self.read_item(depth + 1)? {
            list.push(item);
        }
        trace!(depth, len = list.len(), "decoded list");
        Ok(list)
    }

    fn read_dict(&mut self, depth: usize) -> Result<Dict, BencodeError> {
        let mut dict = Dict::new();
        loop {
            let key = match self.read_item(depth + 1)? {
                None => break,
                Some(Value::Bytes(key)) => key,
                Some(_) => return Err(BencodeError::InvalidKeyType),
            };

            let capture = depth == 0
                && key[..] == *INFO_KEY
                && self.reader.can_capture()
                && self.reader.start_capture();
            if capture {
                debug!(offset = self.reader.position(), "capturing info dictionary");
            }

            let value = self
                .read_item(depth + 1)?
                .ok_or(BencodeError::UnexpectedEndMarker)?;

            if capture {
                self.info_hash = self.reader.finish_capture();
                if let Some(hash) = &self.info_hash {
                    debug!(info_hash = %hash, offset = self.reader.position(), "info hash computed");
                }
            }

            dict.insert(key, value);
        }
        trace!(depth, len = dict.len(), "decoded dictionary");
        Ok(dict)
    }
}

/// Decodes a single value from `data`, rejecting any bytes after it.
///
/// # Examples
///
/// ```
/// use bdecode::bencode::decode;
///
/// let value = decode(b"l4:spami42ee").unwrap();
/// assert_eq!(value.as_list().map(|l| l.len()), Some(2));
///
/// assert!(decode(b"i42eextra").is_err());
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    let mut decoder = Decoder::new(data);
    let value = decoder.read_value()?;
    ensure_consumed(decoder.get_ref())?;
    Ok(value)
}

/// Decodes a torrent file's contents and computes its info hash.
///
/// The hash is `None` when the top-level value has no `info` key.
pub fn decode_torrent(data: &[u8]) -> Result<(Value, Option<InfoHash>), BencodeError> {
    let mut decoder = Decoder::with_info_hash(data);
    let value = decoder.read_value()?;
    ensure_consumed(decoder.get_ref())?;
    Ok((value, decoder.info_hash().copied()))
}

/// Decodes one value from a reader and computes its info hash.
///
/// Unlike [`decode_torrent`], bytes after the value are left unread.
pub fn decode_reader<R: Read>(reader: R) -> Result<(Value, Option<InfoHash>), BencodeError> {
    let mut decoder = Decoder::with_info_hash(reader);
    let value = decoder.read_value()?;
    Ok((value, decoder.info_hash().copied()))
}

fn ensure_consumed(rest: &[u8]) -> Result<(), BencodeError> {
    if !rest.is_empty() {
        return Err(BencodeError::TrailingData);
    }
    Ok(())
}
