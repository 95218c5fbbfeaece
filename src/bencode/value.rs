use bytes::Bytes;
use indexmap::IndexMap;
use std::fmt;

/// A decoded dictionary.
///
/// Keys keep the order in which they appeared in the input. The decoder does
/// not check canonical ordering; a repeated key overwrites the earlier value.
pub type Dict = IndexMap<Bytes, Value>;

/// A bencoded integer, kept as its literal digit sequence.
///
/// Bencode integers have no declared width, so the decoder never narrows
/// them. Use [`Integer::to_i64`] or [`Integer::to_u64`] when a bounded value
/// is needed; both return `None` when the digits do not fit.
///
/// # Examples
///
/// ```
/// use bdecode::bencode::{decode, Value};
///
/// let value = decode(b"i123456789012345678901234567890e").unwrap();
/// let int = value.as_integer().unwrap();
/// assert_eq!(int.as_str(), "123456789012345678901234567890");
/// assert_eq!(int.to_i64(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Integer(String);

impl Integer {
    pub(crate) fn from_digits(digits: String) -> Self {
        Integer(digits)
    }

    /// The digits exactly as they appeared between `i` and `e`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    pub fn to_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for Integer {
    fn from(i: i64) -> Self {
        Integer(i.to_string())
    }
}

impl From<u64> for Integer {
    fn from(i: u64) -> Self {
        Integer(i.to_string())
    }
}

/// A decoded bencode value.
///
/// # Examples
///
/// ```
/// use bdecode::bencode::{decode, Value};
///
/// let value = decode(b"d4:spaml1:ai42eee").unwrap();
/// let spam = value.get(b"spam").and_then(Value::as_list).unwrap();
/// assert_eq!(spam[0].as_str(), Some("a"));
/// assert_eq!(spam[1].as_i64(), Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An integer of arbitrary size.
    Integer(Integer),
    /// A byte string (may or may not be valid UTF-8).
    Bytes(Bytes),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A dictionary with byte string keys, in input order.
    Dict(Dict),
}

impl Value {
    /// Creates a byte string value from a UTF-8 string.
    pub fn string(s: &str) -> Self {
        Value::Bytes(Bytes::copy_from_slice(s.as_bytes()))
    }

    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// Returns the value as an `i64`, if it is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_integer()?.to_i64()
    }

    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the value as a UTF-8 string, if it is a valid UTF-8 byte string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Consumes the value and returns the dictionary, if it is one.
    pub fn into_dict(self) -> Option<Dict> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up a key in this value if it is a dictionary.
    ///
    /// Returns `None` if the value is not a dictionary or if the key is not present.
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.as_dict()?.get(key)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i.into())
    }
}

impl From<Integer> for Value {
    fn from(i: Integer) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<Dict> for Value {
    fn from(d: Dict) -> Self {
        Value::Dict(d)
    }
}
