//! UID Value Type
//!
//! Every entity in the object ecosystem is named by a [`Uid`]: a 128-bit
//! UUID-v4 value generated without coordination. A `Uid` compares and
//! hashes by value, and crosses process or storage boundaries as exactly
//! 16 bytes in the standard (big-endian) UUID byte layout.
//!
//! ## Usage
//! ```rust
//! use ident::uid::Uid;
//!
//! let id = Uid::new();
//! let bytes = id.to_bytes();
//! assert_eq!(bytes.len(), 16);
//!
//! let restored = Uid::from_bytes(&bytes).unwrap();
//! assert_eq!(restored, id);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::{UidError, UidResult};

/// Length of the wire payload in bytes
pub const UID_LEN: usize = 16;

const DISPLAY_PREFIX: &str = "<UID:";
const DISPLAY_SUFFIX: &str = ">";

/// Globally-unique 128-bit identifier
///
/// Created either fresh with [`Uid::new`] or from a previously serialized
/// value with [`Uid::from_bytes`]. Never mutated after construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uid(Uuid);

impl Uid {
    /// Create a new random UID (UUID v4)
    ///
    /// 122 bits come from the OS random source; the remaining 6 bits are the
    /// fixed version and variant bits.
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Reconstruct a UID from its 16-byte wire payload
    ///
    /// Any bit pattern is accepted; version and variant bits are not checked.
    ///
    /// ## Errors
    /// [`UidError::MalformedInput`] if `bytes` is not exactly 16 bytes long.
    ///
    /// ## Examples
    /// ```rust
    /// use ident::uid::Uid;
    ///
    /// assert!(Uid::from_bytes(&[0u8; 16]).is_ok());
    /// assert!(Uid::from_bytes(&[0u8; 3]).unwrap_err().is_malformed_input());
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> UidResult<Self> {
        let array: [u8; UID_LEN] = bytes.try_into().map_err(|_| {
            UidError::MalformedInput {
                expected: UID_LEN,
                actual: bytes.len(),
            }
            .logged()
        })?;
        Ok(Self::from_array(array))
    }

    /// Reconstruct a UID from a fixed-size array
    #[inline]
    pub const fn from_array(bytes: [u8; UID_LEN]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// The all-zero UID
    #[inline]
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Parse the canonical text form
    ///
    /// Accepts the hyphenated UUID string as well as the bracketed
    /// `<UID:...>` display form.
    pub fn parse_str(s: &str) -> UidResult<Self> {
        let inner = s
            .strip_prefix(DISPLAY_PREFIX)
            .and_then(|rest| rest.strip_suffix(DISPLAY_SUFFIX))
            .unwrap_or(s);

        Uuid::parse_str(inner)
            .map(Self)
            .map_err(|e| UidError::InvalidText(e.to_string()).logged())
    }

    /// The 16-byte wire payload, big-endian UUID layout
    #[inline]
    pub const fn to_bytes(&self) -> [u8; UID_LEN] {
        *self.0.as_bytes()
    }

    /// Borrow the 16-byte wire payload
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; UID_LEN] {
        self.0.as_bytes()
    }

    /// The 128-bit integer value of the UID
    ///
    /// Derived only from the bytes, so equal UIDs have equal hash codes.
    #[inline]
    pub const fn hash_code(&self) -> u128 {
        self.0.as_u128()
    }

    /// UUID version nibble (4 for freshly generated UIDs)
    #[inline]
    pub fn version_num(&self) -> usize {
        self.0.get_version_num()
    }

    /// Get the underlying UUID
    #[inline]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for Uid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", DISPLAY_PREFIX, self.0.hyphenated(), DISPLAY_SUFFIX)
    }
}

impl FromStr for Uid {
    type Err = UidError;

    fn from_str(s: &str) -> UidResult<Self> {
        Uid::parse_str(s)
    }
}

impl From<Uuid> for Uid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<Uid> for Uuid {
    fn from(uid: Uid) -> Self {
        uid.0
    }
}

impl From<[u8; UID_LEN]> for Uid {
    fn from(bytes: [u8; UID_LEN]) -> Self {
        Self::from_array(bytes)
    }
}

impl From<Uid> for [u8; UID_LEN] {
    fn from(uid: Uid) -> Self {
        uid.to_bytes()
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = UidError;

    fn try_from(bytes: &[u8]) -> UidResult<Self> {
        Uid::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for Uid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

// ============================================================================
// serde
// ============================================================================

impl Serialize for Uid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            let mut buf = Uuid::encode_buffer();
            serializer.serialize_str(self.0.hyphenated().encode_lower(&mut buf))
        } else {
            serializer.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for Uid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(UidVisitor)
        } else {
            deserializer.deserialize_bytes(UidVisitor)
        }
    }
}

struct UidVisitor;

impl<'de> Visitor<'de> for UidVisitor {
    type Value = Uid;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a UUID string or {} bytes", UID_LEN)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Uid, E> {
        Uid::parse_str(v).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Uid, E> {
        Uid::from_bytes(v).map_err(E::custom)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Uid, A::Error> {
        let mut bytes = [0u8; UID_LEN];
        let mut len = 0;
        while let Some(byte) = seq.next_element::<u8>()? {
            if len < UID_LEN {
                bytes[len] = byte;
            }
            len += 1;
        }
        if len != UID_LEN {
            let err = UidError::MalformedInput {
                expected: UID_LEN,
                actual: len,
            };
            return Err(de::Error::custom(err.logged()));
        }
        Ok(Uid::from_array(bytes))
    }
}
