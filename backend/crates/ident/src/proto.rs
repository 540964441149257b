//! Envelope payload for message transports
//!
//! [`ProtoUid`] is the body of the single-field message that carries a
//! [`Uid`] between processes. Framing belongs to the transport.

use serde::{Deserialize, Serialize};

use crate::error::{UidError, UidResult};
use crate::uid::Uid;

/// Wire message carrying one UID as raw bytes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtoUid {
    pub value: Vec<u8>,
}

impl Uid {
    /// Wrap the 16-byte payload in its envelope message
    #[inline]
    pub fn to_proto(&self) -> ProtoUid {
        ProtoUid {
            value: self.to_bytes().to_vec(),
        }
    }

    /// Reconstruct a UID from its envelope message
    ///
    /// ## Errors
    /// [`UidError::MalformedInput`] if the payload is not 16 bytes.
    #[inline]
    pub fn from_proto(proto: &ProtoUid) -> UidResult<Self> {
        Uid::from_bytes(&proto.value)
    }
}

impl From<Uid> for ProtoUid {
    fn from(uid: Uid) -> Self {
        uid.to_proto()
    }
}

impl TryFrom<ProtoUid> for Uid {
    type Error = UidError;

    fn try_from(proto: ProtoUid) -> UidResult<Self> {
        Uid::from_proto(&proto)
    }
}
