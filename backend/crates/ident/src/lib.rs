//! Identity Kernel - Unique identifiers for the object ecosystem
//!
//! This crate contains the identifier every entity is named by:
//! - [`uid::Uid`], the 128-bit UUID-v4 value type
//! - [`error::UidError`] for rejected serialized input
//! - [`proto::ProtoUid`], the envelope payload for transports
//! - [`identity::Identifiable`] for types named by a `Uid`
//!
//! **Design Principle**: a `Uid` is a plain value. It is compared, hashed
//! and serialized by its 16 bytes and nothing else.

pub mod error;
pub mod identity;
pub mod proto;
pub mod uid;

pub use error::{UidError, UidResult};
pub use identity::Identifiable;
pub use proto::ProtoUid;
pub use uid::{UID_LEN, Uid};

mod tests;
