//! Identifiable capability

use crate::uid::Uid;

/// Anything named by a [`Uid`]
///
/// Entities elsewhere in the ecosystem implement this for their own types;
/// stores key on the returned value.
pub trait Identifiable {
    fn id(&self) -> Uid;
}

impl Identifiable for Uid {
    #[inline]
    fn id(&self) -> Uid {
        *self
    }
}
