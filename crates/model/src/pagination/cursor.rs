use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the pagination cursor: the `_id` of the last source document
/// already consumed, or the start-of-collection sentinel.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// No document consumed yet; the next page starts at the beginning.
    Start,

    /// Resume strictly after this `_id` (exclusive bound).
    After(ObjectId),
}

impl Cursor {
    /// Advances past `last_id`. The new cursor is strictly greater than the
    /// one it replaces because pages are fetched in ascending `_id` order.
    pub fn advance(self, last_id: ObjectId) -> Cursor {
        Cursor::After(last_id)
    }

    pub fn is_start(&self) -> bool {
        matches!(self, Cursor::Start)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cursor::Start => f.write_str("start"),
            Cursor::After(id) => write!(f, "after({id})"),
        }
    }
}
