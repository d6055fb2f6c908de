use crate::{id::*, time::*};

/// A piece of user generated content: an image with some text.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id         : Id,
    pub author     : Id,
    pub content    : String,
    /// Reference to the externally stored image.
    pub image      : String,
    pub created_at : Timestamp,
}
