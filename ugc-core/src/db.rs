use crate::repositories::*;

/// Everything the engine reads from and writes to the data store.
pub trait Db: ItemRepo + RatingRepository + CommentRepository + ScoreCacheRepo {}

impl<T> Db for T where T: ItemRepo + RatingRepository + CommentRepository + ScoreCacheRepo {}
