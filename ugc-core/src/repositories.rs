// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait ItemRepo {
    fn create_item(&self, item: Item) -> Result<()>;

    fn get_item(&self, id: &str) -> Result<Item>;
    fn all_items(&self) -> Result<Vec<Item>>;
    fn items_of_author(&self, author: &str) -> Result<Vec<Item>>;
    fn count_items(&self) -> Result<usize>;
}

pub trait RatingRepository {
    fn create_rating(&self, rating: Rating) -> Result<()>;
    fn update_rating(&self, rating: &Rating) -> Result<()>;

    fn load_ratings_of_item(&self, item_id: &str) -> Result<Vec<Rating>>;
    fn find_rating_of_rater(&self, item_id: &str, rater: &str) -> Result<Option<Rating>>;
}

pub trait CommentRepository {
    fn create_comment(&self, comment: Comment) -> Result<()>;

    fn load_comments_of_item(&self, item_id: &str) -> Result<Vec<Comment>>;
}

pub trait ScoreCacheRepo {
    // Ok(None) if the scores of the item have never been stored
    fn load_score_cache(&self, item_id: &str) -> Result<Option<ScoreCache>>;

    // Replaces both scores and the timestamp at once
    fn store_score_cache(&self, item_id: &str, cache: &ScoreCache) -> Result<()>;
}

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl Pagination {
    /// The n-th page (starting at 1) of the given size.
    pub fn page(number: u64, size: u64) -> Self {
        Self {
            offset: Some(number.max(1).saturating_sub(1).saturating_mul(size)),
            limit: Some(size),
        }
    }

    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let offset = self
            .offset
            .map(|o| usize::try_from(o).unwrap_or(usize::MAX))
            .unwrap_or(0);
        let limit = self
            .limit
            .map(|l| usize::try_from(l).unwrap_or(usize::MAX))
            .unwrap_or(usize::MAX);
        items.into_iter().skip(offset).take(limit).collect()
    }
}
