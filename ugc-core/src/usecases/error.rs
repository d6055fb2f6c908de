use crate::{
    repositories,
    util::validate::{CommentInvalidation, ItemInvalidation, RatingInvalidation},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Empty content")]
    EmptyContent,
    #[error("Missing image")]
    EmptyImage,
    #[error("Empty comment")]
    EmptyComment,
    #[error("Rating value out of range")]
    RatingValue,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<ItemInvalidation> for Error {
    fn from(err: ItemInvalidation) -> Self {
        match err {
            ItemInvalidation::Content => Self::EmptyContent,
            ItemInvalidation::Image => Self::EmptyImage,
        }
    }
}

impl From<CommentInvalidation> for Error {
    fn from(_: CommentInvalidation) -> Self {
        Self::EmptyComment
    }
}

impl From<RatingInvalidation> for Error {
    fn from(_: RatingInvalidation) -> Self {
        Self::RatingValue
    }
}
