use crate::entities::*;
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemInvalidation {
    #[error("Empty content")]
    Content,
    #[error("Missing image")]
    Image,
}

impl Validate for Item {
    type Error = ItemInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if is_blank(&self.content) {
            return Err(Self::Error::Content);
        }
        if is_blank(&self.image) {
            return Err(Self::Error::Image);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Empty comment")]
pub struct CommentInvalidation;

impl Validate for Comment {
    type Error = CommentInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if is_blank(&self.text) {
            return Err(CommentInvalidation);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Rating value out of range")]
pub struct RatingInvalidation;

impl Validate for Rating {
    type Error = RatingInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !self.value.is_valid() {
            return Err(RatingInvalidation);
        }
        Ok(())
    }
}
