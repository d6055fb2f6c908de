use super::prelude::*;
use crate::{repositories::Error as RepoError, util::validate::Validate};

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewRating {
    pub item  : Id,
    pub rater : Id,
    pub value : RatingValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingOutcome {
    Created(Rating),
    /// The rater had already rated the item.
    Updated(Rating),
}

impl RatingOutcome {
    pub fn rating(&self) -> &Rating {
        match self {
            Self::Created(rating) | Self::Updated(rating) => rating,
        }
    }
}

/// Rates an item, overwriting any previous rating of the same rater.
///
/// The cached scores of the item are not touched.
pub fn rate_item<R, C>(repo: &R, clock: &C, new_rating: NewRating) -> Result<RatingOutcome>
where
    R: ItemRepo + RatingRepository,
    C: Clock + ?Sized,
{
    let NewRating { item, rater, value } = new_rating;
    let item = repo.get_item(item.as_str())?;
    if let Some(rating) = repo.find_rating_of_rater(item.id.as_str(), rater.as_str())? {
        return overwrite_rating(repo, rating, value);
    }
    let rating = Rating {
        id: Id::new(),
        item_id: item.id,
        rater,
        value,
        created_at: clock.now(),
    };
    rating.validate()?;
    log::debug!("Creating rating {} of item {}", rating.id, rating.item_id);
    match repo.create_rating(rating.clone()) {
        Ok(()) => Ok(RatingOutcome::Created(rating)),
        Err(RepoError::AlreadyExists) => {
            // Another request of the same rater has been faster
            let existing = repo
                .find_rating_of_rater(rating.item_id.as_str(), rating.rater.as_str())?
                .ok_or(RepoError::NotFound)?;
            overwrite_rating(repo, existing, value)
        }
        Err(err) => Err(err.into()),
    }
}

fn overwrite_rating<R>(repo: &R, mut rating: Rating, value: RatingValue) -> Result<RatingOutcome>
where
    R: RatingRepository,
{
    rating.value = value;
    rating.validate()?;
    log::debug!("Updating rating {} of item {}", rating.id, rating.item_id);
    repo.update_rating(&rating)?;
    Ok(RatingOutcome::Updated(rating))
}
