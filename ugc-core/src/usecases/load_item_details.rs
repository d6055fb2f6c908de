use super::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetails {
    pub item: Item,
    pub avg_rating: AvgRatingValue,
    pub ratings: Vec<Rating>,
    /// Newest first
    pub comments: Vec<Comment>,
}

pub fn load_item_details<R>(repo: &R, item_id: &str) -> Result<ItemDetails>
where
    R: ItemRepo + RatingRepository + CommentRepository,
{
    let item = repo.get_item(item_id)?;
    let ratings = repo.load_ratings_of_item(item_id)?;
    let mut comments = repo.load_comments_of_item(item_id)?;
    comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(ItemDetails {
        avg_rating: item.avg_rating(&ratings),
        item,
        ratings,
        comments,
    })
}
