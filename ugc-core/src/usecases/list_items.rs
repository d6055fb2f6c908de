use super::{prelude::*, scores_of_item};
use crate::util::sort::{SortByCreation, SortByScore, SortOrder};

#[derive(Debug, Clone, Default)]
pub struct ItemQuery {
    pub order: SortOrder,
    /// Only items whose content contains the text (ignoring case)
    pub text: Option<String>,
    /// Only items of this author
    pub author: Option<Id>,
    pub pagination: Pagination,
}

/// Sorts the given items.
///
/// Sorting by score computes (and possibly refreshes) the scores of every
/// item exactly once. Items with equal keys keep their relative order.
pub fn sort_items<R, C>(
    repo: &R,
    clock: &C,
    params: &ScoringParams,
    mut items: Vec<Item>,
    order: SortOrder,
) -> Result<Vec<Item>>
where
    R: RatingRepository + CommentRepository + ScoreCacheRepo,
    C: Clock + ?Sized,
{
    if order == SortOrder::Time {
        items.sort_by_newest_first();
        return Ok(items);
    }
    let mut scored = Vec::with_capacity(items.len());
    for item in items {
        let scores = scores_of_item(repo, clock, params, &item)?;
        let score = order.score_of(&scores).unwrap_or_default();
        scored.push((score, item));
    }
    scored.sort_by_score_desc();
    Ok(scored.into_iter().map(|(_, item)| item).collect())
}

/// The ids of all items in the requested order.
pub fn list_items<R, C>(
    repo: &R,
    clock: &C,
    params: &ScoringParams,
    order: SortOrder,
) -> Result<Vec<Id>>
where
    R: Db,
    C: Clock + ?Sized,
{
    let items = repo.all_items()?;
    let sorted = sort_items(repo, clock, params, items, order)?;
    Ok(sorted.into_iter().map(|item| item.id).collect())
}

pub fn query_items<R, C>(
    repo: &R,
    clock: &C,
    params: &ScoringParams,
    query: &ItemQuery,
) -> Result<Vec<Item>>
where
    R: Db,
    C: Clock + ?Sized,
{
    log::debug!("Querying items: {query:?}");
    let ItemQuery {
        order,
        text,
        author,
        pagination,
    } = query;
    let mut items = match author {
        Some(author) => repo.items_of_author(author.as_str())?,
        None => repo.all_items()?,
    };
    if let Some(text) = text {
        let text = text.to_lowercase();
        items.retain(|item| item.content.to_lowercase().contains(&text));
    }
    let sorted = sort_items(repo, clock, params, items, *order)?;
    Ok(pagination.apply(sorted))
}

/// Full text search within the content of items.
///
/// A blank search text does not match anything.
pub fn search_items<R, C>(
    repo: &R,
    clock: &C,
    params: &ScoringParams,
    text: &str,
    order: SortOrder,
    pagination: Pagination,
) -> Result<Vec<Item>>
where
    R: Db,
    C: Clock + ?Sized,
{
    let text = text.trim();
    if text.is_empty() {
        return Ok(vec![]);
    }
    let query = ItemQuery {
        order,
        text: Some(text.to_owned()),
        author: None,
        pagination,
    };
    query_items(repo, clock, params, &query)
}

/// All items of an author, newest first.
pub fn items_of_author<R: ItemRepo>(repo: &R, author: &str) -> Result<Vec<Item>> {
    let mut items = repo.items_of_author(author)?;
    items.sort_by_newest_first();
    Ok(items)
}
