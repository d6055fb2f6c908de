use super::prelude::*;

/// The `top` and `hot` scores of an item.
///
/// Fresh cached scores are returned as they are. Otherwise both
/// scores are recomputed from the ratings and comments of the item
/// and written back together with the current time. A failure
/// while writing is only logged, the computed scores are returned
/// anyway and recomputed again on the next read.
pub fn item_scores<R, C>(
    repo: &R,
    clock: &C,
    params: &ScoringParams,
    item_id: &str,
) -> Result<Scores>
where
    R: ItemRepo + RatingRepository + CommentRepository + ScoreCacheRepo,
    C: Clock + ?Sized,
{
    let item = repo.get_item(item_id)?;
    scores_of_item(repo, clock, params, &item)
}

pub fn scores_of_item<R, C>(
    repo: &R,
    clock: &C,
    params: &ScoringParams,
    item: &Item,
) -> Result<Scores>
where
    R: RatingRepository + CommentRepository + ScoreCacheRepo,
    C: Clock + ?Sized,
{
    let now = clock.now();
    match repo.load_score_cache(item.id.as_str()) {
        Ok(Some(cache)) if cache.is_fresh(now, params.cache_ttl) => {
            return Ok(cache.value);
        }
        Ok(_) => {}
        Err(err) => {
            log::warn!("Failed to load cached scores of item {}: {}", item.id, err);
        }
    }
    let ratings = repo.load_ratings_of_item(item.id.as_str())?;
    let comments = repo.load_comments_of_item(item.id.as_str())?;
    let scores = Engagement::of_item(item, &ratings, &comments).scores(now, params.decay_base);
    log::debug!(
        "Recomputed scores of item {}: top = {}, hot = {}",
        item.id,
        scores.top,
        scores.hot
    );
    if let Err(err) = repo.store_score_cache(item.id.as_str(), &ScoreCache::new(scores, now)) {
        log::warn!("Failed to store recomputed scores of item {}: {}", item.id, err);
    }
    Ok(scores)
}

pub fn item_top<R, C>(repo: &R, clock: &C, params: &ScoringParams, item_id: &str) -> Result<f64>
where
    R: ItemRepo + RatingRepository + CommentRepository + ScoreCacheRepo,
    C: Clock + ?Sized,
{
    Ok(item_scores(repo, clock, params, item_id)?.top)
}

pub fn item_hot<R, C>(repo: &R, clock: &C, params: &ScoringParams, item_id: &str) -> Result<f64>
where
    R: ItemRepo + RatingRepository + CommentRepository + ScoreCacheRepo,
    C: Clock + ?Sized,
{
    Ok(item_scores(repo, clock, params, item_id)?.hot)
}
