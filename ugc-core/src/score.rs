//! Derivation of the `top` and `hot` scores from the
//! ratings and comments of an item.
//!
//! Everything in here is a pure function of its arguments.
//! Caching and persistence live in the corresponding use cases.

use crate::entities::*;
use std::time::Duration as StdDuration;

pub const DEFAULT_CACHE_TTL: StdDuration = StdDuration::from_secs(60 * 60);

pub const DEFAULT_DECAY_BASE: f64 = 0.9;

const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringParams {
    /// How long computed scores are served from the cache.
    pub cache_ttl: StdDuration,
    /// Remaining fraction of the `hot` score after one hour without activity.
    pub decay_base: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            decay_base: DEFAULT_DECAY_BASE,
        }
    }
}

pub trait Rated {
    fn avg_rating(&self, _: &[Rating]) -> AvgRatingValue;
}

impl Rated for Item {
    fn avg_rating(&self, ratings: &[Rating]) -> AvgRatingValue {
        debug_assert_eq!(
            ratings.len(),
            ratings.iter().filter(|r| r.item_id == self.id).count()
        );
        ratings
            .iter()
            .fold(AvgRatingValueBuilder::default(), |mut acc, r| {
                acc += r.value;
                acc
            })
            .build()
    }
}

/// Summary of the ratings and comments of a single item.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Engagement {
    pub rating_count: usize,
    pub comment_count: usize,
    pub avg_rating: AvgRatingValue,
    pub latest_rating_at: Option<Timestamp>,
    pub latest_comment_at: Option<Timestamp>,
}

impl Engagement {
    pub fn of_item(item: &Item, ratings: &[Rating], comments: &[Comment]) -> Self {
        debug_assert!(comments.iter().all(|c| c.item_id == item.id));
        Self {
            rating_count: ratings.len(),
            comment_count: comments.len(),
            avg_rating: item.avg_rating(ratings),
            latest_rating_at: ratings.iter().map(|r| r.created_at).max(),
            latest_comment_at: comments.iter().map(|c| c.created_at).max(),
        }
    }

    pub fn total_count(&self) -> usize {
        self.rating_count + self.comment_count
    }

    /// The share of ratings among all engagement events, 0 if there are none.
    pub fn rating_share(&self) -> f64 {
        let total = self.total_count();
        if total > 0 {
            self.rating_count as f64 / total as f64
        } else {
            0.0
        }
    }

    pub fn top_score(&self) -> f64 {
        let p = self.rating_share();
        let q = 1.0 - p;
        f64::from(self.avg_rating) * p + self.comment_count as f64 * q
    }

    /// The earlier of the most recent rating and the most recent comment.
    ///
    /// A channel without any activity counts as active right `now`.
    pub fn recent_activity_at(&self, now: Timestamp) -> Timestamp {
        let rating_at = self.latest_rating_at.unwrap_or(now);
        let comment_at = self.latest_comment_at.unwrap_or(now);
        rating_at.min(comment_at)
    }

    pub fn hot_score(&self, top: f64, now: Timestamp, decay_base: f64) -> f64 {
        let hours_passed = hours_between(self.recent_activity_at(now), now);
        top * decay_factor(decay_base, hours_passed)
    }

    /// Computes both scores in a single pass.
    pub fn scores(&self, now: Timestamp, decay_base: f64) -> Scores {
        let top = self.top_score();
        let hot = self.hot_score(top, now, decay_base);
        Scores { top, hot }
    }
}

/// Fractional hours from `from` until `until`, negative if `until` is earlier.
pub fn hours_between(from: Timestamp, until: Timestamp) -> f64 {
    (until - from).as_seconds_f64() / SECONDS_PER_HOUR
}

pub fn decay_factor(decay_base: f64, hours_passed: f64) -> f64 {
    decay_base.powf(hours_passed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ugc_entities::builders::*;

    const EPSILON: f64 = 1e-9;

    fn t0() -> Timestamp {
        Timestamp::from_seconds(1_700_000_000)
    }

    fn hours(h: u64) -> StdDuration {
        StdDuration::from_secs(h * 3600)
    }

    fn new_item(id: &str) -> Item {
        Item::build().id(id).created_at(t0()).finish()
    }

    fn new_rating(item_id: &str, rater: &str, value: u8, created_at: Timestamp) -> Rating {
        Rating::build()
            .item_id(item_id)
            .rater(rater)
            .value(value)
            .created_at(created_at)
            .finish()
    }

    fn new_comment(item_id: &str, created_at: Timestamp) -> Comment {
        Comment::build()
            .item_id(item_id)
            .text("nice")
            .created_at(created_at)
            .finish()
    }

    #[test]
    fn test_average_rating() {
        let a = new_item("a");
        let b = new_item("b");
        let ratings = [
            new_rating("a", "x", 4, t0()),
            new_rating("a", "y", 2, t0()),
            new_rating("a", "z", 5, t0()),
        ];
        assert_eq!(a.avg_rating(&ratings), (11.0 / 3.0).into());
        assert_eq!(b.avg_rating(&[]), 0.0.into());
    }

    #[test]
    fn no_engagement_at_all() {
        let item = new_item("a");
        let engagement = Engagement::of_item(&item, &[], &[]);
        assert_eq!(engagement.rating_share(), 0.0);
        assert_eq!(engagement.top_score(), 0.0);
        assert_eq!(engagement.scores(t0(), DEFAULT_DECAY_BASE), Scores::default());
    }

    #[test]
    fn only_comments() {
        let item = new_item("a");
        let comments: Vec<_> = (0..7).map(|_| new_comment("a", t0())).collect();
        let engagement = Engagement::of_item(&item, &[], &comments);
        assert_eq!(engagement.top_score(), 7.0);
    }

    #[test]
    fn only_ratings() {
        let item = new_item("a");
        let ratings = [new_rating("a", "x", 5, t0()), new_rating("a", "y", 2, t0())];
        let engagement = Engagement::of_item(&item, &ratings, &[]);
        assert_eq!(engagement.top_score(), f64::from(engagement.avg_rating));
        assert_eq!(engagement.top_score(), 3.5);
    }

    #[test]
    fn ratings_and_comments_within_the_last_hour() {
        let now = t0() + hours(1);
        let item = new_item("a");
        let ratings = [new_rating("a", "x", 4, t0()), new_rating("a", "y", 2, t0())];
        let comments = [
            new_comment("a", t0()),
            new_comment("a", t0()),
            new_comment("a", t0()),
        ];
        let engagement = Engagement::of_item(&item, &ratings, &comments);
        assert_eq!(engagement.avg_rating, 3.0.into());
        assert!((engagement.rating_share() - 0.4).abs() < EPSILON);

        let Scores { top, hot } = engagement.scores(now, DEFAULT_DECAY_BASE);
        assert!((top - 3.0).abs() < EPSILON);
        assert!((hot - 2.7).abs() < EPSILON);
    }

    #[test]
    fn recent_activity_is_the_earlier_of_both_channels() {
        let item = new_item("a");
        let ratings = [new_rating("a", "x", 4, t0() + hours(5))];
        let comments = [new_comment("a", t0() + hours(2)), new_comment("a", t0())];
        let now = t0() + hours(6);
        let engagement = Engagement::of_item(&item, &ratings, &comments);
        assert_eq!(engagement.recent_activity_at(now), t0() + hours(2));

        let only_ratings = Engagement::of_item(&item, &ratings, &[]);
        assert_eq!(only_ratings.recent_activity_at(now), t0() + hours(5));
        let nothing = Engagement::of_item(&item, &[], &[]);
        assert_eq!(nothing.recent_activity_at(now), now);
    }

    #[test]
    fn hot_equals_top_without_elapsed_time() {
        let item = new_item("a");
        let comments = [new_comment("a", t0())];
        let engagement = Engagement::of_item(&item, &[], &comments);
        assert_eq!(engagement.hot_score(1.0, t0(), DEFAULT_DECAY_BASE), 1.0);
    }

    #[test]
    fn hot_strictly_decreases_over_time() {
        let top = 4.2;
        let mut last = decay_factor(DEFAULT_DECAY_BASE, 0.0) * top;
        assert_eq!(last, top);
        for step in 1..50 {
            let hours_passed = f64::from(step) * 0.5;
            let hot = decay_factor(DEFAULT_DECAY_BASE, hours_passed) * top;
            assert!(hot < last);
            last = hot;
        }
    }

    #[test]
    fn fractional_hours() {
        assert_eq!(hours_between(t0(), t0() + StdDuration::from_secs(90 * 60)), 1.5);
        assert_eq!(hours_between(t0() + hours(2), t0()), -2.0);
        assert!((decay_factor(0.9, 2.0) - 0.81).abs() < EPSILON);
    }
}
