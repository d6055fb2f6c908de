use crate::time::*;
use std::time::Duration as StdDuration;

/// A derived value together with the point in time it has been computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheEntry<T> {
    pub value: T,
    pub computed_at: Timestamp,
}

impl<T> CacheEntry<T> {
    pub const fn new(value: T, computed_at: Timestamp) -> Self {
        Self { value, computed_at }
    }

    /// Fresh while less than `ttl` has elapsed since the value was computed.
    pub fn is_fresh(&self, now: Timestamp, ttl: StdDuration) -> bool {
        let elapsed = now - self.computed_at;
        match Duration::try_from(ttl) {
            Ok(ttl) => elapsed < ttl,
            // Longer than anything a timestamp can express
            Err(_) => true,
        }
    }
}

/// Both derived scores of an item.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Scores {
    pub top: f64,
    pub hot: f64,
}

/// `top` and `hot` share a single timestamp, they are
/// always computed and written together.
pub type ScoreCache = CacheEntry<Scores>;

impl ScoreCache {
    pub fn initial(now: Timestamp) -> Self {
        Self::new(Scores::default(), now)
    }
}
