use crate::entities::*;
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error;

/// The order of item listings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Newest first
    #[default]
    Time,
    /// Highest `top` score first
    Top,
    /// Highest `hot` score first
    Hot,
}

impl SortOrder {
    /// Missing or unrecognized parameters fall back to [`SortOrder::Time`].
    pub fn from_param(param: Option<&str>) -> Self {
        param.and_then(|p| p.parse().ok()).unwrap_or_default()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Top => "top",
            Self::Hot => "hot",
        }
    }

    /// The score to sort by, if any.
    pub fn score_of(self, scores: &Scores) -> Option<f64> {
        match self {
            Self::Time => None,
            Self::Top => Some(scores.top),
            Self::Hot => Some(scores.hot),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown sort order '{0}'")]
pub struct SortOrderParseError(String);

impl FromStr for SortOrder {
    type Err = SortOrderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "time" => Ok(Self::Time),
            "top" => Ok(Self::Top),
            "hot" => Ok(Self::Hot),
            _ => Err(SortOrderParseError(s.to_owned())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait SortByCreation {
    fn sort_by_newest_first(&mut self);
}

impl SortByCreation for [Item] {
    fn sort_by_newest_first(&mut self) {
        self.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }
}

pub trait SortByScore {
    /// Stable: equal scores keep their relative order.
    fn sort_by_score_desc(&mut self);
}

impl<T> SortByScore for [(f64, T)] {
    fn sort_by_score_desc(&mut self) {
        self.sort_by(|(a, _), (b, _)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    }
}
