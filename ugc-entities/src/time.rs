use std::{fmt, ops, time::Duration as StdDuration};

pub use time::Duration;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// A UTC point in time with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds.saturating_mul(1_000))
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl TryFrom<Timestamp> for OffsetDateTime {
    type Error = time::error::ComponentRange;

    fn try_from(from: Timestamp) -> Result<Self, Self::Error> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(from.0) * 1_000_000)
    }
}

// Signed, so activity "in the future" of a clock yields a negative duration.
impl ops::Sub for Timestamp {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        Duration::milliseconds(self.0.saturating_sub(rhs.0))
    }
}

impl ops::Add<StdDuration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: StdDuration) -> Self {
        Self(self.0.saturating_add(millis_of(rhs)))
    }
}

impl ops::Sub<StdDuration> for Timestamp {
    type Output = Self;

    fn sub(self, rhs: StdDuration) -> Self {
        Self(self.0.saturating_sub(millis_of(rhs)))
    }
}

fn millis_of(duration: StdDuration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match OffsetDateTime::try_from(*self) {
            Ok(dt) => f.write_str(&dt.format(&Rfc3339).map_err(|_| fmt::Error)?),
            Err(_) => write!(f, "{}ms", self.0),
        }
    }
}
