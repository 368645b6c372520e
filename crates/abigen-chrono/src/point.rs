//! Instants on the tick clock.

use std::ops::{Add, Sub};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Clock, EPOCH_OFFSET_TICKS, NANOS_PER_TICK, TimeSpan};

/// Instant measured in ticks since 1601-01-01 00:00:00 UTC.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimePoint(TimeSpan);

impl TimePoint {
    /// 1601-01-01 00:00:00 UTC.
    pub const ORIGIN: Self = Self(TimeSpan::ZERO);

    /// 1970-01-01 00:00:00 UTC.
    pub const UNIX_EPOCH: Self = Self(TimeSpan::from_ticks(EPOCH_OFFSET_TICKS));

    pub const MIN: Self = Self(TimeSpan::MIN);
    pub const MAX: Self = Self(TimeSpan::MAX);

    #[inline]
    pub const fn new(since_origin: TimeSpan) -> Self {
        Self(since_origin)
    }

    #[inline]
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(TimeSpan::from_ticks(ticks))
    }

    #[inline]
    pub const fn since_origin(self) -> TimeSpan {
        self.0
    }

    #[inline]
    pub const fn ticks(self) -> i64 {
        self.0.ticks()
    }

    pub const fn checked_add(self, span: TimeSpan) -> Option<Self> {
        match self.0.checked_add(span) {
            Some(since_origin) => Some(Self(since_origin)),
            None => None,
        }
    }

    pub const fn checked_sub(self, span: TimeSpan) -> Option<Self> {
        match self.0.checked_sub(span) {
            Some(since_origin) => Some(Self(since_origin)),
            None => None,
        }
    }

    pub const fn saturating_add(self, span: TimeSpan) -> Self {
        Self(self.0.saturating_add(span))
    }

    pub const fn saturating_sub(self, span: TimeSpan) -> Self {
        Self(self.0.saturating_sub(span))
    }

    /// Convert from a chrono UTC timestamp, keeping 100ns resolution.
    ///
    /// Sub-tick nanoseconds are dropped. Saturates outside the tick range.
    pub fn from_chrono(time: DateTime<Utc>) -> Self {
        let subsec = i64::from(time.timestamp_subsec_nanos()) / NANOS_PER_TICK;
        Clock::from_posix_seconds(time.timestamp()).saturating_add(TimeSpan::from_ticks(subsec))
    }

    /// Convert to a chrono UTC timestamp.
    ///
    /// Returns `None` when the instant is outside chrono's supported range.
    pub fn to_chrono(self) -> Option<DateTime<Utc>> {
        let since_unix = TimeSpan::from_ticks(self.ticks().checked_sub(EPOCH_OFFSET_TICKS)?);
        let nanos = since_unix.subsec_ticks() * NANOS_PER_TICK;
        DateTime::from_timestamp(since_unix.whole_secs(), u32::try_from(nanos).ok()?)
    }
}

impl Add<TimeSpan> for TimePoint {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the result falls outside the tick range.
    fn add(self, rhs: TimeSpan) -> Self {
        self.checked_add(rhs).expect("overflow when adding time span to time point")
    }
}

impl Sub<TimeSpan> for TimePoint {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the result falls outside the tick range.
    fn sub(self, rhs: TimeSpan) -> Self {
        self.checked_sub(rhs).expect("overflow when subtracting time span from time point")
    }
}

impl Sub for TimePoint {
    type Output = TimeSpan;

    /// # Panics
    ///
    /// Panics if the distance does not fit in a `TimeSpan`.
    fn sub(self, rhs: Self) -> TimeSpan {
        self.0 - rhs.0
    }
}

impl From<DateTime<Utc>> for TimePoint {
    fn from(time: DateTime<Utc>) -> Self {
        Self::from_chrono(time)
    }
}
