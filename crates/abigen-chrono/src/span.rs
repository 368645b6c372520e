//! Signed tick durations.

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Ticks in one second.
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Nanoseconds in one tick.
pub const NANOS_PER_TICK: i64 = 100;

/// Signed duration in 100ns ticks.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimeSpan(i64);

impl TimeSpan {
    pub const ZERO: Self = Self(0);
    pub const MIN: Self = Self(i64::MIN);
    pub const MAX: Self = Self(i64::MAX);

    #[inline]
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    #[inline]
    pub const fn ticks(self) -> i64 {
        self.0
    }

    /// Whole seconds as ticks. Saturates at `MIN`/`MAX`.
    #[inline]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(TICKS_PER_SECOND))
    }

    /// Whole seconds, floored toward negative infinity.
    ///
    /// `-0.5s` is `-1`, not `0`.
    #[inline]
    pub const fn whole_secs(self) -> i64 {
        self.0.div_euclid(TICKS_PER_SECOND)
    }

    /// Ticks past `whole_secs`, always in `0..TICKS_PER_SECOND`.
    #[inline]
    pub const fn subsec_ticks(self) -> i64 {
        self.0.rem_euclid(TICKS_PER_SECOND)
    }

    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(ticks) => Some(Self(ticks)),
            None => None,
        }
    }

    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(ticks) => Some(Self(ticks)),
            None => None,
        }
    }

    pub const fn checked_neg(self) -> Option<Self> {
        match self.0.checked_neg() {
            Some(ticks) => Some(Self(ticks)),
            None => None,
        }
    }

    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

// Operators panic on overflow in every build profile; use the checked or
// saturating methods where the range is not known.

impl Add for TimeSpan {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the sum overflows `i64` ticks.
    fn add(self, rhs: Self) -> Self {
        self.checked_add(rhs).expect("overflow when adding time spans")
    }
}

impl Sub for TimeSpan {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the difference overflows `i64` ticks.
    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(rhs).expect("overflow when subtracting time spans")
    }
}

impl Neg for TimeSpan {
    type Output = Self;

    /// # Panics
    ///
    /// Panics when negating `TimeSpan::MIN`.
    fn neg(self) -> Self {
        self.checked_neg().expect("overflow when negating time span")
    }
}

impl From<i64> for TimeSpan {
    fn from(ticks: i64) -> Self {
        Self(ticks)
    }
}

impl From<TimeSpan> for i64 {
    fn from(span: TimeSpan) -> Self {
        span.0
    }
}
