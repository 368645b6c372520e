//! Clock conversions between ticks, raw timestamps and POSIX seconds.

use chrono::Utc;

use crate::{EPOCH_OFFSET_TICKS, FileTime, TICKS_PER_SECOND, TimePoint};

/// Source of the current raw timestamp.
///
/// Resolution must be 100ns or finer. Readings are not required to be
/// monotonic.
pub trait HostClock {
    fn now_raw(&self) -> FileTime;
}

impl<F: Fn() -> FileTime> HostClock for F {
    fn now_raw(&self) -> FileTime {
        self()
    }
}

/// Host wall clock, read through chrono.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl HostClock for SystemClock {
    fn now_raw(&self) -> FileTime {
        Clock::to_file_time(TimePoint::from_chrono(Utc::now()))
    }
}

/// Wall clock with 100ns ticks since 1601.
///
/// Stateless; every conversion is an associated function.
#[derive(Clone, Copy, Debug, Default)]
pub struct Clock;

impl Clock {
    /// The host may step the wall clock backwards.
    pub const IS_STEADY: bool = false;

    /// Current time from the host wall clock.
    pub fn now() -> TimePoint {
        Self::now_from(&SystemClock)
    }

    /// Current time from an explicit host clock.
    pub fn now_from<H: HostClock + ?Sized>(host: &H) -> TimePoint {
        let raw = host.now_raw();
        tracing::trace!(raw = raw.value, "read host clock");
        Self::from_file_time(raw)
    }

    /// Reinterpret the tick count as a raw timestamp. Bit-exact.
    #[inline]
    pub const fn to_raw(time: TimePoint) -> u64 {
        time.ticks() as u64
    }

    /// Reinterpret a raw timestamp as a tick count. Bit-exact.
    #[inline]
    pub const fn from_raw(raw: u64) -> TimePoint {
        TimePoint::from_ticks(raw as i64)
    }

    #[inline]
    pub const fn to_file_time(time: TimePoint) -> FileTime {
        FileTime::new(Self::to_raw(time))
    }

    #[inline]
    pub const fn from_file_time(time: FileTime) -> TimePoint {
        Self::from_raw(time.value)
    }

    /// Whole seconds since 1970, floored toward negative infinity.
    ///
    /// Half a second before the POSIX epoch is `-1`. Exact for every tick
    /// value; the offset is applied in 128-bit arithmetic.
    pub const fn to_posix_seconds(time: TimePoint) -> i64 {
        let since_unix = time.ticks() as i128 - EPOCH_OFFSET_TICKS as i128;
        clamp_i64(since_unix.div_euclid(TICKS_PER_SECOND as i128))
    }

    /// Instant at `seconds` since 1970.
    ///
    /// Exact whenever the tick value fits in `i64`, otherwise clamped to
    /// `TimePoint::MIN`/`TimePoint::MAX`.
    pub const fn from_posix_seconds(seconds: i64) -> TimePoint {
        let ticks = EPOCH_OFFSET_TICKS as i128 + seconds as i128 * TICKS_PER_SECOND as i128;
        TimePoint::from_ticks(clamp_i64(ticks))
    }
}

const fn clamp_i64(value: i128) -> i64 {
    if value < i64::MIN as i128 {
        i64::MIN
    } else if value > i64::MAX as i128 {
        i64::MAX
    } else {
        value as i64
    }
}
