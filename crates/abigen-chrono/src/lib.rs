//! 100-nanosecond tick clock for generated ABI code.
//!
//! Three representations of the same instant:
//! - `TimePoint`: signed ticks since 1601-01-01 00:00:00 UTC
//! - raw `u64` / `FileTime`: the external timestamp, same origin and resolution
//! - POSIX seconds since 1970-01-01, related by `EPOCH_OFFSET_TICKS`
//!
//! Raw conversions are bit-exact in both directions. POSIX conversions floor
//! toward negative infinity and saturate instead of wrapping.

mod clock;
mod file_time;
mod foundation;
mod point;
mod span;

#[cfg(test)]
mod span_tests;

pub use clock::{Clock, HostClock, SystemClock};
pub use file_time::{FileTime, FileTimeWords};
pub use foundation::{FOUNDATION_NAMESPACE, FoundationType};
pub use point::TimePoint;
pub use span::{NANOS_PER_TICK, TICKS_PER_SECOND, TimeSpan};

/// Ticks between the tick origin (1601-01-01) and the POSIX epoch (1970-01-01).
pub const EPOCH_OFFSET_TICKS: i64 = 0x019D_B1DE_D53E_8000;
