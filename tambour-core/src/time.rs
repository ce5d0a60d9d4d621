//! Millisecond timestamps
//!
//! All timestamps are readings of a free-running millisecond counter that
//! wraps at `u32::MAX` (~49.7 days). Differences are always taken with
//! wrapping arithmetic so a wrap between two readings is harmless.

/// Monotonic clock reading in milliseconds
pub type Millis = u32;

/// Milliseconds elapsed from `since` to `now`
#[inline]
pub fn elapsed_ms(now: Millis, since: Millis) -> u32 {
    now.wrapping_sub(since)
}
