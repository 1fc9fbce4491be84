//! Clock abstraction for the show player.
//!
//! The player reads elapsed time through these traits so it runs on any
//! timer: an embassy `Instant`, a hardware tick counter, or a mock in tests.
//! [`Millis`] and [`MillisInstant`] cover the common case of a free-running
//! 32-bit millisecond counter.

/// Something that can tell the current time.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// A span of time with millisecond resolution.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds. Implementations with a narrower
    /// range saturate.
    fn from_millis(millis: u64) -> Self;

    /// Subtraction clamped at `ZERO`.
    fn saturating_sub(self, other: Self) -> Self;
}

/// A point in time.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Time elapsed since `earlier`.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Adds `duration` to this instant, returns `None` on overflow.
    fn checked_add(self, duration: Self::Duration) -> Option<Self>;
}

/// Milliseconds as a 32-bit count; about 49 days of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl TimeDuration for Millis {
    const ZERO: Self = Millis(0);

    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        Millis(u32::try_from(millis).unwrap_or(u32::MAX))
    }

    fn saturating_sub(self, other: Self) -> Self {
        Millis(self.0.saturating_sub(other.0))
    }
}

/// Reading of a free-running millisecond counter.
///
/// The counter wraps; durations are computed with wrapping arithmetic so a
/// show that spans a wrap still measures correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisInstant(pub u32);

impl TimeInstant for MillisInstant {
    type Duration = Millis;

    fn duration_since(&self, earlier: Self) -> Millis {
        Millis(self.0.wrapping_sub(earlier.0))
    }

    fn checked_add(self, duration: Millis) -> Option<Self> {
        Some(MillisInstant(self.0.wrapping_add(duration.0)))
    }
}
