//! Shared test infrastructure for fx-sequencer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use fx_sequencer::event::codes;
use fx_sequencer::{TimeDuration, TimeInstant, TimeSource, Track};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(TestInstant)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, millis: u64) {
        self.current_time.set(TestInstant(millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Test Tracks
// ============================================================================

/// The short opening used throughout the tests:
/// dark/x1/pos at 1 ms, fast + lead at 9633 ms, follow at 12033 ms.
pub const OPENING: &[(u32, u32)] = &[
    (1, codes::PALETTE_DARK),
    (1, codes::SPEED_1),
    (1, codes::SPEED_POS),
    (9633, codes::TRANSITION_FAST),
    (9633, codes::PALETTE_LEAD),
    (12033, codes::PALETTE_FOLLOW),
];

pub fn opening_track() -> Track<8> {
    Track::from_codes(OPENING).unwrap()
}
