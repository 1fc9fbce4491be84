//! Time-driven show player with state management.
//!
//! Provides [`ShowPlayer`] which runs a [`ShowSequencer`] against a
//! [`TimeSource`], handling start delay, pause and restart, and telling the
//! caller how long it may sleep before the next cue.

use crate::band::Band;
use crate::command::PlayerAction;
use crate::controller::ShowController;
use crate::sequencer::{PollOutcome, ShowSequencer};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::track::NextMatch;

/// The current state of a show player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayerState {
    /// Show loaded and waiting to start.
    Ready,
    /// Show clock running.
    Running,
    /// Show clock frozen. The palette holds.
    Paused,
    /// The last cue has fired.
    Complete,
}

/// Timing information returned by service operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceTiming<D> {
    /// No cue fires before this delay has passed.
    ///
    /// Palette animation still needs frames in the meantime; this only bounds
    /// how late the next `service()` may come.
    Delay(D),

    /// The last cue has fired. No further servicing is needed until the show
    /// is restarted.
    Complete,
}

/// Errors that can occur during player operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayerError {
    /// Operation called from an invalid state.
    InvalidState {
        /// Human-readable description of expected state(s), e.g. "Running"
        expected: &'static str,
        /// The actual current state
        actual: PlayerState,
    },
}

impl core::fmt::Display for PlayerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlayerError::InvalidState { expected, actual } => {
                write!(
                    f,
                    "invalid state: expected {}, but player is in {:?}",
                    expected, actual
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlayerError {}

/// Plays a track in real time.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `N` - Maximum number of entries in the track
pub struct ShowPlayer<'t, I: TimeInstant, T: TimeSource<I>, const N: usize> {
    sequencer: ShowSequencer<N>,
    time_source: &'t T,
    state: PlayerState,
    start_time: Option<I>,
    pause_start_time: Option<I>,
    start_delay: I::Duration,
}

impl<'t, I: TimeInstant, T: TimeSource<I>, const N: usize> ShowPlayer<'t, I, T, N> {
    /// Creates a player in the `Ready` state.
    pub fn new(sequencer: ShowSequencer<N>, time_source: &'t T) -> Self {
        Self {
            sequencer,
            time_source,
            state: PlayerState::Ready,
            start_time: None,
            pause_start_time: None,
            start_delay: I::Duration::ZERO,
        }
    }

    /// Sets the time between `start()` and show time zero.
    pub fn with_start_delay(mut self, delay: I::Duration) -> Self {
        self.start_delay = delay;
        self
    }

    /// Handles a player action by dispatching to the appropriate method.
    pub fn handle_action(
        &mut self,
        action: PlayerAction,
    ) -> Result<ServiceTiming<I::Duration>, PlayerError> {
        match action {
            PlayerAction::Start => self.start(),
            PlayerAction::Stop => {
                self.stop()?;
                Ok(ServiceTiming::Complete)
            }
            PlayerAction::Pause => {
                self.pause()?;
                Ok(ServiceTiming::Complete)
            }
            PlayerAction::Resume => self.resume(),
            PlayerAction::Restart => self.restart(),
        }
    }

    /// Starts the show clock.
    ///
    /// Must be called from `Ready` state.
    pub fn start(&mut self) -> Result<ServiceTiming<I::Duration>, PlayerError> {
        if self.state != PlayerState::Ready {
            return Err(PlayerError::InvalidState {
                expected: "Ready",
                actual: self.state,
            });
        }

        self.start_time = Some(self.time_source.now());
        self.set_state(PlayerState::Running);
        self.service()
    }

    /// Rewinds the show and starts it again.
    ///
    /// Can be called from `Running`, `Paused`, or `Complete` states.
    pub fn restart(&mut self) -> Result<ServiceTiming<I::Duration>, PlayerError> {
        match self.state {
            PlayerState::Running | PlayerState::Paused | PlayerState::Complete => {
                self.sequencer.reset();
                self.start_time = Some(self.time_source.now());
                self.pause_start_time = None;
                self.set_state(PlayerState::Running);
                self.service()
            }
            _ => Err(PlayerError::InvalidState {
                expected: "Running, Paused, or Complete",
                actual: self.state,
            }),
        }
    }

    /// Polls the sequencer with the current show time.
    ///
    /// Must be called from `Running` state.
    ///
    /// # Returns
    /// - `Ok(ServiceTiming::Delay(duration))` - Time until the next cue (or
    ///   until show time zero while the start delay runs)
    /// - `Ok(ServiceTiming::Complete)` - Last cue fired, transitions to `Complete`
    /// - `Err` - Invalid state
    pub fn service(&mut self) -> Result<ServiceTiming<I::Duration>, PlayerError> {
        if self.state != PlayerState::Running {
            return Err(PlayerError::InvalidState {
                expected: "Running",
                actual: self.state,
            });
        }

        let since_start = self.since_start();
        if since_start.as_millis() < self.start_delay.as_millis() {
            return Ok(ServiceTiming::Delay(
                self.start_delay.saturating_sub(since_start),
            ));
        }

        let elapsed_ms = Self::show_millis(since_start.saturating_sub(self.start_delay));
        let outcome = self.sequencer.poll(elapsed_ms);
        self.log_cue(&outcome);

        match outcome.next {
            NextMatch::End => {
                self.set_state(PlayerState::Complete);
                Ok(ServiceTiming::Complete)
            }
            NextMatch::At(next) => {
                let until = self
                    .sequencer
                    .track()
                    .timecode(next)
                    .map_or(0, |timecode| timecode.saturating_sub(elapsed_ms));
                Ok(ServiceTiming::Delay(I::Duration::from_millis(until as u64)))
            }
        }
    }

    fn set_state(&mut self, state: PlayerState) {
        #[cfg(feature = "defmt")]
        if state != self.state {
            defmt::trace!("show player {} -> {}", self.state, state);
        }
        self.state = state;
    }

    #[cfg(feature = "defmt")]
    fn log_cue(&self, outcome: &PollOutcome) {
        if outcome.is_new_cue() {
            defmt::debug!("{}", self.sequencer.trace(outcome));
        }
    }

    #[cfg(not(feature = "defmt"))]
    fn log_cue(&self, _outcome: &PollOutcome) {}

    /// Stops the show and rewinds it.
    ///
    /// Transitions to `Ready`. Can be called from `Running`, `Paused`, or
    /// `Complete`.
    pub fn stop(&mut self) -> Result<(), PlayerError> {
        match self.state {
            PlayerState::Running | PlayerState::Paused | PlayerState::Complete => {
                self.sequencer.reset();
                self.start_time = None;
                self.pause_start_time = None;
                self.set_state(PlayerState::Ready);
                Ok(())
            }
            _ => Err(PlayerError::InvalidState {
                expected: "Running, Paused, or Complete",
                actual: self.state,
            }),
        }
    }

    /// Freezes the show clock.
    ///
    /// Must be called from `Running` state.
    pub fn pause(&mut self) -> Result<(), PlayerError> {
        if self.state != PlayerState::Running {
            return Err(PlayerError::InvalidState {
                expected: "Running",
                actual: self.state,
            });
        }

        self.pause_start_time = Some(self.time_source.now());
        self.set_state(PlayerState::Paused);
        Ok(())
    }

    /// Resumes a paused show, shifting the start time by the pause duration.
    ///
    /// Must be called from `Paused` state.
    pub fn resume(&mut self) -> Result<ServiceTiming<I::Duration>, PlayerError> {
        if self.state != PlayerState::Paused {
            return Err(PlayerError::InvalidState {
                expected: "Paused",
                actual: self.state,
            });
        }

        let now = self.time_source.now();
        if let (Some(start), Some(paused_at)) = (self.start_time, self.pause_start_time) {
            let pause_duration = now.duration_since(paused_at);
            // On timer overflow keep the old start; the show jumps ahead instead of stalling.
            self.start_time = Some(start.checked_add(pause_duration).unwrap_or(start));
        }

        self.pause_start_time = None;
        self.set_state(PlayerState::Running);
        self.service()
    }

    /// Show time in milliseconds, or `None` before start or during the start
    /// delay.
    pub fn elapsed_millis(&self) -> Option<u32> {
        self.start_time?;
        let since_start = self.since_start();
        if since_start.as_millis() < self.start_delay.as_millis() {
            return None;
        }
        Some(Self::show_millis(since_start.saturating_sub(self.start_delay)))
    }

    /// The palette to paint now.
    ///
    /// Blends any pending timed transition across the current cue window.
    pub fn palette_frame(&self) -> Band {
        match self.elapsed_millis() {
            Some(elapsed_ms) => self.sequencer.palette_at(elapsed_ms),
            None => *self.controller().current_palette(),
        }
    }

    /// Time since `start()`, frozen while paused.
    fn since_start(&self) -> I::Duration {
        let Some(start) = self.start_time else {
            return I::Duration::ZERO;
        };
        let now = self.pause_start_time.unwrap_or_else(|| self.time_source.now());
        now.duration_since(start)
    }

    fn show_millis(duration: I::Duration) -> u32 {
        u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
    }

    /// Returns the current state of the player.
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Read-only view of the show state for the renderer.
    pub fn controller(&self) -> &ShowController {
        self.sequencer.controller()
    }

    pub fn sequencer(&self) -> &ShowSequencer<N> {
        &self.sequencer
    }

    pub fn is_running(&self) -> bool {
        self.state == PlayerState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlayerState::Paused
    }
}
