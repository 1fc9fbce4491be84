//! Command-based control for show players.

/// Actions for controlling a [`ShowPlayer`](crate::player::ShowPlayer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayerAction {
    /// Start the show clock.
    Start,
    /// Stop and rewind the show.
    Stop,
    /// Freeze the show clock.
    Pause,
    /// Resume a paused show.
    Resume,
    /// Rewind and start again.
    Restart,
}
