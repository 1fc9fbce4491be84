//! Polling driver that feeds track cues into the show controller.
//!
//! [`ShowSequencer`] owns a [`Track`] and the [`ShowController`] it mutates.
//! Each [`ShowSequencer::poll`] matches the elapsed show time against the
//! track and, when the matched cue group changes, processes every event of
//! that group in table order. Polling repeatedly at the same time is
//! idempotent.

use crate::band::Band;
use crate::controller::ShowController;
use crate::trace::CueTrace;
use crate::track::{NextMatch, Track};

/// What a single poll observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollOutcome {
    /// Elapsed show time of the poll, in milliseconds.
    pub elapsed_ms: u32,
    /// Index of the matched cue.
    pub current: usize,
    /// The cue after the matched one.
    pub next: NextMatch,
    /// Number of events processed by this poll; 0 if the match was unchanged.
    pub fired: usize,
}

impl PollOutcome {
    /// Returns true if this poll entered a new cue group.
    pub fn is_new_cue(&self) -> bool {
        self.fired > 0
    }
}

/// Drives a show controller from a track.
///
/// # Type Parameters
/// * `N` - Maximum number of entries in the track
#[derive(Debug, Clone)]
pub struct ShowSequencer<const N: usize> {
    track: Track<N>,
    controller: ShowController,
    last_match: Option<usize>,
}

impl<const N: usize> ShowSequencer<N> {
    /// Creates a sequencer at the start of the show with a default controller.
    pub fn new(track: Track<N>) -> Self {
        Self {
            track,
            controller: ShowController::new(),
            last_match: None,
        }
    }

    /// Matches `elapsed_ms` against the track and fires the cue group if its
    /// timecode differs from the one matched by the previous poll.
    ///
    /// A timed transition still pending from the previous cue is committed
    /// before the new group fires. The last group has no window to blend
    /// across, so a transition it stages is committed at once.
    pub fn poll(&mut self, elapsed_ms: u32) -> PollOutcome {
        let current = self.track.find_current(elapsed_ms);
        let next = self.track.find_next(current);

        let mut fired = 0;
        if self.is_new_cue(current) {
            self.controller.complete_transition();
            for entry in self.track.group(current) {
                self.controller.process(entry.event);
                fired += 1;
            }
            if next.is_end() {
                self.controller.complete_transition();
            }
        }
        self.last_match = Some(current);

        PollOutcome {
            elapsed_ms,
            current,
            next,
            fired,
        }
    }

    /// Index 0 doubles as the fallback match before the first cue, so two
    /// different indices can name the same group; compare their timecodes.
    fn is_new_cue(&self, current: usize) -> bool {
        match self.last_match {
            Some(last) => self.track.timecode(last) != self.track.timecode(current),
            None => true,
        }
    }

    /// Rewinds to the start of the show and restores the default controller.
    pub fn reset(&mut self) {
        self.controller = ShowController::new();
        self.last_match = None;
    }

    /// Progress (0.0-1.0) through the window between the matched cue and
    /// the next one. 1.0 once the last cue has fired or before any poll.
    pub fn transition_progress(&self, elapsed_ms: u32) -> f32 {
        let Some(current) = self.last_match else {
            return 1.0;
        };
        let NextMatch::At(next) = self.track.find_next(current) else {
            return 1.0;
        };

        match (self.track.timecode(current), self.track.timecode(next)) {
            (Some(start), Some(end)) if end > start => {
                let into = elapsed_ms.saturating_sub(start);
                (into as f32 / (end - start) as f32).clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }

    /// The palette to paint at `elapsed_ms`, blending any pending transition
    /// across the current cue window.
    pub fn palette_at(&self, elapsed_ms: u32) -> Band {
        self.controller
            .transition_frame(self.transition_progress(elapsed_ms))
    }

    /// Diagnostic line for a poll result.
    pub fn trace(&self, outcome: &PollOutcome) -> CueTrace<'_, N> {
        CueTrace::new(&self.track, outcome.elapsed_ms, outcome.current, outcome.next)
    }

    /// Read-only view of the show state for the renderer.
    pub fn controller(&self) -> &ShowController {
        &self.controller
    }

    pub fn track(&self) -> &Track<N> {
        &self.track
    }

    /// Index matched by the most recent poll, if any.
    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLUE, RED};
    use crate::event::codes;

    #[test]
    fn progress_spans_cue_window() {
        let track = Track::<4>::from_codes(&[
            (0, codes::PALETTE_DARK),
            (1000, codes::PALETTE_RED),
            (3000, codes::PALETTE_BLUE),
        ])
        .unwrap();
        let mut sequencer = ShowSequencer::new(track);

        assert_eq!(sequencer.transition_progress(500), 1.0);

        sequencer.poll(1500);
        assert_eq!(sequencer.transition_progress(1000), 0.0);
        assert_eq!(sequencer.transition_progress(2000), 0.5);
        assert_eq!(sequencer.transition_progress(9000), 1.0);

        sequencer.poll(3000);
        assert_eq!(sequencer.transition_progress(3500), 1.0);
    }

    #[test]
    fn timed_palette_in_last_group_commits() {
        let track = Track::<4>::from_codes(&[
            (0, codes::PALETTE_RED),
            (1000, codes::TRANSITION_TIMED),
            (1000, codes::PALETTE_BLUE),
        ])
        .unwrap();
        let mut sequencer = ShowSequencer::new(track);

        sequencer.poll(0);
        let outcome = sequencer.poll(1000);
        assert!(outcome.next.is_end());

        let show = sequencer.controller();
        assert_eq!(show.current_palette(), &Band::solid(BLUE));
        assert_eq!(show.pending_transition(), None);
        assert!(show.timed_transition());
        assert_eq!(sequencer.palette_at(1_000_000), Band::solid(BLUE));
    }
}
