//! Mutable show state read by the renderer.

use crate::band::{BAND_STOPS, Band};
use crate::colors::DARK;
use crate::event::{BlendStyle, Direction, SpeedLevel, TransitionMode};

/// The palette state of a running show.
///
/// Mutated only by the event processor. The renderer reads it once per frame,
/// either through the accessors or through [`ShowController::transition_frame`]
/// while a timed transition is pending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowController {
    current_palette: Band,
    initial_palette: Band,
    next_palette: Band,
    transition: TransitionMode,
    pending: Option<BlendStyle>,
    palette_speed: u8,
    palette_direction: Direction,
}

impl ShowController {
    /// Creates a controller with a dark palette, speed 1, positive direction
    /// and fast transitions.
    pub const fn new() -> Self {
        Self {
            current_palette: Band::solid(DARK),
            initial_palette: Band::solid(DARK),
            next_palette: Band::solid(DARK),
            transition: TransitionMode::Fast,
            pending: None,
            palette_speed: 1,
            palette_direction: Direction::Pos,
        }
    }

    /// Applies a freshly built band.
    ///
    /// In fast mode the band replaces the current palette. In timed mode it
    /// becomes the pending target and the current palette is snapshotted as
    /// the blend origin; the current palette itself is left alone.
    pub fn apply_band(&mut self, band: Band) {
        match self.transition {
            TransitionMode::Fast => self.current_palette = band,
            TransitionMode::Timed(style) => {
                self.next_palette = band;
                self.initial_palette = self.current_palette;
                self.pending = Some(style);
            }
        }
    }

    pub fn set_speed(&mut self, level: SpeedLevel) {
        self.palette_speed = level.rate();
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.palette_direction = direction;
    }

    /// Latches the transition mode. Takes effect on the next palette change.
    pub fn set_transition(&mut self, mode: TransitionMode) {
        self.transition = mode;
    }

    /// Commits a pending transition, making the target palette current.
    ///
    /// Returns `false` if no transition was pending.
    pub fn complete_transition(&mut self) -> bool {
        match self.pending.take() {
            Some(_) => {
                self.current_palette = self.next_palette;
                true
            }
            None => false,
        }
    }

    /// Renders the palette for a frame `progress` (0.0-1.0) of the way
    /// through the pending transition.
    ///
    /// Without a pending transition this is the current palette.
    pub fn transition_frame(&self, progress: f32) -> Band {
        let Some(style) = self.pending else {
            return self.current_palette;
        };

        let progress = progress.clamp(0.0, 1.0);
        let from = &self.initial_palette;
        let to = &self.next_palette;

        match style {
            BlendStyle::Crossfade => from.blend(to, progress),
            BlendStyle::Fade => {
                let dark = Band::solid(DARK);
                if progress < 0.5 {
                    from.blend(&dark, progress * 2.0)
                } else {
                    dark.blend(to, (progress - 0.5) * 2.0)
                }
            }
            BlendStyle::Wipe(direction) => {
                let switched = (progress * BAND_STOPS as f32) as usize;
                let stops = core::array::from_fn(|i| {
                    let rank = match direction {
                        Direction::Pos => i,
                        Direction::Neg => BAND_STOPS - 1 - i,
                    };
                    if rank < switched { to.stops()[i] } else { from.stops()[i] }
                });
                Band::from_stops(stops)
            }
        }
    }

    /// The authoritative render palette.
    pub fn current_palette(&self) -> &Band {
        &self.current_palette
    }

    /// Blend origin of the latest timed transition.
    pub fn initial_palette(&self) -> &Band {
        &self.initial_palette
    }

    /// Target of the latest timed transition.
    pub fn next_palette(&self) -> &Band {
        &self.next_palette
    }

    pub fn transition_mode(&self) -> TransitionMode {
        self.transition
    }

    /// Returns true while palette changes are staged rather than applied.
    pub fn timed_transition(&self) -> bool {
        self.transition.is_timed()
    }

    /// Style of the transition awaiting completion, if any.
    pub fn pending_transition(&self) -> Option<BlendStyle> {
        self.pending
    }

    pub fn palette_speed(&self) -> u8 {
        self.palette_speed
    }

    pub fn palette_direction(&self) -> Direction {
        self.palette_direction
    }
}

impl Default for ShowController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLUE, RED};

    fn timed(style: BlendStyle) -> ShowController {
        let mut show = ShowController::new();
        show.apply_band(Band::solid(RED));
        show.set_transition(TransitionMode::Timed(style));
        show.apply_band(Band::solid(BLUE));
        show
    }

    #[test]
    fn defaults() {
        let show = ShowController::default();
        assert_eq!(show.palette_speed(), 1);
        assert_eq!(show.palette_direction().sign(), 1);
        assert!(!show.timed_transition());
        assert_eq!(show.pending_transition(), None);
    }

    #[test]
    fn crossfade_midpoint_blends_every_stop() {
        let show = timed(BlendStyle::Crossfade);
        let frame = show.transition_frame(0.5);
        for stop in frame.stops() {
            assert_eq!((stop.red, stop.green, stop.blue), (128, 0, 128));
        }
    }

    #[test]
    fn wipe_pos_switches_leading_stops_first() {
        let show = timed(BlendStyle::Wipe(Direction::Pos));
        let frame = show.transition_frame(0.25);
        assert_eq!(frame.stop(0), Some(BLUE));
        assert_eq!(frame.stop(3), Some(BLUE));
        assert_eq!(frame.stop(4), Some(RED));
        assert_eq!(frame.stop(15), Some(RED));
    }

    #[test]
    fn wipe_neg_switches_trailing_stops_first() {
        let show = timed(BlendStyle::Wipe(Direction::Neg));
        let frame = show.transition_frame(0.25);
        assert_eq!(frame.stop(15), Some(BLUE));
        assert_eq!(frame.stop(12), Some(BLUE));
        assert_eq!(frame.stop(11), Some(RED));
        assert_eq!(frame.stop(0), Some(RED));
    }

    #[test]
    fn fade_passes_through_dark() {
        let show = timed(BlendStyle::Fade);
        assert_eq!(show.transition_frame(0.0), Band::solid(RED));
        assert_eq!(show.transition_frame(0.5), Band::solid(DARK));
        assert_eq!(show.transition_frame(1.0), Band::solid(BLUE));
    }

    #[test]
    fn every_style_ends_on_target() {
        for style in [
            BlendStyle::Crossfade,
            BlendStyle::Fade,
            BlendStyle::Wipe(Direction::Pos),
            BlendStyle::Wipe(Direction::Neg),
        ] {
            let show = timed(style);
            assert_eq!(show.transition_frame(1.0), Band::solid(BLUE));
            assert_eq!(show.transition_frame(0.0), Band::solid(RED));
        }
    }

    #[test]
    fn complete_transition_commits_target() {
        let mut show = timed(BlendStyle::Crossfade);
        assert_eq!(show.current_palette(), &Band::solid(RED));
        assert!(show.complete_transition());
        assert_eq!(show.current_palette(), &Band::solid(BLUE));
        assert!(!show.complete_transition());
        assert_eq!(show.transition_frame(0.3), Band::solid(BLUE));
    }
}
