//! Maps show events onto controller mutations.

use crate::band::Swatch;
use crate::colors::{BLUE, RED};
use crate::controller::ShowController;
use crate::event::{FxEvent, PaletteCue};

impl PaletteCue {
    /// Resolves the cue to its source colors.
    ///
    /// Role aliases resolve to a fixed catalog color: `Lead` is blue,
    /// `Follow` is red. Trios are padded with dark.
    pub fn swatch(&self) -> Swatch {
        match *self {
            PaletteCue::Lead => Swatch::Single(BLUE),
            PaletteCue::Follow => Swatch::Single(RED),
            PaletteCue::Solid(a) => Swatch::Single(a.rgb()),
            PaletteCue::Pair(a, b) => Swatch::Double(a.rgb(), b.rgb()),
            PaletteCue::Trio(a, b, c) => Swatch::Triple(a.rgb(), b.rgb(), c.rgb()),
        }
    }
}

/// Applies a single event to the show.
///
/// Track markers and unrecognized codes leave the controller untouched.
pub fn process(show: &mut ShowController, event: FxEvent) {
    match event {
        FxEvent::Speed(level) => show.set_speed(level),
        FxEvent::Direction(direction) => show.set_direction(direction),
        FxEvent::Transition(mode) => show.set_transition(mode),
        FxEvent::Palette(cue) => show.apply_band(cue.swatch().band()),
        FxEvent::Track(_) | FxEvent::Unrecognized(_) => {}
    }
}

impl ShowController {
    /// Applies a single event. See [`process`].
    pub fn process(&mut self, event: FxEvent) {
        process(self, event);
    }
}
