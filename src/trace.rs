//! Human-readable cue diagnostics.

use crate::track::{NextMatch, Track};
use core::fmt;

/// One diagnostic line describing the matched cue group and the next one.
///
/// Renders as
/// `<seconds>.<ms> : <events...>, next = <events...> in <seconds>.<ms>s`,
/// or `..., next = end` once the last cue has fired.
#[derive(Debug, Clone, Copy)]
pub struct CueTrace<'a, const N: usize> {
    track: &'a Track<N>,
    elapsed_ms: u32,
    current: usize,
    next: NextMatch,
}

impl<'a, const N: usize> CueTrace<'a, N> {
    pub fn new(track: &'a Track<N>, elapsed_ms: u32, current: usize, next: NextMatch) -> Self {
        Self {
            track,
            elapsed_ms,
            current,
            next,
        }
    }

    /// Timecode of the matched cue group.
    pub fn matched_timecode(&self) -> u32 {
        self.track.timecode(self.current).unwrap_or(0)
    }

    /// Milliseconds until the next cue group, `None` at the end of the track.
    pub fn millis_until_next(&self) -> Option<u32> {
        match self.next {
            NextMatch::At(index) => self
                .track
                .timecode(index)
                .map(|timecode| timecode.saturating_sub(self.elapsed_ms)),
            NextMatch::End => None,
        }
    }
}

impl<const N: usize> fmt::Display for CueTrace<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let matched = self.matched_timecode();
        write!(f, "{}.{:03} :", matched / 1000, matched % 1000)?;
        for entry in self.track.group(self.current) {
            write!(f, " {}", entry.event)?;
        }

        f.write_str(", next =")?;
        let NextMatch::At(next) = self.next else {
            return f.write_str(" end");
        };
        for entry in self.track.group(next) {
            write!(f, " {}", entry.event)?;
        }

        let until = self.millis_until_next().unwrap_or(0);
        write!(f, " in {}.{:03}s", until / 1000, until % 1000)
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for CueTrace<'_, N> {
    fn format(&self, f: defmt::Formatter) {
        fn millis(f: defmt::Formatter, ms: u32) {
            defmt::write!(
                f,
                "{=u32}.{=u32}{=u32}{=u32}",
                ms / 1000,
                ms % 1000 / 100,
                ms % 100 / 10,
                ms % 10
            );
        }

        millis(f, self.matched_timecode());
        defmt::write!(f, " :");
        for entry in self.track.group(self.current) {
            defmt::write!(f, " {}", entry.event);
        }

        defmt::write!(f, ", next =");
        match self.next {
            NextMatch::At(next) => {
                for entry in self.track.group(next) {
                    defmt::write!(f, " {}", entry.event);
                }
                defmt::write!(f, " in ");
                millis(f, self.millis_until_next().unwrap_or(0));
                defmt::write!(f, "s");
            }
            NextMatch::End => defmt::write!(f, " end"),
        }
    }
}
