//! Timecoded event tables and the lookups that drive a show.

use crate::event::FxEvent;
use heapless::Vec;

/// An event scheduled at a timecode (milliseconds since show start).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrackEntry {
    pub timecode: u32,
    pub event: FxEvent,
}

impl TrackEntry {
    #[inline]
    pub const fn new(timecode: u32, event: FxEvent) -> Self {
        Self { timecode, event }
    }
}

/// Result of looking up the entry after the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NextMatch {
    /// The first entry with a later timecode.
    At(usize),

    /// No entry has a later timecode; the show has reached its last cue.
    End,
}

impl NextMatch {
    /// Raw table index, wrapping to 0 at the end of the track.
    pub fn index(self) -> usize {
        match self {
            NextMatch::At(index) => index,
            NextMatch::End => 0,
        }
    }

    pub fn is_end(self) -> bool {
        self == NextMatch::End
    }
}

/// An immutable, ordered table of timecoded events.
///
/// Timecodes are expected to be non-decreasing in table order. The table is
/// not validated; an out-of-order table still plays, it just fires the
/// wrong cues.
///
/// # Type Parameters
/// * `N` - Maximum number of entries this track can hold
#[derive(Debug, Clone)]
pub struct Track<const N: usize> {
    entries: Vec<TrackEntry, N>,
}

impl<const N: usize> Track<N> {
    /// Creates a new track builder.
    pub fn builder() -> TrackBuilder<N> {
        TrackBuilder::new()
    }

    /// Decodes a raw `(timecode, code)` table.
    ///
    /// # Errors
    /// * `EmptyTrack` - The table has no entries
    /// * `CapacityExceeded` - The table holds more than `N` entries
    pub fn from_codes(table: &[(u32, u32)]) -> Result<Self, TrackError> {
        table
            .iter()
            .try_fold(TrackBuilder::new(), |builder, &(timecode, code)| {
                builder.entry(timecode, FxEvent::from_code(code))
            })?
            .build()
    }

    /// Builds a track from already decoded entries.
    pub fn from_entries(entries: &[TrackEntry]) -> Result<Self, TrackError> {
        entries
            .iter()
            .try_fold(TrackBuilder::new(), |builder, entry| {
                builder.entry(entry.timecode, entry.event)
            })?
            .build()
    }

    /// Index of the entry with the greatest timecode `<= query`.
    ///
    /// Among entries sharing that timecode the one with the highest index
    /// wins. Returns 0 when no entry qualifies.
    pub fn find_current(&self, query: u32) -> usize {
        let mut current = 0;
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.timecode <= query {
                current = index;
            }
        }
        current
    }

    /// The first entry, in table order, whose timecode is later than the
    /// timecode at `current`.
    pub fn find_next(&self, current: usize) -> NextMatch {
        let Some(timecode) = self.timecode(current) else {
            return NextMatch::End;
        };

        self.entries
            .iter()
            .position(|entry| entry.timecode > timecode)
            .map_or(NextMatch::End, NextMatch::At)
    }

    /// Like [`Track::find_next`], but wraps to index 0 at the end.
    pub fn find_next_index(&self, current: usize) -> usize {
        self.find_next(current).index()
    }

    /// All entries sharing the timecode at `index`, in table order.
    pub fn group(&self, index: usize) -> impl Iterator<Item = &TrackEntry> + '_ {
        let timecode = self.timecode(index);
        self.entries
            .iter()
            .filter(move |entry| Some(entry.timecode) == timecode)
    }

    /// Timecode of the entry at `index`.
    pub fn timecode(&self, index: usize) -> Option<u32> {
        self.entries.get(index).map(|entry| entry.timecode)
    }

    /// Returns a reference to the entry at the given index.
    pub fn get(&self, index: usize) -> Option<&TrackEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[TrackEntry] {
        &self.entries
    }

    /// Returns the number of entries in this track.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Timecode of the last cue.
    pub fn last_timecode(&self) -> Option<u32> {
        self.entries.iter().map(|entry| entry.timecode).max()
    }
}

/// Builder for constructing tracks.
#[derive(Debug)]
pub struct TrackBuilder<const N: usize> {
    entries: Vec<TrackEntry, N>,
}

impl<const N: usize> TrackBuilder<N> {
    /// Creates a new empty track builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if the track already holds `N` entries.
    pub fn entry(mut self, timecode: u32, event: FxEvent) -> Result<Self, TrackError> {
        self.entries
            .push(TrackEntry::new(timecode, event))
            .map_err(|_| TrackError::CapacityExceeded)?;
        Ok(self)
    }

    /// Builds the track.
    ///
    /// # Errors
    /// Returns `EmptyTrack` if no entries were added.
    pub fn build(self) -> Result<Track<N>, TrackError> {
        if self.entries.is_empty() {
            return Err(TrackError::EmptyTrack);
        }

        Ok(Track {
            entries: self.entries,
        })
    }
}

impl<const N: usize> Default for TrackBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Track construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TrackError {
    /// No entries provided.
    EmptyTrack,

    /// Track capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for TrackError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TrackError::EmptyTrack => write!(f, "track must have at least one entry"),
            TrackError::CapacityExceeded => write!(f, "track capacity exceeded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TrackError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::codes;

    #[test]
    fn ties_resolve_to_last_entry() {
        let track = Track::<8>::from_codes(&[
            (0, codes::PALETTE_DARK),
            (100, codes::SPEED_1),
            (100, codes::SPEED_2),
            (200, codes::SPEED_3),
        ])
        .unwrap();

        assert_eq!(track.find_current(150), 2);
        assert_eq!(track.find_next(1), NextMatch::At(3));
        assert_eq!(track.find_next(2), NextMatch::At(3));
    }

    #[test]
    fn out_of_range_index_has_no_next() {
        let track = Track::<4>::from_codes(&[(0, codes::PALETTE_DARK)]).unwrap();
        assert_eq!(track.find_next(9), NextMatch::End);
        assert_eq!(track.group(9).count(), 0);
    }
}
