#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`FxEvent`**: A show event, decoded once from its raw code
//! - **`Track`**: Immutable, timecode-ordered table of events with the
//!   current/next cue lookups
//! - **`Band`**: A 16-stop palette built from a `Swatch` of one to four colors
//! - **`ShowController`**: The palette state the renderer paints from
//! - **`ShowSequencer`**: Polls a track with elapsed time and fires each cue
//!   group exactly once
//! - **`ShowPlayer`**: Runs a sequencer against a `TimeSource`
//! - **`CueTrace`**: Human-readable diagnostic line for a poll
//!
//! Painting pixels is left to the caller: read [`ShowController`] (or
//! [`ShowPlayer::palette_frame`]) once per frame.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod band;
pub mod colors;
pub mod command;
pub mod controller;
pub mod event;
pub mod player;
pub mod processor;
pub mod sequencer;
pub mod time;
pub mod trace;
pub mod track;
pub mod tracks;

pub use band::{BAND_STOPS, Band, BandError, Swatch, build_band};
pub use colors::{NamedColor, Rgb8, lerp, lerp_color};
pub use command::PlayerAction;
pub use controller::ShowController;
pub use event::{
    BlendStyle, Direction, FxEvent, PaletteCue, SpeedLevel, TrackMarker, TransitionMode,
};
pub use player::{PlayerError, PlayerState, ServiceTiming, ShowPlayer};
pub use processor::process;
pub use sequencer::{PollOutcome, ShowSequencer};
pub use time::{Millis, MillisInstant, TimeDuration, TimeInstant, TimeSource};
pub use trace::CueTrace;
pub use track::{NextMatch, Track, TrackBuilder, TrackEntry, TrackError};
