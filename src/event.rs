//! The closed vocabulary of show events.
//!
//! Tracks are authored as raw `(timecode, code)` pairs. Codes are decoded once,
//! when the track is loaded, into [`FxEvent`]. Decoding is total: codes outside
//! the vocabulary become [`FxEvent::Unrecognized`], which the processor ignores,
//! so tracks authored against a newer vocabulary still load.

use crate::colors::NamedColor::{self, Blue, Cyan, Dark, Green, Magenta, Red, White, Yellow};
use core::fmt;

/// Raw event codes used when authoring track tables.
pub mod codes {
    pub const SPEED_0: u32 = 0;
    pub const SPEED_1: u32 = 1;
    pub const SPEED_2: u32 = 2;
    pub const SPEED_3: u32 = 3;
    pub const SPEED_4: u32 = 4;
    pub const SPEED_5: u32 = 5;
    pub const SPEED_6: u32 = 6;
    pub const SPEED_7: u32 = 7;
    pub const SPEED_8: u32 = 8;
    pub const SPEED_9: u32 = 9;
    pub const SPEED_10: u32 = 10;
    pub const SPEED_11: u32 = 11;
    pub const SPEED_12: u32 = 12;
    pub const SPEED_13: u32 = 13;
    pub const SPEED_14: u32 = 14;
    pub const SPEED_15: u32 = 15;
    pub const SPEED_16: u32 = 16;
    pub const SPEED_17: u32 = 17;
    pub const SPEED_18: u32 = 18;
    pub const SPEED_32: u32 = 19;

    pub const SPEED_POS: u32 = 20;
    pub const SPEED_NEG: u32 = 21;

    pub const TRANSITION_FAST: u32 = 30;
    pub const TRANSITION_TIMED: u32 = 31;
    pub const TRANSITION_TIMED_WIPE_POS: u32 = 32;
    pub const TRANSITION_TIMED_WIPE_NEG: u32 = 33;
    pub const TRANSITION_TIMED_FADE: u32 = 34;

    pub const PALETTE_LEAD: u32 = 40;
    pub const PALETTE_FOLLOW: u32 = 41;

    pub const TRACK_BEGIN: u32 = 50;
    pub const TRACK_STOP: u32 = 51;

    pub const PALETTE_DARK: u32 = 101;
    pub const PALETTE_WHITE: u32 = 102;
    pub const PALETTE_RED: u32 = 103;
    pub const PALETTE_YELLOW: u32 = 104;
    pub const PALETTE_GREEN: u32 = 105;
    pub const PALETTE_CYAN: u32 = 106;
    pub const PALETTE_BLUE: u32 = 107;
    pub const PALETTE_MAGENTA: u32 = 108;
    pub const PALETTE_ORANGE: u32 = 109;

    pub const PALETTE_DW: u32 = 119;
    pub const PALETTE_DR: u32 = 120;
    pub const PALETTE_DY: u32 = 121;
    pub const PALETTE_DG: u32 = 122;
    pub const PALETTE_DC: u32 = 123;
    pub const PALETTE_DB: u32 = 124;
    pub const PALETTE_DM: u32 = 125;
    pub const PALETTE_WR: u32 = 130;
    pub const PALETTE_WY: u32 = 131;
    pub const PALETTE_WG: u32 = 132;
    pub const PALETTE_WC: u32 = 133;
    pub const PALETTE_WB: u32 = 134;
    pub const PALETTE_WM: u32 = 135;
    pub const PALETTE_RY: u32 = 141;
    pub const PALETTE_RG: u32 = 142;
    pub const PALETTE_RC: u32 = 143;
    pub const PALETTE_RB: u32 = 144;
    pub const PALETTE_RM: u32 = 145;
    pub const PALETTE_YG: u32 = 152;
    pub const PALETTE_YC: u32 = 153;
    pub const PALETTE_YB: u32 = 154;
    pub const PALETTE_YM: u32 = 155;
    pub const PALETTE_GC: u32 = 163;
    pub const PALETTE_GB: u32 = 164;
    pub const PALETTE_GM: u32 = 165;
    pub const PALETTE_CB: u32 = 174;
    pub const PALETTE_CM: u32 = 175;
    pub const PALETTE_BM: u32 = 185;

    pub const PALETTE_WRY: u32 = 201;
    pub const PALETTE_WRG: u32 = 202;
    pub const PALETTE_WRC: u32 = 203;
    pub const PALETTE_WRB: u32 = 204;
    pub const PALETTE_WRM: u32 = 205;
    pub const PALETTE_WYG: u32 = 206;
    pub const PALETTE_WYC: u32 = 207;
    pub const PALETTE_WYB: u32 = 208;
    pub const PALETTE_WYM: u32 = 209;
    pub const PALETTE_WGC: u32 = 210;
    pub const PALETTE_WGB: u32 = 211;
    pub const PALETTE_WGM: u32 = 212;
    pub const PALETTE_WCB: u32 = 213;
    pub const PALETTE_WCM: u32 = 214;
    pub const PALETTE_WBM: u32 = 215;

    pub const PALETTE_RGB: u32 = 230;
}

/// Animation rate selector: `x0`..`x18` or `x32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    /// The fastest level, `x32`.
    pub const MAX: SpeedLevel = SpeedLevel(32);

    /// Returns the level for `rate` if it is one of the encodable rates.
    pub const fn new(rate: u8) -> Option<Self> {
        match rate {
            0..=18 | 32 => Some(SpeedLevel(rate)),
            _ => None,
        }
    }

    pub const fn rate(self) -> u8 {
        self.0
    }
}

/// Scrolling direction of the palette animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    #[default]
    Pos,
    Neg,
}

impl Direction {
    /// `+1` or `-1`.
    pub const fn sign(self) -> i8 {
        match self {
            Direction::Pos => 1,
            Direction::Neg => -1,
        }
    }
}

/// How a timed transition blends from the old palette to the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlendStyle {
    /// Every stop crossfades at once.
    Crossfade,

    /// Stops switch to the new palette one after another, starting at the
    /// first stop for `Pos` and at the last stop for `Neg`.
    Wipe(Direction),

    /// Fade the old palette out to dark, then fade the new one in.
    Fade,
}

/// Whether palette changes apply at once or are staged for a blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionMode {
    /// New palettes replace the current palette immediately.
    #[default]
    Fast,

    /// New palettes are staged as the pending target and blended in.
    Timed(BlendStyle),
}

impl TransitionMode {
    pub const fn is_timed(self) -> bool {
        matches!(self, TransitionMode::Timed(_))
    }
}

/// Track-control markers. Reserved; processing them has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TrackMarker {
    Begin,
    Stop,
}

/// A palette selection from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PaletteCue {
    /// Role alias for the lead performer (blue).
    Lead,
    /// Role alias for the follow performer (red).
    Follow,
    Solid(NamedColor),
    Pair(NamedColor, NamedColor),
    Trio(NamedColor, NamedColor, NamedColor),
}

use PaletteCue::{Pair, Solid, Trio};

/// Catalog of palette codes.
const PALETTE_CATALOG: &[(u32, PaletteCue)] = &[
    (codes::PALETTE_LEAD, PaletteCue::Lead),
    (codes::PALETTE_FOLLOW, PaletteCue::Follow),
    (codes::PALETTE_DARK, Solid(Dark)),
    (codes::PALETTE_WHITE, Solid(White)),
    (codes::PALETTE_RED, Solid(Red)),
    (codes::PALETTE_YELLOW, Solid(Yellow)),
    (codes::PALETTE_GREEN, Solid(Green)),
    (codes::PALETTE_CYAN, Solid(Cyan)),
    (codes::PALETTE_BLUE, Solid(Blue)),
    (codes::PALETTE_MAGENTA, Solid(Magenta)),
    (codes::PALETTE_ORANGE, Solid(NamedColor::Orange)),
    (codes::PALETTE_DW, Pair(Dark, White)),
    (codes::PALETTE_DR, Pair(Dark, Red)),
    (codes::PALETTE_DY, Pair(Dark, Yellow)),
    (codes::PALETTE_DG, Pair(Dark, Green)),
    (codes::PALETTE_DC, Pair(Dark, Cyan)),
    (codes::PALETTE_DB, Pair(Dark, Blue)),
    (codes::PALETTE_DM, Pair(Dark, Magenta)),
    (codes::PALETTE_WR, Pair(White, Red)),
    (codes::PALETTE_WY, Pair(White, Yellow)),
    (codes::PALETTE_WG, Pair(White, Green)),
    (codes::PALETTE_WC, Pair(White, Cyan)),
    (codes::PALETTE_WB, Pair(White, Blue)),
    (codes::PALETTE_WM, Pair(White, Magenta)),
    (codes::PALETTE_RY, Pair(Red, Yellow)),
    (codes::PALETTE_RG, Pair(Red, Green)),
    (codes::PALETTE_RC, Pair(Red, Cyan)),
    (codes::PALETTE_RB, Pair(Red, Blue)),
    (codes::PALETTE_RM, Pair(Red, Magenta)),
    (codes::PALETTE_YG, Pair(Yellow, Green)),
    (codes::PALETTE_YC, Pair(Yellow, Cyan)),
    (codes::PALETTE_YB, Pair(Yellow, Blue)),
    (codes::PALETTE_YM, Pair(Yellow, Magenta)),
    (codes::PALETTE_GC, Pair(Green, Cyan)),
    (codes::PALETTE_GB, Pair(Green, Blue)),
    (codes::PALETTE_GM, Pair(Green, Magenta)),
    (codes::PALETTE_CB, Pair(Cyan, Blue)),
    (codes::PALETTE_CM, Pair(Cyan, Magenta)),
    (codes::PALETTE_BM, Pair(Blue, Magenta)),
    (codes::PALETTE_WRY, Trio(White, Red, Yellow)),
    (codes::PALETTE_WRG, Trio(White, Red, Green)),
    (codes::PALETTE_WRC, Trio(White, Red, Cyan)),
    (codes::PALETTE_WRB, Trio(White, Red, Blue)),
    (codes::PALETTE_WRM, Trio(White, Red, Magenta)),
    (codes::PALETTE_WYG, Trio(White, Yellow, Green)),
    (codes::PALETTE_WYC, Trio(White, Yellow, Cyan)),
    (codes::PALETTE_WYB, Trio(White, Yellow, Blue)),
    (codes::PALETTE_WYM, Trio(White, Yellow, Magenta)),
    (codes::PALETTE_WGC, Trio(White, Green, Cyan)),
    (codes::PALETTE_WGB, Trio(White, Green, Blue)),
    (codes::PALETTE_WGM, Trio(White, Green, Magenta)),
    (codes::PALETTE_WCB, Trio(White, Cyan, Blue)),
    (codes::PALETTE_WCM, Trio(White, Cyan, Magenta)),
    (codes::PALETTE_WBM, Trio(White, Blue, Magenta)),
    (codes::PALETTE_RGB, Trio(Red, Green, Blue)),
];

/// A single show event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FxEvent {
    /// Set the animation rate.
    Speed(SpeedLevel),
    /// Set the animation direction.
    Direction(Direction),
    /// Latch the transition mode for following palette changes.
    Transition(TransitionMode),
    /// Build a new palette.
    Palette(PaletteCue),
    /// Reserved track-control marker.
    Track(TrackMarker),
    /// A code outside the vocabulary. Processing it is a no-op.
    Unrecognized(u32),
}

impl FxEvent {
    /// Decodes a raw event code. Never fails.
    pub fn from_code(code: u32) -> Self {
        match code {
            0..=18 => FxEvent::Speed(SpeedLevel(code as u8)),
            codes::SPEED_32 => FxEvent::Speed(SpeedLevel::MAX),
            codes::SPEED_POS => FxEvent::Direction(Direction::Pos),
            codes::SPEED_NEG => FxEvent::Direction(Direction::Neg),
            codes::TRANSITION_FAST => FxEvent::Transition(TransitionMode::Fast),
            codes::TRANSITION_TIMED => {
                FxEvent::Transition(TransitionMode::Timed(BlendStyle::Crossfade))
            }
            codes::TRANSITION_TIMED_WIPE_POS => {
                FxEvent::Transition(TransitionMode::Timed(BlendStyle::Wipe(Direction::Pos)))
            }
            codes::TRANSITION_TIMED_WIPE_NEG => {
                FxEvent::Transition(TransitionMode::Timed(BlendStyle::Wipe(Direction::Neg)))
            }
            codes::TRANSITION_TIMED_FADE => {
                FxEvent::Transition(TransitionMode::Timed(BlendStyle::Fade))
            }
            codes::TRACK_BEGIN => FxEvent::Track(TrackMarker::Begin),
            codes::TRACK_STOP => FxEvent::Track(TrackMarker::Stop),
            _ => PALETTE_CATALOG
                .iter()
                .find(|(c, _)| *c == code)
                .map(|&(_, cue)| FxEvent::Palette(cue))
                .unwrap_or(FxEvent::Unrecognized(code)),
        }
    }

    /// Returns the raw code for this event.
    ///
    /// Palette cues that are not part of the catalog have no code.
    pub fn code(&self) -> Option<u32> {
        match *self {
            FxEvent::Speed(level) if level == SpeedLevel::MAX => Some(codes::SPEED_32),
            FxEvent::Speed(level) => Some(level.rate() as u32),
            FxEvent::Direction(Direction::Pos) => Some(codes::SPEED_POS),
            FxEvent::Direction(Direction::Neg) => Some(codes::SPEED_NEG),
            FxEvent::Transition(mode) => Some(match mode {
                TransitionMode::Fast => codes::TRANSITION_FAST,
                TransitionMode::Timed(BlendStyle::Crossfade) => codes::TRANSITION_TIMED,
                TransitionMode::Timed(BlendStyle::Wipe(Direction::Pos)) => {
                    codes::TRANSITION_TIMED_WIPE_POS
                }
                TransitionMode::Timed(BlendStyle::Wipe(Direction::Neg)) => {
                    codes::TRANSITION_TIMED_WIPE_NEG
                }
                TransitionMode::Timed(BlendStyle::Fade) => codes::TRANSITION_TIMED_FADE,
            }),
            FxEvent::Track(TrackMarker::Begin) => Some(codes::TRACK_BEGIN),
            FxEvent::Track(TrackMarker::Stop) => Some(codes::TRACK_STOP),
            FxEvent::Palette(cue) => PALETTE_CATALOG
                .iter()
                .find(|(_, c)| *c == cue)
                .map(|&(code, _)| code),
            FxEvent::Unrecognized(code) => Some(code),
        }
    }
}

impl From<u32> for FxEvent {
    fn from(code: u32) -> Self {
        FxEvent::from_code(code)
    }
}

/// One piece of an event name.
enum NamePart {
    Text(&'static str),
    Number(u32),
}

/// Emits the name of an event piece by piece, so `Display` and `defmt` share
/// one naming table.
fn visit_name<E>(
    event: &FxEvent,
    mut emit: impl FnMut(NamePart) -> Result<(), E>,
) -> Result<(), E> {
    use NamePart::{Number, Text};

    match *event {
        FxEvent::Speed(level) => {
            emit(Text("x"))?;
            emit(Number(level.rate() as u32))
        }
        FxEvent::Direction(Direction::Pos) => emit(Text("pos")),
        FxEvent::Direction(Direction::Neg) => emit(Text("neg")),
        FxEvent::Transition(TransitionMode::Fast) => emit(Text("fast")),
        FxEvent::Transition(TransitionMode::Timed(BlendStyle::Crossfade)) => emit(Text("timed")),
        FxEvent::Transition(TransitionMode::Timed(BlendStyle::Wipe(Direction::Pos))) => {
            emit(Text("timed_wipe_pos"))
        }
        FxEvent::Transition(TransitionMode::Timed(BlendStyle::Wipe(Direction::Neg))) => {
            emit(Text("timed_wipe_neg"))
        }
        FxEvent::Transition(TransitionMode::Timed(BlendStyle::Fade)) => emit(Text("timed_fade")),
        FxEvent::Palette(PaletteCue::Lead) => emit(Text("lead")),
        FxEvent::Palette(PaletteCue::Follow) => emit(Text("follow")),
        FxEvent::Palette(Solid(a)) => emit(Text(a.name())),
        FxEvent::Palette(Pair(a, b)) => {
            emit(Text(a.initial()))?;
            emit(Text(b.initial()))
        }
        FxEvent::Palette(Trio(a, b, c)) => {
            emit(Text(a.initial()))?;
            emit(Text(b.initial()))?;
            emit(Text(c.initial()))
        }
        FxEvent::Track(TrackMarker::Begin) => emit(Text("begin")),
        FxEvent::Track(TrackMarker::Stop) => emit(Text("stop")),
        FxEvent::Unrecognized(code) => {
            emit(Text("unknown("))?;
            emit(Number(code))?;
            emit(Text(")"))
        }
    }
}

impl fmt::Display for FxEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        visit_name(self, |part| match part {
            NamePart::Text(s) => f.write_str(s),
            NamePart::Number(n) => write!(f, "{}", n),
        })
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FxEvent {
    fn format(&self, f: defmt::Formatter) {
        let _ = visit_name::<()>(self, |part| {
            match part {
                NamePart::Text(s) => defmt::write!(f, "{=str}", s),
                NamePart::Number(n) => defmt::write!(f, "{=u32}", n),
            }
            Ok(())
        });
    }
}
