//! Built-in show tracks.
//!
//! Tracks are stored as raw `(timecode, code)` pairs and decoded with
//! [`Track::from_codes`](crate::track::Track::from_codes).

use crate::event::codes;

/// Delay between the audio cue and show time zero for
/// [`GAME_HAS_CHANGED_LEAD`], in milliseconds.
pub const GAME_HAS_CHANGED_START_DELAY_MS: u32 = 1800;

/// Number of entries in [`GAME_HAS_CHANGED_LEAD`].
pub const GAME_HAS_CHANGED_LEAD_LEN: usize = GAME_HAS_CHANGED_LEAD.len();

/// "The Game Has Changed", lead dancer.
pub const GAME_HAS_CHANGED_LEAD: &[(u32, u32)] = &[
    // Intro
    (1, codes::PALETTE_DARK),
    (1, codes::SPEED_1),
    (1, codes::SPEED_POS),

    // Snap-ins: flash the role color, then fade to dark
    (9633, codes::TRANSITION_FAST),
    (9633, codes::PALETTE_LEAD),
    (9633, codes::TRANSITION_TIMED),
    (9633, codes::PALETTE_DARK),
    (12033, codes::TRANSITION_FAST),
    (12033, codes::PALETTE_FOLLOW),
    (12033, codes::TRANSITION_TIMED),
    (12033, codes::PALETTE_DARK),
    (14366, codes::TRANSITION_FAST),
    (14366, codes::PALETTE_LEAD),
    (14366, codes::TRANSITION_TIMED),
    (14366, codes::PALETTE_DARK),
    (16833, codes::TRANSITION_FAST),
    (16833, codes::PALETTE_FOLLOW),
    (16833, codes::TRANSITION_TIMED),
    (16833, codes::PALETTE_DARK),

    // March
    (19166, codes::TRANSITION_FAST),
    (19166, codes::PALETTE_RB),
    (19166, codes::TRANSITION_TIMED),
    (19166, codes::PALETTE_WRB),

    // Coast
    (24100, codes::TRANSITION_TIMED),
    (24100, codes::PALETTE_LEAD),
    (26366, codes::TRANSITION_FAST),
    (26366, codes::PALETTE_WHITE),
    (26900, codes::PALETTE_WB),

    // Build
    (28733, codes::PALETTE_RB),

    // Coast
    (33633, codes::TRANSITION_TIMED),
    (33633, codes::PALETTE_CYAN),
    (35966, codes::TRANSITION_FAST),
    (35966, codes::PALETTE_WHITE),
    (36466, codes::PALETTE_WB),

    // Build
    (38400, codes::PALETTE_RB),
    (40766, codes::PALETTE_WB),
    (43166, codes::PALETTE_RB),
    (45566, codes::PALETTE_WB),

    // Breakthrough, slow color fades
    (48100, codes::TRANSITION_TIMED),
    (48100, codes::SPEED_0),
    (48100, codes::PALETTE_MAGENTA),
    (52766, codes::PALETTE_CYAN),
    (59933, codes::PALETTE_YELLOW),
    (62366, codes::PALETTE_ORANGE),

    // Outro
    (69566, codes::PALETTE_ORANGE),
    (69566, codes::SPEED_1),
    (69566, codes::TRANSITION_FAST),

    (80500, codes::PALETTE_DARK),

    // Last cue
    (205000, codes::PALETTE_DARK),
];
