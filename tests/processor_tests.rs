//! Integration tests for event processing

use fx_sequencer::colors::{BLUE, DARK, MAGENTA, RED, WHITE};
use fx_sequencer::event::codes;
use fx_sequencer::{
    Band, BlendStyle, Direction, FxEvent, NamedColor, PaletteCue, ShowController, Swatch,
    TransitionMode, process,
};

fn code(code: u32) -> FxEvent {
    FxEvent::from_code(code)
}

#[test]
fn timed_transition_stages_palette_without_touching_current() {
    let mut show = ShowController::new();
    show.process(code(codes::PALETTE_RED));
    let before = *show.current_palette();

    show.process(code(codes::TRANSITION_TIMED));
    assert_eq!(show.current_palette(), &before);

    show.process(code(codes::PALETTE_BLUE));
    assert_eq!(show.current_palette(), &before);
    assert_eq!(show.next_palette(), &Band::solid(BLUE));
    assert_eq!(show.initial_palette(), &Band::solid(RED));
    assert!(show.timed_transition());
    assert_eq!(show.pending_transition(), Some(BlendStyle::Crossfade));
}

#[test]
fn fast_transition_applies_palette_and_leaves_next_alone() {
    let mut show = ShowController::new();
    show.process(code(codes::TRANSITION_TIMED));
    show.process(code(codes::PALETTE_MAGENTA));
    let staged = *show.next_palette();
    assert_eq!(staged, Band::solid(MAGENTA));

    show.process(code(codes::TRANSITION_FAST));
    show.process(code(codes::PALETTE_WB));
    assert_eq!(show.current_palette(), &Swatch::Double(WHITE, BLUE).band());
    assert_eq!(show.next_palette(), &staged);
    assert!(!show.timed_transition());
}

#[test]
fn unrecognized_event_changes_nothing() {
    let mut show = ShowController::new();
    show.process(code(codes::SPEED_7));
    show.process(code(codes::TRANSITION_TIMED));
    show.process(code(codes::PALETTE_WRB));
    let snapshot = show;

    show.process(code(999));
    show.process(FxEvent::Unrecognized(42));
    assert_eq!(show, snapshot);
}

#[test]
fn track_markers_change_nothing() {
    let mut show = ShowController::new();
    let snapshot = show;
    process(&mut show, code(codes::TRACK_BEGIN));
    process(&mut show, code(codes::TRACK_STOP));
    assert_eq!(show, snapshot);
}

#[test]
fn speed_events_set_rate() {
    let mut show = ShowController::new();
    assert_eq!(show.palette_speed(), 1);

    show.process(code(codes::SPEED_0));
    assert_eq!(show.palette_speed(), 0);

    show.process(code(codes::SPEED_18));
    assert_eq!(show.palette_speed(), 18);

    show.process(code(codes::SPEED_32));
    assert_eq!(show.palette_speed(), 32);
}

#[test]
fn direction_events_set_sign() {
    let mut show = ShowController::new();
    show.process(code(codes::SPEED_NEG));
    assert_eq!(show.palette_direction(), Direction::Neg);
    assert_eq!(show.palette_direction().sign(), -1);

    show.process(code(codes::SPEED_POS));
    assert_eq!(show.palette_direction().sign(), 1);
}

#[test]
fn transition_latch_has_no_visual_effect_by_itself() {
    let mut show = ShowController::new();
    show.process(code(codes::PALETTE_RED));
    let snapshot = *show.current_palette();

    show.process(code(codes::TRANSITION_TIMED_FADE));
    assert_eq!(show.current_palette(), &snapshot);
    assert_eq!(show.pending_transition(), None);
    assert_eq!(
        show.transition_mode(),
        TransitionMode::Timed(BlendStyle::Fade)
    );
}

#[test]
fn wipe_and_fade_stage_like_timed() {
    for transition in [
        codes::TRANSITION_TIMED_WIPE_POS,
        codes::TRANSITION_TIMED_WIPE_NEG,
        codes::TRANSITION_TIMED_FADE,
    ] {
        let mut show = ShowController::new();
        show.process(code(transition));
        show.process(code(codes::PALETTE_RED));
        assert_eq!(show.current_palette(), &Band::solid(DARK));
        assert_eq!(show.next_palette(), &Band::solid(RED));
        assert!(show.pending_transition().is_some());
    }
}

#[test]
fn role_aliases_build_single_color_bands() {
    let mut show = ShowController::new();
    show.process(code(codes::PALETTE_LEAD));
    assert_eq!(show.current_palette(), &Band::solid(BLUE));

    show.process(code(codes::PALETTE_FOLLOW));
    assert_eq!(show.current_palette(), &Band::solid(RED));
}

#[test]
fn dark_white_pair_is_processed() {
    let mut show = ShowController::new();
    show.process(code(codes::PALETTE_DW));
    assert_eq!(
        show.current_palette(),
        &PaletteCue::Pair(NamedColor::Dark, NamedColor::White)
            .swatch()
            .band()
    );
    assert_eq!(show.current_palette().stop(1), Some(WHITE));
}

#[test]
fn rgb_trio_builds_padded_band() {
    let mut show = ShowController::new();
    show.process(code(codes::PALETTE_RGB));
    let quadrant = show.current_palette().quadrant(2).unwrap();
    assert_eq!(quadrant[0], RED);
    assert_eq!(quadrant[2], BLUE);
    assert_eq!(quadrant[3], DARK);
}
