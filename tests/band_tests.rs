//! Integration tests for band construction

use fx_sequencer::colors::{BLUE, DARK, GREEN, RED, WHITE, YELLOW};
use fx_sequencer::{BAND_STOPS, Band, BandError, Rgb8, Swatch, build_band, lerp_color};

#[test]
fn single_color_fills_every_stop() {
    let band = build_band(&[RED]).unwrap();
    assert_eq!(band.stops().len(), BAND_STOPS);
    assert!(band.stops().iter().all(|&stop| stop == RED));
}

#[test]
fn two_colors_repeat_identically_across_quadrants() {
    let band = build_band(&[WHITE, BLUE]).unwrap();
    let first = band.quadrant(0).unwrap();
    assert_eq!(first, &[WHITE, BLUE, WHITE, BLUE]);
    for q in 1..4 {
        assert_eq!(band.quadrant(q).unwrap(), first);
    }
}

#[test]
fn three_colors_are_padded_with_dark() {
    let band = build_band(&[WHITE, RED, YELLOW]).unwrap();
    for q in 0..4 {
        assert_eq!(band.quadrant(q).unwrap(), &[WHITE, RED, YELLOW, DARK]);
    }
}

#[test]
fn four_colors_keep_their_order() {
    let band = build_band(&[RED, GREEN, BLUE, WHITE]).unwrap();
    assert_eq!(band.stop(0), Some(RED));
    assert_eq!(band.stop(5), Some(GREEN));
    assert_eq!(band.stop(10), Some(BLUE));
    assert_eq!(band.stop(15), Some(WHITE));
    assert_eq!(band.stop(16), None);
}

#[test]
fn band_construction_is_deterministic() {
    let colors = [RED, YELLOW];
    assert_eq!(build_band(&colors), build_band(&colors));
    assert_eq!(
        build_band(&colors).unwrap(),
        Swatch::Double(RED, YELLOW).band()
    );
}

#[test]
fn color_count_outside_one_to_four_is_rejected() {
    assert_eq!(build_band(&[]), Err(BandError::NoColors));
    assert_eq!(
        build_band(&[RED, GREEN, BLUE, WHITE, YELLOW]),
        Err(BandError::TooManyColors(5))
    );
}

#[test]
fn default_band_is_dark() {
    assert_eq!(Band::default(), Band::solid(DARK));
}

#[test]
fn lerp_color_interpolates_each_channel() {
    let a = Rgb8::new(0, 100, 200);
    let b = Rgb8::new(100, 100, 0);
    assert_eq!(lerp_color(0.0, a, b), a);
    assert_eq!(lerp_color(1.0, a, b), b);
    assert_eq!(lerp_color(0.5, a, b), Rgb8::new(50, 100, 100));
}
