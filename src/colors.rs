//! Color catalog and interpolation helpers.
//!
//! Shows only ever reference colors by name from a fixed catalog, so this
//! module holds the catalog together with the 8-bit interpolation primitives
//! used to blend palettes.

use palette::Srgb;

/// 8-bit RGB triple.
pub type Rgb8 = Srgb<u8>;

pub const DARK: Rgb8 = Rgb8::new(0x00, 0x00, 0x00);
pub const WHITE: Rgb8 = Rgb8::new(0xFF, 0xFF, 0xFF);
pub const RED: Rgb8 = Rgb8::new(0xFF, 0x00, 0x00);
pub const YELLOW: Rgb8 = Rgb8::new(0xFF, 0xFF, 0x00);
pub const GREEN: Rgb8 = Rgb8::new(0x00, 0xFF, 0x00);
pub const CYAN: Rgb8 = Rgb8::new(0x00, 0xFF, 0xFF);
pub const BLUE: Rgb8 = Rgb8::new(0x00, 0x00, 0xFF);
pub const MAGENTA: Rgb8 = Rgb8::new(0xFF, 0x00, 0xFF);
pub const ORANGE: Rgb8 = Rgb8::new(0xFF, 0x7F, 0x00);

/// A base color of the show catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NamedColor {
    Dark,
    White,
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
    Orange,
}

impl NamedColor {
    /// Returns the RGB value of this catalog color.
    pub const fn rgb(self) -> Rgb8 {
        match self {
            NamedColor::Dark => DARK,
            NamedColor::White => WHITE,
            NamedColor::Red => RED,
            NamedColor::Yellow => YELLOW,
            NamedColor::Green => GREEN,
            NamedColor::Cyan => CYAN,
            NamedColor::Blue => BLUE,
            NamedColor::Magenta => MAGENTA,
            NamedColor::Orange => ORANGE,
        }
    }

    /// Full lowercase name, e.g. `"magenta"`.
    pub const fn name(self) -> &'static str {
        match self {
            NamedColor::Dark => "dark",
            NamedColor::White => "white",
            NamedColor::Red => "red",
            NamedColor::Yellow => "yellow",
            NamedColor::Green => "green",
            NamedColor::Cyan => "cyan",
            NamedColor::Blue => "blue",
            NamedColor::Magenta => "magenta",
            NamedColor::Orange => "orange",
        }
    }

    /// Single-letter short code used in blend names (`"wr"`, `"wrb"`).
    pub const fn initial(self) -> &'static str {
        match self {
            NamedColor::Dark => "d",
            NamedColor::White => "w",
            NamedColor::Red => "r",
            NamedColor::Yellow => "y",
            NamedColor::Green => "g",
            NamedColor::Cyan => "c",
            NamedColor::Blue => "b",
            NamedColor::Magenta => "m",
            NamedColor::Orange => "o",
        }
    }
}

/// Linearly interpolates between two 8-bit channel values.
///
/// `mix = 0.0` yields `a`, `mix = 1.0` yields `b`. The result is rounded to the
/// nearest integer. Values of `mix` outside `0.0..=1.0` extrapolate and
/// saturate at the channel bounds.
#[inline]
pub fn lerp(mix: f32, a: u8, b: u8) -> u8 {
    let value = a as f32 * (1.0 - mix) + b as f32 * mix;
    (value + 0.5) as u8
}

/// Applies [`lerp`] to each channel independently.
#[inline]
pub fn lerp_color(mix: f32, c1: Rgb8, c2: Rgb8) -> Rgb8 {
    Rgb8::new(
        lerp(mix, c1.red, c2.red),
        lerp(mix, c1.green, c2.green),
        lerp(mix, c1.blue, c2.blue),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_are_exact() {
        for &(a, b) in &[(0u8, 255u8), (255, 0), (17, 200), (128, 128)] {
            assert_eq!(lerp(0.0, a, b), a);
            assert_eq!(lerp(1.0, a, b), b);
        }
    }

    #[test]
    fn lerp_rounds_to_nearest() {
        assert_eq!(lerp(0.5, 0, 255), 128);
        assert_eq!(lerp(0.5, 0, 1), 1);
        assert_eq!(lerp(0.25, 0, 10), 3);
    }

    #[test]
    fn lerp_out_of_range_saturates() {
        assert_eq!(lerp(2.0, 0, 255), 255);
        assert_eq!(lerp(-1.0, 0, 255), 0);
    }

    #[test]
    fn named_colors_resolve_to_catalog() {
        assert_eq!(NamedColor::Orange.rgb(), ORANGE);
        assert_eq!(NamedColor::Dark.rgb(), DARK);
        assert_eq!(NamedColor::Blue.initial(), "b");
    }
}
