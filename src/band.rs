//! 16-stop gradient palettes built from one to four colors.

use crate::colors::{DARK, Rgb8, lerp_color};

/// Number of color stops in a band.
pub const BAND_STOPS: usize = 16;

/// Number of stops in one repeated quadrant of a band.
pub const QUADRANT_STOPS: usize = BAND_STOPS / 4;

/// A 16-stop color gradient.
///
/// Bands are built from a four-stop pattern repeated across four equal
/// quadrants, so stop `i` always equals stop `i % 4`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    stops: [Rgb8; BAND_STOPS],
}

impl Band {
    /// Creates a band where every stop is `color`.
    pub const fn solid(color: Rgb8) -> Self {
        Self {
            stops: [color; BAND_STOPS],
        }
    }

    /// Creates a band by repeating a four-color pattern across all quadrants.
    pub fn from_quad(pattern: [Rgb8; QUADRANT_STOPS]) -> Self {
        Self {
            stops: core::array::from_fn(|i| pattern[i % QUADRANT_STOPS]),
        }
    }

    /// Creates a band from explicit stops.
    pub const fn from_stops(stops: [Rgb8; BAND_STOPS]) -> Self {
        Self { stops }
    }

    /// Returns all stops.
    pub fn stops(&self) -> &[Rgb8; BAND_STOPS] {
        &self.stops
    }

    /// Returns the stop at `index`, if in range.
    pub fn stop(&self, index: usize) -> Option<Rgb8> {
        self.stops.get(index).copied()
    }

    /// Returns one of the four quadrants (`0..4`).
    pub fn quadrant(&self, index: usize) -> Option<&[Rgb8]> {
        let start = index.checked_mul(QUADRANT_STOPS)?;
        self.stops.get(start..start.checked_add(QUADRANT_STOPS)?)
    }

    /// Blends every stop toward `other`.
    pub fn blend(&self, other: &Band, mix: f32) -> Band {
        Band {
            stops: core::array::from_fn(|i| lerp_color(mix, self.stops[i], other.stops[i])),
        }
    }
}

impl Default for Band {
    fn default() -> Self {
        Band::solid(DARK)
    }
}

/// The one to four source colors of a band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Swatch {
    Single(Rgb8),
    Double(Rgb8, Rgb8),
    /// Three colors; the fourth stop of each quadrant is dark.
    Triple(Rgb8, Rgb8, Rgb8),
    Quad(Rgb8, Rgb8, Rgb8, Rgb8),
}

impl Swatch {
    /// Builds the band for this swatch.
    pub fn band(&self) -> Band {
        match *self {
            Swatch::Single(a) => Band::solid(a),
            Swatch::Double(a, b) => Band::from_quad([a, b, a, b]),
            Swatch::Triple(a, b, c) => Band::from_quad([a, b, c, DARK]),
            Swatch::Quad(a, b, c, d) => Band::from_quad([a, b, c, d]),
        }
    }
}

impl TryFrom<&[Rgb8]> for Swatch {
    type Error = BandError;

    fn try_from(colors: &[Rgb8]) -> Result<Self, Self::Error> {
        match *colors {
            [] => Err(BandError::NoColors),
            [a] => Ok(Swatch::Single(a)),
            [a, b] => Ok(Swatch::Double(a, b)),
            [a, b, c] => Ok(Swatch::Triple(a, b, c)),
            [a, b, c, d] => Ok(Swatch::Quad(a, b, c, d)),
            _ => Err(BandError::TooManyColors(colors.len())),
        }
    }
}

/// Builds a band from a slice of one to four colors.
///
/// # Errors
/// * `NoColors` - The slice is empty
/// * `TooManyColors` - More than four colors were given
pub fn build_band(colors: &[Rgb8]) -> Result<Band, BandError> {
    Ok(Swatch::try_from(colors)?.band())
}

/// Band construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BandError {
    /// No colors provided.
    NoColors,

    /// More than four colors provided.
    TooManyColors(usize),
}

impl core::fmt::Display for BandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BandError::NoColors => write!(f, "a band needs at least one color"),
            BandError::TooManyColors(count) => {
                write!(f, "a band takes at most 4 colors, got {}", count)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BandError {}
