//! Value to colour mapping for continuous and zoned colour bars
//!
//! Continuous scales normalise linearly between `vmin` and `vmax` and look
//! the result up in piecewise-linear channel tables. Zoned scales assign a
//! fixed colour to every half-open interval `[b_i, b_{i+1})` and clamp
//! values outside the boundaries to the first or last colour.

use crate::io::configuration::{BAD_COLOR, ZONE_BOUNDARIES, ZONE_COLORS};
use crate::io::error::{Result, invalid_parameter};
use image::Rgb;

/// Anchor points `(position, intensity)` of one colour channel
pub type Channel = &'static [(f64, f64)];

/// Piecewise-linear red, green and blue channel tables
#[derive(Debug, Clone, Copy)]
pub struct Segments {
    /// Red channel anchors
    pub red: Channel,
    /// Green channel anchors
    pub green: Channel,
    /// Blue channel anchors
    pub blue: Channel,
}

/// The classic "jet" map: dark blue through cyan and yellow to dark red
pub const JET: Segments = Segments {
    red: &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)],
    green: &[
        (0.0, 0.0),
        (0.125, 0.0),
        (0.375, 1.0),
        (0.64, 1.0),
        (0.91, 0.0),
        (1.0, 0.0),
    ],
    blue: &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)],
};

/// Maps scalar values to display colours
pub trait ColorScale {
    /// Colour for a single value
    fn color(&self, value: f64) -> Rgb<u8>;

    /// Value range covered by the colour bar
    fn range(&self) -> (f64, f64);

    /// Values labelled on the colour bar
    fn legend_ticks(&self) -> Vec<f64>;
}

// Linear interpolation between the two anchors surrounding `t`
fn sample_channel(anchors: Channel, t: f64) -> f64 {
    let mut previous = anchors.first().copied().unwrap_or((0.0, 0.0));
    for &(position, intensity) in anchors {
        if t <= position {
            let span = position - previous.0;
            if span <= 0.0 {
                return intensity;
            }
            let weight = (t - previous.0) / span;
            return previous.1 + weight * (intensity - previous.1);
        }
        previous = (position, intensity);
    }
    previous.1
}

fn to_byte(intensity: f64) -> u8 {
    (intensity.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Continuous colour scale over `[vmin, vmax]`
#[derive(Debug, Clone, Copy)]
pub struct ContinuousScale {
    vmin: f64,
    vmax: f64,
    segments: Segments,
}

impl ContinuousScale {
    /// Create a scale over `[vmin, vmax]` using the given channel tables
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is not finite or `vmin >= vmax`
    pub fn new(vmin: f64, vmax: f64, segments: Segments) -> Result<Self> {
        if !vmin.is_finite() {
            return Err(invalid_parameter("vmin", &vmin, &"must be finite"));
        }
        if !vmax.is_finite() {
            return Err(invalid_parameter("vmax", &vmax, &"must be finite"));
        }
        if vmin >= vmax {
            return Err(invalid_parameter(
                "vmax",
                &vmax,
                &format!("must be greater than vmin ({vmin})"),
            ));
        }
        Ok(Self {
            vmin,
            vmax,
            segments,
        })
    }

    /// Jet scale over `[vmin, vmax]`
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is not finite or `vmin >= vmax`
    pub fn jet(vmin: f64, vmax: f64) -> Result<Self> {
        Self::new(vmin, vmax, JET)
    }

    /// Position of `value` on the scale, clamped to `[0, 1]`
    pub fn normalize(&self, value: f64) -> f64 {
        ((value - self.vmin) / (self.vmax - self.vmin)).clamp(0.0, 1.0)
    }
}

impl ColorScale for ContinuousScale {
    fn color(&self, value: f64) -> Rgb<u8> {
        if value.is_nan() {
            return Rgb(BAD_COLOR);
        }
        let t = self.normalize(value);
        Rgb([
            to_byte(sample_channel(self.segments.red, t)),
            to_byte(sample_channel(self.segments.green, t)),
            to_byte(sample_channel(self.segments.blue, t)),
        ])
    }

    fn range(&self) -> (f64, f64) {
        (self.vmin, self.vmax)
    }

    fn legend_ticks(&self) -> Vec<f64> {
        const DIVISIONS: usize = 6;
        let step = (self.vmax - self.vmin) / DIVISIONS as f64;
        (0..=DIVISIONS)
            .map(|i| (i as f64).mul_add(step, self.vmin))
            .collect()
    }
}

/// Where a value falls relative to the zone boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// Below the first boundary
    Under,
    /// Inside zone `i`, i.e. `[b_i, b_{i+1})`
    Zone(usize),
    /// At or above the last boundary
    Over,
    /// Not a number
    Bad,
}

/// Discrete colour scale with one colour per boundary interval
#[derive(Debug, Clone)]
pub struct ZonedScale {
    boundaries: Vec<f64>,
    colors: Vec<Rgb<u8>>,
}

impl ZonedScale {
    /// Create a zoned scale; `boundaries` needs exactly one more entry
    /// than `colors` and must be strictly increasing
    ///
    /// # Errors
    ///
    /// Returns an error if the boundary count does not match the colours,
    /// a boundary is not finite, or the boundaries are not increasing
    pub fn new(boundaries: Vec<f64>, colors: Vec<Rgb<u8>>) -> Result<Self> {
        if colors.is_empty() || boundaries.len() != colors.len() + 1 {
            return Err(invalid_parameter(
                "boundaries",
                &format!("{boundaries:?}"),
                &format!("expected {} boundaries for {} colours", colors.len() + 1, colors.len()),
            ));
        }
        if boundaries.iter().any(|b| !b.is_finite()) {
            return Err(invalid_parameter(
                "boundaries",
                &format!("{boundaries:?}"),
                &"boundaries must be finite",
            ));
        }
        if boundaries.windows(2).any(|w| matches!(w, [lo, hi] if lo >= hi)) {
            return Err(invalid_parameter(
                "boundaries",
                &format!("{boundaries:?}"),
                &"boundaries must be strictly increasing",
            ));
        }
        Ok(Self { boundaries, colors })
    }

    /// The three-zone growth scale: `[0,2)`, `[2,5)` and `[5,10)`
    pub fn grow_season() -> Self {
        Self {
            boundaries: ZONE_BOUNDARIES.to_vec(),
            colors: ZONE_COLORS.iter().copied().map(Rgb).collect(),
        }
    }

    /// Classify a value against the boundaries
    pub fn bucket(&self, value: f64) -> Bucket {
        if value.is_nan() {
            return Bucket::Bad;
        }
        let (Some(&first), Some(&last)) = (self.boundaries.first(), self.boundaries.last()) else {
            return Bucket::Bad;
        };
        if value < first {
            return Bucket::Under;
        }
        if value >= last {
            return Bucket::Over;
        }
        self.boundaries
            .windows(2)
            .position(|w| matches!(w, [lo, hi] if value >= *lo && value < *hi))
            .map_or(Bucket::Over, Bucket::Zone)
    }
}

impl ColorScale for ZonedScale {
    fn color(&self, value: f64) -> Rgb<u8> {
        let index = match self.bucket(value) {
            Bucket::Bad => return Rgb(BAD_COLOR),
            Bucket::Under => 0,
            Bucket::Zone(i) => i,
            Bucket::Over => self.colors.len().saturating_sub(1),
        };
        self.colors.get(index).copied().unwrap_or(Rgb(BAD_COLOR))
    }

    fn range(&self) -> (f64, f64) {
        (
            self.boundaries.first().copied().unwrap_or_default(),
            self.boundaries.last().copied().unwrap_or_default(),
        )
    }

    fn legend_ticks(&self) -> Vec<f64> {
        self.boundaries.clone()
    }
}
