// src/colormap/mod.rs

//! Color maps: functions from a normalized position to a [`Color`].
//!
//! Builtin maps are evaluated through lookup tables with the same indexing rule as
//! matplotlib's `Colormap.__call__`: a table of `n` colors answers `x` with entry
//! `floor(x * n)`, clamped to the table, so `x = 1.0` lands on the last entry.
//! Tables are filled from one of the [`Source`] descriptions in [`data`].

pub mod data;
pub mod listed;

use crate::color::Color;
use crate::error::{Error, Result};

/// Number of entries in the table of a continuous color map.
pub const LUT_SIZE: usize = 256;

/// Color returned for NaN positions.
pub const BAD_COLOR: Color = Color::Rgba(0.0, 0.0, 0.0, 0.0);

/// A named gradient evaluated at a position in `[0, 1]`.
pub trait ColorMap: Send + Sync {
    fn at(&self, x: f64) -> Color;
}

impl<F> ColorMap for F
where
    F: Fn(f64) -> Color + Send + Sync,
{
    fn at(&self, x: f64) -> Color {
        self(x)
    }
}

/// One stop of a channel: `(x, value left of x, value right of x)`.
pub type Stop = (f64, f64, f64);

/// Per-channel piecewise linear segment data.
#[derive(Debug)]
pub struct Segments {
    pub red: &'static [Stop],
    pub green: &'static [Stop],
    pub blue: &'static [Stop],
}

/// How the table of a builtin color map is produced.
#[derive(Clone, Copy)]
pub enum Source {
    /// Independent channel segments.
    Segments(&'static Segments),
    /// Colors pinned at positions, linear in between.
    Anchors(&'static [(f64, [f64; 3])]),
    /// Hex colors spread evenly over `[0, 1]`, linear in between.
    EvenHex(&'static [&'static str]),
    /// Hex colors used as the table itself (qualitative maps).
    Listed(&'static [&'static str]),
    /// RGB rows used as the table itself.
    Table(&'static [[f64; 3]]),
    /// Gnuplot palette formula indices for red, green and blue.
    Gnuplot([u8; 3]),
    /// One function per channel, clipped to `[0, 1]`.
    Functions([fn(f64) -> f64; 3]),
    /// Tables derived from other builtins.
    Custom(fn() -> Lut),
}

impl Source {
    pub fn build(&self) -> Result<Lut> {
        let lut = match *self {
            Source::Segments(segments) => Lut::from_segments(LUT_SIZE, segments),
            Source::Anchors(anchors) => Lut::from_anchors(LUT_SIZE, anchors),
            Source::EvenHex(hex) => {
                let colors = parse_hex_list(hex)?;
                let last = (colors.len().max(2) - 1) as f64;
                let anchors: Vec<(f64, [f64; 3])> = colors
                    .iter()
                    .enumerate()
                    .map(|(i, c)| (i as f64 / last, c.rgb()))
                    .collect();
                Lut::from_anchors(LUT_SIZE, &anchors)
            }
            Source::Listed(hex) => Lut::from_colors(parse_hex_list(hex)?),
            Source::Table(rows) => Lut::from_colors(
                rows.iter()
                    .map(|&[r, g, b]| Color::Rgb(r, g, b))
                    .collect(),
            ),
            Source::Gnuplot([r, g, b]) => Lut::from_fn(LUT_SIZE, |x| {
                Color::Rgb(gfunc(r, x), gfunc(g, x), gfunc(b, x))
            }),
            Source::Functions([r, g, b]) => {
                Lut::from_fn(LUT_SIZE, |x| Color::Rgb(r(x), g(x), b(x)))
            }
            Source::Custom(build) => build(),
        };
        Ok(lut)
    }
}

fn parse_hex_list(hex: &[&str]) -> Result<Vec<Color>> {
    hex.iter()
        .map(|literal| {
            csscolorparser::parse(literal)
                .map(|c| {
                    let [r, g, b, _] = c.to_rgba8();
                    Color::Rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
                })
                .map_err(|e| Error::InvalidColor {
                    literal: literal.to_string(),
                    reason: e.to_string(),
                })
        })
        .collect()
}

/// A color lookup table.
#[derive(Debug, Clone, PartialEq)]
pub struct Lut {
    colors: Vec<Color>,
}

impl Lut {
    /// Uses `colors` as the table itself.
    pub fn from_colors(colors: Vec<Color>) -> Self {
        Lut { colors }
    }

    /// Samples `f` at `n` evenly spaced positions, clamping the results.
    pub fn from_fn(n: usize, f: impl Fn(f64) -> Color) -> Self {
        let last = n.saturating_sub(1).max(1) as f64;
        let colors = (0..n).map(|i| f(i as f64 / last).clamped()).collect();
        Lut { colors }
    }

    pub fn from_segments(n: usize, segments: &Segments) -> Self {
        let red = lookup_table(n, segments.red);
        let green = lookup_table(n, segments.green);
        let blue = lookup_table(n, segments.blue);
        let colors = (0..n)
            .map(|i| Color::Rgb(red[i], green[i], blue[i]))
            .collect();
        Lut { colors }
    }

    pub fn from_anchors(n: usize, anchors: &[(f64, [f64; 3])]) -> Self {
        let channel = |c: usize| -> Vec<Stop> {
            anchors
                .iter()
                .map(|&(x, rgb)| (x, rgb[c], rgb[c]))
                .collect()
        };
        let (red, green, blue) = (channel(0), channel(1), channel(2));
        let red = lookup_table(n, &red);
        let green = lookup_table(n, &green);
        let blue = lookup_table(n, &blue);
        let colors = (0..n)
            .map(|i| Color::Rgb(red[i], green[i], blue[i]))
            .collect();
        Lut { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn reversed(mut self) -> Self {
        self.colors.reverse();
        self
    }

    /// Rotates the table left so entry `k` becomes the first one.
    pub fn rolled(mut self, k: usize) -> Self {
        if !self.colors.is_empty() {
            let k = k % self.colors.len();
            self.colors.rotate_left(k);
        }
        self
    }

    fn index(&self, x: f64) -> usize {
        let n = self.colors.len();
        if x <= 0.0 {
            0
        } else if x >= 1.0 {
            n - 1
        } else {
            ((x * n as f64) as usize).min(n - 1)
        }
    }
}

impl ColorMap for Lut {
    fn at(&self, x: f64) -> Color {
        if x.is_nan() || self.colors.is_empty() {
            return BAD_COLOR;
        }
        self.colors[self.index(x)]
    }
}

/// Evaluates one channel of segment data at `n` evenly spaced positions.
///
/// The first entry takes the right-hand value of the first stop and the last entry the
/// left-hand value of the last stop; in between, values are interpolated from the
/// right side of the stop below to the left side of the stop above.
pub fn lookup_table(n: usize, stops: &[Stop]) -> Vec<f64> {
    let (Some(first), Some(last_stop)) = (stops.first(), stops.last()) else {
        return vec![0.0; n];
    };
    if n == 1 {
        return vec![last_stop.1.clamp(0.0, 1.0)];
    }
    let last = n - 1;
    (0..n)
        .map(|i| {
            let value = if i == 0 {
                first.2
            } else if i == last {
                last_stop.1
            } else {
                let x = i as f64 / last as f64;
                let k = stops
                    .iter()
                    .position(|s| s.0 >= x)
                    .unwrap_or(stops.len() - 1)
                    .max(1);
                let (x0, _, left) = stops[k - 1];
                let (x1, right, _) = stops[k];
                if x1 > x0 {
                    left + (x - x0) / (x1 - x0) * (right - left)
                } else {
                    right
                }
            };
            value.clamp(0.0, 1.0)
        })
        .collect()
}

/// Gnuplot's `rgbformulae` palette functions, addressed by index.
pub fn gfunc(index: u8, x: f64) -> f64 {
    use std::f64::consts::PI;
    match index {
        0 => 0.0,
        1 => 0.5,
        2 => 1.0,
        3 => x,
        4 => x.powi(2),
        5 => x.powi(3),
        6 => x.powi(4),
        7 => x.sqrt(),
        8 => x.sqrt().sqrt(),
        9 => (x * PI / 2.0).sin(),
        10 => (x * PI / 2.0).cos(),
        11 => (x - 0.5).abs(),
        12 => (2.0 * x - 1.0).powi(2),
        13 => (x * PI).sin(),
        14 => (x * PI).cos().abs(),
        15 => (2.0 * x * PI).sin(),
        16 => (2.0 * x * PI).cos(),
        17 => (2.0 * x * PI).sin().abs(),
        18 => (2.0 * x * PI).cos().abs(),
        19 => (4.0 * x * PI).sin().abs(),
        20 => (4.0 * x * PI).cos().abs(),
        21 => 3.0 * x,
        22 => 3.0 * x - 1.0,
        23 => 3.0 * x - 2.0,
        24 => (3.0 * x - 1.0).abs(),
        25 => (3.0 * x - 2.0).abs(),
        26 => (3.0 * x - 1.0) / 2.0,
        27 => (3.0 * x - 2.0) / 2.0,
        28 => ((3.0 * x - 1.0) / 2.0).abs(),
        29 => ((3.0 * x - 2.0) / 2.0).abs(),
        30 => x / 0.32 - 0.78125,
        31 => 2.0 * x - 0.84,
        32 => {
            if x < 0.25 {
                4.0 * x
            } else if x < 0.92 {
                -2.0 * x + 1.84
            } else {
                x / 0.08 - 11.5
            }
        }
        33 => (2.0 * x - 0.5).abs(),
        34 => 2.0 * x,
        35 => 2.0 * x - 0.5,
        36 => 2.0 * x - 1.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests;
