//! Named colormaps
//!
//! A colormap is a short list of colour stops sampled by linear
//! interpolation. The same stops feed plotly colour scales, so sampled
//! colours and rendered plots agree.

use std::fmt;
use std::str::FromStr;

use ndarray::Array1;
use plotly::common::{ColorScale, ColorScaleElement};
use serde::{Deserialize, Serialize};

use crate::VizError;

/// RGBA colour with channels in [0, 1]
pub type Rgba = (f64, f64, f64, f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    Viridis,
    YlOrBr,
    Greys,
}

// 9 evenly spaced stops per palette
const VIRIDIS: [[u8; 3]; 9] = [
    [0x44, 0x01, 0x54],
    [0x47, 0x2d, 0x7b],
    [0x3b, 0x52, 0x8b],
    [0x2c, 0x72, 0x8e],
    [0x21, 0x91, 0x8c],
    [0x28, 0xae, 0x80],
    [0x5e, 0xc9, 0x62],
    [0xad, 0xdc, 0x30],
    [0xfd, 0xe7, 0x25],
];

const YL_OR_BR: [[u8; 3]; 9] = [
    [0xff, 0xff, 0xe5],
    [0xff, 0xf7, 0xbc],
    [0xfe, 0xe3, 0x91],
    [0xfe, 0xc4, 0x4f],
    [0xfe, 0x99, 0x29],
    [0xec, 0x70, 0x14],
    [0xcc, 0x4c, 0x02],
    [0x99, 0x34, 0x04],
    [0x66, 0x25, 0x06],
];

const GREYS: [[u8; 3]; 9] = [
    [0xff, 0xff, 0xff],
    [0xf0, 0xf0, 0xf0],
    [0xd9, 0xd9, 0xd9],
    [0xbd, 0xbd, 0xbd],
    [0x96, 0x96, 0x96],
    [0x73, 0x73, 0x73],
    [0x52, 0x52, 0x52],
    [0x25, 0x25, 0x25],
    [0x00, 0x00, 0x00],
];

impl Palette {
    fn stops(self) -> &'static [[u8; 3]] {
        match self {
            Palette::Viridis => &VIRIDIS,
            Palette::YlOrBr => &YL_OR_BR,
            Palette::Greys => &GREYS,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Palette::Viridis => "viridis",
            Palette::YlOrBr => "YlOrBr",
            Palette::Greys => "Greys",
        }
    }
}

/// A palette, optionally reversed (`viridis_r`, `YlOrBr_r`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colormap {
    pub palette: Palette,
    pub reversed: bool,
}

impl Colormap {
    pub const fn new(palette: Palette, reversed: bool) -> Self {
        Self { palette, reversed }
    }

    /// Colour at position `t`; `t` is clamped to [0, 1]
    pub fn sample(&self, t: f64) -> Rgba {
        let stops = self.palette.stops();
        let t = t.clamp(0.0, 1.0);
        let t = if self.reversed { 1.0 - t } else { t };

        let position = t * (stops.len() - 1) as f64;
        let lower = (position.floor() as usize).min(stops.len() - 2);
        let frac = position - lower as f64;

        let channel = |c: usize| {
            let a = stops[lower][c] as f64;
            let b = stops[lower + 1][c] as f64;
            (a + (b - a) * frac) / 255.0
        };
        (channel(0), channel(1), channel(2), 1.0)
    }

    /// Plotly colour scale with one element per palette stop
    pub fn to_color_scale(&self) -> ColorScale {
        let n = self.palette.stops().len();
        let elements = (0..n)
            .map(|k| {
                let position = k as f64 / (n - 1) as f64;
                ColorScaleElement(position, rgb_string(self.sample(position)))
            })
            .collect();
        ColorScale::Vector(elements)
    }
}

/// CSS `rgb(...)` notation for a colour
pub fn rgb_string((r, g, b, _): Rgba) -> String {
    let to_byte = |v: f64| (v * 255.0).round() as u8;
    format!("rgb({}, {}, {})", to_byte(r), to_byte(g), to_byte(b))
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.reversed { "_r" } else { "" };
        write!(f, "{}{}", self.palette.name(), suffix)
    }
}

impl FromStr for Colormap {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (base, reversed) = match trimmed.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (trimmed, false),
        };
        let palette = [Palette::Viridis, Palette::YlOrBr, Palette::Greys]
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(base))
            .ok_or_else(|| VizError::UnknownColormap(s.to_string()))?;
        Ok(Self::new(palette, reversed))
    }
}

impl TryFrom<String> for Colormap {
    type Error = VizError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Colormap> for String {
    fn from(value: Colormap) -> Self {
        value.to_string()
    }
}

/// Which part of a colormap [`create_discrete_cmap`] samples from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscreteColormapConfig {
    pub name: Colormap,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl Default for DiscreteColormapConfig {
    fn default() -> Self {
        Self {
            name: Colormap::new(Palette::Viridis, true),
            lower_bound: 0.05,
            upper_bound: 0.9,
        }
    }
}

/// Sample `n` evenly spaced colours between the configured bounds of a colormap
///
/// Useful to colour several optima or several curves consistently.
pub fn create_discrete_cmap(n: usize, config: &DiscreteColormapConfig) -> Vec<Rgba> {
    match n {
        0 => Vec::new(),
        1 => vec![config.name.sample(config.lower_bound)],
        _ => Array1::linspace(config.lower_bound, config.upper_bound, n)
            .iter()
            .map(|&t| config.name.sample(t))
            .collect(),
    }
}
