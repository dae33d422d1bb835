//! Notation-tagged color values
//!
//! [`ColorValue`] holds a color in any supported notation and converts it
//! to any other through the RGB hub.

use std::fmt;

use crate::Result;
use crate::color::{Hsv, Rgb, Yiq};
use crate::convert::{
    hex_to_rgb, hsv_to_rgb, rgb_to_hex, rgb_to_hsv, rgb_to_web, rgb_to_yiq, web_to_rgb,
    yiq_to_rgb,
};

/// Supported color notations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    /// Red, green, blue on the 0-255 scale
    Rgb,
    /// `#rrggbb` or `#rgb`
    Hex,
    /// Well-known name, or hex
    Web,
    /// Luma and chrominance
    Yiq,
    /// Hue, saturation, value
    Hsv,
}

impl Format {
    /// All notations, RGB first
    pub const ALL: [Format; 5] = [
        Format::Rgb,
        Format::Hex,
        Format::Web,
        Format::Yiq,
        Format::Hsv,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Format::Rgb => "rgb",
            Format::Hex => "hex",
            Format::Web => "web",
            Format::Yiq => "yiq",
            Format::Hsv => "hsv",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A color in one specific notation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "format", content = "value", rename_all = "lowercase"))]
pub enum ColorValue {
    Rgb(Rgb),
    Hex(String),
    Web(String),
    Yiq(Yiq),
    Hsv(Hsv),
}

impl ColorValue {
    /// Project an RGB triple into `format`
    pub fn from_rgb(rgb: Rgb, format: Format) -> Self {
        match format {
            Format::Rgb => Self::Rgb(rgb),
            Format::Hex => Self::Hex(rgb_to_hex(rgb)),
            Format::Web => Self::Web(rgb_to_web(rgb)),
            Format::Yiq => Self::Yiq(rgb_to_yiq(rgb)),
            Format::Hsv => Self::Hsv(rgb_to_hsv(rgb)),
        }
    }

    pub fn format(&self) -> Format {
        match self {
            Self::Rgb(_) => Format::Rgb,
            Self::Hex(_) => Format::Hex,
            Self::Web(_) => Format::Web,
            Self::Yiq(_) => Format::Yiq,
            Self::Hsv(_) => Format::Hsv,
        }
    }

    /// Resolve to the RGB hub
    ///
    /// # Errors
    ///
    /// Malformed hex strings, unknown web names that are not hex either, and
    /// out-of-range hues.
    pub fn to_rgb(&self) -> Result<Rgb> {
        match self {
            Self::Rgb(rgb) => Ok(*rgb),
            Self::Hex(hex) => hex_to_rgb(hex),
            Self::Web(web) => web_to_rgb(web),
            Self::Yiq(yiq) => Ok(yiq_to_rgb(*yiq)),
            Self::Hsv(hsv) => hsv_to_rgb(*hsv),
        }
    }

    /// Convert to another notation
    ///
    /// Converting to the value's own notation returns it unchanged, without
    /// normalizing (a `#ABC` hex stays `#ABC`).
    pub fn convert(&self, to: Format) -> Result<Self> {
        if self.format() == to {
            return Ok(self.clone());
        }
        self.to_rgb().map(|rgb| Self::from_rgb(rgb, to))
    }
}

impl From<Rgb> for ColorValue {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<Yiq> for ColorValue {
    fn from(yiq: Yiq) -> Self {
        Self::Yiq(yiq)
    }
}

impl From<Hsv> for ColorValue {
    fn from(hsv: Hsv) -> Self {
        Self::Hsv(hsv)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(rgb) => fmt::Display::fmt(rgb, f),
            Self::Hex(s) | Self::Web(s) => f.write_str(s),
            Self::Yiq(yiq) => fmt::Display::fmt(yiq, f),
            Self::Hsv(hsv) => fmt::Display::fmt(hsv, f),
        }
    }
}
