//! Color equality strategies
//!
//! A [`Color`] compares itself to another color with the strategy it was
//! configured with. Only the left-hand operand's strategy is consulted, so
//! `a == b` and `b == a` may disagree when the two colors are configured
//! differently.

use crate::Color;
use crate::convert::{rgb_to_hex, rgb_to_hsv, rgb_to_web, rgb_to_yiq};

/// Predicate deciding whether two colors are equal
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Equality {
    /// All three channels match
    #[default]
    Rgb,
    /// Red channels match
    Red,
    /// Green channels match
    Green,
    /// Blue channels match
    Blue,
    /// Hex strings match (fractional channels are truncated first)
    Hex,
    /// Web notations match
    Web,
    /// Rounded YIQ coordinates match
    Yiq,
    /// Rounded HSV coordinates match
    Hsv,
    /// User-supplied predicate
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(fn(&Color, &Color) -> bool),
}

impl Equality {
    /// Apply the strategy to a pair of colors
    pub fn compare(&self, lhs: &Color, rhs: &Color) -> bool {
        match self {
            Self::Rgb => lhs.rgb() == rhs.rgb(),
            Self::Red => lhs.red() == rhs.red(),
            Self::Green => lhs.green() == rhs.green(),
            Self::Blue => lhs.blue() == rhs.blue(),
            Self::Hex => rgb_to_hex(lhs.rgb()) == rgb_to_hex(rhs.rgb()),
            Self::Web => rgb_to_web(lhs.rgb()) == rgb_to_web(rhs.rgb()),
            Self::Yiq => rgb_to_yiq(lhs.rgb()) == rgb_to_yiq(rhs.rgb()),
            Self::Hsv => rgb_to_hsv(lhs.rgb()) == rgb_to_hsv(rhs.rgb()),
            Self::Custom(f) => f(lhs, rhs),
        }
    }
}
