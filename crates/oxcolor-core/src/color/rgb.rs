//! RGB Color Primitives
//!
//! The canonical triple every other notation is converted through.
//! Channels live on the 0-255 scale. Values are kept as `f64` so the
//! YIQ and HSV inverse conversions can hand back their 3-decimal results
//! without loss; integral values behave exactly like integers.

use std::fmt;

/// Lowest meaningful channel value
pub const CHANNEL_MIN: f64 = 0.0;

/// Highest meaningful channel value
pub const CHANNEL_MAX: f64 = 255.0;

/// RGB color on the 0-255 scale
///
/// The range is not enforced on construction. Conversions that need an
/// in-range value clamp on their own.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red component (0 to 255)
    pub r: f64,
    /// Green component (0 to 255)
    pub g: f64,
    /// Blue component (0 to 255)
    pub b: f64,
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create from 8-bit channels
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64,
            g: g as f64,
            b: b as f64,
        }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to 8-bit channels, truncating fractions and clamping to 0-255
    #[inline]
    pub fn to_u8(&self) -> [u8; 3] {
        self.to_array().map(truncate_channel)
    }

    /// The exact 8-bit triple, if every channel is an integer in 0-255
    ///
    /// Used for table lookups, which never snap to a nearby color.
    pub fn as_exact_u8(&self) -> Option<[u8; 3]> {
        let mut out = [0u8; 3];
        for (slot, c) in out.iter_mut().zip(self.to_array()) {
            if c.fract() != 0.0 || !(CHANNEL_MIN..=CHANNEL_MAX).contains(&c) {
                return None;
            }
            *slot = c as u8;
        }
        Some(out)
    }

    /// Check if all components are in [0, 255]
    #[inline]
    pub fn is_in_range(&self) -> bool {
        self.to_array()
            .iter()
            .all(|c| (CHANNEL_MIN..=CHANNEL_MAX).contains(c))
    }

    /// Mean of the three channels
    #[inline]
    pub fn mean(&self) -> f64 {
        (self.r + self.g + self.b) / 3.0
    }

    /// Apply `f` to every channel
    #[inline]
    pub fn map(self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }

    /// Combine two colors channel by channel
    #[inline]
    pub fn zip_with(self, other: Self, mut f: impl FnMut(f64, f64) -> f64) -> Self {
        Self {
            r: f(self.r, other.r),
            g: f(self.g, other.g),
            b: f(self.b, other.b),
        }
    }

    /// Black color
    pub const BLACK: Self = Self::new(CHANNEL_MIN, CHANNEL_MIN, CHANNEL_MIN);

    /// White color
    pub const WHITE: Self = Self::new(CHANNEL_MAX, CHANNEL_MAX, CHANNEL_MAX);
}

#[inline]
fn truncate_channel(c: f64) -> u8 {
    // `as` saturates and maps NaN to 0
    c.trunc().clamp(CHANNEL_MIN, CHANNEL_MAX) as u8
}

impl From<[f64; 3]> for Rgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_u8(arr[0], arr[1], arr[2])
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_u8(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_conversion() {
        let rgb = Rgb::from_u8(255, 128, 0);
        assert_eq!(rgb, Rgb::new(255.0, 128.0, 0.0));
        assert_eq!(rgb.to_u8(), [255, 128, 0]);
    }

    #[test]
    fn test_to_u8_truncates_and_clamps() {
        let rgb = Rgb::new(12.9, -4.0, 300.5);
        assert_eq!(rgb.to_u8(), [12, 0, 255]);
    }

    #[test]
    fn test_exact_u8() {
        assert_eq!(Rgb::new(1.0, 2.0, 3.0).as_exact_u8(), Some([1, 2, 3]));
        assert_eq!(Rgb::new(1.5, 2.0, 3.0).as_exact_u8(), None);
        assert_eq!(Rgb::new(256.0, 2.0, 3.0).as_exact_u8(), None);
        assert_eq!(Rgb::new(-1.0, 2.0, 3.0).as_exact_u8(), None);
    }

    #[test]
    fn test_in_range() {
        assert!(Rgb::WHITE.is_in_range());
        assert!(Rgb::BLACK.is_in_range());
        assert!(!Rgb::new(255.5, 0.0, 0.0).is_in_range());
        assert!(!Rgb::new(0.0, -0.1, 0.0).is_in_range());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::from_u8(10, 20, 30).to_string(), "(10, 20, 30)");
        assert_eq!(Rgb::new(0.5, 20.0, 30.0).to_string(), "(0.5, 20, 30)");
    }

    #[test]
    fn test_zip_with() {
        let sum = Rgb::from_u8(1, 2, 3).zip_with(Rgb::from_u8(10, 20, 30), |a, b| a + b);
        assert_eq!(sum, Rgb::from_u8(11, 22, 33));
    }
}
