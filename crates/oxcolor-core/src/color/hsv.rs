//! HSV Color Space

use std::fmt;

/// Hue, saturation, value
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue in degrees (0 to 360, exclusive)
    pub h: f64,
    /// Saturation (0 to 1)
    pub s: f64,
    /// Value (0 to 1)
    pub v: f64,
}

impl Hsv {
    /// Create a new HSV color
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            h: arr[0],
            s: arr[1],
            v: arr[2],
        }
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.h, self.s, self.v]
    }

    /// Hue sector index (0-5) used when rebuilding RGB, if the hue is valid
    #[inline]
    pub fn sector(&self) -> Option<u8> {
        let sector = self.h / 60.0;
        if (0.0..6.0).contains(&sector) {
            Some(sector as u8)
        } else {
            None
        }
    }
}

impl From<[f64; 3]> for Hsv {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Hsv> for [f64; 3] {
    fn from(hsv: Hsv) -> Self {
        hsv.to_array()
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.h, self.s, self.v)
    }
}
