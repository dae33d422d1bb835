//! YIQ Color Space
//!
//! The NTSC luma/chrominance model.
//!
//! - Y: Luma, perceived brightness (0 to 1)
//! - I: In-phase chroma, orange-blue axis (-0.5957 to 0.5957)
//! - Q: Quadrature chroma, purple-green axis (-0.5226 to 0.5226)

use std::fmt;

/// YIQ color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Yiq {
    /// Luma (0 to 1)
    pub y: f64,
    /// In-phase chroma
    pub i: f64,
    /// Quadrature chroma
    pub q: f64,
}

impl Yiq {
    /// Create a new YIQ color
    #[inline]
    pub const fn new(y: f64, i: f64, q: f64) -> Self {
        Self { y, i, q }
    }

    /// Create YIQ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            y: arr[0],
            i: arr[1],
            q: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.y, self.i, self.q]
    }

    /// Check if approximately equal to another YIQ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.y - other.y).abs() < epsilon
            && (self.i - other.i).abs() < epsilon
            && (self.q - other.q).abs() < epsilon
    }
}

impl From<[f64; 3]> for Yiq {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Yiq> for [f64; 3] {
    fn from(yiq: Yiq) -> Self {
        yiq.to_array()
    }
}

impl fmt::Display for Yiq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.y, self.i, self.q)
    }
}
