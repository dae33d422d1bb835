//! Color notations
//!
//! This module provides:
//! - RGB primitives (the canonical hub)
//! - YIQ luma/chroma coordinates
//! - HSV hue/saturation/value coordinates

pub mod hsv;
pub mod rgb;
pub mod yiq;

pub use hsv::Hsv;
pub use rgb::{CHANNEL_MAX, CHANNEL_MIN, Rgb};
pub use yiq::Yiq;
