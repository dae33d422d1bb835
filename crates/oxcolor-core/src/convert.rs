//! Colorspace conversions
//!
//! Every ordered pair of {RGB, HEX, WEB, YIQ, HSV} has a function here.
//! Only five directions are closed-form math:
//!
//! - RGB → HEX, YIQ, HSV
//! - HEX → RGB
//! - YIQ → RGB, HSV → RGB
//!
//! WEB is a table lookup with a hex fallback, and every other pair composes
//! through RGB. YIQ and HSV results are rounded to 3 decimals, as are the
//! RGB values rebuilt from them.

use crate::color::{CHANNEL_MAX, Hsv, Rgb, Yiq};
use crate::web::{self, WebColor};
use crate::{Error, Result};

/// Round to 3 decimal places, normalizing negative zero
///
/// Rounds the exact binary value with ties to even: `0.8125` gives `0.812`.
#[inline]
pub(crate) fn round3(x: f64) -> f64 {
    format!("{x:.3}").parse::<f64>().map_or(x, |rounded| rounded + 0.0)
}

// ============================================================================
// From RGB
// ============================================================================

/// Convert RGB to a 6-digit lowercase hex string
///
/// Channels are truncated to integers and clamped to 0-255.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    let [r, g, b] = rgb.to_u8();
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Convert RGB to its WEB notation, keeping the name/hex distinction
pub fn rgb_to_web_color(rgb: Rgb) -> WebColor {
    match web::lookup_by_rgb(rgb) {
        Some(name) => WebColor::Named(name),
        None => {
            tracing::trace!(%rgb, "no web color name, falling back to hex");
            WebColor::Hex(rgb_to_hex(rgb))
        }
    }
}

/// Convert RGB to a web color name, or hex when the triple has no name
pub fn rgb_to_web(rgb: Rgb) -> String {
    rgb_to_web_color(rgb).into_string()
}

/// Convert RGB to YIQ
pub fn rgb_to_yiq(rgb: Rgb) -> Yiq {
    let [r, g, b] = rgb.to_array().map(|c| c / CHANNEL_MAX);

    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let i = 0.596 * r - 0.275 * g - 0.321 * b;
    let q = 0.212 * r - 0.528 * g + 0.311 * b;

    Yiq::new(round3(y), round3(i), round3(q))
}

/// Convert RGB to HSV
///
/// Black maps to `(0, 0, 0)` and achromatic colors get hue 0.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let [r, g, b] = rgb.to_array().map(|c| c / CHANNEL_MAX);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max <= 0.0 {
        return Hsv::new(0.0, 0.0, 0.0);
    }

    let v = max;
    let s = (max - min) / max;
    let delta = if max == min { 1.0 } else { max - min };

    let h = if r == max {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if g == max {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    // 359.9996 rounds up to 360
    let h = round3(h);
    let h = if h >= 360.0 { h - 360.0 } else { h };

    Hsv::new(h, round3(s), round3(v))
}

// ============================================================================
// From HEX
// ============================================================================

/// Parse a 3- or 6-digit hex string (with or without `#`) into RGB
///
/// # Errors
///
/// [`Error::MalformedHex`] for any other digit count and
/// [`Error::InvalidHexDigit`] for characters outside `[0-9a-fA-F]`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.trim_matches('#');

    let len = digits.chars().count();
    if len != 3 && len != 6 {
        tracing::debug!(hex, len, "rejecting hex color with unsupported length");
        return Err(Error::MalformedHex(hex.to_owned()));
    }

    let nibbles = digits
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(|| {
            tracing::debug!(hex, "rejecting hex color with non-hex digits");
            Error::InvalidHexDigit(hex.to_owned())
        })?;

    let rgb = match nibbles.as_slice() {
        // #abc is shorthand for #aabbcc
        &[r, g, b] => [r * 17, g * 17, b * 17],
        &[r1, r2, g1, g2, b1, b2] => [r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2],
        _ => return Err(Error::MalformedHex(hex.to_owned())),
    };

    Ok(Rgb::from(rgb))
}

/// Convert hex to a web color name, or normalized hex when there is none
pub fn hex_to_web(hex: &str) -> Result<String> {
    hex_to_rgb(hex).map(rgb_to_web)
}

/// Convert hex to YIQ
pub fn hex_to_yiq(hex: &str) -> Result<Yiq> {
    hex_to_rgb(hex).map(rgb_to_yiq)
}

/// Convert hex to HSV
pub fn hex_to_hsv(hex: &str) -> Result<Hsv> {
    hex_to_rgb(hex).map(rgb_to_hsv)
}

// ============================================================================
// From WEB
// ============================================================================

/// Resolve a web color name (any case) or hex string to RGB
///
/// # Errors
///
/// Names that are not in the table are parsed as hex, so the only failures
/// are the hex parse errors of [`hex_to_rgb`].
pub fn web_to_rgb(web: &str) -> Result<Rgb> {
    match web::lookup_by_name(web) {
        Some(rgb) => Ok(rgb),
        None => {
            tracing::trace!(web, "unknown web color name, parsing as hex");
            hex_to_rgb(web)
        }
    }
}

/// Convert a web color to hex
pub fn web_to_hex(web: &str) -> Result<String> {
    web_to_rgb(web).map(rgb_to_hex)
}

/// Convert a web color to YIQ
pub fn web_to_yiq(web: &str) -> Result<Yiq> {
    web_to_rgb(web).map(rgb_to_yiq)
}

/// Convert a web color to HSV
pub fn web_to_hsv(web: &str) -> Result<Hsv> {
    web_to_rgb(web).map(rgb_to_hsv)
}

// ============================================================================
// From YIQ
// ============================================================================

/// Convert YIQ to RGB
///
/// Each channel is clamped to [0, 1] before scaling, so out-of-gamut YIQ
/// values land on the RGB cube surface.
pub fn yiq_to_rgb(yiq: Yiq) -> Rgb {
    let Yiq { y, i, q } = yiq;

    let r = y + 0.956 * i + 0.621 * q;
    let g = y - 0.272 * i - 0.647 * q;
    let b = y - 1.108 * i + 1.705 * q;

    Rgb::new(r, g, b).map(|c| round3(c.clamp(0.0, 1.0) * CHANNEL_MAX))
}

/// Convert YIQ to hex
pub fn yiq_to_hex(yiq: Yiq) -> String {
    rgb_to_hex(yiq_to_rgb(yiq))
}

/// Convert YIQ to a web color
pub fn yiq_to_web(yiq: Yiq) -> String {
    rgb_to_web(yiq_to_rgb(yiq))
}

/// Convert YIQ to HSV
pub fn yiq_to_hsv(yiq: Yiq) -> Hsv {
    rgb_to_hsv(yiq_to_rgb(yiq))
}

// ============================================================================
// From HSV
// ============================================================================

/// Convert HSV to RGB
///
/// # Errors
///
/// [`Error::HueOutOfRange`] if the hue is negative, not finite, or 360 and
/// above. Hues are not wrapped, and a negative hue is not folded into the
/// red sector: only `0 <= h < 360` converts.
pub fn hsv_to_rgb(hsv: Hsv) -> Result<Rgb> {
    let Hsv { h, s, v } = hsv;

    let sector = hsv.sector().ok_or_else(|| {
        tracing::debug!(h, "hue outside of the six HSV sectors");
        Error::HueOutOfRange(h)
    })?;

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match sector {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        // sector() only yields 0..=5
        _ => (c, 0.0, x),
    };

    Ok(Rgb::new(r, g, b).map(|ch| round3((ch + m) * CHANNEL_MAX)))
}

/// Convert HSV to hex
pub fn hsv_to_hex(hsv: Hsv) -> Result<String> {
    hsv_to_rgb(hsv).map(rgb_to_hex)
}

/// Convert HSV to a web color
pub fn hsv_to_web(hsv: Hsv) -> Result<String> {
    hsv_to_rgb(hsv).map(rgb_to_web)
}

/// Convert HSV to YIQ
pub fn hsv_to_yiq(hsv: Hsv) -> Result<Yiq> {
    hsv_to_rgb(hsv).map(rgb_to_yiq)
}
