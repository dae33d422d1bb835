//! Reference implementation wrappers
//!
//! Conversions computed by the `palette` crate, translated into oxcolor
//! types and scales (RGB 0-255, hue in degrees, unrounded).

use oxcolor_core::{Hsv, Rgb};
use palette::{FromColor, Srgb};

type PaletteHsv = palette::Hsv<palette::encoding::Srgb, f64>;

/// RGB → HSV using palette
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let srgb = Srgb::new(rgb.r / 255.0, rgb.g / 255.0, rgb.b / 255.0);
    let hsv = PaletteHsv::from_color(srgb);
    Hsv::new(hsv.hue.into_positive_degrees(), hsv.saturation, hsv.value)
}

/// HSV → RGB using palette
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let srgb: Srgb<f64> = Srgb::from_color(PaletteHsv::new(hsv.h, hsv.s, hsv.v));
    Rgb::new(srgb.red * 255.0, srgb.green * 255.0, srgb.blue * 255.0)
}

/// RGB → `#rrggbb` using palette's hex formatting
pub fn rgb_to_hex(rgb: Rgb) -> String {
    let [r, g, b] = rgb.to_u8();
    format!("#{:x}", Srgb::new(r, g, b))
}

/// Hex → RGB using palette's hex parser
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, String> {
    hex.parse::<Srgb<u8>>()
        .map(|c| Rgb::from_u8(c.red, c.green, c.blue))
        .map_err(|e| format!("palette hex parse: {e:?}"))
}
