//! Test color generation
//!
//! Provides deterministic color sets for comparisons.

use oxcolor_core::Rgb;
use oxcolor_core::web::WEB_COLORS;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Grayscale ramp 0-255
    Grayscale,
    /// Hue ramp at full saturation and value
    HueRamp,
    /// Random 8-bit colors with seed
    Random(u64),
    /// Every entry of the web color table
    WebNamed,
    /// Saturated colors on the cube surface
    GamutBoundary,
}

/// Generate `count` colors following `pattern`
///
/// Fixed sets repeat to fill `count`.
pub fn generate_pattern(pattern: TestPattern, count: usize) -> Vec<Rgb> {
    match pattern {
        TestPattern::ColorCube => {
            let corners: [[u8; 3]; 8] = [
                [0, 0, 0],
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 255, 255],
            ];
            cycle(&corners, count)
        }
        TestPattern::Grayscale => (0..count)
            .map(|i| {
                let v = ((i as f64 / count.max(1) as f64) * 256.0) as u8;
                Rgb::from_u8(v, v, v)
            })
            .collect(),
        TestPattern::HueRamp => (0..count)
            .map(|i| hue_ramp_color(i as f64 / count.max(1) as f64 * 360.0))
            .collect(),
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| {
                    let mut rgb = [0u8; 3];
                    rng.fill_bytes(&mut rgb);
                    Rgb::from(rgb)
                })
                .collect()
        }
        TestPattern::WebNamed => {
            let named: Vec<[u8; 3]> = WEB_COLORS.iter().map(|&(_, rgb)| rgb).collect();
            cycle(&named, count)
        }
        TestPattern::GamutBoundary => {
            let colors: [[u8; 3]; 8] = [
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 128, 0],
                [128, 0, 255],
            ];
            cycle(&colors, count)
        }
    }
}

fn cycle(colors: &[[u8; 3]], count: usize) -> Vec<Rgb> {
    colors
        .iter()
        .cycle()
        .take(count)
        .map(|&rgb| Rgb::from(rgb))
        .collect()
}

/// Fully saturated 8-bit color for a hue, computed independently of oxcolor
fn hue_ramp_color(h: f64) -> Rgb {
    let x = 1.0 - ((h / 60.0) % 2.0 - 1.0).abs();

    let (r, g, b) = if h < 60.0 {
        (1.0, x, 0.0)
    } else if h < 120.0 {
        (x, 1.0, 0.0)
    } else if h < 180.0 {
        (0.0, 1.0, x)
    } else if h < 240.0 {
        (0.0, x, 1.0)
    } else if h < 300.0 {
        (x, 0.0, 1.0)
    } else {
        (1.0, 0.0, x)
    };

    Rgb::from_u8((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}
