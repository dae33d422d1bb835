//! Helpers built on the conversion engine
//!
//! - Text color selection for readability over a background
//! - Hex minification
//! - Linear color runs between two colors

use crate::Color;
use crate::color::Rgb;
use crate::convert::{rgb_to_yiq, round3};
use crate::{Error, Result};

/// Pick black or white text for a background
///
/// See [`text_color_with`].
pub fn text_color(background: Rgb) -> Rgb {
    text_color_with(background, Rgb::BLACK, Rgb::WHITE)
}

/// Pick `dark` or `light` text for a background
///
/// Returns `light` when the background luma is at most half the luma of
/// white, `dark` otherwise. The threshold always comes from white, not from
/// `light`.
pub fn text_color_with(background: Rgb, dark: Rgb, light: Rgb) -> Rgb {
    let threshold = rgb_to_yiq(Rgb::WHITE).y / 2.0;
    if rgb_to_yiq(background).y <= threshold {
        light
    } else {
        dark
    }
}

/// Shorten a 6-digit hex string to 3 digits when possible
///
/// 3-digit input is returned unchanged, as is 6-digit input whose channels
/// do not repeat their digit (`#f235aa`).
///
/// # Errors
///
/// [`Error::MalformedHex`] for any other digit count.
pub fn minify_hex(hex: &str) -> Result<String> {
    let digits = hex.trim_matches('#');
    match digits.chars().count() {
        3 => Ok(hex.to_owned()),
        6 => Ok(minify_digits(digits).unwrap_or_else(|| hex.to_owned())),
        _ => Err(Error::MalformedHex(hex.to_owned())),
    }
}

/// `#abc` for the six digits `aabbcc`, ignoring case
pub(crate) fn minify_digits(digits: &str) -> Option<String> {
    let chars: Vec<char> = digits.chars().collect();
    let [r1, r2, g1, g2, b1, b2] = chars.as_slice() else {
        return None;
    };

    let pairs = [(r1, r2), (g1, g2), (b1, b2)];
    if pairs.iter().all(|(a, b)| a.eq_ignore_ascii_case(b)) {
        Some(format!("#{r1}{g1}{b1}"))
    } else {
        None
    }
}

/// Interpolate between two colors in `steps` equal increments
///
/// Produces the `steps - 1` triples strictly between `start` and `end`,
/// bracketed by `start` and `end` themselves when `inclusive` is set.
/// Channels are computed in floating point and rounded to 3 decimals.
///
/// # Errors
///
/// [`Error::InvalidSteps`] when `steps` is 0.
pub fn color_run(start: Rgb, end: Rgb, steps: usize, inclusive: bool) -> Result<Vec<Rgb>> {
    if steps == 0 {
        return Err(Error::InvalidSteps(steps));
    }

    let n = steps as f64;
    let step = end.zip_with(start, |e, s| (e - s) / n);

    let mut run = Vec::with_capacity(run_len(steps, inclusive));
    if inclusive {
        run.push(start);
    }
    for k in 1..steps {
        let k = k as f64;
        run.push(start.zip_with(step, |s, d| round3(s + k * d)));
    }
    if inclusive {
        run.push(end);
    }

    Ok(run)
}

/// Number of triples [`color_run`] produces
fn run_len(steps: usize, inclusive: bool) -> usize {
    let between = steps.saturating_sub(1);
    if inclusive {
        between.saturating_add(2)
    } else {
        between
    }
}

/// [`color_run`], with every triple wrapped in a [`Color`]
pub fn color_run_colors(
    start: Rgb,
    end: Rgb,
    steps: usize,
    inclusive: bool,
) -> Result<Vec<Color>> {
    color_run(start, end, steps, inclusive).map(|run| run.into_iter().map(Color::new).collect())
}
