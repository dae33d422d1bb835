//! Random color generation
//!
//! Every generator has a `_with` variant taking an explicit [`Rng`], so
//! callers can seed it for reproducible output. The plain variants use the
//! thread-local generator.

use rand::Rng;

use crate::color::{CHANNEL_MAX, Rgb};
use crate::convert::{rgb_to_hex, rgb_to_web};

/// Uniformly random RGB color with integer channels
pub fn random_rgb() -> Rgb {
    random_rgb_with(&mut rand::thread_rng())
}

pub fn random_rgb_with<R: Rng>(rng: &mut R) -> Rgb {
    Rgb::from_u8(
        rng.gen_range(0..=u8::MAX),
        rng.gen_range(0..=u8::MAX),
        rng.gen_range(0..=u8::MAX),
    )
}

/// Uniformly random 6-digit hex color
pub fn random_hex() -> String {
    random_hex_with(&mut rand::thread_rng())
}

pub fn random_hex_with<R: Rng>(rng: &mut R) -> String {
    rgb_to_hex(random_rgb_with(rng))
}

/// Uniformly random web color (a name only when the triple has one)
pub fn random_web() -> String {
    random_web_with(&mut rand::thread_rng())
}

pub fn random_web_with<R: Rng>(rng: &mut R) -> String {
    rgb_to_web(random_rgb_with(rng))
}

/// Generate `amount` colors brightened by a random offset from `seed`
///
/// Each color scales every seed channel by the same ratio
/// `(base + offset) / base`, where `base` is the seed's mean channel plus one
/// and `offset` is drawn from `[0, 51)`. Channels are truncated and capped
/// at 255. The result always has exactly `amount` entries.
pub fn offset_random_rgb(seed: Rgb, amount: usize) -> Vec<Rgb> {
    offset_random_rgb_with(&mut rand::thread_rng(), seed, amount)
}

pub fn offset_random_rgb_with<R: Rng>(rng: &mut R, seed: Rgb, amount: usize) -> Vec<Rgb> {
    // +1 keeps the ratio finite for a black seed
    let base = seed.mean() + 1.0;

    (0..amount)
        .map(|_| {
            let offset = rng.gen_range(0.0..1.0) * CHANNEL_MAX / 5.0;
            let ratio = (base + offset) / base;
            seed.map(|c| (c * ratio).trunc().min(CHANNEL_MAX))
        })
        .collect()
}

/// [`offset_random_rgb`] rendered as hex strings
pub fn offset_random_hex(seed: Rgb, amount: usize) -> Vec<String> {
    offset_random_hex_with(&mut rand::thread_rng(), seed, amount)
}

pub fn offset_random_hex_with<R: Rng>(rng: &mut R, seed: Rgb, amount: usize) -> Vec<String> {
    offset_random_rgb_with(rng, seed, amount)
        .into_iter()
        .map(rgb_to_hex)
        .collect()
}

/// [`offset_random_rgb`] rendered as web colors
pub fn offset_random_web(seed: Rgb, amount: usize) -> Vec<String> {
    offset_random_web_with(&mut rand::thread_rng(), seed, amount)
}

pub fn offset_random_web_with<R: Rng>(rng: &mut R, seed: Rgb, amount: usize) -> Vec<String> {
    offset_random_rgb_with(rng, seed, amount)
        .into_iter()
        .map(rgb_to_web)
        .collect()
}
