//! Random Generation Tests
//!
//! Seeded with ChaCha so failures reproduce.

use oxcolor_core::random::{
    offset_random_hex_with, offset_random_rgb_with, offset_random_web_with, random_hex_with,
    random_rgb_with, random_web_with,
};
use oxcolor_core::{Rgb, hex_to_rgb, offset_random_rgb, random_rgb, web_to_rgb};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SAMPLES: usize = 100_000;

#[test]
fn test_random_rgb_covers_full_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut seen_min = [false; 3];
    let mut seen_max = [false; 3];
    let mut sum = [0.0; 3];

    for _ in 0..SAMPLES {
        let rgb = random_rgb_with(&mut rng);
        assert!(rgb.as_exact_u8().is_some(), "{rgb}");
        for (ch, value) in rgb.to_array().into_iter().enumerate() {
            seen_min[ch] |= value == 0.0;
            seen_max[ch] |= value == 255.0;
            sum[ch] += value;
        }
    }

    assert_eq!(seen_min, [true; 3]);
    assert_eq!(seen_max, [true; 3]);
    for total in sum {
        let mean = total / SAMPLES as f64;
        assert!((mean - 127.5).abs() < 2.0, "mean {mean}");
    }
}

#[test]
fn test_seeded_generators_reproduce() {
    let draw = |seed| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (
            random_rgb_with(&mut rng),
            random_hex_with(&mut rng),
            random_web_with(&mut rng),
        )
    };
    assert_eq!(draw(99), draw(99));
}

#[test]
fn test_random_strings_parse_back() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for _ in 0..1_000 {
        let hex = random_hex_with(&mut rng);
        assert_eq!(hex.len(), 7);
        assert!(hex_to_rgb(&hex).is_ok(), "{hex}");

        let web = random_web_with(&mut rng);
        assert!(web_to_rgb(&web).is_ok(), "{web}");
    }
}

#[test]
fn test_offset_random_brightens_seed() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let seed = Rgb::from_u8(40, 80, 120);

    let colors = offset_random_rgb_with(&mut rng, seed, 1_000);
    assert_eq!(colors.len(), 1_000);

    for rgb in &colors {
        // One common ratio in [1, 1 + 51/81) scales every channel
        assert!(rgb.r >= 40.0 && rgb.r < 66.0, "{rgb}");
        assert!(rgb.g >= 80.0 && rgb.g < 131.0, "{rgb}");
        assert!(rgb.b >= 120.0 && rgb.b < 196.0, "{rgb}");
        assert!(rgb.r <= rgb.g && rgb.g <= rgb.b);
        assert_eq!(rgb.map(f64::trunc), *rgb);
    }
}

#[test]
fn test_offset_random_caps_at_255() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let seed = Rgb::from_u8(250, 250, 250);
    for rgb in offset_random_rgb_with(&mut rng, seed, 500) {
        assert!(rgb.is_in_range(), "{rgb}");
        assert!(rgb.r >= 250.0);
    }
}

#[test]
fn test_offset_random_black_seed_stays_black() {
    assert!(offset_random_rgb(Rgb::BLACK, 10).iter().all(|&rgb| rgb == Rgb::BLACK));
    assert!(offset_random_rgb(Rgb::WHITE, 0).is_empty());
}

#[test]
fn test_offset_random_notations() {
    let seed = Rgb::from_u8(0, 0, 128);

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let hexes = offset_random_hex_with(&mut rng, seed, 20);

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let webs = offset_random_web_with(&mut rng, seed, 20);

    assert_eq!(hexes.len(), 20);
    for (hex, web) in hexes.iter().zip(&webs) {
        assert_eq!(hex_to_rgb(hex).ok(), web_to_rgb(web).ok());
    }
}

#[test]
fn test_thread_rng_variant() {
    let rgb = random_rgb();
    assert!(rgb.is_in_range());
}
