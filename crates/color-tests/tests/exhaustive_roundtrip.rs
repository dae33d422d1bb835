//! Exhaustive Round-Trip Tests
//!
//! Runs every 8-bit RGB triple (2^24 colors) through each notation and back.
//! HEX and WEB are lossless. HSV loses less than half a channel step, so it
//! rounds back to the original. YIQ is rounded to 3 decimals and loses up to
//! about 2.65 per channel.

use oxcolor_core::{
    Rgb, hex_to_rgb, hsv_to_rgb, rgb_to_hex, rgb_to_hsv, rgb_to_web, rgb_to_yiq, web_to_rgb,
    yiq_to_rgb,
};
use rayon::prelude::*;

const YIQ_TOLERANCE: f64 = 3.0;

fn triple(index: u32) -> Rgb {
    let [_, r, g, b] = index.to_be_bytes();
    Rgb::from_u8(r, g, b)
}

/// Count the triples failing `check`, reporting the first few
fn count_failures(name: &str, check: impl Fn(Rgb) -> Result<(), String> + Sync) -> usize {
    let failures: Vec<String> = (0..1u32 << 24)
        .into_par_iter()
        .filter_map(|i| check(triple(i)).err())
        .collect();

    eprintln!("  {name:<6} failures: {}", failures.len());
    for failure in failures.iter().take(5) {
        eprintln!("    {failure}");
    }
    failures.len()
}

#[test]
fn test_hex_roundtrip_exhaustive() {
    let failures = count_failures("hex", |rgb| {
        let hex = rgb_to_hex(rgb);
        match hex_to_rgb(&hex) {
            Ok(back) if back == rgb => Ok(()),
            other => Err(format!("{rgb} -> {hex} -> {other:?}")),
        }
    });
    assert_eq!(failures, 0);
}

#[test]
fn test_web_roundtrip_exhaustive() {
    let failures = count_failures("web", |rgb| {
        let web = rgb_to_web(rgb);
        match web_to_rgb(&web) {
            Ok(back) if back == rgb => Ok(()),
            other => Err(format!("{rgb} -> {web} -> {other:?}")),
        }
    });
    assert_eq!(failures, 0);
}

#[test]
fn test_hsv_roundtrip_exhaustive() {
    let failures = count_failures("hsv", |rgb| {
        let hsv = rgb_to_hsv(rgb);
        let back = hsv_to_rgb(hsv).map_err(|e| format!("{rgb} -> {hsv}: {e}"))?;
        let rounded = back.map(f64::round);
        if rounded == rgb {
            Ok(())
        } else {
            Err(format!("{rgb} -> {hsv} -> {back}"))
        }
    });
    assert_eq!(failures, 0);
}

#[test]
fn test_yiq_roundtrip_exhaustive() {
    let failures = count_failures("yiq", |rgb| {
        let yiq = rgb_to_yiq(rgb);
        let back = yiq_to_rgb(yiq);
        let worst = rgb
            .to_array()
            .into_iter()
            .zip(back.to_array())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        if worst <= YIQ_TOLERANCE {
            Ok(())
        } else {
            Err(format!("{rgb} -> {yiq} -> {back} (off by {worst:.3})"))
        }
    });
    assert_eq!(failures, 0);
}

#[test]
fn test_hsv_hue_stays_below_360() {
    let max_hue = (0..1u32 << 24)
        .into_par_iter()
        .map(|i| rgb_to_hsv(triple(i)).h)
        .reduce(|| 0.0, f64::max);
    assert!(max_hue < 360.0, "max hue {max_hue}");
}
