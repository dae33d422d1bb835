//! Error statistics for conversion comparisons
//!
//! Hue is compared on the circle: 359.9 and 0.1 are 0.2 degrees apart.

use oxcolor_core::{Hsv, Rgb};

/// Angular distance between two hues in degrees, in [0, 180]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Maximum per-component differences across a set of HSV pairs
#[derive(Debug, Clone, Default)]
pub struct HsvDiffStats {
    /// Largest hue distance in degrees
    pub max_hue: f64,
    /// Largest saturation difference
    pub max_saturation: f64,
    /// Largest value difference
    pub max_value: f64,
    /// Number of samples
    pub count: usize,
}

impl HsvDiffStats {
    /// Compare paired HSV values
    pub fn compare(ours: &[Hsv], reference: &[Hsv]) -> Self {
        assert_eq!(ours.len(), reference.len(), "sample count mismatch");

        ours.iter()
            .zip(reference)
            .fold(Self::default(), |mut stats, (a, b)| {
                // Hue is meaningless without saturation
                if b.s > 0.0 && b.v > 0.0 {
                    stats.max_hue = stats.max_hue.max(hue_distance(a.h, b.h));
                }
                stats.max_saturation = stats.max_saturation.max((a.s - b.s).abs());
                stats.max_value = stats.max_value.max((a.v - b.v).abs());
                stats.count += 1;
                stats
            })
    }

    /// Check if every component is within `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max_hue <= tolerance
            && self.max_saturation <= tolerance
            && self.max_value <= tolerance
    }
}

/// Channel error statistics across a set of RGB pairs (0-255 scale)
#[derive(Debug, Clone, Default)]
pub struct ChannelDiffStats {
    /// Mean absolute channel difference
    pub mean: f64,
    /// Maximum absolute channel difference
    pub max: f64,
    /// Number of samples
    pub count: usize,
}

impl ChannelDiffStats {
    /// Compare paired RGB values
    pub fn compare(ours: &[Rgb], reference: &[Rgb]) -> Self {
        assert_eq!(ours.len(), reference.len(), "sample count mismatch");

        let mut sum = 0.0;
        let mut max: f64 = 0.0;
        for (a, b) in ours.iter().zip(reference) {
            for (x, y) in a.to_array().into_iter().zip(b.to_array()) {
                let d = (x - y).abs();
                sum += d;
                max = max.max(d);
            }
        }

        let count = ours.len();
        Self {
            mean: if count == 0 { 0.0 } else { sum / (count * 3) as f64 },
            max,
            count,
        }
    }

    /// Check if no channel differs by more than `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_distance_wraps() {
        assert!((hue_distance(359.9, 0.1) - 0.2).abs() < 1e-9);
        assert!((hue_distance(0.1, 359.9) - 0.2).abs() < 1e-9);
        assert_eq!(hue_distance(90.0, 270.0), 180.0);
        assert_eq!(hue_distance(42.0, 42.0), 0.0);
    }

    #[test]
    fn test_hsv_stats_ignore_gray_hue() {
        let ours = [Hsv::new(120.0, 0.0, 0.5)];
        let reference = [Hsv::new(0.0, 0.0, 0.5)];
        let stats = HsvDiffStats::compare(&ours, &reference);
        assert_eq!(stats.max_hue, 0.0);
        assert!(stats.within(1e-9));
    }

    #[test]
    fn test_channel_stats() {
        let ours = [Rgb::new(10.0, 20.0, 30.0)];
        let reference = [Rgb::new(11.0, 20.0, 29.5)];
        let stats = ChannelDiffStats::compare(&ours, &reference);
        assert_eq!(stats.max, 1.0);
        assert!((stats.mean - 0.5).abs() < 1e-12);
        assert!(!stats.within(0.9));
    }
}
