//! # color-tests
//!
//! Cross-checking and integration tests for oxcolor.
//!
//! This crate provides:
//! - Reference conversions from the `palette` crate
//! - Deterministic test color sets
//! - Error statistics for comparing two conversions
//!
//! ## Test Categories
//!
//! 1. **Parity**: HSV and hex conversions against `palette`
//! 2. **Round trips**: every 8-bit RGB triple through hex, web, HSV, YIQ
//! 3. **Behavior**: the `Color` value type end to end
//! 4. **Configuration**: `serde` round trips of options and values
//! 5. **Randomness**: distribution of the random generators

pub mod accuracy;
pub mod patterns;
pub mod reference;

pub use accuracy::{ChannelDiffStats, HsvDiffStats, hue_distance};
pub use patterns::{TestPattern, generate_pattern};
