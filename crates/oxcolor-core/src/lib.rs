//! # oxcolor - color notation conversions
//!
//! A small, scalar color library. One canonical RGB triple, and conversions
//! to and from four other notations:
//!
//! - **HEX**: `#rrggbb`, or the minified `#rgb`
//! - **WEB**: a well-known color name, or hex when the color has none
//! - **YIQ**: NTSC luma and chrominance
//! - **HSV**: hue, saturation, value
//!
//! Every pair of notations has a conversion function in [`convert`]. They
//! all go through RGB, and only five directions are actual math.
//!
//! On top of the engine:
//!
//! - [`Color`], a mutable value with every notation as a view, saturating
//!   arithmetic and configurable [`Equality`]
//! - [`text_color`] for readable text over a background
//! - [`color_run`] for linear interpolation
//! - Random colors in [`random`]
//!
//! ## Quick Start
//!
//! ```
//! use oxcolor_core::{Color, Equality, Rgb};
//!
//! let mut c = Color::new(Rgb::from_u8(13, 159, 64));
//! assert_eq!(c.hex(), "#0d9f40");
//! assert_eq!(c.web(), "#0d9f40");
//!
//! c.set_web("navy").unwrap();
//! assert_eq!(c.rgb(), Rgb::from_u8(0, 0, 128));
//!
//! let sum = Color::new(Rgb::from_u8(10, 100, 255)) + Color::new(Rgb::from_u8(50, 175, 30));
//! assert!(sum == Color::new(Rgb::from_u8(60, 255, 255)));
//!
//! let red_only = Color::new(Rgb::from_u8(255, 0, 0)).with_equality(Equality::Red);
//! assert!(red_only == Color::new(Rgb::from_u8(255, 10, 35)));
//! ```
//!
//! ## Logging
//!
//! Lookup fallbacks and rejected input are reported through [`tracing`] at
//! `trace` and `debug` level. The crate never installs a subscriber.

pub mod color;
pub mod convert;
pub mod equality;
pub mod error;
pub mod format;
pub mod model;
pub mod random;
pub mod utils;
pub mod web;

pub use color::{Hsv, Rgb, Yiq};
pub use convert::{
    hex_to_hsv, hex_to_rgb, hex_to_web, hex_to_yiq, hsv_to_hex, hsv_to_rgb, hsv_to_web,
    hsv_to_yiq, rgb_to_hex, rgb_to_hsv, rgb_to_web, rgb_to_web_color, rgb_to_yiq, web_to_hex,
    web_to_hsv, web_to_rgb, web_to_yiq, yiq_to_hex, yiq_to_hsv, yiq_to_rgb, yiq_to_web,
};
pub use equality::Equality;
pub use error::{Error, Result};
pub use format::{ColorValue, Format};
pub use model::{ArithmeticModel, Color, ColorOptions};
pub use random::{
    offset_random_hex, offset_random_rgb, offset_random_web, random_hex, random_rgb, random_web,
};
pub use utils::{color_run, color_run_colors, minify_hex, text_color, text_color_with};
pub use web::WebColor;

/// Version of oxcolor
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
