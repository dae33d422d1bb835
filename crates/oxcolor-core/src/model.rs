//! The Color value type
//!
//! A [`Color`] owns one RGB triple. Hex, web, YIQ and HSV are computed from
//! it on every read, and assigning any of them rewrites the triple through
//! the inverse conversion. Nothing else is stored besides the per-instance
//! [`ColorOptions`].

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::color::{CHANNEL_MAX, CHANNEL_MIN, Hsv, Rgb, Yiq};
use crate::convert::{
    hex_to_rgb, hsv_to_rgb, rgb_to_hex, rgb_to_hsv, rgb_to_web, rgb_to_web_color, rgb_to_yiq,
    web_to_rgb, yiq_to_rgb,
};
use crate::equality::Equality;
use crate::format::{ColorValue, Format};
use crate::utils::minify_digits;
use crate::web::WebColor;
use crate::{Error, Result};

/// How [`Color`] addition combines channels
///
/// Subtraction does not depend on the model: it always floors at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ArithmeticModel {
    /// Add like light: channel sums saturate at 255
    #[default]
    Light,
    /// `lhs + floor(rhs / 2)` per channel
    ///
    /// Only the right-hand operand is halved, so this is not an average and
    /// `a + b` differs from `b + a`.
    Blend,
}

/// Per-color configuration
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColorOptions {
    /// Strategy used when this color is the left-hand side of `==`
    pub equality: Equality,
    /// Model used when this color is the left-hand side of `+`
    pub arithmetic: ArithmeticModel,
}

/// A mutable color value backed by a single RGB triple
///
/// Copying with [`Color::from_color`] (or `Color::from(&other)`) takes only
/// the RGB triple; the copy starts with default options. `Clone` copies
/// the options too.
#[derive(Debug, Clone, Copy, Default)]
pub struct Color {
    rgb: Rgb,
    options: ColorOptions,
}

impl Color {
    /// Create a color with default options
    pub fn new(rgb: impl Into<Rgb>) -> Self {
        Self::with_options(rgb, ColorOptions::default())
    }

    /// Create a color with explicit options
    pub fn with_options(rgb: impl Into<Rgb>, options: ColorOptions) -> Self {
        Self {
            rgb: rgb.into(),
            options,
        }
    }

    /// Copy another color's RGB triple, with default options
    pub fn from_color(other: &Color) -> Self {
        Self::new(other.rgb)
    }

    /// Parse a 3- or 6-digit hex string
    pub fn from_hex(hex: &str) -> Result<Self> {
        hex_to_rgb(hex).map(Self::new)
    }

    /// Resolve a web color name or hex string
    pub fn from_web(web: &str) -> Result<Self> {
        web_to_rgb(web).map(Self::new)
    }

    pub fn from_yiq(yiq: Yiq) -> Self {
        Self::new(yiq_to_rgb(yiq))
    }

    pub fn from_hsv(hsv: Hsv) -> Result<Self> {
        hsv_to_rgb(hsv).map(Self::new)
    }

    /// Replace the equality strategy
    #[must_use]
    pub fn with_equality(mut self, equality: Equality) -> Self {
        self.options.equality = equality;
        self
    }

    /// Replace the arithmetic model
    #[must_use]
    pub fn with_arithmetic(mut self, arithmetic: ArithmeticModel) -> Self {
        self.options.arithmetic = arithmetic;
        self
    }

    #[inline]
    pub fn options(&self) -> ColorOptions {
        self.options
    }

    #[inline]
    pub fn equality(&self) -> Equality {
        self.options.equality
    }

    #[inline]
    pub fn arithmetic(&self) -> ArithmeticModel {
        self.options.arithmetic
    }

    pub fn set_equality(&mut self, equality: Equality) {
        self.options.equality = equality;
    }

    pub fn set_arithmetic(&mut self, arithmetic: ArithmeticModel) {
        self.options.arithmetic = arithmetic;
    }

    // ------------------------------------------------------------------
    // Channels
    // ------------------------------------------------------------------

    #[inline]
    pub fn red(&self) -> f64 {
        self.rgb.r
    }

    #[inline]
    pub fn green(&self) -> f64 {
        self.rgb.g
    }

    #[inline]
    pub fn blue(&self) -> f64 {
        self.rgb.b
    }

    pub fn set_red(&mut self, value: f64) {
        self.rgb.r = value;
    }

    pub fn set_green(&mut self, value: f64) {
        self.rgb.g = value;
    }

    pub fn set_blue(&mut self, value: f64) {
        self.rgb.b = value;
    }

    /// Iterate the channels in R, G, B order
    pub fn iter(&self) -> std::array::IntoIter<f64, 3> {
        self.rgb.to_array().into_iter()
    }

    // ------------------------------------------------------------------
    // Projections
    // ------------------------------------------------------------------

    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn set_rgb(&mut self, rgb: impl Into<Rgb>) {
        self.rgb = rgb.into();
    }

    /// Six-digit lowercase hex, e.g. `#aabbcc`
    pub fn hex(&self) -> String {
        rgb_to_hex(self.rgb)
    }

    /// Replace the color from a hex string
    ///
    /// The color is left untouched on error.
    pub fn set_hex(&mut self, hex: &str) -> Result<()> {
        self.rgb = hex_to_rgb(hex)?;
        Ok(())
    }

    /// Hex in its 3-digit form when every channel allows it
    pub fn shorthex(&self) -> String {
        let hex = self.hex();
        minify_digits(&hex[1..]).unwrap_or(hex)
    }

    /// Web color name, or hex if the triple has no name
    pub fn web(&self) -> String {
        rgb_to_web(self.rgb)
    }

    pub fn web_color(&self) -> WebColor {
        rgb_to_web_color(self.rgb)
    }

    /// Replace the color from a web name or hex string
    pub fn set_web(&mut self, web: &str) -> Result<()> {
        self.rgb = web_to_rgb(web)?;
        Ok(())
    }

    pub fn yiq(&self) -> Yiq {
        rgb_to_yiq(self.rgb)
    }

    pub fn set_yiq(&mut self, yiq: Yiq) {
        self.rgb = yiq_to_rgb(yiq);
    }

    pub fn hsv(&self) -> Hsv {
        rgb_to_hsv(self.rgb)
    }

    /// Replace the color from HSV
    ///
    /// The color is left untouched if the hue is out of range.
    pub fn set_hsv(&mut self, hsv: Hsv) -> Result<()> {
        self.rgb = hsv_to_rgb(hsv)?;
        Ok(())
    }

    /// Project the color into any notation
    pub fn to(&self, format: Format) -> ColorValue {
        ColorValue::from_rgb(self.rgb, format)
    }

    // ------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------

    /// Add a raw channel sequence
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperand`] unless `operand` has exactly 3 elements.
    pub fn checked_add(&self, operand: &[f64]) -> Result<Color> {
        operand_rgb('+', operand).map(|rhs| self.add_rgb(rhs))
    }

    /// Subtract a raw channel sequence
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperand`] unless `operand` has exactly 3 elements.
    pub fn checked_sub(&self, operand: &[f64]) -> Result<Color> {
        operand_rgb('-', operand).map(|rhs| self.sub_rgb(rhs))
    }

    fn add_rgb(&self, rhs: Rgb) -> Color {
        let rgb = match self.options.arithmetic {
            ArithmeticModel::Light => self.rgb.zip_with(rhs, |a, b| (a + b).min(CHANNEL_MAX)),
            ArithmeticModel::Blend => self.rgb.zip_with(rhs, |a, b| a + (b / 2.0).floor()),
        };
        Color::new(rgb)
    }

    fn sub_rgb(&self, rhs: Rgb) -> Color {
        Color::new(self.rgb.zip_with(rhs, |a, b| (a - b).max(CHANNEL_MIN)))
    }
}

fn operand_rgb(op: char, operand: &[f64]) -> Result<Rgb> {
    match operand {
        &[r, g, b] => Ok(Rgb::new(r, g, b)),
        _ => Err(Error::InvalidOperand {
            op,
            len: operand.len(),
        }),
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.options.equality.compare(self, other)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb)
    }
}

impl From<&Color> for Color {
    fn from(other: &Color) -> Self {
        Self::from_color(other)
    }
}

impl From<[u8; 3]> for Color {
    fn from(arr: [u8; 3]) -> Self {
        Self::new(arr)
    }
}

impl From<[f64; 3]> for Color {
    fn from(arr: [f64; 3]) -> Self {
        Self::new(arr)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        color.rgb
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse a web color name or hex string
    fn from_str(s: &str) -> Result<Self> {
        Self::from_web(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.rgb, f)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        self.add_rgb(rhs.rgb)
    }
}

impl Add<Rgb> for Color {
    type Output = Color;

    fn add(self, rhs: Rgb) -> Color {
        self.add_rgb(rhs)
    }
}

impl Add<[f64; 3]> for Color {
    type Output = Color;

    fn add(self, rhs: [f64; 3]) -> Color {
        self.add_rgb(rhs.into())
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        self.sub_rgb(rhs.rgb)
    }
}

impl Sub<Rgb> for Color {
    type Output = Color;

    fn sub(self, rhs: Rgb) -> Color {
        self.sub_rgb(rhs)
    }
}

impl Sub<[f64; 3]> for Color {
    type Output = Color;

    fn sub(self, rhs: [f64; 3]) -> Color {
        self.sub_rgb(rhs.into())
    }
}

impl IntoIterator for Color {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Color {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(r: u8, g: u8, b: u8) -> Color {
        Color::new(Rgb::from_u8(r, g, b))
    }

    #[test]
    fn test_default_is_black() {
        let c = Color::default();
        assert_eq!(c.rgb(), Rgb::BLACK);
        assert!(matches!(c.equality(), Equality::Rgb));
        assert_eq!(c.arithmetic(), ArithmeticModel::Light);
    }

    #[test]
    fn test_copy_takes_rgb_only() {
        let src = color(50, 50, 50)
            .with_equality(Equality::Red)
            .with_arithmetic(ArithmeticModel::Blend);

        let copy = Color::from(&src);
        assert_eq!(copy.rgb(), Rgb::from_u8(50, 50, 50));
        assert!(matches!(copy.equality(), Equality::Rgb));
        assert_eq!(copy.arithmetic(), ArithmeticModel::Light);

        let nested = Color::from_color(&Color::from_color(&color(10, 10, 10)));
        assert_eq!(nested.rgb(), Rgb::from_u8(10, 10, 10));
    }

    #[test]
    fn test_channel_setters() {
        let mut c = color(1, 2, 3);
        c.set_red(10.0);
        c.set_green(20.0);
        c.set_blue(30.0);
        assert_eq!((c.red(), c.green(), c.blue()), (10.0, 20.0, 30.0));
    }

    #[test]
    fn test_iteration_order() {
        let c = color(10, 20, 30);
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![10.0, 20.0, 30.0]);
        assert_eq!((&c).into_iter().sum::<f64>(), 60.0);
        let mut seen = Vec::new();
        for channel in c {
            seen.push(channel);
        }
        assert_eq!(seen, [10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_projection_setters_overwrite_rgb() {
        let mut c = Color::default();

        c.set_hex("#0d9f40").unwrap();
        assert_eq!(c.rgb(), Rgb::from_u8(13, 159, 64));
        assert_eq!(c.web(), "#0d9f40");

        c.set_web("Navy").unwrap();
        assert_eq!(c.rgb(), Rgb::from_u8(0, 0, 128));
        assert_eq!(c.hex(), "#000080");

        c.set_hsv(Hsv::new(120.0, 1.0, 1.0)).unwrap();
        assert_eq!(c.web(), "Lime");

        c.set_yiq(Yiq::new(1.0, 0.0, 0.0));
        assert_eq!(c.web(), "White");
        assert_eq!(c.hsv(), Hsv::new(0.0, 0.0, 1.0));
        assert_eq!(c.yiq().y, 1.0);
    }

    #[test]
    fn test_failed_setter_keeps_color() {
        let mut c = color(1, 2, 3);
        assert!(c.set_hex("#12345").is_err());
        assert!(c.set_web("no-such-color").is_err());
        assert!(c.set_hsv(Hsv::new(360.0, 1.0, 1.0)).is_err());
        assert_eq!(c.rgb(), Rgb::from_u8(1, 2, 3));
    }

    #[test]
    fn test_shorthex() {
        assert_eq!(color(0xaa, 0xbb, 0xcc).shorthex(), "#abc");
        assert_eq!(color(255, 255, 255).shorthex(), "#fff");
        assert_eq!(color(0xf2, 0x35, 0xaa).shorthex(), "#f235aa");
    }

    #[test]
    fn test_addition_light() {
        assert!(color(35, 150, 35) + color(150, 35, 150) == color(185, 185, 185));
        assert!(color(0, 0, 0) + color(100, 50, 25) == color(100, 50, 25));
        assert!(color(10, 100, 255) + color(50, 175, 30) == color(60, 255, 255));
        assert!(color(10, 10, 10) + [20.0, 20.0, 20.0] == color(30, 30, 30));
    }

    #[test]
    fn test_addition_blend_halves_rhs() {
        let lhs = color(100, 100, 100).with_arithmetic(ArithmeticModel::Blend);
        assert!(lhs + color(50, 51, 0) == color(125, 125, 100));

        let lhs = color(50, 51, 0).with_arithmetic(ArithmeticModel::Blend);
        assert!(lhs + color(100, 100, 100) == color(100, 101, 50));
    }

    #[test]
    fn test_addition_result_has_default_options() {
        let lhs = color(1, 1, 1).with_equality(Equality::Red);
        let sum = lhs + color(1, 1, 1);
        assert!(matches!(sum.equality(), Equality::Rgb));
    }

    #[test]
    fn test_subtraction_floors() {
        assert!(color(150, 35, 150) - color(35, 150, 35) == color(115, 0, 115));
        assert!(color(100, 50, 25) - color(0, 0, 0) == color(100, 50, 25));
        assert!(color(50, 175, 30) - color(10, 100, 255) == color(40, 75, 0));
        assert!(color(30, 30, 30) - [20.0, 20.0, 20.0] == color(10, 10, 10));
    }

    #[test]
    fn test_subtraction_ignores_model() {
        let lhs = color(50, 175, 30).with_arithmetic(ArithmeticModel::Blend);
        assert!(lhs - color(10, 100, 255) == color(40, 75, 0));
    }

    #[test]
    fn test_checked_arithmetic() {
        let c = color(35, 150, 35);
        assert!(c.checked_add(&[1.0, 2.0, 3.0]).unwrap() == color(36, 152, 38));
        assert!(c.checked_sub(&[35.0, 150.0, 35.0]).unwrap() == color(0, 0, 0));

        assert_eq!(
            c.checked_add(&[1.0, 2.0]).unwrap_err(),
            Error::InvalidOperand { op: '+', len: 2 }
        );
        assert_eq!(
            c.checked_sub(&[]).unwrap_err(),
            Error::InvalidOperand { op: '-', len: 0 }
        );
        assert!(c.checked_add(&[1.0, 2.0, 3.0, 4.0]).is_err());
    }

    #[test]
    fn test_parse_and_display() {
        let c: Color = "RebeccaPurple".parse().unwrap();
        assert_eq!(c.rgb(), Rgb::from_u8(102, 51, 153));
        assert_eq!(c.to_string(), "(102, 51, 153)");
        assert!("#12".parse::<Color>().is_err());
    }

    #[test]
    fn test_to_format() {
        let c = color(255, 0, 0);
        assert_eq!(c.to(Format::Web), ColorValue::Web("Red".to_string()));
        assert_eq!(c.to(Format::Hex), ColorValue::Hex("#ff0000".to_string()));
        assert_eq!(c.to(Format::Hsv), ColorValue::Hsv(Hsv::new(0.0, 1.0, 1.0)));
    }
}
