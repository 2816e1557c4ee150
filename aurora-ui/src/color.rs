//! Colors used by component palettes.
//!
//! ## Usage
//!
//! Build colors from channel values or parse them from hex strings such as
//! `#1F2937` when palettes come from configuration.
use std::{fmt, str::FromStr};

use thiserror::Error;

/// A color in the sRGB color space with an alpha component.
///
/// Channels are stored as `f32`s in the range `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new `Color` from four `u8` values (red, green, blue, alpha).
    #[inline]
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates a new opaque `Color` from three `u8` values (red, green, blue).
    #[inline]
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Creates an opaque color from a packed `0xRRGGBB` value.
    ///
    /// Palette defaults are declared with this so they read like the hex
    /// strings designers hand over.
    #[inline]
    pub const fn from_hex(rgb: u32) -> Self {
        Self::from_rgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Returns the channels quantized back to `u8` as `[r, g, b, a]`.
    pub fn to_rgba_u8(self) -> [u8; 4] {
        let quantize = |channel: f32| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

/// The default color is fully transparent.
impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<[u8; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb_u8(r, g, b)
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::from_rgba_u8(r, g, b, a)
    }
}

/// Formats as `#RRGGBB`, or `#RRGGBBAA` when the color is not opaque.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba_u8();
        if a == 255 {
            write!(f, "#{r:02X}{g:02X}{b:02X}")
        } else {
            write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

/// Errors returned when parsing a [`Color`] from a hex string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The string does not start with `#`.
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),
    /// The string has a digit count other than 6 or 8.
    #[error("color `{input}` has {len} hex digits, expected 6 or 8")]
    InvalidLength {
        /// The rejected input.
        input: String,
        /// Number of characters after `#`.
        len: usize,
    },
    /// The string contains a character that is not a hex digit.
    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::MissingHash(s.to_string()))?;
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ParseColorError::InvalidLength {
                input: s.to_string(),
                len: digits.len(),
            });
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(s.to_string()));
        }

        let channel = |index: usize| {
            u8::from_str_radix(&digits[index..index + 2], 16)
                .map_err(|_| ParseColorError::InvalidDigit(s.to_string()))
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Color::from_rgba_u8(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Color, ParseColorError};

    #[test]
    fn parses_opaque_hex() {
        let color: Color = "#1F2937".parse().unwrap();
        assert_eq!(color, Color::from_rgb_u8(0x1F, 0x29, 0x37));
        assert_eq!(color, Color::from_hex(0x1F2937));
    }

    #[test]
    fn parses_hex_with_alpha_and_lowercase_digits() {
        let color: Color = "#3b82f680".parse().unwrap();
        assert_eq!(color.to_rgba_u8(), [0x3B, 0x82, 0xF6, 0x80]);
    }

    #[rstest]
    #[case("1F2937", ParseColorError::MissingHash("1F2937".into()))]
    #[case("#FFF", ParseColorError::InvalidLength { input: "#FFF".into(), len: 3 })]
    #[case("#GG0000", ParseColorError::InvalidDigit("#GG0000".into()))]
    fn rejects_malformed_hex(#[case] input: &str, #[case] expected: ParseColorError) {
        assert_eq!(input.parse::<Color>(), Err(expected));
    }

    #[test]
    fn display_matches_parsed_input() {
        assert_eq!(Color::from_hex(0xEF4444).to_string(), "#EF4444");
        assert_eq!(Color::TRANSPARENT.to_string(), "#00000000");
    }
}
