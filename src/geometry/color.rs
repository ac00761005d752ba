//! Hex color parsing and adjustment
//!
//! Colors arrive from the configuration surface as 6-hex-digit strings.
//! Malformed input is a reported error, never a silent fallback to black.

use std::error::Error;
use std::fmt;

use image::Rgba;

/// Error raised when a hex color string cannot be parsed
#[derive(Debug, Clone)]
pub struct ColorParseError {
    pub(crate) value: String,
    pub(crate) reason: &'static str,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid color '{}': {}", self.value, self.reason)
    }
}

impl Error for ColorParseError {}

impl ColorParseError {
    fn new(value: &str, reason: &'static str) -> Self {
        Self {
            value: value.to_string(),
            reason,
        }
    }
}

/// Opaque RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Opaque white, the default frame and background color
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Parse a `#rrggbb` or `rrggbb` hex string
    ///
    /// # Errors
    ///
    /// Returns a [`ColorParseError`] when the input is not exactly six hex
    /// digits after an optional leading `#`.
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 {
            return Err(ColorParseError::new(
                input,
                "expected six hex digits after an optional '#'",
            ));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::new(input, "contains non-hexadecimal digits"))?;
        Ok(Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        })
    }

    /// Additive per-channel brightness adjustment, clamped to [0, 255]
    pub fn brightened(self, delta: i16) -> Self {
        let shift = |channel: u8| i16::from(channel).saturating_add(delta).clamp(0, 255) as u8;
        Self {
            r: shift(self.r),
            g: shift(self.g),
            b: shift(self.b),
        }
    }

    /// Re-express the opaque color with a fixed alpha in [0, 1]
    pub fn with_alpha(self, alpha: f32) -> Rgba<u8> {
        let alpha = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba([self.r, self.g, self.b, alpha])
    }
}
