use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest value a packed 24-bit RGB color may hold.
pub const MAX_RGB: u32 = 0x00ff_ffff;

/// Errors from color construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color {0:#x} exceeds 24-bit RGB range")]
    OutOfRange(u32),
    #[error("invalid color literal {0:?}")]
    Parse(String),
}

/// A packed 24-bit RGB color (`0xRRGGBB`).
///
/// Serialized as a plain integer, matching the way scene data is usually
/// authored (`0xa0a0a0`). Decoding rejects values wider than 24 bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Color(u32);

impl Color {
    pub const BLACK: Self = Self(0x000000);
    pub const WHITE: Self = Self(0xffffff);

    /// Build a color from a literal. Panics at compile time when used in a
    /// const context with a value wider than 24 bits.
    pub const fn hex(value: u32) -> Self {
        assert!(value <= MAX_RGB, "color literal exceeds 24 bits");
        Self(value)
    }

    /// Checked construction from a raw integer.
    pub fn new(value: u32) -> Result<Self, ColorError> {
        if value > MAX_RGB {
            return Err(ColorError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Packed `0xRRGGBB` value.
    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Channels normalized to `0.0..=1.0`.
    pub fn to_rgb_f32(self) -> [f32; 3] {
        [
            self.r() as f32 / 255.0,
            self.g() as f32 / 255.0,
            self.b() as f32 / 255.0,
        ]
    }

    pub fn to_vec3(self) -> glam::Vec3 {
        glam::Vec3::from_array(self.to_rgb_f32())
    }
}

impl TryFrom<u32> for Color {
    type Error = ColorError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// Accepts `#rrggbb`, `0xrrggbb` or bare `rrggbb`.
impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.is_empty() || digits.len() > 6 {
            return Err(ColorError::Parse(s.to_string()));
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| ColorError::Parse(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({:#08x})", self.0)
    }
}
