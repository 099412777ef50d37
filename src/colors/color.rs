use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::colors::builder::ColorBuilder;
use crate::core::NativeValue;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_ALPHA: f64 = 1.0;

/// RGB color with alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: DEFAULT_ALPHA,
        }
    }

    /// Alpha outside `[0, 1]` (or not finite) is rejected.
    pub fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> ChartResult<Self> {
        Ok(Self::rgb(red, green, blue).with_alpha(check_alpha(alpha)?))
    }

    /// Same color with another alpha, clamped to `[0, 1]`.
    #[must_use]
    pub fn alpha(self, alpha: f64) -> Self {
        let alpha = if alpha.is_finite() {
            alpha.clamp(0.0, 1.0)
        } else {
            DEFAULT_ALPHA
        };
        self.with_alpha(alpha)
    }

    const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn to_rgba(self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.red, self.green, self.blue, self.alpha
        )
    }

    #[must_use]
    pub fn to_rgb(self) -> String {
        format!("rgb({},{},{})", self.red, self.green, self.blue)
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Packs the color as `0xAARRGGBB`.
    #[must_use]
    pub fn to_argb(self) -> u32 {
        let alpha = (self.alpha * 255.0).round() as u32;
        (alpha << 24)
            | (u32::from(self.red) << 16)
            | (u32::from(self.green) << 8)
            | u32::from(self.blue)
    }

    #[must_use]
    pub fn from_argb(value: u32) -> Self {
        Self {
            red: ((value >> 16) & 0xff) as u8,
            green: ((value >> 8) & 0xff) as u8,
            blue: (value & 0xff) as u8,
            alpha: f64::from((value >> 24) & 0xff) / 255.0,
        }
    }
}

pub(crate) fn check_alpha(alpha: f64) -> ChartResult<f64> {
    if alpha.is_finite() && (0.0..=1.0).contains(&alpha) {
        Ok(alpha)
    } else {
        Err(ChartError::InvalidColor(format!(
            "alpha must be finite and in [0, 1], got {alpha}"
        )))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rgba())
    }
}

impl std::str::FromStr for Color {
    type Err = ChartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ColorBuilder::parse(value)
    }
}

impl From<Color> for NativeValue {
    fn from(color: Color) -> Self {
        NativeValue::String(color.to_rgba())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rgba())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ColorBuilder::parse(&raw).map_err(serde::de::Error::custom)
    }
}
