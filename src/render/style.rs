use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Parses the CSS-style literals chart options carry: `#rgb`, `#rrggbb`,
/// `#rrggbbaa`, `rgb(r, g, b)`, and `rgba(r, g, b[, a])`. Serialized as the
/// hex string form. Defaults to opaque black, the fallback stroke color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidStyle(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| invalid_literal(input));
        }

        let lower = trimmed.to_ascii_lowercase();
        if let Some(args) = lower.strip_prefix("rgba").and_then(strip_parens) {
            return parse_components(args, true).ok_or_else(|| invalid_literal(input));
        }
        if let Some(args) = lower.strip_prefix("rgb").and_then(strip_parens) {
            return parse_components(args, false).ok_or_else(|| invalid_literal(input));
        }

        Err(invalid_literal(input))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [red, green, blue, alpha] =
            [self.red, self.green, self.blue, self.alpha].map(channel_to_byte);
        if alpha == u8::MAX {
            write!(f, "#{red:02x}{green:02x}{blue:02x}")
        } else {
            write!(f, "#{red:02x}{green:02x}{blue:02x}{alpha:02x}")
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

fn invalid_literal(input: &str) -> ChartError {
    ChartError::InvalidStyle(format!("unrecognized color literal `{input}`"))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }

    let (red, green, blue, alpha) = match hex.len() {
        3 => {
            let red = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let green = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let blue = u8::from_str_radix(&hex[2..3], 16).ok()?;
            (red * 17, green * 17, blue * 17, u8::MAX)
        }
        6 | 8 => {
            let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;
            let alpha = if hex.len() == 8 {
                u8::from_str_radix(&hex[6..8], 16).ok()?
            } else {
                u8::MAX
            };
            (red, green, blue, alpha)
        }
        _ => return None,
    };

    Some(Color::rgba(
        f64::from(red) / 255.0,
        f64::from(green) / 255.0,
        f64::from(blue) / 255.0,
        f64::from(alpha) / 255.0,
    ))
}

fn strip_parens(args: &str) -> Option<&str> {
    args.trim().strip_prefix('(')?.strip_suffix(')')
}

fn parse_components(args: &str, allow_alpha: bool) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let alpha = match (parts.len(), allow_alpha) {
        (3, _) => 1.0,
        (4, true) => parts[3].parse::<f64>().ok()?,
        _ => return None,
    };
    if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
        return None;
    }

    let mut channels = [0.0_f64; 3];
    for (slot, part) in channels.iter_mut().zip(&parts[0..3]) {
        let value = part.parse::<f64>().ok()?;
        if !value.is_finite() || !(0.0..=255.0).contains(&value) {
            return None;
        }
        *slot = value / 255.0;
    }

    Some(Color::rgba(channels[0], channels[1], channels[2], alpha))
}

fn channel_to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Label typeface for axis text.
///
/// The size is in device pixels and must be finite and positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSpec {
    pub size_px: f64,
    pub family: String,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            size_px: 30.0,
            family: "Inter".to_owned(),
        }
    }
}

impl FontSpec {
    #[must_use]
    pub fn new(size_px: f64, family: impl Into<String>) -> Self {
        Self {
            size_px,
            family: family.into(),
        }
    }

    /// Enforced by `fill_text`/`measure_text` on every surface backend.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(ChartError::InvalidStyle(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if self.family.is_empty() {
            return Err(ChartError::InvalidStyle(
                "font family must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
