use gpui::{Hsla, Rgba};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// Serde adapter storing `Hsla` as `#rrggbb` or `#rrggbbaa`.
pub mod hex_color {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(color: &Hsla, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_hex(*color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Hsla, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex_str(&s).map_err(serde::de::Error::custom)
    }

    pub fn parse_hex_str(hex: &str) -> Result<Hsla> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || ChartError::InvalidColor(hex.to_string());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        let rgba = match digits.len() {
            6 => gpui::rgb(value),
            8 => gpui::rgba(value),
            _ => return Err(invalid()),
        };
        Ok(rgba.into())
    }

    pub fn to_hex(color: Hsla) -> String {
        let rgba = Rgba::from(color);
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (
            channel(rgba.r),
            channel(rgba.g),
            channel(rgba.b),
            channel(rgba.a),
        );
        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    #[serde(with = "hex_color")]
    pub background: Hsla,
    #[serde(with = "hex_color")]
    pub axis_line: Hsla,
    #[serde(with = "hex_color")]
    pub axis_label: Hsla,
    #[serde(with = "hex_color")]
    pub average_line: Hsla,
    #[serde(with = "hex_color")]
    pub legend_text: Hsla,
    #[serde(with = "hex_color")]
    pub detail_background: Hsla,
    #[serde(with = "hex_color")]
    pub detail_text: Hsla,
    #[serde(with = "hex_color")]
    pub detail_secondary_text: Hsla,
    /// Bar color used by single-series charts when none is given.
    #[serde(with = "hex_color")]
    pub accent: Hsla,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: gpui::transparent_black(),
            axis_line: gpui::white().alpha(0.2),
            axis_label: gpui::white().alpha(0.8),
            average_line: gpui::white().alpha(0.5),
            legend_text: gpui::white().alpha(0.8),
            detail_background: gpui::white().alpha(0.06),
            detail_text: gpui::white(),
            detail_secondary_text: gpui::white().alpha(0.6),
            accent: gpui::blue(),
        }
    }
}
