use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Color;
use crate::Error;

/// Text notation used when a color is written out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 3] = [ColorFormat::Hex, ColorFormat::Rgb, ColorFormat::Hsl];

    pub fn id(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hsl => "hsl",
        }
    }
}

impl FromStr for ColorFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownColorFormat(s.to_string()))
    }
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl Color {
    /// Writes the color in CSS notation. Alpha is only spelled out when the
    /// color is not fully opaque.
    pub fn format(&self, format: ColorFormat) -> String {
        let [r, g, b, a] = self.to_rgba8();
        let opaque = a == u8::MAX;

        match format {
            ColorFormat::Hex if opaque => format!("#{r:02x}{g:02x}{b:02x}"),
            ColorFormat::Hex => format!("#{r:02x}{g:02x}{b:02x}{a:02x}"),

            ColorFormat::Rgb if opaque => format!("rgb({r}, {g}, {b})"),
            ColorFormat::Rgb => format!("rgba({r}, {g}, {b}, {})", trim_number(self.alpha, 3)),

            ColorFormat::Hsl => {
                let hsl = self.to_hsl();
                let hue = (hsl.hue.into_positive_degrees() * 10.0).round() / 10.0;
                let h = trim_number(hue % 360.0, 1);
                let s = trim_number(hsl.saturation * 100.0, 1);
                let l = trim_number(hsl.lightness * 100.0, 1);

                if opaque {
                    format!("hsl({h}, {s}%, {l}%)")
                } else {
                    format!("hsla({h}, {s}%, {l}%, {})", trim_number(self.alpha, 3))
                }
            }
        }
    }
}

/// Rounds to `decimals` places and drops trailing zeros.
pub fn trim_number(value: f32, decimals: i32) -> String {
    let factor = 10_f32.powi(decimals);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        return "0".to_string();
    }

    let text = format!("{:.*}", decimals as usize, rounded);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb_a;

    #[test]
    fn test_hex_format() {
        assert_eq!(rgb_a(0x2196f3, 1.0).format(ColorFormat::Hex), "#2196f3");
        assert_eq!(rgb_a(0x2196f3, 0.5).format(ColorFormat::Hex), "#2196f380");
    }

    #[test]
    fn test_rgb_format() {
        assert_eq!(rgb_a(0x2196f3, 1.0).format(ColorFormat::Rgb), "rgb(33, 150, 243)");
        assert_eq!(
            rgb_a(0x2196f3, 0.25).format(ColorFormat::Rgb),
            "rgba(33, 150, 243, 0.25)"
        );
    }

    #[test]
    fn test_hsl_format() {
        assert_eq!(Color::WHITE.format(ColorFormat::Hsl), "hsl(0, 0%, 100%)");
        assert_eq!(rgb_a(0xff0000, 1.0).format(ColorFormat::Hsl), "hsl(0, 100%, 50%)");
        assert_eq!(
            rgb_a(0x0000ff, 0.5).format(ColorFormat::Hsl),
            "hsla(240, 100%, 50%, 0.5)"
        );
    }

    #[test]
    fn test_trim_number() {
        assert_eq!(trim_number(3.0, 1), "3");
        assert_eq!(trim_number(3.94, 1), "3.9");
        assert_eq!(trim_number(-0.01, 1), "0");
        assert_eq!(trim_number(0.125, 3), "0.125");
    }

    #[test]
    fn test_color_format_from_str() {
        assert_eq!("HSL".parse::<ColorFormat>().unwrap(), ColorFormat::Hsl);
        assert!("cmyk".parse::<ColorFormat>().is_err());
    }

    #[test]
    fn test_display_uses_hex() {
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }
}
