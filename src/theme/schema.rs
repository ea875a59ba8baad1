use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::deserializers::de_dimension;
use crate::{
    color::{Color, ContrastLevel},
    palette::ColorPalette,
};

/// A theme role's color: either a literal value or a reference to a palette
/// entry with optional adjustments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeColor {
    Link(ColorLink),
    Value(Color),
}

impl From<Color> for ThemeColor {
    fn from(color: Color) -> Self {
        ThemeColor::Value(color)
    }
}

impl From<ColorLink> for ThemeColor {
    fn from(link: ColorLink) -> Self {
        ThemeColor::Link(link)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorLink {
    pub palette_id: String,
    #[serde(default, skip_serializing_if = "ColorAdjustments::is_empty")]
    pub adjustments: ColorAdjustments,
}

impl ColorLink {
    pub fn new(palette_id: impl Into<String>) -> Self {
        Self {
            palette_id: palette_id.into(),
            adjustments: ColorAdjustments::default(),
        }
    }

    pub fn with_adjustments(mut self, adjustments: ColorAdjustments) -> Self {
        self.adjustments = adjustments;
        self
    }
}

/// Tweaks applied on top of a linked palette color. Lightness and saturation
/// are HSL percentage points in `-100..=100`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorAdjustments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightness: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f32>,
}

impl ColorAdjustments {
    pub fn is_empty(&self) -> bool {
        self.alpha.is_none() && self.lightness.is_none() && self.saturation.is_none()
    }

    pub fn apply(&self, color: Color) -> Color {
        let mut color = color;

        if let Some(alpha) = self.alpha {
            color = color.with_alpha(alpha);
        }

        let lightness = self.lightness.unwrap_or(0.0).clamp(-100.0, 100.0) / 100.0;
        let saturation = self.saturation.unwrap_or(0.0).clamp(-100.0, 100.0) / 100.0;
        if lightness != 0.0 || saturation != 0.0 {
            color = color.adjust_hsl(lightness, saturation);
        }

        color
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeProps {
    pub background: ThemeBackgroundColors,
    pub text: ThemeTextColors,
    pub success: ThemeAlertColors,
    pub info: ThemeAlertColors,
    pub warning: ThemeAlertColors,
    pub error: ThemeAlertColors,
    pub buttons: ThemeButtons,
}

macro_rules! generate_builtin_defaults {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub static $name: LazyLock<ThemeProps> = LazyLock::new(|| {
                ThemeProps::from_string(include_str!($path))
                    .expect(concat!("built-in theme defaults in ", $path, " are valid"))
            });
        )+
    };
}

generate_builtin_defaults!(
    ["../../themes/light.json", LIGHT_DEFAULTS],
    ["../../themes/dark.json", DARK_DEFAULTS]
);

impl ThemeProps {
    /// Built-in role colors for the given mode.
    pub fn defaults(is_dark_mode: bool) -> &'static ThemeProps {
        if is_dark_mode { &*DARK_DEFAULTS } else { &*LIGHT_DEFAULTS }
    }

    pub fn from_string<S: AsRef<str>>(str: S) -> Result<ThemeProps, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }

    pub fn alerts(&self) -> [(&'static str, &ThemeAlertColors); 4] {
        [
            ("success", &self.success),
            ("info", &self.info),
            ("warning", &self.warning),
            ("error", &self.error),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeBackgroundColors {
    pub default: ThemeColor,
    pub paper: ThemeColor,
    pub component: ThemeColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeTextColors {
    pub primary: ThemeColor,
    pub secondary: ThemeColor,
    pub disabled: ThemeColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeAlertColors {
    pub text: ThemeColor,
    pub background: ThemeColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeButtons {
    pub primary: ThemeButtonColors,
    pub secondary: ThemeButtonColors,
    pub error: ThemeButtonColors,
    pub muted: ThemeButtonColors,
    pub disabled: ThemeButtonColors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeButtonColors {
    pub contained: ContainedButtonColors,
    pub outlined: OutlinedButtonColors,
    pub text: TextButtonColors,
}

impl ThemeButtonColors {
    /// Every button style built from one base color.
    pub fn from_base(base: ThemeColor, contained_text: ThemeColor) -> Self {
        Self {
            contained: ContainedButtonColors {
                background: base.clone(),
                text: contained_text,
            },
            outlined: OutlinedButtonColors {
                border: base.clone(),
                text: base.clone(),
            },
            text: TextButtonColors { text: base },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainedButtonColors {
    pub background: ThemeColor,
    pub text: ThemeColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlinedButtonColors {
    pub border: ThemeColor,
    pub text: ThemeColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextButtonColors {
    pub text: ThemeColor,
}

/// A derived theme together with the palette its links point into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiTheme {
    pub id: String,
    #[serde(deserialize_with = "de_dimension")]
    pub rounding: f32,
    #[serde(deserialize_with = "de_dimension")]
    pub spacing: f32,
    #[serde(deserialize_with = "de_dimension")]
    pub font_size: f32,
    pub is_dark_mode: bool,
    #[serde(default)]
    pub contrast_level: ContrastLevel,
    pub palette: ColorPalette,
    pub props: ThemeProps,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb_a;

    #[test]
    fn test_builtin_defaults_parse() {
        let light = ThemeProps::defaults(false);
        let dark = ThemeProps::defaults(true);

        assert_eq!(light.background.default, ThemeColor::Value(Color::WHITE));
        assert_ne!(light, dark);
        let ThemeColor::Value(disabled) = &dark.text.disabled else {
            panic!("built-in defaults are literal colors");
        };
        assert_eq!(disabled.to_rgba8(), [0x99, 0x99, 0x99, 0xff]);
    }

    #[test]
    fn test_theme_color_untagged_forms() {
        let value: ThemeColor = serde_json::from_str(r##""#ff0000""##).unwrap();
        assert_eq!(value, ThemeColor::Value(rgb_a(0xff0000, 1.0)));

        let link: ThemeColor = serde_json::from_str(
            r#"{ "palette_id": "abc", "adjustments": { "alpha": 0.5 } }"#,
        )
        .unwrap();
        let ThemeColor::Link(link) = link else {
            panic!("expected a link");
        };
        assert_eq!(link.palette_id, "abc");
        assert_eq!(link.adjustments.alpha, Some(0.5));
        assert_eq!(link.adjustments.lightness, None);
    }

    #[test]
    fn test_link_without_adjustments_serializes_compactly() {
        let json = serde_json::to_string(&ThemeColor::from(ColorLink::new("abc"))).unwrap();
        assert_eq!(json, r#"{"palette_id":"abc"}"#);
    }

    #[test]
    fn test_adjustments_apply_in_hsl() {
        let gray = rgb_a(0x808080, 1.0);
        let adjustments = ColorAdjustments {
            alpha: Some(0.25),
            lightness: Some(10.0),
            saturation: None,
        };
        let adjusted = adjustments.apply(gray);

        assert_eq!(adjusted.alpha, 0.25);
        assert!((adjusted.to_hsl().lightness - (gray.to_hsl().lightness + 0.1)).abs() < 0.01);
        assert_eq!(ColorAdjustments::default().apply(gray), gray);
    }
}
