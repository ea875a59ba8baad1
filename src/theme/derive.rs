use palette::{Hsl, RgbHue};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::deserializers::de_opt_dimension;
use crate::{
    color::{Color, ContrastLevel, best_text_color, contrast_ratio, rgb_a},
    palette::{ColorEntry, ColorPalette, PaletteIntensity, PaletteStrategy, create_palette},
    theme::{
        ColorLink, ThemeAlertColors, ThemeBackgroundColors, ThemeButtonColors, ThemeButtons,
        ThemeColor, ThemeProps, ThemeTextColors, UiTheme,
    },
    utils::generate_id,
};

pub const DEFAULT_SPACING: f32 = 8.0;
pub const DEFAULT_ROUNDING: f32 = 8.0;
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Settings and role overrides for [`create_theme_from_palette`]. Anything
/// left out falls back to the built-in defaults of the chosen mode.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_dark_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast_level: Option<ContrastLevel>,
    #[serde(deserialize_with = "de_opt_dimension", skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f32>,
    #[serde(deserialize_with = "de_opt_dimension", skip_serializing_if = "Option::is_none")]
    pub rounding: Option<f32>,
    #[serde(deserialize_with = "de_opt_dimension", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<ThemeColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper: Option<ThemeColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<ThemeColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_primary: Option<ThemeColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_secondary: Option<ThemeColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_disabled: Option<ThemeColor>,
}

impl ThemeOptions {
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<ThemeOptions, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }
}

/// Turns a theme color into a concrete color. Links to entries that are not in
/// the palette resolve to black.
pub fn resolve_theme_color(color: &ThemeColor, palette: &ColorPalette) -> Color {
    match color {
        ThemeColor::Value(color) => *color,
        ThemeColor::Link(link) => match palette.entry(&link.palette_id) {
            Some(entry) => link.adjustments.apply(entry.color),
            None => {
                warn!(
                    palette_id = %link.palette_id,
                    "theme color links to a missing palette entry"
                );
                Color::BLACK
            }
        },
    }
}

fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color {
    let hsl: Hsl = Hsl::new(RgbHue::from_degrees(hue), saturation, lightness);
    Color::from_hsl(hsl, 1.0)
}

/// Picks the default background and primary text, fixing whichever side the
/// user did not choose when the pair misses the contrast level.
fn balance_contrast(
    options: &ThemeOptions,
    defaults: &ThemeProps,
    level: ContrastLevel,
    palette: &ColorPalette,
) -> (ThemeColor, ThemeColor) {
    let background = options
        .background
        .clone()
        .unwrap_or_else(|| defaults.background.default.clone());
    let text = options
        .text_primary
        .clone()
        .unwrap_or_else(|| defaults.text.primary.clone());

    let background_color = resolve_theme_color(&background, palette);
    let text_color = resolve_theme_color(&text, palette);
    let ratio = contrast_ratio(background_color, text_color);

    if level.is_met_by(ratio) {
        return (background, text);
    }

    let text_only = options.text_primary.is_some() && options.background.is_none();
    let (background, text): (ThemeColor, ThemeColor) = if text_only {
        debug!(ratio, %level, "replacing background to reach contrast level");
        (best_text_color(text_color).into(), text)
    } else {
        debug!(ratio, %level, "replacing primary text to reach contrast level");
        (background, best_text_color(background_color).into())
    };

    let corrected = contrast_ratio(
        resolve_theme_color(&background, palette),
        resolve_theme_color(&text, palette),
    );
    if !level.is_met_by(corrected) {
        warn!(
            ratio = corrected,
            %level,
            "contrast level cannot be reached with black or white text"
        );
    }

    (background, text)
}

fn derive_alert(base: Color, is_dark_mode: bool, level: ContrastLevel) -> ThemeAlertColors {
    let mut lch = base.to_lch();
    lch.l = if is_dark_mode { 30.0 } else { 90.0 };
    lch.chroma *= 0.5;
    let background = Color::from_lch(lch, base.alpha);

    let text = if level.is_met_by(contrast_ratio(base, background)) {
        base
    } else {
        best_text_color(background)
    };

    ThemeAlertColors {
        text: text.into(),
        background: background.into(),
    }
}

fn linked_button(entry: &ColorEntry) -> ThemeButtonColors {
    ThemeButtonColors::from_base(
        ColorLink::new(entry.id.clone()).into(),
        best_text_color(entry.color).into(),
    )
}

fn literal_button(base: Color) -> ThemeButtonColors {
    ThemeButtonColors::from_base(base.into(), best_text_color(base).into())
}

/// Derives every theme role from a palette.
pub fn create_theme_from_palette(palette: ColorPalette, options: &ThemeOptions) -> UiTheme {
    let is_dark_mode = options.is_dark_mode.unwrap_or(false);
    let contrast_level = options.contrast_level.unwrap_or_default();
    let defaults = ThemeProps::defaults(is_dark_mode);

    let (background, text) = balance_contrast(options, defaults, contrast_level, &palette);
    let background_color = resolve_theme_color(&background, &palette);
    let text_color = resolve_theme_color(&text, &palette);

    // Dark themes raise surfaces and dim secondary text; light themes do the opposite.
    let direction = if is_dark_mode { 1.0 } else { -1.0 };
    let surface = |choice: &Option<ThemeColor>, delta: f32| {
        choice
            .clone()
            .unwrap_or_else(|| background_color.shift_lightness(direction * delta).into())
    };
    let faded = |choice: &Option<ThemeColor>, delta: f32| {
        choice
            .clone()
            .unwrap_or_else(|| text_color.shift_lightness(-direction * delta).into())
    };

    let background = ThemeBackgroundColors {
        paper: surface(&options.paper, 5.0),
        component: surface(&options.component, 10.0),
        default: background,
    };
    let text = ThemeTextColors {
        secondary: faded(&options.text_secondary, 20.0),
        disabled: faded(&options.text_disabled, 40.0),
        primary: text,
    };

    let info = hsl(210.0, 1.0, 0.56);
    let success = hsl(120.0, 0.61, 0.34);
    let warning = hsl(39.0, 1.0, 0.5);
    let error = hsl(0.0, 1.0, 0.5);

    let buttons = ThemeButtons {
        primary: linked_button(&palette.base_color),
        secondary: match palette.colors.get(1) {
            Some(entry) => linked_button(entry),
            None => literal_button(palette.primary().rotate_hue(180.0)),
        },
        error: literal_button(error),
        muted: literal_button(hsl(0.0, 0.0, 0.6)),
        disabled: defaults.buttons.disabled.clone(),
    };

    let props = ThemeProps {
        background,
        text,
        success: derive_alert(success, is_dark_mode, contrast_level),
        info: derive_alert(info, is_dark_mode, contrast_level),
        warning: derive_alert(warning, is_dark_mode, contrast_level),
        error: derive_alert(error, is_dark_mode, contrast_level),
        buttons,
    };

    debug!(
        palette = %palette.id,
        is_dark_mode,
        %contrast_level,
        "derived theme"
    );

    UiTheme {
        id: generate_id(),
        rounding: options.rounding.unwrap_or(DEFAULT_ROUNDING),
        spacing: options.spacing.unwrap_or(DEFAULT_SPACING),
        font_size: options.font_size.unwrap_or(DEFAULT_FONT_SIZE),
        is_dark_mode,
        contrast_level,
        palette,
        props,
    }
}

/// The starting point of a new theme: a pastel complementary palette around
/// material blue.
pub fn default_theme() -> UiTheme {
    let palette = create_palette(
        rgb_a(0x2196f3, 1.0),
        None,
        PaletteStrategy::Complementary,
        PaletteIntensity::Pastel,
    );
    create_theme_from_palette(palette, &ThemeOptions::default())
}
