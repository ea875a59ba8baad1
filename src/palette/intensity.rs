#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::str::FromStr;

use enum_assoc::Assoc;
use palette::Lch;
use serde::{Deserialize, Serialize};

use crate::{Error, color::Color};

/// Overall mood applied to every color of a palette.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Assoc)]
#[serde(rename_all = "lowercase")]
#[func(pub fn id(&self) -> &'static str)]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn description(&self) -> &'static str)]
pub enum PaletteIntensity {
    /// Lifts dark colors and halves chroma.
    #[default]
    #[assoc(id = "pastel")]
    #[assoc(name = "Pastel")]
    #[assoc(description = "Soft, light tones that sit together calmly")]
    Pastel,
    /// Pins lightness near 65 and boosts chroma.
    #[assoc(id = "vibrant")]
    #[assoc(name = "Vibrant")]
    #[assoc(description = "Saturated colors with strong presence")]
    Vibrant,
    /// Halves the lightness of bright colors.
    #[assoc(id = "dark")]
    #[assoc(name = "Dark")]
    #[assoc(description = "Deep colors with plenty of depth")]
    Dark,
    /// Raises lightness towards 95 and softens chroma.
    #[assoc(id = "light")]
    #[assoc(name = "Light")]
    #[assoc(description = "Airy, pale shades")]
    Light,
}

impl PaletteIntensity {
    pub const ALL: [PaletteIntensity; 4] = [
        PaletteIntensity::Vibrant,
        PaletteIntensity::Pastel,
        PaletteIntensity::Light,
        PaletteIntensity::Dark,
    ];

    /// Pulls the color's LCH lightness and chroma into this intensity's band.
    pub fn apply(self, color: Color) -> Color {
        Color::from_lch(self.adjust(color.to_lch()), color.alpha)
    }

    /// Same as [`PaletteIntensity::apply`] without leaving LCH, so derived
    /// colors are only gamut mapped once.
    pub fn adjust(self, mut lch: Lch) -> Lch {
        match self {
            PaletteIntensity::Pastel => {
                if lch.l < 70.0 {
                    lch.l = (lch.l + 20.0).min(85.0);
                }
                lch.chroma *= 0.5;
            }
            PaletteIntensity::Vibrant => {
                if !(60.0..=70.0).contains(&lch.l) {
                    lch.l = 65.0;
                }
                lch.chroma *= 1.2;
            }
            PaletteIntensity::Dark => {
                if lch.l > 40.0 {
                    lch.l *= 0.5;
                }
                lch.chroma *= 0.9;
            }
            PaletteIntensity::Light => {
                if lch.l < 80.0 {
                    lch.l = (lch.l * 1.5).min(95.0);
                }
                lch.chroma *= 0.7;
            }
        }

        lch
    }
}

impl FromStr for PaletteIntensity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|intensity| intensity.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownIntensity(s.to_string()))
    }
}

impl std::fmt::Display for PaletteIntensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb_a;

    const BLUE: u32 = 0x2196f3;

    #[test]
    fn test_pastel_lifts_lightness_and_halves_chroma() {
        let base = rgb_a(BLUE, 1.0);
        let pastel = PaletteIntensity::Pastel.apply(base);

        assert!((pastel.lightness() - (base.lightness() + 20.0).min(85.0)).abs() < 1.0);
        assert!(pastel.chroma() <= base.chroma() * 0.5 + 0.5);
    }

    #[test]
    fn test_vibrant_pins_lightness() {
        let vibrant = PaletteIntensity::Vibrant.apply(rgb_a(0x0d2a4a, 1.0));
        assert!((vibrant.lightness() - 65.0).abs() < 1.0);
    }

    #[test]
    fn test_dark_halves_bright_colors() {
        let base = rgb_a(0xffd700, 1.0);
        let dark = PaletteIntensity::Dark.apply(base);
        assert!((dark.lightness() - base.lightness() * 0.5).abs() < 1.0);

        let already_dark = rgb_a(0x1e2021, 1.0);
        let kept = PaletteIntensity::Dark.apply(already_dark);
        assert!((kept.lightness() - already_dark.lightness()).abs() < 1.0);
    }

    #[test]
    fn test_light_caps_lightness() {
        let light = PaletteIntensity::Light.apply(rgb_a(0x9ccc65, 1.0));
        assert!(light.lightness() <= 95.5);
        assert!(light.lightness() > 80.0);
    }

    #[test]
    fn test_band_edges() {
        let pastel = PaletteIntensity::Pastel.adjust(Lch::new(68.0, 30.0, 120.0));
        assert_eq!(pastel.l, 85.0);
        assert_eq!(pastel.chroma, 15.0);

        let lifted = PaletteIntensity::Pastel.adjust(Lch::new(75.0, 30.0, 120.0));
        assert_eq!(lifted.l, 75.0);

        let vibrant = PaletteIntensity::Vibrant.adjust(Lch::new(63.0, 40.0, 200.0));
        assert_eq!(vibrant.l, 63.0);
        assert!((vibrant.chroma - 48.0).abs() < 1e-3);

        let light = PaletteIntensity::Light.adjust(Lch::new(88.0, 20.0, 90.0));
        assert_eq!(light.l, 88.0);
        assert!((light.chroma - 14.0).abs() < 1e-3);

        let capped = PaletteIntensity::Light.adjust(Lch::new(70.0, 20.0, 90.0));
        assert_eq!(capped.l, 95.0);
    }

    #[test]
    fn test_apply_keeps_alpha() {
        let translucent = rgb_a(BLUE, 0.4);
        for intensity in PaletteIntensity::ALL {
            assert_eq!(intensity.apply(translucent).alpha, 0.4);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Vibrant".parse::<PaletteIntensity>().unwrap(), PaletteIntensity::Vibrant);
        assert!(matches!(
            "neon".parse::<PaletteIntensity>(),
            Err(Error::UnknownIntensity(_))
        ));
    }
}
