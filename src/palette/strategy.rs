#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::str::FromStr;

use enum_assoc::Assoc;
use palette::{LabHue, Lch};
use serde::{Deserialize, Serialize};

use crate::Error;

/// How the derived colors of a palette relate to its base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Assoc)]
#[serde(rename_all = "kebab-case")]
#[func(pub fn id(&self) -> &'static str)]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn description(&self) -> &'static str)]
pub enum PaletteStrategy {
    /// Four lightness steps of the base hue.
    #[assoc(id = "monochromatic")]
    #[assoc(name = "Monochromatic")]
    #[assoc(description = "Shades of a single hue at different lightness levels")]
    Monochromatic,
    /// Hues 30 and 60 degrees either side of the base.
    #[assoc(id = "analogous")]
    #[assoc(name = "Analogous")]
    #[assoc(description = "Neighbouring hues on the color wheel")]
    Analogous,
    /// The opposite hue, then base and complement at lightness 60 and 80.
    #[assoc(id = "complementary")]
    #[assoc(name = "Complementary")]
    #[assoc(description = "The base color and its opposite on the color wheel")]
    Complementary,
    /// Two hues at 120 degree steps.
    #[assoc(id = "triadic")]
    #[assoc(name = "Triadic")]
    #[assoc(description = "Three hues spaced evenly around the color wheel")]
    Triadic,
    /// Three hues at 90 degree steps.
    #[assoc(id = "tetradic")]
    #[assoc(name = "Tetradic")]
    #[assoc(description = "Four hues spaced evenly around the color wheel")]
    Tetradic,
    /// The hues 150 degrees either side of the base.
    #[assoc(id = "split-complementary")]
    #[assoc(name = "Split complementary")]
    #[assoc(description = "The base color and the two hues either side of its complement")]
    SplitComplementary,
}

impl PaletteStrategy {
    pub const ALL: [PaletteStrategy; 6] = [
        PaletteStrategy::Monochromatic,
        PaletteStrategy::Analogous,
        PaletteStrategy::Complementary,
        PaletteStrategy::Triadic,
        PaletteStrategy::Tetradic,
        PaletteStrategy::SplitComplementary,
    ];

    /// Named colors this strategy adds after the base (and secondary) color.
    /// Everything is derived from the unadjusted base in LCH.
    pub fn derive(self, base: Lch) -> Vec<(String, Lch)> {
        match self {
            PaletteStrategy::Monochromatic => (1..=4)
                .map(|i| {
                    let lightness = 30.0 + 15.0 * i as f32;
                    (format!("Shade {i}"), with_lightness(base, lightness))
                })
                .collect(),

            PaletteStrategy::Analogous => [-2, -1, 1, 2]
                .into_iter()
                .map(|step: i32| {
                    let side = if step < 0 { "left" } else { "right" };
                    (
                        format!("Analogous {side} {}", step.abs()),
                        rotate(base, 30.0 * step as f32),
                    )
                })
                .collect(),

            PaletteStrategy::Complementary => {
                let complement = rotate(base, 180.0);
                let mut colors = vec![("Complement".to_string(), complement)];
                for i in 1..=2 {
                    let lightness = 40.0 + 20.0 * i as f32;
                    colors.push((
                        format!("Base shade {i}"),
                        with_lightness(base, lightness),
                    ));
                    colors.push((
                        format!("Complement shade {i}"),
                        with_lightness(complement, lightness),
                    ));
                }
                colors
            }

            PaletteStrategy::Triadic => (1..=2)
                .map(|i| (format!("Triad {i}"), rotate(base, 120.0 * i as f32)))
                .collect(),

            PaletteStrategy::Tetradic => (1..=3)
                .map(|i| (format!("Tetrad {i}"), rotate(base, 90.0 * i as f32)))
                .collect(),

            PaletteStrategy::SplitComplementary => [150.0, 210.0]
                .into_iter()
                .enumerate()
                .map(|(i, degrees)| {
                    (format!("Split complement {}", i + 1), rotate(base, degrees))
                })
                .collect(),
        }
    }
}

fn rotate(lch: Lch, degrees: f32) -> Lch {
    let hue = (lch.hue.into_positive_degrees() + degrees).rem_euclid(360.0);
    Lch::new(lch.l, lch.chroma, LabHue::from_degrees(hue))
}

fn with_lightness(lch: Lch, lightness: f32) -> Lch {
    Lch::new(lightness, lch.chroma, lch.hue)
}

impl FromStr for PaletteStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.id() == wanted)
            .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
    }
}

impl std::fmt::Display for PaletteStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_match_serde_names() {
        for strategy in PaletteStrategy::ALL {
            let json = serde_json::to_string(&strategy).unwrap();
            assert_eq!(json, format!("\"{}\"", strategy.id()));
        }
    }

    #[test]
    fn test_from_str_accepts_ids_and_underscores() {
        assert_eq!(
            "split-complementary".parse::<PaletteStrategy>().unwrap(),
            PaletteStrategy::SplitComplementary
        );
        assert_eq!(
            "Split_Complementary".parse::<PaletteStrategy>().unwrap(),
            PaletteStrategy::SplitComplementary
        );
        assert!(matches!(
            "rainbow".parse::<PaletteStrategy>(),
            Err(Error::UnknownStrategy(_))
        ));
    }

    fn hues(strategy: PaletteStrategy) -> Vec<f32> {
        let base: Lch = Lch::new(55.0, 40.0, LabHue::from_degrees(20.0));
        strategy
            .derive(base)
            .into_iter()
            .map(|(_, lch)| lch.hue.into_positive_degrees().round())
            .collect()
    }

    #[test]
    fn test_hue_offsets() {
        assert_eq!(hues(PaletteStrategy::Analogous), vec![320.0, 350.0, 50.0, 80.0]);
        assert_eq!(hues(PaletteStrategy::Triadic), vec![140.0, 260.0]);
        assert_eq!(hues(PaletteStrategy::Tetradic), vec![110.0, 200.0, 290.0]);
        assert_eq!(hues(PaletteStrategy::SplitComplementary), vec![170.0, 230.0]);
    }

    #[test]
    fn test_monochromatic_steps_lightness() {
        let base: Lch = Lch::new(55.0, 40.0, LabHue::from_degrees(20.0));
        let lightness: Vec<f32> = PaletteStrategy::Monochromatic
            .derive(base)
            .into_iter()
            .map(|(_, lch)| lch.l)
            .collect();
        assert_eq!(lightness, vec![45.0, 60.0, 75.0, 90.0]);
    }

    #[test]
    fn test_complementary_interleaves_shades() {
        let base: Lch = Lch::new(55.0, 40.0, LabHue::from_degrees(20.0));
        let derived = PaletteStrategy::Complementary.derive(base);
        let names: Vec<&str> = derived.iter().map(|(name, _)| name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "Complement",
                "Base shade 1",
                "Complement shade 1",
                "Base shade 2",
                "Complement shade 2"
            ]
        );
        assert_eq!(derived[3].1.l, 80.0);
        assert_eq!(derived[4].1.hue.into_positive_degrees().round(), 200.0);
    }

    #[test]
    fn test_every_strategy_is_described() {
        for strategy in PaletteStrategy::ALL {
            assert!(!strategy.name().is_empty());
            assert!(!strategy.description().is_empty());
        }
    }
}
