//! Palette generation.
//!
//! A palette always starts with its base color, followed by the optional
//! secondary color and then whatever the [`PaletteStrategy`] derives. Every
//! color is passed through the palette's [`PaletteIntensity`].

mod intensity;
pub use intensity::*;

mod strategy;
pub use strategy::*;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::{color::Color, theme::deserializers::de_palette_colors, utils::generate_id};

/// Enough inline room for the largest strategy plus a secondary color.
pub type PaletteColors = SmallVec<[ColorEntry; 8]>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub id: String,
    pub name: String,
    pub color: Color,
    /// Locked entries survive [`ColorPalette::regenerate`].
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub locked: bool,
}

impl ColorEntry {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            color,
            locked: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub id: String,
    pub base_color: ColorEntry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<ColorEntry>,
    pub strategy: PaletteStrategy,
    pub intensity: PaletteIntensity,
    #[serde(deserialize_with = "de_palette_colors")]
    pub colors: PaletteColors,
}

/// Builds a palette from a base color, an optional second color picked by the
/// user, a strategy and an intensity.
pub fn create_palette(
    base: Color,
    secondary: Option<Color>,
    strategy: PaletteStrategy,
    intensity: PaletteIntensity,
) -> ColorPalette {
    let mut colors = PaletteColors::new();
    colors.push(ColorEntry::new("Base", intensity.apply(base)));

    if let Some(secondary) = secondary {
        colors.push(ColorEntry::new("Secondary", intensity.apply(secondary)));
    }

    colors.extend(
        strategy
            .derive(base.to_lch())
            .into_iter()
            .map(|(name, lch)| {
                ColorEntry::new(name, Color::from_lch(intensity.adjust(lch), base.alpha))
            }),
    );

    debug!(
        base = %base,
        %strategy,
        %intensity,
        count = colors.len(),
        "generated palette"
    );

    ColorPalette::assemble(
        generate_id(),
        colors,
        secondary.is_some(),
        strategy,
        intensity,
    )
}

impl ColorPalette {
    fn assemble(
        id: String,
        colors: PaletteColors,
        has_secondary: bool,
        strategy: PaletteStrategy,
        intensity: PaletteIntensity,
    ) -> Self {
        let base_color = colors[0].clone();
        let secondary_color = colors.get(1).filter(|_| has_secondary).cloned();

        Self {
            id,
            base_color,
            secondary_color,
            strategy,
            intensity,
            colors,
        }
    }

    /// Regenerates the palette with new settings. Locked entries keep their
    /// position; locked entries past the end of the new palette are appended.
    pub fn regenerate(
        &self,
        base: Color,
        secondary: Option<Color>,
        strategy: PaletteStrategy,
        intensity: PaletteIntensity,
    ) -> ColorPalette {
        let fresh = create_palette(base, secondary, strategy, intensity);
        let fresh_len = fresh.colors.len();

        let mut colors: PaletteColors = fresh
            .colors
            .into_iter()
            .enumerate()
            .map(|(index, entry)| match self.colors.get(index) {
                Some(previous) if previous.locked => previous.clone(),
                _ => entry,
            })
            .collect();

        colors.extend(
            self.colors
                .iter()
                .skip(fresh_len)
                .filter(|entry| entry.locked)
                .cloned(),
        );

        Self::assemble(
            self.id.clone(),
            colors,
            secondary.is_some(),
            strategy,
            intensity,
        )
    }

    pub fn entry(&self, id: &str) -> Option<&ColorEntry> {
        self.colors.iter().find(|entry| entry.id == id)
    }

    /// Returns false when no entry has the given id.
    pub fn set_locked(&mut self, id: &str, locked: bool) -> bool {
        let Some(entry) = self.colors.iter_mut().find(|entry| entry.id == id) else {
            return false;
        };
        entry.locked = locked;

        if let Some(first) = self.colors.first() {
            self.base_color = first.clone();
        }
        if self.secondary_color.is_some() {
            self.secondary_color = self.colors.get(1).cloned();
        }
        true
    }

    /// The palette's first color, which drives primary buttons.
    pub fn primary(&self) -> Color {
        self.base_color.color
    }
}
