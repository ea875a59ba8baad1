//! Color values and the conversions the palette engine relies on.
//!
//! A [`Color`] is stored as gamma-encoded sRGB with straight alpha. Every
//! operation that goes through LCH maps its result back into the sRGB gamut,
//! so colors handed out by the engine are always displayable.

mod contrast;
pub use contrast::*;

mod format;
pub use format::*;

mod parse;

use palette::{FromColor, Hsl, LabHue, Lch, LinSrgb, Srgb, convert::FromColorUnclamped};
use serde::{Serialize, Serializer};

/// Iterations of the chroma search used when an LCH color falls outside sRGB.
const GAMUT_SEARCH_STEPS: usize = 20;

/// Tolerance for channels that land a hair outside `0.0..=1.0` after conversion.
const GAMUT_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

/// Creates a color from a packed `0xRRGGBB` value and an alpha component.
pub fn rgb_a(hex: u32, alpha: f32) -> Color {
    let [_, r, g, b] = hex.to_be_bytes();
    Color::from_rgba8(r, g, b, alpha)
}

impl Color {
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            red: r as f32 / 255.0,
            green: g as f32 / 255.0,
            blue: b as f32 / 255.0,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Channels rounded to 8 bits, alpha included.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
            .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    pub fn from_srgb(rgb: Srgb, alpha: f32) -> Self {
        Self {
            red: rgb.red.clamp(0.0, 1.0),
            green: rgb.green.clamp(0.0, 1.0),
            blue: rgb.blue.clamp(0.0, 1.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    pub fn to_srgb(self) -> Srgb {
        Srgb::new(self.red, self.green, self.blue)
    }

    pub fn to_linear(self) -> LinSrgb {
        self.to_srgb().into_linear()
    }

    /// Builds a color from LCH, reducing chroma at constant lightness and hue
    /// until the result fits in sRGB.
    pub fn from_lch(lch: Lch, alpha: f32) -> Self {
        let lch: Lch = Lch::new(lch.l.clamp(0.0, 100.0), lch.chroma.max(0.0), lch.hue);

        let rgb: Srgb = Srgb::from_color_unclamped(lch);
        if in_gamut(rgb) {
            return Self::from_srgb(rgb, alpha);
        }

        let (mut low, mut high) = (0.0_f32, lch.chroma);
        for _ in 0..GAMUT_SEARCH_STEPS {
            let mid = (low + high) / 2.0;
            let candidate: Lch = Lch::new(lch.l, mid, lch.hue);
            if in_gamut(Srgb::from_color_unclamped(candidate)) {
                low = mid;
            } else {
                high = mid;
            }
        }

        let mapped: Lch = Lch::new(lch.l, low, lch.hue);
        Self::from_srgb(Srgb::from_color_unclamped(mapped), alpha)
    }

    pub fn to_lch(self) -> Lch {
        Lch::from_color(self.to_srgb())
    }

    pub fn from_hsl(hsl: Hsl, alpha: f32) -> Self {
        Self::from_srgb(Srgb::from_color(hsl), alpha)
    }

    pub fn to_hsl(self) -> Hsl {
        Hsl::from_color(self.to_srgb())
    }

    /// LCH lightness, `0.0..=100.0`.
    pub fn lightness(self) -> f32 {
        self.to_lch().l
    }

    pub fn chroma(self) -> f32 {
        self.to_lch().chroma
    }

    /// LCH hue in degrees, `0.0..360.0`.
    pub fn hue(self) -> f32 {
        self.to_lch().hue.into_positive_degrees()
    }

    fn map_lch(self, f: impl FnOnce(&mut Lch)) -> Self {
        let mut lch = self.to_lch();
        f(&mut lch);
        Self::from_lch(lch, self.alpha)
    }

    pub fn with_lightness(self, lightness: f32) -> Self {
        self.map_lch(|lch| lch.l = lightness)
    }

    pub fn with_chroma(self, chroma: f32) -> Self {
        self.map_lch(|lch| lch.chroma = chroma)
    }

    pub fn with_hue(self, degrees: f32) -> Self {
        self.map_lch(|lch| lch.hue = LabHue::from_degrees(degrees.rem_euclid(360.0)))
    }

    pub fn rotate_hue(self, degrees: f32) -> Self {
        self.with_hue(self.hue() + degrees)
    }

    /// Moves LCH lightness by `delta`, clamped to `0.0..=100.0`.
    pub fn shift_lightness(self, delta: f32) -> Self {
        self.map_lch(|lch| lch.l = (lch.l + delta).clamp(0.0, 100.0))
    }

    pub fn scale_chroma(self, factor: f32) -> Self {
        self.map_lch(|lch| lch.chroma *= factor)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Shifts HSL lightness and saturation by fractional deltas (`0.1` is ten
    /// percentage points).
    pub fn adjust_hsl(self, lightness: f32, saturation: f32) -> Self {
        let mut hsl = self.to_hsl();
        hsl.lightness = (hsl.lightness + lightness).clamp(0.0, 1.0);
        hsl.saturation = (hsl.saturation + saturation).clamp(0.0, 1.0);
        Self::from_hsl(hsl, self.alpha)
    }
}

fn in_gamut(rgb: Srgb) -> bool {
    [rgb.red, rgb.green, rgb.blue]
        .iter()
        .all(|c| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(c))
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(ColorFormat::Hex))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format(ColorFormat::Hex))
    }
}
