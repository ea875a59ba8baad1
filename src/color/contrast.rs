#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};

use super::Color;
use crate::Error;

/// WCAG 2.1 relative luminance. Alpha is ignored.
pub fn relative_luminance(color: Color) -> f32 {
    let linear = color.to_linear();
    0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
}

/// WCAG 2.1 contrast ratio, symmetric and within `1.0..=21.0`.
pub fn contrast_ratio(a: Color, b: Color) -> f32 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastReport {
    pub ratio: f32,
    pub passes_aa: bool,
    pub passes_aaa: bool,
}

pub fn check_contrast(foreground: Color, background: Color) -> ContrastReport {
    let ratio = contrast_ratio(foreground, background);
    ContrastReport {
        ratio,
        passes_aa: ratio >= ContrastLevel::AA.value(),
        passes_aaa: ratio >= ContrastLevel::AAA.value(),
    }
}

/// Black or white, whichever reads better on `background`. Ties go to black.
pub fn best_text_color(background: Color) -> Color {
    let on_white = contrast_ratio(background, Color::WHITE);
    let on_black = contrast_ratio(background, Color::BLACK);

    if on_white > on_black {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

/// Minimum contrast ratio a text/background pairing has to reach.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct ContrastLevel(f32);

impl ContrastLevel {
    pub const MIN: f32 = 1.0;
    pub const MAX: f32 = 21.0;

    pub const AA: ContrastLevel = ContrastLevel(4.5);
    pub const AAA: ContrastLevel = ContrastLevel(7.0);

    pub fn new(ratio: f32) -> Result<Self, Error> {
        if (Self::MIN..=Self::MAX).contains(&ratio) {
            Ok(Self(ratio))
        } else {
            Err(Error::ContrastOutOfRange(ratio))
        }
    }

    pub fn value(self) -> f32 {
        self.0
    }

    pub fn is_met_by(self, ratio: f32) -> bool {
        ratio >= self.0
    }

    pub fn grade(self) -> ContrastGrade {
        match self.0 {
            r if r < 2.0 => ContrastGrade::Low,
            r if r < 3.0 => ContrastGrade::Medium,
            r if r < 4.5 => ContrastGrade::Good,
            r if r < 7.0 => ContrastGrade::High,
            _ => ContrastGrade::VeryHigh,
        }
    }
}

impl Default for ContrastLevel {
    fn default() -> Self {
        Self::AA
    }
}

impl TryFrom<f32> for ContrastLevel {
    type Error = Error;

    fn try_from(ratio: f32) -> Result<Self, Self::Error> {
        Self::new(ratio)
    }
}

impl From<ContrastLevel> for f32 {
    fn from(level: ContrastLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Readability bands used to describe a contrast level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Assoc)]
#[func(pub fn label(&self) -> &'static str)]
pub enum ContrastGrade {
    /// Below 2:1.
    #[assoc(label = "Low (not recommended)")]
    Low,
    /// At least 2:1.
    #[assoc(label = "Medium")]
    Medium,
    /// At least 3:1.
    #[assoc(label = "Good")]
    Good,
    /// At least 4.5:1.
    #[assoc(label = "High (AA)")]
    High,
    /// At least 7:1.
    #[assoc(label = "Very high (AAA)")]
    VeryHigh,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb_a;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_black_on_white_is_maximum() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!((ratio - 21.0).abs() < 0.01, "got {ratio}");
    }

    #[test]
    fn test_same_color_is_minimum() {
        let blue = rgb_a(0x2196f3, 1.0);
        assert!((contrast_ratio(blue, blue) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_known_ratio() {
        // #777777 on white is the classic just-under-AA gray.
        let report = check_contrast(rgb_a(0x777777, 1.0), Color::WHITE);
        assert!((report.ratio - 4.48).abs() < 0.02, "got {}", report.ratio);
        assert!(!report.passes_aa);
        assert!(!report.passes_aaa);
    }

    #[test]
    fn test_best_text_color() {
        assert_eq!(best_text_color(Color::WHITE), Color::BLACK);
        assert_eq!(best_text_color(Color::BLACK), Color::WHITE);
        assert_eq!(best_text_color(rgb_a(0x1e2021, 1.0)), Color::WHITE);
        assert_eq!(best_text_color(rgb_a(0xffc14e, 1.0)), Color::BLACK);
    }

    #[test]
    fn test_contrast_is_symmetric_and_bounded() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let a = Color::rgba(rng.random(), rng.random(), rng.random(), 1.0);
            let b = Color::rgba(rng.random(), rng.random(), rng.random(), 1.0);
            let ab = contrast_ratio(a, b);

            assert!((ab - contrast_ratio(b, a)).abs() < 1e-5);
            assert!((1.0..=21.0 + 1e-3).contains(&ab), "ratio {ab} out of range");
        }
    }

    #[test]
    fn test_best_text_color_always_reaches_aa() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..500 {
            let background = Color::rgba(rng.random(), rng.random(), rng.random(), 1.0);
            let ratio = contrast_ratio(best_text_color(background), background);
            assert!(ratio >= 4.5, "only {ratio} on {background}");
        }
    }

    #[test]
    fn test_contrast_level_validation() {
        assert!(ContrastLevel::new(4.5).is_ok());
        assert!(matches!(ContrastLevel::new(0.5), Err(Error::ContrastOutOfRange(_))));
        assert!(matches!(ContrastLevel::new(22.0), Err(Error::ContrastOutOfRange(_))));
        assert!(serde_json::from_str::<ContrastLevel>("30.0").is_err());
        assert_eq!(serde_json::from_str::<ContrastLevel>("7.0").unwrap(), ContrastLevel::AAA);
    }

    #[test]
    fn test_contrast_grades() {
        let grade = |r: f32| ContrastLevel::new(r).unwrap().grade();
        assert_eq!(grade(1.5), ContrastGrade::Low);
        assert_eq!(grade(2.5), ContrastGrade::Medium);
        assert_eq!(grade(3.0), ContrastGrade::Good);
        assert_eq!(grade(4.5), ContrastGrade::High);
        assert_eq!(grade(7.0), ContrastGrade::VeryHigh);
        assert_eq!(ContrastGrade::High.label(), "High (AA)");
    }
}
