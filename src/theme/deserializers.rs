use serde::{Deserialize, Deserializer, de::Error};

use crate::{color::Color, palette::PaletteColors};

pub fn de_palette_colors<'de, D>(deserializer: D) -> Result<PaletteColors, D::Error>
where
    D: Deserializer<'de>,
{
    let value = PaletteColors::deserialize(deserializer)?;

    if value.is_empty() {
        return Err(D::Error::custom("a palette needs at least one color."));
    }

    Ok(value)
}

/// Accepts `8`, `8.5` or `"8px"`.
pub fn de_dimension<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    dimension_from::<D>(StringOrFloat::deserialize(deserializer)?)
}

pub fn de_opt_dimension<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrFloat>::deserialize(deserializer)? {
        Some(value) => dimension_from::<D>(value).map(Some),
        None => Ok(None),
    }
}

fn dimension_from<'de, D>(value: StringOrFloat) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    match value {
        StringOrFloat::Float(pixels) => Ok(pixels),

        StringOrFloat::String(string) => {
            let string = match string.trim().strip_suffix("px") {
                Some(string) => string.to_string(),
                None => return Err(D::Error::custom("expected string to end with 'px'")),
            };

            match string.trim().parse::<f32>() {
                Ok(pixels) => Ok(pixels),
                Err(_) => Err(D::Error::custom("could not convert string into pixels")),
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

fn opaque() -> f32 {
    1.0
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum StringOrChannels {
            String(String),
            Channels {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "opaque")]
                a: f32,
            },
        }

        match StringOrChannels::deserialize(deserializer)? {
            StringOrChannels::String(string) => string.parse().map_err(D::Error::custom),
            StringOrChannels::Channels { r, g, b, a } => Ok(Color::from_rgba8(r, g, b, a)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Dimensions {
        #[serde(deserialize_with = "de_dimension")]
        rounding: f32,
        #[serde(default, deserialize_with = "de_opt_dimension")]
        spacing: Option<f32>,
    }

    #[test]
    fn test_dimension_accepts_numbers_and_px() {
        let parsed: Dimensions =
            serde_json::from_str(r#"{ "rounding": 8, "spacing": "12px" }"#).unwrap();
        assert_eq!(parsed.rounding, 8.0);
        assert_eq!(parsed.spacing, Some(12.0));

        let parsed: Dimensions = serde_json::from_str(r#"{ "rounding": "4.5px" }"#).unwrap();
        assert_eq!(parsed.rounding, 4.5);
        assert_eq!(parsed.spacing, None);
    }

    #[test]
    fn test_dimension_rejects_other_units() {
        assert!(serde_json::from_str::<Dimensions>(r#"{ "rounding": "1rem" }"#).is_err());
        assert!(serde_json::from_str::<Dimensions>(r#"{ "rounding": "wide px" }"#).is_err());
    }

    #[test]
    fn test_color_from_string_or_channels() {
        let color: Color = serde_json::from_str(r#""hsl(0, 100%, 50%)""#).unwrap();
        assert_eq!(color.to_rgba8(), [255, 0, 0, 255]);

        let color: Color = serde_json::from_str(r#"{ "r": 1, "g": 2, "b": 3 }"#).unwrap();
        assert_eq!(color.to_rgba8(), [1, 2, 3, 255]);

        let color: Color = serde_json::from_str(r#"{ "r": 1, "g": 2, "b": 3, "a": 0.5 }"#).unwrap();
        assert_eq!(color.alpha, 0.5);

        assert!(serde_json::from_str::<Color>(r#""not a color""#).is_err());
    }
}
