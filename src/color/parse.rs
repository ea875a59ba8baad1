use std::str::FromStr;

use palette::{Hsl, RgbHue};

use super::{Color, rgb_a};
use crate::Error;

const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("white", 0xffffff),
    ("red", 0xff0000),
    ("green", 0x008000),
    ("blue", 0x0000ff),
    ("yellow", 0xffff00),
    ("orange", 0xffa500),
    ("purple", 0x800080),
    ("gray", 0x808080),
    ("grey", 0x808080),
    ("silver", 0xc0c0c0),
    ("maroon", 0x800000),
    ("olive", 0x808000),
    ("lime", 0x00ff00),
    ("aqua", 0x00ffff),
    ("cyan", 0x00ffff),
    ("teal", 0x008080),
    ("navy", 0x000080),
    ("fuchsia", 0xff00ff),
    ("magenta", 0xff00ff),
    ("pink", 0xffc0cb),
    ("brown", 0xa52a2a),
    ("indigo", 0x4b0082),
    ("violet", 0xee82ee),
    ("gold", 0xffd700),
    ("coral", 0xff7f50),
    ("crimson", 0xdc143c),
    ("tomato", 0xff6347),
    ("rebeccapurple", 0x663399),
];

impl FromStr for Color {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let text = input.trim().to_ascii_lowercase();
        let invalid = || Error::InvalidColor(input.to_string());

        if let Some(digits) = text.strip_prefix('#') {
            return parse_hex(digits).ok_or_else(invalid);
        }

        if let Some((function, args)) = text.split_once('(')
            && let Some(args) = args.strip_suffix(')')
        {
            let parsed = match function.trim() {
                "rgb" | "rgba" => parse_rgb_args(args),
                "hsl" | "hsla" => parse_hsl_args(args),
                _ => None,
            };
            return parsed.ok_or_else(invalid);
        }

        if text == "transparent" {
            return Ok(Color::TRANSPARENT);
        }

        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == text)
            .map(|&(_, hex)| rgb_a(hex, 1.0))
            .ok_or_else(invalid)
    }
}

fn parse_hex(digits: &str) -> Option<Color> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_string(),
        _ => return None,
    };

    let byte = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    let alpha = match expanded.len() {
        8 => byte(6)? as f32 / 255.0,
        _ => 1.0,
    };

    Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, alpha))
}

/// Splits CSS function arguments on commas, slashes and whitespace.
fn split_args(args: &str) -> Vec<&str> {
    args.split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect()
}

fn parse_number(part: &str) -> Option<f32> {
    part.parse::<f32>().ok().filter(|v| v.is_finite())
}

fn parse_alpha(part: Option<&&str>) -> Option<f32> {
    match part {
        None => Some(1.0),
        Some(part) => match part.strip_suffix('%') {
            Some(percent) => parse_number(percent).map(|v| v / 100.0),
            None => parse_number(part),
        },
    }
    .map(|a| a.clamp(0.0, 1.0))
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    let parts = split_args(args);
    if !(3..=4).contains(&parts.len()) {
        return None;
    }

    let channel = |part: &str| match part.strip_suffix('%') {
        Some(percent) => parse_number(percent).map(|v| v / 100.0),
        None => parse_number(part).map(|v| v / 255.0),
    };

    Some(Color::rgba(
        channel(parts[0])?.clamp(0.0, 1.0),
        channel(parts[1])?.clamp(0.0, 1.0),
        channel(parts[2])?.clamp(0.0, 1.0),
        parse_alpha(parts.get(3))?,
    ))
}

fn parse_hsl_args(args: &str) -> Option<Color> {
    let parts = split_args(args);
    if !(3..=4).contains(&parts.len()) {
        return None;
    }

    let hue = parse_number(parts[0].strip_suffix("deg").unwrap_or(parts[0]))?;
    let percent = |part: &str| {
        parse_number(part.strip_suffix('%').unwrap_or(part)).map(|v| (v / 100.0).clamp(0.0, 1.0))
    };

    let hsl: Hsl = Hsl::new(
        RgbHue::from_degrees(hue.rem_euclid(360.0)),
        percent(parts[1])?,
        percent(parts[2])?,
    );

    Some(Color::from_hsl(hsl, parse_alpha(parts.get(3))?))
}
