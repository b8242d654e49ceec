//! Low-level hex and rgba parsing.

use covshare_common::types::Color;
use regex::Regex;
use std::sync::LazyLock;

/// #RGB, #RRGGBB, or #RRGGBBAA.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// rgb()/rgba() with an optional float or integer alpha.
pub(crate) static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
    )
    .unwrap()
});

pub(super) fn parse_hex(s: &str) -> Option<Color> {
    if !HEX_RE.is_match(s) {
        return None;
    }
    let hex = s.strip_prefix('#')?;
    if hex.len() == 3 {
        let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
        return Some(Color::from_rgba(
            digit(0)? * 17,
            digit(1)? * 17,
            digit(2)? * 17,
            255,
        ));
    }
    Color::from_hex(hex)
}

pub(super) fn parse_rgba(s: &str) -> Option<Color> {
    let caps = RGBA_RE.captures(s)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;

    let a = match caps.get(4).map(|m| m.as_str()) {
        None => 255,
        Some(a) if a.contains('.') => {
            let a: f64 = a.parse().ok()?;
            if !(0.0..=1.0).contains(&a) {
                return None;
            }
            (a * 255.0).round() as u8
        }
        Some(a) => {
            let a: u32 = a.parse().ok()?;
            u8::try_from(a).ok()?
        }
    };

    Some(Color::from_rgba(r, g, b, a))
}
