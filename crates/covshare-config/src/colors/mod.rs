//! Handle color parsing.
//!
//! Divider colors are CSS-style strings: `#RGB`, `#RRGGBB`, `#RRGGBBAA`,
//! `rgb(r,g,b)`, `rgba(r,g,b,a)` or a color keyword such as `black`.
//! In `rgba()` the alpha may be 0.0-1.0 (float) or 0-255 (integer).

mod parse;


use covshare_common::types::Color;
use covshare_common::ConfigError;

use parse::{parse_hex, parse_rgba, HEX_RE, RGBA_RE};

/// Parse a color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return parse_rgba(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid rgba color: {s}")));
    }

    Color::from_name(s)
        .ok_or_else(|| ConfigError::ParseError(format!("unrecognized color format: {s}")))
}

/// Whether `s` is a color [`parse_color`] would accept.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return RGBA_RE.is_match(s) && parse_rgba(s).is_some();
    }
    Color::from_name(s).is_some()
}
