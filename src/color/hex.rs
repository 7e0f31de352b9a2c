//! Hex codec: `#RGB` / `#RRGGBB` to channels and back.

use super::error::ColorError;
use super::space::Rgb;

/// Decode a 3- or 6-digit hex color, with or without the leading `#`.
///
/// Shorthand digits are doubled (`#3f0` is `#33ff00`).
pub fn parse_hex(hex: &str) -> Result<[u8; 3], ColorError> {
    let malformed = || ColorError::MalformedHex(hex.to_string());
    let digits = hex.trim().strip_prefix('#').unwrap_or_else(|| hex.trim());

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    let expanded = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => digits.to_string(),
        _ => return Err(malformed()),
    };

    let pair = |start: usize| {
        expanded
            .get(start..start + 2)
            .and_then(|p| u8::from_str_radix(p, 16).ok())
            .ok_or_else(malformed)
    };

    Ok([pair(0)?, pair(2)?, pair(4)?])
}

/// Encode channels as lowercase `#rrggbb`, clamping and rounding each one first.
#[must_use]
pub fn format_hex(rgb: Rgb) -> String {
    let [r, g, b] = rgb.to_u8();
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Whether `s` is a bare run of 3 or 6 hex digits.
pub(crate) fn is_bare_hex(s: &str) -> bool {
    matches!(s.len(), 3 | 6) && s.bytes().all(|b| b.is_ascii_hexdigit())
}
