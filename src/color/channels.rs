//! Channel parser for the `rgb(...)` and `hsl(...)` functional forms.
//!
//! Channels may be separated by commas, whitespace, or both. Out-of-range
//! numbers are clamped into the channel's range rather than rejected.

use super::error::ColorError;
use super::space::{Hsl, Rgb};

/// Parse `rgb(r, g, b)`. Each channel is a number in `0..=255` or a percentage.
pub fn parse_rgb(input: &str) -> Result<Rgb, ColorError> {
    let invalid = || ColorError::InvalidFormat(input.to_string());
    let body = function_body(input, "rgb").ok_or_else(invalid)?;
    let [r, g, b] = split_channels(body).ok_or_else(invalid)?;

    let channel = |token: &str| -> Result<f64, ColorError> {
        let value = match token.strip_suffix('%') {
            Some(pct) => number(pct).map(|v| v * 255.0 / 100.0),
            None => number(token),
        };
        value.ok_or_else(invalid)
    };

    Ok(Rgb::new(channel(r)?, channel(g)?, channel(b)?))
}

/// Parse `hsl(h, s%, l%)`. The hue may carry a `deg` suffix; the `%` on
/// saturation and lightness is optional.
pub fn parse_hsl(input: &str) -> Result<Hsl, ColorError> {
    let invalid = || ColorError::InvalidFormat(input.to_string());
    let body = function_body(input, "hsl").ok_or_else(invalid)?;
    let [h, s, l] = split_channels(body).ok_or_else(invalid)?;

    let hue = strip_suffix_ignore_case(h, "deg").unwrap_or(h);
    let hue = number(hue).ok_or_else(invalid)?;
    let percent = |token: &str| number(token.strip_suffix('%').unwrap_or(token)).ok_or_else(invalid);

    Ok(Hsl::new(hue, percent(s)?, percent(l)?))
}

/// Return the text between the parentheses of `name(...)`, matching `name`
/// case-insensitively.
pub(crate) fn function_body<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    let input = input.trim();
    let head = input.get(..name.len())?;
    if !head.eq_ignore_ascii_case(name) {
        return None;
    }
    input
        .get(name.len()..)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn split_channels(body: &str) -> Option<[&str; 3]> {
    let parts: Vec<&str> = body
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    parts.try_into().ok()
}

fn number(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn strip_suffix_ignore_case<'a>(token: &'a str, suffix: &str) -> Option<&'a str> {
    let split = token.len().checked_sub(suffix.len())?;
    let (head, tail) = (token.get(..split)?, token.get(split..)?);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}
