//! Format detection and the tagged color value every operation works on.

use std::fmt;
use std::str::FromStr;

use super::channels::{parse_hsl, parse_rgb};
use super::error::ColorError;
use super::format::{BlendMode, ColorFormat};
use super::hex::{format_hex, is_bare_hex, parse_hex};
use super::named;
use super::space::{Hsl, Rgb, normalize_hue};

/// Channel data in the space it was parsed (or last computed) in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Channels {
    Rgb(Rgb),
    Hsl(Hsl),
}

/// A color string that has been classified and decoded.
///
/// `format` is the syntax the value was written in and is what [`Display`]
/// serializes back to, so operations preserve the caller's format.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParsedColor {
    format: ColorFormat,
    channels: Channels,
}

impl ParsedColor {
    /// Classify and decode a color string.
    ///
    /// Parsers are tried in a fixed order: hex (`#` prefix or bare 3/6 hex
    /// digits), `rgb(...)`, `hsl(...)`, then the named-color table. Names
    /// resolve to [`ColorFormat::Hex`].
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();

        if trimmed.starts_with('#') || is_bare_hex(trimmed) {
            let [r, g, b] = parse_hex(trimmed)?;
            return Ok(Self::new(ColorFormat::Hex, Channels::Rgb(Rgb::from_u8(r, g, b))));
        }

        if starts_with_ignore_case(trimmed, "rgb") {
            return Ok(Self::new(ColorFormat::Rgb, Channels::Rgb(parse_rgb(trimmed)?)));
        }

        if starts_with_ignore_case(trimmed, "hsl") {
            return Ok(Self::new(ColorFormat::Hsl, Channels::Hsl(parse_hsl(trimmed)?)));
        }

        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            let [r, g, b] = parse_hex(named::lookup(trimmed)?)?;
            return Ok(Self::new(ColorFormat::Hex, Channels::Rgb(Rgb::from_u8(r, g, b))));
        }

        Err(ColorError::InvalidFormat(input.to_string()))
    }

    /// Build a color from channels, tagged with the format it serializes to.
    #[must_use]
    pub const fn new(format: ColorFormat, channels: Channels) -> Self {
        Self { format, channels }
    }

    /// The format this color was written in.
    #[must_use]
    pub const fn format(&self) -> ColorFormat {
        self.format
    }

    /// The channels as stored.
    #[must_use]
    pub const fn channels(&self) -> Channels {
        self.channels
    }

    /// Re-tag the color so it serializes as `format`. Channels are untouched.
    #[must_use]
    pub const fn with_format(self, format: ColorFormat) -> Self {
        Self { format, ..self }
    }

    /// RGB channels at full precision.
    #[must_use]
    pub fn rgb(&self) -> Rgb {
        match self.channels {
            Channels::Rgb(rgb) => rgb,
            Channels::Hsl(hsl) => hsl.to_rgb(),
        }
    }

    /// HSL channels at full precision.
    #[must_use]
    pub fn hsl(&self) -> Hsl {
        match self.channels {
            Channels::Rgb(rgb) => rgb.to_hsl(),
            Channels::Hsl(hsl) => hsl,
        }
    }

    /// Rotate the hue by `degrees`, keeping the format.
    ///
    /// Whole turns return the color untouched, so they serialize exactly like
    /// the input without an RGB/HSL trip.
    #[must_use]
    pub fn spin(&self, degrees: f64) -> Self {
        #[allow(clippy::float_cmp)]
        let whole_turn = normalize_hue(degrees) == 0.0;
        if whole_turn {
            return *self;
        }
        Self::new(self.format, Channels::Hsl(self.hsl().rotate(degrees)))
    }

    /// Move `amount` percent of the way toward `target`, keeping this color's format.
    ///
    /// If no channel moves (blending a color with itself, or `amount` is 0)
    /// the original channels are returned untouched, so the result serializes
    /// exactly like the input.
    pub fn blend(&self, target: &Self, amount: f64, mode: BlendMode) -> Result<Self, ColorError> {
        if !(0.0..=100.0).contains(&amount) {
            return Err(ColorError::InvalidAmount(amount));
        }

        let from = self.rgb();
        let mixed = from.mix(target.rgb(), amount / 100.0, mode);

        if mixed == from {
            return Ok(*self);
        }
        Ok(Self::new(self.format, Channels::Rgb(mixed)))
    }

    /// [`blend`](Self::blend), with a moved result snapped to integer RGB
    /// channels. An unmoved color is returned untouched.
    pub fn blend_rounded(
        &self,
        target: &Self,
        amount: f64,
        mode: BlendMode,
    ) -> Result<Self, ColorError> {
        let mixed = self.blend(target, amount, mode)?;
        if mixed == *self {
            return Ok(mixed);
        }
        Ok(mixed.rounded())
    }

    /// Snap the channels to whole RGB values, keeping the format.
    ///
    /// HSL-tagged results of [`blend`](Self::blend) serialize from these
    /// integer channels rather than the unrounded mix.
    #[must_use]
    pub fn rounded(&self) -> Self {
        let [r, g, b] = self.rgb().to_u8();
        Self::new(self.format, Channels::Rgb(Rgb::from_u8(r, g, b)))
    }

    /// Serialize in `format`, rounding channels half-up.
    #[must_use]
    pub fn to_string_as(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Hex => format_hex(self.rgb()),
            ColorFormat::Rgb => {
                let [r, g, b] = self.rgb().to_u8();
                format!("rgb({r}, {g}, {b})")
            }
            ColorFormat::Hsl => {
                let (h, s, l) = self.hsl().to_display();
                format!("hsl({h}, {s}%, {l}%)")
            }
        }
    }
}

impl fmt::Display for ParsedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_as(self.format))
    }
}

impl FromStr for ParsedColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
