//! Terminal swatches for colors.
//!
//! Renders parsed colors as truecolor blocks via the colored crate.

use colored::{ColoredString, Colorize};

use crate::color::{ParsedColor, Rgb};

const SWATCH: &str = "    ";

/// Convert a color to an RGB tuple for the colored crate.
pub trait ToColoredRgb {
    /// RGB tuple for colored's `.truecolor()` method.
    fn to_rgb_tuple(&self) -> (u8, u8, u8);
}

impl ToColoredRgb for Rgb {
    fn to_rgb_tuple(&self) -> (u8, u8, u8) {
        let [r, g, b] = self.to_u8();
        (r, g, b)
    }
}

impl ToColoredRgb for ParsedColor {
    fn to_rgb_tuple(&self) -> (u8, u8, u8) {
        self.rgb().to_rgb_tuple()
    }
}

/// Extension trait for painting strings with a color.
pub trait ColoredExt {
    /// Apply a color as foreground.
    fn swatch_fg(self, color: &impl ToColoredRgb) -> ColoredString;

    /// Apply a color as background.
    fn swatch_bg(self, color: &impl ToColoredRgb) -> ColoredString;
}

impl<S: AsRef<str>> ColoredExt for S {
    fn swatch_fg(self, color: &impl ToColoredRgb) -> ColoredString {
        let (r, g, b) = color.to_rgb_tuple();
        self.as_ref().truecolor(r, g, b)
    }

    fn swatch_bg(self, color: &impl ToColoredRgb) -> ColoredString {
        let (r, g, b) = color.to_rgb_tuple();
        self.as_ref().on_truecolor(r, g, b)
    }
}

/// A swatch block followed by the color's text.
#[must_use]
pub fn swatch_line(color: &ParsedColor) -> String {
    format!("{} {}", SWATCH.swatch_bg(color), color)
}

/// A labelled swatch line, for token listings.
#[must_use]
pub fn labelled_swatch_line(label: &str, color: &ParsedColor) -> String {
    format!("{} {} {}", SWATCH.swatch_bg(color), label.bold(), color)
}

/// One swatch block per color, side by side.
#[must_use]
pub fn swatch_strip(colors: &[ParsedColor]) -> String {
    colors
        .iter()
        .map(|color| SWATCH.swatch_bg(color).to_string())
        .collect()
}
