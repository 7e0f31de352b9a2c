//! Format and blend-mode tags.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::error::ColorError;

/// Textual color representation.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s%, l%)`
    Hsl,
}

impl ColorFormat {
    /// Parse a target format name, mapping failures to [`ColorError::UnsupportedFormat`].
    pub fn parse(name: &str) -> Result<Self, ColorError> {
        Self::from_str(name.trim()).map_err(|_| ColorError::UnsupportedFormat(name.to_string()))
    }
}

/// Interpolation space used by [`blend`](super::blend).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    /// Straight weighted average per channel.
    #[default]
    Linear,
    /// Squares channels before interpolating and takes the square root after,
    /// which keeps midpoints from going muddy.
    Logarithmic,
}

impl BlendMode {
    /// Parse a mode name, mapping failures to [`ColorError::UnsupportedMode`].
    pub fn parse(name: &str) -> Result<Self, ColorError> {
        Self::from_str(name.trim()).map_err(|_| ColorError::UnsupportedMode(name.to_string()))
    }
}
