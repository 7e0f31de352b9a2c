//! TOML schema types for token files.
//!
//! These types define the structure of token TOML files and handle deserialization.
//! Format and mode names stay strings here so that bad values surface as color
//! errors naming the token, rather than as opaque TOML errors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::{DEFAULT_BLEND_AMOUNT, DEFAULT_ROTATION};

/// Root structure of a token TOML file.
#[derive(Debug, Deserialize)]
pub struct TokenFile {
    /// Token set metadata.
    pub meta: TokenMeta,

    /// Literal colors, in any accepted syntax.
    #[serde(default)]
    pub palette: BTreeMap<String, String>,

    /// References to palette entries or other colors, or derived colors.
    #[serde(default)]
    pub colors: BTreeMap<String, ColorDef>,

    /// Gradients sampled into evenly spaced steps.
    #[serde(default)]
    pub gradients: BTreeMap<String, GradientDef>,

    /// Modular scale definition.
    #[serde(default)]
    pub scale: Option<ScaleDef>,

    /// Font roles mapped to system stack names.
    #[serde(default)]
    pub fonts: BTreeMap<String, String>,
}

/// Token set metadata.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TokenMeta {
    /// Display name of the token set.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Output format for colors that don't name their own.
    #[serde(default, skip_serializing)]
    pub format: Option<String>,
}

/// A color token definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    /// A palette name, another color token, or a literal color.
    Reference(String),

    /// Hue rotation of another color.
    Spin {
        spin: String,
        #[serde(default = "default_rotation")]
        rotation: f64,
        #[serde(default)]
        format: Option<String>,
    },

    /// A blend of two colors.
    Blend {
        blend: String,
        with: String,
        #[serde(default = "default_amount")]
        amount: f64,
        #[serde(default)]
        mode: Option<String>,
        #[serde(default)]
        format: Option<String>,
    },

    /// Another color re-emitted, usually in a different format.
    Convert {
        color: String,
        #[serde(default)]
        format: Option<String>,
    },
}

impl ColorDef {
    /// The output format this definition asks for, if any.
    pub fn format(&self) -> Option<&str> {
        match self {
            Self::Reference(_) => None,
            Self::Spin { format, .. } | Self::Blend { format, .. } | Self::Convert { format, .. } => {
                format.as_deref()
            }
        }
    }
}

/// Gradient definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GradientDef {
    /// Color references, first to last.
    pub stops: Vec<String>,

    /// Number of colors to emit.
    #[serde(default = "default_gradient_steps")]
    pub steps: usize,

    #[serde(default)]
    pub mode: Option<String>,

    #[serde(default)]
    pub format: Option<String>,
}

/// Modular scale definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScaleDef {
    /// Base measure, like `"16px"` or `"1rem"`.
    pub base: String,

    /// A ratio name or a number.
    pub ratio: RatioDef,

    /// Steps to emit.
    #[serde(default = "default_scale_steps")]
    pub steps: Vec<i32>,
}

/// A ratio given by name or value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RatioDef {
    Value(f64),
    Name(String),
}

fn default_rotation() -> f64 {
    DEFAULT_ROTATION
}

fn default_amount() -> f64 {
    DEFAULT_BLEND_AMOUNT
}

fn default_gradient_steps() -> usize {
    5
}

fn default_scale_steps() -> Vec<i32> {
    (-2..=5).collect()
}
