//! Declarative token files.
//!
//! A token file composes the color, scale and font operations into a named
//! token set that can be exported as JSON or CSS custom properties.
//!
//! # Token File Format
//!
//! ```toml
//! [meta]
//! name = "Acme"
//! format = "hex"   # default output format: hex, rgb or hsl
//!
//! [palette]
//! brand = "#3366ff"
//! paper = "ivory"
//!
//! [colors]
//! link = "brand"                                     # reference
//! accent = { spin = "brand", rotation = 150 }
//! muted = { blend = "brand", with = "paper", amount = 40, mode = "logarithmic" }
//! accent_hsl = { color = "accent", format = "hsl" }
//!
//! [gradients]
//! wash = { stops = ["brand", "paper"], steps = 5 }
//!
//! [scale]
//! base = "16px"
//! ratio = "major-third"   # or a number
//! steps = [-1, 0, 1, 2]
//!
//! [fonts]
//! body = "system-ui"
//! code = "monospace"
//! ```
//!
//! # Usage
//!
//! ```
//! use swatchkit::tokens;
//!
//! let set = tokens::load_from_str(
//!     "[meta]\nname = \"Demo\"\n[palette]\nbrand = \"#3366ff\"\n[colors]\naccent = { spin = \"brand\" }\n",
//!     None,
//! )
//! .unwrap();
//! assert_eq!(set.color("accent"), Some("#ffcc33"));
//! ```

mod error;
mod export;
mod loader;
mod resolver;
mod schema;

use std::collections::BTreeMap;

use serde::Serialize;

pub use error::TokenError;
pub use loader::{load_from_file, load_from_str};
pub use schema::TokenMeta;

/// A fully resolved token set. All values are already serialized strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenSet {
    /// Token set metadata.
    pub meta: TokenMeta,

    /// Palette entries (name -> color).
    pub palette: BTreeMap<String, String>,

    /// Color tokens (name -> color).
    pub colors: BTreeMap<String, String>,

    /// Gradients (name -> evenly spaced colors).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub gradients: BTreeMap<String, Vec<String>>,

    /// Modular scale (step -> measure).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub scale: BTreeMap<i32, String>,

    /// Font roles (role -> CSS font-family value).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fonts: BTreeMap<String, String>,
}

impl TokenSet {
    /// Get a color by token name, falling back to the palette.
    #[must_use]
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors
            .get(name)
            .or_else(|| self.palette.get(name))
            .map(String::as_str)
    }

    /// Get a gradient's colors by name.
    #[must_use]
    pub fn gradient(&self, name: &str) -> Option<&[String]> {
        self.gradients.get(name).map(Vec::as_slice)
    }

    /// Get the measure at a scale step.
    #[must_use]
    pub fn scale_step(&self, step: i32) -> Option<&str> {
        self.scale.get(&step).map(String::as_str)
    }

    /// Get a font role's CSS value.
    #[must_use]
    pub fn font(&self, role: &str) -> Option<&str> {
        self.fonts.get(role).map(String::as_str)
    }

    /// Check if a color or palette entry exists.
    #[must_use]
    pub fn has_color(&self, name: &str) -> bool {
        self.colors.contains_key(name) || self.palette.contains_key(name)
    }
}
