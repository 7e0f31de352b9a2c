//! Token file error types.

use std::path::{Path, PathBuf};

use crate::color::ColorError;
use crate::fonts::FontStackError;
use crate::scale::ScaleError;

/// Errors that can occur when loading or resolving a token file.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Failed to read the token file.
    #[error("failed to read token file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML.
    #[error("failed to parse token file{}: {source}", describe(.path.as_deref()))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: toml::de::Error,
    },

    /// A color token could not be parsed or computed.
    #[error("invalid color for token '{token}': {source}")]
    InvalidColor {
        token: String,
        #[source]
        source: ColorError,
    },

    /// The modular scale definition is invalid.
    #[error("invalid scale: {0}")]
    Scale(#[from] ScaleError),

    /// A font role names an unknown stack.
    #[error("invalid font for role '{role}': {source}")]
    Font {
        role: String,
        #[source]
        source: FontStackError,
    },

    /// Circular reference detected in token resolution.
    #[error("circular reference detected for token '{token}': {}", .chain.join(" -> "))]
    CircularReference { token: String, chain: Vec<String> },

    /// A reference names neither a token, a palette entry, nor a color.
    #[error("token '{token}' references unknown color '{reference}'")]
    UnresolvedReference { token: String, reference: String },

    /// A gradient with no stops.
    #[error("gradient '{name}' has no stops")]
    EmptyGradient { name: String },

    /// Failed to serialize the resolved tokens.
    #[error("failed to export tokens: {0}")]
    Export(#[from] serde_json::Error),
}

fn describe(path: Option<&Path>) -> String {
    path.map(|p| format!(" '{}'", p.display()))
        .unwrap_or_default()
}
