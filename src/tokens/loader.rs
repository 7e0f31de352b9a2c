//! Token loader - loads token sets from TOML files.

use std::collections::BTreeMap;
use std::path::Path;

use crate::color::{ColorFormat, ParsedColor};
use crate::log_debug;

use super::TokenSet;
use super::error::TokenError;
use super::resolver::{Resolver, resolve_fonts, resolve_gradients, resolve_scale};
use super::schema::TokenFile;

/// Load a token set from a file path.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_from_file(path: &Path) -> Result<TokenSet, TokenError> {
    let content = std::fs::read_to_string(path).map_err(|e| TokenError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    log_debug!("Loading token file {}", path.display());
    load_from_str(&content, Some(path))
}

/// Load a token set from a TOML string.
///
/// # Errors
/// Returns an error if the TOML is invalid or contains errors.
pub fn load_from_str(content: &str, path: Option<&Path>) -> Result<TokenSet, TokenError> {
    let file: TokenFile = toml::from_str(content).map_err(|e| TokenError::Parse {
        path: path.map(Path::to_path_buf),
        source: e,
    })?;

    build_token_set(file)
}

/// Build a resolved `TokenSet` from a parsed `TokenFile`.
fn build_token_set(file: TokenFile) -> Result<TokenSet, TokenError> {
    let format = match file.meta.format.as_deref() {
        Some(name) => ColorFormat::parse(name).map_err(|source| TokenError::InvalidColor {
            token: "meta.format".to_string(),
            source,
        })?,
        None => ColorFormat::default(),
    };

    // Resolve palette and colors
    let (palette, colors) = Resolver::new(&file, format).resolve()?;

    // Resolve gradients against both
    let gradients = resolve_gradients(&file.gradients, &palette, &colors, format)?;

    let scale = match &file.scale {
        Some(def) => resolve_scale(def)?,
        None => BTreeMap::new(),
    };

    let fonts = resolve_fonts(&file.fonts)?;

    Ok(TokenSet {
        meta: file.meta,
        palette: render(palette),
        colors: render(colors),
        gradients: gradients
            .into_iter()
            .map(|(name, steps)| (name, steps.iter().map(ToString::to_string).collect()))
            .collect(),
        scale: scale
            .into_iter()
            .map(|(step, measure)| (step, measure.to_string()))
            .collect(),
        fonts,
    })
}

fn render(colors: BTreeMap<String, ParsedColor>) -> BTreeMap<String, String> {
    colors
        .into_iter()
        .map(|(name, color)| (name, color.to_string()))
        .collect()
}
