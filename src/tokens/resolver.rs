//! Token resolver - resolves references and derived definitions to concrete colors.

use std::collections::BTreeMap;

use crate::color::{BlendMode, ColorError, ColorFormat, Gradient, ParsedColor};
use crate::fonts;
use crate::log_debug;
use crate::scale::{Measure, Ratio, scale_range};

use super::error::TokenError;
use super::schema::{ColorDef, GradientDef, RatioDef, ScaleDef, TokenFile};

/// Resolved palette and color maps.
pub type ResolvedColors = (
    BTreeMap<String, ParsedColor>,
    BTreeMap<String, ParsedColor>,
);

/// Resolver state for building a token set.
pub struct Resolver<'a> {
    /// Color definitions from TOML.
    defs: &'a BTreeMap<String, ColorDef>,
    /// Palette strings from TOML.
    palette_raw: &'a BTreeMap<String, String>,
    /// Format for colors that don't name one.
    default_format: ColorFormat,
    /// Resolved palette colors.
    palette: BTreeMap<String, ParsedColor>,
    /// Resolved color tokens.
    colors: BTreeMap<String, ParsedColor>,
}

impl<'a> Resolver<'a> {
    /// Create a new resolver from a token file.
    pub fn new(file: &'a TokenFile, default_format: ColorFormat) -> Self {
        Self {
            defs: &file.colors,
            palette_raw: &file.palette,
            default_format,
            palette: BTreeMap::new(),
            colors: BTreeMap::new(),
        }
    }

    /// Resolve all colors and return the resolved maps.
    ///
    /// # Errors
    /// Returns an error if there are circular references, unknown references or
    /// invalid colors.
    pub fn resolve(mut self) -> Result<ResolvedColors, TokenError> {
        // First pass: palette entries are literal colors only
        for (name, value) in self.palette_raw {
            let color = ParsedColor::parse(value).map_err(|e| invalid(name, e))?;
            self.palette
                .insert(name.clone(), color.with_format(self.default_format));
        }

        // Second pass: color tokens can reference the palette or each other
        let defs = self.defs;
        for name in defs.keys() {
            self.resolve_token(name, &mut Vec::new())?;
        }

        log_debug!(
            "Resolved {} palette entries and {} color tokens",
            self.palette.len(),
            self.colors.len()
        );
        Ok((self.palette, self.colors))
    }

    /// Resolve a single token, tracking the resolution chain to detect cycles.
    fn resolve_token(
        &mut self,
        name: &str,
        chain: &mut Vec<String>,
    ) -> Result<ParsedColor, TokenError> {
        if let Some(color) = self.colors.get(name) {
            return Ok(*color);
        }

        if chain.iter().any(|seen| seen == name) {
            chain.push(name.to_string());
            return Err(TokenError::CircularReference {
                token: name.to_string(),
                chain: chain.clone(),
            });
        }

        let defs = self.defs;
        let Some(def) = defs.get(name) else {
            return Err(TokenError::UnresolvedReference {
                token: chain.last().cloned().unwrap_or_default(),
                reference: name.to_string(),
            });
        };

        chain.push(name.to_string());
        let color = self.compute(name, def, chain)?;
        chain.pop();

        let format = match def.format() {
            Some(format) => ColorFormat::parse(format).map_err(|e| invalid(name, e))?,
            None => self.default_format,
        };
        let color = color.with_format(format);

        log_debug!("Resolved color token '{}' -> {}", name, color);
        self.colors.insert(name.to_string(), color);
        Ok(color)
    }

    /// Compute a definition's color from its inputs.
    fn compute(
        &mut self,
        name: &str,
        def: &ColorDef,
        chain: &mut Vec<String>,
    ) -> Result<ParsedColor, TokenError> {
        match def {
            ColorDef::Reference(value) | ColorDef::Convert { color: value, .. } => {
                self.resolve_value(name, value, chain)
            }
            ColorDef::Spin { spin, rotation, .. } => {
                Ok(self.resolve_value(name, spin, chain)?.spin(*rotation))
            }
            ColorDef::Blend {
                blend,
                with,
                amount,
                mode,
                ..
            } => {
                let mode = parse_mode(name, mode.as_deref())?;
                let source = self.resolve_value(name, blend, chain)?;
                let target = self.resolve_value(name, with, chain)?;
                source
                    .blend(&target, *amount, mode)
                    .map_err(|e| invalid(name, e))
            }
        }
    }

    /// Resolve a value which could be a color token, a palette entry, or a literal color.
    ///
    /// Token and palette names shadow CSS color names.
    fn resolve_value(
        &mut self,
        token: &str,
        value: &str,
        chain: &mut Vec<String>,
    ) -> Result<ParsedColor, TokenError> {
        if self.defs.contains_key(value) {
            return self.resolve_token(value, chain);
        }

        lookup(token, value, &self.palette, &self.colors)
    }
}

/// Look up a reference in resolved colors, then the palette, then parse it as a literal.
fn lookup(
    token: &str,
    value: &str,
    palette: &BTreeMap<String, ParsedColor>,
    colors: &BTreeMap<String, ParsedColor>,
) -> Result<ParsedColor, TokenError> {
    if let Some(color) = colors.get(value).or_else(|| palette.get(value)) {
        return Ok(*color);
    }
    ParsedColor::parse(value).map_err(|e| match e {
        ColorError::UnknownColorName(_) => unresolved(token, value),
        ColorError::InvalidFormat(_) if looks_like_name(value) => unresolved(token, value),
        other => invalid(token, other),
    })
}

/// A value with no `#` or parentheses is meant as a token name, like `gray-100`.
fn looks_like_name(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && !value.contains(['#', '(', ')'])
}

fn unresolved(token: &str, reference: &str) -> TokenError {
    TokenError::UnresolvedReference {
        token: token.to_string(),
        reference: reference.to_string(),
    }
}

/// Resolve gradients into evenly spaced color steps.
///
/// Stops may name palette entries, color tokens, or literal colors.
pub fn resolve_gradients(
    defs: &BTreeMap<String, GradientDef>,
    palette: &BTreeMap<String, ParsedColor>,
    colors: &BTreeMap<String, ParsedColor>,
    default_format: ColorFormat,
) -> Result<BTreeMap<String, Vec<ParsedColor>>, TokenError> {
    defs.iter()
        .map(|(name, def)| -> Result<(String, Vec<ParsedColor>), TokenError> {
            let stops = def
                .stops
                .iter()
                .map(|stop| lookup(name, stop, palette, colors))
                .collect::<Result<Vec<_>, _>>()?;
            let mode = parse_mode(name, def.mode.as_deref())?;
            let format = match def.format.as_deref() {
                Some(format) => ColorFormat::parse(format).map_err(|e| invalid(name, e))?,
                None => default_format,
            };

            let gradient = Gradient::new(stops, mode)
                .ok_or_else(|| TokenError::EmptyGradient { name: name.clone() })?;
            let steps: Vec<ParsedColor> = gradient
                .generate(def.steps)
                .into_iter()
                .map(|color| color.with_format(format))
                .collect();
            Ok((name.clone(), steps))
        })
        .collect()
}

/// Resolve the modular scale into step -> measure.
pub fn resolve_scale(def: &ScaleDef) -> Result<BTreeMap<i32, Measure>, TokenError> {
    let base = Measure::parse(&def.base)?;
    let ratio = match &def.ratio {
        RatioDef::Value(value) => Ratio::new(*value)?,
        RatioDef::Name(name) => Ratio::parse(name)?,
    };

    Ok(def
        .steps
        .iter()
        .copied()
        .zip(scale_range(&base, ratio, &def.steps))
        .collect())
}

/// Resolve font roles into CSS `font-family` values.
pub fn resolve_fonts(
    defs: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, String>, TokenError> {
    defs.iter()
        .map(|(role, stack)| {
            fonts::font_stack(stack)
                .map(|css| (role.clone(), css))
                .map_err(|source| TokenError::Font {
                    role: role.clone(),
                    source,
                })
        })
        .collect()
}

fn parse_mode(token: &str, mode: Option<&str>) -> Result<BlendMode, TokenError> {
    mode.map_or(Ok(BlendMode::default()), BlendMode::parse)
        .map_err(|e| invalid(token, e))
}

fn invalid(token: &str, source: ColorError) -> TokenError {
    TokenError::InvalidColor {
        token: token.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token_file(
        palette: &[(&str, &str)],
        colors: &[(&str, ColorDef)],
    ) -> TokenFile {
        TokenFile {
            meta: super::super::schema::TokenMeta {
                name: "Test".to_string(),
                description: None,
                version: None,
                format: None,
            },
            palette: palette
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            colors: colors
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
            gradients: BTreeMap::new(),
            scale: None,
            fonts: BTreeMap::new(),
        }
    }

    fn reference(to: &str) -> ColorDef {
        ColorDef::Reference(to.to_string())
    }

    #[test]
    fn test_resolve_palette() {
        let file = make_token_file(&[("brand", "rgb(51, 102, 255)")], &[]);
        let (palette, _) = Resolver::new(&file, ColorFormat::Hex).resolve().unwrap();
        assert_eq!(palette["brand"].to_string(), "#3366ff");
    }

    #[test]
    fn test_resolve_chained_reference() {
        let file = make_token_file(
            &[("red", "#ff0000")],
            &[("danger", reference("red")), ("error", reference("danger"))],
        );
        let (_, colors) = Resolver::new(&file, ColorFormat::Rgb).resolve().unwrap();
        assert_eq!(colors["error"].to_string(), "rgb(255, 0, 0)");
    }

    #[test]
    fn test_palette_shadows_css_names() {
        let file = make_token_file(&[("red", "#cc0000")], &[("error", reference("red"))]);
        let (_, colors) = Resolver::new(&file, ColorFormat::Hex).resolve().unwrap();
        assert_eq!(colors["error"].to_string(), "#cc0000");
    }

    #[test]
    fn test_derived_colors() {
        let file = make_token_file(
            &[("brand", "#ff0000")],
            &[
                (
                    "accent",
                    ColorDef::Spin {
                        spin: "brand".to_string(),
                        rotation: 120.0,
                        format: None,
                    },
                ),
                (
                    "shade",
                    ColorDef::Blend {
                        blend: "brand".to_string(),
                        with: "black".to_string(),
                        amount: 50.0,
                        mode: None,
                        format: Some("rgb".to_string()),
                    },
                ),
                (
                    "accent_hsl",
                    ColorDef::Convert {
                        color: "accent".to_string(),
                        format: Some("hsl".to_string()),
                    },
                ),
            ],
        );

        let (_, colors) = Resolver::new(&file, ColorFormat::Hex).resolve().unwrap();
        assert_eq!(colors["accent"].to_string(), "#00ff00");
        assert_eq!(colors["shade"].to_string(), "rgb(128, 0, 0)");
        assert_eq!(colors["accent_hsl"].to_string(), "hsl(120, 100%, 50%)");
    }

    #[test]
    fn test_detect_circular_reference() {
        let file = make_token_file(
            &[],
            &[("a", reference("b")), ("b", reference("c")), ("c", reference("a"))],
        );

        let result = Resolver::new(&file, ColorFormat::Hex).resolve();
        match result {
            Err(TokenError::CircularReference { token, chain }) => {
                assert_eq!(token, "a");
                assert_eq!(chain, ["a", "b", "c", "a"]);
            }
            other => panic!("expected circular reference, got {other:?}"),
        }
    }

    #[test]
    fn test_unresolved_reference() {
        let file = make_token_file(&[], &[("link", reference("brand"))]);
        let result = Resolver::new(&file, ColorFormat::Hex).resolve();
        assert!(matches!(
            result,
            Err(TokenError::UnresolvedReference { token, reference })
                if token == "link" && reference == "brand"
        ));
    }

    #[test]
    fn test_unresolved_token_style_names() {
        for name in ["gray-100", "brand2", "brand_blue"] {
            let file = make_token_file(&[], &[("link", reference(name))]);
            let result = Resolver::new(&file, ColorFormat::Hex).resolve();
            assert!(
                matches!(
                    &result,
                    Err(TokenError::UnresolvedReference { token, reference })
                        if token == "link" && reference == name
                ),
                "{name}: {result:?}"
            );
        }

        let file = make_token_file(&[], &[("link", reference("rgb(1, 2)"))]);
        assert!(matches!(
            Resolver::new(&file, ColorFormat::Hex).resolve(),
            Err(TokenError::InvalidColor { source: ColorError::InvalidFormat(_), .. })
        ));
    }

    #[test]
    fn test_bad_mode_names_token() {
        let file = make_token_file(
            &[],
            &[(
                "mix",
                ColorDef::Blend {
                    blend: "red".to_string(),
                    with: "blue".to_string(),
                    amount: 50.0,
                    mode: Some("screen".to_string()),
                    format: None,
                },
            )],
        );
        let result = Resolver::new(&file, ColorFormat::Hex).resolve();
        assert!(matches!(
            result,
            Err(TokenError::InvalidColor { token, source: ColorError::UnsupportedMode(_) })
                if token == "mix"
        ));
    }

    #[test]
    fn test_resolve_gradients() {
        let defs: BTreeMap<String, GradientDef> = [(
            "fade".to_string(),
            GradientDef {
                stops: vec!["ink".to_string(), "#ffffff".to_string()],
                steps: 3,
                mode: None,
                format: None,
            },
        )]
        .into_iter()
        .collect();
        let palette: BTreeMap<String, ParsedColor> =
            [("ink".to_string(), ParsedColor::parse("#000000").unwrap())]
                .into_iter()
                .collect();

        let gradients =
            resolve_gradients(&defs, &palette, &BTreeMap::new(), ColorFormat::Hex).unwrap();
        let fade: Vec<String> = gradients["fade"].iter().map(ToString::to_string).collect();
        assert_eq!(fade, ["#000000", "#808080", "#ffffff"]);
    }

    #[test]
    fn test_empty_gradient() {
        let defs: BTreeMap<String, GradientDef> = [(
            "none".to_string(),
            GradientDef {
                stops: vec![],
                steps: 3,
                mode: None,
                format: None,
            },
        )]
        .into_iter()
        .collect();
        let result = resolve_gradients(&defs, &BTreeMap::new(), &BTreeMap::new(), ColorFormat::Hex);
        assert!(matches!(result, Err(TokenError::EmptyGradient { .. })));
    }

    #[test]
    fn test_resolve_scale() {
        let def = ScaleDef {
            base: "16px".to_string(),
            ratio: RatioDef::Name("major-third".to_string()),
            steps: vec![-1, 0, 1],
        };
        let scale = resolve_scale(&def).unwrap();
        let rendered: Vec<(i32, String)> =
            scale.iter().map(|(k, v)| (*k, v.to_string())).collect();
        assert_eq!(
            rendered,
            [
                (-1, "12.8px".to_string()),
                (0, "16px".to_string()),
                (1, "20px".to_string())
            ]
        );
    }

    #[test]
    fn test_resolve_fonts() {
        let defs: BTreeMap<String, String> =
            [("code".to_string(), "comic".to_string())].into_iter().collect();
        assert!(matches!(
            resolve_fonts(&defs),
            Err(TokenError::Font { role, .. }) if role == "code"
        ));
    }
}
