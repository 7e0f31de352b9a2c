//! Color error types.

/// Errors that can occur when parsing or transforming a color.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    /// The string matches no known color syntax and is not a color name.
    #[error("invalid color format: '{0}'")]
    InvalidFormat(String),

    /// A hex-shaped string with the wrong digit count or non-hex characters.
    #[error("malformed hex color: '{0}' (expected #RGB or #RRGGBB)")]
    MalformedHex(String),

    /// A bare word that is not in the named-color table.
    #[error("unknown color name: '{0}'")]
    UnknownColorName(String),

    /// Blend amount outside `0..=100`.
    #[error("invalid blend amount: {0} (expected 0-100)")]
    InvalidAmount(f64),

    /// Blend mode other than `linear` or `logarithmic`.
    #[error("unsupported blend mode: '{0}' (expected linear or logarithmic)")]
    UnsupportedMode(String),

    /// Target format other than `hex`, `rgb` or `hsl`.
    #[error("unsupported color format: '{0}' (expected hex, rgb or hsl)")]
    UnsupportedFormat(String),
}
