//! String-in, string-out color operations.

use super::error::ColorError;
use super::format::{BlendMode, ColorFormat};
use super::parse::ParsedColor;

/// Hue rotation used when the caller has no preference: the complementary color.
pub const DEFAULT_ROTATION: f64 = 180.0;

/// Blend amount used when the caller has no preference: the midpoint.
pub const DEFAULT_BLEND_AMOUNT: f64 = 50.0;

/// Convert `color` to the `to` format.
///
/// ```
/// use swatchkit::color::{convert, ColorFormat};
///
/// assert_eq!(convert("red", ColorFormat::Hex).unwrap(), "#ff0000");
/// assert_eq!(convert("#3366ff", ColorFormat::Rgb).unwrap(), "rgb(51, 102, 255)");
/// ```
pub fn convert(color: &str, to: ColorFormat) -> Result<String, ColorError> {
    Ok(ParsedColor::parse(color)?.to_string_as(to))
}

/// Rotate the hue of `color` by `rotation` degrees. The result keeps the
/// input's format; named colors come back as hex.
///
/// ```
/// use swatchkit::color::spin;
///
/// assert_eq!(spin("hsl(10, 50%, 50%)", -30.0).unwrap(), "hsl(340, 50%, 50%)");
/// ```
pub fn spin(color: &str, rotation: f64) -> Result<String, ColorError> {
    Ok(ParsedColor::parse(color)?.spin(rotation).to_string())
}

/// Blend `color` toward `target` by `amount` percent (`0..=100`). The mix is
/// rounded to integer RGB channels, then written in the format of `color`.
///
/// ```
/// use swatchkit::color::{blend, BlendMode};
///
/// assert_eq!(blend("#000", "#fff", 50.0, BlendMode::Linear).unwrap(), "#808080");
/// ```
pub fn blend(
    color: &str,
    target: &str,
    amount: f64,
    mode: BlendMode,
) -> Result<String, ColorError> {
    if !(0.0..=100.0).contains(&amount) {
        return Err(ColorError::InvalidAmount(amount));
    }
    let source = ParsedColor::parse(color)?;
    let target = ParsedColor::parse(target)?;
    Ok(source.blend_rounded(&target, amount, mode)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_defaults_to_hex() {
        assert_eq!(convert("red", ColorFormat::default()).unwrap(), "#ff0000");
        assert_eq!(convert("rgb(51, 102, 255)", ColorFormat::default()).unwrap(), "#3366ff");
    }

    #[test]
    fn test_convert_between_formats() {
        assert_eq!(convert("#3366ff", ColorFormat::Hsl).unwrap(), "hsl(225, 100%, 60%)");
        assert_eq!(convert("hsl(225, 100%, 60%)", ColorFormat::Rgb).unwrap(), "rgb(51, 102, 255)");
        assert_eq!(convert("#abc", ColorFormat::Hex).unwrap(), "#aabbcc");
    }

    #[test]
    fn test_spin_preserves_format() {
        assert_eq!(spin("#ff0000", 120.0).unwrap(), "#00ff00");
        assert_eq!(spin("rgb(255, 0, 0)", 240.0).unwrap(), "rgb(0, 0, 255)");
        assert_eq!(spin("red", DEFAULT_ROTATION).unwrap(), "#00ffff");
    }

    #[test]
    fn test_spin_identity() {
        assert_eq!(spin("#3366ff", 0.0).unwrap(), "#3366ff");
        assert_eq!(spin("#3366ff", 360.0).unwrap(), "#3366ff");
        assert_eq!(spin("#3366ff", -720.0).unwrap(), "#3366ff");
    }

    #[test]
    fn test_blend_midpoints() {
        assert_eq!(
            blend("#000000", "#ffffff", DEFAULT_BLEND_AMOUNT, BlendMode::Linear).unwrap(),
            "#808080"
        );
        assert_eq!(
            blend("#000000", "#ffffff", DEFAULT_BLEND_AMOUNT, BlendMode::Logarithmic).unwrap(),
            "#b4b4b4"
        );
    }

    #[test]
    fn test_blend_keeps_first_format() {
        assert_eq!(
            blend("rgb(0, 0, 0)", "#ffffff", 100.0, BlendMode::Linear).unwrap(),
            "rgb(255, 255, 255)"
        );
        assert_eq!(
            blend("hsl(0, 100%, 50%)", "blue", 0.0, BlendMode::Linear).unwrap(),
            "hsl(0, 100%, 50%)"
        );
    }

    #[test]
    fn test_blend_rounds_before_reformatting_hsl() {
        assert_eq!(
            blend("hsl(0, 0%, 0%)", "#123456", 10.0, BlendMode::Linear).unwrap(),
            "hsl(214, 64%, 2%)"
        );
        assert_eq!(
            blend("hsl(0, 0%, 0%)", "#123456", 10.0, BlendMode::Linear).unwrap(),
            convert("rgb(2, 5, 9)", ColorFormat::Hsl).unwrap()
        );
    }

    #[test]
    fn test_blend_amount_checked_first() {
        assert_eq!(
            blend("nope", "#fff", 150.0, BlendMode::Linear),
            Err(ColorError::InvalidAmount(150.0))
        );
        assert!(matches!(
            blend("#fff", "nope", 10.0, BlendMode::Linear),
            Err(ColorError::UnknownColorName(_))
        ));
    }
}
