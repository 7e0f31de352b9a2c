//! Multi-stop gradients built on [`ParsedColor::blend`].

use super::format::BlendMode;
use super::parse::ParsedColor;

/// A color gradient defined by a series of color stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<ParsedColor>,
    mode: BlendMode,
}

impl Gradient {
    /// Create a gradient from its stops. Returns `None` when `stops` is empty.
    #[must_use]
    pub fn new(stops: Vec<ParsedColor>, mode: BlendMode) -> Option<Self> {
        if stops.is_empty() {
            return None;
        }
        Some(Self { stops, mode })
    }

    /// Get the interpolated color at position `t` (0.0 to 1.0), in the
    /// format of the first stop.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::as_conversions
    )]
    pub fn at(&self, t: f64) -> ParsedColor {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let format = self.stops[0].format();
        let last = self.stops.len() - 1;

        let scaled = t * last as f64;
        let idx = scaled.floor() as usize;
        let local_t = scaled - scaled.floor();

        let color = if idx >= last {
            self.stops[last]
        } else {
            // local_t is in [0, 1) so the amount is always valid
            self.stops[idx]
                .blend(&self.stops[idx + 1], local_t * 100.0, self.mode)
                .unwrap_or(self.stops[idx])
        };
        color.with_format(format)
    }

    /// Get the number of color stops in this gradient.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false: a gradient has at least one stop.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Generate `n` evenly spaced colors, first and last stop included.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::as_conversions)]
    pub fn generate(&self, n: usize) -> Vec<ParsedColor> {
        match n {
            0 => vec![],
            1 => vec![self.at(0.0)],
            _ => (0..n).map(|i| self.at(i as f64 / (n - 1) as f64)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(s: &str) -> ParsedColor {
        ParsedColor::parse(s).unwrap()
    }

    fn black_to_white(mode: BlendMode) -> Gradient {
        Gradient::new(vec![color("#000000"), color("#ffffff")], mode).unwrap()
    }

    #[test]
    fn test_empty_stops() {
        assert!(Gradient::new(vec![], BlendMode::Linear).is_none());
    }

    #[test]
    fn test_gradient_endpoints() {
        let gradient = black_to_white(BlendMode::Linear);
        assert_eq!(gradient.at(0.0).to_string(), "#000000");
        assert_eq!(gradient.at(1.0).to_string(), "#ffffff");
        assert_eq!(gradient.at(7.0).to_string(), "#ffffff");
    }

    #[test]
    fn test_gradient_midpoint() {
        assert_eq!(black_to_white(BlendMode::Linear).at(0.5).to_string(), "#808080");
        assert_eq!(
            black_to_white(BlendMode::Logarithmic).at(0.5).to_string(),
            "#b4b4b4"
        );
    }

    #[test]
    fn test_gradient_multi_stop() {
        let gradient = Gradient::new(
            vec![color("red"), color("rgb(0, 255, 0)"), color("blue")],
            BlendMode::Linear,
        )
        .unwrap();

        assert_eq!(gradient.at(0.0).to_string(), "#ff0000");
        assert_eq!(gradient.at(0.5).to_string(), "#00ff00");
        assert_eq!(gradient.at(1.0).to_string(), "#0000ff");
    }

    #[test]
    fn test_generate() {
        let colors = black_to_white(BlendMode::Linear).generate(3);
        let hexes: Vec<String> = colors.iter().map(ToString::to_string).collect();
        assert_eq!(hexes, ["#000000", "#808080", "#ffffff"]);
        assert!(black_to_white(BlendMode::Linear).generate(0).is_empty());
    }
}
