//! Modular scales for type and spacing.
//!
//! A modular scale multiplies a base measure by a fixed ratio once per step:
//! `base × ratio^step`. Negative steps shrink below the base.

use std::fmt;
use std::str::FromStr;

/// Errors that can occur when building a scale.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScaleError {
    /// The measure has no leading number, or a malformed unit.
    #[error("invalid measure: '{0}' (expected a number with an optional unit, like 16px)")]
    InvalidValue(String),

    /// The ratio name is not in the table.
    #[error("unknown scale ratio: '{0}'")]
    UnknownRatio(String),

    /// A numeric ratio that is zero, negative or not finite.
    #[error("invalid scale ratio: {0} (must be a positive number)")]
    InvalidRatio(f64),
}

/// Named ratios, drawn from musical intervals plus the golden ratio.
pub const RATIOS: &[(&str, f64)] = &[
    ("minor-second", 1.067),
    ("major-second", 1.125),
    ("minor-third", 1.2),
    ("major-third", 1.25),
    ("perfect-fourth", 1.333),
    ("augmented-fourth", 1.414),
    ("perfect-fifth", 1.5),
    ("golden", 1.618),
    ("major-sixth", 1.667),
    ("minor-seventh", 1.778),
    ("major-seventh", 1.875),
    ("octave", 2.0),
];

/// A number with an optional CSS-style unit suffix (`16px`, `1.5rem`, `100%`).
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    pub value: f64,
    pub unit: String,
}

impl Measure {
    #[must_use]
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Split a measure into its number and unit.
    ///
    /// The unit starts at the first ASCII letter or `%` and must consist only
    /// of those characters.
    pub fn parse(input: &str) -> Result<Self, ScaleError> {
        let invalid = || ScaleError::InvalidValue(input.to_string());
        let trimmed = input.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_alphabetic() || c == '%')
            .unwrap_or(trimmed.len());
        let (number, unit) = trimmed.split_at(split);

        if !unit.chars().all(|c| c.is_ascii_alphabetic() || c == '%') {
            return Err(invalid());
        }

        let value = number
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(invalid)?;

        Ok(Self::new(value, unit.to_ascii_lowercase()))
    }

    /// Scale the value, keeping the unit.
    #[must_use]
    pub fn times(&self, factor: f64) -> Self {
        Self::new(self.value * factor, self.unit.clone())
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit)
    }
}

impl FromStr for Measure {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The multiplier between adjacent scale steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratio(f64);

impl Ratio {
    /// A ratio from a raw number.
    pub fn new(value: f64) -> Result<Self, ScaleError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(ScaleError::InvalidRatio(value))
        }
    }

    /// Look up a named ratio (case-insensitive), or parse a number.
    pub fn parse(input: &str) -> Result<Self, ScaleError> {
        let key = input.trim();
        if let Some((_, value)) = RATIOS.iter().find(|(name, _)| name.eq_ignore_ascii_case(key)) {
            return Ok(Self(*value));
        }
        match key.parse::<f64>() {
            Ok(value) => Self::new(value),
            Err(_) => Err(ScaleError::UnknownRatio(input.to_string())),
        }
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl FromStr for Ratio {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The measure `step` steps away from `base`.
#[must_use]
pub fn modular_scale(base: &Measure, ratio: Ratio, step: i32) -> Measure {
    base.times(ratio.value().powi(step))
}

/// The measures for each of `steps`, in order.
#[must_use]
pub fn scale_range(base: &Measure, ratio: Ratio, steps: &[i32]) -> Vec<Measure> {
    steps
        .iter()
        .map(|&step| modular_scale(base, ratio, step))
        .collect()
}

/// Split `"16px"` into `Measure { value: 16.0, unit: "px" }`.
pub fn parse_unit(input: &str) -> Result<Measure, ScaleError> {
    Measure::parse(input)
}

/// String form of [`modular_scale`]: `scale("16px", "major-third", 1)` is `"20px"`.
pub fn scale(base: &str, ratio: &str, step: i32) -> Result<String, ScaleError> {
    let base = Measure::parse(base)?;
    let ratio = Ratio::parse(ratio)?;
    Ok(modular_scale(&base, ratio, step).to_string())
}

/// At most three decimals, trailing zeros trimmed.
fn format_number(value: f64) -> String {
    let fixed = format!("{value:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}
