//! RGB and HSL channel triples and the conversion between them.
//!
//! Channels are kept as `f64` so chained operations (spin, blend) never round
//! between steps. Rounding happens once, when a triple is serialized.

use super::format::BlendMode;

/// An RGB triple with each channel in `0.0..=255.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// An HSL triple: hue in degrees `[0, 360)`, saturation and lightness in `0.0..=100.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    /// Create a triple, clamping each channel into `0..=255`.
    #[must_use]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_channel(r, 255.0),
            g: clamp_channel(g, 255.0),
            b: clamp_channel(b, 255.0),
        }
    }

    /// Create a triple from integer channels.
    #[must_use]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
        }
    }

    /// Channels rounded half-up to integers.
    #[must_use]
    pub fn to_u8(self) -> [u8; 3] {
        [round_u8(self.r), round_u8(self.g), round_u8(self.b)]
    }

    /// Channels as an array, in `r, g, b` order.
    #[must_use]
    pub const fn channels(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Interpolate each channel `weight` (`0.0..=1.0`) of the way toward `other`.
    ///
    /// Logarithmic mode interpolates the squared channels and takes the square
    /// root of the result: `sqrt(a² + (b² - a²) * weight)`.
    #[must_use]
    pub fn mix(self, other: Self, weight: f64, mode: BlendMode) -> Self {
        let channel = |from: f64, to: f64| match mode {
            BlendMode::Linear => from + (to - from) * weight,
            BlendMode::Logarithmic => (from * from + (to * to - from * from) * weight).sqrt(),
        };
        Self::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }

    /// Convert to HSL at full precision.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = self.r / 255.0;
        let g = self.g / 255.0;
        let b = self.b / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = max - min;
        let l = (max + min) / 2.0;

        if chroma <= f64::EPSILON {
            return Hsl {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }

        let s = chroma / (1.0 - (2.0 * l - 1.0).abs());

        #[allow(clippy::float_cmp)]
        let sector = if max == r {
            ((g - b) / chroma).rem_euclid(6.0)
        } else if max == g {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };

        Hsl {
            h: normalize_hue(sector * 60.0),
            s: clamp_channel(s * 100.0, 100.0),
            l: clamp_channel(l * 100.0, 100.0),
        }
    }
}

impl Hsl {
    /// Create a triple, wrapping the hue into `[0, 360)` and clamping
    /// saturation and lightness into `0..=100`.
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_channel(s, 100.0),
            l: clamp_channel(l, 100.0),
        }
    }

    /// Rotate the hue by `degrees`, wrapping into `[0, 360)`.
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// Channels rounded half-up for display. A hue that rounds up to 360 wraps to 0.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::as_conversions
    )]
    pub fn to_display(self) -> (u16, u8, u8) {
        let h = round_half_up(self.h) as u16 % 360;
        let s = round_half_up(clamp_channel(self.s, 100.0)) as u8;
        let l = round_half_up(clamp_channel(self.l, 100.0)) as u8;
        (h, s, l)
    }

    /// Convert to RGB at full precision.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let s = self.s / 100.0;
        let l = self.l / 100.0;
        let h = normalize_hue(self.h);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = match h {
            h if h < 60.0 => (chroma, x, 0.0),
            h if h < 120.0 => (x, chroma, 0.0),
            h if h < 180.0 => (0.0, chroma, x),
            h if h < 240.0 => (0.0, x, chroma),
            h if h < 300.0 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Rgb::new((r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0)
    }
}

/// Reduce a hue into `[0, 360)`. Negative rotations wrap around; a
/// non-finite hue becomes 0.
#[must_use]
pub fn normalize_hue(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let h = degrees.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

fn clamp_channel(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::as_conversions
)]
fn round_u8(value: f64) -> u8 {
    round_half_up(clamp_channel(value, 255.0)) as u8
}

/// Round a non-negative value half-up, treating values within float noise of
/// `x.5` as exactly `x.5`.
fn round_half_up(value: f64) -> f64 {
    // f64::round is half-away-from-zero, which is half-up for non-negative values.
    ((value * HALF_SNAP).round() / HALF_SNAP).round()
}

const HALF_SNAP: f64 = 1e6;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_within_one(actual: [u8; 3], expected: [u8; 3]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!(
                a.abs_diff(*e) <= 1,
                "expected {expected:?}, got {actual:?}"
            );
        }
    }

    #[test]
    fn test_primary_to_hsl() {
        let red = Rgb::from_u8(255, 0, 0).to_hsl();
        assert_eq!(red.to_display(), (0, 100, 50));

        let green = Rgb::from_u8(0, 255, 0).to_hsl();
        assert_eq!(green.to_display(), (120, 100, 50));

        let blue = Rgb::from_u8(0, 0, 255).to_hsl();
        assert_eq!(blue.to_display(), (240, 100, 50));
    }

    #[test]
    fn test_achromatic_has_zero_hue_and_saturation() {
        let gray = Rgb::from_u8(128, 128, 128).to_hsl();
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert_eq!(gray.to_display(), (0, 0, 50));
    }

    #[test]
    fn test_magenta_side_of_wheel() {
        // max == r with g < b lands in the last sector
        let hsl = Rgb::from_u8(255, 0, 128).to_hsl();
        let (h, s, l) = hsl.to_display();
        assert_eq!(h, 330);
        assert_eq!(s, 100);
        assert_eq!(l, 50);
    }

    #[test]
    fn test_hsl_to_rgb_sectors() {
        assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_rgb().to_u8(), [255, 0, 0]);
        assert_eq!(Hsl::new(60.0, 100.0, 50.0).to_rgb().to_u8(), [255, 255, 0]);
        assert_eq!(Hsl::new(180.0, 100.0, 50.0).to_rgb().to_u8(), [0, 255, 255]);
        assert_eq!(Hsl::new(300.0, 100.0, 50.0).to_rgb().to_u8(), [255, 0, 255]);
        assert_eq!(Hsl::new(0.0, 0.0, 100.0).to_rgb().to_u8(), [255, 255, 255]);
    }

    #[test]
    fn test_full_precision_round_trip_is_exact() {
        for r in (0..=255u8).step_by(17) {
            for g in (0..=255u8).step_by(51) {
                for b in (0..=255u8).step_by(85) {
                    let back = Rgb::from_u8(r, g, b).to_hsl().to_rgb().to_u8();
                    assert_eq!(back, [r, g, b]);
                }
            }
        }
    }

    #[test]
    fn test_display_hsl_reproduces_rgb() {
        let samples = [
            [51, 102, 255],
            [255, 0, 0],
            [255, 165, 0],
            [100, 149, 237],
            [128, 128, 128],
            [204, 51, 102],
        ];
        for rgb in samples {
            let (h, s, l) = Rgb::from_u8(rgb[0], rgb[1], rgb[2]).to_hsl().to_display();
            let back = Hsl::new(f64::from(h), f64::from(s), f64::from(l))
                .to_rgb()
                .to_u8();
            assert_within_one(back, rgb);
        }
    }

    #[test]
    fn test_rotate_wraps_negative() {
        let hsl = Hsl::new(10.0, 50.0, 50.0).rotate(-30.0);
        assert_eq!(hsl.to_display().0, 340);
        assert_eq!(Hsl::new(350.0, 0.0, 0.0).rotate(20.0).h, 10.0);
    }

    #[test]
    fn test_display_wraps_rounded_hue() {
        let hsl = Hsl::new(359.7, 10.0, 10.0);
        assert_eq!(hsl.to_display().0, 0);
    }

    #[test]
    fn test_new_clamps() {
        let rgb = Rgb::new(300.0, -5.0, f64::NAN);
        assert_eq!(rgb.to_u8(), [255, 0, 0]);

        let hsl = Hsl::new(-90.0, 150.0, -1.0);
        assert_eq!(hsl.h, 270.0);
        assert_eq!(hsl.s, 100.0);
        assert_eq!(hsl.l, 0.0);
    }

    #[test]
    fn test_mix_linear_midpoint() {
        let mid = Rgb::from_u8(0, 0, 0).mix(Rgb::from_u8(255, 255, 255), 0.5, BlendMode::Linear);
        assert_eq!(mid.r, 127.5);
        assert_eq!(mid.to_u8(), [128, 128, 128]);
    }

    #[test]
    fn test_mix_logarithmic_is_brighter() {
        let black = Rgb::from_u8(0, 0, 0);
        let white = Rgb::from_u8(255, 255, 255);
        let mid = black.mix(white, 0.5, BlendMode::Logarithmic);
        assert_eq!(mid.to_u8(), [180, 180, 180]);
        assert!(mid.r > black.mix(white, 0.5, BlendMode::Linear).r);
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Rgb::from_u8(10, 200, 30);
        let b = Rgb::from_u8(250, 0, 99);
        for mode in [BlendMode::Linear, BlendMode::Logarithmic] {
            assert_eq!(a.mix(b, 0.0, mode), a);
            assert_eq!(a.mix(b, 1.0, mode).to_u8(), [250, 0, 99]);
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(Rgb::new(127.5, 0.5, 254.5).to_u8(), [128, 1, 255]);
    }

    #[test]
    fn test_round_snaps_float_noise_at_half() {
        assert_eq!(Rgb::new(178.499_999_999_9, 0.0, 0.0).to_u8(), [179, 0, 0]);
        assert_eq!(Rgb::new(178.49, 0.0, 0.0).to_u8(), [178, 0, 0]);
        assert_eq!(Hsl::new(224.499_999_999_9, 49.999_999_999, 0.0).to_display(), (225, 50, 0));
    }
}
