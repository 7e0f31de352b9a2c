//! Color conversion and manipulation.
//!
//! Every public operation takes color strings and returns a color string:
//!
//! - [`convert`] re-serializes a color as hex, `rgb()` or `hsl()`
//! - [`spin`] rotates the hue, keeping the input's format
//! - [`blend`] moves a color toward another, linearly or logarithmically
//!
//! # Accepted input
//!
//! | Format | Examples |
//! |--------|----------|
//! | Hex | `#3366ff`, `#36f`, `3366ff` |
//! | RGB | `rgb(51, 102, 255)`, `rgb(20% 40% 100%)` |
//! | HSL | `hsl(225, 100%, 60%)`, `hsl(225deg 100 60)` |
//! | Named | `rebeccapurple`, `Tomato` |
//!
//! Strings are classified once into a [`ParsedColor`]; channels stay at full
//! precision through chained operations and are rounded half-up only when
//! serialized. Out-of-range numbers inside `rgb()`/`hsl()` are clamped.
//!
//! The module holds no mutable state; the named-color table is built once
//! and only read afterwards.

mod channels;
mod error;
mod format;
mod gradient;
mod hex;
mod named;
mod ops;
mod parse;
mod space;

pub use channels::{parse_hsl, parse_rgb};
pub use error::ColorError;
pub use format::{BlendMode, ColorFormat};
pub use gradient::Gradient;
pub use hex::{format_hex, parse_hex};
pub use named::{NAMED_COLORS, lookup as lookup_name};
pub use ops::{DEFAULT_BLEND_AMOUNT, DEFAULT_ROTATION, blend, convert, spin};
pub use parse::{Channels, ParsedColor};
pub use space::{Hsl, Rgb, normalize_hue};
