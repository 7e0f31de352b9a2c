//! swatchkit - design-token color utilities
//!
//! Converts colors between hex, RGB and HSL, rotates hues, blends colors
//! linearly or logarithmically, and composes those operations with modular
//! scales and system font stacks into declarative token files.
//!
//! ```
//! use swatchkit::{BlendMode, ColorFormat, blend, convert, spin};
//!
//! assert_eq!(convert("#3366ff", ColorFormat::Hsl).unwrap(), "hsl(225, 100%, 60%)");
//! assert_eq!(spin("#3366ff", 180.0).unwrap(), "#ffcc33");
//! assert_eq!(blend("#000000", "#ffffff", 50.0, BlendMode::Linear).unwrap(), "#808080");
//! ```

// Allow certain clippy warnings that are either stylistic or from external dependencies
#![allow(clippy::uninlined_format_args)] // Style preference
#![allow(clippy::format_push_string)] // Performance improvement but stylistic
#![allow(clippy::return_self_not_must_use)] // Builder pattern is clear enough
#![allow(clippy::items_after_statements)] // Locally-scoped use statements are fine

pub mod cli;
pub mod color;
pub mod config;
pub mod fonts;
pub mod logger;
pub mod scale;
pub mod swatch;
pub mod tokens;
pub mod ui;

// Re-export the color operations for easier access
pub use color::{BlendMode, ColorError, ColorFormat, ParsedColor, blend, convert, spin};
pub use config::Config;
pub use tokens::{TokenError, TokenSet};
