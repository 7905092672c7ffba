//! colormix reads colors written as hex or decimal RGBA literals, blends them
//! with one of a few aggregation strategies and reports the result as RGBA,
//! hex and HSL.
//!
//! ```rust
//! use colormix::{Color, Mode, Palette};
//! let palette = Palette::new(vec![Color::opaque(255, 0, 0), Color::opaque(0, 0, 255)]).unwrap();
//! assert_eq!(Mode::Mix.apply(&palette), Color::opaque(127, 0, 127));
//! ```

#![deny(missing_docs)]

mod color;
mod config;
mod error;
mod hsl;
mod math;
mod mix;
mod parse;
mod report;
mod source;

pub use color::{Channel, Color, Component, Components, Palette, CHANNEL_MAX};
pub use config::{blend, run, Blend, BlendConfig};
pub use error::{Error, Result};
pub use hsl::{rgb_to_hsl, Hsl, Srgb};
pub use mix::{highest, lowest, mix, mix_saturate, Mode};
pub use parse::{
    is_valid_decimal_color, is_valid_hex_color, parse_decimal_color, parse_hex_color,
    DecimalColor, HexColor, ParsedColor,
};
pub use report::{HexStyle, Report};
pub use source::{
    parse_args, read_colors, read_colors_from_file, try_read_colors_from_file, Invocation,
    DEFAULT_INPUT_FILE,
};
