//! Settings for a blending run and the run itself.

use std::path::PathBuf;

use tracing::debug;

use crate::color::{Color, Palette};
use crate::mix::Mode;
use crate::report::{HexStyle, Report};
use crate::source::{read_colors_from_file, Invocation, DEFAULT_INPUT_FILE};
use crate::{Error, Result};

/// Where colors are read from and how the result is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlendConfig {
    /// The color file, one color per line.
    pub input_file: PathBuf,
    /// How the hex line of the report is written.
    pub hex_style: HexStyle,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            hex_style: HexStyle::default(),
        }
    }
}

impl BlendConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color file.
    pub fn with_input_file(mut self, input_file: impl Into<PathBuf>) -> Self {
        self.input_file = input_file.into();
        self
    }

    /// Set the hex style.
    pub fn with_hex_style(mut self, hex_style: HexStyle) -> Self {
        self.hex_style = hex_style;
        self
    }
}

/// The outcome of blending a palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Blend {
    /// The mode that was used, after falling back from an unknown name.
    pub mode: Mode,
    /// The blended color.
    pub color: Color,
}

/// Blend the file colors followed by the command line colors with the mode
/// the command line asked for.
pub fn blend(file_colors: Vec<Color>, invocation: Invocation) -> Result<Blend> {
    let Invocation { mode, colors } = invocation;

    let palette = Palette::concat(file_colors, colors).ok_or(Error::NoColors)?;
    let mode = Mode::resolve(mode.as_deref());
    let color = mode.apply(&palette);

    debug!(%mode, count = palette.len(), ?color, "blended colors");

    Ok(Blend { mode, color })
}

/// Read the color file, scan the command line tokens and report the blend.
pub fn run<I, S>(config: &BlendConfig, tokens: I) -> Result<Report>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let file_colors = read_colors_from_file(&config.input_file);
    let invocation = Invocation::from_tokens(tokens);
    let Blend { color, .. } = blend(file_colors, invocation)?;

    Ok(Report::new(color, config.hex_style))
}
