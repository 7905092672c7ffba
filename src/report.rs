//! Format a blended color for display.

use std::fmt::{self, Write};

use crate::color::{Color, Component};
use crate::hsl::{rgb_to_hsl, Hsl};

/// Significant digits used for floating point values.
const PRECISION: usize = 6;

/// How the `Hex` line writes each channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HexStyle {
    /// At least two lowercase digits per channel, `#ff0000ff`.
    #[default]
    Padded,
    /// No padding, so a channel of 5 is written as `5`. The result can be
    /// ambiguous and is only kept for compatibility with older output.
    Legacy,
}

impl HexStyle {
    /// Write the channels of `color` as a `#` prefixed hex string.
    pub fn format(self, color: &Color) -> String {
        let mut hex = String::from("#");
        for channel in color.channels() {
            // Writing to a String never fails.
            let _ = match self {
                HexStyle::Padded => write!(hex, "{channel:02x}"),
                HexStyle::Legacy => write!(hex, "{channel:x}"),
            };
        }
        hex
    }
}

/// A blended color along with its HSL notation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Report {
    /// The blended color.
    pub color: Color,
    /// The color in HSL notation.
    pub hsl: Hsl,
    /// How the hex line is written.
    pub hex_style: HexStyle,
}

impl Report {
    /// Create a report for `color`.
    pub fn new(color: Color, hex_style: HexStyle) -> Self {
        Self {
            color,
            hsl: rgb_to_hsl(&color),
            hex_style,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Red: {}", self.color.red)?;
        writeln!(f, "Green: {}", self.color.green)?;
        writeln!(f, "Blue: {}", self.color.blue)?;
        writeln!(f, "Alpha: {}", self.color.alpha)?;
        writeln!(f, "Hex: {}", self.hex_style.format(&self.color))?;
        writeln!(f, "Hue: {}", general(self.hsl.hue_degrees()))?;
        writeln!(f, "Saturation: {}", general(self.hsl.saturation))?;
        writeln!(f, "Lightness: {}", general(self.hsl.lightness))
    }
}

/// Remove trailing zeros after a decimal point, and the point itself if
/// nothing is left after it.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Format `value` with six significant digits, like C's `%g`.
fn general(value: Component) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if !value.is_finite() {
        return value.to_string().to_lowercase();
    }

    let exponent = value.abs().log10().floor() as i32;

    if exponent < -4 || exponent >= PRECISION as i32 {
        let formatted = format!("{:.*e}", PRECISION - 1, value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let exponent: i32 = exponent.parse().unwrap_or_default();
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
            }
            None => formatted,
        };
    }

    let decimals = (PRECISION as i32 - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_owned()
}
