//! Recognize and parse color literals.
//!
//! Two notations are accepted:
//!
//! - hexadecimal with 3 (`rgb`), 6 (`rrggbb`) or 8 (`rrggbbaa`) digits, no
//!   prefix, case-insensitive.
//! - decimal with four comma separated integers of 1 to 3 digits each
//!   (`r,g,b,a`). Values are not range checked.
//!
//! Parsing goes through [`HexColor`] and [`DecimalColor`], which can only be
//! created by validating a string, so a color is never parsed from an
//! unvalidated literal.

use crate::color::{Channel, Color, CHANNEL_MAX};

/// Return `true` if `s` is 3, 6 or 8 hexadecimal digits.
pub fn is_valid_hex_color(s: &str) -> bool {
    HexColor::new(s).is_some()
}

/// Return `true` if `s` is exactly four groups of 1 to 3 decimal digits
/// separated by commas.
pub fn is_valid_decimal_color(s: &str) -> bool {
    DecimalColor::new(s).is_some()
}

/// How many digits a hex literal has, decided when it is validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HexForm {
    /// `rgb`, each digit repeated.
    Short,
    /// `rrggbb`.
    Rgb,
    /// `rrggbbaa`.
    Rgba,
}

/// A validated hexadecimal color literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexColor<'a> {
    digits: &'a [u8],
    form: HexForm,
}

impl<'a> HexColor<'a> {
    /// Validate `s` as a hex color literal.
    pub fn new(s: &'a str) -> Option<Self> {
        let digits = s.as_bytes();
        let form = match digits.len() {
            3 => HexForm::Short,
            6 => HexForm::Rgb,
            8 => HexForm::Rgba,
            _ => return None,
        };

        if !digits.iter().all(u8::is_ascii_hexdigit) {
            return None;
        }

        Some(Self { digits, form })
    }

    /// Convert the literal into a [`Color`]. Short and six digit forms are
    /// fully opaque.
    pub fn to_color(&self) -> Color {
        let d = self.digits;
        match self.form {
            HexForm::Short => Color::opaque(
                hex_digit(d[0]) * 17,
                hex_digit(d[1]) * 17,
                hex_digit(d[2]) * 17,
            ),
            HexForm::Rgb => Color::opaque(hex_byte(d, 0), hex_byte(d, 2), hex_byte(d, 4)),
            HexForm::Rgba => Color::new(
                hex_byte(d, 0),
                hex_byte(d, 2),
                hex_byte(d, 4),
                hex_byte(d, 6),
            ),
        }
    }
}

fn hex_digit(b: u8) -> Channel {
    let value = match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => unreachable!("hex literals are validated on creation"),
    };
    Channel::from(value)
}

fn hex_byte(digits: &[u8], index: usize) -> Channel {
    (hex_digit(digits[index]) << 4) | hex_digit(digits[index + 1])
}

/// A validated decimal color literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecimalColor {
    channels: [Channel; 4],
}

impl DecimalColor {
    /// Validate `s` as a decimal color literal.
    pub fn new(s: &str) -> Option<Self> {
        let mut channels = [0; 4];
        let mut groups = s.split(',');

        for channel in channels.iter_mut() {
            *channel = decimal_group(groups.next()?)?;
        }

        if groups.next().is_some() {
            return None;
        }

        Some(Self { channels })
    }

    /// Convert the literal into a [`Color`], channels in red, green, blue,
    /// alpha order.
    pub fn to_color(&self) -> Color {
        Color::from_channels(self.channels)
    }
}

fn decimal_group(group: &str) -> Option<Channel> {
    if !(1..=3).contains(&group.len()) || !group.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(
        group
            .bytes()
            .fold(0, |acc, b| acc * 10 + Channel::from(b - b'0')),
    )
}

/// Parse a validated hex literal.
pub fn parse_hex_color(hex: &HexColor<'_>) -> Color {
    hex.to_color()
}

/// Parse a validated decimal literal.
pub fn parse_decimal_color(decimal: &DecimalColor) -> Color {
    decimal.to_color()
}

/// The outcome of trying to read a color literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParsedColor {
    /// The literal was hexadecimal.
    Hex(Color),
    /// The literal was decimal.
    Decimal(Color),
    /// The literal is neither notation.
    Invalid,
}

impl ParsedColor {
    /// Parse `s` as hex first and decimal second.
    pub fn parse(s: &str) -> Self {
        if let Some(hex) = HexColor::new(s) {
            Self::Hex(parse_hex_color(&hex))
        } else if let Some(decimal) = DecimalColor::new(s) {
            Self::Decimal(parse_decimal_color(&decimal))
        } else {
            Self::Invalid
        }
    }

    /// The parsed color, if there was one.
    pub fn color(self) -> Option<Color> {
        match self {
            Self::Hex(color) | Self::Decimal(color) => Some(color),
            Self::Invalid => None,
        }
    }

    /// Return `true` if any channel lies outside `0..=255`. Only decimal
    /// literals can produce such a color.
    pub fn is_out_of_range(&self) -> bool {
        self.color()
            .is_some_and(|color| color.channels().iter().any(|&c| c > CHANNEL_MAX))
    }
}
