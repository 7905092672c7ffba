//! A [`Color`] is a four channel RGBA record read from a color file or the
//! command line, and a [`Palette`] is the non-empty collection of them that
//! gets blended.

use crate::hsl::{Hsl, Srgb};

/// An unsigned integer that every channel of a [`Color`] is stored as.
///
/// Channels are conventionally in `0..=255`, but decimal input is not range
/// checked, so larger values pass through untouched.
pub type Channel = u32;

/// The largest value of a channel in its conventional range.
pub const CHANNEL_MAX: Channel = 255;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all model components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all model components are stored as.
pub type Component = f64;

/// Represent the three components that describe a color model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

/// A color with red, green, blue and alpha channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// The red channel.
    pub red: Channel,
    /// The green channel.
    pub green: Channel,
    /// The blue channel.
    pub blue: Channel,
    /// The alpha channel. 255 is fully opaque.
    pub alpha: Channel,
}

impl Color {
    /// Create a new [`Color`] from all four channels.
    pub const fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a fully opaque [`Color`].
    pub const fn opaque(red: Channel, green: Channel, blue: Channel) -> Self {
        Self::new(red, green, blue, CHANNEL_MAX)
    }

    /// Return the channels in red, green, blue, alpha order.
    pub const fn channels(&self) -> [Channel; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Create a [`Color`] from channels in red, green, blue, alpha order.
    pub const fn from_channels([red, green, blue, alpha]: [Channel; 4]) -> Self {
        Self::new(red, green, blue, alpha)
    }

    /// Normalize the red, green and blue channels into the sRGB model. The
    /// alpha channel is dropped.
    pub fn to_srgb(&self) -> Srgb {
        let normalize = |channel: Channel| channel as Component / CHANNEL_MAX as Component;
        Srgb::new(
            normalize(self.red),
            normalize(self.green),
            normalize(self.blue),
        )
    }

    /// Convert the color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        self.to_srgb().to_hsl()
    }
}

impl From<[Channel; 4]> for Color {
    fn from(value: [Channel; 4]) -> Self {
        Self::from_channels(value)
    }
}

/// An ordered collection of colors that is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette(Vec<Color>);

impl Palette {
    /// Wrap the colors in a palette, or return `None` if there are none.
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self(colors))
        }
    }

    /// Build a palette from the colors read from a file followed by the colors
    /// given on the command line.
    pub fn concat(file_colors: Vec<Color>, cli_colors: Vec<Color>) -> Option<Self> {
        let mut colors = file_colors;
        colors.extend(cli_colors);
        Self::new(colors)
    }

    /// The colors in the order they were added.
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// Iterate over the colors in the order they were added.
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.0.iter()
    }

    /// Number of colors in the palette. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_color_with_correct_channels() {
        let c = Color::new(1, 2, 3, 4);
        assert_eq!(c.channels(), [1, 2, 3, 4]);
        assert_eq!(Color::from_channels([1, 2, 3, 4]), c);
        assert_eq!(Color::from([1, 2, 3, 4]), c);

        let c = Color::opaque(10, 20, 30);
        assert_eq!(c.alpha, 255);
    }

    #[test]
    fn srgb_is_normalized() {
        let srgb = Color::new(255, 0, 51, 17).to_srgb();
        assert_eq!(srgb.red, 1.0);
        assert_eq!(srgb.green, 0.0);
        assert_eq!(srgb.blue, 0.2);
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert!(Palette::new(vec![]).is_none());
        assert!(Palette::concat(vec![], vec![]).is_none());
    }

    #[test]
    fn palette_keeps_file_colors_first() {
        let white = Color::opaque(255, 255, 255);
        let black = Color::opaque(0, 0, 0);
        let red = Color::opaque(255, 0, 0);
        let palette = Palette::concat(vec![white, black], vec![red]).unwrap();
        assert_eq!(palette.colors(), &[white, black, red]);
        assert_eq!(palette.len(), 3);
    }
}
