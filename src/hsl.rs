//! Model a color in the sRGB color space and with the HSL notation.
//!
//! Conversions only operate on the red, green and blue components. Alpha is
//! not part of either model.

use crate::color::{Color, Component};

colormix_macros::gen_model! {
    /// A color in the sRGB color space, components normally in `0.0..=1.0`.
    pub struct Srgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

colormix_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue as a fraction of a full turn, in `0.0..1.0`.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(&self.to_components()).into()
    }
}

impl Hsl {
    /// The hue in degrees.
    pub fn hue_degrees(&self) -> Component {
        self.hue * 360.0
    }
}

/// Convert the red, green and blue channels of a color to the HSL notation.
pub fn rgb_to_hsl(color: &Color) -> Hsl {
    color.to_hsl()
}

mod util {
    use crate::color::{Component, Components};

    /// Convert from RGB notation to HSL notation. Achromatic colors get a hue
    /// and saturation of zero.
    #[allow(clippy::float_cmp)]
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let lightness = (max + min) / 2.0;

        if max == min {
            return Components(0.0, 0.0, lightness);
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let sextant: Component = if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        Components(sextant / 6.0, saturation, lightness)
    }
}
