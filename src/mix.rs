//! Aggregation strategies that reduce a [`Palette`] to a single [`Color`].
//!
//! Every strategy works on each channel independently and does not depend on
//! the order of the colors.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::color::{Channel, Color, Component, Palette, CHANNEL_MAX};
use crate::math::{mean, truncated_mean};
use crate::Error;

/// The aggregation strategy used to blend a palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Per-channel mean, truncated toward zero.
    #[default]
    Mix,
    /// Per-channel minimum.
    Lowest,
    /// Per-channel maximum.
    Highest,
    /// The mixed red, green and blue channels with alpha replaced by the mean
    /// HSL saturation of the inputs.
    MixSaturate,
}

impl Mode {
    /// All modes, in the order they are documented.
    pub const ALL: [Mode; 4] = [Mode::Mix, Mode::Lowest, Mode::Highest, Mode::MixSaturate];

    /// The name used to select this mode.
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Mix => "mix",
            Mode::Lowest => "lowest",
            Mode::Highest => "highest",
            Mode::MixSaturate => "mix-saturate",
        }
    }

    /// Pick the mode for a requested name. No request means [`Mode::Mix`]; a
    /// name that is not recognized logs a warning and also falls back to
    /// [`Mode::Mix`].
    pub fn resolve(requested: Option<&str>) -> Self {
        let Some(requested) = requested else {
            return Mode::default();
        };

        match requested.parse() {
            Ok(mode) => mode,
            Err(err) => {
                debug!(%err, "falling back to the default mode");
                warn!("Invalid mode specified, using 'mix' as default.");
                Mode::default()
            }
        }
    }

    /// Blend the palette with this strategy.
    pub fn apply(self, palette: &Palette) -> Color {
        match self {
            Mode::Mix => mix(palette),
            Mode::Lowest => lowest(palette),
            Mode::Highest => highest(palette),
            Mode::MixSaturate => mix_saturate(palette),
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| Error::UnknownMode(s.to_owned()))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reduce every channel of the palette with `f`.
fn per_channel(
    palette: &Palette,
    f: impl Fn(&mut dyn Iterator<Item = Channel>) -> Channel,
) -> Color {
    Color::from_channels(std::array::from_fn(|i| {
        f(&mut palette.iter().map(|color| color.channels()[i]))
    }))
}

/// Per-channel arithmetic mean, truncated toward zero.
pub fn mix(palette: &Palette) -> Color {
    per_channel(palette, |channels| {
        // The mean never exceeds the largest input, so it fits a channel.
        truncated_mean(channels.map(u64::from)).map_or(0, |m| m as Channel)
    })
}

/// Per-channel minimum.
pub fn lowest(palette: &Palette) -> Color {
    per_channel(palette, |channels| channels.min().unwrap_or(CHANNEL_MAX))
}

/// Per-channel maximum.
pub fn highest(palette: &Palette) -> Color {
    per_channel(palette, |channels| channels.max().unwrap_or(0))
}

/// The [`mix`] of the palette with alpha set to the mean HSL saturation of
/// every input, scaled to `0..=255` and truncated.
pub fn mix_saturate(palette: &Palette) -> Color {
    let mixed = mix(palette);
    let saturation = mean(palette.iter().map(|color| color.to_hsl().saturation)).unwrap_or(0.0);

    Color {
        alpha: (saturation * CHANNEL_MAX as Component) as Channel,
        ..mixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::capture_logs;

    fn palette(colors: &[Color]) -> Palette {
        Palette::new(colors.to_vec()).unwrap()
    }

    #[test]
    fn mode_names() {
        for mode in Mode::ALL {
            assert_eq!(mode.name().parse::<Mode>().unwrap(), mode);
            assert_eq!(mode.to_string(), mode.name());
        }

        assert!(matches!("Mix".parse::<Mode>(), Err(Error::UnknownMode(m)) if m == "Mix"));
        assert!("".parse::<Mode>().is_err());
        assert!("mix ".parse::<Mode>().is_err());
    }

    #[test]
    fn resolve_falls_back_to_mix() {
        assert_eq!(Mode::resolve(None), Mode::Mix);
        assert_eq!(Mode::resolve(Some("bogus")), Mode::Mix);
        assert_eq!(Mode::resolve(Some("")), Mode::Mix);
        assert_eq!(Mode::resolve(Some("highest")), Mode::Highest);
        assert_eq!(Mode::resolve(Some("mix-saturate")), Mode::MixSaturate);
    }

    #[test]
    fn unknown_mode_is_reported() {
        let (mode, logs) = capture_logs(|| Mode::resolve(Some("bogus")));
        assert_eq!(mode, Mode::Mix);
        assert_eq!(logs, "Invalid mode specified, using 'mix' as default.\n");

        let (_, logs) = capture_logs(|| Mode::resolve(Some("")));
        assert_eq!(logs, "Invalid mode specified, using 'mix' as default.\n");
    }

    #[test]
    fn known_or_missing_mode_is_silent() {
        let (_, logs) = capture_logs(|| Mode::resolve(Some("lowest")));
        assert!(logs.is_empty(), "{logs}");

        let (_, logs) = capture_logs(|| Mode::resolve(None));
        assert!(logs.is_empty(), "{logs}");
    }

    #[test]
    fn mix_truncates() {
        let p = palette(&[Color::new(0, 0, 0, 0), Color::new(255, 255, 255, 255)]);
        assert_eq!(mix(&p), Color::new(127, 127, 127, 127));
    }

    #[test]
    fn mix_of_one_color_is_the_color() {
        let c = Color::new(12, 34, 56, 78);
        assert_eq!(Mode::Mix.apply(&palette(&[c])), c);
    }

    #[test]
    fn mix_does_not_overflow_on_out_of_range_channels() {
        let p = palette(&vec![Color::new(999, 999, 999, 999); 10_000]);
        assert_eq!(mix(&p), Color::new(999, 999, 999, 999));
    }

    #[test]
    fn lowest_and_highest_are_per_channel() {
        let p = palette(&[
            Color::new(10, 200, 30, 255),
            Color::new(50, 20, 90, 0),
            Color::new(30, 100, 60, 128),
        ]);
        assert_eq!(lowest(&p), Color::new(10, 20, 30, 0));
        assert_eq!(highest(&p), Color::new(50, 200, 90, 255));
    }

    #[test]
    fn extremes_are_not_limited_to_the_channel_range() {
        let p = palette(&[Color::new(999, 300, 256, 400)]);
        assert_eq!(lowest(&p), Color::new(999, 300, 256, 400));
        assert_eq!(highest(&p), Color::new(999, 300, 256, 400));
    }

    #[test]
    fn lowest_of_white_black_red() {
        let p = palette(&[
            Color::opaque(255, 255, 255),
            Color::opaque(0, 0, 0),
            Color::opaque(255, 0, 0),
        ]);
        assert_eq!(Mode::Lowest.apply(&p), Color::new(0, 0, 0, 255));
        assert_eq!(Mode::Highest.apply(&p), Color::new(255, 255, 255, 255));
    }

    #[test]
    fn mix_saturate_replaces_alpha_with_saturation() {
        // Red is fully saturated, gray is not: mean saturation 0.5.
        let p = palette(&[Color::new(255, 0, 0, 10), Color::new(128, 128, 128, 20)]);
        let result = mix_saturate(&p);
        assert_eq!(result.red, 191);
        assert_eq!(result.green, 64);
        assert_eq!(result.blue, 64);
        assert_eq!(result.alpha, 127);

        let p = palette(&[Color::new(0, 0, 255, 0)]);
        assert_eq!(Mode::MixSaturate.apply(&p), Color::new(0, 0, 255, 255));

        let p = palette(&[Color::new(40, 40, 40, 255)]);
        assert_eq!(Mode::MixSaturate.apply(&p), Color::new(40, 40, 40, 0));
    }
}
