//! Configuration primitives for the PT2314 driver.

use crate::params::{Gain, InputChannel};

/// Upper bound of every percentage-scale setting.
pub const PERCENT_MAX: u8 = 100;

/// Logical audio settings held by the driver and mirrored on the chip.
///
/// Percentage fields are kept within `0..=100`; the builder and the driver
/// setters clamp their inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Master volume, 0 is quietest and 100 loudest.
    pub volume: u8,
    /// Left speaker level, 100 means no attenuation.
    pub attenuation_left: u8,
    /// Right speaker level, 100 means no attenuation.
    pub attenuation_right: u8,
    /// Both speaker attenuators forced to full attenuation.
    pub muted: bool,
    /// Loudness compensation enabled.
    pub loudness: bool,
    /// Input gain preset.
    pub gain: Gain,
    /// Selected stereo input.
    pub channel: InputChannel,
    /// Bass level, 50 is flat.
    pub bass: u8,
    /// Treble level, 50 is flat.
    pub treble: u8,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Returns a copy with every percentage field clamped to `0..=100`.
    pub fn clamped(self) -> Self {
        Self {
            volume: self.volume.min(PERCENT_MAX),
            attenuation_left: self.attenuation_left.min(PERCENT_MAX),
            attenuation_right: self.attenuation_right.min(PERCENT_MAX),
            bass: self.bass.min(PERCENT_MAX),
            treble: self.treble.min(PERCENT_MAX),
            ..self
        }
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the master volume.
    pub fn volume(mut self, volume: u8) -> Self {
        self.config.volume = volume.min(PERCENT_MAX);
        self
    }

    /// Overrides both speaker attenuators.
    pub fn attenuation(mut self, left: u8, right: u8) -> Self {
        self.config.attenuation_left = left.min(PERCENT_MAX);
        self.config.attenuation_right = right.min(PERCENT_MAX);
        self
    }

    /// Sets the mute state.
    pub fn muted(mut self, muted: bool) -> Self {
        self.config.muted = muted;
        self
    }

    /// Sets loudness compensation.
    pub fn loudness(mut self, loudness: bool) -> Self {
        self.config.loudness = loudness;
        self
    }

    /// Sets the input gain preset.
    pub fn gain(mut self, gain: Gain) -> Self {
        self.config.gain = gain;
        self
    }

    /// Selects the stereo input.
    pub fn channel(mut self, channel: InputChannel) -> Self {
        self.config.channel = channel;
        self
    }

    /// Overrides the bass level.
    pub fn bass(mut self, bass: u8) -> Self {
        self.config.bass = bass.min(PERCENT_MAX);
        self
    }

    /// Overrides the treble level.
    pub fn treble(mut self, treble: u8) -> Self {
        self.config.treble = treble.min(PERCENT_MAX);
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            volume: 0,
            attenuation_left: 100,
            attenuation_right: 100,
            muted: false,
            loudness: false,
            gain: Gain::ZeroDb,
            channel: InputChannel::In1,
            bass: 50,
            treble: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_power_on_settings() {
        let config = Config::default();
        assert_eq!(config.volume, 0);
        assert_eq!(config.attenuation_left, 100);
        assert_eq!(config.attenuation_right, 100);
        assert!(!config.muted);
        assert!(!config.loudness);
        assert_eq!(config.gain, Gain::ZeroDb);
        assert_eq!(config.channel, InputChannel::In1);
        assert_eq!(config.bass, 50);
        assert_eq!(config.treble, 50);
    }

    #[test]
    fn builder_clamps_percentages() {
        let config = Config::new()
            .volume(180)
            .attenuation(101, 20)
            .bass(255)
            .treble(75)
            .build();
        assert_eq!(config.volume, 100);
        assert_eq!(config.attenuation_left, 100);
        assert_eq!(config.attenuation_right, 20);
        assert_eq!(config.bass, 100);
        assert_eq!(config.treble, 75);
    }

    #[test]
    fn clamped_fixes_hand_built_values() {
        let config = Config {
            volume: 200,
            treble: 101,
            ..Config::default()
        }
        .clamped();
        assert_eq!(config.volume, 100);
        assert_eq!(config.treble, 100);
    }
}
