//! Strongly typed parameter enumerations for the PT2314 driver.
//!
//! These enums map directly to datasheet field encodings of the audio switch
//! register and are used across [`Config`](crate::config::Config) and the
//! high-level driver APIs.
//!
//! # Examples
//!
//! ```rust
//! use pt2314::params::{Gain, InputChannel};
//!
//! let gain = Gain::from_index(2);
//! assert_eq!(gain, Gain::Plus7_5Db);
//! assert_eq!(gain.db(), 7.5);
//! assert_eq!(InputChannel::from_index(9), InputChannel::In4);
//! ```

use modular_bitfield::prelude::Specifier;

/// Input gain presets encoded in the audio switch register (bits 4:3).
///
/// The chip encodes the boost inverted: `0b11` is no boost and `0b00` is the
/// maximum of +11.25 dB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum Gain {
    /// No input boost (0 dB).
    ZeroDb = 0b11,
    /// +3.75 dB input boost.
    Plus3_75Db = 0b10,
    /// +7.5 dB input boost.
    Plus7_5Db = 0b01,
    /// +11.25 dB input boost.
    Plus11_25Db = 0b00,
}

impl Gain {
    /// Returns the preset for a gain index, clamping anything above 3.
    pub const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::ZeroDb,
            1 => Self::Plus3_75Db,
            2 => Self::Plus7_5Db,
            _ => Self::Plus11_25Db,
        }
    }

    /// Returns the preset index in the range `0..=3`.
    pub const fn index(self) -> u8 {
        match self {
            Self::ZeroDb => 0,
            Self::Plus3_75Db => 1,
            Self::Plus7_5Db => 2,
            Self::Plus11_25Db => 3,
        }
    }

    /// Returns the boost applied by this preset in decibels.
    pub const fn db(self) -> f32 {
        match self {
            Self::ZeroDb => 0.0,
            Self::Plus3_75Db => 3.75,
            Self::Plus7_5Db => 7.5,
            Self::Plus11_25Db => 11.25,
        }
    }
}

/// Stereo input selected by the audio switch register (bits 1:0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum InputChannel {
    /// Stereo input 1.
    In1 = 0b00,
    /// Stereo input 2.
    In2 = 0b01,
    /// Stereo input 3.
    In3 = 0b10,
    /// Stereo input 4.
    In4 = 0b11,
}

impl InputChannel {
    /// Returns the input for a zero-based index, clamping anything above 3.
    pub const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::In1,
            1 => Self::In2,
            2 => Self::In3,
            _ => Self::In4,
        }
    }

    /// Returns the zero-based index of this input.
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// How channel numbers are presented to the application.
///
/// Internally the driver always stores channels zero-based; this only
/// affects how [`Pt2314::set_channel`](crate::Pt2314::set_channel) interprets
/// its argument and what [`Pt2314::channel`](crate::Pt2314::channel) returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelAddressing {
    /// Channels are numbered `0..=3`.
    #[default]
    ZeroBased,
    /// Channels are numbered `1..=4`.
    OneBased,
}

impl ChannelAddressing {
    /// Converts an externally presented channel number to an input.
    ///
    /// Out of range values clamp to the nearest input.
    pub const fn input_for(self, channel: u8) -> InputChannel {
        match self {
            Self::ZeroBased => InputChannel::from_index(channel),
            Self::OneBased => InputChannel::from_index(channel.saturating_sub(1)),
        }
    }

    /// Converts an input to its externally presented channel number.
    pub const fn number_for(self, input: InputChannel) -> u8 {
        match self {
            Self::ZeroBased => input.index(),
            Self::OneBased => input.index() + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gain_index_clamps_to_maximum_boost() {
        assert_eq!(Gain::from_index(3), Gain::Plus11_25Db);
        assert_eq!(Gain::from_index(5), Gain::Plus11_25Db);
        assert_eq!(Gain::from_index(255).index(), 3);
    }

    #[test]
    fn gain_presets_report_documented_db() {
        let db: [f32; 4] = [0.0, 3.75, 7.5, 11.25];
        for (index, expected) in db.iter().enumerate() {
            assert_eq!(Gain::from_index(index as u8).db(), *expected);
        }
    }

    #[test]
    fn one_based_addressing_shifts_by_one() {
        let addressing = ChannelAddressing::OneBased;
        assert_eq!(addressing.input_for(1), InputChannel::In1);
        assert_eq!(addressing.input_for(4), InputChannel::In4);
        assert_eq!(addressing.number_for(InputChannel::In1), 1);
    }

    #[test]
    fn addressing_clamps_out_of_range_channels() {
        assert_eq!(ChannelAddressing::OneBased.input_for(0), InputChannel::In1);
        assert_eq!(ChannelAddressing::OneBased.input_for(7), InputChannel::In4);
        assert_eq!(ChannelAddressing::ZeroBased.input_for(4), InputChannel::In4);
    }
}
