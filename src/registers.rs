//! Register map definitions and value encoders for the PT2314 audio processor.
//!
//! The PT2314 has no register addresses. Every command is a single byte whose
//! high bits select the register class and whose low bits carry the value.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{Gain, InputChannel};

/// Register class prefix of the left speaker attenuator (bits 7:5).
pub const CLASS_ATTENUATION_LEFT: u8 = 0b110;
/// Register class prefix of the right speaker attenuator (bits 7:5).
pub const CLASS_ATTENUATION_RIGHT: u8 = 0b111;
/// Register class prefix of the audio switch register (bits 7:5).
pub const CLASS_AUDIO_SWITCH: u8 = 0b010;
/// Register class prefix of the bass control register (bits 7:4).
pub const CLASS_BASS: u8 = 0b0110;
/// Register class prefix of the treble control register (bits 7:4).
pub const CLASS_TREBLE: u8 = 0b0111;

/// Volume register value for the quietest setting (-78.75 dB).
pub const VOLUME_REGISTER_MIN: u8 = 63;
/// Attenuator magnitude for full attenuation, also used for muting.
pub const ATTENUATION_FULL: u8 = 31;
/// Highest valid tone level accepted by [`tone_to_register`].
pub const TONE_LEVEL_MAX: u8 = 28;

/// Left attenuator byte sent while muted.
pub const MUTE_LEFT: u8 = 0b1101_1111;
/// Right attenuator byte sent while muted.
pub const MUTE_RIGHT: u8 = 0b1111_1111;

/// Tone codes indexed by level, from -14 dB (level 0) to +14 dB (level 28).
///
/// Cuts count up from 0 to 7, boosts count down from 14 to 8.
pub const TONE_TABLE: [u8; 29] = [
    0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, // -14 dB ..= 0 dB
    14, 14, 13, 13, 12, 12, 11, 11, 10, 10, 9, 9, 8, 8, // +1 dB ..= +14 dB
];

// Fine volume steps selected by the low three bits of the volume register.
const VOLUME_FINE_DB: [f32; 8] = [0.0, -1.25, -2.5, -3.75, -5.0, -6.25, -7.5, -8.75];
// Coarse volume steps selected by bits 5:3 of the volume register.
const VOLUME_COARSE_DB: [f32; 8] = [0.0, -10.0, -20.0, -30.0, -40.0, -50.0, -60.0, -70.0];

/// Bitfield representation of the volume register (class `00`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume {
    // Attenuation in 1.25 dB steps, 0 is loudest (bits 5:0).
    pub attenuation: B6,
    #[skip]
    __: B2,
}

impl Volume {
    /// Builds the volume register for a raw 6-bit attenuation value.
    pub fn from_attenuation(attenuation: u8) -> Self {
        Self::new().with_attenuation(attenuation & 0b11_1111)
    }
}

impl From<Volume> for u8 {
    fn from(value: Volume) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the speaker attenuator registers.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attenuation {
    // Attenuation in 1.25 dB steps, 31 mutes the output (bits 4:0).
    pub magnitude: B5,
    // Register class selecting the left or right attenuator (bits 7:5).
    pub class: B3,
}

impl Attenuation {
    /// Builds the left attenuator register.
    pub fn left(magnitude: u8) -> Self {
        Self::new()
            .with_magnitude(magnitude.min(ATTENUATION_FULL))
            .with_class(CLASS_ATTENUATION_LEFT)
    }

    /// Builds the right attenuator register.
    pub fn right(magnitude: u8) -> Self {
        Self::new()
            .with_magnitude(magnitude.min(ATTENUATION_FULL))
            .with_class(CLASS_ATTENUATION_RIGHT)
    }
}

impl From<Attenuation> for u8 {
    fn from(value: Attenuation) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the audio switch register.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSwitch {
    // Selected stereo input (bits 1:0).
    pub input: InputChannel,
    // Set to disable loudness compensation (bit 2).
    pub loudness_off: bool,
    // Input gain preset (bits 4:3).
    pub gain: Gain,
    // Register class, always `010` (bits 7:5).
    pub class: B3,
}

impl AudioSwitch {
    /// Builds the audio switch register from its logical fields.
    pub fn compose(input: InputChannel, loudness: bool, gain: Gain) -> Self {
        Self::new()
            .with_input(input)
            .with_loudness_off(!loudness)
            .with_gain(gain)
            .with_class(CLASS_AUDIO_SWITCH)
    }
}

impl From<AudioSwitch> for u8 {
    fn from(value: AudioSwitch) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the bass and treble registers.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    // Tone code from [`TONE_TABLE`] (bits 3:0).
    pub code: B4,
    // Register class selecting bass or treble (bits 7:4).
    pub class: B4,
}

impl Tone {
    /// Builds the bass register for a tone level in `0..=28`.
    pub fn bass(level: u8) -> Self {
        Self::new()
            .with_code(tone_to_register(level))
            .with_class(CLASS_BASS)
    }

    /// Builds the treble register for a tone level in `0..=28`.
    pub fn treble(level: u8) -> Self {
        Self::new()
            .with_code(tone_to_register(level))
            .with_class(CLASS_TREBLE)
    }
}

impl From<Tone> for u8 {
    fn from(value: Tone) -> Self {
        value.into_bytes()[0]
    }
}

/// Maps a volume percentage to the 6-bit volume register value.
///
/// 100 is the loudest setting (register 0) and 0 the quietest (register 63).
/// Values above 100 are treated as 100.
pub const fn volume_to_register(volume: u8) -> u8 {
    let volume = if volume > 100 { 100 } else { volume };
    VOLUME_REGISTER_MIN - ((volume as u16 * VOLUME_REGISTER_MIN as u16) / 100) as u8
}

/// Looks up the chip tone code for a level in `0..=28`.
///
/// Levels past the end of the table encode as 0 (-14 dB) instead of failing.
pub fn tone_to_register(level: u8) -> u8 {
    TONE_TABLE.get(level as usize).copied().unwrap_or(0)
}

/// Rescales a bass/treble percentage to a tone level in `0..=28`.
pub const fn percent_to_tone_level(percent: u8) -> u8 {
    let percent = if percent > 100 { 100 } else { percent };
    ((percent as u16 * TONE_LEVEL_MAX as u16) / 100) as u8
}

/// Rescales an attenuation percentage to the inverted 5-bit magnitude.
///
/// 100 means no attenuation (magnitude 0), 0 means full attenuation (31).
pub const fn percent_to_attenuation(percent: u8) -> u8 {
    let percent = if percent > 100 { 100 } else { percent };
    ATTENUATION_FULL - ((percent as u16 * ATTENUATION_FULL as u16) / 100) as u8
}

/// Decodes a raw volume register value into decibels.
pub fn volume_register_to_db(raw: u8) -> f32 {
    let fine = (raw & 0b0000_0111) as usize;
    let coarse = ((raw & 0b0011_1000) >> 3) as usize;
    VOLUME_FINE_DB[fine] + VOLUME_COARSE_DB[coarse]
}
