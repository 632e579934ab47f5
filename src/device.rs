//! High-level PT2314 device driver implementation.

use crate::config::{Config, PERCENT_MAX};
use crate::error::{Error, Result};
use crate::interface::i2c::I2cInterface;
use crate::interface::Pt2314Interface;
use crate::log::debug;
use crate::params::{ChannelAddressing, Gain};
use crate::registers::{
    percent_to_attenuation,
    percent_to_tone_level,
    volume_register_to_db,
    volume_to_register,
    Attenuation,
    AudioSwitch,
    Tone,
    Volume,
    ATTENUATION_FULL,
};
use embedded_hal::i2c::I2c;

/// High-level synchronous driver for the PT2314 audio processor.
///
/// The chip is write-only, so the driver keeps the logical settings and
/// answers every getter from that cache. Setters update the cache first and
/// then send the register bytes that depend on the changed setting.
pub struct Pt2314<IFACE> {
    interface: IFACE,
    config: Config,
    channel_addressing: ChannelAddressing,
    volume_register: u8,
    synchronized: bool,
}

impl<IFACE> Pt2314<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    ///
    /// Nothing is sent until [`Pt2314::init`] or [`Pt2314::configure`] is
    /// called.
    pub fn new(interface: IFACE) -> Self {
        let config = Config::default();
        Self {
            interface,
            config,
            channel_addressing: ChannelAddressing::default(),
            volume_register: volume_to_register(config.volume),
            synchronized: false,
        }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> IFACE {
        self.interface
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    // ==================================================================
    // == Cached State ==================================================
    // ==================================================================
    /// Returns a shared reference to the logical settings.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns `true` once a full resync succeeded and no write failed since.
    pub fn is_synchronized(&self) -> bool {
        self.synchronized
    }

    /// Returns the selected channel using the addressing mode from the last
    /// [`Pt2314::set_channel`] call.
    pub fn channel(&self) -> u8 {
        self.channel_addressing.number_for(self.config.channel)
    }

    /// Returns the addressing mode used by [`Pt2314::channel`].
    pub fn channel_addressing(&self) -> ChannelAddressing {
        self.channel_addressing
    }

    /// Returns the master volume percentage.
    pub fn volume(&self) -> u8 {
        self.config.volume
    }

    /// Returns the master volume in dB, decoded from the last volume register
    /// byte that reached the chip.
    pub fn volume_db(&self) -> f32 {
        let db = volume_register_to_db(self.volume_register);
        debug!("Volume: {}, {}dB", self.volume_register, db);
        db
    }

    /// Returns the bass percentage.
    pub fn bass(&self) -> u8 {
        self.config.bass
    }

    /// Returns the treble percentage.
    pub fn treble(&self) -> u8 {
        self.config.treble
    }

    /// Returns the left speaker level percentage.
    pub fn attenuation_left(&self) -> u8 {
        self.config.attenuation_left
    }

    /// Returns the right speaker level percentage.
    pub fn attenuation_right(&self) -> u8 {
        self.config.attenuation_right
    }

    /// Returns the selected gain preset.
    pub fn gain(&self) -> Gain {
        self.config.gain
    }

    /// Returns the selected input gain in dB.
    pub fn gain_db(&self) -> f32 {
        self.config.gain.db()
    }

    /// Returns whether loudness compensation is enabled.
    pub fn loudness(&self) -> bool {
        self.config.loudness
    }

    /// Returns whether the speaker outputs are muted.
    pub fn is_muted(&self) -> bool {
        self.config.muted
    }
}

impl<I2C> Pt2314<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I²C transports.
    pub fn new_i2c(i2c: I2C) -> Self {
        Self::new(I2cInterface::new(i2c))
    }

    /// Releases the driver, returning the I²C bus.
    pub fn release_i2c(self) -> I2C {
        self.release().release()
    }
}

impl<IFACE, CommE> Pt2314<IFACE>
where
    IFACE: Pt2314Interface<Error = CommE>,
{
    // ==================================================================
    // == Initialization & Resync =======================================
    // ==================================================================
    /// Resets the logical settings to their defaults and sends all of them.
    pub fn init(&mut self) -> Result<(), CommE> {
        debug!("PT2314 init");
        self.configure(Config::default())
    }

    /// Adopts a new set of logical settings and sends all of them.
    pub fn configure(&mut self, config: Config) -> Result<(), CommE> {
        self.config = config.clamped();
        self.sync()
    }

    /// Sends every register: volume, attenuators, audio switch, bass, treble.
    ///
    /// Stops at the first failed write. Registers sent before the failure keep
    /// their new values.
    pub fn sync(&mut self) -> Result<(), CommE> {
        self.update_volume()?;
        self.update_attenuation()?;
        self.update_audio_switch()?;
        self.update_bass()?;
        self.update_treble()?;
        self.synchronized = true;
        Ok(())
    }

    // ==================================================================
    // == Volume & Speaker Attenuators ==================================
    // ==================================================================
    /// Sets the master volume, clamped to `0..=100`.
    pub fn set_volume(&mut self, volume: u8) -> Result<(), CommE> {
        self.config.volume = volume.min(PERCENT_MAX);
        self.update_volume()
    }

    /// Mutes both speaker outputs, keeping the stored attenuation levels.
    pub fn mute_on(&mut self) -> Result<(), CommE> {
        self.config.muted = true;
        self.update_attenuation()
    }

    /// Unmutes both speaker outputs, restoring the stored attenuation levels.
    pub fn mute_off(&mut self) -> Result<(), CommE> {
        self.config.muted = false;
        self.update_attenuation()
    }

    /// Sets the left and right speaker levels, each clamped to `0..=100`.
    ///
    /// While muted the levels are stored and the mute bytes are resent.
    pub fn set_attenuation(&mut self, left: u8, right: u8) -> Result<(), CommE> {
        self.config.attenuation_left = left.min(PERCENT_MAX);
        self.config.attenuation_right = right.min(PERCENT_MAX);
        self.update_attenuation()
    }

    // ==================================================================
    // == Audio Switch ==================================================
    // ==================================================================
    /// Selects the stereo input.
    ///
    /// `addressing` decides how `channel` is read and is remembered for
    /// [`Pt2314::channel`]. Out of range channels clamp to the nearest input.
    pub fn set_channel(&mut self, channel: u8, addressing: ChannelAddressing) -> Result<(), CommE> {
        self.channel_addressing = addressing;
        self.config.channel = addressing.input_for(channel);
        self.update_audio_switch()
    }

    /// Enables loudness compensation.
    pub fn loudness_on(&mut self) -> Result<(), CommE> {
        self.config.loudness = true;
        debug!("Loudness on");
        self.update_audio_switch()
    }

    /// Disables loudness compensation.
    pub fn loudness_off(&mut self) -> Result<(), CommE> {
        self.config.loudness = false;
        debug!("Loudness off");
        self.update_audio_switch()
    }

    /// Selects the input gain preset by index, clamped to `0..=3`.
    ///
    /// 0 is no gain, 1 is +3.75 dB, 2 is +7.5 dB and 3 is +11.25 dB.
    pub fn set_gain(&mut self, index: u8) -> Result<(), CommE> {
        self.set_gain_preset(Gain::from_index(index))
    }

    /// Selects the input gain preset.
    pub fn set_gain_preset(&mut self, gain: Gain) -> Result<(), CommE> {
        self.config.gain = gain;
        debug!("Gain index: {} ({}dB)", gain.index(), gain.db());
        self.update_audio_switch()
    }

    // ==================================================================
    // == Tone Control ==================================================
    // ==================================================================
    /// Sets the bass level, clamped to `0..=100`. 50 is flat.
    pub fn set_bass(&mut self, bass: u8) -> Result<(), CommE> {
        self.config.bass = bass.min(PERCENT_MAX);
        self.update_bass()
    }

    /// Sets the treble level, clamped to `0..=100`. 50 is flat.
    pub fn set_treble(&mut self, treble: u8) -> Result<(), CommE> {
        self.config.treble = treble.min(PERCENT_MAX);
        self.update_treble()
    }

    // ==================================================================
    // == Internal Register Writers =====================================
    // ==================================================================
    fn update_volume(&mut self) -> Result<(), CommE> {
        let raw = volume_to_register(self.config.volume);
        self.write(Volume::from_attenuation(raw).into())?;
        self.volume_register = raw;
        Ok(())
    }

    fn update_attenuation(&mut self) -> Result<(), CommE> {
        let (left, right) = if self.config.muted {
            (ATTENUATION_FULL, ATTENUATION_FULL)
        } else {
            (
                percent_to_attenuation(self.config.attenuation_left),
                percent_to_attenuation(self.config.attenuation_right),
            )
        };

        self.write(Attenuation::left(left).into())?;
        self.write(Attenuation::right(right).into())
    }

    fn update_audio_switch(&mut self) -> Result<(), CommE> {
        let switch = AudioSwitch::compose(self.config.channel, self.config.loudness, self.config.gain);
        self.write(switch.into())
    }

    fn update_bass(&mut self) -> Result<(), CommE> {
        let tone = Tone::bass(percent_to_tone_level(self.config.bass));
        self.write(tone.into())
    }

    fn update_treble(&mut self) -> Result<(), CommE> {
        let tone = Tone::treble(percent_to_tone_level(self.config.treble));
        self.write(tone.into())
    }

    fn write(&mut self, byte: u8) -> Result<(), CommE> {
        if let Err(err) = self.interface.write_byte(byte) {
            self.synchronized = false;
            return Err(Error::from(err));
        }

        Ok(())
    }
}
