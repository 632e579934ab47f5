//! I²C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::Pt2314Interface;
use crate::log::trace;

/// Fixed 7-bit I²C address of the PT2314 (`0x88` in 8-bit write notation).
pub const PT2314_I2C_ADDRESS: u8 = 0x44;

/// I²C-based interface implementation for the PT2314 driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface from the provided I²C bus.
    pub const fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Provides mutable access to the wrapped I²C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I²C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Pt2314Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_byte(&mut self, byte: u8) -> core::result::Result<(), Self::Error> {
        trace!("PT2314 <- 0x{=u8:02x}", byte);
        self.i2c.write(PT2314_I2C_ADDRESS, core::slice::from_ref(&byte))
    }
}

#[cfg(test)]
mod tests {
    use super::{I2cInterface, PT2314_I2C_ADDRESS};
    use crate::interface::Pt2314Interface;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    #[test]
    fn write_byte_sends_single_byte_to_fixed_address() {
        let expectations = [I2cTransaction::write(PT2314_I2C_ADDRESS, vec![0x5C])];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations));

        interface.write_byte(0x5C).unwrap();

        interface.release().done();
    }

    #[test]
    fn write_byte_propagates_bus_error() {
        let expectations = [
            I2cTransaction::write(PT2314_I2C_ADDRESS, vec![0x3F]).with_error(ErrorKind::Other),
        ];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations));

        assert_eq!(interface.write_byte(0x3F), Err(ErrorKind::Other));

        interface.release().done();
    }

    #[test]
    fn i2c_mut_exposes_wrapped_bus() {
        let expectations: [I2cTransaction; 0] = [];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations));

        interface.i2c_mut().done();
    }
}
