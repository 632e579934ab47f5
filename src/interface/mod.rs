//! Bus interface abstraction for the PT2314 driver.

pub mod i2c;

/// Abstraction over the low-level bus access required by the driver.
///
/// The PT2314 only accepts single-byte commands and has no readable
/// registers, so one write primitive is all the driver needs.
pub trait Pt2314Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Sends a single command byte to the device.
    fn write_byte(&mut self, byte: u8) -> core::result::Result<(), Self::Error>;
}

impl<T> Pt2314Interface for &mut T
where
    T: Pt2314Interface + ?Sized,
{
    type Error = T::Error;

    fn write_byte(&mut self, byte: u8) -> core::result::Result<(), Self::Error> {
        (**self).write_byte(byte)
    }
}
