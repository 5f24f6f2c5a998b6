//! Register transport
//!
//! The driver never talks to the bus directly. Every register access goes
//! through a [`RegisterBus`], supplied by the caller. Two implementations are
//! provided:
//!
//! - [`I2cBus`] wraps any `embedded_hal::i2c::I2c` peripheral
//! - [`Callbacks`] wraps a pair of closures, for platforms that expose register
//!   access as plain functions
//!
//! Transfers are 16 bits, most significant byte first.

use embedded_hal::i2c::I2c;

/// A 16-bit register read/write capability.
pub trait RegisterBus {
    /// Error reported by the underlying transfer
    type Error;

    /// Reads the register at `register` on the device at `address`.
    fn read_register(&mut self, address: u8, register: u8) -> Result<u16, Self::Error>;

    /// Writes `value` to the register at `register` on the device at `address`.
    fn write_register(&mut self, address: u8, register: u8, value: u16) -> Result<(), Self::Error>;

    /// Whether both the read and the write direction are available.
    ///
    /// Implementations that are complete by construction keep the default.
    fn is_bound(&self) -> bool {
        true
    }
}

impl<B: RegisterBus + ?Sized> RegisterBus for &mut B {
    type Error = B::Error;

    fn read_register(&mut self, address: u8, register: u8) -> Result<u16, Self::Error> {
        (**self).read_register(address, register)
    }

    fn write_register(&mut self, address: u8, register: u8, value: u16) -> Result<(), Self::Error> {
        (**self).write_register(address, register, value)
    }

    fn is_bound(&self) -> bool {
        (**self).is_bound()
    }
}

/// Register access through a pair of closures.
///
/// The read closure returns `None` and the write closure returns `false` when
/// the transfer fails. A missing closure leaves the bus unbound, which the
/// driver reports as [`Error::Config`](crate::Error::Config) without calling
/// the other one.
///
/// # Example
/// ```
/// use opt3001::{Callbacks, Device};
///
/// let bus = Callbacks::new(
///     |_address, _register| Some(0x0001),
///     |_address, _register, _value| true,
/// );
/// let mut device = Device::new(bus).unwrap();
/// assert!((device.read_lux().unwrap() - 0.01).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Callbacks<R, W> {
    /// Register read, `(address, register) -> value`
    pub read: Option<R>,
    /// Register write, `(address, register, value) -> success`
    pub write: Option<W>,
}

impl<R, W> Callbacks<R, W>
where
    R: FnMut(u8, u8) -> Option<u16>,
    W: FnMut(u8, u8, u16) -> bool,
{
    /// Creates a fully bound capability.
    pub fn new(read: R, write: W) -> Self {
        Self {
            read: Some(read),
            write: Some(write),
        }
    }
}

impl<R, W> RegisterBus for Callbacks<R, W>
where
    R: FnMut(u8, u8) -> Option<u16>,
    W: FnMut(u8, u8, u16) -> bool,
{
    type Error = ();

    fn read_register(&mut self, address: u8, register: u8) -> Result<u16, Self::Error> {
        let read = self.read.as_mut().ok_or(())?;
        read(address, register).ok_or(())
    }

    fn write_register(&mut self, address: u8, register: u8, value: u16) -> Result<(), Self::Error> {
        let write = self.write.as_mut().ok_or(())?;
        if write(address, register, value) {
            Ok(())
        } else {
            Err(())
        }
    }

    fn is_bound(&self) -> bool {
        self.read.is_some() && self.write.is_some()
    }
}

/// Register access over an `embedded-hal` I2C peripheral.
///
/// A read selects the register with a one byte write and reads two bytes back
/// in the same transaction. A write sends the register pointer followed by the
/// value.
pub struct I2cBus<I2C> {
    i2c: I2C,
}

impl<I2C> I2cBus<I2C> {
    /// Wraps the provided I2C peripheral.
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Releases the underlying I2C peripheral.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> RegisterBus for I2cBus<I2C> {
    type Error = I2C::Error;

    fn read_register(&mut self, address: u8, register: u8) -> Result<u16, Self::Error> {
        let mut raw_value = [0u8; 2];
        self.i2c.write_read(address, &[register], &mut raw_value)?;
        Ok(u16::from_be_bytes(raw_value))
    }

    fn write_register(&mut self, address: u8, register: u8, value: u16) -> Result<(), Self::Error> {
        let [msb, lsb] = value.to_be_bytes();
        self.i2c.write(address, &[register, msb, lsb])
    }
}
