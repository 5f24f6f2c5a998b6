//! OPT3001 Device Interface
//!
//! This module provides the driver for the OPT3001 ambient light sensor. The
//! interface is built around the `Device<BUS>` struct which wraps a
//! [`RegisterBus`] and provides methods for:
//! - Writing the default or a custom configuration word
//! - Reading the latest conversion result, raw or in lux
//! - Typed access to the device registers
//!
//! Every public operation performs exactly one register transfer and nothing
//! is cached between calls.
//!
//! # Example
//! ```no_run
//! use embedded_hal::i2c::I2c;
//! use opt3001::{Device, Error, I2cBus};
//!
//! fn measure<I2C: I2c>(i2c: I2C) -> Result<f32, Error> {
//!     let mut device = Device::new(I2cBus::new(i2c))?;
//!     device.init()?;
//!     device.read_lux()
//! }
//! ```

use core::convert::Infallible;

use regiface::{ReadableRegister, WritableRegister};

use crate::{
    bus::RegisterBus,
    registers::{Configuration, ConfigurationRegister, MeasurementResult},
    Error, DEVICE_ADDRESS,
};

/// Main device interface for the OPT3001.
///
/// The bus may be owned or borrowed: `&mut B` is itself a [`RegisterBus`].
pub struct Device<BUS> {
    bus: BUS,
}

impl<BUS> Device<BUS> {
    /// Releases the underlying bus.
    pub fn release(self) -> BUS {
        self.bus
    }
}

impl<BUS> Device<BUS>
where
    BUS: RegisterBus,
{
    /// Creates a new Device instance wrapping the provided bus.
    ///
    /// # Errors
    /// * `Error::Config` - The bus lacks a read or write capability
    pub fn new(bus: BUS) -> Result<Self, Error> {
        if !bus.is_bound() {
            return Err(Error::Config);
        }
        Ok(Self { bus })
    }

    /// Writes the default configuration: continuous conversions, 100ms
    /// integration time.
    ///
    /// The value is not read back.
    ///
    /// # Errors
    /// * `Error::Config` - The bus lacks a read or write capability
    /// * `Error::Transport` - The register write failed
    pub fn init(&mut self) -> Result<(), Error> {
        self.configure(Configuration::DEFAULT)
    }

    /// Writes a configuration word verbatim.
    ///
    /// Reserved and read-only bits are passed through untouched; building a
    /// meaningful word is up to the caller.
    ///
    /// # Errors
    /// * `Error::Config` - The bus lacks a read or write capability
    /// * `Error::Transport` - The register write failed
    pub fn configure<C>(&mut self, configuration: C) -> Result<(), Error>
    where
        C: Into<Configuration>,
    {
        self.write_register(ConfigurationRegister {
            value: configuration.into(),
        })
    }

    /// Reads the latest conversion result without converting it.
    ///
    /// # Errors
    /// * `Error::Config` - The bus lacks a read or write capability
    /// * `Error::Transport` - The register read failed
    pub fn read_measurement(&mut self) -> Result<MeasurementResult, Error> {
        self.read_register()
    }

    /// Reads the latest conversion result in lux.
    ///
    /// Any register value is accepted, including exponents the datasheet
    /// marks as unused.
    ///
    /// # Errors
    /// * `Error::Config` - The bus lacks a read or write capability
    /// * `Error::Transport` - The register read failed
    pub fn read_lux(&mut self) -> Result<f32, Error> {
        self.read_measurement().map(|result| result.lux())
    }

    /// Reads a register value from the device.
    ///
    /// # Type Parameters
    /// * `R` - Register type implementing ReadableRegister with u8 ID and a
    ///   two byte payload
    ///
    /// # Errors
    /// * `Error::Config` - The bus lacks a read or write capability
    /// * `Error::Transport` - The register read failed
    /// * `Error::InvalidData` - Failed to parse register value
    pub fn read_register<R>(&mut self) -> Result<R, Error>
    where
        R: ReadableRegister<IdType = u8, Array = [u8; 2]>,
    {
        self.ensure_bound()?;

        let raw_value = self
            .bus
            .read_register(DEVICE_ADDRESS, R::id())
            .map_err(|_| Error::Transport)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("read {=u8:#x} -> {=u16:#x}", R::id(), raw_value);

        R::from_bytes(raw_value.to_be_bytes()).map_err(|_| Error::InvalidData)
    }

    /// Writes a value to a device register.
    ///
    /// # Type Parameters
    /// * `R` - Register type implementing WritableRegister with u8 ID and a
    ///   two byte payload
    ///
    /// # Errors
    /// * `Error::Config` - The bus lacks a read or write capability
    /// * `Error::Transport` - The register write failed
    pub fn write_register<R>(&mut self, register: R) -> Result<(), Error>
    where
        R: WritableRegister<IdType = u8, Error = Infallible, Array = [u8; 2]>,
    {
        self.ensure_bound()?;

        let raw_value = match register.to_bytes() {
            Ok(bytes) => u16::from_be_bytes(bytes),
            Err(never) => match never {},
        };

        #[cfg(feature = "defmt")]
        defmt::trace!("write {=u8:#x} <- {=u16:#x}", R::id(), raw_value);

        self.bus
            .write_register(DEVICE_ADDRESS, R::id(), raw_value)
            .map_err(|_| Error::Transport)
    }

    fn ensure_bound(&self) -> Result<(), Error> {
        if self.bus.is_bound() {
            Ok(())
        } else {
            Err(Error::Config)
        }
    }
}
