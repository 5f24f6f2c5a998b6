#![no_std]
//! OPT3001 Ambient Light Sensor Driver
//!
//! This crate provides a type-safe interface for the Texas Instruments OPT3001
//! digital ambient light sensor. The OPT3001 measures illuminance with a
//! photopic response close to the human eye and reports it over I2C.
//!
//! # Features
//! - Measurement range: 0.01 lux to 83k lux
//! - Automatic full-scale range selection
//! - Conversion times: 100ms or 800ms
//! - Shutdown, single-shot and continuous conversion modes
//! - 16-bit registers accessed MSB first at address 0x44
//!
//! # Architecture
//! The driver is organized into several modules:
//!
//! - [`device`]: Main device interface
//!   - Initialize, configure and read illuminance
//!   - One register transfer per operation, no cached state
//!
//! - [`bus`]: Register transport
//!   - [`RegisterBus`] trait injected into the device
//!   - [`I2cBus`] for `embedded-hal` I2C peripherals
//!   - [`Callbacks`] for plain read/write functions
//!
//! - [`registers`]: Register definitions
//!   - [`MeasurementResult`]: exponent/mantissa result and lux conversion
//!   - [`Configuration`]: configuration word and presets
//!
//! # Usage
//! The driver uses the `regiface` crate to provide a type-safe interface for
//! register access. The main entry point is the [`Device`] struct which wraps
//! a bus and provides methods for interacting with the sensor.
//!
//! # Important Notes
//! - Limit registers, interrupts and ID registers are not driven
//! - Transfers are never retried; a failed transfer is reported as
//!   [`Error::Transport`]
//! - Every result register value is decoded, no range validation is done
//!
//! # Example
//! ```no_run
//! use embedded_hal::i2c::I2c;
//! use opt3001::{Configuration, Device, Error, I2cBus};
//!
//! fn slow_continuous<I2C: I2c>(i2c: I2C) -> Result<f32, Error> {
//!     let mut device = Device::new(I2cBus::new(i2c))?;
//!
//!     device.configure(Configuration::MODE_CONTINUOUS | Configuration::CONVERSION_TIME_800MS)?;
//!
//!     device.read_lux()
//! }
//! ```

pub mod bus;
pub mod device;
mod error;
pub mod registers;

pub use bus::*;
pub use device::Device;
pub use error::Error;
pub use registers::*;

/// Fixed 7-bit I2C address of the sensor
pub const DEVICE_ADDRESS: u8 = 0x44;
