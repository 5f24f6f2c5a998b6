//! Register definitions for the OPT3001
//! Generated from the OPT3001 datasheet (SBOS681)
//!
//! Every register is 16 bits wide and transferred MSB first. Only the result
//! and configuration registers are modelled as types; the remaining addresses
//! are listed in [`Register`] for completeness.

mod configuration;
mod result;

pub use configuration::*;
pub use result::*;

/// Register pointer addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Conversion result
    Result = 0x00,
    /// Operating mode and status
    Configuration = 0x01,
    /// Low limit for the interrupt comparator
    LowLimit = 0x02,
    /// High limit for the interrupt comparator
    HighLimit = 0x03,
    /// Manufacturer ID, reads 0x5449 ("TI")
    ManufacturerId = 0x7E,
    /// Device ID, reads 0x3001
    DeviceId = 0x7F,
}

impl Register {
    /// Pointer value written on the bus to select this register
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

impl From<Register> for u8 {
    fn from(register: Register) -> Self {
        register.addr()
    }
}
