//! Configuration register
//!
//! The configuration word controls the operating mode, the conversion time and
//! the interrupt reporting behaviour. The driver treats it as an opaque bit
//! pattern: words are written exactly as given, including reserved or
//! conflicting bits.
//!
//! # Composing a word
//! Mode and conversion-time presets are combined with `|`:
//!
//! ```
//! use opt3001::Configuration;
//!
//! let word = Configuration::MODE_CONTINUOUS | Configuration::CONVERSION_TIME_800MS;
//! assert_eq!(word.bits(), 0x4800);
//! ```

use core::convert::Infallible;

use bitflags::bitflags;
use regiface::{register, FromByteArray, ReadableRegister, ToByteArray, WritableRegister};

bitflags! {
    /// Configuration word
    ///
    /// The named flags are the field masks of the register. Use
    /// [`Configuration::from_bits_retain`] (or `From<u16>`) to keep an
    /// arbitrary word intact.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Configuration: u16 {
        /// Range number field, bits 15:12
        const RANGE_NUMBER = 0xF000;
        /// Conversion time field, bit 11
        const CONVERSION_TIME = 0x0800;
        /// Mode of conversion operation field, bits 10:9
        const MODE = 0x0600;
        /// Overflow flag, bit 8 (read only)
        const OVERFLOW = 0x0100;
        /// Conversion ready flag, bit 7 (read only)
        const CONVERSION_READY = 0x0080;
        /// Flag high, bit 6 (read only)
        const FLAG_HIGH = 0x0040;
        /// Flag low, bit 5 (read only)
        const FLAG_LOW = 0x0020;
        /// Latch field, bit 4
        const LATCH = 0x0010;
        /// INT pin polarity, bit 3
        const POLARITY = 0x0008;
        /// Mask exponent field, bit 2
        const MASK_EXPONENT = 0x0004;
        /// Fault count field, bits 1:0
        const FAULT_COUNT = 0x0003;
    }
}

impl Configuration {
    /// Shutdown mode preset
    pub const MODE_SHUTDOWN: Self = Self::from_bits_retain(0x0000);
    /// Single-shot mode preset
    pub const MODE_SINGLE_SHOT: Self = Self::from_bits_retain(0x2000);
    /// Continuous conversion mode preset
    pub const MODE_CONTINUOUS: Self = Self::from_bits_retain(0x4000);
    /// 100ms integration time preset
    pub const CONVERSION_TIME_100MS: Self = Self::from_bits_retain(0x0000);
    /// 800ms integration time preset
    pub const CONVERSION_TIME_800MS: Self = Self::from_bits_retain(0x0800);

    /// Word written by [`Device::init`](crate::Device::init): continuous
    /// conversions with a 100ms integration time.
    pub const DEFAULT: Self = Self::MODE_CONTINUOUS.union(Self::CONVERSION_TIME_100MS);
}

impl Default for Configuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u16> for Configuration {
    fn from(word: u16) -> Self {
        Self::from_bits_retain(word)
    }
}

impl From<Configuration> for u16 {
    fn from(configuration: Configuration) -> Self {
        configuration.bits()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Configuration {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Configuration({=u16:#x})", self.bits())
    }
}

/// Configuration register (address: 0x01)
///
/// # Important Notes
/// - The read-only status flags are ignored by the device on write
/// - Reading the register clears the latched flags when latching is enabled
#[register(0x01u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigurationRegister {
    /// Raw configuration word
    pub value: Configuration,
}

impl FromByteArray for ConfigurationRegister {
    type Error = Infallible;
    type Array = [u8; 2];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self {
            value: Configuration::from_bits_retain(u16::from_be_bytes(bytes)),
        })
    }
}

impl ToByteArray for ConfigurationRegister {
    type Error = Infallible;
    type Array = [u8; 2];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok(self.value.bits().to_be_bytes())
    }
}
