//! Result register
//!
//! The conversion result is stored in a floating-point-like format: a 4-bit
//! exponent selecting the full-scale range and a 12-bit linear mantissa.
//!
//! ```text
//! lux = 0.01 * 2^exponent * mantissa
//! ```
//!
//! The datasheet only defines exponents 0 through 11. Larger values are still
//! decoded with the same formula rather than rejected.

use core::convert::Infallible;

use regiface::{register, FromByteArray, ReadableRegister};

/// Lux per mantissa count at exponent 0
pub const LUX_PER_COUNT: f64 = 0.01;

const EXPONENT_SHIFT: u16 = 12;
const EXPONENT_MASK: u16 = 0x0F;
const MANTISSA_MASK: u16 = 0x0FFF;

/// Result register (address: 0x00)
///
/// Holds the most recent completed conversion. In continuous mode the device
/// refreshes it on its own; reading it does not trigger a conversion.
#[register(0x00u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeasurementResult {
    /// Range selector, bits 15:12
    pub exponent: u8,
    /// Linear count, bits 11:0
    pub mantissa: u16,
}

impl MeasurementResult {
    /// Splits a raw register value into exponent and mantissa.
    pub const fn from_raw(raw: u16) -> Self {
        Self {
            exponent: ((raw >> EXPONENT_SHIFT) & EXPONENT_MASK) as u8,
            mantissa: raw & MANTISSA_MASK,
        }
    }

    /// Reassembles the raw register value.
    pub const fn raw(&self) -> u16 {
        ((self.exponent as u16 & EXPONENT_MASK) << EXPONENT_SHIFT) | (self.mantissa & MANTISSA_MASK)
    }

    /// Illuminance in lux.
    ///
    /// Evaluated in double precision and narrowed once, so the result is the
    /// nearest `f32` to the exact product.
    pub fn lux(&self) -> f32 {
        let range = (1u32 << (self.exponent as u16 & EXPONENT_MASK)) as f64;
        (LUX_PER_COUNT * range * self.mantissa as f64) as f32
    }
}

impl From<u16> for MeasurementResult {
    fn from(raw: u16) -> Self {
        Self::from_raw(raw)
    }
}

impl FromByteArray for MeasurementResult {
    type Error = Infallible;
    type Array = [u8; 2];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self::from_raw(u16::from_be_bytes(bytes)))
    }
}

/// Decodes a raw result register value straight to lux.
pub fn lux_from_raw(raw: u16) -> f32 {
    MeasurementResult::from_raw(raw).lux()
}
