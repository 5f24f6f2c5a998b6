//! Driver error type

use core::fmt;

/// Errors reported by the OPT3001 driver.
///
/// The taxonomy is flat on purpose: bus failures are surfaced without their
/// underlying cause, and precondition failures are always reported before any
/// bus traffic happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The transport capability is incomplete (missing read or write).
    Config,
    /// The transport reported a failed register read or write.
    Transport,
    /// A register payload could not be interpreted.
    ///
    /// Reserved. Lux decoding accepts every 16-bit pattern and never yields it.
    InvalidData,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config => f.write_str("transport capability is not fully bound"),
            Error::Transport => f.write_str("register transfer failed"),
            Error::InvalidData => f.write_str("invalid register data"),
        }
    }
}
