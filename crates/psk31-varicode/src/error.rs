//! Varicode error types.
//!
//! Decoding never fails: bad codes come out in-band as
//! [`UNDECODABLE`](crate::config::UNDECODABLE). Only the encoder can
//! reject input.

use core::fmt;

/// Varicode encode error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VaricodeError {
    /// Byte has no varicode (outside 7-bit ASCII)
    UnsupportedSymbol(u8),
    /// Encoder queue is full
    QueueFull,
}

impl fmt::Display for VaricodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSymbol(byte) => write!(f, "no varicode for byte {byte:#04x}"),
            Self::QueueFull => write!(f, "encoder queue full"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VaricodeError {}

#[cfg(feature = "defmt")]
impl defmt::Format for VaricodeError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::UnsupportedSymbol(byte) => defmt::write!(f, "UnsupportedSymbol({=u8:#x})", byte),
            Self::QueueFull => defmt::write!(f, "QueueFull"),
        }
    }
}
