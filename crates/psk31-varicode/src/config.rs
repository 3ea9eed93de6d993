//! Varicode constants and decoder configuration.
//!
//! The numeric limits of the code live here so the table, decoder and
//! encoder agree on them.

/// Number of symbols in the varicode alphabet (7-bit ASCII).
pub const SYMBOL_COUNT: usize = 128;

/// Size of the accumulator domain covered by the reverse lookup.
///
/// Every valid code is at most 10 bits long, so a 12-bit domain leaves
/// headroom for the longest codes plus a pending `01` pair.
pub const LOOKUP_SIZE: usize = 4096;

/// Byte emitted in place of a code that cannot be decoded.
pub const UNDECODABLE: u8 = b'?';

/// Longest code in the table, in bits (terminator not included).
pub const MAX_CODE_BITS: u32 = 10;

/// Number of zero bits that terminate a symbol.
pub const DELIMITER_BITS: u32 = 2;

/// Capacity of the encoder's symbol queue.
pub const ENCODER_QUEUE_SIZE: usize = 64;

/// Varicode decoder configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VaricodeDecoderConfig {
    /// Complement every input unit before decoding
    pub invert_input: bool,
}

impl VaricodeDecoderConfig {
    /// Configuration for a bit source with the normal polarity.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            invert_input: false,
        }
    }

    /// Set whether input units are complemented before decoding.
    #[must_use]
    pub const fn with_invert_input(mut self, invert_input: bool) -> Self {
        self.invert_input = invert_input;
        self
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for VaricodeDecoderConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "VaricodeDecoderConfig(invert={})", self.invert_input);
    }
}
