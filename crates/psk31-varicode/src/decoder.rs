//! Streaming varicode decoder.
//!
//! Consumes one binary unit at a time and emits a byte whenever a "00"
//! delimiter closes a non-empty code. State carries across calls, so
//! input may be split into chunks of any size.
//!
//! Bits are folded into the accumulator so that it ends up equal to the
//! literal code pattern:
//!
//! ```text
//! prev  bit   action
//!  0     1    acc = (acc << 2) + 1     // "01"
//!  1     1    acc = (acc << 1) + 1     // "1"
//!  1     0    remember the zero
//!  0     0    delimiter: emit if acc != 0, acc = 0
//! ```

use crate::config::{VaricodeDecoderConfig, LOOKUP_SIZE, UNDECODABLE};
use crate::table::ReverseTable;

/// Accumulator value that marks a code too long for the lookup domain.
const OVERFLOW: u32 = LOOKUP_SIZE as u32;

/// A completed code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// Code decoded to a symbol index
    Symbol(u8),
    /// Code has no entry in the table
    Unknown(u32),
    /// Code grew past the lookup domain before a delimiter
    Overflow,
}

impl Decoded {
    /// Output byte for this code.
    ///
    /// Anything other than a symbol becomes [`UNDECODABLE`].
    #[must_use]
    pub const fn byte(self) -> u8 {
        match self {
            Self::Symbol(symbol) => symbol,
            Self::Unknown(_) | Self::Overflow => UNDECODABLE,
        }
    }

    /// Whether the code decoded to a symbol.
    #[must_use]
    pub const fn is_symbol(self) -> bool {
        matches!(self, Self::Symbol(_))
    }
}

/// Units consumed and bytes produced by one decode call.
///
/// A caller with bounded output resumes with `input[consumed..]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeProgress {
    /// Input units taken from the front of the input
    pub consumed: usize,
    /// Bytes written to the front of the output
    pub produced: usize,
}

/// Running decoder counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecoderStats {
    /// Input units processed
    pub units: u64,
    /// Codes decoded to a symbol
    pub symbols: u32,
    /// Codes with no table entry
    pub unknown: u32,
    /// Codes that overflowed the lookup domain
    pub overflows: u32,
}

impl DecoderStats {
    /// Codes replaced by the undecodable byte.
    #[must_use]
    pub const fn undecodable(&self) -> u32 {
        self.unknown.saturating_add(self.overflows)
    }

    fn record(&mut self, decoded: Decoded) {
        let counter = match decoded {
            Decoded::Symbol(_) => &mut self.symbols,
            Decoded::Unknown(_) => &mut self.unknown,
            Decoded::Overflow => &mut self.overflows,
        };
        *counter = counter.saturating_add(1);
    }
}

/// Varicode decoder - accumulates bits until a delimiter completes a code.
#[derive(Clone, Debug)]
pub struct VaricodeDecoder {
    config: VaricodeDecoderConfig,
    table: ReverseTable,
    /// Previous (post-inversion) unit was zero
    last_was_zero: bool,
    /// Code bits since the last delimiter
    accumulated: u32,
    stats: DecoderStats,
}

impl VaricodeDecoder {
    /// Create a new varicode decoder.
    #[must_use]
    pub const fn new(config: VaricodeDecoderConfig) -> Self {
        Self {
            config,
            table: ReverseTable::new(),
            last_was_zero: true,
            accumulated: 0,
            stats: DecoderStats {
                units: 0,
                symbols: 0,
                unknown: 0,
                overflows: 0,
            },
        }
    }

    /// Push a single input unit.
    ///
    /// Any non-zero unit is a logical one. Inversion is applied
    /// afterwards, if configured.
    pub fn push_unit(&mut self, unit: u8) -> Option<Decoded> {
        self.push_bit(unit != 0)
    }

    /// Push a single bit.
    ///
    /// Returns the completed code when this bit closes a delimiter.
    pub fn push_bit(&mut self, bit: bool) -> Option<Decoded> {
        let bit = bit != self.config.invert_input;
        self.stats.units = self.stats.units.saturating_add(1);

        let was_zero = core::mem::replace(&mut self.last_was_zero, !bit);
        match (was_zero, bit) {
            (true, false) => self.end_code(),
            (true, true) => {
                self.extend(2);
                None
            }
            (false, true) => {
                self.extend(1);
                None
            }
            (false, false) => None,
        }
    }

    /// Decode into a bounded output buffer.
    ///
    /// Stops when the input is exhausted or the output is full, whichever
    /// comes first. A unit is only consumed while output space remains,
    /// so nothing is lost when the caller resumes.
    pub fn decode_into(&mut self, input: &[u8], output: &mut [u8]) -> DecodeProgress {
        let mut progress = DecodeProgress::default();

        while progress.produced < output.len() && progress.consumed < input.len() {
            let unit = input[progress.consumed];
            progress.consumed += 1;

            if let Some(decoded) = self.push_unit(unit) {
                output[progress.produced] = decoded.byte();
                progress.produced += 1;
            }
        }

        progress
    }

    /// Decode, appending to the spare capacity of `output`.
    pub fn decode<const N: usize>(
        &mut self,
        input: &[u8],
        output: &mut heapless::Vec<u8, N>,
    ) -> DecodeProgress {
        let start = output.len();
        let mut consumed = 0;

        for &unit in input {
            if output.is_full() {
                break;
            }
            consumed += 1;

            if let Some(decoded) = self.push_unit(unit) {
                let _ = output.push(decoded.byte());
            }
        }

        DecodeProgress {
            consumed,
            produced: output.len() - start,
        }
    }

    /// Lazily decode a stream of units.
    pub fn decode_iter<'a, I>(&'a mut self, units: I) -> impl Iterator<Item = u8> + 'a
    where
        I: IntoIterator<Item = u8>,
        I::IntoIter: 'a,
    {
        units
            .into_iter()
            .filter_map(move |unit| self.push_unit(unit).map(Decoded::byte))
    }

    /// Decoder configuration.
    #[must_use]
    pub const fn config(&self) -> VaricodeDecoderConfig {
        self.config
    }

    /// Current accumulator value.
    #[must_use]
    pub const fn accumulated(&self) -> u32 {
        self.accumulated
    }

    /// Whether the last processed unit was a zero.
    #[must_use]
    pub const fn last_was_zero(&self) -> bool {
        self.last_was_zero
    }

    /// Check if no code is in progress.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.accumulated == 0
    }

    /// Decoder counters.
    #[must_use]
    pub const fn stats(&self) -> DecoderStats {
        self.stats
    }

    /// Append a one to the accumulator after shifting by `shift`.
    fn extend(&mut self, shift: u32) {
        if self.accumulated >= OVERFLOW {
            return;
        }
        self.accumulated = ((self.accumulated << shift) + 1).min(OVERFLOW);
    }

    fn end_code(&mut self) -> Option<Decoded> {
        if self.accumulated == 0 {
            return None;
        }
        let code = core::mem::take(&mut self.accumulated);

        let decoded = if code >= OVERFLOW {
            Decoded::Overflow
        } else {
            match self.table.lookup(code) {
                Some(symbol) => Decoded::Symbol(symbol),
                None => Decoded::Unknown(code),
            }
        };

        #[cfg(feature = "defmt")]
        match decoded {
            Decoded::Unknown(code) => defmt::debug!("varicode: unknown code {=u32:#b}", code),
            Decoded::Overflow => defmt::debug!("varicode: code overflowed lookup domain"),
            Decoded::Symbol(_) => {}
        }

        self.stats.record(decoded);
        Some(decoded)
    }
}

impl Default for VaricodeDecoder {
    fn default() -> Self {
        Self::new(VaricodeDecoderConfig::default())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Decoded {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Symbol(symbol) => defmt::write!(f, "Symbol({=u8:#x})", symbol),
            Self::Unknown(code) => defmt::write!(f, "Unknown({=u32:#b})", code),
            Self::Overflow => defmt::write!(f, "Overflow"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DecodeProgress {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} in / {} out", self.consumed, self.produced);
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DecoderStats {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "units={} symbols={} unknown={} overflows={}",
            self.units,
            self.symbols,
            self.unknown,
            self.overflows
        );
    }
}
