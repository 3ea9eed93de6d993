//! Varicode encoder - converts symbols to a bit stream.
//!
//! The inverse of [`VaricodeDecoder`](crate::VaricodeDecoder): each queued
//! symbol is sent MSB-first followed by the "00" delimiter.

use crate::config::{DELIMITER_BITS, ENCODER_QUEUE_SIZE};
use crate::error::VaricodeError;
use crate::table::{code_for, code_len};

/// Varicode encoder.
#[derive(Clone, Debug, Default)]
pub struct VaricodeEncoder {
    /// Current code being transmitted
    current_code: u16,
    /// Bits remaining to output (code + delimiter)
    bits_remaining: u32,
    /// Symbol queue
    queue: heapless::Deque<u8, ENCODER_QUEUE_SIZE>,
}

impl VaricodeEncoder {
    /// Create a new varicode encoder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_code: 0,
            bits_remaining: 0,
            queue: heapless::Deque::new(),
        }
    }

    /// Queue a symbol for encoding.
    pub fn queue_byte(&mut self, byte: u8) -> Result<(), VaricodeError> {
        if code_for(byte).is_none() {
            return Err(VaricodeError::UnsupportedSymbol(byte));
        }
        self.queue
            .push_back(byte)
            .map_err(|_| VaricodeError::QueueFull)
    }

    /// Queue a string for encoding.
    ///
    /// Stops at the first byte that cannot be queued.
    pub fn queue_str(&mut self, s: &str) -> Result<(), VaricodeError> {
        s.bytes().try_for_each(|byte| self.queue_byte(byte))
    }

    /// Get next bit to transmit.
    ///
    /// Returns `None` when queue is empty and current code is done.
    pub fn next_bit(&mut self) -> Option<bool> {
        if self.bits_remaining == 0 {
            let code = code_for(self.queue.pop_front()?)?;
            self.current_code = code;
            self.bits_remaining = code_len(code) + DELIMITER_BITS;
        }

        self.bits_remaining -= 1;
        if self.bits_remaining >= DELIMITER_BITS {
            let pos = self.bits_remaining - DELIMITER_BITS;
            Some((self.current_code >> pos) & 1 != 0)
        } else {
            Some(false)
        }
    }

    /// Write pending bits as 0/1 units.
    ///
    /// Returns the number of units written.
    pub fn encode_into(&mut self, output: &mut [u8]) -> usize {
        let mut written = 0;
        for slot in output.iter_mut() {
            match self.next_bit() {
                Some(bit) => *slot = u8::from(bit),
                None => break,
            }
            written += 1;
        }
        written
    }

    /// Check if encoder is idle (nothing to transmit).
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.bits_remaining == 0 && self.queue.is_empty()
    }

    /// Number of symbols waiting behind the current one.
    #[must_use]
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Clear the queue.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.current_code = 0;
        self.bits_remaining = 0;
    }
}
