//! PSK31 varicode table.
//!
//! Varicode is a variable-length encoding where common characters
//! have shorter codes. No code contains two consecutive zero bits, so
//! a "00" pair unambiguously delimits characters.
//!
//! Codes are stored as the literal bit pattern, transmitted MSB-first,
//! with the "00" delimiter implied.

use crate::config::{LOOKUP_SIZE, SYMBOL_COUNT};

#[rustfmt::skip]
const CODES: [u16; SYMBOL_COUNT] = [
    // 0x00
    0b1010101011,  0b1011011011,  0b1011101101,  0b1101110111,      // NUL SOH STX ETX
    0b1011101011,  0b1101011111,  0b1011101111,  0b1011111101,      // EOT ENQ ACK BEL
    0b1011111111,  0b11101111,    0b11101,       0b1101101111,      // BS HT LF VT
    0b1011011101,  0b11111,       0b1101110101,  0b1110101011,      // FF CR SO SI
    // 0x10
    0b1011110111,  0b1011110101,  0b1110101101,  0b1110101111,      // DLE DC1 DC2 DC3
    0b1101011011,  0b1101101011,  0b1101101101,  0b1101010111,      // DC4 NAK SYN ETB
    0b1101111011,  0b1101111101,  0b1110110111,  0b1101010101,      // CAN EM SUB ESC
    0b1101011101,  0b1110111011,  0b1011111011,  0b1101111111,      // FS GS RS US
    // 0x20
    0b1,           0b111111111,   0b101011111,   0b111110101,       // SP ! " #
    0b111011011,   0b1011010101,  0b1010111011,  0b101111111,       // $ % & '
    0b11111011,    0b11110111,    0b101101111,   0b111011111,       // ( ) * +
    0b1110101,     0b110101,      0b1010111,     0b110101111,       // , - . /
    // 0x30
    0b10110111,    0b10111101,    0b11101101,    0b11111111,        // 0 1 2 3
    0b101110111,   0b101011011,   0b101101011,   0b110101101,       // 4 5 6 7
    0b110101011,   0b110110111,   0b11110101,    0b110111101,       // 8 9 : ;
    0b111101101,   0b1010101,     0b111010111,   0b1010101111,      // < = > ?
    // 0x40
    0b1010111101,  0b1111101,     0b11101011,    0b10101101,        // @ A B C
    0b10110101,    0b1110111,     0b11011011,    0b11111101,        // D E F G
    0b101010101,   0b1111111,     0b111111101,   0b101111101,       // H I J K
    0b11010111,    0b10111011,    0b11011101,    0b10101011,        // L M N O
    // 0x50
    0b11010101,    0b111011101,   0b10101111,    0b1101111,         // P Q R S
    0b1101101,     0b101010111,   0b110110101,   0b101011101,       // T U V W
    0b101110101,   0b101111011,   0b1010101101,  0b111110111,       // X Y Z [
    0b111101111,   0b111111011,   0b1010111111,  0b101101101,       // \ ] ^ _
    // 0x60
    0b1011011111,  0b1011,        0b1011111,     0b101111,          // ` a b c
    0b101101,      0b11,          0b111101,      0b1011011,         // d e f g
    0b101011,      0b1101,        0b111101011,   0b10111111,        // h i j k
    0b11011,       0b111011,      0b1111,        0b111,             // l m n o
    // 0x70
    0b111111,      0b110111111,   0b10101,       0b10111,           // p q r s
    0b101,         0b110111,      0b1111011,     0b1101011,         // t u v w
    0b11011111,    0b1011101,     0b111010101,   0b1010110111,      // x y z {
    0b110111011,   0b1010110101,  0b1011010111,  0b1110110101,      // | } ~ DEL
];

/// Varicode table (PSK31 standard), indexed by ASCII value.
pub static VARICODE_TABLE: [u16; SYMBOL_COUNT] = CODES;

/// Get the varicode for a symbol index.
#[must_use]
pub fn code_for(symbol: u8) -> Option<u16> {
    VARICODE_TABLE.get(usize::from(symbol)).copied()
}

/// Find the symbol index for a varicode pattern.
///
/// Linear search; the decoder uses [`ReverseTable`] instead.
#[must_use]
pub fn symbol_for(code: u16) -> Option<u8> {
    VARICODE_TABLE
        .iter()
        .position(|&c| c == code)
        .and_then(|i| u8::try_from(i).ok())
}

/// Number of significant bits in a code.
#[must_use]
pub const fn code_len(code: u16) -> u32 {
    u16::BITS - code.leading_zeros()
}

/// Check that a pattern is a well-formed varicode.
///
/// A code is non-zero, fits the lookup domain, ends with a 1 bit and
/// contains no "00" pair.
#[must_use]
pub const fn is_valid_code(code: u16) -> bool {
    if code == 0 || code as usize >= LOOKUP_SIZE || code & 1 == 0 {
        return false;
    }
    let mask = (1u16 << code_len(code)) - 1;
    let zeros = !code & mask;
    zeros & (zeros >> 1) == 0
}

/// Dense inverse of [`VARICODE_TABLE`], indexed by accumulated code.
#[derive(Clone)]
pub struct ReverseTable {
    map: [u8; LOOKUP_SIZE],
}

impl ReverseTable {
    /// Marker for accumulator values no code maps to.
    pub const NO_SYMBOL: u8 = u8::MAX;

    /// Build the reverse lookup from the standard table.
    #[must_use]
    pub const fn new() -> Self {
        Self::from_codes(&CODES)
    }

    /// Build the reverse lookup from a code table.
    ///
    /// Codes outside the lookup domain are skipped.
    #[must_use]
    pub const fn from_codes(codes: &[u16; SYMBOL_COUNT]) -> Self {
        let mut map = [Self::NO_SYMBOL; LOOKUP_SIZE];
        let mut i = 0;
        while i < SYMBOL_COUNT {
            let code = codes[i] as usize;
            if code < LOOKUP_SIZE {
                map[code] = i as u8;
            }
            i += 1;
        }
        Self { map }
    }

    /// Look up the symbol for an accumulated code.
    ///
    /// Returns `None` for values outside the domain, values no code maps
    /// to, and entries outside the symbol range.
    #[must_use]
    pub fn lookup(&self, accumulated: u32) -> Option<u8> {
        let index = usize::try_from(accumulated).ok()?;
        let symbol = *self.map.get(index)?;
        (usize::from(symbol) < SYMBOL_COUNT).then_some(symbol)
    }

    /// Number of populated entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map
            .iter()
            .filter(|&&s| usize::from(s) < SYMBOL_COUNT)
            .count()
    }

    /// Whether no entry is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ReverseTable {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ReverseTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ReverseTable({} codes)", self.len())
    }
}
