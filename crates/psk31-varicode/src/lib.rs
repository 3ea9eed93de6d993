//! PSK31 Varicode Decoder/Encoder
//!
//! Turns a stream of already-sliced PSK31 bits into text and back.
//!
//! # Features
//! - Streaming decoder with bounded-output back-pressure
//! - In-band `'?'` for unknown or overlong codes
//! - Optional input inversion for sources with the opposite bit polarity
//! - Varicode encoder for loopback and test streams
//!
//! # Example
//!
//! ```
//! use psk31_varicode::{VaricodeDecoder, VaricodeDecoderConfig};
//!
//! let mut decoder = VaricodeDecoder::new(VaricodeDecoderConfig::new());
//! // "t" = 101, "e" = 11, each followed by the 00 delimiter
//! let bits = [1, 0, 1, 0, 0, 1, 1, 0, 0];
//! let mut text = [0u8; 8];
//!
//! let progress = decoder.decode_into(&bits, &mut text);
//! assert_eq!(&text[..progress.produced], b"te");
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod table;

pub use config::{VaricodeDecoderConfig, UNDECODABLE};
pub use decoder::{DecodeProgress, Decoded, DecoderStats, VaricodeDecoder};
pub use encoder::VaricodeEncoder;
pub use error::VaricodeError;
pub use table::{ReverseTable, VARICODE_TABLE};
