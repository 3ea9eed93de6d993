//! Varicode Decoder Tests
//!
//! Stream-level behaviour of the decoder: round trips over the whole
//! table, chunking, bounded output, overflow recovery and inversion.
//! Run with: cargo test -p psk31-varicode --test decoder_tests

use psk31_varicode::{
    DecodeProgress, VaricodeDecoder, VaricodeDecoderConfig, VaricodeEncoder, UNDECODABLE,
    VARICODE_TABLE,
};

/// Code bits MSB-first followed by the "00" delimiter.
fn code_units(code: u16) -> Vec<u8> {
    let len = u16::BITS - code.leading_zeros();
    let mut units: Vec<u8> = (0..len).rev().map(|i| ((code >> i) & 1) as u8).collect();
    units.extend_from_slice(&[0, 0]);
    units
}

fn encode_bytes(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .flat_map(|&b| code_units(VARICODE_TABLE[usize::from(b)]))
        .collect()
}

fn decode_all(decoder: &mut VaricodeDecoder, input: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; input.len()];
    let progress = decoder.decode_into(input, &mut out);
    assert_eq!(progress.consumed, input.len());
    out.truncate(progress.produced);
    out
}

/// Small LCG so chunk splits are varied but reproducible.
struct Lcg(u32);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (self.0 >> 16) as usize % bound
    }
}

// =============================================================================
// Round Trip Tests
// =============================================================================

#[test]
fn test_every_symbol_roundtrips() {
    for symbol in 0u8..128 {
        let mut decoder = VaricodeDecoder::default();
        let out = decode_all(&mut decoder, &code_units(VARICODE_TABLE[usize::from(symbol)]));
        assert_eq!(out, vec![symbol], "symbol {symbol}");
        assert!(decoder.is_idle());
        assert!(decoder.last_was_zero());
    }
}

#[test]
fn test_full_alphabet_stream() {
    let symbols: Vec<u8> = (0u8..128).collect();
    let mut decoder = VaricodeDecoder::default();

    let out = decode_all(&mut decoder, &encode_bytes(&symbols));

    assert_eq!(out, symbols);
    assert_eq!(decoder.stats().symbols, 128);
    assert_eq!(decoder.stats().undecodable(), 0);
}

#[test]
fn test_encoder_loopback() {
    let text = "CQ CQ de N0CALL\r\n";
    let mut encoder = VaricodeEncoder::new();
    encoder.queue_str(text).unwrap();

    let mut bits = vec![0u8; 256];
    let written = encoder.encode_into(&mut bits);
    bits.truncate(written);
    assert!(encoder.is_idle());

    let mut decoder = VaricodeDecoder::default();
    assert_eq!(decode_all(&mut decoder, &bits), text.as_bytes());
}

#[test]
fn test_encoder_matches_table_bits() {
    let mut encoder = VaricodeEncoder::new();
    encoder.queue_str("Hello").unwrap();

    let mut bits = vec![0u8; 128];
    let written = encoder.encode_into(&mut bits);

    assert_eq!(&bits[..written], encode_bytes(b"Hello").as_slice());
}

// =============================================================================
// Delimiter Tests
// =============================================================================

#[test]
fn test_four_zeros_from_start() {
    let mut decoder = VaricodeDecoder::default();
    assert!(decode_all(&mut decoder, &[0, 0, 0, 0]).is_empty());
}

#[test]
fn test_idle_gaps_between_symbols() {
    let mut input = vec![0; 7];
    input.extend(encode_bytes(b"a"));
    input.extend([0; 9]);
    input.extend(encode_bytes(b"b"));
    input.extend([0; 3]);

    let mut decoder = VaricodeDecoder::default();
    assert_eq!(decode_all(&mut decoder, &input), b"ab");
}

#[test]
fn test_nul_scenario() {
    let input = code_units(683);
    assert_eq!(input, [1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0]);

    let mut decoder = VaricodeDecoder::default();
    assert_eq!(decode_all(&mut decoder, &input), [0x00]);
    assert_eq!(decoder.accumulated(), 0);
    assert!(decoder.last_was_zero());
}

#[test]
fn test_unknown_code_then_resync() {
    // Eleven ones has no entry
    let mut input = vec![1; 11];
    input.extend([0, 0]);
    input.extend(encode_bytes(b"ok"));

    let mut decoder = VaricodeDecoder::default();
    let out = decode_all(&mut decoder, &input);

    assert_eq!(out, [UNDECODABLE, b'o', b'k']);
    assert_eq!(decoder.stats().unknown, 1);
}

// =============================================================================
// Overflow Tests
// =============================================================================

#[test]
fn test_overflow_emits_one_sentinel() {
    let mut input = vec![1; 5000];
    input.extend([0, 0]);

    let mut decoder = VaricodeDecoder::default();
    let out = decode_all(&mut decoder, &input);

    assert_eq!(out, [UNDECODABLE]);
    assert_eq!(decoder.stats().overflows, 1);
    assert!(decoder.is_idle());
}

#[test]
fn test_overflow_then_symbol() {
    let mut input = vec![1; 4100];
    input.extend([0, 0]);
    input.extend(encode_bytes(b"E"));

    let mut decoder = VaricodeDecoder::default();
    assert_eq!(decode_all(&mut decoder, &input), [UNDECODABLE, b'E']);
}

#[test]
fn test_overflow_with_alternating_bits() {
    // "10" pairs never form a delimiter but keep growing the accumulator
    let mut input: Vec<u8> = [1, 0].iter().copied().cycle().take(64).collect();
    input.push(0);
    input.extend(encode_bytes(b"z"));

    let mut decoder = VaricodeDecoder::default();
    assert_eq!(decode_all(&mut decoder, &input), [UNDECODABLE, b'z']);
}

// =============================================================================
// Streaming Tests
// =============================================================================

#[test]
fn test_chunk_boundaries_are_transparent() {
    let mut input = encode_bytes(b"The quick brown fox jumps over the lazy dog 0123456789");
    input.extend([1; 20]);
    input.extend([0, 0, 0]);
    input.extend(encode_bytes(b"{|}~"));

    let expected = decode_all(&mut VaricodeDecoder::default(), &input);
    let mut rng = Lcg(0x5eed);

    for _ in 0..50 {
        let mut decoder = VaricodeDecoder::default();
        let mut out = Vec::new();
        let mut rest = input.as_slice();

        while !rest.is_empty() {
            let len = 1 + rng.next(rest.len().min(17));
            let (chunk, tail) = rest.split_at(len);
            out.extend(decode_all(&mut decoder, chunk));
            rest = tail;
        }

        assert_eq!(out, expected);
    }
}

#[test]
fn test_bounded_output_resumes() {
    let text = b"resume after back-pressure";
    let input = encode_bytes(text);

    let mut decoder = VaricodeDecoder::default();
    let mut out = Vec::new();
    let mut offset = 0;
    let mut buf = [0u8; 1];

    while offset < input.len() {
        let progress = decoder.decode_into(&input[offset..], &mut buf);
        offset += progress.consumed;
        out.extend_from_slice(&buf[..progress.produced]);
        assert!(progress.produced <= 1);
    }

    assert_eq!(out, text);
}

#[test]
fn test_full_output_stops_before_next_unit() {
    let input = encode_bytes(b"ee");
    let mut decoder = VaricodeDecoder::default();
    let mut buf = [0u8; 1];

    let progress = decoder.decode_into(&input, &mut buf);

    assert_eq!(progress, DecodeProgress { consumed: 4, produced: 1 });
    assert_eq!(decoder.stats().units, 4);
}

#[test]
fn test_empty_input() {
    let mut decoder = VaricodeDecoder::default();
    let mut buf = [0u8; 4];
    assert_eq!(decoder.decode_into(&[], &mut buf), DecodeProgress::default());
}

#[test]
fn test_decode_iter_matches_decode_into() {
    let input = encode_bytes(b"iterator");
    let mut decoder = VaricodeDecoder::default();
    let out: Vec<u8> = decoder.decode_iter(input.iter().copied()).collect();
    assert_eq!(out, b"iterator");
}

// =============================================================================
// Inversion Tests
// =============================================================================

#[test]
fn test_inverted_stream_decodes_the_same() {
    let input = encode_bytes(b"Inverted 73!");
    let complement: Vec<u8> = input.iter().map(|&b| 1 - b).collect();

    let mut plain = VaricodeDecoder::new(VaricodeDecoderConfig::new());
    let config = VaricodeDecoderConfig::new().with_invert_input(true);
    let mut inverted = VaricodeDecoder::new(config);

    assert_eq!(
        decode_all(&mut inverted, &complement),
        decode_all(&mut plain, &input)
    );
    assert!(inverted.config().invert_input);
}

#[test]
fn test_inverted_idle_is_ones() {
    let config = VaricodeDecoderConfig::new().with_invert_input(true);
    let mut decoder = VaricodeDecoder::new(config);
    assert!(decode_all(&mut decoder, &[1, 1, 1, 1]).is_empty());
    assert!(decoder.is_idle());
}
