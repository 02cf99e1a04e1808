//! Integration tests for the full huffpack pipeline.
//!
//! These tests verify end-to-end behavior: bytes -> frequency table ->
//! code map -> packed payload -> archive, and back, with verification that
//! decoded output matches the original input.

use huffpack_core::archive::{decode_archive, encode_archive, parse_header, write_archive};
use huffpack_core::bitio::{BitReader, BitWriter, Code};
use huffpack_core::error::{CorruptArchiveError, Error, FormatError};
use huffpack_core::huffman::{build_code_map, count_frequencies, invert_code_map};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Round-trip a buffer through a complete archive and back.
fn round_trip(name: &str, data: &[u8]) -> Vec<u8> {
    let bytes = encode_archive(name, data).expect("encode failed");
    let decoded = decode_archive(&bytes).expect("decode failed");
    assert_eq!(decoded.file_name, name);
    decoded.data
}

#[test]
fn test_round_trip_text() {
    let input = b"hello world! this is a test of the full pipeline with some \
                  repetition: aaaaaaaaaa bbbbbbbbbb cccccccccc";
    assert_eq!(round_trip("hello.txt", input), input);
}

#[test]
fn test_round_trip_binary_with_newlines() {
    let input = b"line one\nline two\n\x00\x80\xC3\xFF\nline three";
    assert_eq!(round_trip("mixed.bin", input), input);
}

#[test]
fn test_round_trip_all_symbols() {
    let input: Vec<u8> = (0..=255).collect();
    assert_eq!(round_trip("alphabet.bin", &input), input);
}

/// Deterministic pseudo-random buffers across a range of sizes.
#[test]
fn test_round_trip_seeded_random() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for size in [1, 2, 3, 255, 256, 1000, 4096] {
        let data: Vec<u8> = (0..size).map(|_| rng.gen()).collect();
        assert_eq!(round_trip("random.bin", &data), data, "size {size}");
    }
}

/// Skewed distributions compress; the archive still round-trips.
#[test]
fn test_round_trip_compressible_data() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let alphabet = b"aaaaaaaaeeeeth ";
    let data: Vec<u8> = (0..10_000)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect();

    let bytes = encode_archive("skewed.txt", &data).unwrap();
    assert!(bytes.len() < data.len());
    assert_eq!(decode_archive(&bytes).unwrap().data, data);
}

/// A single distinct symbol encodes one bit per occurrence.
#[test]
fn test_single_symbol_bit_length() {
    let n = 13;
    let data = vec![b'z'; n];
    let bytes = encode_archive("z.txt", &data).unwrap();

    let info = parse_header(&bytes).unwrap();
    assert_eq!(info.recovery_map.len(), 1);

    let reader = BitReader::from_payload(&bytes[info.payload_offset..]).unwrap();
    assert_eq!(reader.bit_len(), n);

    let decoded = decode_archive(&bytes).unwrap();
    assert_eq!(decoded.data, data);
    assert_eq!(decoded.compressed_len, bytes.len() - info.payload_offset);
}

/// The concrete scenario: frequencies {A:3, B:2, C:1} yield monotone code
/// lengths, and the produced stream decodes back exactly.
#[test]
fn test_concrete_scenario_aaabbc() {
    let input = b"AAABBC";
    let map = build_code_map(&count_frequencies(input)).unwrap();
    assert_eq!(map.len(), 3);
    assert!(map[&b'A'].len() <= map[&b'B'].len());
    assert!(map[&b'B'].len() <= map[&b'C'].len());

    assert_eq!(round_trip("abc.txt", input), input);
}

/// No generated code is a prefix of another.
#[test]
fn test_prefix_code_invariant() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let data: Vec<u8> = (0..5000).map(|_| rng.gen_range(b'a'..=b'p')).collect();
    let map = build_code_map(&count_frequencies(&data)).unwrap();

    let codes: Vec<&Code> = map.values().collect();
    for (i, a) in codes.iter().enumerate() {
        for (j, b) in codes.iter().enumerate() {
            if i != j && a.len() <= b.len() {
                let is_prefix = (0..a.len()).all(|k| a.bit(k) == b.bit(k));
                assert!(!is_prefix, "{a} is a prefix of {b}");
            }
        }
    }
}

/// Writing an archive and reading it back yields an identical recovery map,
/// file name, and payload.
#[test]
fn test_archive_header_round_trip() {
    let data = b"structured header round trip data";
    let map = build_code_map(&count_frequencies(data)).unwrap();
    let payload = vec![0, 0xDE, 0xAD];
    let bytes = write_archive("original.txt", &map, &payload).unwrap();

    let info = parse_header(&bytes).unwrap();
    assert_eq!(info.file_name, "original.txt");
    assert_eq!(info.recovery_map, invert_code_map(&map));
    assert_eq!(&bytes[info.payload_offset..], payload.as_slice());
}

/// Empty input is rejected up front; no archive is produced.
#[test]
fn test_empty_input_policy() {
    assert!(matches!(
        encode_archive("empty.txt", b""),
        Err(Error::EmptyInput)
    ));
}

/// Truncating the payload of a valid archive surfaces corruption instead of
/// a silently wrong result.
#[test]
fn test_truncated_payload_is_corrupt() {
    // Two symbols, four occurrences: a 4-bit stream stored in one byte with
    // four padding bits. Dropping that byte leaves the padding unbacked.
    let bytes = encode_archive("short.txt", b"aaab").unwrap();
    assert_eq!(decode_archive(&bytes).unwrap().data, b"aaab");

    let truncated = &bytes[..bytes.len() - 1];
    assert!(matches!(
        decode_archive(truncated),
        Err(Error::Corrupt(CorruptArchiveError::PaddingExceedsPayload { .. }))
    ));
}

/// A payload that ends in the middle of a code is reported, not discarded.
#[test]
fn test_mid_code_truncation_is_corrupt() {
    let map = build_code_map(&count_frequencies(b"AAABBC")).unwrap();
    // One full code for B, then only the first bit of another B.
    let mut writer = BitWriter::new();
    writer.push_code(map[&b'B']);
    writer.push_bit(map[&b'B'].bit(0));
    let payload = writer.into_payload();

    let bytes = write_archive("cut.txt", &map, &payload).unwrap();
    assert!(matches!(
        decode_archive(&bytes),
        Err(Error::Corrupt(
            CorruptArchiveError::TrailingBits { .. }
                | CorruptArchiveError::UnmatchedCode { .. }
        ))
    ));
}

/// Flipping the magic marker fails before anything else is parsed.
#[test]
fn test_wrong_magic_is_format_error() {
    let mut bytes = encode_archive("m.txt", b"magic test").unwrap();
    bytes[0] = b'X';
    assert!(matches!(
        decode_archive(&bytes),
        Err(Error::Format(FormatError::InvalidMagic { .. }))
    ));
}

/// An archive is just bytes; archiving an archive still round-trips.
#[test]
fn test_double_encode_round_trip() {
    let input = b"nest me twice";
    let inner = encode_archive("inner.txt", input).unwrap();
    let outer = encode_archive("inner.huff", &inner).unwrap();

    let recovered_inner = decode_archive(&outer).unwrap().data;
    assert_eq!(recovered_inner, inner);
    assert_eq!(decode_archive(&recovered_inner).unwrap().data, input);
}
