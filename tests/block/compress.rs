// Integration tests for block compression: exact token streams for small
// inputs, the length prefix, and the compressor's error conditions.
//
// Coverage:
//   - run, sequence and dictionary examples encoded byte for byte
//   - blocks shorter than the smallest match become one literal
//   - the 2-byte big-endian length prefix and NO_LENGTH_PREFIX
//   - a full block of zeros as a single wide run
//   - compress_into / compress_bound agreement
//   - EmptyInput, InputTooLarge, OutputOverflow

use lzjody::block::{
    compress, compress_bound, compress_into, CompressError, CompressOptions, BLOCK_SIZE,
    MAX_COMPRESSED_SIZE,
};

use super::common::{assert_roundtrip, compress_raw};

// ─────────────────────────────────────────────────────────────────────────────
// Exact streams
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fifty_equal_bytes_are_one_wide_run() {
    let data = [0x41u8; 50];
    assert_eq!(compress_raw(&data), vec![0x40, 0x32, 0x41]);
}

#[test]
fn counting_bytes_are_one_seq8() {
    let data: Vec<u8> = (0u8..=9).collect();
    assert_eq!(compress_raw(&data), vec![0x81, 0x0A, 0x00]);
}

#[test]
fn repeated_trigram_is_literal_then_overlapping_match() {
    assert_eq!(
        compress_raw(b"abcabcabcabc"),
        vec![0xA3, b'a', b'b', b'c', 0xE0, 0x09]
    );
}

#[test]
fn length_prefix_counts_stream_bytes() {
    let out = compress(b"abcabcabcabc", CompressOptions::empty()).unwrap();
    assert_eq!(out, vec![0x00, 0x06, 0xA3, b'a', b'b', b'c', 0xE0, 0x09]);
}

#[test]
fn single_byte_is_a_literal() {
    assert_eq!(compress_raw(&[0x55]), vec![0xA1, 0x55]);
    assert_eq!(
        compress(&[0x55], CompressOptions::empty()).unwrap(),
        vec![0x00, 0x02, 0xA1, 0x55]
    );
}

#[test]
fn two_equal_bytes_are_literals() {
    // Below every matcher minimum even though the bytes repeat.
    assert_eq!(compress_raw(&[7, 7]), vec![0xA2, 7, 7]);
}

#[test]
fn full_zero_block_is_one_run_of_0x1000() {
    let data = [0u8; BLOCK_SIZE];
    assert_eq!(compress_raw(&data), vec![0x50, 0x00, 0x00]);
    assert_eq!(
        compress(&data, CompressOptions::empty()).unwrap(),
        vec![0x00, 0x03, 0x50, 0x00, 0x00]
    );
}

#[test]
fn short_run_is_compact() {
    // 3 equal bytes after 1 literal: compact run control 0xC3.
    assert_eq!(compress_raw(&[9, 4, 4, 4]), vec![0xA1, 9, 0xC3, 4]);
}

// ─────────────────────────────────────────────────────────────────────────────
// compress_into
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn compress_into_matches_compress() {
    let data = b"the cat sat on the mat; the cat sat on the hat".to_vec();
    let expected = compress(&data, CompressOptions::empty()).unwrap();
    let mut dst = vec![0u8; compress_bound(data.len())];
    let n = compress_into(&data, &mut dst, CompressOptions::empty()).unwrap();
    assert_eq!(&dst[..n], &expected[..]);
}

#[test]
fn compress_bound_is_enough_for_incompressible_data() {
    // Distinct bytes in a scrambled order: nothing matches.
    let data: Vec<u8> = (0u32..256).map(|i| (i * 37) as u8).collect();
    let out = assert_roundtrip(&data, CompressOptions::empty());
    assert!(out.len() <= compress_bound(data.len()));
    assert_eq!(MAX_COMPRESSED_SIZE, compress_bound(BLOCK_SIZE));
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_input_is_rejected() {
    assert_eq!(
        compress(&[], CompressOptions::empty()),
        Err(CompressError::EmptyInput)
    );
}

#[test]
fn oversized_input_is_rejected() {
    let data = vec![0u8; BLOCK_SIZE + 1];
    assert_eq!(
        compress(&data, CompressOptions::empty()),
        Err(CompressError::InputTooLarge { len: BLOCK_SIZE + 1 })
    );
}

#[test]
fn maximum_input_is_accepted() {
    let data = vec![0xA5u8; BLOCK_SIZE];
    assert_roundtrip(&data, CompressOptions::empty());
}

#[test]
fn destination_too_small_for_prefix() {
    let mut dst = [0u8; 1];
    assert_eq!(
        compress_into(b"abc", &mut dst, CompressOptions::empty()),
        Err(CompressError::OutputOverflow { needed: 2, capacity: 1 })
    );
}

#[test]
fn destination_too_small_for_literals() {
    let data: Vec<u8> = (0u32..100).map(|i| (i * 37) as u8).collect();
    let mut dst = [0u8; 50];
    let err = compress_into(&data, &mut dst, CompressOptions::NO_LENGTH_PREFIX).unwrap_err();
    assert!(
        matches!(err, CompressError::OutputOverflow { capacity: 50, .. }),
        "unexpected error {err:?}"
    );
}
