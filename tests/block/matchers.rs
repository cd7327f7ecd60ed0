// Integration tests for the matchers as seen through the compressed stream.
//
// Coverage:
//   - sequences of each width, including wrap-around
//   - the raised minimums once more than 15 literals are pending
//   - long dictionary matches (length >= 256)
//   - saturated byte index falling back to a linear scan
//   - FAST_MATCH taking the first qualifying candidate
//   - minimum-length matches skipped at large offsets

use lzjody::block::{compress, CompressOptions, SeqWidth, Token};

use super::common::{assert_roundtrip, compress_raw, distinct16, tokens};

// ─────────────────────────────────────────────────────────────────────────────
// Sequences
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn seq16_little_endian() {
    let data = [0x00, 0x01, 0x01, 0x01, 0x02, 0x01];
    assert_eq!(compress_raw(&data), vec![0x82, 0x03, 0x00, 0x01]);
}

#[test]
fn seq32_little_endian() {
    let data = [0xE8, 0x03, 0x00, 0x00, 0xE9, 0x03, 0x00, 0x00];
    assert_eq!(compress_raw(&data), vec![0x83, 0x02, 0xE8, 0x03, 0x00, 0x00]);
}

#[test]
fn seq8_wraps_through_zero() {
    let data = [0xFD, 0xFE, 0xFF, 0x00, 0x01];
    assert_eq!(compress_raw(&data), vec![0x81, 0x05, 0xFD]);
}

#[test]
fn seq16_counter_table() {
    let data: Vec<u8> = (100u16..400).flat_map(|v| v.to_le_bytes()).collect();
    let out = assert_roundtrip(&data, CompressOptions::NO_LENGTH_PREFIX);
    assert_eq!(
        tokens(&out),
        vec![Token::Seq { width: SeqWidth::W16, count: 300, start: 100 }]
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Literal-count threshold
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn run_of_three_after_fifteen_literals() {
    let mut data = distinct16();
    data.truncate(15);
    data.extend([0x77; 3]);

    let mut expected = vec![0xAF];
    expected.extend(&data[..15]);
    expected.extend([0xC3, 0x77]);
    assert_eq!(compress_raw(&data), expected);
}

#[test]
fn run_of_three_after_sixteen_literals_stays_literal() {
    let mut data = distinct16();
    data.extend([0x77; 3]);

    let mut expected = vec![0x20, 0x13];
    expected.extend(&data);
    assert_eq!(compress_raw(&data), expected);
}

// ─────────────────────────────────────────────────────────────────────────────
// Dictionary matches
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn long_match_uses_two_length_bytes() {
    // A permutation of all 256 byte values, twice.
    let perm: Vec<u8> = (0u32..256).map(|i| (i * 37) as u8).collect();
    let data = [perm.clone(), perm.clone()].concat();

    let mut expected = vec![0x21, 0x00];
    expected.extend(&perm);
    expected.extend([0xF0, 0x01, 0x00]);
    assert_eq!(compress_raw(&data), expected);
    assert_roundtrip(&data, CompressOptions::empty());
}

#[test]
fn saturated_byte_falls_back_to_linear_scan() {
    // Zero makes up 60% of the block, more than the index keeps per value.
    let data: Vec<u8> = [0u8, 1, 0, 0, 2].iter().copied().cycle().take(4096).collect();
    assert_eq!(
        compress_raw(&data),
        vec![0xA5, 0, 1, 0, 0, 2, 0xF0, 0x0F, 0xFB]
    );
}

#[test]
fn exhaustive_search_prefers_longest_candidate() {
    let data = b"axzQaxzkmRaxzkm";
    assert_eq!(
        compress_raw(data),
        vec![
            0xA4, b'a', b'x', b'z', b'Q', 0xE0, 0x03, //
            0xA3, b'k', b'm', b'R', 0xE4, 0x05,
        ]
    );
}

#[test]
fn fast_match_takes_first_candidate() {
    let data = b"axzQaxzkmRaxzkm";
    let opts = CompressOptions::FAST_MATCH | CompressOptions::NO_LENGTH_PREFIX;
    let out = compress(data, opts).unwrap();
    assert_eq!(
        out,
        vec![
            0xA4, b'a', b'x', b'z', b'Q', 0xE0, 0x03, //
            0xA3, b'k', b'm', b'R', 0xE0, 0x03, //
            0xA2, b'k', b'm',
        ]
    );
    assert_roundtrip(data, opts);
}

#[test]
fn minimum_match_at_large_offset_is_skipped() {
    let mut data = distinct16();
    data.extend([0x10, 0x80, 0x33]);
    data.extend([0xEE; 5]);
    data.extend([0x10, 0x80, 0x33, 0x44, 0x99, 0x5C]);

    let mut expected = vec![0x20, 0x13];
    expected.extend(&data[..19]);
    expected.extend([0xC5, 0xEE]);
    expected.extend([0xA6, 0x10, 0x80, 0x33, 0x44, 0x99, 0x5C]);
    assert_eq!(compress_raw(&data), expected);
}

#[test]
fn longer_match_at_large_offset_is_kept() {
    let mut data = distinct16();
    data.extend([0x10, 0x80, 0x33, 0x44]);
    data.extend([0xEE; 5]);
    data.extend([0x10, 0x80, 0x33, 0x44, 0x99]);

    let out = assert_roundtrip(&data, CompressOptions::NO_LENGTH_PREFIX);
    assert!(tokens(&out).contains(&Token::Match { offset: 16, len: 4 }));
}
