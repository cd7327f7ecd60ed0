//! E2E Test Suite 02: Error Handling & Edge Cases
//!
//! Verifies that the codec returns proper error values without panicking:
//! - compressor input validation (empty, 4096 accepted, 4097 rejected)
//! - undersized destination buffers on both sides
//! - truncated and corrupted token streams
//! - streams that reference output not yet produced

use lzjody::{
    compress, compress_into, decompress, decompress_into, split_length_prefix, CompressError,
    CompressOptions, DecompressError, DecompressOptions, BLOCK_SIZE,
};

fn sample_block() -> Vec<u8> {
    let mut data = Vec::new();
    data.extend(b"error handling sample; error handling sample; ");
    data.extend([7u8; 40]);
    data.extend((0u8..60).collect::<Vec<_>>());
    data.extend((0u32..64).flat_map(|k| [k as u8, 0, (k * 167 + 13) as u8, (k * 59) as u8]));
    data.extend(b"error handling sample; ");
    data
}

fn stream_of(data: &[u8]) -> Vec<u8> {
    compress(data, CompressOptions::NO_LENGTH_PREFIX).unwrap()
}

// ═════════════════════════════════════════════════════════════════════════════
// Test 1: compressor input validation
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_compress_empty_input() {
    for options in [CompressOptions::empty(), CompressOptions::all()] {
        assert_eq!(compress(&[], options), Err(CompressError::EmptyInput));
    }
}

#[test]
fn test_compress_block_size_limit() {
    let ok = vec![0x33u8; BLOCK_SIZE];
    assert!(compress(&ok, CompressOptions::empty()).is_ok());

    let too_big = vec![0x33u8; BLOCK_SIZE + 1];
    let err = compress(&too_big, CompressOptions::empty()).unwrap_err();
    assert_eq!(err, CompressError::InputTooLarge { len: BLOCK_SIZE + 1 });
    assert!(err.to_string().contains("4097"));
}

#[test]
fn test_compress_dst_too_small() {
    let data = sample_block();
    let full = compress(&data, CompressOptions::empty()).unwrap();
    for cap in [0, 1, full.len() / 2, full.len() - 1] {
        let mut dst = vec![0u8; cap];
        let err = compress_into(&data, &mut dst, CompressOptions::empty()).unwrap_err();
        assert!(
            matches!(err, CompressError::OutputOverflow { capacity, .. } if capacity == cap),
            "capacity {cap}: {err:?}"
        );
    }
    let mut dst = vec![0u8; full.len()];
    assert_eq!(compress_into(&data, &mut dst, CompressOptions::empty()), Ok(full.len()));
}

// ═════════════════════════════════════════════════════════════════════════════
// Test 2: decompressor destination too small
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_decompress_dst_too_small() {
    let data = sample_block();
    let stream = stream_of(&data);
    let mut dst = vec![0u8; data.len() - 1];
    let err = decompress_into(&stream, &mut dst, DecompressOptions::empty()).unwrap_err();
    assert!(matches!(err, DecompressError::OutputOverflow { .. }), "{err:?}");

    let mut dst = vec![0u8; data.len()];
    assert_eq!(
        decompress_into(&stream, &mut dst, DecompressOptions::empty()),
        Ok(data.len())
    );
}

// ═════════════════════════════════════════════════════════════════════════════
// Test 3: truncated streams
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_every_truncation_is_handled() {
    let data = sample_block();
    let stream = stream_of(&data);
    for cut in 0..stream.len() {
        // A cut on a token boundary decodes to a prefix of the block.
        if let Ok(out) = decompress(&stream[..cut], DecompressOptions::empty()) {
            assert_eq!(&out[..], &data[..out.len()], "cut {cut}");
        }
    }
}

#[test]
fn test_truncated_length_prefix() {
    let framed = compress(&sample_block(), CompressOptions::empty()).unwrap();
    let cut = &framed[..framed.len() - 1];
    assert_eq!(
        split_length_prefix(cut),
        Err(DecompressError::Truncated { at: cut.len() })
    );
}

// ═════════════════════════════════════════════════════════════════════════════
// Test 4: corrupted streams never panic
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_single_byte_corruption() {
    let stream = stream_of(&sample_block());
    for pos in 0..stream.len() {
        for flip in [0x01u8, 0x10, 0x80, 0xFF] {
            let mut bad = stream.clone();
            bad[pos] ^= flip;
            if let Ok(out) = decompress(&bad, DecompressOptions::empty()) {
                assert!(out.len() <= BLOCK_SIZE);
            }
        }
    }
}

#[test]
fn test_arbitrary_control_bytes() {
    // Every control byte followed by a few payload bytes.
    for c in 0..=255u8 {
        let stream = [0xA4, 1, 2, 3, 4, c, 0x02, 0x01, 0x00, 0x00];
        let _ = decompress(&stream, DecompressOptions::empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Test 5: references to output not yet produced
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_forward_lz_reference() {
    // 4 literals then a long match starting at offset 0x100.
    let stream = [0xA4, 1, 2, 3, 4, 0x71, 0x00, 0x01, 0x00];
    assert_eq!(
        decompress(&stream, DecompressOptions::empty()),
        Err(DecompressError::MatchOffsetOutOfRange { offset: 0x100, opos: 4 })
    );
}

#[test]
fn test_empty_stream() {
    assert_eq!(
        decompress(&[], DecompressOptions::empty()),
        Err(DecompressError::EmptyInput)
    );
    assert_eq!(
        decompress(&[], DecompressOptions::STORED),
        Err(DecompressError::EmptyInput)
    );
}
