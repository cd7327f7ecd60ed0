//! E2E Test Suite 01: Block One-Shot API
//!
//! Round-trips realistic 4 KiB blocks through the public API:
//! - compress / compress_into with every option combination
//! - decompress / decompress_into, with and without the length prefix
//! - a file-like input split into consecutive blocks
//! - compression ratios on data each matcher is built for

use lzjody::{
    compress, compress_bound, compress_into, decompress, decompress_into, split_length_prefix,
    CompressOptions, DecompressOptions, BLOCK_SIZE, MAX_COMPRESSED_SIZE,
};

fn option_sets() -> Vec<CompressOptions> {
    let flags = [
        CompressOptions::FAST_MATCH,
        CompressOptions::NO_LENGTH_PREFIX,
        CompressOptions::FORCE_DIRECT_FLUSH,
    ];
    (0..8)
        .map(|mask: usize| {
            flags
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .fold(CompressOptions::empty(), |acc, (_, &f)| acc | f)
        })
        .collect()
}

fn roundtrip(data: &[u8], options: CompressOptions) -> usize {
    let compressed = compress(data, options).expect("compression should succeed");
    assert!(compressed.len() <= compress_bound(data.len()));
    let stream = if options.contains(CompressOptions::NO_LENGTH_PREFIX) {
        &compressed[..]
    } else {
        split_length_prefix(&compressed).expect("prefix should be valid")
    };
    let restored = decompress(stream, DecompressOptions::empty()).expect("decompression should succeed");
    assert_eq!(restored, data, "round trip mismatch with {options:?}");
    compressed.len()
}

fn text_block() -> Vec<u8> {
    b"The quick brown fox jumps over the lazy dog. "
        .iter()
        .copied()
        .cycle()
        .take(BLOCK_SIZE)
        .collect()
}

/// A mix of every token kind the compressor produces.
fn mixed_block() -> Vec<u8> {
    let mut data = Vec::with_capacity(BLOCK_SIZE);
    data.extend(b"header: lzjody test block v1\n");
    data.extend([0u8; 200]);
    data.extend((0u16..300).flat_map(|v| v.to_le_bytes()));
    data.extend((5000u32..5100).flat_map(|v| v.to_le_bytes()));
    data.extend((0u32..150).flat_map(|k| [k as u8, 0xFF, (k * 13) as u8, 0x40]));
    data.extend(b"header: lzjody test block v1\n");
    let mut state = 0x1234_5678u32;
    while data.len() < BLOCK_SIZE {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        data.push((state >> 16) as u8);
    }
    data
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: every option combination round-trips realistic blocks
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_roundtrip_all_options() {
    for data in [text_block(), mixed_block()] {
        for options in option_sets() {
            roundtrip(&data, options);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: ratios on data each matcher targets
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_compressible_blocks_shrink() {
    assert!(roundtrip(&text_block(), CompressOptions::empty()) < BLOCK_SIZE / 10);
    assert!(roundtrip(&[0x20u8; BLOCK_SIZE], CompressOptions::empty()) <= 5);

    // One seq32 token: prefix, 3-byte control, 4-byte start value.
    let counters: Vec<u8> = (1u32..=1024).flat_map(|v| v.to_le_bytes()).collect();
    assert_eq!(roundtrip(&counters, CompressOptions::empty()), 9);
}

#[test]
fn test_fast_match_never_fails() {
    let data = mixed_block();
    let fast = roundtrip(&data, CompressOptions::FAST_MATCH);
    assert!(fast <= compress_bound(data.len()));
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: caller-provided buffers
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_into_buffers() {
    let data = mixed_block();
    let mut compressed = [0u8; MAX_COMPRESSED_SIZE];
    let n = compress_into(&data, &mut compressed, CompressOptions::empty()).unwrap();
    let stream = split_length_prefix(&compressed[..n]).unwrap();

    let mut out = [0u8; BLOCK_SIZE];
    let m = decompress_into(stream, &mut out, DecompressOptions::empty()).unwrap();
    assert_eq!(m, BLOCK_SIZE);
    assert_eq!(&out[..], &data[..]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: a file split into blocks, each compressed independently
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_multi_block_file() {
    let mut file = Vec::new();
    for i in 0..5 {
        file.extend(text_block());
        file.extend(mixed_block());
        file.extend(std::iter::repeat(i as u8).take(777));
    }

    let mut framed = Vec::new();
    for block in file.chunks(BLOCK_SIZE) {
        framed.extend(compress(block, CompressOptions::empty()).unwrap());
    }
    assert!(framed.len() < file.len());

    let mut restored = Vec::new();
    let mut rest = &framed[..];
    while !rest.is_empty() {
        let stream = split_length_prefix(rest).unwrap();
        restored.extend(decompress(stream, DecompressOptions::empty()).unwrap());
        rest = &rest[2 + stream.len()..];
    }
    assert_eq!(restored, file);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 5: block sizes at the edges
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_every_short_length() {
    let data = mixed_block();
    for len in 1..=64 {
        for options in option_sets() {
            roundtrip(&data[..len], options);
        }
    }
}

#[test]
fn test_tail_lengths_near_block_size() {
    let data = mixed_block();
    for len in [BLOCK_SIZE - 3, BLOCK_SIZE - 2, BLOCK_SIZE - 1, BLOCK_SIZE] {
        roundtrip(&data[..len], CompressOptions::empty());
        roundtrip(&text_block()[..len], CompressOptions::FAST_MATCH);
    }
}
