// Shared helpers for the block test modules.

use lzjody::block::{
    compress, decompress, split_length_prefix, CompressOptions, DecompressOptions, Token,
    TokenReader,
};

/// Every combination of the three compressor options.
pub fn all_option_sets() -> Vec<CompressOptions> {
    (0u8..8)
        .map(|i| {
            let mut opts = CompressOptions::empty();
            if i & 1 != 0 {
                opts |= CompressOptions::FAST_MATCH;
            }
            if i & 2 != 0 {
                opts |= CompressOptions::NO_LENGTH_PREFIX;
            }
            if i & 4 != 0 {
                opts |= CompressOptions::FORCE_DIRECT_FLUSH;
            }
            opts
        })
        .collect()
}

/// Compress without a length prefix.
pub fn compress_raw(data: &[u8]) -> Vec<u8> {
    compress(data, CompressOptions::NO_LENGTH_PREFIX).expect("compression should succeed")
}

/// Compress with `opts`, decompress, and assert the round trip is exact.
/// Returns the compressed bytes.
pub fn assert_roundtrip(data: &[u8], opts: CompressOptions) -> Vec<u8> {
    let compressed = compress(data, opts).expect("compression should succeed");
    let stream = if opts.contains(CompressOptions::NO_LENGTH_PREFIX) {
        &compressed[..]
    } else {
        split_length_prefix(&compressed).expect("length prefix should be valid")
    };
    let restored = decompress(stream, DecompressOptions::empty()).expect("decompression should succeed");
    assert_eq!(restored, data, "round trip mismatch with {:?}", opts);
    compressed
}

/// Parse a raw token stream into tokens.
pub fn tokens(stream: &[u8]) -> Vec<Token<'_>> {
    TokenReader::new(stream)
        .map(|r| r.expect("stream should parse").1)
        .collect()
}

/// 16 distinct bytes with no runs, sequences or repeats: `i * 37` for i in 1..=16.
pub fn distinct16() -> Vec<u8> {
    (1u32..=16).map(|i| (i * 37) as u8).collect()
}
