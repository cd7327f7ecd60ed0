#![no_main]
use libfuzzer_sys::fuzz_target;
use lzjody::{compress, compress_bound, decompress, CompressOptions, DecompressOptions};

fuzz_target!(|input: &[u8]| {
    // First byte picks the options, the rest is the block.
    let Some((&flags, data)) = input.split_first() else {
        return;
    };
    if data.is_empty() || data.len() > lzjody::BLOCK_SIZE {
        return;
    }
    let options = CompressOptions::from_bits_truncate(flags) | CompressOptions::NO_LENGTH_PREFIX;

    let compressed = compress(data, options).expect("valid block must compress");
    assert!(compressed.len() <= compress_bound(data.len()));

    let recovered = decompress(&compressed, DecompressOptions::empty())
        .expect("compressed block must decompress");
    assert_eq!(
        recovered, data,
        "block round-trip mismatch: {} bytes compressed to {} (options {:?})",
        data.len(),
        compressed.len(),
        options
    );
});
