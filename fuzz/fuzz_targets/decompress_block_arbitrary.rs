#![no_main]
use libfuzzer_sys::fuzz_target;
use lzjody::{decompress_into, DecompressOptions, BLOCK_SIZE};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes through the decoder. Err results are expected; what we
    // verify is no panics.

    // Zero-length output buffer.
    {
        let mut dst = vec![0u8; 0];
        let _ = decompress_into(data, &mut dst, DecompressOptions::empty());
    }

    // Full block.
    {
        let mut dst = vec![0u8; BLOCK_SIZE];
        let _ = decompress_into(data, &mut dst, DecompressOptions::empty());
    }

    // Output buffer as large as the input.
    if !data.is_empty() {
        let mut dst = vec![0u8; data.len()];
        let _ = decompress_into(data, &mut dst, DecompressOptions::empty());
    }

    // Larger than a block: output is still capped at BLOCK_SIZE.
    {
        let mut dst = vec![0u8; BLOCK_SIZE * 2];
        if let Ok(n) = decompress_into(data, &mut dst, DecompressOptions::empty()) {
            assert!(n <= BLOCK_SIZE);
        }
    }
});
