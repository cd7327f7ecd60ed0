// lzjody: fixed-block multi-algorithm compressor

pub mod block;
pub mod config;
pub mod plane;

#[cfg(feature = "c-abi")]
pub mod abi;

// ── Version constants ────────────────────────────────────────────────────────
pub const LZJODY_VERSION: &str = "0.1";
pub const LZJODY_VERSION_DATE: &str = "2014-12-29";

/// Returns the library version string.
pub fn version_string() -> &'static str {
    LZJODY_VERSION
}

/// Returns the date of the library version.
pub fn version_date() -> &'static str {
    LZJODY_VERSION_DATE
}

// ── Top-level re-exports ─────────────────────────────────────────────────────
pub use block::{
    compress, compress_bound, compress_into, decompress, decompress_into, split_length_prefix,
    CompressError, CompressOptions, DecompressError, DecompressOptions, BLOCK_SIZE,
    MAX_COMPRESSED_SIZE,
};
