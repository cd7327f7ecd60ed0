//! Block compression and decompression.
//!
//! This module contains the whole codec: the matchers and literal recursion
//! on the compression side, the token reader and state machine on the
//! decompression side, and the control-byte codec they share.

pub mod compress;
pub mod context;
pub mod control;
pub mod decompress_api;
pub mod decompress_core;
pub mod index;
pub mod literals;
pub mod matchers;
pub mod search;
pub mod token;
pub mod types;

// Re-export the most important public API items at the module level.
pub use compress::{compress, compress_bound, compress_into, CompressError};
pub use decompress_api::{decompress, decompress_into, split_length_prefix};
pub use decompress_core::DecompressError;
pub use index::ByteIndex;
pub use token::{Token, TokenReader};
pub use types::{
    CompressOptions, DecompressOptions, SeqWidth, BLOCK_SIZE, LENGTH_PREFIX_SIZE,
    MAX_COMPRESSED_SIZE,
};
