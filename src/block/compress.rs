//! Block compression driver and one-shot API.
//!
//! | Function            | Output                                            |
//! |---------------------|---------------------------------------------------|
//! | [`compress`]        | new `Vec<u8>`                                     |
//! | [`compress_into`]   | caller slice, returns bytes written               |
//! | [`compress_bound`]  | worst-case output size for a given input length   |
//!
//! The driver scans the block left to right. At each position it offers the
//! input to the run-length, sequence and dictionary matchers in that order;
//! the first one that matches emits a token and moves the cursor. Bytes no
//! matcher takes are collected into the open literal run, which is flushed
//! before the next match token and once more at the end of the block.
//!
//! Unless [`CompressOptions::NO_LENGTH_PREFIX`] is set the token stream is
//! preceded by its own length as a big-endian `u16`.

use thiserror::Error;

use crate::plane::TransformError;

use super::context::{CompressContext, LiteralRun, Scan};
use super::literals::flush_literals;
use super::matchers::{find_run, find_seq};
use super::search::find_lz;
use super::types::{CompressOptions, BLOCK_SIZE, LENGTH_PREFIX_SIZE, MIN_LZ_MATCH};

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by block compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompressError {
    /// Zero-length blocks cannot be compressed.
    #[error("cannot compress a zero-length block")]
    EmptyInput,
    /// The input exceeds [`BLOCK_SIZE`].
    #[error("block length {len} larger than maximum of {max}", max = BLOCK_SIZE)]
    InputTooLarge { len: usize },
    /// A control value above the encodable ceiling was requested. Matchers are
    /// bounded by the block size, so this indicates an internal error.
    #[error("control value {value:#x} exceeds the encodable maximum")]
    ControlValueTooLarge { value: usize },
    /// The output slice cannot hold the compressed stream.
    #[error("output position would overflow: {needed:#x} > {capacity:#x}")]
    OutputOverflow { needed: usize, capacity: usize },
    /// The byte-plane transform rejected its buffers.
    #[error("byte-plane transform failed: {0}")]
    Transform(#[from] TransformError),
}

// ─────────────────────────────────────────────────────────────────────────────
// Utility
// ─────────────────────────────────────────────────────────────────────────────

/// Worst-case compressed size (including the length prefix) for `input_size`
/// bytes: every byte emitted as a literal behind a two-byte control.
#[inline]
pub const fn compress_bound(input_size: usize) -> usize {
    input_size + LENGTH_PREFIX_SIZE + 2
}

// ─────────────────────────────────────────────────────────────────────────────
// Driver
// ─────────────────────────────────────────────────────────────────────────────

/// Offer every input position to the matchers, collecting misses as literals.
fn compress_scan(ctx: &mut CompressContext<'_>) -> Result<(), CompressError> {
    while ctx.ipos < ctx.input.len() {
        if find_run(ctx)? == Scan::Consumed {
            continue;
        }
        if find_seq(ctx)? == Scan::Consumed {
            continue;
        }
        if find_lz(ctx)? == Scan::Consumed {
            continue;
        }
        ctx.push_literal();
    }
    Ok(())
}

/// Compress one block into `dst`, returning the number of bytes written.
///
/// This is the single entry point for both the top-level pass and the nested
/// pass of the literal-run recursion; the options decide which one it is.
pub(crate) fn compress_block(
    src: &[u8],
    dst: &mut [u8],
    options: CompressOptions,
) -> Result<usize, CompressError> {
    if src.is_empty() {
        return Err(CompressError::EmptyInput);
    }
    if src.len() > BLOCK_SIZE {
        return Err(CompressError::InputTooLarge { len: src.len() });
    }

    let prefixed = !options.contains(CompressOptions::NO_LENGTH_PREFIX);
    let start = if prefixed { LENGTH_PREFIX_SIZE } else { 0 };
    if dst.len() < start {
        return Err(CompressError::OutputOverflow { needed: start, capacity: dst.len() });
    }

    log::debug!("compress: block length {:#x}, options {:?}", src.len(), options);
    let mut ctx = CompressContext::new(src, dst, start, options);

    if src.len() < MIN_LZ_MATCH {
        // Too short for any matcher.
        ctx.literals = LiteralRun { start: 0, count: src.len() };
        ctx.ipos = src.len();
    } else {
        compress_scan(&mut ctx)?;
    }
    flush_literals(&mut ctx)?;

    let (out, opos) = ctx.finish();
    if prefixed {
        let stream_len = (opos - LENGTH_PREFIX_SIZE) as u16;
        out[..LENGTH_PREFIX_SIZE].copy_from_slice(&stream_len.to_be_bytes());
    }
    log::debug!("compressed length: {:#x}", opos);
    Ok(opos)
}

// ─────────────────────────────────────────────────────────────────────────────
// Public: one-shot API
// ─────────────────────────────────────────────────────────────────────────────

/// Compress `src` into `dst`.
///
/// `dst` should hold at least [`compress_bound`]`(src.len())` bytes; a smaller
/// slice works as long as the result fits, and otherwise fails with
/// [`CompressError::OutputOverflow`].
pub fn compress_into(
    src: &[u8],
    dst: &mut [u8],
    options: CompressOptions,
) -> Result<usize, CompressError> {
    compress_block(src, dst, options)
}

/// Compress `src` into a freshly allocated buffer.
pub fn compress(src: &[u8], options: CompressOptions) -> Result<Vec<u8>, CompressError> {
    let mut dst = vec![0u8; compress_bound(src.len().min(BLOCK_SIZE))];
    let n = compress_block(src, &mut dst, options)?;
    dst.truncate(n);
    Ok(dst)
}
