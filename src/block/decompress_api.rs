//! Public block decompression API.
//!
//!   - One-shot decompression: [`decompress`], [`decompress_into`]
//!   - Framing helper: [`split_length_prefix`]
//!
//! The caller supplies the exact token stream: `src.len()` is the declared
//! compressed size. Streams produced with a length prefix must have it
//! removed first, e.g. with [`split_length_prefix`].

use super::decompress_core::{decompress_tokens, DecompressError};
use super::types::{DecompressOptions, BLOCK_SIZE, LENGTH_PREFIX_SIZE};

/// Strip the 2-byte big-endian length prefix from `framed` and return exactly
/// the token stream it announces. Trailing bytes beyond that length are
/// ignored.
pub fn split_length_prefix(framed: &[u8]) -> Result<&[u8], DecompressError> {
    if framed.len() < LENGTH_PREFIX_SIZE {
        return Err(DecompressError::Truncated { at: framed.len() });
    }
    let len = u16::from_be_bytes([framed[0], framed[1]]) as usize;
    let end = LENGTH_PREFIX_SIZE + len;
    if end > framed.len() {
        return Err(DecompressError::Truncated { at: framed.len() });
    }
    Ok(&framed[LENGTH_PREFIX_SIZE..end])
}

/// Decompress the token stream `src` into `dst`.
///
/// Returns the number of bytes written. At most [`BLOCK_SIZE`] bytes are ever
/// produced; a shorter `dst` fails with [`DecompressError::OutputOverflow`]
/// if the block does not fit.
pub fn decompress_into(
    src: &[u8],
    dst: &mut [u8],
    options: DecompressOptions,
) -> Result<usize, DecompressError> {
    if src.is_empty() {
        return Err(DecompressError::EmptyInput);
    }
    let capacity = dst.len().min(BLOCK_SIZE);

    if options.contains(DecompressOptions::STORED) {
        if src.len() > BLOCK_SIZE {
            return Err(DecompressError::InputTooLarge { len: src.len() });
        }
        if src.len() > capacity {
            return Err(DecompressError::OutputOverflow { needed: src.len(), capacity });
        }
        dst[..src.len()].copy_from_slice(src);
        return Ok(src.len());
    }

    log::debug!("decompress: stream length {:#x}", src.len());
    let n = decompress_tokens(src, &mut dst[..capacity], true)?;
    log::debug!("decompressed length: {:#x}", n);
    Ok(n)
}

/// Decompress the token stream `src` into a freshly allocated buffer.
pub fn decompress(src: &[u8], options: DecompressOptions) -> Result<Vec<u8>, DecompressError> {
    let mut dst = vec![0u8; BLOCK_SIZE];
    let n = decompress_into(src, &mut dst, options)?;
    dst.truncate(n);
    Ok(dst)
}
