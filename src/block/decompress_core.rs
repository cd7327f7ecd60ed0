//! Block decompression core.
//!
//! A single-pass state machine: between tokens the decoder waits for a
//! control byte; each token read by [`TokenReader`] is then applied to the
//! output by its inverse operation and the decoder returns to waiting. The
//! loop ends when the declared input is consumed.
//!
//! # Security boundary
//!
//! Every length, offset and output position taken from the stream is checked
//! before use. Malformed input returns a [`DecompressError`]; it never panics
//! and never reads output bytes that have not been written yet.

use thiserror::Error;

use crate::config::PLANE_STRIDE;
use crate::plane::{self, TransformError};

use super::token::{Token, TokenReader};
use super::types::{next_element, write_element, BLOCK_SIZE};

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by block decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecompressError {
    /// Zero-length streams cannot be decompressed.
    #[error("cannot decompress a zero-length block")]
    EmptyInput,
    /// A stored block is larger than [`BLOCK_SIZE`].
    #[error("stored block length {len} larger than maximum of {max}", max = BLOCK_SIZE)]
    InputTooLarge { len: usize },
    /// The control byte does not name any token kind.
    #[error("invalid decompressor mode {byte:#04x} at {at:#x}")]
    UnknownToken { byte: u8, at: usize },
    /// A dictionary match refers to output that has not been produced yet.
    #[error("LZ offset {offset:#x} >= output position {opos:#x}")]
    MatchOffsetOutOfRange { offset: usize, opos: usize },
    /// A token would write past the end of the block or the caller's buffer.
    #[error("output overflow: {needed:#x} > {capacity:#x}")]
    OutputOverflow { needed: usize, capacity: usize },
    /// A control value is larger than any block.
    #[error("length {length:#x} greater than maximum {max:#x} at {at:#x}", max = BLOCK_SIZE)]
    LengthTooLarge { length: usize, at: usize },
    /// The stream ends inside a token.
    #[error("token stream truncated at {at:#x}")]
    Truncated { at: usize },
    /// A plane-transformed block contains another plane-transformed block.
    #[error("nested byte-plane block at {at:#x}")]
    NestedPlane { at: usize },
    /// The inverse byte-plane transform rejected its buffers.
    #[error("byte-plane transform failed: {0}")]
    Transform(#[from] TransformError),
}

// ─────────────────────────────────────────────────────────────────────────────
// Token application
// ─────────────────────────────────────────────────────────────────────────────

/// Fail unless `n` more bytes fit at `opos` in an output of `capacity`.
#[inline]
fn check_room(opos: usize, n: usize, capacity: usize) -> Result<(), DecompressError> {
    let needed = opos + n;
    if needed > capacity {
        log::debug!("output overflow: {:#x} > {:#x}", needed, capacity);
        return Err(DecompressError::OutputOverflow { needed, capacity });
    }
    Ok(())
}

/// Decode the token stream `src` into `dst`, returning the bytes produced.
///
/// `dst` must not be longer than [`BLOCK_SIZE`]. Plane tokens are only
/// accepted when `allow_plane` is set; the nested stream inside a plane token
/// is decoded with it cleared.
pub(crate) fn decompress_tokens(
    src: &[u8],
    dst: &mut [u8],
    allow_plane: bool,
) -> Result<usize, DecompressError> {
    debug_assert!(dst.len() <= BLOCK_SIZE);
    let capacity = dst.len();
    let mut opos = 0usize;

    for item in TokenReader::new(src) {
        let (at, token) = item?;
        log::trace!("{:04x}:{:04x}: {:?}", at, opos, token);

        match token {
            Token::Literal(bytes) => {
                check_room(opos, bytes.len(), capacity)?;
                for &b in bytes {
                    dst[opos] = b;
                    opos += 1;
                }
            }

            Token::Run { len, byte } => {
                check_room(opos, len, capacity)?;
                for _ in 0..len {
                    dst[opos] = byte;
                    opos += 1;
                }
            }

            Token::Seq { width, count, start } => {
                check_room(opos, count * width.bytes(), capacity)?;
                let mut value = start;
                for _ in 0..count {
                    write_element(dst, opos, width, value);
                    opos += width.bytes();
                    value = next_element(value, width);
                }
            }

            Token::Match { offset, len } => {
                if offset >= opos {
                    log::debug!("LZ offset {:#x} >= output position {:#x}", offset, opos);
                    return Err(DecompressError::MatchOffsetOutOfRange { offset, opos });
                }
                check_room(opos, len, capacity)?;
                // Byte by byte: when offset + len > opos the copy reads bytes
                // written earlier in this same loop.
                for i in 0..len {
                    dst[opos + i] = dst[offset + i];
                }
                opos += len;
            }

            Token::Plane(nested) => {
                if !allow_plane {
                    log::debug!("nested byte-plane block at {:#x}", at);
                    return Err(DecompressError::NestedPlane { at });
                }
                let mut planes = [0u8; BLOCK_SIZE];
                let n = decompress_tokens(nested, &mut planes, false)?;
                check_room(opos, n, capacity)?;
                plane::transform(&planes[..n], &mut dst[opos..opos + n], -PLANE_STRIDE)?;
                log::trace!("byte plane transform len {:#x} done", n);
                opos += n;
            }
        }
    }

    Ok(opos)
}
