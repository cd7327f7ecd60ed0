//! Byte-plane transform.
//!
//! Regroups interleaved bytes into contiguous planes: with stride `n`, plane
//! `k` holds every byte whose position is `≡ k (mod n)`, in order, and the
//! planes are concatenated. Data made of fixed-width records (e.g. arrays of
//! little-endian integers) tends to turn into long runs and sequences once the
//! bytes at the same record offset sit next to each other.
//!
//! ```text
//! stride 4:   a0 b0 c0 d0 a1 b1 c1 d1 a2 b2   →   a0 a1 a2 b0 b1 b2 c0 c1 d0 d1
//! ```
//!
//! The transform is a bijection for every length, including lengths that are
//! not a multiple of the stride; the leading planes are then one byte longer
//! than the trailing ones.

use thiserror::Error;

/// Errors returned by [`transform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("byte-plane stride must be non-zero")]
    ZeroStride,
    #[error("byte-plane output too small: {needed} bytes needed, {capacity} available")]
    OutputTooSmall { needed: usize, capacity: usize },
}

/// Apply the byte-plane transform to `input`, writing `input.len()` bytes to
/// the front of `output`.
///
/// A positive `stride` splits the input into planes; a negative `stride` of
/// the same magnitude restores the original interleaving.
pub fn transform(input: &[u8], output: &mut [u8], stride: i32) -> Result<(), TransformError> {
    if stride == 0 {
        return Err(TransformError::ZeroStride);
    }
    let len = input.len();
    if output.len() < len {
        return Err(TransformError::OutputTooSmall { needed: len, capacity: output.len() });
    }
    let planes = stride.unsigned_abs() as usize;
    let forward = stride > 0;

    let mut planar = 0;
    for plane in 0..planes {
        let mut interleaved = plane;
        while interleaved < len {
            if forward {
                output[planar] = input[interleaved];
            } else {
                output[interleaved] = input[planar];
            }
            planar += 1;
            interleaved += planes;
        }
    }
    Ok(())
}
