//! C-ABI shims: export the two library entry points with C linkage.
//!
//! Enabled with:
//!   cargo build --release --features c-abi
//!
//! The produced `target/release/liblzjody.a` can be linked directly by C
//! callers; both functions return a byte count or `-1`.

use std::os::raw::{c_int, c_uchar, c_uint};
use std::slice;

use crate::block::compress::{compress_bound, compress_into};
use crate::block::decompress_api::decompress_into;
use crate::block::types::{CompressOptions, DecompressOptions, BLOCK_SIZE};

// ─────────────────────────────────────────────────────────────────────────────
// lzjody_compress
//
// int lzjody_compress(const unsigned char *blk_in, unsigned char *blk_out,
//                     unsigned int options, unsigned int length);
//
// Returns the number of bytes written to blk_out (including the length prefix
// unless NO_LENGTH_PREFIX (0x40) is set), or -1 on failure.
// ─────────────────────────────────────────────────────────────────────────────

/// # Safety
/// `blk_in` must be valid for reads of `length` bytes and `blk_out` for
/// writes of `length + 4` bytes; the two regions must not overlap.
#[no_mangle]
pub unsafe extern "C" fn lzjody_compress(
    blk_in: *const c_uchar,
    blk_out: *mut c_uchar,
    options: c_uint,
    length: c_uint,
) -> c_int {
    if blk_in.is_null() || blk_out.is_null() || length == 0 || length as usize > BLOCK_SIZE {
        return -1;
    }
    let src = slice::from_raw_parts(blk_in, length as usize);
    let dst = slice::from_raw_parts_mut(blk_out, compress_bound(length as usize));
    let options = CompressOptions::from_bits_truncate(options as u8);
    match compress_into(src, dst, options) {
        Ok(n) => n as c_int,
        Err(_) => -1,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// lzjody_decompress
//
// int lzjody_decompress(const unsigned char *in, unsigned char *out,
//                       unsigned int size, unsigned int options);
//
// `size` is the token-stream length without the length prefix. Returns the
// number of bytes written to out, or -1 on failure.
// ─────────────────────────────────────────────────────────────────────────────

/// # Safety
/// `input` must be valid for reads of `size` bytes and `out` for writes of
/// `BLOCK_SIZE` (4096) bytes; the two regions must not overlap.
#[no_mangle]
pub unsafe extern "C" fn lzjody_decompress(
    input: *const c_uchar,
    out: *mut c_uchar,
    size: c_uint,
    options: c_uint,
) -> c_int {
    if input.is_null() || out.is_null() || size == 0 {
        return -1;
    }
    let src = slice::from_raw_parts(input, size as usize);
    let dst = slice::from_raw_parts_mut(out, BLOCK_SIZE);
    let options = DecompressOptions::from_bits_truncate(options as u8);
    match decompress_into(src, dst, options) {
        Ok(n) => n as c_int,
        Err(_) => -1,
    }
}
