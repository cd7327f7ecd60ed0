//! E2E Test Suite 03: C ABI
//!
//! Calls the `extern "C"` entry points the way a C caller would, through raw
//! pointers, and checks them against the Rust API.
//!
//! Run with:
//!   cargo test --features c-abi --test e2e_c_abi

use lzjody::abi::{lzjody_compress, lzjody_decompress};
use lzjody::{compress, CompressOptions, BLOCK_SIZE, MAX_COMPRESSED_SIZE};

fn sample() -> Vec<u8> {
    b"C callers pass raw buffers; C callers pass raw buffers. "
        .iter()
        .copied()
        .cycle()
        .take(1500)
        .collect()
}

#[test]
fn test_compress_matches_rust_api() {
    let data = sample();
    let mut out = [0u8; MAX_COMPRESSED_SIZE];
    let n = unsafe { lzjody_compress(data.as_ptr(), out.as_mut_ptr(), 0, data.len() as u32) };
    assert!(n > 0);
    let expected = compress(&data, CompressOptions::empty()).unwrap();
    assert_eq!(&out[..n as usize], &expected[..]);
}

#[test]
fn test_roundtrip_without_prefix() {
    let data = sample();
    let mut packed = [0u8; MAX_COMPRESSED_SIZE];
    let mut unpacked = [0u8; BLOCK_SIZE];
    let options = CompressOptions::NO_LENGTH_PREFIX.bits() as u32;
    unsafe {
        let n = lzjody_compress(data.as_ptr(), packed.as_mut_ptr(), options, data.len() as u32);
        assert!(n > 0);
        let m = lzjody_decompress(packed.as_ptr(), unpacked.as_mut_ptr(), n as u32, 0);
        assert_eq!(m as usize, data.len());
    }
    assert_eq!(&unpacked[..data.len()], &data[..]);
}

#[test]
fn test_errors_return_minus_one() {
    let data = [0u8; BLOCK_SIZE + 1];
    let mut out = [0u8; MAX_COMPRESSED_SIZE + 1];
    unsafe {
        assert_eq!(lzjody_compress(data.as_ptr(), out.as_mut_ptr(), 0, 0), -1);
        assert_eq!(
            lzjody_compress(data.as_ptr(), out.as_mut_ptr(), 0, data.len() as u32),
            -1
        );
        assert_eq!(lzjody_compress(std::ptr::null(), out.as_mut_ptr(), 0, 10), -1);

        let bad = [0x00u8, 0x00, 0x00];
        let mut dst = [0u8; BLOCK_SIZE];
        assert_eq!(lzjody_decompress(bad.as_ptr(), dst.as_mut_ptr(), 3, 0), -1);
        assert_eq!(lzjody_decompress(bad.as_ptr(), dst.as_mut_ptr(), 0, 0), -1);
    }
}
