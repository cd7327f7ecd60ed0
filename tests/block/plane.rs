// Integration tests for the byte-plane literal recursion.
//
// Coverage:
//   - record-structured literals compress through a plane token
//   - a transform that does not pay off leaves the stream unchanged
//   - plane tokens never appear in FORCE_DIRECT_FLUSH output
//   - plane output is never larger than direct output

use lzjody::block::{compress, CompressOptions, Token};
use lzjody::plane;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::common::{all_option_sets, assert_roundtrip, tokens};

/// 64 four-byte records: a counter, a zero pad, and two scrambled bytes.
fn records() -> Vec<u8> {
    (0u32..64)
        .flat_map(|k| [k as u8, 0x00, (k * 167 + 13) as u8, ((k * 59) ^ 0x5A) as u8])
        .collect()
}

fn direct(data: &[u8]) -> Vec<u8> {
    compress(data, CompressOptions::NO_LENGTH_PREFIX | CompressOptions::FORCE_DIRECT_FLUSH)
        .unwrap()
}

#[test]
fn records_compress_through_plane_token() {
    let data = records();
    let out = assert_roundtrip(&data, CompressOptions::NO_LENGTH_PREFIX);
    assert!(
        tokens(&out).iter().any(|t| matches!(t, Token::Plane(_))),
        "expected a plane token"
    );
    assert!(out.len() < direct(&data).len());
}

#[test]
fn plane_token_payload_has_no_nested_plane() {
    let data = records();
    let out = compress(&data, CompressOptions::NO_LENGTH_PREFIX).unwrap();
    let nested = tokens(&out)
        .into_iter()
        .find_map(|t| match t {
            Token::Plane(nested) => Some(nested.to_vec()),
            _ => None,
        })
        .expect("expected a plane token");
    assert!(tokens(&nested).iter().all(|t| !matches!(t, Token::Plane(_))));
}

#[test]
fn forced_direct_flush_has_no_plane_tokens() {
    let out = direct(&records());
    assert!(tokens(&out).iter().all(|t| !matches!(t, Token::Plane(_))));
}

#[test]
fn rejected_transform_leaves_output_unchanged() {
    let mut rng = StdRng::seed_from_u64(0x6c7a_6a6f);
    for len in [8usize, 31, 200, 1000, 4096] {
        let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let out = compress(&data, CompressOptions::NO_LENGTH_PREFIX).unwrap();
        assert_eq!(out, direct(&data), "len {len}");
        assert!(out.len() <= len + 2, "len {len}: {} bytes", out.len());
    }
}

#[test]
fn plane_output_never_larger_than_direct() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..32 {
        let len = rng.gen_range(1..=4096);
        // Small alphabet with a stride-4 pattern mixed in.
        let data: Vec<u8> = (0..len)
            .map(|i| if i % 4 == 1 { 0 } else { rng.gen_range(0..16) })
            .collect();
        let out = compress(&data, CompressOptions::NO_LENGTH_PREFIX).unwrap();
        assert!(out.len() <= direct(&data).len());
        for opts in all_option_sets() {
            assert_roundtrip(&data, opts);
        }
    }
}

#[test]
fn transform_inverse_restores_records() {
    let data = records();
    let mut planar = vec![0u8; data.len()];
    let mut restored = vec![0u8; data.len()];
    plane::transform(&data, &mut planar, 4).unwrap();
    assert_eq!(&planar[..64], &(0u8..64).collect::<Vec<_>>()[..]);
    assert!(planar[64..128].iter().all(|&b| b == 0));
    plane::transform(&planar, &mut restored, -4).unwrap();
    assert_eq!(restored, data);
}
