// Property tests: every block the compressor accepts decompresses to itself
// under every option combination, and the stream stays within
// compress_bound.

use lzjody::block::{compress, compress_bound, CompressOptions};
use proptest::prelude::*;

use super::common::{all_option_sets, assert_roundtrip};

fn options() -> impl Strategy<Value = CompressOptions> {
    (0u8..8).prop_map(|i| all_option_sets()[i as usize])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn arbitrary_bytes(data in prop::collection::vec(any::<u8>(), 1..=4096), opts in options()) {
        let out = assert_roundtrip(&data, opts);
        prop_assert!(out.len() <= compress_bound(data.len()));
    }

    #[test]
    fn small_alphabet(data in prop::collection::vec(0u8..4, 1..=4096), opts in options()) {
        assert_roundtrip(&data, opts);
    }

    #[test]
    fn runs_and_counters(
        pieces in prop::collection::vec((any::<u8>(), 1usize..64, any::<bool>()), 1..64),
        opts in options(),
    ) {
        let mut data = Vec::new();
        for (byte, len, counting) in pieces {
            if counting {
                data.extend((0..len).map(|i| byte.wrapping_add(i as u8)));
            } else {
                data.extend(std::iter::repeat(byte).take(len));
            }
        }
        data.truncate(4096);
        assert_roundtrip(&data, opts);
    }

    #[test]
    fn plane_output_not_larger_than_direct(data in prop::collection::vec(0u8..8, 1..=2048)) {
        let with_plane = compress(&data, CompressOptions::NO_LENGTH_PREFIX).unwrap();
        let direct = compress(
            &data,
            CompressOptions::NO_LENGTH_PREFIX | CompressOptions::FORCE_DIRECT_FLUSH,
        )
        .unwrap();
        prop_assert!(with_plane.len() <= direct.len());
    }
}
