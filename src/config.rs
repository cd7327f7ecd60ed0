// config.rs: compile-time tuning constants for the block compressor.
//
// These do not change the wire format: any value here produces streams that
// every decoder accepts. They only trade compression ratio against speed.
// Format constants (block size, control bits, minimum match lengths) live in
// `block::types` because changing them breaks compatibility.

// If a byte value occurs at least this many times in a block, the dictionary
// matcher stops using the Byte Index for it and scans all prior positions.
// Also bounds the per-value position list in the index.
pub const MAX_LZ_BYTE_SCANS: usize = 0x800;

// A dictionary match of exactly the minimum length is only worth taking when
// its offset fits the compact control form (4 bits). Matches at larger
// offsets cost as much as the literals they replace, so they are skipped in
// the hope of a longer candidate.
pub const LZ_COMPACT_OFFSET_LIMIT: usize = 0x0f;

// Literal runs shorter than this are always flushed verbatim; the plane
// transform cannot pay for its own control overhead below this size.
pub const MIN_PLANE_LENGTH: usize = 8;

// Number of interleaved planes used by the literal-run transform.
// 4 groups the bytes of 32-bit little-endian words together.
pub const PLANE_STRIDE: i32 = 4;
