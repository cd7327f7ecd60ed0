//! Block format constants, control-byte bit layout, and option sets.
//!
//! Everything in this module is part of the wire format: changing any of the
//! values produces streams that older decoders reject or misread. Tunables
//! that only affect compression quality live in [`crate::config`].

use bitflags::bitflags;

// ─────────────────────────────────────────────────────────────────────────────
// Block sizing
// ─────────────────────────────────────────────────────────────────────────────

/// Largest block accepted by the compressor and produced by the decompressor.
pub const BLOCK_SIZE: usize = 4096;

/// Size of the optional big-endian length prefix written ahead of a token stream.
pub const LENGTH_PREFIX_SIZE: usize = 2;

/// Worst-case framed output for a full block: prefix + two control bytes +
/// every input byte as a literal.
pub const MAX_COMPRESSED_SIZE: usize = BLOCK_SIZE + LENGTH_PREFIX_SIZE + 2;

/// Largest value a control prefix may carry.
pub const CONTROL_VALUE_MAX: usize = 0x1000;

// ─────────────────────────────────────────────────────────────────────────────
// Control byte layout
//
//   bit 7      P_SHORT  compact form
//   bits 6..5  kind     LZ / RLE / literal / extended
//   bit 4      P_LZL    LZ match carries a 16-bit length
//   bits 3..0  compact value, high bits of a wide value, or extended sub-code
// ─────────────────────────────────────────────────────────────────────────────

/// Compact control byte form.
pub const P_SHORT: u8 = 0x80;
/// Dictionary (LZ) match.
pub const P_LZ: u8 = 0x60;
/// Run-length match.
pub const P_RLE: u8 = 0x40;
/// Literal run.
pub const P_LIT: u8 = 0x20;
/// LZ match flag: length needs two bytes.
pub const P_LZL: u8 = 0x10;
/// Extended commands (sub-code in the low nibble).
pub const P_EXT: u8 = 0x00;
/// Extended sub-code: byte-plane transformed block.
pub const P_PLANE: u8 = 0x04;
/// Extended sub-code: 32-bit sequence.
pub const P_SEQ32: u8 = 0x03;
/// Extended sub-code: 16-bit sequence.
pub const P_SEQ16: u8 = 0x02;
/// Extended sub-code: 8-bit sequence.
pub const P_SEQ8: u8 = 0x01;

/// Mask selecting the kind bits of a standard control byte.
pub const P_MASK: u8 = 0x60;
/// Mask selecting the sub-code of an extended control byte.
pub const P_XMASK: u8 = 0x0f;

/// Largest value that fits inline in a compact standard control byte.
pub const P_SHORT_MAX: usize = 0x0f;
/// Largest value that fits the single payload byte of a compact extended control.
pub const P_SHORT_XMAX: usize = 0xff;

// ─────────────────────────────────────────────────────────────────────────────
// Match limits
//
// Minimums are chosen so that an accepted match never costs more than the
// literals it replaces, including the extra control byte needed to restart
// the literal run afterwards. Each matcher raises its minimum by one while the
// pending literal run is already too long for the compact form.
// ─────────────────────────────────────────────────────────────────────────────

pub const MIN_LZ_MATCH: usize = 3;
pub const MAX_LZ_MATCH: usize = 4095;
pub const MIN_RLE_LENGTH: usize = 3;

// Sequence minimums count elements, not bytes.
pub const MIN_SEQ32_LENGTH: usize = 2;
pub const MIN_SEQ16_LENGTH: usize = 3;
pub const MIN_SEQ8_LENGTH: usize = 4;

/// Dictionary offsets are absolute positions limited to 12 bits.
pub const LZ_OFFSET_MASK: usize = 0x0fff;

/// LZ match lengths below this use a single length byte.
pub const LZ_SHORT_LENGTH_LIMIT: usize = 0x100;

// ─────────────────────────────────────────────────────────────────────────────
// Sequence widths
// ─────────────────────────────────────────────────────────────────────────────

/// Element width of an arithmetic-sequence token.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SeqWidth {
    W8,
    W16,
    W32,
}

impl SeqWidth {
    /// Bytes per element.
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            SeqWidth::W8 => 1,
            SeqWidth::W16 => 2,
            SeqWidth::W32 => 4,
        }
    }

    /// Minimum element count worth encoding at this width.
    #[inline]
    pub const fn min_count(self) -> usize {
        match self {
            SeqWidth::W8 => MIN_SEQ8_LENGTH,
            SeqWidth::W16 => MIN_SEQ16_LENGTH,
            SeqWidth::W32 => MIN_SEQ32_LENGTH,
        }
    }

    /// Largest value representable at this width.
    #[inline]
    pub const fn max_value(self) -> u32 {
        match self {
            SeqWidth::W8 => u8::MAX as u32,
            SeqWidth::W16 => u16::MAX as u32,
            SeqWidth::W32 => u32::MAX,
        }
    }
}

/// Read a little-endian element of `width` at `pos`.
///
/// Caller guarantees `pos + width.bytes() <= buf.len()`.
#[inline]
pub fn read_element(buf: &[u8], pos: usize, width: SeqWidth) -> u32 {
    match width {
        SeqWidth::W8 => buf[pos] as u32,
        SeqWidth::W16 => u16::from_le_bytes([buf[pos], buf[pos + 1]]) as u32,
        SeqWidth::W32 => {
            u32::from_le_bytes([buf[pos], buf[pos + 1], buf[pos + 2], buf[pos + 3]])
        }
    }
}

/// Write a little-endian element of `width` at `pos`.
///
/// Caller guarantees `pos + width.bytes() <= buf.len()`.
#[inline]
pub fn write_element(buf: &mut [u8], pos: usize, width: SeqWidth, value: u32) {
    let n = width.bytes();
    buf[pos..pos + n].copy_from_slice(&value.to_le_bytes()[..n]);
}

/// Next element of a +1 progression, wrapping within the element width.
#[inline]
pub fn next_element(value: u32, width: SeqWidth) -> u32 {
    value.wrapping_add(1) & width.max_value()
}

// ─────────────────────────────────────────────────────────────────────────────
// Options
// ─────────────────────────────────────────────────────────────────────────────

bitflags! {
    /// Compressor options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CompressOptions: u8 {
        /// Accept the first qualifying dictionary match instead of the longest.
        const FAST_MATCH = 0x01;
        /// Do not write the 2-byte compressed-length prefix.
        const NO_LENGTH_PREFIX = 0x40;
        /// Flush literal runs verbatim; never attempt the plane transform.
        /// Set on the inner pass of the literal recursion.
        const FORCE_DIRECT_FLUSH = 0x80;
    }
}

bitflags! {
    /// Decompressor options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DecompressOptions: u8 {
        /// The block was stored uncompressed; copy it through verbatim.
        const STORED = 0x80;
    }
}
