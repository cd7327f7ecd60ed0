//! Control-byte codec.
//!
//! Every token starts with one to three control bytes carrying the token kind
//! and a 13-bit value (a length, an element count, or an LZ offset). Two
//! encoding families exist; see [`super::types`] for the bit layout.
//!
//! | Family   | Compact form (1 byte value)    | Wide form                            |
//! |----------|--------------------------------|--------------------------------------|
//! | standard | `kind │ P_SHORT │ value` (≤ 0x0f) | `kind │ value >> 8`, `value & 0xff` |
//! | extended | `sub │ P_SHORT`, `value` (≤ 0xff) | `sub`, `value >> 8`, `value & 0xff` |
//!
//! Standard kinds are literal, run-length and LZ match (short or long
//! length). Extended kinds are the three sequence widths and the plane
//! transform.

use super::compress::CompressError;
use super::decompress_core::DecompressError;
use super::types::{
    SeqWidth, BLOCK_SIZE, CONTROL_VALUE_MAX, LZ_OFFSET_MASK, P_EXT, P_LIT, P_LZ, P_LZL, P_MASK,
    P_PLANE, P_RLE, P_SEQ16, P_SEQ32, P_SEQ8, P_SHORT, P_SHORT_MAX, P_SHORT_XMAX, P_XMASK,
};

/// Token kind as identified by its control prefix.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ControlKind {
    Literal,
    Run,
    /// Dictionary match with a one-byte length.
    Match,
    /// Dictionary match with a two-byte length.
    LongMatch,
    Seq(SeqWidth),
    Plane,
}

impl ControlKind {
    /// Type bits written into the first control byte.
    const fn type_bits(self) -> u8 {
        match self {
            ControlKind::Literal => P_LIT,
            ControlKind::Run => P_RLE,
            ControlKind::Match => P_LZ,
            ControlKind::LongMatch => P_LZ | P_LZL,
            ControlKind::Seq(SeqWidth::W8) => P_EXT | P_SEQ8,
            ControlKind::Seq(SeqWidth::W16) => P_EXT | P_SEQ16,
            ControlKind::Seq(SeqWidth::W32) => P_EXT | P_SEQ32,
            ControlKind::Plane => P_EXT | P_PLANE,
        }
    }

    /// Whether this kind uses the extended encoding family.
    pub const fn is_extended(self) -> bool {
        matches!(self, ControlKind::Seq(_) | ControlKind::Plane)
    }
}

/// An encoded control prefix (1–3 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EncodedControl {
    bytes: [u8; 3],
    len: u8,
}

impl EncodedControl {
    fn one(b0: u8) -> Self {
        Self { bytes: [b0, 0, 0], len: 1 }
    }

    fn two(b0: u8, b1: u8) -> Self {
        Self { bytes: [b0, b1, 0], len: 2 }
    }

    fn three(b0: u8, b1: u8, b2: u8) -> Self {
        Self { bytes: [b0, b1, b2], len: 3 }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Number of control bytes [`encode_control`] produces for `kind` and `value`.
#[inline]
pub fn control_len(kind: ControlKind, value: usize) -> usize {
    match (kind.is_extended(), value) {
        (true, v) if v > P_SHORT_XMAX => 3,
        (true, _) => 2,
        (false, v) if v > P_SHORT_MAX => 2,
        (false, _) => 1,
    }
}

/// Encode the control prefix for a token of `kind` carrying `value`.
///
/// Values above [`CONTROL_VALUE_MAX`] cannot be produced by any matcher on a
/// valid block and are reported as an internal error.
pub fn encode_control(kind: ControlKind, value: usize) -> Result<EncodedControl, CompressError> {
    let ceiling = match kind {
        ControlKind::Match | ControlKind::LongMatch => LZ_OFFSET_MASK,
        _ => CONTROL_VALUE_MAX,
    };
    if value > ceiling {
        return Err(CompressError::ControlValueTooLarge { value });
    }
    let t = kind.type_bits();
    let hi = (value >> 8) as u8;
    let lo = value as u8;

    let encoded = if kind.is_extended() {
        if value > P_SHORT_XMAX {
            EncodedControl::three(t, hi, lo)
        } else {
            EncodedControl::two(t | P_SHORT, lo)
        }
    } else if value > P_SHORT_MAX {
        EncodedControl::two(t | hi, lo)
    } else {
        EncodedControl::one(t | P_SHORT | lo)
    };
    Ok(encoded)
}

/// A control prefix parsed from a token stream.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DecodedControl {
    pub kind: ControlKind,
    pub value: usize,
    /// Number of control bytes consumed.
    pub consumed: usize,
}

/// Decode the control prefix starting at `src[pos]`.
///
/// For LZ kinds `value` is the 12-bit offset. Lengths and counts larger than
/// a block are rejected as corruption.
pub fn decode_control(src: &[u8], pos: usize) -> Result<DecodedControl, DecompressError> {
    let byte_at = |i: usize| src.get(i).copied().ok_or(DecompressError::Truncated { at: i });

    let c = byte_at(pos)?;
    let short = c & P_SHORT != 0;

    if c & P_MASK == P_EXT {
        let kind = match c & P_XMASK {
            P_SEQ8 => ControlKind::Seq(SeqWidth::W8),
            P_SEQ16 => ControlKind::Seq(SeqWidth::W16),
            P_SEQ32 => ControlKind::Seq(SeqWidth::W32),
            P_PLANE => ControlKind::Plane,
            _ => return Err(DecompressError::UnknownToken { byte: c, at: pos }),
        };
        let (value, consumed) = if short {
            (byte_at(pos + 1)? as usize, 2)
        } else {
            let hi = byte_at(pos + 1)? as usize;
            let lo = byte_at(pos + 2)? as usize;
            ((hi << 8) | lo, 3)
        };
        if value > BLOCK_SIZE {
            return Err(DecompressError::LengthTooLarge { length: value, at: pos });
        }
        return Ok(DecodedControl { kind, value, consumed });
    }

    let kind = match c & P_MASK {
        P_LIT => ControlKind::Literal,
        P_RLE => ControlKind::Run,
        _ if c & P_LZL != 0 => ControlKind::LongMatch,
        _ => ControlKind::Match,
    };

    if short {
        return Ok(DecodedControl { kind, value: (c & 0x0f) as usize, consumed: 1 });
    }

    // Wide literal and run values reach 0x1000, which needs the fifth high
    // bit; for LZ kinds that bit is the long-length flag instead.
    let hi_mask = match kind {
        ControlKind::Literal | ControlKind::Run => 0x1f,
        _ => 0x0f,
    };
    let value = (((c & hi_mask) as usize) << 8) | byte_at(pos + 1)? as usize;
    if value > BLOCK_SIZE {
        return Err(DecompressError::LengthTooLarge { length: value, at: pos });
    }
    Ok(DecodedControl { kind, value, consumed: 2 })
}
