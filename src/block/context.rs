//! Compression context and token emitters.
//!
//! A [`CompressContext`] carries the mutable state of one compression pass:
//! the input block and read cursor, the caller's output slice and write
//! cursor, the open literal run, the options and the Byte Index. Every write
//! to the output goes through [`CompressContext::emit`], which refuses to run
//! past the output slice.

use super::compress::CompressError;
use super::control::{control_len, encode_control, ControlKind};
use super::index::ByteIndex;
use super::types::{read_element, CompressOptions, SeqWidth, LZ_SHORT_LENGTH_LIMIT, P_SHORT_MAX};

/// The pending run of unmatched input bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LiteralRun {
    pub start: usize,
    pub count: usize,
}

impl LiteralRun {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Result of offering the current input position to a matcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scan {
    /// A token was emitted and the read cursor advanced past it.
    Consumed,
    /// Nothing matched; the read cursor is unchanged.
    NoMatch,
}

/// Mutable state of one compression pass.
pub struct CompressContext<'a> {
    pub(crate) input: &'a [u8],
    out: &'a mut [u8],
    opos: usize,
    pub(crate) ipos: usize,
    pub(crate) literals: LiteralRun,
    pub(crate) options: CompressOptions,
    pub(crate) index: ByteIndex,
}

impl<'a> CompressContext<'a> {
    /// Create a context writing tokens into `out` starting at `opos`.
    pub fn new(input: &'a [u8], out: &'a mut [u8], opos: usize, options: CompressOptions) -> Self {
        Self {
            input,
            out,
            opos,
            ipos: 0,
            literals: LiteralRun::default(),
            options,
            index: ByteIndex::build(input),
        }
    }

    #[inline]
    pub fn output_pos(&self) -> usize {
        self.opos
    }

    #[inline]
    pub fn remaining_input(&self) -> usize {
        self.input.len() - self.ipos
    }

    /// True while the open literal run is too long for a compact control byte.
    /// Matchers raise their minimums by one in that case.
    #[inline]
    pub fn big_literals(&self) -> bool {
        self.literals.count > P_SHORT_MAX
    }

    /// Add the byte under the cursor to the open literal run.
    #[inline]
    pub fn push_literal(&mut self) {
        if self.literals.is_empty() {
            self.literals.start = self.ipos;
        }
        self.literals.count += 1;
        self.ipos += 1;
    }

    /// Hand back the output slice and the final write position.
    pub fn finish(self) -> (&'a mut [u8], usize) {
        (self.out, self.opos)
    }

    // ── Raw output ───────────────────────────────────────────────────────────

    /// Fail unless `n` more bytes fit in the output.
    #[inline]
    pub fn reserve(&self, n: usize) -> Result<(), CompressError> {
        let needed = self.opos + n;
        if needed > self.out.len() {
            log::debug!("output overflow: {:#x} > {:#x}", needed, self.out.len());
            return Err(CompressError::OutputOverflow { needed, capacity: self.out.len() });
        }
        Ok(())
    }

    #[inline]
    pub fn emit(&mut self, byte: u8) -> Result<(), CompressError> {
        self.reserve(1)?;
        self.out[self.opos] = byte;
        self.opos += 1;
        Ok(())
    }

    pub fn emit_slice(&mut self, bytes: &[u8]) -> Result<(), CompressError> {
        self.reserve(bytes.len())?;
        self.out[self.opos..self.opos + bytes.len()].copy_from_slice(bytes);
        self.opos += bytes.len();
        Ok(())
    }

    pub fn emit_control(&mut self, kind: ControlKind, value: usize) -> Result<(), CompressError> {
        let control = encode_control(kind, value)?;
        log::trace!(
            "control {:?} {:#x} (i {:#x}, o {:#x}): {:02x?}",
            kind,
            value,
            self.ipos,
            self.opos,
            control.as_bytes()
        );
        self.emit_slice(control.as_bytes())
    }

    // ── Tokens ───────────────────────────────────────────────────────────────

    /// Literal run: control followed by the bytes verbatim.
    pub fn emit_literals(&mut self, run: LiteralRun) -> Result<(), CompressError> {
        let input = self.input;
        self.reserve(control_len(ControlKind::Literal, run.count) + run.count)?;
        self.emit_control(ControlKind::Literal, run.count)?;
        self.emit_slice(&input[run.start..run.start + run.count])
    }

    /// Run-length: control followed by the repeated byte.
    pub fn emit_run(&mut self, len: usize, byte: u8) -> Result<(), CompressError> {
        self.emit_control(ControlKind::Run, len)?;
        self.emit(byte)
    }

    /// Sequence: control followed by the little-endian starting value.
    pub fn emit_seq(&mut self, width: SeqWidth, count: usize, start: u32) -> Result<(), CompressError> {
        self.emit_control(ControlKind::Seq(width), count)?;
        self.emit_slice(&start.to_le_bytes()[..width.bytes()])
    }

    /// Dictionary match: offset in the control, then one or two length bytes.
    pub fn emit_match(&mut self, offset: usize, len: usize) -> Result<(), CompressError> {
        if len < LZ_SHORT_LENGTH_LIMIT {
            self.emit_control(ControlKind::Match, offset)?;
        } else {
            self.emit_control(ControlKind::LongMatch, offset)?;
            self.emit((len >> 8) as u8)?;
        }
        self.emit(len as u8)
    }

    /// Plane-transformed block: control carrying the sub-stream length, then
    /// the sub-stream verbatim.
    pub fn emit_plane(&mut self, stream: &[u8]) -> Result<(), CompressError> {
        self.emit_control(ControlKind::Plane, stream.len())?;
        self.emit_slice(stream)
    }

    /// Read the element of `width` under the cursor, if one fits.
    #[inline]
    pub fn element_at(&self, pos: usize, width: SeqWidth) -> Option<u32> {
        (pos + width.bytes() <= self.input.len()).then(|| read_element(self.input, pos, width))
    }
}
