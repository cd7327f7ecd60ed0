//! Dictionary (LZ) match search.
//!
//! Finds the longest earlier run of bytes that reproduces the input at the
//! cursor. A match is encoded as (absolute offset, length) with the offset
//! strictly below the cursor, so the decoder always copies from bytes it has
//! already produced; the copy may overlap its own destination.
//!
//! Candidates come from the Byte Index for the byte under the cursor. When
//! that byte is saturated in the index every earlier position is tried
//! instead. Both strategies share [`Search::offer`], which applies the
//! acceptance rules and decides when to stop.

use crate::config::LZ_COMPACT_OFFSET_LIMIT;

use super::compress::CompressError;
use super::context::{CompressContext, Scan};
use super::literals::flush_literals;
use super::types::{CompressOptions, MAX_LZ_MATCH, MIN_LZ_MATCH};

/// Best match found so far at one cursor position.
struct Search<'s> {
    input: &'s [u8],
    ipos: usize,
    min_len: usize,
    /// Longest length any candidate can reach from this cursor.
    max_len: usize,
    fast: bool,
    best_offset: usize,
    best_len: usize,
}

impl<'s> Search<'s> {
    /// Length of the common run at `candidate` and the cursor, or 0 if the
    /// quick check at `min_len - 1` already fails.
    #[inline]
    fn extend(&self, candidate: usize) -> usize {
        let probe = self.min_len - 1;
        if self.input[candidate + probe] != self.input[self.ipos + probe] {
            return 0;
        }
        let mut len = 0;
        while len < self.max_len && self.input[candidate + len] == self.input[self.ipos + len] {
            len += 1;
        }
        len
    }

    /// Consider `candidate`; returns `true` when the search should stop.
    fn offer(&mut self, candidate: usize) -> bool {
        let len = self.extend(candidate);
        if len < self.min_len || len <= self.best_len {
            return false;
        }
        // A minimum-length match only pays off with a compact offset.
        if len == self.min_len && candidate > LZ_COMPACT_OFFSET_LIMIT {
            return false;
        }
        self.best_offset = candidate;
        self.best_len = len;
        self.fast || len == self.max_len
    }
}

/// Try to encode a dictionary match at the cursor.
pub fn find_lz(ctx: &mut CompressContext<'_>) -> Result<Scan, CompressError> {
    let min_len = MIN_LZ_MATCH + ctx.big_literals() as usize;
    let remain = ctx.remaining_input();
    if remain <= min_len {
        return Ok(Scan::NoMatch);
    }

    let byte = ctx.input[ctx.ipos];
    let mut search = Search {
        input: ctx.input,
        ipos: ctx.ipos,
        min_len,
        max_len: remain.min(MAX_LZ_MATCH),
        fast: ctx.options.contains(CompressOptions::FAST_MATCH),
        best_offset: 0,
        best_len: 0,
    };

    if ctx.index.is_saturated(byte) {
        for candidate in 0..ctx.ipos {
            if search.offer(candidate) {
                break;
            }
        }
    } else {
        for &candidate in ctx.index.positions(byte) {
            let candidate = candidate as usize;
            if candidate >= ctx.ipos {
                break;
            }
            if search.offer(candidate) {
                break;
            }
        }
    }

    if search.best_len == 0 {
        return Ok(Scan::NoMatch);
    }

    let (offset, len) = (search.best_offset, search.best_len);
    log::trace!("lz: {:#x}:{:#x} at i {:#x}", offset, len, ctx.ipos);
    flush_literals(ctx)?;
    ctx.emit_match(offset, len)?;
    ctx.ipos += len;
    Ok(Scan::Consumed)
}
