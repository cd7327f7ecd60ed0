//! Literal-run flushing and the byte-plane recursion.
//!
//! A pending literal run is written either verbatim or, when it is long
//! enough, as a plane-transformed block: the run is split into
//! [`PLANE_STRIDE`] byte planes and compressed again by a nested pass. The
//! nested pass runs with [`CompressOptions::FORCE_DIRECT_FLUSH`], so its own
//! literal runs are always written verbatim and recursion stops after one
//! level. The transformed form is only kept when it is strictly smaller.

use crate::config::{MIN_PLANE_LENGTH, PLANE_STRIDE};
use crate::plane;

use super::compress::{compress_block, CompressError};
use super::context::{CompressContext, LiteralRun};
use super::types::{CompressOptions, BLOCK_SIZE, MAX_COMPRESSED_SIZE};

/// Control overhead the plane token must beat before it is worth keeping.
const PLANE_OVERHEAD: usize = 2;

/// Write the pending literal run verbatim.
pub fn flush_literals_direct(ctx: &mut CompressContext<'_>) -> Result<(), CompressError> {
    if ctx.literals.is_empty() {
        return Ok(());
    }
    let run = ctx.literals;
    log::trace!("flush literals: {:#x} (o {:#x})", run.count, ctx.output_pos());
    ctx.emit_literals(run)?;
    ctx.literals = LiteralRun::default();
    Ok(())
}

/// Write the pending literal run, trying the plane transform first when the
/// run is long enough and recursion is allowed in this pass.
pub fn flush_literals(ctx: &mut CompressContext<'_>) -> Result<(), CompressError> {
    let run = ctx.literals;
    if run.count < MIN_PLANE_LENGTH || ctx.options.contains(CompressOptions::FORCE_DIRECT_FLUSH) {
        return flush_literals_direct(ctx);
    }

    let mut planes = [0u8; BLOCK_SIZE];
    let mut nested = [0u8; MAX_COMPRESSED_SIZE];
    let input = ctx.input;
    plane::transform(&input[run.start..run.start + run.count], &mut planes, PLANE_STRIDE)?;

    let nested_options =
        ctx.options | CompressOptions::FORCE_DIRECT_FLUSH | CompressOptions::NO_LENGTH_PREFIX;
    let nested_len = compress_block(&planes[..run.count], &mut nested, nested_options)?;

    if nested_len + PLANE_OVERHEAD >= run.count {
        log::debug!("plane transform: no improvement ({:#x} >= {:#x})", nested_len, run.count);
        return flush_literals_direct(ctx);
    }

    log::debug!("plane transform: {:#x} -> {:#x}", run.count, nested_len);
    ctx.emit_plane(&nested[..nested_len])?;
    ctx.literals = LiteralRun::default();
    Ok(())
}
