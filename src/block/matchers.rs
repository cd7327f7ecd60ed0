//! Run-length and arithmetic-sequence matchers.
//!
//! Both are tried at every input position before the dictionary matcher.
//! On success they flush the pending literal run, emit one token and move the
//! read cursor past the bytes it covers.

use super::compress::CompressError;
use super::context::{CompressContext, Scan};
use super::literals::flush_literals;
use super::types::{next_element, SeqWidth, MIN_RLE_LENGTH};

/// Try to encode a run of identical bytes at the cursor.
pub fn find_run(ctx: &mut CompressContext<'_>) -> Result<Scan, CompressError> {
    let input = ctx.input;
    let byte = input[ctx.ipos];
    let len = input[ctx.ipos..].iter().take_while(|&&b| b == byte).count();

    let min = MIN_RLE_LENGTH + ctx.big_literals() as usize;
    if len < min {
        return Ok(Scan::NoMatch);
    }

    log::trace!("rle: {:#x} x {:#04x} at i {:#x}, o {:#x}", len, byte, ctx.ipos, ctx.output_pos());
    flush_literals(ctx)?;
    ctx.emit_run(len, byte)?;
    ctx.ipos += len;
    Ok(Scan::Consumed)
}

/// Count consecutive +1 elements of `width` starting at the cursor.
fn sequence_len(ctx: &CompressContext<'_>, width: SeqWidth) -> Option<(usize, u32)> {
    let start = ctx.element_at(ctx.ipos, width)?;
    let mut expected = start;
    let mut count = 0;
    while let Some(value) = ctx.element_at(ctx.ipos + count * width.bytes(), width) {
        if value != expected {
            break;
        }
        count += 1;
        expected = next_element(expected, width);
    }
    Some((count, start))
}

/// Try to encode an incrementing sequence at the cursor, widest element first.
pub fn find_seq(ctx: &mut CompressContext<'_>) -> Result<Scan, CompressError> {
    let bump = ctx.big_literals() as usize;

    for width in [SeqWidth::W32, SeqWidth::W16, SeqWidth::W8] {
        let Some((count, start)) = sequence_len(ctx, width) else {
            continue;
        };
        if count < width.min_count() + bump {
            continue;
        }

        log::trace!("seq{}: start {:#x}, {:#x} items", width.bytes() * 8, start, count);
        flush_literals(ctx)?;
        ctx.emit_seq(width, count, start)?;
        ctx.ipos += count * width.bytes();
        return Ok(Scan::Consumed);
    }
    Ok(Scan::NoMatch)
}
