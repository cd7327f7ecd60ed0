//! Token reader.
//!
//! Splits a token stream into [`Token`]s: one control prefix plus the
//! kind-specific payload per item. The reader never reads past the bytes the
//! current token needs, and it only validates framing; whether a token can be
//! applied to the output (offsets, output size) is checked by the
//! decompressor.

use super::control::{decode_control, ControlKind};
use super::decompress_core::DecompressError;
use super::types::{read_element, SeqWidth, LZ_OFFSET_MASK};

/// One decoded token, borrowing its payload from the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Bytes to copy verbatim.
    Literal(&'a [u8]),
    /// `len` copies of `byte`.
    Run { len: usize, byte: u8 },
    /// `count` elements of `width` counting up from `start`.
    Seq { width: SeqWidth, count: usize, start: u32 },
    /// Copy `len` bytes from absolute output position `offset`.
    Match { offset: usize, len: usize },
    /// A nested token stream whose output must be plane-inverted.
    Plane(&'a [u8]),
}

impl Token<'_> {
    /// Number of bytes this token expands to. For a plane token this is not
    /// known until the nested stream is decoded, so `None` is returned.
    pub fn output_len(&self) -> Option<usize> {
        match *self {
            Token::Literal(bytes) => Some(bytes.len()),
            Token::Run { len, .. } | Token::Match { len, .. } => Some(len),
            Token::Seq { width, count, .. } => Some(count * width.bytes()),
            Token::Plane(_) => None,
        }
    }
}

/// Iterator over the tokens of a stream.
///
/// Yields `(position, token)` pairs where `position` is the offset of the
/// token's first control byte. After the first error the iterator is fused.
#[derive(Clone, Debug)]
pub struct TokenReader<'a> {
    src: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> TokenReader<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Self { src, pos: 0, failed: false }
    }

    /// Offset of the next unread byte.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecompressError> {
        let end = self.pos + n;
        if end > self.src.len() {
            return Err(DecompressError::Truncated { at: self.src.len() });
        }
        let bytes = &self.src[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn read_token(&mut self) -> Result<Token<'a>, DecompressError> {
        let control = decode_control(self.src, self.pos)?;
        self.pos += control.consumed;

        let token = match control.kind {
            ControlKind::Literal => Token::Literal(self.take(control.value)?),
            ControlKind::Run => Token::Run { len: control.value, byte: self.take(1)?[0] },
            ControlKind::Seq(width) => {
                let start = read_element(self.take(width.bytes())?, 0, width);
                Token::Seq { width, count: control.value, start }
            }
            ControlKind::Match => {
                let len = self.take(1)?[0] as usize;
                Token::Match { offset: control.value & LZ_OFFSET_MASK, len }
            }
            ControlKind::LongMatch => {
                let bytes = self.take(2)?;
                let len = ((bytes[0] as usize) << 8) | bytes[1] as usize;
                Token::Match { offset: control.value & LZ_OFFSET_MASK, len }
            }
            ControlKind::Plane => Token::Plane(self.take(control.value)?),
        };
        Ok(token)
    }
}

impl<'a> Iterator for TokenReader<'a> {
    type Item = Result<(usize, Token<'a>), DecompressError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.src.len() {
            return None;
        }
        let at = self.pos;
        match self.read_token() {
            Ok(token) => Some(Ok((at, token))),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
