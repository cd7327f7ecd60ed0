//! Per-block byte-position index used to seed dictionary-match search.
//!
//! For each byte value the index lists, in ascending order, the positions at
//! which that value occurs in the block. Positions are stored in a single
//! arena laid out by byte value (counting-sort order), so one allocation of at
//! most [`BLOCK_SIZE`] entries serves all 256 lists.
//!
//! Only positions below `len - MIN_LZ_MATCH` are indexed: a match starting
//! later could never reach the minimum length. Each list is capped at
//! [`MAX_LZ_BYTE_SCANS`]; a value that reaches the cap is *saturated* and the
//! matcher scans all prior positions linearly for it instead.

use crate::config::MAX_LZ_BYTE_SCANS;

use super::types::{BLOCK_SIZE, MIN_LZ_MATCH};

/// Byte value → ordered candidate positions for one block.
#[derive(Clone, Debug)]
pub struct ByteIndex {
    /// `starts[v]..starts[v + 1]` is the slice of `positions` for value `v`.
    starts: [u16; 257],
    positions: Vec<u16>,
}

impl ByteIndex {
    /// An index with no entries; every lookup returns an empty list.
    pub fn empty() -> Self {
        Self { starts: [0; 257], positions: Vec::new() }
    }

    /// Index `block`. Blocks shorter than [`MIN_LZ_MATCH`] produce an empty
    /// index.
    pub fn build(block: &[u8]) -> Self {
        debug_assert!(block.len() <= BLOCK_SIZE);
        if block.len() < MIN_LZ_MATCH {
            return Self::empty();
        }
        let indexed = &block[..block.len() - MIN_LZ_MATCH];

        let mut counts = [0usize; 256];
        for &b in indexed {
            let n = &mut counts[b as usize];
            if *n < MAX_LZ_BYTE_SCANS {
                *n += 1;
            }
        }

        let mut starts = [0u16; 257];
        let mut total = 0usize;
        for (v, &n) in counts.iter().enumerate() {
            starts[v] = total as u16;
            total += n;
        }
        starts[256] = total as u16;

        let mut positions = vec![0u16; total];
        let mut fill = [0usize; 256];
        for (pos, &b) in indexed.iter().enumerate() {
            let v = b as usize;
            if fill[v] < counts[v] {
                positions[starts[v] as usize + fill[v]] = pos as u16;
                fill[v] += 1;
            }
        }

        Self { starts, positions }
    }

    /// Ascending positions at which `byte` occurs.
    #[inline]
    pub fn positions(&self, byte: u8) -> &[u16] {
        let v = byte as usize;
        &self.positions[self.starts[v] as usize..self.starts[v + 1] as usize]
    }

    /// Number of indexed occurrences of `byte`.
    #[inline]
    pub fn count(&self, byte: u8) -> usize {
        let v = byte as usize;
        (self.starts[v + 1] - self.starts[v]) as usize
    }

    /// True when `byte` hit the per-value cap and must be searched linearly.
    #[inline]
    pub fn is_saturated(&self, byte: u8) -> bool {
        self.count(byte) >= MAX_LZ_BYTE_SCANS
    }

    /// Total number of indexed positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
