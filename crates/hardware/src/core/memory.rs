//! Word-addressed memory image.
//!
//! A fixed-size array of unsigned words, zero-initialized, indexed directly by address.
//! Word width is not enforced here; the architecture profile only decides the size.

use tracing::trace;

use crate::common::error::EngineError;

/// Fixed-size word memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryImage {
    words: Vec<u64>,
}

impl MemoryImage {
    /// Creates a zeroed memory of `size` words.
    pub fn new(size: usize) -> Self {
        Self {
            words: vec![0; size],
        }
    }

    /// Number of words.
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// True for a zero-sized memory.
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Reads the word at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if `address` is not below [`len`](Self::len).
    pub fn read(&self, address: usize) -> Result<u64, EngineError> {
        self.get(address).ok_or(EngineError::OutOfRange {
            address,
            size: self.words.len(),
        })
    }

    /// Reads the word at `address`, or `None` when out of range.
    pub fn get(&self, address: usize) -> Option<u64> {
        self.words.get(address).copied()
    }

    /// Overwrites the word at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if `address` is not below [`len`](Self::len);
    /// nothing is written in that case.
    pub fn write(&mut self, address: usize, word: u64) -> Result<(), EngineError> {
        let size = self.words.len();
        let slot = self
            .words
            .get_mut(address)
            .ok_or(EngineError::OutOfRange { address, size })?;
        trace!(address, word, "memory write");
        *slot = word;
        Ok(())
    }

    /// Sets every word back to zero.
    ///
    /// `load` and `reset` build a fresh image instead, so a rejected load never
    /// touches the current one.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Borrows the whole image.
    pub fn as_slice(&self) -> &[u64] {
        &self.words
    }
}
