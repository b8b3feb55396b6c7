//! Fixed-size byte arena with bump allocation.
//!
//! A [`ByteArena`] is one contiguous `Vec<u8>` sized once at creation, with a
//! cursor that advances on each allocation. Allocation is two-step: [`fit`]
//! finds where `len` bytes would go without moving anything, and [`commit`]
//! moves the cursor once the bytes have been written.
//!
//! [`fit`]: ByteArena::fit
//! [`commit`]: ByteArena::commit

use tracing::warn;

use crate::error::QueueError;

/// A single contiguous byte buffer with a bump cursor.
pub struct ByteArena {
    /// Backing storage. Allocated to full capacity at creation.
    data: Vec<u8>,
    /// Bump pointer: next free byte.
    cursor: usize,
}

impl ByteArena {
    /// Allocate a zero-filled arena of `capacity` bytes.
    ///
    /// Uses a fallible reservation so an oversized request surfaces as
    /// [`QueueError::AllocationError`] instead of aborting the process.
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        let mut data = Vec::new();
        if let Err(e) = data.try_reserve_exact(capacity) {
            warn!(capacity, error = %e, "packet arena allocation failed");
            return Err(QueueError::AllocationError {
                requested: capacity,
            });
        }
        data.resize(capacity, 0);
        Ok(Self { data, cursor: 0 })
    }

    /// Offset at which `len` bytes would be placed if allocated from `from`,
    /// provided the allocation ends at or before `limit`.
    ///
    /// Returns `None` if the allocation would cross `limit` or the end of
    /// the arena. Never moves the cursor.
    pub fn fit(&self, from: usize, len: usize, limit: usize) -> Option<usize> {
        let end = from.checked_add(len)?;
        (end <= limit.min(self.data.len())).then_some(from)
    }

    /// Move the bump pointer to `end`, the first byte past a written
    /// allocation.
    ///
    /// # Panics
    ///
    /// Panics if `end` is past the end of the arena.
    pub fn commit(&mut self, end: usize) {
        assert!(end <= self.data.len(), "commit past arena end");
        self.cursor = end;
    }

    /// Move the bump pointer back to the start without touching the bytes.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Shared view of `len` bytes at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the range exceeds the arena.
    pub fn slice(&self, offset: usize, len: usize) -> &[u8] {
        &self.data[offset..offset + len]
    }

    /// Mutable view of `len` bytes at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the range exceeds the arena.
    pub fn slice_mut(&mut self, offset: usize, len: usize) -> &mut [u8] {
        &mut self.data[offset..offset + len]
    }

    /// Current bump position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Bytes between the cursor and the end of the arena.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    /// Heap memory held by the backing buffer.
    pub fn memory_bytes(&self) -> usize {
        self.data.capacity()
    }
}
