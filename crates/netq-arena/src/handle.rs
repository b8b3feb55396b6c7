//! Packet handles.
//!
//! A [`PacketHandle`] names one enqueued record by its arena offset and its
//! enqueue sequence number. The sequence number allows O(1) staleness
//! checks: a handle is live while the queue's head sequence has not yet
//! passed it.

use std::fmt;

/// Location and identity of a record within a queue's arena.
///
/// Handles are plain values. They carry no borrow of the queue and are
/// resolved with [`PacketArenaQueue::get`](crate::PacketArenaQueue::get),
/// which returns `None` once the record has been dequeued or cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PacketHandle {
    /// Identity of the queue that issued this handle.
    pub(crate) queue: u64,
    /// Enqueue sequence number, unique for the queue's lifetime.
    pub(crate) seq: u64,
    /// Byte offset of the record header within the arena.
    pub(crate) offset: u32,
}

impl PacketHandle {
    pub(crate) fn new(queue: u64, seq: u64, offset: u32) -> Self {
        Self { queue, seq, offset }
    }

    /// Position of this record in the queue's enqueue history.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Byte offset of the record within the arena.
    pub fn offset(&self) -> u32 {
        self.offset
    }
}

impl fmt::Display for PacketHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PacketHandle(seq={}, off={})", self.seq, self.offset)
    }
}
