//! The arena-backed packet FIFO.
//!
//! [`PacketArenaQueue`] carves packet records out of one [`ByteArena`] and
//! links them by arena offset into a singly linked list. Records are
//! appended at the tail and consumed from the head. Under
//! [`ReclaimPolicy::Ring`] the bytes between the tail's end and the head's
//! start are reused; under [`ReclaimPolicy::WriteOnce`] they are not.
//!
//! Arena states under `Ring` (`H` = head record, `T` = bump cursor):
//!
//! ```text
//! contiguous:  [ free | H ... records ... | T free ]
//! wrapped:     [ records ... | T free | H ... records | gap ]
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use netq_core::InterfaceIndex;
use tracing::{debug, trace, warn};

use crate::arena::ByteArena;
use crate::config::{QueueConfig, ReclaimPolicy};
use crate::error::QueueError;
use crate::handle::PacketHandle;
use crate::packet::Packet;
use crate::record::{self, RecordHeader, HEADER_SIZE};

/// Counter for per-queue identities carried in handles.
static QUEUE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Bounded FIFO of variable-length packets stored in a single byte arena.
///
/// All storage is allocated once at construction. Enqueue copies the
/// remote address and payload into the arena; dequeue and peek return
/// [`Packet`] views that borrow the queue, so they stay valid exactly until
/// the next mutating call. Dropping the queue releases the arena and all
/// metadata together.
///
/// The queue is single-owner: every mutation takes `&mut self`. Callers
/// sharing it across threads wrap it in their own lock.
pub struct PacketArenaQueue {
    arena: ByteArena,
    reclaim: ReclaimPolicy,
    /// Distinguishes this queue's handles from other queues'.
    id: u64,
    /// Offset of the head record (next to dequeue).
    first: Option<u32>,
    /// Offset of the tail record (most recently enqueued).
    last: Option<u32>,
    /// Sequence number of the head record.
    head_seq: u64,
    /// Sequence number the next enqueue will receive.
    next_seq: u64,
    /// Sum of live record footprints.
    live_bytes: usize,
}

impl PacketArenaQueue {
    /// Create a queue with a `capacity`-byte arena and ring reclamation.
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        Self::with_config(QueueConfig::new(capacity))
    }

    /// Create a queue from an explicit configuration.
    ///
    /// Fails with [`QueueError::AllocationError`] if the arena cannot be
    /// allocated or `capacity` exceeds [`QueueConfig::MAX_CAPACITY`].
    pub fn with_config(config: QueueConfig) -> Result<Self, QueueError> {
        if config.capacity > QueueConfig::MAX_CAPACITY {
            warn!(
                capacity = config.capacity,
                max = QueueConfig::MAX_CAPACITY,
                "packet arena larger than addressable maximum"
            );
            return Err(QueueError::AllocationError {
                requested: config.capacity,
            });
        }
        let arena = ByteArena::new(config.capacity)?;
        let id = QUEUE_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        debug!(
            queue = id,
            capacity = config.capacity,
            reclaim = ?config.reclaim,
            "packet queue created"
        );
        Ok(Self {
            arena,
            reclaim: config.reclaim,
            id,
            first: None,
            last: None,
            head_seq: 0,
            next_seq: 0,
            live_bytes: 0,
        })
    }

    /// Copy a packet into the arena and append it at the tail.
    ///
    /// Fails with [`QueueError::CapacityExceeded`] if no contiguous free run
    /// can hold `HEADER_SIZE + remote_addr.len() + payload.len()` bytes. On
    /// failure the queue is unchanged.
    pub fn enqueue(
        &mut self,
        remote_addr: &[u8],
        interface_index: InterfaceIndex,
        payload: &[u8],
    ) -> Result<Packet<'_>, QueueError> {
        self.append(remote_addr, interface_index, payload.len(), |buf| {
            buf.copy_from_slice(payload)
        })
    }

    /// Append a packet whose payload is written in place by `fill`.
    ///
    /// `fill` receives the record's zeroed `payload_len`-byte payload region,
    /// so a datagram can be received straight into arena storage. Space is
    /// checked first: on [`QueueError::CapacityExceeded`] `fill` is never
    /// called.
    pub fn enqueue_with<F>(
        &mut self,
        remote_addr: &[u8],
        interface_index: InterfaceIndex,
        payload_len: usize,
        fill: F,
    ) -> Result<Packet<'_>, QueueError>
    where
        F: FnOnce(&mut [u8]),
    {
        self.append(remote_addr, interface_index, payload_len, |buf| {
            buf.fill(0);
            fill(buf)
        })
    }

    fn append<F>(
        &mut self,
        remote_addr: &[u8],
        interface_index: InterfaceIndex,
        payload_len: usize,
        fill: F,
    ) -> Result<Packet<'_>, QueueError>
    where
        F: FnOnce(&mut [u8]),
    {
        let footprint = record::footprint(remote_addr.len(), payload_len)
            .filter(|&fp| fp <= self.arena.capacity());
        let placed = footprint.and_then(|fp| self.reserve(fp).map(|offset| (offset, fp)));
        let Some((offset, footprint)) = placed else {
            let requested = HEADER_SIZE
                .saturating_add(remote_addr.len())
                .saturating_add(payload_len);
            let available = self.available();
            debug!(
                queue = self.id,
                requested,
                available,
                count = self.count(),
                "packet rejected: queue capacity exceeded"
            );
            return Err(QueueError::CapacityExceeded {
                requested,
                available,
            });
        };

        // footprint <= capacity <= u32::MAX, so every length and offset
        // below fits in u32 and no record starts at NIL. The target range is
        // free space: if `fill` unwinds, nothing has been committed or linked.
        let header = RecordHeader {
            addr_len: remote_addr.len() as u32,
            interface_index,
            payload_len: payload_len as u32,
            next: None,
        };
        let buf = self.arena.slice_mut(offset, footprint);
        let (header_bytes, body) = buf.split_at_mut(HEADER_SIZE);
        header.write(header_bytes);
        let (addr_bytes, payload_bytes) = body.split_at_mut(remote_addr.len());
        addr_bytes.copy_from_slice(remote_addr);
        fill(payload_bytes);
        self.arena.commit(offset + footprint);

        let offset = offset as u32;
        match self.last {
            Some(tail) => record::set_next(self.arena.slice_mut(tail as usize, HEADER_SIZE), offset),
            None => self.first = Some(offset),
        }
        self.last = Some(offset);

        let handle = PacketHandle::new(self.id, self.next_seq, offset);
        self.next_seq += 1;
        self.live_bytes += footprint;
        trace!(
            queue = self.id,
            offset,
            footprint,
            seq = handle.seq,
            wrapped = self.is_wrapped(),
            "packet enqueued"
        );
        Ok(self.packet_at(handle))
    }

    /// Find room for `footprint` bytes without moving the cursor.
    fn reserve(&self, footprint: usize) -> Option<usize> {
        let capacity = self.arena.capacity();
        let cursor = self.arena.cursor();
        match (self.reclaim, self.first) {
            (ReclaimPolicy::Ring, Some(head)) if self.is_wrapped() => {
                self.arena.fit(cursor, footprint, head as usize)
            }
            (ReclaimPolicy::Ring, Some(head)) => self
                .arena
                .fit(cursor, footprint, capacity)
                .or_else(|| self.arena.fit(0, footprint, head as usize)),
            // Empty ring queues have already rewound the cursor.
            _ => self.arena.fit(cursor, footprint, capacity),
        }
    }

    /// Remove and return the head packet, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<Packet<'_>> {
        let offset = self.first?;
        let header = self.header_at(offset);
        self.first = header.next;
        if self.first.is_none() {
            self.last = None;
            if self.reclaim == ReclaimPolicy::Ring {
                self.arena.rewind();
            }
        }
        let handle = PacketHandle::new(self.id, self.head_seq, offset);
        self.head_seq += 1;
        self.live_bytes -= header.footprint();
        trace!(queue = self.id, offset, seq = handle.seq, "packet dequeued");
        Some(self.packet_at(handle))
    }

    /// The head packet, without removing it.
    pub fn peek(&self) -> Option<Packet<'_>> {
        self.first
            .map(|offset| self.packet_at(PacketHandle::new(self.id, self.head_seq, offset)))
    }

    /// Number of queued packets.
    pub fn count(&self) -> usize {
        (self.next_seq - self.head_seq) as usize
    }

    /// Whether [`peek`](Self::peek) would return a packet.
    pub fn is_pending(&self) -> bool {
        self.first.is_some()
    }

    /// Drop every queued packet and rewind the arena to its start.
    pub fn clear(&mut self) {
        let dropped = self.count();
        self.first = None;
        self.last = None;
        self.head_seq = self.next_seq;
        self.live_bytes = 0;
        self.arena.rewind();
        debug!(queue = self.id, dropped, "packet queue cleared");
    }

    /// Whether `handle` still names a queued packet of this queue.
    pub fn is_live(&self, handle: PacketHandle) -> bool {
        handle.queue == self.id && handle.seq >= self.head_seq && handle.seq < self.next_seq
    }

    /// Resolve a handle to its packet, or `None` if it has been dequeued,
    /// cleared, or belongs to another queue.
    pub fn get(&self, handle: PacketHandle) -> Option<Packet<'_>> {
        self.is_live(handle).then(|| self.packet_at(handle))
    }

    /// Iterate queued packets from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            queue: self,
            next: self.first,
            seq: self.head_seq,
            remaining: self.count(),
        }
    }

    /// Arena size in bytes.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Bytes occupied by queued records.
    pub fn used_bytes(&self) -> usize {
        self.live_bytes
    }

    /// Largest record footprint the next enqueue can accept.
    pub fn available(&self) -> usize {
        let capacity = self.arena.capacity();
        let cursor = self.arena.cursor();
        match (self.reclaim, self.first) {
            (ReclaimPolicy::Ring, Some(head)) if self.is_wrapped() => head as usize - cursor,
            (ReclaimPolicy::Ring, Some(head)) => (capacity - cursor).max(head as usize),
            _ => self.arena.remaining(),
        }
    }

    /// Memory held by the queue, arena and metadata included.
    pub fn memory_bytes(&self) -> usize {
        self.arena.memory_bytes() + std::mem::size_of::<Self>()
    }

    /// The reclamation policy this queue was built with.
    pub fn reclaim_policy(&self) -> ReclaimPolicy {
        self.reclaim
    }

    /// The tail sits physically before the head: the list has wrapped
    /// around the end of the arena.
    fn is_wrapped(&self) -> bool {
        matches!((self.first, self.last), (Some(head), Some(tail)) if tail < head)
    }

    fn header_at(&self, offset: u32) -> RecordHeader {
        RecordHeader::read(self.arena.slice(offset as usize, HEADER_SIZE))
    }

    fn packet_at(&self, handle: PacketHandle) -> Packet<'_> {
        let header = self.header_at(handle.offset);
        let addr_start = handle.offset as usize + HEADER_SIZE;
        let addr_len = header.addr_len as usize;
        Packet {
            handle,
            interface_index: header.interface_index,
            remote_addr: self.arena.slice(addr_start, addr_len),
            payload: self
                .arena
                .slice(addr_start + addr_len, header.payload_len as usize),
        }
    }
}

impl fmt::Debug for PacketArenaQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PacketArenaQueue")
            .field("capacity", &self.arena.capacity())
            .field("reclaim", &self.reclaim)
            .field("count", &self.count())
            .field("used_bytes", &self.live_bytes)
            .field("cursor", &self.arena.cursor())
            .field("first", &self.first)
            .field("last", &self.last)
            .finish()
    }
}

/// Head-to-tail iterator over queued packets.
pub struct Iter<'a> {
    queue: &'a PacketArenaQueue,
    next: Option<u32>,
    seq: u64,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Packet<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.next?;
        let packet = self
            .queue
            .packet_at(PacketHandle::new(self.queue.id, self.seq, offset));
        self.next = self.queue.header_at(offset).next;
        self.seq += 1;
        self.remaining -= 1;
        Some(packet)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a PacketArenaQueue {
    type Item = Packet<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
