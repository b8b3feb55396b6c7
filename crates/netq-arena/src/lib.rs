//! Bounded, arena-backed FIFO queue for variable-length network packets.
//!
//! A [`PacketArenaQueue`] owns one fixed-size byte arena. Each enqueued
//! datagram (remote address + interface index + payload) becomes a record
//! carved from the arena by a bump allocator and linked, by arena offset,
//! onto the tail of a singly linked list. Dequeue consumes from the head.
//!
//! # Architecture
//!
//! ```text
//! PacketArenaQueue
//! ├── ByteArena (Vec<u8>, bump cursor, sized once)
//! │   └── records: [RecordHeader | remote addr | payload] ...
//! ├── first / last (Option<u32> arena offsets)
//! └── head_seq / next_seq (handle liveness, O(1) count)
//! ```
//!
//! # Footprint
//!
//! One record consumes `HEADER_SIZE + remote_addr.len() + payload.len()`
//! bytes of arena, with [`HEADER_SIZE`] = 16. Plan capacity with
//! [`QueueConfig::max_packets`].
//!
//! # Reclamation
//!
//! [`ReclaimPolicy::Ring`] (default) reuses space freed at the head and
//! wraps placement to the start of the arena. [`ReclaimPolicy::WriteOnce`]
//! never reuses dequeued space until [`PacketArenaQueue::clear`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
pub mod handle;
pub mod packet;
pub mod queue;
pub mod record;

// Public re-exports for the primary API surface.
pub use config::{QueueConfig, ReclaimPolicy};
pub use error::QueueError;
pub use handle::PacketHandle;
pub use packet::{OwnedPacket, Packet};
pub use queue::{Iter, PacketArenaQueue};
pub use record::{footprint, HEADER_SIZE};
