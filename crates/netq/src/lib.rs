//! netq: a bounded, arena-backed FIFO queue for network datagrams.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the netq sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use netq::prelude::*;
//!
//! let mut queue = PacketArenaQueue::new(256).unwrap();
//! let from = netq::types::addr::encode(&"192.0.2.1:5683".parse().unwrap());
//!
//! // 16-byte header + 7-byte address + 10-byte payload = 33 bytes.
//! let packet = queue.enqueue(&from, InterfaceIndex(1), b"0123456789").unwrap();
//! assert_eq!(packet.footprint(), 33);
//!
//! let packet = queue.dequeue().unwrap();
//! assert_eq!(packet.payload(), b"0123456789");
//! assert_eq!(packet.socket_addr().unwrap().port(), 5683);
//! assert!(!queue.is_pending());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`queue`] | `netq-arena` | `PacketArenaQueue`, packet views, handles, config |
//! | [`types`] | `netq-core` | `InterfaceIndex`, address codec |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The packet queue, its configuration, and record views (`netq-arena`).
pub use netq_arena as queue;

/// Interface indices and the remote-address codec (`netq-core`).
pub use netq_core as types;

/// Common imports for typical netq usage.
pub mod prelude {
    pub use netq_arena::{
        OwnedPacket, Packet, PacketArenaQueue, PacketHandle, QueueConfig, QueueError,
        ReclaimPolicy, HEADER_SIZE,
    };
    pub use netq_core::{AddrError, InterfaceIndex};
}
