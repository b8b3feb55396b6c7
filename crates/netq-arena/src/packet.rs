//! Borrowed and owned views of queued packets.

use std::net::SocketAddr;

use netq_core::{addr, AddrError, InterfaceIndex};

use crate::handle::PacketHandle;
use crate::record::HEADER_SIZE;

/// A packet record, viewed in place inside the queue's arena.
///
/// Borrows the queue, so it cannot outlive the next mutating call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Packet<'a> {
    pub(crate) handle: PacketHandle,
    pub(crate) interface_index: InterfaceIndex,
    pub(crate) remote_addr: &'a [u8],
    pub(crate) payload: &'a [u8],
}

impl<'a> Packet<'a> {
    /// Handle naming this record.
    pub fn handle(&self) -> PacketHandle {
        self.handle
    }

    /// Opaque remote address bytes.
    pub fn remote_addr(&self) -> &'a [u8] {
        self.remote_addr
    }

    /// Length of the remote address in bytes.
    pub fn remote_addr_len(&self) -> usize {
        self.remote_addr.len()
    }

    /// Decode the remote address, if it was stored with
    /// [`netq_core::addr::encode`].
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrError> {
        addr::decode(self.remote_addr)
    }

    /// Interface the packet arrived on or should leave through.
    pub fn interface_index(&self) -> InterfaceIndex {
        self.interface_index
    }

    /// Payload bytes.
    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Arena bytes this record occupies.
    pub fn footprint(&self) -> usize {
        HEADER_SIZE + self.remote_addr.len() + self.payload.len()
    }

    /// Copy the record out of the arena.
    pub fn to_owned_packet(&self) -> OwnedPacket {
        OwnedPacket {
            interface_index: self.interface_index,
            remote_addr: self.remote_addr.to_vec(),
            payload: self.payload.to_vec(),
        }
    }
}

/// A packet copied out of the arena, independent of the queue's lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedPacket {
    /// Interface the packet is associated with.
    pub interface_index: InterfaceIndex,
    /// Opaque remote address bytes.
    pub remote_addr: Vec<u8>,
    /// Payload bytes.
    pub payload: Vec<u8>,
}

impl From<Packet<'_>> for OwnedPacket {
    fn from(packet: Packet<'_>) -> Self {
        packet.to_owned_packet()
    }
}
