//! In-arena packet record layout.
//!
//! Every record is a fixed 16-byte header followed by the remote address
//! and the payload, all in one contiguous allocation:
//!
//! ```text
//! offset  0          4                 8             12     16            16 + addr_len
//!         [addr_len] [interface_index] [payload_len] [next] [remote addr] [payload]
//! ```
//!
//! All header fields are little-endian. `next` is the arena offset of the
//! following record, or [`NIL`] for the tail.

use byteorder::{ByteOrder, LittleEndian};
use netq_core::InterfaceIndex;

/// Size of the fixed record header in bytes.
pub const HEADER_SIZE: usize = 16;

/// End-of-list marker stored in `next`.
pub const NIL: u32 = u32::MAX;

const ADDR_LEN: usize = 0;
const IFINDEX: usize = 4;
const PAYLOAD_LEN: usize = 8;
const NEXT: usize = 12;

/// Arena bytes consumed by one record, or `None` on overflow.
pub fn footprint(addr_len: usize, payload_len: usize) -> Option<usize> {
    HEADER_SIZE.checked_add(addr_len)?.checked_add(payload_len)
}

/// Decoded fixed header of a packet record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordHeader {
    /// Length of the remote address bytes.
    pub addr_len: u32,
    /// Interface the packet is associated with.
    pub interface_index: InterfaceIndex,
    /// Length of the payload bytes.
    pub payload_len: u32,
    /// Offset of the next record, if any.
    pub next: Option<u32>,
}

impl RecordHeader {
    /// Write this header into the first [`HEADER_SIZE`] bytes of `buf`.
    pub fn write(&self, buf: &mut [u8]) {
        LittleEndian::write_u32(&mut buf[ADDR_LEN..], self.addr_len);
        LittleEndian::write_i32(&mut buf[IFINDEX..], self.interface_index.0);
        LittleEndian::write_u32(&mut buf[PAYLOAD_LEN..], self.payload_len);
        LittleEndian::write_u32(&mut buf[NEXT..], self.next.unwrap_or(NIL));
    }

    /// Read a header from the first [`HEADER_SIZE`] bytes of `buf`.
    pub fn read(buf: &[u8]) -> Self {
        let next = LittleEndian::read_u32(&buf[NEXT..]);
        Self {
            addr_len: LittleEndian::read_u32(&buf[ADDR_LEN..]),
            interface_index: InterfaceIndex(LittleEndian::read_i32(&buf[IFINDEX..])),
            payload_len: LittleEndian::read_u32(&buf[PAYLOAD_LEN..]),
            next: (next != NIL).then_some(next),
        }
    }

    /// Arena bytes occupied by the record this header describes.
    pub fn footprint(&self) -> usize {
        HEADER_SIZE + self.addr_len as usize + self.payload_len as usize
    }
}

/// Patch only the `next` link of the header at the start of `buf`.
pub fn set_next(buf: &mut [u8], next: u32) {
    LittleEndian::write_u32(&mut buf[NEXT..], next);
}
