//! Test fixtures for netq development.
//!
//! Provides [`Datagram`], a plain owned packet used as the expected value in
//! queue tests and as input for benchmarks, plus address builders.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};

use netq_core::{addr, EncodedAddr, InterfaceIndex};

/// A datagram as a socket reader would hand it to the queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Datagram {
    pub remote_addr: EncodedAddr,
    pub interface_index: InterfaceIndex,
    pub payload: Vec<u8>,
}

impl Datagram {
    pub fn new(remote: SocketAddr, interface_index: i32, payload: Vec<u8>) -> Self {
        Self {
            remote_addr: addr::encode(&remote),
            interface_index: InterfaceIndex(interface_index),
            payload,
        }
    }

    /// Arena bytes this datagram needs behind a record header of
    /// `header_size` bytes. Pass `netq_arena::HEADER_SIZE`; this crate does
    /// not depend on the arena crate, which uses it as a dev-dependency.
    pub fn footprint(&self, header_size: usize) -> usize {
        header_size + self.remote_addr.len() + self.payload.len()
    }
}

/// `192.0.2.<host>:<port>` (TEST-NET-1).
pub fn v4(host: u8, port: u16) -> SocketAddr {
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(192, 0, 2, host), port))
}

/// `2001:db8::<host>:<port>` (documentation prefix).
pub fn v6(host: u16, port: u16) -> SocketAddr {
    SocketAddr::V6(SocketAddrV6::new(
        Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, host),
        port,
        0,
        0,
    ))
}

/// Payload of `len` bytes counting up from `seed`, so every datagram in a
/// sequence is distinguishable.
pub fn payload(seed: u8, len: usize) -> Vec<u8> {
    (0..len).map(|i| seed.wrapping_add(i as u8)).collect()
}

/// `n` IPv4 datagrams with payload length `len`, numbered from zero.
pub fn datagrams(n: usize, len: usize) -> Vec<Datagram> {
    (0..n)
        .map(|i| {
            Datagram::new(
                v4((i % 250) as u8 + 1, 5683),
                1 + (i % 4) as i32,
                payload(i as u8, len),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v4_datagram_footprint() {
        let d = Datagram::new(v4(1, 53), 2, vec![0; 10]);
        assert_eq!(d.footprint(16), 16 + 7 + 10);
    }

    #[test]
    fn datagrams_are_distinct() {
        let ds = datagrams(3, 4);
        assert_eq!(ds.len(), 3);
        assert_ne!(ds[0], ds[1]);
        assert_eq!(ds[2].payload, vec![2, 3, 4, 5]);
    }

    #[test]
    fn v6_builder_uses_doc_prefix() {
        assert_eq!(v6(1, 443).to_string(), "[2001:db8::1]:443");
    }
}
