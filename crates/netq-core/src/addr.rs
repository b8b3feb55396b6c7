//! Opaque remote-address encoding.
//!
//! The queue stores remote addresses as raw bytes next to each packet. This
//! module defines the byte form used for [`SocketAddr`]:
//!
//! ```text
//! V4: [4][a b c d][port:u16 BE]                                  7 bytes
//! V6: [6][16 address bytes][port:u16 BE][flowinfo:u32 BE][scope:u32 BE]  27 bytes
//! ```
//!
//! Callers are free to store any other address representation; the queue
//! never interprets these bytes.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};

use byteorder::{BigEndian, ByteOrder};
use smallvec::SmallVec;

use crate::error::AddrError;

/// Family tag for IPv4 addresses.
pub const TAG_V4: u8 = 4;

/// Family tag for IPv6 addresses.
pub const TAG_V6: u8 = 6;

/// Encoded length of an IPv4 socket address.
pub const V4_LEN: usize = 1 + 4 + 2;

/// Encoded length of an IPv6 socket address.
pub const V6_LEN: usize = 1 + 16 + 2 + 4 + 4;

/// Encoded address bytes. Always inline; never heap-allocates.
pub type EncodedAddr = SmallVec<[u8; V6_LEN]>;

/// Encode a socket address into its opaque byte form.
pub fn encode(addr: &SocketAddr) -> EncodedAddr {
    let mut buf = [0u8; V6_LEN];
    let len = match addr {
        SocketAddr::V4(v4) => {
            buf[0] = TAG_V4;
            buf[1..5].copy_from_slice(&v4.ip().octets());
            BigEndian::write_u16(&mut buf[5..7], v4.port());
            V4_LEN
        }
        SocketAddr::V6(v6) => {
            buf[0] = TAG_V6;
            buf[1..17].copy_from_slice(&v6.ip().octets());
            BigEndian::write_u16(&mut buf[17..19], v6.port());
            BigEndian::write_u32(&mut buf[19..23], v6.flowinfo());
            BigEndian::write_u32(&mut buf[23..27], v6.scope_id());
            V6_LEN
        }
    };
    SmallVec::from_slice(&buf[..len])
}

/// Decode bytes produced by [`encode`] back into a socket address.
pub fn decode(bytes: &[u8]) -> Result<SocketAddr, AddrError> {
    let (&tag, _) = bytes.split_first().ok_or(AddrError::Empty)?;
    match tag {
        TAG_V4 => {
            check_len(TAG_V4, V4_LEN, bytes.len())?;
            let ip = Ipv4Addr::new(bytes[1], bytes[2], bytes[3], bytes[4]);
            let port = BigEndian::read_u16(&bytes[5..7]);
            Ok(SocketAddr::V4(SocketAddrV4::new(ip, port)))
        }
        TAG_V6 => {
            check_len(TAG_V6, V6_LEN, bytes.len())?;
            let mut octets = [0u8; 16];
            octets.copy_from_slice(&bytes[1..17]);
            let port = BigEndian::read_u16(&bytes[17..19]);
            let flowinfo = BigEndian::read_u32(&bytes[19..23]);
            let scope_id = BigEndian::read_u32(&bytes[23..27]);
            Ok(SocketAddr::V6(SocketAddrV6::new(
                Ipv6Addr::from(octets),
                port,
                flowinfo,
                scope_id,
            )))
        }
        tag => Err(AddrError::UnknownFamily { tag }),
    }
}

fn check_len(family: u8, expected: usize, actual: usize) -> Result<(), AddrError> {
    if actual != expected {
        return Err(AddrError::Truncated {
            family,
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v4_layout() {
        let addr: SocketAddr = "192.0.2.1:5684".parse().unwrap();
        let bytes = encode(&addr);
        assert_eq!(bytes.as_slice(), &[4, 192, 0, 2, 1, 0x16, 0x34]);
        assert!(!bytes.spilled());
    }

    #[test]
    fn v6_keeps_flowinfo_and_scope() {
        let addr = SocketAddr::V6(SocketAddrV6::new(
            "fe80::1".parse().unwrap(),
            5683,
            0xABCD,
            3,
        ));
        let bytes = encode(&addr);
        assert_eq!(bytes.len(), V6_LEN);
        assert_eq!(decode(&bytes).unwrap(), addr);
    }

    #[test]
    fn empty_slice_is_rejected() {
        assert_eq!(decode(&[]), Err(AddrError::Empty));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(
            decode(&[9, 1, 2]),
            Err(AddrError::UnknownFamily { tag: 9 })
        );
    }

    #[test]
    fn short_v4_is_rejected() {
        assert_eq!(
            decode(&[TAG_V4, 10, 0, 0]),
            Err(AddrError::Truncated {
                family: 4,
                expected: V4_LEN,
                actual: 4
            })
        );
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let addr: SocketAddr = "10.0.0.1:53".parse().unwrap();
        let mut bytes = encode(&addr).to_vec();
        bytes.push(0);
        assert!(matches!(
            decode(&bytes),
            Err(AddrError::Truncated { family: 4, .. })
        ));
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn decode_inverts_encode_v4(octets in any::<[u8; 4]>(), port in any::<u16>()) {
                let addr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::from(octets), port));
                prop_assert_eq!(decode(&encode(&addr)).unwrap(), addr);
            }

            #[test]
            fn decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..40)) {
                let _ = decode(&bytes);
            }
        }
    }
}
