//! Traffic profiles for benchmarking the netq packet queue.
//!
//! - [`dns_profile`]: small IPv4 datagrams (32–512 byte payloads)
//! - [`mtu_profile`]: near-MTU datagrams over IPv4 and IPv6
//! - [`traffic_profile`]: seeded generator behind both

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use netq_test_utils::{payload, v4, v6, Datagram};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Shape of generated traffic.
#[derive(Clone, Copy, Debug)]
pub struct ProfileSpec {
    /// Number of datagrams to generate.
    pub count: usize,
    /// Smallest payload length, inclusive.
    pub min_payload: usize,
    /// Largest payload length, inclusive.
    pub max_payload: usize,
    /// Fraction of datagrams with an IPv6 source, in `0.0..=1.0`.
    pub v6_ratio: f64,
    /// Interfaces are drawn from `1..=interfaces`.
    pub interfaces: u32,
}

/// Generate a deterministic datagram sequence for `spec` from `seed`.
pub fn traffic_profile(seed: u64, spec: ProfileSpec) -> Vec<Datagram> {
    debug_assert!(
        spec.min_payload <= spec.max_payload,
        "min_payload {} exceeds max_payload {}",
        spec.min_payload,
        spec.max_payload
    );
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let v6_threshold = (spec.v6_ratio.clamp(0.0, 1.0) * u32::MAX as f64) as u32;

    (0..spec.count)
        .map(|i| {
            let len = payload_len(&mut rng, &spec);
            let host = rng.next_u32();
            let port = 1024 + (rng.next_u32() % 64_512) as u16;
            let remote = if rng.next_u32() < v6_threshold {
                v6(host as u16, port)
            } else {
                v4(1 + (host % 254) as u8, port)
            };
            let interface = 1 + (rng.next_u32() % spec.interfaces.max(1)) as i32;
            Datagram::new(remote, interface, payload(i as u8, len))
        })
        .collect()
}

/// Draw a payload length uniformly-ish from `min_payload..=max_payload`.
fn payload_len(rng: &mut ChaCha8Rng, spec: &ProfileSpec) -> usize {
    let span = (spec.max_payload.saturating_sub(spec.min_payload) as u64).saturating_add(1);
    spec.min_payload + (rng.next_u64() % span) as usize
}

/// 1024 small IPv4 datagrams, typical of a DNS or CoAP server.
pub fn dns_profile(seed: u64) -> Vec<Datagram> {
    traffic_profile(
        seed,
        ProfileSpec {
            count: 1024,
            min_payload: 32,
            max_payload: 512,
            v6_ratio: 0.0,
            interfaces: 1,
        },
    )
}

/// 256 near-MTU datagrams, a quarter of them IPv6.
pub fn mtu_profile(seed: u64) -> Vec<Datagram> {
    traffic_profile(
        seed,
        ProfileSpec {
            count: 256,
            min_payload: 1200,
            max_payload: 1472,
            v6_ratio: 0.25,
            interfaces: 4,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_deterministic() {
        assert_eq!(dns_profile(42), dns_profile(42));
        assert_ne!(dns_profile(42), dns_profile(43));
    }

    #[test]
    fn payload_lengths_stay_in_range() {
        for d in mtu_profile(7) {
            assert!((1200..=1472).contains(&d.payload.len()));
            assert!((1..=4).contains(&d.interface_index.0));
        }
    }

    #[test]
    fn fixed_length_profile() {
        let spec = ProfileSpec {
            count: 16,
            min_payload: 100,
            max_payload: 100,
            v6_ratio: 0.5,
            interfaces: 2,
        };
        assert!(traffic_profile(3, spec)
            .iter()
            .all(|d| d.payload.len() == 100));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn wide_span_is_not_truncated() {
        let spec = ProfileSpec {
            count: 0,
            min_payload: 0,
            max_payload: 1 << 40,
            v6_ratio: 0.0,
            interfaces: 1,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let lens: Vec<usize> = (0..64).map(|_| payload_len(&mut rng, &spec)).collect();
        assert!(lens.iter().all(|&len| len <= 1 << 40));
        assert!(lens.iter().any(|&len| len > u32::MAX as usize));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "exceeds max_payload")]
    fn inverted_range_is_rejected() {
        let spec = ProfileSpec {
            count: 1,
            min_payload: 10,
            max_payload: 5,
            v6_ratio: 0.0,
            interfaces: 1,
        };
        traffic_profile(0, spec);
    }

    #[test]
    fn v4_only_profile_has_v4_addresses() {
        assert!(dns_profile(1)
            .iter()
            .all(|d| d.remote_addr.len() == netq_core::addr::V4_LEN));
    }
}
