//! Integration test: arena reuse under steady packet churn.
//!
//! A receive loop that keeps only a few packets in flight must be able to
//! run indefinitely with ring reclamation, while the write-once discipline
//! exhausts its arena and has to be cleared.

use netq_arena::{HEADER_SIZE, PacketArenaQueue, QueueConfig, QueueError, ReclaimPolicy};
use netq_test_utils::datagrams;

const CAPACITY: usize = 4096;
const IN_FLIGHT: usize = 8;
const ITERATIONS: usize = 10_000;

#[test]
fn ring_never_exhausts_under_bounded_occupancy() {
    let mut q = PacketArenaQueue::new(CAPACITY).unwrap();
    let traffic = datagrams(64, 100);
    let mut expected_seq = 0u64;

    for i in 0..ITERATIONS {
        let d = &traffic[i % traffic.len()];
        q.enqueue(&d.remote_addr, d.interface_index, &d.payload)
            .unwrap_or_else(|e| panic!("iteration {i}: {e}"));
        if q.count() > IN_FLIGHT {
            let p = q.dequeue().unwrap();
            assert_eq!(p.handle().seq(), expected_seq);
            expected_seq += 1;
        }
        assert!(q.used_bytes() <= (IN_FLIGHT + 1) * d.footprint(HEADER_SIZE));
    }
    assert_eq!(q.count(), IN_FLIGHT);
}

#[test]
fn write_once_exhausts_and_recovers_after_clear() {
    let mut q =
        PacketArenaQueue::with_config(QueueConfig::new(CAPACITY).with_reclaim(ReclaimPolicy::WriteOnce))
            .unwrap();
    let traffic = datagrams(64, 100);
    let fp = traffic[0].footprint(HEADER_SIZE);

    let mut accepted = 0;
    let mut exhausted = false;
    for d in traffic.iter().cycle().take(ITERATIONS) {
        match q.enqueue(&d.remote_addr, d.interface_index, &d.payload) {
            Ok(_) => accepted += 1,
            Err(QueueError::CapacityExceeded { .. }) => {
                exhausted = true;
                break;
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
        if q.count() > IN_FLIGHT {
            q.dequeue().unwrap();
        }
    }

    assert!(exhausted);
    assert_eq!(accepted, CAPACITY / fp);

    q.clear();
    assert_eq!(q.available(), CAPACITY);
    let d = &traffic[0];
    q.enqueue(&d.remote_addr, d.interface_index, &d.payload)
        .unwrap();
}
