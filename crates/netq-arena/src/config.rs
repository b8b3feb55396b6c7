//! Queue configuration parameters.

use crate::record;

/// How dequeued arena space is handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReclaimPolicy {
    /// Reuse space freed at the head. New records go after the tail, or
    /// wrap to the start of the arena once the tail reaches the end and the
    /// record fits in front of the head.
    ///
    /// Free space may be split between the end and the start of the arena,
    /// so an enqueue is only guaranteed to fit while
    /// `used_bytes() + 2 * m <= capacity`, where `m` is the largest record
    /// footprint the queue is given.
    #[default]
    Ring,
    /// Never reuse dequeued space. The bump cursor only moves forward until
    /// [`clear`](crate::PacketArenaQueue::clear) is called.
    WriteOnce,
}

/// Configuration for a [`PacketArenaQueue`](crate::PacketArenaQueue).
///
/// Fixed at construction; the arena never grows or shrinks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueConfig {
    /// Arena size in bytes, excluding queue metadata.
    ///
    /// Default: 65_536. Must not exceed [`QueueConfig::MAX_CAPACITY`].
    pub capacity: usize,

    /// Reclamation policy for dequeued records.
    pub reclaim: ReclaimPolicy,
}

impl QueueConfig {
    /// Default arena size: 64 KiB.
    pub const DEFAULT_CAPACITY: usize = 64 * 1024;

    /// Largest arena a queue can address. Record links are 32-bit offsets
    /// with `u32::MAX` reserved as the end-of-list marker, so every record
    /// must start below it.
    pub const MAX_CAPACITY: usize = u32::MAX as usize;

    /// Create a config for an arena of `capacity` bytes with ring reclamation.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            reclaim: ReclaimPolicy::default(),
        }
    }

    /// Replace the reclamation policy.
    pub fn with_reclaim(mut self, reclaim: ReclaimPolicy) -> Self {
        self.reclaim = reclaim;
        self
    }

    /// How many records of the given shape fit in an empty arena.
    pub fn max_packets(&self, addr_len: usize, payload_len: usize) -> usize {
        match record::footprint(addr_len, payload_len) {
            Some(fp) => self.capacity / fp,
            None => 0,
        }
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_64k_ring() {
        let config = QueueConfig::default();
        assert_eq!(config.capacity, 64 * 1024);
        assert_eq!(config.reclaim, ReclaimPolicy::Ring);
    }

    #[test]
    fn with_reclaim_overrides_policy() {
        let config = QueueConfig::new(128).with_reclaim(ReclaimPolicy::WriteOnce);
        assert_eq!(config.capacity, 128);
        assert_eq!(config.reclaim, ReclaimPolicy::WriteOnce);
    }

    #[test]
    fn max_packets_divides_by_footprint() {
        // 16-byte header + 4-byte address + 10-byte payload = 30 bytes.
        let config = QueueConfig::new(256);
        assert_eq!(config.max_packets(4, 10), 8);
        assert_eq!(config.max_packets(4, 300), 0);
    }

    #[test]
    fn max_packets_handles_overflowing_footprint() {
        let config = QueueConfig::new(256);
        assert_eq!(config.max_packets(usize::MAX, 1), 0);
    }
}
