//! Queue error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during queue operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueueError {
    /// The arena could not be obtained from the host allocator, or the
    /// requested capacity is larger than a record link can address.
    AllocationError {
        /// Arena size requested, in bytes.
        requested: usize,
    },
    /// No contiguous free run in the arena can hold the record.
    ///
    /// The queue is unchanged; the caller decides whether to drop the
    /// packet, drain the head, or push back upstream.
    CapacityExceeded {
        /// Footprint of the rejected record, in bytes.
        requested: usize,
        /// Largest contiguous free run at the time of the call.
        available: usize,
    },
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationError { requested } => {
                write!(f, "failed to allocate {requested}-byte packet arena")
            }
            Self::CapacityExceeded {
                requested,
                available,
            } => {
                write!(
                    f,
                    "queue capacity exceeded: requested {requested} bytes, available {available} bytes"
                )
            }
        }
    }
}

impl Error for QueueError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_message_names_both_sizes() {
        let err = QueueError::CapacityExceeded {
            requested: 220,
            available: 166,
        };
        assert_eq!(
            err.to_string(),
            "queue capacity exceeded: requested 220 bytes, available 166 bytes"
        );
    }
}
