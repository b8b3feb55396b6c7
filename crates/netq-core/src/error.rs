//! Address codec error types.

use std::error::Error;
use std::fmt;

/// Errors returned when decoding stored remote-address bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddrError {
    /// The address slice was empty.
    Empty,
    /// The leading family tag is neither IPv4 nor IPv6.
    UnknownFamily {
        /// The tag byte found.
        tag: u8,
    },
    /// The slice length does not match its family's encoding.
    Truncated {
        /// Address family tag (4 or 6).
        family: u8,
        /// Encoded length required by the family.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}

impl fmt::Display for AddrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty remote address"),
            Self::UnknownFamily { tag } => write!(f, "unknown address family tag {tag}"),
            Self::Truncated {
                family,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "malformed IPv{family} address: expected {expected} bytes, got {actual}"
                )
            }
        }
    }
}

impl Error for AddrError {}
