//! Strongly-typed identifiers.

use std::fmt;

/// Identifies the network interface a packet arrived on or leaves through.
///
/// Mirrors the OS interface index (`if_nametoindex`). Zero means "not
/// bound to a particular interface".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InterfaceIndex(pub i32);

impl InterfaceIndex {
    /// No specific interface.
    pub const UNSPECIFIED: Self = Self(0);
}

impl fmt::Display for InterfaceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for InterfaceIndex {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unspecified() {
        assert_eq!(InterfaceIndex::default(), InterfaceIndex::UNSPECIFIED);
        assert_eq!(InterfaceIndex::UNSPECIFIED.0, 0);
    }

    #[test]
    fn display_prints_raw_index() {
        assert_eq!(InterfaceIndex(7).to_string(), "7");
        assert_eq!(InterfaceIndex::from(-1).to_string(), "-1");
    }
}
