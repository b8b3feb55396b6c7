//! Core types for the netq packet queue.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! identifiers and address encoding shared by the queue and its callers:
//! interface indices, the opaque remote-address codec, and its error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod addr;
pub mod error;
pub mod id;

pub use addr::EncodedAddr;
pub use error::AddrError;
pub use id::InterfaceIndex;
