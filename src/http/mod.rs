// src/http/mod.rs
// =============================================================================
// HTTP access for the whole crate.
//
// Everything that touches the network goes through the `Transport` trait, so
// the listing, header and rendering code can be tested without sockets:
// - transport: the trait and the reqwest-backed implementation
// - mock: an in-memory transport for unit tests
// =============================================================================

mod transport;

#[cfg(test)]
pub mod mock;

pub use transport::{ReqwestTransport, Transport};
