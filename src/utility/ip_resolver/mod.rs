//! Public IP discovery.
//!
//! Discovery runs as an ordered chain of sources: DNS-based resolvers
//! first, then HTTP echo services. Each source either produces a
//! well-formed IPv4 address or is skipped; the chain order is fixed and
//! observable, and only a fully exhausted chain fails the run.

pub mod constants;
pub mod errors;
pub mod impls;
pub mod traits;
pub mod types;
