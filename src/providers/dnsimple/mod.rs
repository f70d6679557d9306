//! DNSimple-flavored provider API.
//!
//! Covers the identity, zone and record lookups the CLI exposes, and
//! the create-or-update flow that keeps an A record pointed at the
//! current public IP. Every operation performs exactly one request per
//! API call it names; there is no caching and no retry.

pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod types;
