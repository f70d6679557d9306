//! Dynamic DNS client for DNSimple-style APIs.
//!
//! Keeps a zone's A record pointed at the machine's current public IPv4
//! address and exposes a handful of read-only lookups around it. The
//! update flow is a reconciliation: fetch the zone's records, decide
//! between create and update, then apply exactly one write.

pub mod cli;
pub mod errors;
pub mod functions;
pub mod providers;
pub mod settings;
pub mod utility;

pub use cli::{Cli, Command};
pub use errors::DdnsError;
pub use functions::run;
pub use settings::types::Settings;
