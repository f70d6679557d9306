//! Application settings.
//!
//! Settings are assembled once at startup from an optional TOML file,
//! environment variables, and command-line flags, then passed around by
//! reference. Nothing mutates them after the merge.

pub mod constants;
pub mod errors;
pub mod impls;
pub mod types;
