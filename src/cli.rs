// Standard library
use std::path::PathBuf;

// 3rd party crates
use clap::{Parser, Subcommand};

/// Command-line interface.
///
/// Flags are the highest-precedence configuration source; each one
/// falls back to its environment variable and then to the
/// configuration file.
#[derive(Debug, Parser)]
#[command(name = "dnsimple-ddns")]
#[command(about = "Keeps a DNS A record pointed at this machine's public IP")]
pub struct Cli {
    /// API account token (falls back to DNSIMPLE_ACCOUNT_TOKEN)
    #[arg(long, global = true)]
    pub account_token: Option<String>,

    /// Account id: a concrete id or "auto" (falls back to DNSIMPLE_ACCOUNT_ID)
    #[arg(long, global = true)]
    pub account_id: Option<String>,

    /// Base URL of the provider API (falls back to DNSIMPLE_API)
    #[arg(long, global = true)]
    pub api: Option<String>,

    /// Path to the configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
#[command(rename_all = "snake_case")]
pub enum Command {
    /// Show the identity behind the configured token
    Whoami,

    /// List the domains under the account
    Zones,

    /// Show one zone
    ZoneInfo {
        /// Zone name
        #[arg(short, long)]
        zone: String,
    },

    /// List every record in a zone
    ZoneRecords {
        /// Zone name
        #[arg(short, long)]
        zone: String,
    },

    /// Show the records matching a name within a zone
    ZoneRecord {
        /// Zone name
        #[arg(short, long)]
        zone: String,

        /// Record name; empty addresses the zone apex
        #[arg(short, long)]
        record: String,
    },

    /// Show the id of the first record matching a name
    ZoneRecordId {
        /// Zone name
        #[arg(short, long)]
        zone: String,

        /// Record name; empty addresses the zone apex
        #[arg(short, long)]
        record: String,
    },

    /// Create or update the A record for a name in a zone
    UpdateARecord {
        /// Zone name
        #[arg(short, long)]
        zone: String,

        /// Record name; empty addresses the zone apex
        #[arg(short, long)]
        record: String,

        /// IPv4 address to write, or "auto" to discover it
        #[arg(short, long, default_value = "auto")]
        ip: String,
    },
}
