// Standard library
use std::process;

// 3rd party crates
use clap::Parser;
use tracing::error;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project imports
use dnsimple_ddns::{run, Cli, DdnsError, Settings};

#[tokio::main]
async fn main() {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let cli: Cli = Cli::parse();

    let settings: Settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    // setup logging.
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(settings.log_level())
        .add_directive("hyper_util=error".parse().unwrap())
        .add_directive("reqwest=error".parse().unwrap())
        .add_directive("trust_dns_proto=error".parse().unwrap())
        .add_directive("hyper=error".parse().unwrap());

    // Logs go to stderr so stdout carries nothing but the result.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_level(true)
        .init();

    match run(&cli.command, &settings).await {
        Ok(document) => {
            println!("{:#}", document);
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

/// Assembles the settings: file and environment first, flags on top.
fn load_settings(cli: &Cli) -> Result<Settings, DdnsError> {
    let settings: Settings = Settings::load(cli.config.as_deref())?.with_overrides(
        cli.account_token.clone(),
        cli.account_id.clone(),
        cli.api.clone(),
    );
    settings.validate()?;
    Ok(settings)
}
