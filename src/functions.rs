// Standard library
use std::net::Ipv4Addr;

// 3rd party crates
use serde_json::Value;

// Project imports
use crate::cli::Command;
use crate::errors::DdnsError;
use crate::providers::dnsimple::functions::{
    list_domains, resolve_account, update_a_record, whoami, zone_info, zone_record,
    zone_record_id, zone_records,
};
use crate::providers::dnsimple::types::DnsimpleClient;
use crate::settings::types::Settings;
use crate::utility::ip_resolver::types::IpResolver;

/// Executes one command against the provider API and returns the
/// document to print.
///
/// Every command runs the same way: build the client, resolve the
/// account where the command needs one, then perform the API calls
/// strictly in sequence.
pub async fn run(command: &Command, settings: &Settings) -> Result<Value, DdnsError> {
    let client: DnsimpleClient = DnsimpleClient::new(settings)?;

    match command {
        Command::Whoami => Ok(whoami(&client).await?),
        Command::Zones => {
            let account: String = resolve_account(&client, &settings.account.id).await?;
            Ok(list_domains(&client, &account).await?)
        }
        Command::ZoneInfo { zone } => {
            let account: String = resolve_account(&client, &settings.account.id).await?;
            Ok(zone_info(&client, &account, zone).await?)
        }
        Command::ZoneRecords { zone } => {
            let account: String = resolve_account(&client, &settings.account.id).await?;
            Ok(zone_records(&client, &account, zone).await?)
        }
        Command::ZoneRecord { zone, record } => {
            let account: String = resolve_account(&client, &settings.account.id).await?;
            Ok(zone_record(&client, &account, zone, record).await?)
        }
        Command::ZoneRecordId { zone, record } => {
            let account: String = resolve_account(&client, &settings.account.id).await?;
            Ok(zone_record_id(&client, &account, zone, record).await?)
        }
        Command::UpdateARecord { zone, record, ip } => {
            let account: String = resolve_account(&client, &settings.account.id).await?;
            let resolver: IpResolver = IpResolver::new()?;
            let address: Ipv4Addr = resolver.resolve(ip).await?;
            Ok(update_a_record(&client, &account, zone, record, &address).await?)
        }
    }
}
