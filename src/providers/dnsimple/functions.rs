// Standard library
use std::net::Ipv4Addr;

// 3rd party crates
use reqwest::Method;
use serde_json::{json, Value};
use tracing::{debug, error, info};

// Project imports
use crate::providers::traits::ApiTransport;

// Current module imports
use super::constants::{ACCOUNT_AUTO, ACCOUNT_WILDCARD};
use super::errors::DnsimpleError;

/// Fetches the identity behind the configured token.
pub async fn whoami(transport: &dyn ApiTransport) -> Result<Value, DnsimpleError> {
    transport.send(Method::GET, "whoami", None).await
}

/// Resolves the configured account id into a concrete one.
///
/// The "_" wildcard selects nothing and is a configuration error here;
/// "auto" asks the API who owns the token; anything else is passed
/// through untouched.
pub async fn resolve_account(
    transport: &dyn ApiTransport,
    account_id: &str,
) -> Result<String, DnsimpleError> {
    match account_id {
        ACCOUNT_WILDCARD => {
            error!("Account id is the '_' wildcard, a concrete id is required");
            Err(DnsimpleError::WildcardAccount)
        }
        ACCOUNT_AUTO => {
            let doc: Value = whoami(transport).await?;
            let id: u64 = doc["data"]["account"]["id"]
                .as_u64()
                .ok_or(DnsimpleError::MissingField("data.account.id"))?;
            debug!(account = id, "Resolved account id through whoami");
            Ok(id.to_string())
        }
        concrete => Ok(concrete.to_string()),
    }
}

/// Lists the domains under the account.
pub async fn list_domains(
    transport: &dyn ApiTransport,
    account: &str,
) -> Result<Value, DnsimpleError> {
    let path: String = format!("{}/domains", account);
    transport.send(Method::GET, &path, None).await
}

/// Fetches a single zone.
pub async fn zone_info(
    transport: &dyn ApiTransport,
    account: &str,
    zone: &str,
) -> Result<Value, DnsimpleError> {
    let path: String = format!("{}/zones/{}", account, zone);
    transport.send(Method::GET, &path, None).await
}

/// Lists every record in the zone.
pub async fn zone_records(
    transport: &dyn ApiTransport,
    account: &str,
    zone: &str,
) -> Result<Value, DnsimpleError> {
    let path: String = format!("{}/zones/{}/records", account, zone);
    transport.send(Method::GET, &path, None).await
}

/// Returns every record in the zone whose name matches exactly.
pub async fn zone_record(
    transport: &dyn ApiTransport,
    account: &str,
    zone: &str,
    name: &str,
) -> Result<Value, DnsimpleError> {
    let records: Vec<Value> = zone_record_list(transport, account, zone).await?;
    let matches: Vec<Value> = filter_records_by_name(&records, name)
        .into_iter()
        .cloned()
        .collect();
    Ok(Value::Array(matches))
}

/// Resolves the id of the first record matching `name`.
pub async fn zone_record_id(
    transport: &dyn ApiTransport,
    account: &str,
    zone: &str,
    name: &str,
) -> Result<Value, DnsimpleError> {
    match locate_record(transport, account, zone, name).await? {
        Some(id) => Ok(Value::from(id)),
        None => Err(DnsimpleError::RecordNotFound {
            zone: zone.to_string(),
            name: name.to_string(),
        }),
    }
}

/// Looks up the id of the record named `name`, if one exists.
///
/// The name is a de-facto unique key here: when several records share
/// it, the first in provider order wins.
pub async fn locate_record(
    transport: &dyn ApiTransport,
    account: &str,
    zone: &str,
    name: &str,
) -> Result<Option<u64>, DnsimpleError> {
    let records: Vec<Value> = zone_record_list(transport, account, zone).await?;
    match filter_records_by_name(&records, name).first() {
        Some(record) => {
            let id: u64 = record["id"]
                .as_u64()
                .ok_or(DnsimpleError::MissingField("data[].id"))?;
            debug!(zone = %zone, record = %name, id = id, "Found existing record");
            Ok(Some(id))
        }
        None => {
            debug!(zone = %zone, record = %name, "No existing record");
            Ok(None)
        }
    }
}

/// Creates or updates the A record for `record` in `zone`.
///
/// The zone's records are fetched first; an existing record with the
/// same name is updated in place, otherwise a new record is created.
/// Both writes carry the same document. A failed lookup aborts the run
/// before anything is written.
pub async fn update_a_record(
    transport: &dyn ApiTransport,
    account: &str,
    zone: &str,
    record: &str,
    ip: &Ipv4Addr,
) -> Result<Value, DnsimpleError> {
    let record_id: Option<u64> = locate_record(transport, account, zone, record).await?;

    let payload: Value = json!({
        "name": record,
        "type": "A",
        "content": ip.to_string(),
    });

    match record_id {
        Some(id) => {
            info!(
                zone = %zone,
                record = %record,
                id = id,
                "Updating existing A record to {}",
                ip
            );
            let path: String = format!("{}/zones/{}/records/{}", account, zone, id);
            transport.send(Method::PATCH, &path, Some(payload)).await
        }
        None => {
            info!(
                zone = %zone,
                record = %record,
                "Creating A record with IP {}",
                ip
            );
            let path: String = format!("{}/zones/{}/records", account, zone);
            transport.send(Method::POST, &path, Some(payload)).await
        }
    }
}

/// Fetches the zone's records and unwraps the data array.
async fn zone_record_list(
    transport: &dyn ApiTransport,
    account: &str,
    zone: &str,
) -> Result<Vec<Value>, DnsimpleError> {
    let doc: Value = zone_records(transport, account, zone).await?;
    match doc.get("data").and_then(Value::as_array) {
        Some(records) => Ok(records.clone()),
        None => Err(DnsimpleError::MissingField("data")),
    }
}

/// Returns the records whose name equals `name` exactly.
///
/// Matching is case sensitive; the empty name addresses the zone apex.
fn filter_records_by_name<'a>(records: &'a [Value], name: &str) -> Vec<&'a Value> {
    records
        .iter()
        .filter(|record| record["name"].as_str() == Some(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Value> {
        vec![
            json!({ "id": 1, "name": "www", "type": "A", "content": "198.51.100.1" }),
            json!({ "id": 2, "name": "WWW", "type": "A", "content": "198.51.100.2" }),
            json!({ "id": 3, "name": "www", "type": "TXT", "content": "v=spf1" }),
            json!({ "id": 4, "name": "", "type": "A", "content": "198.51.100.4" }),
        ]
    }

    #[test]
    fn name_filter_is_exact_and_case_sensitive() {
        let records = records();
        let matches = filter_records_by_name(&records, "www");
        let ids: Vec<u64> = matches.iter().map(|r| r["id"].as_u64().unwrap()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn empty_name_addresses_the_apex() {
        let records = records();
        let matches = filter_records_by_name(&records, "");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["id"], 4);
    }

    #[test]
    fn entries_without_a_name_never_match() {
        let records = vec![json!({ "id": 9 }), json!(42)];
        assert!(filter_records_by_name(&records, "www").is_empty());
        assert!(filter_records_by_name(&records, "").is_empty());
    }
}
