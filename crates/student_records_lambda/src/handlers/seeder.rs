use std::io::Write;

use tracing::info;

use crate::adapters::record_store::RecordStore;
use crate::adapters::secret_store::SecretStore;
use crate::error::{HandlerError, TableOperation};
use crate::handlers::secret_probe::fetch_secret_metadata;
use crate::runtime::config::FunctionConfig;
use crate::runtime::contract::SeedResponse;
use crate::runtime::record::seed_records;
use crate::runtime::report;

/// Writes the fixed seed records into the configured table.
///
/// The secret lookup is informational only. Unprocessed items are resubmitted
/// by the store; a failed batch write is fatal.
pub fn handle_seed(
    config: &FunctionConfig,
    record_store: &impl RecordStore,
    secret_store: &impl SecretStore,
    out: &mut dyn Write,
) -> Result<SeedResponse, HandlerError> {
    report::write_seeding_started(out)?;

    let metadata = fetch_secret_metadata(config.secret_ref.as_deref(), secret_store);
    report::write_seeder_secret_proof(out, &metadata)?;

    let records = seed_records();
    info!(
        event = "seed_started",
        table = %config.table_name,
        planned_records = records.len(),
        "writing seed records"
    );

    let records_written = record_store
        .put_batch(&config.table_name, &records)
        .map_err(|message| {
            HandlerError::table(TableOperation::BatchWrite, &config.table_name, message)
        })?;

    report::write_seeding_completed(out, records_written, &config.table_name)?;
    info!(
        event = "seed_completed",
        table = %config.table_name,
        records_written,
        "seed records written"
    );

    Ok(SeedResponse::new(config.table_name.clone(), records_written))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::record::{ScannedRecord, StudentRecord};
    use crate::test_helpers::{
        InMemoryRecordStore, StaticSecretStore, TEST_SECRET_ARN, TEST_TABLE,
    };

    fn config(secret_ref: Option<&str>) -> FunctionConfig {
        FunctionConfig {
            table_name: TEST_TABLE.to_string(),
            secret_ref: secret_ref.map(str::to_string),
        }
    }

    #[test]
    fn writes_three_seed_records() {
        let records = InMemoryRecordStore::new();
        let secrets = StaticSecretStore::with_payload(r#"{"api_key":"k"}"#);
        let mut out: Vec<u8> = Vec::new();

        let response = handle_seed(&config(Some(TEST_SECRET_ARN)), &records, &secrets, &mut out)
            .expect("seeding should succeed");

        assert_eq!(response.status_code, 200);
        assert_eq!(response.records_written, 3);
        assert_eq!(response.table, TEST_TABLE);
        assert_eq!(response.body, format!("Seeded 3 items into {TEST_TABLE}"));
        let expected: Vec<ScannedRecord> =
            seed_records().into_iter().map(ScannedRecord::from).collect();
        assert_eq!(records.records(TEST_TABLE), expected);

        let output = String::from_utf8(out).expect("output should be UTF-8");
        assert!(output.starts_with("Seeding DynamoDB table...\n"));
        assert!(output.contains("GetSecretValue succeeded (secret value not logged)."));
        assert!(output.contains("Secret JSON keys (sample): [api_key]"));
    }

    #[test]
    fn reseeding_overwrites_existing_ids() {
        let records = InMemoryRecordStore::with_records(
            TEST_TABLE,
            vec![StudentRecord::new(100, "Old", "Name", "XX", 99)],
        );
        let secrets = StaticSecretStore::failing("unused");
        let mut out: Vec<u8> = Vec::new();

        handle_seed(&config(None), &records, &secrets, &mut out).expect("seeding should succeed");

        let stored = records.records(TEST_TABLE);
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[0].full_name(), "Harry Styles");
        assert!(secrets.requests().is_empty());
    }

    #[test]
    fn secret_failure_is_reported_but_not_fatal() {
        let records = InMemoryRecordStore::new();
        let secrets = StaticSecretStore::failing("ResourceNotFoundException");
        let mut out: Vec<u8> = Vec::new();

        let response = handle_seed(&config(Some(TEST_SECRET_ARN)), &records, &secrets, &mut out)
            .expect("seeding should succeed");

        assert_eq!(response.records_written, 3);
        let output = String::from_utf8(out).expect("output should be UTF-8");
        assert!(output.contains("Secrets Manager: demo secret retrieval skipped/failed.\n"));
        assert!(output.contains("Details: ResourceNotFoundException\n"));
    }

    #[test]
    fn batch_write_failure_is_fatal() {
        let records = InMemoryRecordStore::failing_writes("ProvisionedThroughputExceededException");
        let secrets = StaticSecretStore::with_payload("{}");
        let mut out: Vec<u8> = Vec::new();

        let error = handle_seed(&config(None), &records, &secrets, &mut out)
            .expect_err("write failure should propagate");

        assert!(matches!(
            error,
            HandlerError::Table {
                operation: TableOperation::BatchWrite,
                ..
            }
        ));
        assert_eq!(
            error.to_string(),
            format!(
                "batch write on table '{TEST_TABLE}' failed: ProvisionedThroughputExceededException"
            )
        );
        let output = String::from_utf8(out).expect("output should be UTF-8");
        assert!(output.starts_with("Seeding DynamoDB table...\n"));
        assert!(!output.contains("Seeded"));
    }
}
