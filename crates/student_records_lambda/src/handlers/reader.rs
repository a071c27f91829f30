use std::io::Write;

use tracing::info;

use crate::adapters::record_store::RecordStore;
use crate::adapters::secret_store::SecretStore;
use crate::error::{HandlerError, TableOperation};
use crate::handlers::secret_probe::fetch_secret_metadata;
use crate::runtime::config::FunctionConfig;
use crate::runtime::contract::ReadSummary;
use crate::runtime::report;

/// Proves secret access, then prints every record from a single scan page.
///
/// Records are printed in the order the store returns them. Only table
/// errors abort the invocation.
pub fn handle_read(
    config: &FunctionConfig,
    record_store: &impl RecordStore,
    secret_store: &impl SecretStore,
    out: &mut dyn Write,
) -> Result<ReadSummary, HandlerError> {
    report::write_reader_banner(out)?;

    let metadata = fetch_secret_metadata(config.secret_ref.as_deref(), secret_store);
    report::write_reader_secret_proof(out, &metadata)?;

    let records = record_store
        .scan(&config.table_name)
        .map_err(|message| HandlerError::table(TableOperation::Scan, &config.table_name, message))?;
    info!(
        event = "scan_completed",
        table = %config.table_name,
        records_returned = records.len(),
        "table scan finished"
    );

    report::write_student_header(out)?;
    for record in &records {
        report::write_student_block(out, record)?;
    }
    report::write_completion(out)?;

    Ok(ReadSummary::new(records.len(), metadata.retrieved))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::record::{seed_records, ScannedRecord, StudentRecord};
    use crate::runtime::report::SEPARATOR;
    use crate::test_helpers::{
        InMemoryRecordStore, StaticSecretStore, TEST_SECRET_ARN, TEST_TABLE,
    };

    fn config(secret_ref: Option<&str>) -> FunctionConfig {
        FunctionConfig {
            table_name: TEST_TABLE.to_string(),
            secret_ref: secret_ref.map(str::to_string),
        }
    }

    fn run(
        config: &FunctionConfig,
        records: &InMemoryRecordStore,
        secrets: &StaticSecretStore,
    ) -> (Result<ReadSummary, HandlerError>, String) {
        let mut out: Vec<u8> = Vec::new();
        let result = handle_read(config, records, secrets, &mut out);
        (
            result,
            String::from_utf8(out).expect("output should be UTF-8"),
        )
    }

    #[test]
    fn prints_one_block_per_record_in_scan_order() {
        let stored = vec![
            StudentRecord::new(300, "Pete", "Davidson", "EE", 25),
            StudentRecord::new(100, "Harry", "Styles", "IT", 28),
        ];
        let records = InMemoryRecordStore::with_records(TEST_TABLE, stored);
        let secrets = StaticSecretStore::with_payload(r#"{"token":"abc"}"#);

        let (result, output) = run(&config(Some(TEST_SECRET_ARN)), &records, &secrets);

        let summary = result.expect("read should succeed");
        assert_eq!(summary, ReadSummary::new(2, true));
        let pete = output.find("Student Name     : Pete Davidson").expect("pete block");
        let harry = output.find("Student Name     : Harry Styles").expect("harry block");
        assert!(pete < harry);
        assert!(output.ends_with("Invocation completed successfully.\n"));
    }

    #[test]
    fn empty_table_prints_no_record_blocks() {
        let records = InMemoryRecordStore::new();
        let secrets = StaticSecretStore::with_payload("{}");

        let (result, output) = run(&config(None), &records, &secrets);

        let summary = result.expect("read should succeed");
        assert_eq!(summary.records_returned, 0);
        assert!(!summary.secret_retrieved);
        assert!(!output.contains("Student Id"));
        let after_header = output
            .split("------------ STUDENT DETAILS -----------\n")
            .nth(1)
            .expect("student header should be printed");
        assert_eq!(after_header, "Invocation completed successfully.\n");
    }

    #[test]
    fn incomplete_items_are_counted_and_printed_with_none() {
        let mut stored: Vec<ScannedRecord> =
            seed_records().into_iter().map(ScannedRecord::from).collect();
        stored.push(ScannedRecord {
            stud_id: Some(400),
            first_name: Some("Ann".to_string()),
            last_name: Some("Lee".to_string()),
            dept: None,
            age: Some(31),
        });
        let records = InMemoryRecordStore::with_scanned_records(TEST_TABLE, stored);
        let secrets = StaticSecretStore::with_payload("{}");

        let (result, output) = run(&config(Some(TEST_SECRET_ARN)), &records, &secrets);

        let summary = result.expect("read should succeed");
        assert_eq!(summary, ReadSummary::new(4, true));
        assert!(output.contains(
            "Student Id       : 400\n\
             Student Name     : Ann Lee\n\
             Department       : None\n\
             Age              : 31\n"
        ));
    }

    #[test]
    fn secret_failure_still_returns_ok_summary() {
        let records = InMemoryRecordStore::with_records(TEST_TABLE, seed_records());
        let secrets = StaticSecretStore::failing("AccessDeniedException");

        let (result, output) = run(&config(Some(TEST_SECRET_ARN)), &records, &secrets);

        let summary = result.expect("read should succeed");
        assert_eq!(summary.status_code, 200);
        assert_eq!(summary.records_returned, 3);
        assert!(!summary.secret_retrieved);
        assert!(output.contains("Secret retrieval failed: AccessDeniedException\n"));
    }

    #[test]
    fn unset_secret_reference_is_reported_as_skipped() {
        let records = InMemoryRecordStore::new();
        let secrets = StaticSecretStore::with_payload("{}");

        let (result, output) = run(&config(None), &records, &secrets);

        assert!(!result.expect("read should succeed").secret_retrieved);
        assert!(output.contains("Secret retrieval skipped: SECRET_ARN env var not set\n"));
        assert!(secrets.requests().is_empty());
    }

    #[test]
    fn scan_failure_is_fatal_after_banner() {
        let records = InMemoryRecordStore::failing_scans("ResourceNotFoundException");
        let secrets = StaticSecretStore::with_payload("{}");

        let (result, output) = run(&config(None), &records, &secrets);

        let error = result.expect_err("scan failure should propagate");
        assert!(matches!(
            error,
            HandlerError::Table {
                operation: TableOperation::Scan,
                ..
            }
        ));
        assert!(output.starts_with(SEPARATOR));
        assert!(!output.contains("STUDENT DETAILS"));
    }
}
