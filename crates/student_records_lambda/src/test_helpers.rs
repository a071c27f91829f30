//! In-memory store doubles for handler tests.
//!
//! These stand in for DynamoDB and Secrets Manager so the handlers can be
//! exercised without AWS credentials or a tokio runtime.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::adapters::record_store::RecordStore;
use crate::adapters::secret_store::SecretStore;
use crate::runtime::record::{ScannedRecord, StudentRecord};
use crate::runtime::secret::SecretValue;

pub const TEST_TABLE: &str = "students-test";
pub const TEST_SECRET_ARN: &str =
    "arn:aws:secretsmanager:us-east-1:123456789012:secret:student-demo-AbCdEf";

/// Table store keeping records per table in first-insertion order.
///
/// Writing a record whose id already exists replaces it in place.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    tables: Mutex<BTreeMap<String, Vec<ScannedRecord>>>,
    write_error: Option<String>,
    scan_error: Option<String>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(table: &str, records: Vec<StudentRecord>) -> Self {
        Self::with_scanned_records(table, records.into_iter().map(ScannedRecord::from).collect())
    }

    /// Seeds raw table contents, including items the seeder would never write.
    pub fn with_scanned_records(table: &str, records: Vec<ScannedRecord>) -> Self {
        let store = Self::new();
        store
            .tables
            .lock()
            .expect("poisoned mutex")
            .insert(table.to_string(), records);
        store
    }

    pub fn failing_writes(message: impl Into<String>) -> Self {
        Self {
            write_error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn failing_scans(message: impl Into<String>) -> Self {
        Self {
            scan_error: Some(message.into()),
            ..Self::default()
        }
    }

    /// # Panics
    ///
    /// Panics if a previous store call panicked while holding the lock.
    pub fn records(&self, table: &str) -> Vec<ScannedRecord> {
        self.tables
            .lock()
            .expect("poisoned mutex")
            .get(table)
            .cloned()
            .unwrap_or_default()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn put_batch(&self, table: &str, records: &[StudentRecord]) -> Result<usize, String> {
        if let Some(message) = &self.write_error {
            return Err(message.clone());
        }

        let mut tables = self.tables.lock().expect("poisoned mutex");
        let stored = tables.entry(table.to_string()).or_default();
        for record in records {
            match stored
                .iter_mut()
                .find(|existing| existing.stud_id == Some(record.stud_id))
            {
                Some(existing) => *existing = ScannedRecord::from(record.clone()),
                None => stored.push(ScannedRecord::from(record.clone())),
            }
        }
        Ok(records.len())
    }

    fn scan(&self, table: &str) -> Result<Vec<ScannedRecord>, String> {
        if let Some(message) = &self.scan_error {
            return Err(message.clone());
        }
        Ok(self.records(table))
    }
}

/// Secret store returning one fixed response and recording requested ids.
#[derive(Debug)]
pub struct StaticSecretStore {
    response: Result<SecretValue, String>,
    requests: Mutex<Vec<String>>,
}

impl StaticSecretStore {
    pub fn with_payload(payload: &str) -> Self {
        Self::with_value(SecretValue {
            secret_string: Some(payload.to_string()),
            arn: Some(TEST_SECRET_ARN.to_string()),
            version_id: Some("EXAMPLE1-90ab-cdef-fedc-ba987EXAMPLE".to_string()),
        })
    }

    pub fn with_value(value: SecretValue) -> Self {
        Self {
            response: Ok(value),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// # Panics
    ///
    /// Panics if a previous store call panicked while holding the lock.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("poisoned mutex").clone()
    }
}

impl SecretStore for StaticSecretStore {
    fn get_secret_value(&self, secret_id: &str) -> Result<SecretValue, String> {
        self.requests
            .lock()
            .expect("poisoned mutex")
            .push(secret_id.to_string());
        self.response.clone()
    }
}
