use serde::{Deserialize, Serialize};

pub const STATUS_OK: u16 = 200;
pub const OWNER: &str = "Nisha";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
    pub records_written: usize,
    pub table: String,
}

impl SeedResponse {
    pub fn new(table: impl Into<String>, records_written: usize) -> Self {
        let table = table.into();
        Self {
            status_code: STATUS_OK,
            body: seeded_message(records_written, &table),
            records_written,
            table,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadSummary {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub owner: String,
    pub records_returned: usize,
    pub secret_retrieved: bool,
}

impl ReadSummary {
    pub fn new(records_returned: usize, secret_retrieved: bool) -> Self {
        Self {
            status_code: STATUS_OK,
            owner: OWNER.to_string(),
            records_returned,
            secret_retrieved,
        }
    }
}

pub fn seeded_message(records_written: usize, table: &str) -> String {
    format!("Seeded {records_written} items into {table}")
}
