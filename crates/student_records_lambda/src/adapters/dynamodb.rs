use std::collections::HashMap;
use std::str::FromStr;

use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{AttributeValue, PutRequest, WriteRequest};
use tracing::warn;

use crate::adapters::block_on;
use crate::adapters::record_store::RecordStore;
use crate::runtime::record::{
    ScannedRecord, StudentRecord, AGE_ATTR, DEPT_ATTR, FIRST_NAME_ATTR, LAST_NAME_ATTR,
    STUD_ID_ATTR,
};

/// Maximum number of write requests DynamoDB accepts in one `BatchWriteItem`.
pub const BATCH_WRITE_LIMIT: usize = 25;
/// Upper bound on `BatchWriteItem` calls per batch, counting resubmissions
/// of unprocessed items.
pub const MAX_BATCH_WRITE_ATTEMPTS: usize = 10;

pub type Item = HashMap<String, AttributeValue>;

#[derive(Debug, Clone)]
pub struct DynamoRecordStore {
    client: aws_sdk_dynamodb::Client,
}

impl DynamoRecordStore {
    pub fn new(client: aws_sdk_dynamodb::Client) -> Self {
        Self { client }
    }

    /// Sends one `BatchWriteItem` call and returns the requests DynamoDB left
    /// unprocessed for `table`.
    fn send_batch(
        &self,
        table: &str,
        requests: Vec<WriteRequest>,
    ) -> Result<Vec<WriteRequest>, String> {
        let output = block_on(
            self.client
                .batch_write_item()
                .request_items(table, requests)
                .send(),
        )
        .map_err(|error| {
            format!(
                "failed to batch write items: {}",
                DisplayErrorContext(&error)
            )
        })?;

        Ok(output
            .unprocessed_items()
            .and_then(|items| items.get(table))
            .cloned()
            .unwrap_or_default())
    }
}

impl RecordStore for DynamoRecordStore {
    fn put_batch(&self, table: &str, records: &[StudentRecord]) -> Result<usize, String> {
        for batch in write_batches(records)? {
            submit_until_processed(batch, |requests| self.send_batch(table, requests))?;
        }
        Ok(records.len())
    }

    fn scan(&self, table: &str) -> Result<Vec<ScannedRecord>, String> {
        let output = block_on(self.client.scan().table_name(table).send())
            .map_err(|error| format!("failed to scan table: {}", DisplayErrorContext(&error)))?;

        if output.last_evaluated_key().is_some() {
            warn!(
                event = "scan_truncated",
                table,
                items = output.items().len(),
                "scan returned more than one page; only the first page is read"
            );
        }

        Ok(output
            .items()
            .iter()
            .map(|item| {
                let (record, problems) = scanned_record_from_item(item);
                if !problems.is_empty() {
                    warn!(
                        event = "malformed_item",
                        table,
                        stud_id = record.stud_id,
                        problems = %problems.join("; "),
                        "scanned item has missing or mistyped attributes"
                    );
                }
                record
            })
            .collect())
    }
}

/// Splits records into `BatchWriteItem`-sized groups of put requests.
pub fn write_batches(records: &[StudentRecord]) -> Result<Vec<Vec<WriteRequest>>, String> {
    records
        .chunks(BATCH_WRITE_LIMIT)
        .map(|chunk| {
            chunk
                .iter()
                .map(write_request)
                .collect::<Result<Vec<_>, String>>()
        })
        .collect()
}

/// Sends `pending` and keeps resubmitting whatever comes back unprocessed.
///
/// Returns the number of calls made. A failed call ends the loop at once;
/// leftovers after [`MAX_BATCH_WRITE_ATTEMPTS`] calls are an error.
pub fn submit_until_processed(
    mut pending: Vec<WriteRequest>,
    mut send: impl FnMut(Vec<WriteRequest>) -> Result<Vec<WriteRequest>, String>,
) -> Result<usize, String> {
    for attempt in 1..=MAX_BATCH_WRITE_ATTEMPTS {
        pending = send(pending)?;
        if pending.is_empty() {
            return Ok(attempt);
        }
        warn!(
            event = "batch_write_unprocessed",
            attempt,
            unprocessed = pending.len(),
            "resubmitting unprocessed write requests"
        );
    }

    Err(format!(
        "{} write requests were still unprocessed after {MAX_BATCH_WRITE_ATTEMPTS} attempts",
        pending.len()
    ))
}

pub fn item_from_record(record: &StudentRecord) -> Item {
    HashMap::from([
        (
            STUD_ID_ATTR.to_string(),
            AttributeValue::N(record.stud_id.to_string()),
        ),
        (
            FIRST_NAME_ATTR.to_string(),
            AttributeValue::S(record.first_name.clone()),
        ),
        (
            LAST_NAME_ATTR.to_string(),
            AttributeValue::S(record.last_name.clone()),
        ),
        (DEPT_ATTR.to_string(), AttributeValue::S(record.dept.clone())),
        (AGE_ATTR.to_string(), AttributeValue::N(record.age.to_string())),
    ])
}

/// Decodes a scanned item field by field. Missing or mistyped attributes
/// become `None` and are described in the returned problem list.
pub fn scanned_record_from_item(item: &Item) -> (ScannedRecord, Vec<String>) {
    let mut problems = Vec::new();
    let record = ScannedRecord {
        stud_id: note(number_attr(item, STUD_ID_ATTR), &mut problems),
        first_name: note(string_attr(item, FIRST_NAME_ATTR), &mut problems),
        last_name: note(string_attr(item, LAST_NAME_ATTR), &mut problems),
        dept: note(string_attr(item, DEPT_ATTR), &mut problems),
        age: note(number_attr(item, AGE_ATTR), &mut problems),
    };
    (record, problems)
}

fn note<T>(decoded: Result<T, String>, problems: &mut Vec<String>) -> Option<T> {
    decoded.map_err(|problem| problems.push(problem)).ok()
}

fn write_request(record: &StudentRecord) -> Result<WriteRequest, String> {
    let put_request = PutRequest::builder()
        .set_item(Some(item_from_record(record)))
        .build()
        .map_err(|error| format!("failed to build put request: {error}"))?;
    Ok(WriteRequest::builder().put_request(put_request).build())
}

fn string_attr(item: &Item, name: &str) -> Result<String, String> {
    match item.get(name) {
        Some(AttributeValue::S(value)) => Ok(value.clone()),
        Some(_) => Err(format!("attribute '{name}' must be a string")),
        None => Err(format!("item is missing attribute '{name}'")),
    }
}

fn number_attr<T: FromStr>(item: &Item, name: &str) -> Result<T, String> {
    match item.get(name) {
        Some(AttributeValue::N(value)) => value
            .parse()
            .map_err(|_| format!("attribute '{name}' has unsupported number '{value}'")),
        Some(_) => Err(format!("attribute '{name}' must be a number")),
        None => Err(format!("item is missing attribute '{name}'")),
    }
}
