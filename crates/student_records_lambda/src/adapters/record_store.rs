use crate::runtime::record::{ScannedRecord, StudentRecord};

pub trait RecordStore {
    /// Writes every record into `table`, replacing items with the same id.
    /// Returns the number of records written.
    fn put_batch(&self, table: &str, records: &[StudentRecord]) -> Result<usize, String>;

    /// Returns the first page of records in store order. Items with missing
    /// or mistyped attributes are still returned, with those fields empty.
    fn scan(&self, table: &str) -> Result<Vec<ScannedRecord>, String>;
}
