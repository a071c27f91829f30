use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableOperation {
    BatchWrite,
    Scan,
}

impl fmt::Display for TableOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BatchWrite => f.write_str("batch write"),
            Self::Scan => f.write_str("scan"),
        }
    }
}

/// Fatal invocation errors. Secret store failures never end up here.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("{operation} on table '{table}' failed: {message}")]
    Table {
        operation: TableOperation,
        table: String,
        message: String,
    },
    #[error("failed to write report output: {0}")]
    Output(#[from] std::io::Error),
}

impl HandlerError {
    pub fn table(operation: TableOperation, table: &str, message: impl Into<String>) -> Self {
        Self::Table {
            operation,
            table: table.to_string(),
            message: message.into(),
        }
    }
}
