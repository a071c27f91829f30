pub use student_records_core::{config, contract, record, report, secret};
