//! Lambda entry points that seed and read the student records table.
//!
//! DynamoDB and Secrets Manager sit behind small sync store traits, so the
//! handlers run unchanged against the in-memory stores in `test_helpers`.

pub mod adapters;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod runtime;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;
