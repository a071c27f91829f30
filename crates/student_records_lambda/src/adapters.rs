pub mod dynamodb;
pub mod record_store;
pub mod secret_store;
pub mod secrets_manager;

use std::future::Future;

/// Drives an SDK future to completion from synchronous adapter code.
///
/// Must be called from within a multi-threaded tokio runtime.
pub(crate) fn block_on<F: Future>(future: F) -> F::Output {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
