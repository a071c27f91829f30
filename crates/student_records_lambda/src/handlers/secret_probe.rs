use tracing::info;

use crate::adapters::secret_store::SecretStore;
use crate::runtime::secret::{SecretMetadata, SECRET_REFERENCE_UNSET_REASON};

/// Fetches a secret and reduces it to [`SecretMetadata`].
///
/// Never fails: an unset reference skips the store entirely and store errors
/// become a failed result.
pub fn fetch_secret_metadata(secret_ref: Option<&str>, store: &impl SecretStore) -> SecretMetadata {
    let metadata = match secret_ref {
        None => SecretMetadata::skipped(SECRET_REFERENCE_UNSET_REASON),
        Some(secret_id) => match store.get_secret_value(secret_id) {
            Ok(value) => SecretMetadata::from_secret_value(value),
            Err(error) => SecretMetadata::failed(error),
        },
    };

    info!(
        event = "secret_probe",
        retrieved = metadata.retrieved,
        arn = metadata.arn.as_deref(),
        keys_sampled = metadata.keys_present.len(),
        details = metadata.details(),
        "secret probe finished"
    );
    metadata
}
