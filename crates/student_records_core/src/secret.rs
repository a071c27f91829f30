//! Non-sensitive proof that a secret could be fetched.
//!
//! A [`SecretMetadata`] only ever carries the store reference, the version id
//! and a sample of top-level key names. Secret values never leave
//! [`SecretMetadata::from_secret_value`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SECRET_KEY_SAMPLE_LIMIT: usize = 5;
pub const SECRET_REFERENCE_UNSET_REASON: &str = "SECRET_ARN env var not set";
pub const SECRET_NOT_JSON_OBJECT_ERROR: &str = "secret payload is not a JSON object";

/// Raw result of a secret store lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretValue {
    pub secret_string: Option<String>,
    pub arn: Option<String>,
    pub version_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SecretMetadata {
    pub retrieved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys_present: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SecretMetadata {
    /// The lookup was not attempted.
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self {
            retrieved: false,
            arn: None,
            version_id: None,
            keys_present: Vec::new(),
            reason: Some(reason.into()),
            error: None,
        }
    }

    /// The lookup or payload parse failed.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            retrieved: false,
            arn: None,
            version_id: None,
            keys_present: Vec::new(),
            reason: None,
            error: Some(error.into()),
        }
    }

    /// Parses the payload as a JSON object and keeps up to
    /// [`SECRET_KEY_SAMPLE_LIMIT`] key names in document order.
    ///
    /// An absent or empty payload counts as `{}`.
    pub fn from_secret_value(value: SecretValue) -> Self {
        let payload = value
            .secret_string
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or("{}");

        // Parse errors are dropped; the failure message is always the fixed one.
        let Ok(Value::Object(object)) = serde_json::from_str::<Value>(payload) else {
            return Self::failed(SECRET_NOT_JSON_OBJECT_ERROR);
        };

        Self {
            retrieved: true,
            arn: value.arn,
            version_id: value.version_id,
            keys_present: object
                .keys()
                .take(SECRET_KEY_SAMPLE_LIMIT)
                .cloned()
                .collect(),
            reason: None,
            error: None,
        }
    }

    /// Why the lookup did not succeed, if it did not.
    pub fn details(&self) -> Option<&str> {
        self.error.as_deref().or(self.reason.as_deref())
    }
}
