use aws_sdk_secretsmanager::error::DisplayErrorContext;

use crate::adapters::block_on;
use crate::adapters::secret_store::SecretStore;
use crate::runtime::secret::SecretValue;

#[derive(Debug, Clone)]
pub struct SecretsManagerStore {
    client: aws_sdk_secretsmanager::Client,
}

impl SecretsManagerStore {
    pub fn new(client: aws_sdk_secretsmanager::Client) -> Self {
        Self { client }
    }
}

impl SecretStore for SecretsManagerStore {
    fn get_secret_value(&self, secret_id: &str) -> Result<SecretValue, String> {
        let output = block_on(self.client.get_secret_value().secret_id(secret_id).send())
            .map_err(|error| {
                format!(
                    "failed to get secret value: {}",
                    DisplayErrorContext(&error)
                )
            })?;

        Ok(SecretValue {
            secret_string: output.secret_string().map(str::to_string),
            arn: output.arn().map(str::to_string),
            version_id: output.version_id().map(str::to_string),
        })
    }
}
