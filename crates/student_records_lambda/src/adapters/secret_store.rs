use crate::runtime::secret::SecretValue;

pub trait SecretStore {
    fn get_secret_value(&self, secret_id: &str) -> Result<SecretValue, String>;
}
