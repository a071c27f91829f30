use thiserror::Error;

pub const TABLE_ENV_VAR: &str = "DDB_TABLE";
pub const SECRET_ENV_VAR: &str = "SECRET_ARN";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be configured")]
    MissingVariable(&'static str),
}

/// Settings shared by the seeder and reader functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionConfig {
    pub table_name: String,
    pub secret_ref: Option<String>,
}

impl FunctionConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank values are treated the same as unset ones.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let table_name = read(TABLE_ENV_VAR).ok_or(ConfigError::MissingVariable(TABLE_ENV_VAR))?;

        Ok(Self {
            table_name,
            secret_ref: read(SECRET_ENV_VAR),
        })
    }
}
