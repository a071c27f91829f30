use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use student_records_lambda::adapters::dynamodb::DynamoRecordStore;
use student_records_lambda::adapters::secrets_manager::SecretsManagerStore;
use student_records_lambda::handlers::reader::handle_read;
use student_records_lambda::logging::init_tracing;
use student_records_lambda::runtime::config::FunctionConfig;
use student_records_lambda::runtime::contract::ReadSummary;

struct RuntimeDependencies {
    config: FunctionConfig,
    record_store: DynamoRecordStore,
    secret_store: SecretsManagerStore,
}

async fn handle_request(
    _event: LambdaEvent<Value>,
    deps: &RuntimeDependencies,
) -> Result<ReadSummary, Error> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = handle_read(&deps.config, &deps.record_store, &deps.secret_store, &mut out)?;
    Ok(summary)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    // Fails the init phase before any client exists when DDB_TABLE is missing.
    let config = FunctionConfig::from_env()?;
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let deps = RuntimeDependencies {
        config,
        record_store: DynamoRecordStore::new(aws_sdk_dynamodb::Client::new(&aws_config)),
        secret_store: SecretsManagerStore::new(aws_sdk_secretsmanager::Client::new(&aws_config)),
    };

    lambda_runtime::run(service_fn(|event| handle_request(event, &deps))).await
}
