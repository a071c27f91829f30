use serde_json::json;
use student_records_lambda::handlers::reader::handle_read;
use student_records_lambda::handlers::seeder::handle_seed;
use student_records_lambda::runtime::config::FunctionConfig;
use student_records_lambda::runtime::record::seed_records;
use student_records_lambda::test_helpers::{
    InMemoryRecordStore, StaticSecretStore, TEST_SECRET_ARN, TEST_TABLE,
};

fn config() -> FunctionConfig {
    FunctionConfig::from_lookup(|key| match key {
        "DDB_TABLE" => Some(TEST_TABLE.to_string()),
        "SECRET_ARN" => Some(TEST_SECRET_ARN.to_string()),
        _ => None,
    })
    .expect("config should load")
}

fn capture<T>(run: impl FnOnce(&mut Vec<u8>) -> T) -> (T, String) {
    let mut out: Vec<u8> = Vec::new();
    let result = run(&mut out);
    (
        result,
        String::from_utf8(out).expect("output should be UTF-8"),
    )
}

#[test]
fn seeded_records_are_read_back_with_matching_fields() {
    let config = config();
    let records = InMemoryRecordStore::new();
    let secrets = StaticSecretStore::with_payload(
        r#"{"username":"reader","password":"do-not-print","host":"db.internal"}"#,
    );

    let (seed, _) = capture(|out| handle_seed(&config, &records, &secrets, out));
    assert_eq!(seed.expect("seeding should succeed").records_written, 3);

    let (summary, output) = capture(|out| handle_read(&config, &records, &secrets, out));
    let summary = summary.expect("read should succeed");

    assert_eq!(
        serde_json::to_value(&summary).expect("summary should serialize"),
        json!({
            "statusCode": 200,
            "owner": "Nisha",
            "records_returned": 3,
            "secret_retrieved": true
        })
    );

    for record in seed_records() {
        let block = format!(
            "Student Id       : {}\nStudent Name     : {}\nDepartment       : {}\nAge              : {}\n",
            record.stud_id,
            record.full_name(),
            record.dept,
            record.age
        );
        assert!(output.contains(&block), "missing block for {}", record.stud_id);
    }
    assert_eq!(output.matches("Student Id       :").count(), 3);
    assert!(output.contains(&format!("Secret ARN       : {TEST_SECRET_ARN}\n")));
    assert!(output.contains("Secret JSON keys (sample): [username, password, host]\n"));
    assert!(!output.contains("do-not-print"));
    assert!(!output.contains("db.internal"));
}

#[test]
fn reader_survives_secret_store_outage() {
    let config = config();
    let records = InMemoryRecordStore::with_records(TEST_TABLE, seed_records());
    let secrets = StaticSecretStore::failing("dispatch failure: connection refused");

    let (summary, output) = capture(|out| handle_read(&config, &records, &secrets, out));
    let summary = summary.expect("read should succeed");

    assert_eq!(
        serde_json::to_value(&summary).expect("summary should serialize"),
        json!({
            "statusCode": 200,
            "owner": "Nisha",
            "records_returned": 3,
            "secret_retrieved": false
        })
    );
    assert!(output.contains("Secret retrieval failed: dispatch failure: connection refused\n"));
}
