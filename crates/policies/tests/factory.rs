use samkit_policies::{Factory, PolicyError};
use serde_json::Value;

fn configured() -> Factory {
    Factory::new()
        .with_account_id("012345678901")
        .with_partition("aws")
        .with_region("us-west-2")
}

#[test]
fn athena_policy_document_round_trip() {
    let mut factory = configured();
    factory.add_athena_query_policy();

    let policy = factory.get_policy_statement().unwrap();
    let parsed: Value = serde_json::from_str(&policy).unwrap();

    assert_eq!(parsed["Version"], "2012-10-17");
    let statements = parsed["Statement"].as_array().unwrap();
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0]["Effect"], "Allow");
    assert_eq!(statements[0]["Resource"], "*");
    assert_eq!(statements[0]["Action"][0], "athena:ListWorkGroups");
    assert!(!policy.contains("${"));
}

#[test]
fn statement_order_follows_call_order() {
    let mut factory = configured();
    factory.add_lambda_invoke_policy("ingest");
    factory.add_sqs_send_message_policy("orders");
    factory.add_lambda_invoke_policy("publish");

    let policy = factory.get_policy_statement().unwrap();
    let parsed: Value = serde_json::from_str(&policy).unwrap();
    let statements = parsed["Statement"].as_array().unwrap();

    assert_eq!(statements.len(), 3);
    assert!(statements[0]["Resource"]
        .as_str()
        .unwrap()
        .contains("function:ingest*"));
    assert!(statements[1]["Resource"].as_str().unwrap().ends_with(":orders"));
    assert!(statements[2]["Resource"]
        .as_str()
        .unwrap()
        .contains("function:publish*"));
}

#[test]
fn parameters_stay_inside_their_own_fragment() {
    let mut factory = configured();
    factory.add_dynamo_db_read_policy("accounts");
    factory.add_dynamo_db_read_policy("sessions");

    let policy = factory.get_policy_statement().unwrap();
    let parsed: Value = serde_json::from_str(&policy).unwrap();
    let statements = parsed["Statement"].as_array().unwrap();

    let first = serde_json::to_string(&statements[0]).unwrap();
    let second = serde_json::to_string(&statements[1]).unwrap();
    assert!(first.contains("accounts") && !first.contains("sessions"));
    assert!(second.contains("sessions") && !second.contains("accounts"));
}

#[test]
fn multi_parameter_operation_substitutes_every_argument() {
    let mut factory = configured();
    factory.add_dynamo_db_stream_read_policy("shard-stream", "accounts");

    let policy = factory.get_policy_statement().unwrap();
    let parsed: Value = serde_json::from_str(&policy).unwrap();
    let resource = parsed["Statement"][0]["Resource"].as_str().unwrap();
    assert!(resource.ends_with("table/accounts/stream/shard-stream"));
}

#[test]
fn placeholders_are_substituted_globally() {
    let mut factory = configured();
    factory.add_kms_decrypt_policy("key-1");
    factory.add_kms_encrypt_policy("key-2");

    let policy = factory.get_policy_statement().unwrap();
    assert!(!policy.contains("${AWS::Partition}"));
    assert!(!policy.contains("${AWS::Region}"));
    assert!(!policy.contains("${AWS::AccountId}"));
    assert!(policy.contains("arn:aws:kms:us-west-2:012345678901:key/key-1"));
    assert!(policy.contains("arn:aws:kms:us-west-2:012345678901:key/key-2"));
}

#[test]
fn duplicate_operation_calls_append_duplicate_statements() {
    let mut factory = configured();
    factory.add_athena_query_policy();
    factory.add_athena_query_policy();

    let policy = factory.get_policy_statement().unwrap();
    let parsed: Value = serde_json::from_str(&policy).unwrap();
    assert_eq!(parsed["Statement"].as_array().unwrap().len(), 2);
}

#[test]
fn missing_account_id_is_reported_before_other_fields() {
    let mut factory = Factory::new().with_partition("aws").with_region("us-west-2");
    factory.add_athena_query_policy();
    assert_eq!(
        factory.get_policy_statement().unwrap_err(),
        PolicyError::AccountIdMissing
    );
}

#[test]
fn merged_s3_full_access_template_is_a_single_valid_statement() {
    let mut factory = configured();
    factory.add_s3_full_access_policy("assets");

    let policy = factory.get_policy_statement().unwrap();
    let parsed: Value = serde_json::from_str(&policy).unwrap();
    let statements = parsed["Statement"].as_array().unwrap();
    assert_eq!(statements.len(), 1);

    let actions = statements[0]["Action"].as_array().unwrap();
    assert!(actions.iter().any(|action| action == "s3:DeleteObject"));
    assert!(actions.iter().any(|action| action == "s3:ListBucket"));

    let resources = statements[0]["Resource"].as_array().unwrap();
    assert_eq!(resources.len(), 2);
    assert!(resources.iter().any(|r| r == "arn:aws:s3:::assets/*"));
    assert!(resources.iter().any(|r| r == "arn:aws:s3:::assets"));
}
