//! Hand-written policies that are not part of the SAM policy template
//! catalogue.

use serde_json::json;

use crate::Factory;

impl Factory {
    /// Allows the IAM role to execute API invocations.
    pub fn add_execute_api(&mut self) {
        let policy = json!({
            "Action": "execute-api:Invoke",
            "Effect": "Allow",
            "Principal": "*",
            "Resource": "execute-api:/*",
        });
        self.push_fragment(policy.to_string());
    }

    /// Allows AWS Lambda to assume the role and use AWS services.
    pub fn add_assume_role_lambda(&mut self) {
        let policy = json!({
            "Action": "sts:AssumeRole",
            "Effect": "Allow",
            "Principal": { "Service": "lambda.amazonaws.com" },
        });
        self.push_fragment(policy.to_string());
    }
}

/// Returns the complete IAM policy document that allows the role to be
/// assumed by AWS Lambda. Independent of any factory configuration.
pub fn assume_role_lambda() -> &'static str {
    r#"{ "Version": "2012-10-17", "Statement": [ { "Action": "sts:AssumeRole", "Principal": { "Service": "lambda.amazonaws.com" }, "Effect": "Allow" } ] }"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn execute_api_carries_a_wildcard_principal() {
        let mut factory = Factory::new()
            .with_account_id("012345678901")
            .with_partition("aws")
            .with_region("us-west-2");
        factory.add_execute_api();
        let policy = factory.get_policy_statement().unwrap();
        let parsed: Value = serde_json::from_str(&policy).unwrap();
        let statement = &parsed["Statement"][0];
        assert_eq!(statement["Action"], "execute-api:Invoke");
        assert_eq!(statement["Principal"], "*");
        assert_eq!(statement["Resource"], "execute-api:/*");
    }

    #[test]
    fn assume_role_lambda_statement_has_no_resource() {
        let mut factory = Factory::new()
            .with_account_id("012345678901")
            .with_partition("aws")
            .with_region("us-west-2");
        factory.add_assume_role_lambda();
        let policy = factory.get_policy_statement().unwrap();
        let parsed: Value = serde_json::from_str(&policy).unwrap();
        let statement = &parsed["Statement"][0];
        assert_eq!(statement["Principal"]["Service"], "lambda.amazonaws.com");
        assert!(statement.get("Resource").is_none());
    }

    #[test]
    fn standalone_assume_role_document_is_valid_json() {
        let parsed: Value = serde_json::from_str(assume_role_lambda()).unwrap();
        assert_eq!(parsed["Version"], "2012-10-17");
        assert_eq!(parsed["Statement"][0]["Action"], "sts:AssumeRole");
    }
}
