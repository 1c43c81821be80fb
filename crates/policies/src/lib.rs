//! Pick from the AWS SAM policy templates to scope the permissions of your
//! Lambda functions to the resources used by your application.
//!
//! ```
//! use samkit_policies::Factory;
//!
//! let mut factory = Factory::new()
//!     .with_account_id("012345678901")
//!     .with_partition("aws")
//!     .with_region("us-west-2");
//! factory.add_athena_query_policy();
//! let policy = factory.get_policy_statement().unwrap();
//! assert!(policy.contains("athena:ListWorkGroups"));
//! ```

mod aws;
mod catalog;
mod template;

pub use aws::assume_role_lambda;
pub use catalog::TEMPLATES;
pub use template::PolicyTemplate;

use thiserror::Error;

/// Errors returned when the factory is finalized before it is fully
/// configured. Recoverable: set the missing field and finalize again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("factory is missing required variable accountID")]
    AccountIdMissing,

    #[error("factory is missing required variable region")]
    RegionMissing,

    #[error("factory is missing required variable partition")]
    PartitionMissing,
}

/// Factory accumulates policy statement fragments and finalizes them into a
/// single IAM policy document. One factory per logical policy; it is not
/// meant to be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Factory {
    fragments: Vec<String>,
    partition: String,
    region: String,
    account_id: String,
}

impl Factory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AWS partition and returns the factory for chaining. Later
    /// calls overwrite earlier ones.
    pub fn with_partition(mut self, partition: impl Into<String>) -> Self {
        self.partition = partition.into();
        self
    }

    /// Sets the AWS region and returns the factory for chaining.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Sets the AWS account ID and returns the factory for chaining. The
    /// value is not validated; whatever is set last is substituted verbatim.
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = account_id.into();
        self
    }

    pub(crate) fn append(&mut self, template: &PolicyTemplate, args: &[&str]) {
        self.fragments.push(template.render(args));
    }

    pub(crate) fn push_fragment(&mut self, fragment: String) {
        self.fragments.push(fragment);
    }

    /// Builds the IAM policy document from the fragments added so far,
    /// substituting the partition, region, and account ID. Fails on the
    /// first missing field: account ID is checked before region, region
    /// before partition.
    pub fn get_policy_statement(&self) -> Result<String, PolicyError> {
        if self.account_id.is_empty() {
            return Err(PolicyError::AccountIdMissing);
        }
        if self.region.is_empty() {
            return Err(PolicyError::RegionMissing);
        }
        if self.partition.is_empty() {
            return Err(PolicyError::PartitionMissing);
        }

        let statements = self.fragments.join(",");
        let document = format!(r#"{{ "Version": "2012-10-17", "Statement": [ {statements} ] }}"#);
        let document = document.replace("${AWS::Partition}", &self.partition);
        let document = document.replace("${AWS::Region}", &self.region);
        let document = document.replace("${AWS::AccountId}", &self.account_id);
        Ok(document)
    }
}
