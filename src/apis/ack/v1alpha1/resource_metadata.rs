use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{AwsAccountId, AwsRegion, AwsResourceName};

/// Bookkeeping common to every ACK-managed resource: the ARN of the backend
/// resource, the account that owns it and the region it lives in.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResourceMetadata {
    /// Set once the backend resource exists. Resources without an ARN in the
    /// service API never populate it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<AwsResourceName>,

    #[serde(
        rename = "ownerAccountID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub owner_account_id: Option<AwsAccountId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<AwsRegion>,
}

impl ResourceMetadata {
    pub fn new(owner_account_id: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            arn: None,
            owner_account_id: Some(owner_account_id.into()),
            region: Some(region.into()),
        }
    }

    pub fn with_arn(mut self, arn: impl Into<String>) -> Self {
        self.arn = Some(arn.into());
        self
    }
}
