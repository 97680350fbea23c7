mod condition;
mod resource_metadata;

pub use condition::*;
pub use resource_metadata::*;

/// AWS account identifier (12 digits).
pub type AwsAccountId = String;

/// AWS region name, e.g. `us-west-2`.
pub type AwsRegion = String;

/// Amazon Resource Name.
pub type AwsResourceName = String;
