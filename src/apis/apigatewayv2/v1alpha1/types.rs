use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Validation rules applied to a single request parameter of a route.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParameterConstraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl ParameterConstraints {
    pub fn required(required: bool) -> Self {
        Self {
            required: Some(required),
        }
    }
}
