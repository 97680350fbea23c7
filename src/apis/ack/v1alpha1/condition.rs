use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Kinds of condition an ACK reconciler reports on a resource.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum ConditionType {
    /// The resource was adopted from an existing backend resource.
    #[serde(rename = "ACK.Adopted")]
    #[strum(serialize = "ACK.Adopted")]
    Adopted,

    /// The backend resource matches the desired state.
    #[serde(rename = "ACK.ResourceSynced")]
    #[strum(serialize = "ACK.ResourceSynced")]
    ResourceSynced,

    /// Reconciliation cannot make progress without a change to the spec.
    #[serde(rename = "ACK.Terminal")]
    #[strum(serialize = "ACK.Terminal")]
    Terminal,

    #[serde(rename = "ACK.Recoverable")]
    #[strum(serialize = "ACK.Recoverable")]
    Recoverable,

    #[serde(rename = "ACK.Advisory")]
    #[strum(serialize = "ACK.Advisory")]
    Advisory,

    #[serde(rename = "ACK.LateInitialized")]
    #[strum(serialize = "ACK.LateInitialized")]
    LateInitialized,

    #[serde(rename = "ACK.ReferencesResolved")]
    #[strum(serialize = "ACK.ReferencesResolved")]
    ReferencesResolved,
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
)]
pub enum ConditionStatus {
    True,
    False,
    #[default]
    Unknown,
}

impl From<bool> for ConditionStatus {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

/// A single status entry describing a terminal or intermediate state of the
/// resource and of its backend AWS resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: ConditionType,

    pub status: ConditionStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<Time>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Condition {
    pub fn new(type_: ConditionType, status: impl Into<ConditionStatus>) -> Self {
        Self {
            type_,
            status: status.into(),
            last_transition_time: None,
            reason: None,
            message: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_last_transition_time(mut self, time: Time) -> Self {
        self.last_transition_time = Some(time);
        self
    }

    pub fn is_true(&self) -> bool {
        self.status == ConditionStatus::True
    }
}

pub fn find_condition(conditions: &[Condition], type_: ConditionType) -> Option<&Condition> {
    conditions.iter().find(|c| c.type_ == type_)
}

/// Replaces the condition of the same type in place, or appends it when the
/// type is not present yet.
pub fn set_condition(conditions: &mut Vec<Condition>, condition: Condition) {
    match conditions.iter_mut().find(|c| c.type_ == condition.type_) {
        Some(existing) => *existing = condition,
        None => conditions.push(condition),
    }
}

/// Returns the removed condition, if any.
pub fn remove_condition(
    conditions: &mut Vec<Condition>,
    type_: ConditionType,
) -> Option<Condition> {
    let index = conditions.iter().position(|c| c.type_ == type_)?;
    Some(conditions.remove(index))
}

pub fn is_synced(conditions: &[Condition]) -> bool {
    find_condition(conditions, ConditionType::ResourceSynced).is_some_and(Condition::is_true)
}

pub fn is_terminal(conditions: &[Condition]) -> bool {
    find_condition(conditions, ConditionType::Terminal).is_some_and(Condition::is_true)
}
