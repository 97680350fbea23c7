use std::collections::BTreeMap;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ListMeta;
use kube::{core::TypeMeta, CustomResource, Resource as _};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::apis::ack::v1alpha1::{self as ack, Condition, ResourceMetadata};

use super::ParameterConstraints;

/// RouteSpec defines the desired state of Route.
///
/// Every field is optional and omitted from the serialized form when unset,
/// so "not specified" stays distinguishable from a zero value.
#[derive(CustomResource, Debug, Default, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "apigatewayv2.services.k8s.aws",
    version = "v1alpha1",
    kind = "Route",
    plural = "routes",
    namespaced,
    status = "RouteStatus",
    derive = "Default",
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct RouteSpec {
    #[serde(rename = "apiID", skip_serializing_if = "Option::is_none")]
    pub api_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_required: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_scopes: Option<Vec<String>>,

    /// `NONE`, `AWS_IAM`, `CUSTOM` or `JWT`. Not validated here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_type: Option<String>,

    #[serde(rename = "authorizerID", skip_serializing_if = "Option::is_none")]
    pub authorizer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_selection_expression: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,

    /// Content type to model name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_models: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_parameters: Option<BTreeMap<String, ParameterConstraints>>,

    /// e.g. `GET /items` or `$default`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_response_selection_expression: Option<String>,

    /// e.g. `integrations/abc123`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// RouteStatus defines the observed state of Route. Only the reconciler
/// writes it.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteStatus {
    /// Sync state, account ownership and constructed ARN, common to all
    /// ACK-managed resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ack_resource_metadata: Option<ResourceMetadata>,

    /// Terminal and intermediate states of the resource and its backend
    /// AWS resource. `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub conditions: Vec<Condition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_gateway_managed: Option<bool>,

    #[serde(rename = "routeID", default, skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Condition>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Condition>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Route {
    pub fn conditions(&self) -> &[Condition] {
        self.status
            .as_ref()
            .map(|status| status.conditions.as_slice())
            .unwrap_or_default()
    }

    /// Creates an empty status when the resource has none yet.
    pub fn conditions_mut(&mut self) -> &mut Vec<Condition> {
        &mut self.status.get_or_insert_with(RouteStatus::default).conditions
    }

    pub fn route_id(&self) -> Option<&str> {
        self.status.as_ref()?.route_id.as_deref()
    }

    pub fn is_synced(&self) -> bool {
        ack::is_synced(self.conditions())
    }
}

/// RouteList contains a list of Route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteList {
    #[serde(flatten)]
    pub types: TypeMeta,

    #[serde(default)]
    pub metadata: ListMeta,

    #[serde(default)]
    pub items: Vec<Route>,
}

impl RouteList {
    pub fn new(items: Vec<Route>) -> Self {
        Self {
            types: TypeMeta {
                api_version: Route::api_version(&()).into_owned(),
                kind: format!("{}List", Route::kind(&())),
            },
            metadata: ListMeta::default(),
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for RouteList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FromIterator<Route> for RouteList {
    fn from_iter<T: IntoIterator<Item = Route>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
