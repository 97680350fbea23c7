//! CustomResourceDefinition manifests for every kind this crate declares.

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::{CustomResourceExt, Resource};

use crate::{apis::apigatewayv2::v1alpha1::Route, error::Result, output::OutputFormat};

pub fn custom_resource_definitions() -> Vec<CustomResourceDefinition> {
    vec![with_list_kind::<Route>(Route::crd())]
}

/// The derive leaves `listKind` unset. Fill it with the `<Kind>List` name the
/// scheme registers.
fn with_list_kind<K>(mut crd: CustomResourceDefinition) -> CustomResourceDefinition
where
    K: Resource<DynamicType = ()>,
{
    if crd.spec.names.list_kind.is_none() {
        crd.spec.names.list_kind = Some(format!("{}List", K::kind(&())));
    }

    crd
}

pub fn render(crds: &[CustomResourceDefinition], format: OutputFormat) -> Result<String> {
    format.render(crds)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn route_crd() -> CustomResourceDefinition {
        custom_resource_definitions()
            .into_iter()
            .find(|crd| crd.spec.names.kind == "Route")
            .unwrap()
    }

    #[test]
    fn route_crd_identity() {
        let crd = route_crd();

        assert_eq!(
            crd.metadata.name.as_deref(),
            Some("routes.apigatewayv2.services.k8s.aws")
        );
        assert_eq!(crd.spec.group, "apigatewayv2.services.k8s.aws");
        assert_eq!(crd.spec.scope, "Namespaced");
        assert_eq!(crd.spec.names.plural, "routes");
        assert_eq!(crd.spec.names.list_kind.as_deref(), Some("RouteList"));
    }

    #[test]
    fn list_kind_matches_registered_list_type() {
        let crd = route_crd();

        let mut scheme = crate::scheme::Scheme::new();
        crate::apis::apigatewayv2::v1alpha1::add_to_scheme(&mut scheme).unwrap();

        let list_kind = crd.spec.names.list_kind.unwrap();
        assert!(scheme.recognizes(&kube::core::GroupVersionKind::gvk(
            &crd.spec.group,
            &crd.spec.versions[0].name,
            &list_kind,
        )));
    }

    #[test]
    fn v1alpha1はstatusサブリソースを持つ() {
        let crd = route_crd();

        assert_eq!(crd.spec.versions.len(), 1);

        let version = &crd.spec.versions[0];
        assert_eq!(version.name, "v1alpha1");
        assert!(version.served);
        assert!(version.storage);
        assert!(version
            .subresources
            .as_ref()
            .is_some_and(|s| s.status.is_some()));
    }

    #[test]
    fn schema_uses_wire_names() {
        let crd = route_crd();

        let schema = crd.spec.versions[0]
            .schema
            .as_ref()
            .and_then(|s| s.open_api_v3_schema.as_ref())
            .unwrap();
        let properties = schema.properties.as_ref().unwrap();

        let spec = properties["spec"].properties.as_ref().unwrap();
        for key in [
            "apiID",
            "apiKeyRequired",
            "authorizationScopes",
            "authorizationType",
            "authorizerID",
            "modelSelectionExpression",
            "operationName",
            "requestModels",
            "requestParameters",
            "routeKey",
            "routeResponseSelectionExpression",
            "target",
        ] {
            assert!(spec.contains_key(key), "spec is missing {key}");
        }

        let status = properties["status"].properties.as_ref().unwrap();
        for key in ["ackResourceMetadata", "conditions", "apiGatewayManaged", "routeID"] {
            assert!(status.contains_key(key), "status is missing {key}");
        }
    }

    #[test]
    fn renders_yaml_document() {
        let actual = render(&custom_resource_definitions(), OutputFormat::Yaml).unwrap();

        assert!(actual.starts_with("---\napiVersion: apiextensions.k8s.io/v1\nkind: CustomResourceDefinition\n"));
        assert_eq!(actual.matches("\n---\n").count(), 0);
    }
}
