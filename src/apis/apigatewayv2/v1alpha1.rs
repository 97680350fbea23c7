mod route;
mod types;

pub use route::*;
pub use types::*;

use kube::core::GroupVersion;

use crate::{
    error::Result,
    scheme::{Scheme, SchemeBuilder},
};

pub const GROUP: &str = "apigatewayv2.services.k8s.aws";
pub const VERSION: &str = "v1alpha1";
pub const API_VERSION: &str = "apigatewayv2.services.k8s.aws/v1alpha1";

pub fn group_version() -> GroupVersion {
    GroupVersion::gv(GROUP, VERSION)
}

/// Registers every kind of this group version.
pub fn add_to_scheme(scheme: &mut Scheme) -> Result<()> {
    scheme.add_known_type::<Route>()?;
    scheme.add_known_list_type::<RouteList, Route>()?;

    Ok(())
}

pub fn scheme_builder() -> SchemeBuilder {
    SchemeBuilder::new().register(add_to_scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    use kube::Resource as _;
    use pretty_assertions::assert_eq;

    #[test]
    fn api_version_matches_derived_resource() {
        assert_eq!(group_version().api_version(), API_VERSION);
        assert_eq!(Route::api_version(&()), API_VERSION);
        assert_eq!(Route::group(&()), GROUP);
        assert_eq!(Route::version(&()), VERSION);
    }
}
