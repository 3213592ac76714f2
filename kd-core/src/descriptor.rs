use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinition,
    JSONSchemaProps,
};
use kube::api::ApiResource;
use kube::CustomResourceExt;

use crate::errors::*;
use crate::k8s::GVK;
use crate::schema::{
    attribute_type_for,
    AttributeType,
    Schema,
};

err_impl! {DescriptorError,
    #[error("custom resource {0} is not namespaced")]
    ClusterScoped(String),

    #[error("custom resource {0} has no served versions")]
    NoServedVersions(String),
}

// Everything the generic data source needs to know about one Kind/Version: where to GET it from,
// the constants it reports for apiVersion/kind, and the schema generated from its CRD.
#[derive(Clone, Debug)]
pub struct ResourceDescriptor {
    gvk: GVK,
    plural: String,
    schema: Schema,
}

impl ResourceDescriptor {
    pub fn new(gvk: GVK, plural: &str, spec_props: Option<&JSONSchemaProps>) -> anyhow::Result<ResourceDescriptor> {
        let spec_type = match spec_props {
            Some(props) => attribute_type_for(props)?,
            None => AttributeType::Dynamic,
        };
        let schema = Schema::for_resource(&gvk.kind, &gvk.api_version(), spec_type);
        Ok(ResourceDescriptor { gvk, plural: plural.into(), schema })
    }

    // One descriptor per served version of the CRD
    pub fn from_crd(crd: &CustomResourceDefinition) -> anyhow::Result<Vec<ResourceDescriptor>> {
        let names = &crd.spec.names;
        if crd.spec.scope != "Namespaced" {
            return Err(DescriptorError::cluster_scoped(&names.kind));
        }

        let descriptors = crd
            .spec
            .versions
            .iter()
            .filter(|v| v.served)
            .map(|v| {
                let spec_props = v
                    .schema
                    .as_ref()
                    .and_then(|s| s.open_api_v3_schema.as_ref())
                    .and_then(|s| s.properties.as_ref())
                    .and_then(|p| p.get("spec"));
                let gvk = GVK::new(&crd.spec.group, &v.name, &names.kind);
                ResourceDescriptor::new(gvk, &names.plural, spec_props)
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        if descriptors.is_empty() {
            return Err(DescriptorError::no_served_versions(&names.kind));
        }
        Ok(descriptors)
    }

    pub fn for_custom_resource<K: CustomResourceExt>() -> anyhow::Result<Vec<ResourceDescriptor>> {
        ResourceDescriptor::from_crd(&K::crd())
    }

    pub fn gvk(&self) -> &GVK {
        &self.gvk
    }

    pub fn api_version(&self) -> String {
        self.gvk.api_version()
    }

    pub fn kind(&self) -> &str {
        &self.gvk.kind
    }

    pub fn plural(&self) -> &str {
        &self.plural
    }

    pub fn api_resource(&self) -> ApiResource {
        self.gvk.api_resource(&self.plural)
    }

    pub fn type_name_suffix(&self) -> String {
        self.gvk.type_name_suffix()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}
