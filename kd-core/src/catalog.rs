use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kd_api::flow::v1alpha1::{
    JobFlow,
    JobTemplate,
};
use kube::CustomResourceExt;

use crate::descriptor::ResourceDescriptor;

// The custom resources this provider knows how to read; add new kinds here.
pub fn crds() -> Vec<CustomResourceDefinition> {
    vec![JobFlow::crd(), JobTemplate::crd()]
}

pub fn descriptors() -> anyhow::Result<Vec<ResourceDescriptor>> {
    let mut descriptors = vec![];
    for crd in crds() {
        descriptors.extend(ResourceDescriptor::from_crd(&crd)?);
    }
    Ok(descriptors)
}
