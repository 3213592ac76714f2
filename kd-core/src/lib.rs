pub mod catalog;
pub mod config;
pub mod constants;
pub mod datasource;
pub mod descriptor;
pub mod diagnostics;
pub mod errors;
pub mod k8s;
pub mod logging;
pub mod provider;
pub mod record;
pub mod schema;

pub mod prelude {
    pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
    pub use kd_api::flow::v1alpha1::{
        JobFlow,
        JobTemplate,
    };
    pub use kube::api::DynamicObject;
    pub use kube::CustomResourceExt;

    pub use crate::constants::*;
    pub use crate::datasource::{
        DataSource,
        ResourceDataSource,
    };
    pub use crate::diagnostics::Diagnostics;
    pub use crate::errors::EmptyResult;
    pub use crate::k8s::GVK;
}
