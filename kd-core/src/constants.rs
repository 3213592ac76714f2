use lazy_static::lazy_static;

use crate::k8s::GVK;

pub const DEFAULT_PROVIDER_TYPE_NAME: &str = "kubedata";

// Top-level attribute names
pub const ID_ATTR: &str = "id";
pub const API_VERSION_ATTR: &str = "api_version";
pub const KIND_ATTR: &str = "kind";
pub const METADATA_ATTR: &str = "metadata";
pub const SPEC_ATTR: &str = "spec";

// Metadata attribute names
pub const NAME_ATTR: &str = "name";
pub const NAMESPACE_ATTR: &str = "namespace";
pub const LABELS_ATTR: &str = "labels";
pub const ANNOTATIONS_ATTR: &str = "annotations";

// Diagnostic summaries
pub const UNEXPECTED_PROVIDER_DATA_SUMMARY: &str = "Unexpected Data Source Configure Type";
pub const OFFLINE_SUMMARY: &str = "Provider in Offline Mode";
pub const UNCONFIGURED_SUMMARY: &str = "Unconfigured Data Source";
pub const INVALID_CONFIG_SUMMARY: &str = "Invalid Data Source Configuration";
pub const GET_FAILED_SUMMARY: &str = "Unable to GET resource";
pub const MARSHAL_FAILED_SUMMARY: &str = "Unable to marshal response";
pub const UNMARSHAL_FAILED_SUMMARY: &str = "Unable to unmarshal resource";

pub const OFFLINE_DETAIL: &str = "This data source requires a live connection to a Kubernetes cluster, \
    but the provider is configured in offline mode. Disable offline mode to read this data source.";

// Flow (Volcano) kinds
pub const JOB_TEMPLATE_KIND: &str = "JobTemplate";
pub const JOB_FLOW_KIND: &str = "JobFlow";

lazy_static! {
    pub static ref JOB_TEMPLATE_GVK: GVK = GVK::new("flow.volcano.sh", "v1alpha1", JOB_TEMPLATE_KIND);
    pub static ref JOB_FLOW_GVK: GVK = GVK::new("flow.volcano.sh", "v1alpha1", JOB_FLOW_KIND);
}
