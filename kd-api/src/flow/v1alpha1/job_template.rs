use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::preserve_unknown_fields;

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSpec {
    pub mount_path: String,
    pub volume_claim_name: Option<String>,

    #[schemars(schema_with = "preserve_unknown_fields")]
    pub volume_claim: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecyclePolicy {
    pub action: Option<String>,
    pub event: Option<String>,
    pub events: Option<Vec<String>>,
    pub exit_code: Option<i32>,

    // Serialized as a Go duration string, e.g. "10m"
    pub timeout: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependsOn {
    pub name: Option<Vec<String>>,
    pub iteration: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    pub name: Option<String>,
    pub replicas: Option<i32>,
    pub min_available: Option<i32>,

    #[schemars(schema_with = "preserve_unknown_fields")]
    pub template: Option<serde_json::Value>,

    pub policies: Option<Vec<LifecyclePolicy>>,
    pub topology_policy: Option<String>,
    pub max_retry: Option<i32>,
    pub depends_on: Option<DependsOn>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkTopologySpec {
    pub mode: Option<String>,
    pub highest_tier_allowed: Option<i32>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[kube(group = "flow.volcano.sh", version = "v1alpha1", kind = "JobTemplate", namespaced)]
#[kube(shortname = "jt")]
#[serde(rename_all = "camelCase")]
pub struct JobTemplateSpec {
    pub scheduler_name: Option<String>,
    pub min_available: Option<i32>,
    pub volumes: Option<Vec<VolumeSpec>>,
    pub tasks: Option<Vec<TaskSpec>>,
    pub policies: Option<Vec<LifecyclePolicy>>,
    pub plugins: Option<BTreeMap<String, Vec<String>>>,
    pub running_estimate: Option<String>,
    pub queue: Option<String>,
    pub max_retry: Option<i32>,
    pub ttl_seconds_after_finished: Option<i32>,
    pub priority_class_name: Option<String>,
    pub min_success: Option<i32>,
    pub network_topology: Option<NetworkTopologySpec>,
}
