use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::preserve_unknown_fields;

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpGetProbe {
    pub task_name: Option<String>,
    pub path: Option<String>,
    pub port: Option<i32>,

    #[schemars(schema_with = "preserve_unknown_fields")]
    pub http_header: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TcpSocketProbe {
    pub task_name: Option<String>,
    pub port: i32,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusProbe {
    pub task_name: Option<String>,
    pub phase: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Probe {
    pub http_get_list: Option<Vec<HttpGetProbe>>,
    pub tcp_socket_list: Option<Vec<TcpSocketProbe>>,
    pub task_status_list: Option<Vec<TaskStatusProbe>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowDependency {
    pub targets: Option<Vec<String>>,
    pub probe: Option<Probe>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    pub name: String,
    pub depends_on: Option<FlowDependency>,

    // A partial JobTemplate spec merged into the template when the flow step is created
    #[schemars(schema_with = "preserve_unknown_fields")]
    pub patch: Option<serde_json::Value>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[kube(group = "flow.volcano.sh", version = "v1alpha1", kind = "JobFlow", namespaced)]
#[kube(shortname = "jf")]
#[serde(rename_all = "camelCase")]
pub struct JobFlowSpec {
    pub flows: Option<Vec<Flow>>,
    pub job_retain_policy: Option<String>,
}
