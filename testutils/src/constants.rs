pub const TEST_PROVIDER_TYPE_NAME: &str = "kubedata";
pub const TEST_NAMESPACE: &str = "test-namespace";
pub const TEST_JOB_TEMPLATE: &str = "test-job-template";
pub const TEST_JOB_FLOW: &str = "test-job-flow";
pub const TEST_QUEUE: &str = "default";

pub const JOB_TEMPLATE_DATA_SOURCE: &str = "kubedata_flow_volcano_sh_job_template_v1alpha1";
pub const JOB_FLOW_DATA_SOURCE: &str = "kubedata_flow_volcano_sh_job_flow_v1alpha1";

pub fn job_template_path(namespace: &str, name: &str) -> String {
    format!("/apis/flow.volcano.sh/v1alpha1/namespaces/{namespace}/jobtemplates/{name}")
}

pub fn job_flow_path(namespace: &str, name: &str) -> String {
    format!("/apis/flow.volcano.sh/v1alpha1/namespaces/{namespace}/jobflows/{name}")
}
