use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
use kd_api::flow::v1alpha1::*;
use rstest::*;
use serde_json::json;

use crate::constants::*;

// The minimal upstream GET response for a JobTemplate, mirroring what the apiserver sends back
pub fn job_template_response(name: &str, namespace: &str) -> serde_json::Value {
    json!({
        "apiVersion": "flow.volcano.sh/v1alpha1",
        "kind": "JobTemplate",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "6a1b6a6e-1d0c-4f7e-9a51-1c1f1e1a1b1c",
            "resourceVersion": "12345",
            "labels": {"a": "b"},
        },
        "spec": {"queue": TEST_QUEUE},
    })
}

#[fixture]
pub fn test_job_template(#[default(TEST_JOB_TEMPLATE)] name: &str) -> JobTemplate {
    let mut jt = JobTemplate::new(
        name,
        JobTemplateSpec {
            scheduler_name: Some("volcano".into()),
            min_available: Some(1),
            queue: Some(TEST_QUEUE.into()),
            max_retry: Some(3),
            plugins: Some([("ssh".into(), vec![]), ("svc".into(), vec![])].into()),
            tasks: Some(vec![TaskSpec {
                name: Some("worker".into()),
                replicas: Some(2),
                template: Some(json!({
                    "spec": {
                        "containers": [{"name": "worker", "image": "busybox", "command": ["sleep", "10"]}],
                        "restartPolicy": "Never",
                    },
                })),
                policies: Some(vec![LifecyclePolicy {
                    event: Some("TaskCompleted".into()),
                    action: Some("CompleteJob".into()),
                    ..Default::default()
                }]),
                ..Default::default()
            }]),
            ..Default::default()
        },
    );
    jt.metadata = metav1::ObjectMeta {
        name: Some(name.into()),
        namespace: Some(TEST_NAMESPACE.into()),
        annotations: Some([("owner".into(), "batch-team".into())].into()),
        ..Default::default()
    };
    jt
}

#[fixture]
pub fn test_job_flow(#[default(TEST_JOB_FLOW)] name: &str) -> JobFlow {
    let mut jf = JobFlow::new(
        name,
        JobFlowSpec {
            job_retain_policy: Some("retain".into()),
            flows: Some(vec![
                Flow { name: "prepare".into(), ..Default::default() },
                Flow {
                    name: "train".into(),
                    depends_on: Some(FlowDependency {
                        targets: Some(vec!["prepare".into()]),
                        probe: Some(Probe {
                            task_status_list: Some(vec![TaskStatusProbe {
                                task_name: Some("worker".into()),
                                phase: Some("Succeeded".into()),
                            }]),
                            ..Default::default()
                        }),
                    }),
                    patch: None,
                },
            ]),
        },
    );
    jf.metadata.namespace = Some(TEST_NAMESPACE.into());
    jf
}
