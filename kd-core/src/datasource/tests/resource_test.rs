use super::*;

#[rstest]
fn test_metadata(job_template_ds: ResourceDataSource, job_flow_ds: ResourceDataSource) {
    assert_eq!(job_template_ds.metadata(TEST_PROVIDER_TYPE_NAME), JOB_TEMPLATE_DATA_SOURCE);
    assert_eq!(job_flow_ds.metadata(TEST_PROVIDER_TYPE_NAME), JOB_FLOW_DATA_SOURCE);
    assert_eq!(job_template_ds.metadata("k8s"), "k8s_flow_volcano_sh_job_template_v1alpha1");
}

#[rstest]
#[case::job_template(JOB_TEMPLATE_GVK.clone())]
#[case::job_flow(JOB_FLOW_GVK.clone())]
fn test_schema_required_computed_partition(#[case] gvk: GVK) {
    let schema = data_source_for(&gvk).schema();
    let leaves = schema.leaves();
    assert_gt!(leaves.len(), 8);

    for (path, attr) in leaves {
        if path == "metadata.name" || path == "metadata.namespace" {
            assert!(attr.required, "{path} should be required");
            assert!(!attr.computed, "{path} should not be computed");
        } else {
            assert!(!attr.required, "{path} should not be required");
            assert!(attr.computed, "{path} should be computed");
        }
    }
}

#[rstest]
fn test_configure_no_provider_data(mut job_template_ds: ResourceDataSource) {
    let diags = job_template_ds.configure(None);
    assert!(diags.is_empty());
    assert!(!job_template_ds.is_configured());
}

#[rstest]
fn test_configure_unexpected_type(mut job_template_ds: ResourceDataSource) {
    let diags = job_template_ds.configure(Some(Arc::new("not a client")));
    assert_eq!(diags.len(), 1);
    assert_eq!(diags.errors().next().unwrap().summary, UNEXPECTED_PROVIDER_DATA_SUMMARY);
    assert!(!job_template_ds.is_configured());
}

#[rstest]
fn test_configure_no_client(mut job_template_ds: ResourceDataSource) {
    let data = DataSourceData { client: None, offline: false };
    let diags = job_template_ds.configure(Some(Arc::new(data)));
    assert_eq!(diags.errors().next().unwrap().summary, UNCONFIGURED_SUMMARY);
    assert!(!job_template_ds.is_configured());
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_configure_offline_never_reads(mut job_template_ds: ResourceDataSource) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(
            job_template_path(TEST_NAMESPACE, TEST_JOB_TEMPLATE),
            job_template_response(TEST_JOB_TEMPLATE, TEST_NAMESPACE),
        )
        .build();

    let data = DataSourceData { client: Some(client), offline: true };
    let diags = job_template_ds.configure(Some(Arc::new(data)));
    assert_eq!(diags.errors().next().unwrap().summary, OFFLINE_SUMMARY);
    assert!(!job_template_ds.is_configured());

    for _ in 0..2 {
        let resp = job_template_ds.read(&read_config(TEST_JOB_TEMPLATE, TEST_NAMESPACE)).await;
        assert_none!(resp.state);
        assert_eq!(resp.diagnostics.len(), 1);
        assert_eq!(resp.diagnostics.errors().next().unwrap().summary, OFFLINE_SUMMARY);
    }
    assert!(!logs_contain("GET"));
}

#[rstest]
#[tokio::test]
async fn test_read_unconfigured(job_template_ds: ResourceDataSource) {
    let resp = job_template_ds.read(&read_config(TEST_JOB_TEMPLATE, TEST_NAMESPACE)).await;
    assert_none!(resp.state);
    assert_eq!(resp.diagnostics.errors().next().unwrap().summary, UNCONFIGURED_SUMMARY);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_read_job_template(mut job_template_ds: ResourceDataSource) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(job_template_path("ns1", "tpl1"), job_template_response("tpl1", "ns1"))
        .build();
    assert!(job_template_ds.configure(Some(Arc::new(DataSourceData::new(client)))).is_empty());

    let resp = job_template_ds.read(&read_config("tpl1", "ns1")).await;
    fake_apiserver.assert();

    assert!(resp.diagnostics.is_empty());
    let state = resp.state.unwrap();
    assert_eq!(state["id"], "tpl1/ns1");
    assert_eq!(state["api_version"], "flow.volcano.sh/v1alpha1");
    assert_eq!(state["kind"], "JobTemplate");
    assert_eq!(state["metadata"]["name"], "tpl1");
    assert_eq!(state["metadata"]["namespace"], "ns1");
    assert_eq!(state["metadata"]["labels"], json!({"a": "b"}));
    assert_eq!(state["spec"]["queue"], "default");
    assert_eq!(state["spec"]["tasks"], json::Value::Null);
}

#[rstest]
#[tokio::test]
async fn test_read_constant_fields_ignore_response(mut job_template_ds: ResourceDataSource) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let mut body = job_template_response(TEST_JOB_TEMPLATE, TEST_NAMESPACE);
    body["apiVersion"] = json!("batch.volcano.sh/v1alpha1");
    body["kind"] = json!("Job");
    fake_apiserver
        .handle_get(job_template_path(TEST_NAMESPACE, TEST_JOB_TEMPLATE), body)
        .build();
    job_template_ds.configure(Some(Arc::new(DataSourceData::new(client))));

    let state = job_template_ds
        .read(&read_config(TEST_JOB_TEMPLATE, TEST_NAMESPACE))
        .await
        .state
        .unwrap();
    fake_apiserver.assert();
    assert_eq!(state["api_version"], "flow.volcano.sh/v1alpha1");
    assert_eq!(state["kind"], "JobTemplate");
}

#[rstest]
#[tokio::test]
async fn test_read_replaces_config_values(mut job_template_ds: ResourceDataSource) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(
            job_template_path(TEST_NAMESPACE, TEST_JOB_TEMPLATE),
            job_template_response(TEST_JOB_TEMPLATE, TEST_NAMESPACE),
        )
        .build();
    job_template_ds.configure(Some(Arc::new(DataSourceData::new(client))));

    let config = json!({
        "id": "something/else",
        "metadata": {
            "name": TEST_JOB_TEMPLATE,
            "namespace": TEST_NAMESPACE,
            "annotations": {"stale": "value"},
        },
        "spec": {"queue": "stale-queue", "max_retry": 10},
    });
    let state = job_template_ds.read(&config).await.state.unwrap();
    fake_apiserver.assert();

    assert_eq!(state["id"], format!("{TEST_JOB_TEMPLATE}/{TEST_NAMESPACE}"));
    assert_eq!(state["metadata"]["annotations"], json::Value::Null);
    assert_eq!(state["spec"]["queue"], TEST_QUEUE);
    assert_eq!(state["spec"]["max_retry"], json::Value::Null);
}

#[rstest]
#[tokio::test]
async fn test_read_typed_job_template(mut job_template_ds: ResourceDataSource, test_job_template: JobTemplate) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle(move |when, then| {
            when.method(httpmock::Method::GET)
                .path(job_template_path(TEST_NAMESPACE, TEST_JOB_TEMPLATE));
            then.json_body_obj(&test_job_template);
        })
        .build();
    job_template_ds.configure(Some(Arc::new(DataSourceData::new(client))));

    let resp = job_template_ds.read(&read_config(TEST_JOB_TEMPLATE, TEST_NAMESPACE)).await;
    fake_apiserver.assert();

    let state = resp.state.unwrap();
    assert_eq!(state["metadata"]["annotations"], json!({"owner": "batch-team"}));
    assert_eq!(state["spec"]["scheduler_name"], "volcano");
    assert_eq!(state["spec"]["max_retry"], 3);
    assert_eq!(state["spec"]["plugins"], json!({"ssh": [], "svc": []}));
    assert_eq!(state["spec"]["tasks"][0]["replicas"], 2);
    assert_eq!(state["spec"]["tasks"][0]["policies"][0]["action"], "CompleteJob");
    assert_eq!(state["spec"]["tasks"][0]["template"]["spec"]["restartPolicy"], "Never");
}

#[rstest]
#[tokio::test]
async fn test_read_job_flow(mut job_flow_ds: ResourceDataSource, test_job_flow: JobFlow) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle(move |when, then| {
            when.method(httpmock::Method::GET)
                .path(job_flow_path(TEST_NAMESPACE, TEST_JOB_FLOW));
            then.json_body_obj(&test_job_flow);
        })
        .build();
    job_flow_ds.configure(Some(Arc::new(DataSourceData::new(client))));

    let state = job_flow_ds
        .read(&read_config(TEST_JOB_FLOW, TEST_NAMESPACE))
        .await
        .state
        .unwrap();
    fake_apiserver.assert();

    assert_eq!(state["kind"], "JobFlow");
    assert_eq!(state["spec"]["job_retain_policy"], "retain");
    assert_eq!(state["spec"]["flows"][1]["depends_on"]["targets"], json!(["prepare"]));
    assert_eq!(
        state["spec"]["flows"][1]["depends_on"]["probe"]["task_status_list"][0]["phase"],
        "Succeeded"
    );
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_read_not_found(mut job_template_ds: ResourceDataSource) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_not_found(job_template_path(TEST_NAMESPACE, TEST_JOB_TEMPLATE))
        .build();
    job_template_ds.configure(Some(Arc::new(DataSourceData::new(client))));

    let resp = job_template_ds.read(&read_config(TEST_JOB_TEMPLATE, TEST_NAMESPACE)).await;
    fake_apiserver.assert();

    assert_none!(resp.state);
    assert_eq!(resp.diagnostics.len(), 1);
    let diag = resp.diagnostics.errors().next().unwrap();
    assert_eq!(diag.summary, GET_FAILED_SUMMARY);
    assert_contains!(diag.detail, "not found");
    assert!(logs_contain("could not read"));
}

#[rstest]
#[tokio::test]
async fn test_read_forbidden(mut job_template_ds: ResourceDataSource) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_forbidden(job_template_path(TEST_NAMESPACE, TEST_JOB_TEMPLATE))
        .build();
    job_template_ds.configure(Some(Arc::new(DataSourceData::new(client))));

    let resp = job_template_ds.read(&read_config(TEST_JOB_TEMPLATE, TEST_NAMESPACE)).await;
    fake_apiserver.assert();

    assert_none!(resp.state);
    let diag = resp.diagnostics.errors().next().unwrap();
    assert_eq!(diag.summary, GET_FAILED_SUMMARY);
    assert_contains!(diag.detail, "forbidden");
}

#[rstest]
#[case::no_namespace(json!({"metadata": {"name": TEST_JOB_TEMPLATE}}))]
#[case::no_metadata(json!({}))]
#[case::metadata_wrong_type(json!({"metadata": "test-job-template"}))]
#[tokio::test]
async fn test_read_invalid_config(mut job_template_ds: ResourceDataSource, #[case] config: json::Value) {
    let (_, client) = make_fake_apiserver();
    job_template_ds.configure(Some(Arc::new(DataSourceData::new(client))));

    let resp = job_template_ds.read(&config).await;
    assert_none!(resp.state);
    assert_eq!(resp.diagnostics.len(), 1);
    assert_eq!(resp.diagnostics.errors().next().unwrap().summary, INVALID_CONFIG_SUMMARY);
}

#[rstest]
#[tokio::test]
async fn test_read_unexpected_shape(mut job_template_ds: ResourceDataSource) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let mut body = job_template_response(TEST_JOB_TEMPLATE, TEST_NAMESPACE);
    body["spec"]["queue"] = json!(42);
    fake_apiserver
        .handle_get(job_template_path(TEST_NAMESPACE, TEST_JOB_TEMPLATE), body)
        .build();
    job_template_ds.configure(Some(Arc::new(DataSourceData::new(client))));

    let resp = job_template_ds.read(&read_config(TEST_JOB_TEMPLATE, TEST_NAMESPACE)).await;
    fake_apiserver.assert();

    assert_none!(resp.state);
    assert_eq!(resp.diagnostics.errors().next().unwrap().summary, UNMARSHAL_FAILED_SUMMARY);
}

#[rstest]
#[tokio::test]
async fn test_read_is_repeatable(mut job_template_ds: ResourceDataSource) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(
            job_template_path(TEST_NAMESPACE, TEST_JOB_TEMPLATE),
            job_template_response(TEST_JOB_TEMPLATE, TEST_NAMESPACE),
        )
        .build();
    job_template_ds.configure(Some(Arc::new(DataSourceData::new(client))));

    let config = read_config(TEST_JOB_TEMPLATE, TEST_NAMESPACE);
    let first = job_template_ds.read(&config).await;
    let second = job_template_ds.read(&config).await;

    assert!(first.state.is_some());
    assert_eq!(first, second);
}
