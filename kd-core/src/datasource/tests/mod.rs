mod resource_test;

use std::sync::Arc;

use assertables::*;
use kd_testutils::*;
use rstest::*;
use serde_json::json;
use tracing_test::traced_test;

use super::*;
use crate::catalog;
use crate::config::DataSourceData;
use crate::prelude::*;

fn data_source_for(gvk: &GVK) -> ResourceDataSource {
    let desc = catalog::descriptors()
        .unwrap()
        .into_iter()
        .find(|d| d.gvk() == gvk)
        .unwrap();
    ResourceDataSource::new(Arc::new(desc))
}

#[fixture]
fn job_template_ds() -> ResourceDataSource {
    data_source_for(&JOB_TEMPLATE_GVK)
}

#[fixture]
fn job_flow_ds() -> ResourceDataSource {
    data_source_for(&JOB_FLOW_GVK)
}

fn read_config(name: &str, namespace: &str) -> json::Value {
    json!({"metadata": {"name": name, "namespace": namespace}})
}
