use std::sync::Arc;

use kd_core::config::{
    DataSourceData,
    ProviderConfig,
};
use kd_core::datasource::ReadResponse;
use kd_core::errors::*;
use kd_core::prelude::*;
use kd_core::provider::Provider;
use serde_json::json;

#[derive(clap::Args)]
pub struct Args {
    #[arg(long_help = "data source type name, or the group/version.Kind of the resource")]
    pub type_name: String,

    #[arg(long, long_help = "name of the object to read")]
    pub name: String,

    #[arg(short, long, long_help = "namespace of the object to read", default_value = "default")]
    pub namespace: String,

    #[arg(long, long_help = "configure the provider in offline mode (nothing will be read)")]
    pub offline: bool,
}

// Drives one data source through configure and read the way a provider framework would, and
// returns everything it reported along the way.
pub async fn run(args: &Args, provider: &Provider, data: DataSourceData) -> anyhow::Result<ReadResponse> {
    let Some(mut ds) = provider.data_source(&args.type_name) else {
        bail!("no data source named {}; try `kdctl list`", args.type_name);
    };

    let mut diagnostics = ds.configure(Some(Arc::new(data)));
    if diagnostics.has_error() {
        return Ok(ReadResponse { state: None, diagnostics });
    }

    let config = json!({"metadata": {"name": args.name, "namespace": args.namespace}});
    let mut resp = ds.read(&config).await;
    diagnostics.append(resp.diagnostics);
    resp.diagnostics = diagnostics;
    Ok(resp)
}

pub async fn cmd(args: &Args, mut config: ProviderConfig, provider: &Provider) -> EmptyResult {
    config.offline |= args.offline;
    let data = DataSourceData::from_config(&config).await?;
    let resp = run(args, provider, data).await?;

    for d in resp.diagnostics.iter() {
        eprintln!("{d}");
    }
    if resp.diagnostics.has_error() {
        bail!("could not read {}/{}", args.namespace, args.name);
    }

    if let Some(state) = resp.state {
        println!("{}", serde_json::to_string_pretty(&state)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assertables::*;
    use kd_testutils::*;
    use rstest::*;

    use super::*;

    #[fixture]
    fn provider() -> Provider {
        Provider::from_config(&ProviderConfig::default()).unwrap().0
    }

    fn args(type_name: &str) -> Args {
        Args {
            type_name: type_name.into(),
            name: TEST_JOB_TEMPLATE.into(),
            namespace: TEST_NAMESPACE.into(),
            offline: false,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_run(provider: Provider) {
        let (mut fake_apiserver, client) = make_fake_apiserver();
        fake_apiserver
            .handle_get(
                job_template_path(TEST_NAMESPACE, TEST_JOB_TEMPLATE),
                job_template_response(TEST_JOB_TEMPLATE, TEST_NAMESPACE),
            )
            .build();

        let resp = run(&args(JOB_TEMPLATE_DATA_SOURCE), &provider, DataSourceData::new(client))
            .await
            .unwrap();

        fake_apiserver.assert();
        assert!(resp.diagnostics.is_empty());
        let state = resp.state.unwrap();
        assert_eq!(state["id"], format!("{TEST_JOB_TEMPLATE}/{TEST_NAMESPACE}"));
        assert_eq!(state["spec"]["queue"], TEST_QUEUE);
    }

    #[rstest]
    #[tokio::test]
    async fn test_run_by_gvk(provider: Provider) {
        let (mut fake_apiserver, client) = make_fake_apiserver();
        fake_apiserver
            .handle_not_found(job_template_path(TEST_NAMESPACE, TEST_JOB_TEMPLATE))
            .build();

        let resp = run(&args("flow.volcano.sh/v1alpha1.JobTemplate"), &provider, DataSourceData::new(client))
            .await
            .unwrap();

        fake_apiserver.assert();
        assert_none!(resp.state);
        assert_eq!(resp.diagnostics.errors().count(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn test_run_offline(provider: Provider) {
        let resp = run(&args(JOB_TEMPLATE_DATA_SOURCE), &provider, DataSourceData::offline())
            .await
            .unwrap();

        assert_none!(resp.state);
        assert!(resp.diagnostics.has_error());
    }

    #[rstest]
    #[tokio::test]
    async fn test_run_unknown_data_source(provider: Provider) {
        let err = run(&args("kubedata_apps_deployment_v1"), &provider, DataSourceData::offline())
            .await
            .unwrap_err();
        assert_starts_with!(err.to_string(), "no data source named kubedata_apps_deployment_v1");
    }
}
