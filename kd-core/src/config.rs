use std::fs::File;

use kube::config::KubeConfigOptions;
use serde::{
    Deserialize,
    Serialize,
};
use tracing::*;

use crate::constants::DEFAULT_PROVIDER_TYPE_NAME;
use crate::k8s::GVK;

fn default_type_name() -> String {
    DEFAULT_PROVIDER_TYPE_NAME.into()
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    #[serde(default = "default_type_name")]
    pub type_name: String,

    #[serde(default)]
    pub offline: bool,

    pub kube_context: Option<String>,

    // If set, only these kinds are exposed as data sources
    pub data_sources: Option<Vec<GVK>>,
}

impl Default for ProviderConfig {
    fn default() -> ProviderConfig {
        ProviderConfig {
            type_name: default_type_name(),
            offline: false,
            kube_context: None,
            data_sources: None,
        }
    }
}

impl ProviderConfig {
    pub fn load(filename: &str) -> anyhow::Result<ProviderConfig> {
        Ok(serde_yaml::from_reader(File::open(filename)?)?)
    }

    pub fn is_enabled(&self, gvk: &GVK) -> bool {
        self.data_sources.as_ref().is_none_or(|enabled| enabled.contains(gvk))
    }
}

// What the provider hands every data source in `configure`: a pre-authenticated client, unless
// the provider is offline, in which case there may be no client at all.
#[derive(Clone)]
pub struct DataSourceData {
    pub client: Option<kube::Client>,
    pub offline: bool,
}

impl DataSourceData {
    pub fn new(client: kube::Client) -> DataSourceData {
        DataSourceData { client: Some(client), offline: false }
    }

    pub fn offline() -> DataSourceData {
        DataSourceData { client: None, offline: true }
    }

    pub async fn from_config(config: &ProviderConfig) -> anyhow::Result<DataSourceData> {
        if config.offline {
            info!("provider is offline, not connecting to a cluster");
            return Ok(DataSourceData::offline());
        }

        let kube_config = match &config.kube_context {
            Some(context) => {
                let opts = KubeConfigOptions { context: Some(context.clone()), ..Default::default() };
                kube::Config::from_kubeconfig(&opts).await?
            },
            None => kube::Config::infer().await?,
        };
        DataSourceData::from_kube_config(kube_config)
    }

    pub fn from_kube_config(kube_config: kube::Config) -> anyhow::Result<DataSourceData> {
        debug!("connecting to {}", kube_config.cluster_url);
        Ok(DataSourceData::new(kube::Client::try_from(kube_config)?))
    }
}

#[cfg(test)]
mod tests {
    use assertables::*;
    use rstest::*;

    use super::*;
    use crate::constants::*;

    #[rstest]
    fn test_defaults() {
        let config: ProviderConfig = serde_yaml::from_str("---\nkubeContext: kind-test\n").unwrap();
        assert_eq!(config.type_name, DEFAULT_PROVIDER_TYPE_NAME);
        assert!(!config.offline);
        assert_eq!(config.kube_context.as_deref(), Some("kind-test"));
        assert!(config.is_enabled(&JOB_TEMPLATE_GVK));
        assert!(config.is_enabled(&JOB_FLOW_GVK));
    }

    #[rstest]
    fn test_data_sources_filter() {
        let config_yml = "
---
typeName: volcano
offline: true
dataSources:
  - flow.volcano.sh/v1alpha1.JobTemplate
";
        let config: ProviderConfig = serde_yaml::from_str(config_yml).unwrap();
        assert_eq!(config.type_name, "volcano");
        assert!(config.offline);
        assert!(config.is_enabled(&JOB_TEMPLATE_GVK));
        assert!(!config.is_enabled(&JOB_FLOW_GVK));
    }

    #[rstest]
    fn test_bad_gvk() {
        let config_yml = "
---
dataSources:
  - JobTemplate
";
        assert_err!(serde_yaml::from_str::<ProviderConfig>(config_yml));
    }

    #[rstest]
    #[tokio::test]
    async fn test_from_config_offline() {
        let config = ProviderConfig { offline: true, ..Default::default() };
        let data = DataSourceData::from_config(&config).await.unwrap();
        assert!(data.offline);
        assert!(data.client.is_none());
    }

    #[rstest]
    #[case::https("https://127.0.0.1:6443")]
    #[case::http("http://127.0.0.1:8001")]
    #[tokio::test]
    async fn test_from_kube_config(#[case] url: &str) {
        let kube_config = kube::Config::new(url.parse().unwrap());
        let data = DataSourceData::from_kube_config(kube_config).unwrap();
        assert!(!data.offline);
        assert!(data.client.is_some());
    }
}
