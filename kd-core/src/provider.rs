use std::str::FromStr;
use std::sync::Arc;

use tracing::*;

use crate::catalog;
use crate::config::{
    DataSourceData,
    ProviderConfig,
};
use crate::datasource::{
    DataSource,
    ProviderData,
    ResourceDataSource,
};
use crate::descriptor::ResourceDescriptor;
use crate::diagnostics::Diagnostics;
use crate::k8s::GVK;

pub struct Provider {
    type_name: String,
    descriptors: Vec<Arc<ResourceDescriptor>>,
}

impl Provider {
    pub fn new(type_name: &str, descriptors: Vec<ResourceDescriptor>) -> Provider {
        Provider {
            type_name: type_name.into(),
            descriptors: descriptors.into_iter().map(Arc::new).collect(),
        }
    }

    // Builds a provider exposing the catalog, restricted to the kinds the config enables
    pub fn from_config(config: &ProviderConfig) -> anyhow::Result<(Provider, Diagnostics)> {
        let mut diags = Diagnostics::default();
        let descriptors: Vec<_> = catalog::descriptors()?
            .into_iter()
            .filter(|d| config.is_enabled(d.gvk()))
            .collect();

        for gvk in config.data_sources.iter().flatten() {
            if !descriptors.iter().any(|d| d.gvk() == gvk) {
                warn!("no data source is available for {gvk}");
                diags.add_warning("Unknown Data Source", format!("{gvk} is not a kind this provider can read."));
            }
        }

        Ok((Provider::new(&config.type_name, descriptors), diags))
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn type_names(&self) -> Vec<String> {
        self.data_sources().iter().map(|ds| ds.metadata(&self.type_name)).collect()
    }

    pub fn data_sources(&self) -> Vec<ResourceDataSource> {
        self.descriptors.iter().cloned().map(ResourceDataSource::new).collect()
    }

    // Finds a data source by its full type name or by its "group/version.kind" string
    pub fn data_source(&self, name: &str) -> Option<ResourceDataSource> {
        let gvk = GVK::from_str(name).ok();
        self.data_sources()
            .into_iter()
            .find(|ds| ds.metadata(&self.type_name) == name || gvk.as_ref() == Some(ds.descriptor().gvk()))
    }

    // Hands the same provider data to every data source, collecting all of their diagnostics
    pub fn configure_all(&self, data: DataSourceData) -> (Vec<ResourceDataSource>, Diagnostics) {
        let provider_data: ProviderData = Arc::new(data);
        let mut diags = Diagnostics::default();
        let mut data_sources = self.data_sources();
        for ds in data_sources.iter_mut() {
            diags.append(ds.configure(Some(provider_data.clone())));
        }
        (data_sources, diags)
    }
}
