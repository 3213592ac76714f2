use std::sync::Arc;

use async_trait::async_trait;
use kube::api::DynamicObject;
use serde_json as json;
use tracing::*;

use super::*;
use crate::config::DataSourceData;
use crate::constants::*;
use crate::descriptor::ResourceDescriptor;
use crate::record::ResourceRecord;

enum ClientState {
    Unconfigured,
    Offline,
    Ready(kube::Client),
}

// A read-only data source for one Kubernetes Kind/Version.  All of the kind-specific behaviour
// lives in the descriptor, so the same type serves every resource in the catalog.
pub struct ResourceDataSource {
    descriptor: Arc<ResourceDescriptor>,
    client: ClientState,
}

impl ResourceDataSource {
    pub fn new(descriptor: Arc<ResourceDescriptor>) -> ResourceDataSource {
        ResourceDataSource { descriptor, client: ClientState::Unconfigured }
    }

    pub fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.client, ClientState::Ready(_))
    }

    async fn get(&self, client: &kube::Client, namespace: &str, name: &str) -> anyhow::Result<DynamicObject> {
        let api_resource = self.descriptor.api_resource();
        let api = kube::Api::<DynamicObject>::namespaced_with(client.clone(), namespace, &api_resource);
        debug!("GET {} {namespace}/{name}", self.descriptor.gvk());
        Ok(api.get(name).await?)
    }
}

#[async_trait]
impl DataSource for ResourceDataSource {
    fn metadata(&self, provider_type_name: &str) -> String {
        format!("{provider_type_name}{}", self.descriptor.type_name_suffix())
    }

    fn schema(&self) -> Schema {
        self.descriptor.schema().clone()
    }

    fn configure(&mut self, provider_data: Option<ProviderData>) -> Diagnostics {
        let mut diags = Diagnostics::default();

        // The framework may call configure before the provider itself is configured
        let Some(provider_data) = provider_data else {
            return diags;
        };

        match provider_data.downcast_ref::<DataSourceData>() {
            None => diags.add_error(
                UNEXPECTED_PROVIDER_DATA_SUMMARY,
                "Expected DataSourceData, got a value of a different type. \
                    Please report this issue to the provider developers.",
            ),
            Some(DataSourceData { offline: true, .. }) => {
                self.client = ClientState::Offline;
                diags.add_error(OFFLINE_SUMMARY, OFFLINE_DETAIL);
            },
            Some(DataSourceData { client: Some(client), .. }) => {
                info!("configured data source for {}", self.descriptor.gvk());
                self.client = ClientState::Ready(client.clone());
            },
            Some(DataSourceData { client: None, .. }) => diags.add_error(
                UNCONFIGURED_SUMMARY,
                "The provider supplied no Kubernetes client and is not in offline mode.",
            ),
        }
        diags
    }

    #[instrument(skip_all, fields(gvk = %self.descriptor.gvk()))]
    async fn read(&self, config: &json::Value) -> ReadResponse {
        let client = match &self.client {
            ClientState::Ready(client) => client,
            ClientState::Offline => return ReadResponse::error(OFFLINE_SUMMARY, OFFLINE_DETAIL),
            ClientState::Unconfigured => {
                return ReadResponse::error(
                    UNCONFIGURED_SUMMARY,
                    "The data source was read before the provider configured it with a Kubernetes client.",
                );
            },
        };

        let schema = self.descriptor.schema();
        let mut record = match ResourceRecord::from_config(schema, config) {
            Ok(record) => record,
            Err(err) => return ReadResponse::error(INVALID_CONFIG_SUMMARY, err.to_string()),
        };
        let (name, namespace) = (record.metadata.name.clone(), record.metadata.namespace.clone());

        let obj = match self.get(client, &namespace, &name).await {
            Ok(obj) => obj,
            Err(err) => {
                warn!("could not read {namespace}/{name}: {err}");
                return ReadResponse::error(
                    GET_FAILED_SUMMARY,
                    format!("An unexpected error occurred while reading the resource: {err}"),
                );
            },
        };

        let bytes = match json::to_vec(&obj) {
            Ok(bytes) => bytes,
            Err(err) => return ReadResponse::error(MARSHAL_FAILED_SUMMARY, err.to_string()),
        };
        let fetched = match ResourceRecord::from_json_bytes(&bytes) {
            Ok(fetched) => fetched,
            Err(err) => return ReadResponse::error(UNMARSHAL_FAILED_SUMMARY, err.to_string()),
        };

        // apiVersion and kind are always the constants for this data source, and the identity
        // fields always come from the caller; everything else is taken from the response.
        record.id = Some(record.object_id());
        record.api_version = Some(self.descriptor.api_version());
        record.kind = Some(self.descriptor.kind().into());
        record.metadata.labels = fetched.metadata.labels;
        record.metadata.annotations = fetched.metadata.annotations;
        record.spec = fetched.spec;

        match record.to_state(schema) {
            Ok(state) => ReadResponse { state: Some(state), diagnostics: Diagnostics::default() },
            Err(err) => ReadResponse::error(UNMARSHAL_FAILED_SUMMARY, err.to_string()),
        }
    }
}
