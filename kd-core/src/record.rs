use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};
use serde_json as json;

use crate::errors::*;
use crate::k8s::object_id;
use crate::schema::Schema;

err_impl! {RecordError,
    #[error("missing required attribute: {0}")]
    MissingIdentityField(String),
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMetadata {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub namespace: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

// One Kubernetes object of a specific kind, in its API (camelCase) shape.  The `id` is synthesized
// by the data source and never comes from the apiserver, so it is skipped when deserializing.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default)]
    pub metadata: RecordMetadata,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<json::Value>,
}

impl ResourceRecord {
    // Decodes the caller-supplied (state-shaped) configuration.  Only the identity fields are
    // needed for a read, but they both have to be present and non-empty.
    pub fn from_config(schema: &Schema, config: &json::Value) -> anyhow::Result<ResourceRecord> {
        let value = schema.from_state(config)?;
        let record: ResourceRecord = json::from_value(value)?;

        if record.metadata.name.is_empty() {
            return Err(RecordError::missing_identity_field("metadata.name"));
        }
        if record.metadata.namespace.is_empty() {
            return Err(RecordError::missing_identity_field("metadata.namespace"));
        }
        Ok(record)
    }

    pub fn from_json_bytes(bytes: &[u8]) -> anyhow::Result<ResourceRecord> {
        Ok(json::from_slice(bytes)?)
    }

    pub fn object_id(&self) -> String {
        object_id(&self.metadata.name, &self.metadata.namespace)
    }

    pub fn to_state(&self, schema: &Schema) -> anyhow::Result<json::Value> {
        schema.to_state(&json::to_value(self)?)
    }
}
