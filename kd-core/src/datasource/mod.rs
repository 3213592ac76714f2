mod resource;

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;
pub use resource::ResourceDataSource;
use serde::Serialize;
use serde_json as json;

use crate::diagnostics::Diagnostics;
use crate::schema::Schema;

// Whatever the provider passes to `configure`; data sources downcast it to the type they expect
// (normally DataSourceData) and report a diagnostic if it's something else.
pub type ProviderData = Arc<dyn Any + Send + Sync>;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ReadResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<json::Value>,
    pub diagnostics: Diagnostics,
}

impl ReadResponse {
    fn error(summary: &str, detail: impl Into<String>) -> ReadResponse {
        let mut resp = ReadResponse::default();
        resp.diagnostics.add_error(summary, detail);
        resp
    }
}

// The lifecycle a provider framework drives a data source through: `metadata` and `schema` at
// registration, `configure` once the provider is set up, then any number of `read`s.
#[async_trait]
pub trait DataSource: Send + Sync {
    fn metadata(&self, provider_type_name: &str) -> String;
    fn schema(&self) -> Schema;
    fn configure(&mut self, provider_data: Option<ProviderData>) -> Diagnostics;
    async fn read(&self, config: &json::Value) -> ReadResponse;
}

#[cfg(test)]
mod tests;
