//! Custom connector SDK endpoints.

use serde_json::{json, Value};

use crate::client::WorkatoClient;
use crate::endpoint;
use crate::error::ClientResult;
use crate::models::{JsonObject, ResourceId};
use crate::request::ApiRequest;

impl WorkatoClient {
    /// Search custom connectors by title. The remote expects the title in a JSON body
    /// even though this is a GET.
    pub async fn search_custom_connectors(&self, title: &str) -> ClientResult<Value> {
        let request = ApiRequest::new(endpoint::SEARCH_CUSTOM_CONNECTORS, &[])
            .json(json!({ "title": title }));
        self.execute_json(request).await
    }

    pub async fn get_custom_connector_code(
        &self,
        connector_id: &ResourceId,
    ) -> ClientResult<Value> {
        self.execute_json(ApiRequest::new(
            endpoint::CUSTOM_CONNECTOR_CODE,
            &[connector_id],
        ))
        .await
    }

    pub async fn generate_schema_from_json(&self, sample: &str) -> ClientResult<Value> {
        let request = ApiRequest::new(endpoint::GENERATE_SCHEMA_JSON, &[])
            .json(json!({ "sample": sample }));
        self.execute_json(request).await
    }

    /// Generate a schema from CSV. `col_sep` is omitted unless given.
    pub async fn generate_schema_from_csv(
        &self,
        sample: &str,
        col_sep: Option<&str>,
    ) -> ClientResult<Value> {
        let mut body = json!({ "sample": sample });
        if let Some(col_sep) = col_sep {
            body["col_sep"] = Value::String(col_sep.to_string());
        }
        self.execute_json(ApiRequest::new(endpoint::GENERATE_SCHEMA_CSV, &[]).json(body))
            .await
    }

    pub async fn create_custom_connector(&self, connector: JsonObject) -> ClientResult<Value> {
        let request = ApiRequest::new(endpoint::CREATE_CUSTOM_CONNECTOR, &[])
            .json(Value::Object(connector));
        self.execute_json(request).await
    }

    pub async fn update_custom_connector(
        &self,
        connector_id: &ResourceId,
        connector: JsonObject,
    ) -> ClientResult<Value> {
        let request = ApiRequest::new(endpoint::UPDATE_CUSTOM_CONNECTOR, &[connector_id])
            .json(Value::Object(connector));
        self.execute_json(request).await
    }

    pub async fn release_custom_connector(
        &self,
        connector_id: &ResourceId,
    ) -> ClientResult<Value> {
        self.execute_json(ApiRequest::new(
            endpoint::RELEASE_CUSTOM_CONNECTOR,
            &[connector_id],
        ))
        .await
    }

    pub async fn share_custom_connector(&self, connector_id: &ResourceId) -> ClientResult<Value> {
        self.execute_json(ApiRequest::new(
            endpoint::SHARE_CUSTOM_CONNECTOR,
            &[connector_id],
        ))
        .await
    }
}
