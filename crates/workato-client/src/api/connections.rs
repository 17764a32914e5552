//! Connection listing and CRUD endpoints.

use serde_json::{json, Value};

use crate::client::WorkatoClient;
use crate::endpoint;
use crate::error::ClientResult;
use crate::models::{ConnectionFilter, JsonObject, ResourceId};
use crate::request::ApiRequest;

impl WorkatoClient {
    /// List connections. Each entry of `filter.includes` becomes its own
    /// `includes[]` parameter.
    pub async fn list_connections(&self, filter: &ConnectionFilter) -> ClientResult<Value> {
        let mut request = ApiRequest::new(endpoint::LIST_CONNECTIONS, &[])
            .query_opt("folder_id", filter.folder_id.as_deref())
            .query_opt("parent_id", filter.parent_id.as_deref())
            .query_opt("external_id", filter.external_id.as_deref())
            .query_opt(
                "include_runtime_connections",
                filter.include_runtime_connections.as_deref(),
            );
        for include in &filter.includes {
            request = request.query("includes[]", include);
        }
        self.execute_json(request).await
    }

    pub async fn get_connection(&self, connection_id: &ResourceId) -> ClientResult<Value> {
        self.execute_json(ApiRequest::new(endpoint::GET_CONNECTION, &[connection_id]))
            .await
    }

    pub async fn create_connection(&self, connection: JsonObject) -> ClientResult<Value> {
        let request =
            ApiRequest::new(endpoint::CREATE_CONNECTION, &[]).json(Value::Object(connection));
        self.execute_json(request).await
    }

    pub async fn update_connection(
        &self,
        connection_id: &ResourceId,
        connection: JsonObject,
    ) -> ClientResult<Value> {
        let request = ApiRequest::new(endpoint::UPDATE_CONNECTION, &[connection_id])
            .json(Value::Object(connection));
        self.execute_json(request).await
    }

    /// Disconnect a connection. `{"force": true}` is sent only when forcing.
    pub async fn disconnect_connection(
        &self,
        connection_id: &ResourceId,
        force: bool,
    ) -> ClientResult<Value> {
        let request = ApiRequest::new(endpoint::DISCONNECT_CONNECTION, &[connection_id]);
        let request = if force {
            request.json(json!({ "force": true }))
        } else {
            request
        };
        self.execute_json(request).await
    }

    pub async fn delete_connection(&self, connection_id: &ResourceId) -> ClientResult<Value> {
        self.execute_json(ApiRequest::new(endpoint::DELETE_CONNECTION, &[connection_id]))
            .await
    }
}
