//! Lookup tables and their rows.

use serde_json::{json, Value};

use crate::client::WorkatoClient;
use crate::endpoint;
use crate::error::ClientResult;
use crate::models::{JsonObject, ResourceId};
use crate::request::ApiRequest;

impl WorkatoClient {
    pub async fn list_lookup_tables(&self, page: u32, per_page: u32) -> ClientResult<Value> {
        let request = ApiRequest::new(endpoint::LIST_LOOKUP_TABLES, &[])
            .query("page", page)
            .query("per_page", per_page);
        self.execute_json(request).await
    }

    pub async fn create_lookup_table(&self, table: JsonObject) -> ClientResult<Value> {
        let request = ApiRequest::new(endpoint::CREATE_LOOKUP_TABLE, &[])
            .json(json!({ "lookup_table": table }));
        self.execute_json(request).await
    }

    pub async fn batch_delete_lookup_tables(&self, ids: &[ResourceId]) -> ClientResult<Value> {
        let request = ApiRequest::new(endpoint::BATCH_DELETE_LOOKUP_TABLES, &[])
            .json(json!({ "ids": ids }));
        self.execute_json(request).await
    }

    /// List rows. A filter named `page` or `per_page` overrides the pagination value.
    pub async fn list_lookup_table_rows(
        &self,
        table_id: &ResourceId,
        page: u32,
        per_page: u32,
        filters: Option<&JsonObject>,
    ) -> ClientResult<Value> {
        let mut request = ApiRequest::new(endpoint::LIST_LOOKUP_TABLE_ROWS, &[table_id])
            .query("page", page)
            .query("per_page", per_page);
        if let Some(filters) = filters {
            request = request.query_filters(filters);
        }
        self.execute_json(request).await
    }

    /// Find the first row matching every filter.
    pub async fn lookup_table_row(
        &self,
        table_id: &ResourceId,
        filters: &JsonObject,
    ) -> ClientResult<Value> {
        let request =
            ApiRequest::new(endpoint::LOOKUP_TABLE_ROW, &[table_id]).query_filters(filters);
        self.execute_json(request).await
    }

    pub async fn get_lookup_table_row(
        &self,
        table_id: &ResourceId,
        row_id: &ResourceId,
    ) -> ClientResult<Value> {
        self.execute_json(ApiRequest::new(
            endpoint::GET_LOOKUP_TABLE_ROW,
            &[table_id, row_id],
        ))
        .await
    }

    pub async fn add_lookup_table_row(
        &self,
        table_id: &ResourceId,
        data: JsonObject,
    ) -> ClientResult<Value> {
        let request = ApiRequest::new(endpoint::ADD_LOOKUP_TABLE_ROW, &[table_id])
            .json(json!({ "data": data }));
        self.execute_json(request).await
    }

    pub async fn update_lookup_table_row(
        &self,
        table_id: &ResourceId,
        row_id: &ResourceId,
        data: JsonObject,
    ) -> ClientResult<Value> {
        let request = ApiRequest::new(endpoint::UPDATE_LOOKUP_TABLE_ROW, &[table_id, row_id])
            .json(json!({ "data": data }));
        self.execute_json(request).await
    }

    pub async fn delete_lookup_table_row(
        &self,
        table_id: &ResourceId,
        row_id: &ResourceId,
    ) -> ClientResult<Value> {
        self.execute_json(ApiRequest::new(
            endpoint::DELETE_LOOKUP_TABLE_ROW,
            &[table_id, row_id],
        ))
        .await
    }
}
