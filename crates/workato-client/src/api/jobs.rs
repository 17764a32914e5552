//! Job and folder listing endpoints.

use serde_json::Value;

use crate::client::WorkatoClient;
use crate::endpoint;
use crate::error::ClientResult;
use crate::models::{JobFilter, ResourceId};
use crate::request::ApiRequest;

impl WorkatoClient {
    /// List jobs. Unset filters are left out of the query string.
    pub async fn list_jobs(&self, filter: &JobFilter) -> ClientResult<Value> {
        let request = ApiRequest::new(endpoint::LIST_JOBS, &[])
            .query_opt("recipe_id", filter.recipe_id.as_ref())
            .query_opt("status", filter.status.as_deref())
            .query_opt("limit", filter.limit);
        self.execute_json(request).await
    }

    pub async fn get_job(&self, job_id: &ResourceId) -> ClientResult<Value> {
        self.execute_json(ApiRequest::new(endpoint::GET_JOB, &[job_id]))
            .await
    }

    pub async fn list_folders(&self) -> ClientResult<Value> {
        self.execute_json(ApiRequest::new(endpoint::LIST_FOLDERS, &[]))
            .await
    }
}
