//! Recipe CRUD, lifecycle and versioning endpoints.

use serde_json::{json, Value};

use crate::client::WorkatoClient;
use crate::endpoint;
use crate::error::ClientResult;
use crate::models::{JsonObject, RecipeData, ResourceId};
use crate::request::ApiRequest;

impl WorkatoClient {
    /// List all recipes, optionally with their tags.
    pub async fn list_recipes(&self, include_tags: bool) -> ClientResult<Value> {
        let request = ApiRequest::new(endpoint::LIST_RECIPES, &[]);
        let request = if include_tags {
            request.query("includes[]", "tags")
        } else {
            request
        };
        self.execute_json(request).await
    }

    pub async fn get_recipe(&self, recipe_id: &ResourceId) -> ClientResult<Value> {
        self.execute_json(ApiRequest::new(endpoint::GET_RECIPE, &[recipe_id]))
            .await
    }

    pub async fn start_recipe(&self, recipe_id: &ResourceId) -> ClientResult<Value> {
        self.execute_json(ApiRequest::new(endpoint::START_RECIPE, &[recipe_id]))
            .await
    }

    pub async fn stop_recipe(&self, recipe_id: &ResourceId) -> ClientResult<Value> {
        self.execute_json(ApiRequest::new(endpoint::STOP_RECIPE, &[recipe_id]))
            .await
    }

    /// Run a recipe test. Without input data the body is an empty object.
    pub async fn test_recipe(
        &self,
        recipe_id: &ResourceId,
        input_data: Option<JsonObject>,
    ) -> ClientResult<Value> {
        let body = Value::Object(input_data.unwrap_or_default());
        self.execute_json(ApiRequest::new(endpoint::TEST_RECIPE, &[recipe_id]).json(body))
            .await
    }

    /// Create a recipe. The payload is wrapped in a `recipe` envelope.
    pub async fn create_recipe(&self, recipe: &RecipeData) -> ClientResult<Value> {
        let body = json!({ "recipe": recipe });
        self.execute_json(ApiRequest::new(endpoint::CREATE_RECIPE, &[]).json(body))
            .await
    }

    /// Update a recipe. The payload is wrapped in a `recipe` envelope.
    pub async fn update_recipe(
        &self,
        recipe_id: &ResourceId,
        recipe: &RecipeData,
    ) -> ClientResult<Value> {
        let body = json!({ "recipe": recipe });
        self.execute_json(ApiRequest::new(endpoint::UPDATE_RECIPE, &[recipe_id]).json(body))
            .await
    }

    pub async fn delete_recipe(&self, recipe_id: &ResourceId) -> ClientResult<Value> {
        self.execute_json(ApiRequest::new(endpoint::DELETE_RECIPE, &[recipe_id]))
            .await
    }

    /// Copy a recipe, into `folder_id` when given. Without a folder no body is sent.
    pub async fn copy_recipe(
        &self,
        recipe_id: &ResourceId,
        folder_id: Option<&ResourceId>,
    ) -> ClientResult<Value> {
        let request = ApiRequest::new(endpoint::COPY_RECIPE, &[recipe_id]);
        let request = match folder_id {
            Some(folder_id) => request.json(json!({ "folder_id": folder_id })),
            None => request,
        };
        self.execute_json(request).await
    }

    pub async fn reset_recipe_trigger(&self, recipe_id: &ResourceId) -> ClientResult<Value> {
        self.execute_json(ApiRequest::new(endpoint::RESET_RECIPE_TRIGGER, &[recipe_id]))
            .await
    }

    /// Point one of the recipe's adapters at a different connection.
    pub async fn update_recipe_connection(
        &self,
        recipe_id: &ResourceId,
        adapter_name: &str,
        connection_id: i64,
    ) -> ClientResult<Value> {
        let body = json!({
            "adapter_name": adapter_name,
            "connection_id": connection_id,
        });
        self.execute_json(
            ApiRequest::new(endpoint::UPDATE_RECIPE_CONNECTION, &[recipe_id]).json(body),
        )
        .await
    }

    pub async fn poll_recipe_now(&self, recipe_id: &ResourceId) -> ClientResult<Value> {
        self.execute_json(ApiRequest::new(endpoint::POLL_RECIPE_NOW, &[recipe_id]))
            .await
    }

    pub async fn list_recipe_versions(
        &self,
        recipe_id: &ResourceId,
        page: u32,
        per_page: u32,
    ) -> ClientResult<Value> {
        let request = ApiRequest::new(endpoint::LIST_RECIPE_VERSIONS, &[recipe_id])
            .query("page", page)
            .query("per_page", per_page);
        self.execute_json(request).await
    }

    pub async fn get_recipe_version(
        &self,
        recipe_id: &ResourceId,
        version_id: &ResourceId,
    ) -> ClientResult<Value> {
        self.execute_json(ApiRequest::new(
            endpoint::GET_RECIPE_VERSION,
            &[recipe_id, version_id],
        ))
        .await
    }

    pub async fn update_recipe_version_comment(
        &self,
        recipe_id: &ResourceId,
        version_id: &ResourceId,
        comment: &str,
    ) -> ClientResult<Value> {
        let request = ApiRequest::new(endpoint::UPDATE_RECIPE_VERSION, &[recipe_id, version_id])
            .json(json!({ "comment": comment }));
        self.execute_json(request).await
    }
}
