//! Recipe and job tool implementations.
//!
//! Async functions that take the shared `WorkatoClient` and param structs and return
//! the text result. Registration happens in server.rs.

use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use workato_client::WorkatoClient;

use super::helpers::{client_error, details, found, labeled};
use super::params::{
    CopyRecipeParams, CreateRecipeParams, JobIdParams, ListJobsParams, ListRecipesParams,
    RecipeIdParams, RecipeVersionParams, RecipeVersionsParams, TestRecipeParams,
    UpdateRecipeConnectionParams, UpdateRecipeParams, UpdateRecipeVersionCommentParams,
};

pub async fn list_recipes(
    client: &WorkatoClient,
    params: ListRecipesParams,
) -> Result<CallToolResult, McpError> {
    let recipes = client
        .list_recipes(params.include_tags)
        .await
        .map_err(client_error)?;
    Ok(found("recipes", &recipes))
}

pub async fn get_recipe(
    client: &WorkatoClient,
    params: RecipeIdParams,
) -> Result<CallToolResult, McpError> {
    let recipe = client
        .get_recipe(&params.recipe_id)
        .await
        .map_err(client_error)?;
    Ok(details("Recipe details", &recipe))
}

pub async fn start_recipe(
    client: &WorkatoClient,
    params: RecipeIdParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .start_recipe(&params.recipe_id)
        .await
        .map_err(client_error)?;
    Ok(labeled("Start recipe result", &result))
}

pub async fn stop_recipe(
    client: &WorkatoClient,
    params: RecipeIdParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .stop_recipe(&params.recipe_id)
        .await
        .map_err(client_error)?;
    Ok(labeled("Stop recipe result", &result))
}

pub async fn test_recipe(
    client: &WorkatoClient,
    params: TestRecipeParams,
) -> Result<CallToolResult, McpError> {
    let input = params.input;
    let result = client
        .test_recipe(&input.recipe_id, input.input_data)
        .await
        .map_err(client_error)?;
    Ok(labeled("Test recipe result", &result))
}

pub async fn create_recipe(
    client: &WorkatoClient,
    params: CreateRecipeParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .create_recipe(&params.recipe)
        .await
        .map_err(client_error)?;
    Ok(labeled("Created recipe", &result))
}

pub async fn update_recipe(
    client: &WorkatoClient,
    params: UpdateRecipeParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .update_recipe(&params.recipe_id, &params.recipe)
        .await
        .map_err(client_error)?;
    Ok(labeled("Updated recipe", &result))
}

pub async fn delete_recipe(
    client: &WorkatoClient,
    params: RecipeIdParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .delete_recipe(&params.recipe_id)
        .await
        .map_err(client_error)?;
    Ok(labeled("Delete recipe result", &result))
}

pub async fn copy_recipe(
    client: &WorkatoClient,
    params: CopyRecipeParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .copy_recipe(&params.recipe_id, params.folder_id.as_ref())
        .await
        .map_err(client_error)?;
    Ok(labeled("Copy recipe result", &result))
}

pub async fn reset_recipe_trigger(
    client: &WorkatoClient,
    params: RecipeIdParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .reset_recipe_trigger(&params.recipe_id)
        .await
        .map_err(client_error)?;
    Ok(labeled("Reset recipe trigger result", &result))
}

pub async fn update_recipe_connection(
    client: &WorkatoClient,
    params: UpdateRecipeConnectionParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .update_recipe_connection(
            &params.recipe_id,
            &params.adapter_name,
            params.connection_id,
        )
        .await
        .map_err(client_error)?;
    Ok(labeled("Update recipe connection result", &result))
}

pub async fn poll_recipe_now(
    client: &WorkatoClient,
    params: RecipeIdParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .poll_recipe_now(&params.recipe_id)
        .await
        .map_err(client_error)?;
    Ok(labeled("Poll recipe now result", &result))
}

pub async fn get_recipe_versions(
    client: &WorkatoClient,
    params: RecipeVersionsParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .list_recipe_versions(&params.recipe_id, params.page, params.per_page)
        .await
        .map_err(client_error)?;
    Ok(labeled("Recipe versions", &result))
}

pub async fn get_recipe_version_details(
    client: &WorkatoClient,
    params: RecipeVersionParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .get_recipe_version(&params.recipe_id, &params.version_id)
        .await
        .map_err(client_error)?;
    Ok(labeled("Recipe version details", &result))
}

pub async fn update_recipe_version_comment(
    client: &WorkatoClient,
    params: UpdateRecipeVersionCommentParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .update_recipe_version_comment(&params.recipe_id, &params.version_id, &params.comment)
        .await
        .map_err(client_error)?;
    Ok(labeled("Update recipe version comment result", &result))
}

pub async fn list_jobs(
    client: &WorkatoClient,
    params: ListJobsParams,
) -> Result<CallToolResult, McpError> {
    let jobs = client
        .list_jobs(&params.into())
        .await
        .map_err(client_error)?;
    Ok(found("jobs", &jobs))
}

pub async fn get_job(
    client: &WorkatoClient,
    params: JobIdParams,
) -> Result<CallToolResult, McpError> {
    let job = client.get_job(&params.job_id).await.map_err(client_error)?;
    Ok(labeled("Job details", &job))
}
