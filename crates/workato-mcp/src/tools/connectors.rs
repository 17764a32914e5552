//! Custom connector SDK tool implementations.

use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use workato_client::WorkatoClient;

use super::helpers::{client_error, labeled};
use super::params::{
    ConnectorIdParams, CreateCustomConnectorParams, SchemaFromCsvParams, SchemaFromJsonParams,
    SearchCustomConnectorsParams, UpdateCustomConnectorParams,
};

pub async fn search_custom_connectors(
    client: &WorkatoClient,
    params: SearchCustomConnectorsParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .search_custom_connectors(&params.title)
        .await
        .map_err(client_error)?;
    Ok(labeled("Custom connector search result", &result))
}

pub async fn get_custom_connector_code(
    client: &WorkatoClient,
    params: ConnectorIdParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .get_custom_connector_code(&params.connector_id)
        .await
        .map_err(client_error)?;
    Ok(labeled("Custom connector code", &result))
}

pub async fn generate_schema_from_json(
    client: &WorkatoClient,
    params: SchemaFromJsonParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .generate_schema_from_json(&params.sample)
        .await
        .map_err(client_error)?;
    Ok(labeled("Generated schema from JSON", &result))
}

pub async fn generate_schema_from_csv(
    client: &WorkatoClient,
    params: SchemaFromCsvParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .generate_schema_from_csv(&params.sample, params.col_sep.as_deref())
        .await
        .map_err(client_error)?;
    Ok(labeled("Generated schema from CSV", &result))
}

pub async fn create_custom_connector(
    client: &WorkatoClient,
    params: CreateCustomConnectorParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .create_custom_connector(params.connector)
        .await
        .map_err(client_error)?;
    Ok(labeled("Created custom connector", &result))
}

pub async fn update_custom_connector(
    client: &WorkatoClient,
    params: UpdateCustomConnectorParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .update_custom_connector(&params.connector_id, params.connector)
        .await
        .map_err(client_error)?;
    Ok(labeled("Updated custom connector", &result))
}

pub async fn release_custom_connector(
    client: &WorkatoClient,
    params: ConnectorIdParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .release_custom_connector(&params.connector_id)
        .await
        .map_err(client_error)?;
    Ok(labeled("Release custom connector result", &result))
}

pub async fn share_custom_connector(
    client: &WorkatoClient,
    params: ConnectorIdParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .share_custom_connector(&params.connector_id)
        .await
        .map_err(client_error)?;
    Ok(labeled("Share custom connector result", &result))
}
