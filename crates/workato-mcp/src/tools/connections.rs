//! Connection and folder tool implementations.

use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use workato_client::WorkatoClient;

use super::helpers::{client_error, found, labeled};
use super::params::{
    ConnectionIdParams, CreateConnectionParams, DisconnectConnectionParams,
    ListConnectionsParams, UpdateConnectionParams,
};

pub async fn list_connections(
    client: &WorkatoClient,
    params: ListConnectionsParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .list_connections(&params.into())
        .await
        .map_err(client_error)?;
    Ok(labeled("Connections", &result))
}

pub async fn get_connection(
    client: &WorkatoClient,
    params: ConnectionIdParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .get_connection(&params.connection_id)
        .await
        .map_err(client_error)?;
    Ok(labeled("Connection details", &result))
}

pub async fn create_connection(
    client: &WorkatoClient,
    params: CreateConnectionParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .create_connection(params.connection)
        .await
        .map_err(client_error)?;
    Ok(labeled("Created connection", &result))
}

pub async fn update_connection(
    client: &WorkatoClient,
    params: UpdateConnectionParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .update_connection(&params.connection_id, params.connection)
        .await
        .map_err(client_error)?;
    Ok(labeled("Updated connection", &result))
}

pub async fn disconnect_connection(
    client: &WorkatoClient,
    params: DisconnectConnectionParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .disconnect_connection(&params.connection_id, params.force)
        .await
        .map_err(client_error)?;
    Ok(labeled("Disconnect connection result", &result))
}

pub async fn delete_connection(
    client: &WorkatoClient,
    params: ConnectionIdParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .delete_connection(&params.connection_id)
        .await
        .map_err(client_error)?;
    Ok(labeled("Delete connection result", &result))
}

pub async fn list_folders(client: &WorkatoClient) -> Result<CallToolResult, McpError> {
    let folders = client.list_folders().await.map_err(client_error)?;
    Ok(found("folders", &folders))
}
