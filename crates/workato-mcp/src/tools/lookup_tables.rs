//! Lookup table tool implementations.

use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use workato_client::WorkatoClient;

use super::helpers::{client_error, labeled};
use super::params::{
    AddLookupTableRowParams, BatchDeleteLookupTablesParams, CreateLookupTableParams,
    ListLookupTableRowsParams, ListLookupTablesParams, LookupTableRowIdParams,
    LookupTableRowParams, UpdateLookupTableRowParams,
};

pub async fn list_lookup_tables(
    client: &WorkatoClient,
    params: ListLookupTablesParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .list_lookup_tables(params.page, params.per_page)
        .await
        .map_err(client_error)?;
    Ok(labeled("Lookup tables", &result))
}

pub async fn list_lookup_table_rows(
    client: &WorkatoClient,
    params: ListLookupTableRowsParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .list_lookup_table_rows(
            &params.lookup_table_id,
            params.page,
            params.per_page,
            params.filters.as_ref(),
        )
        .await
        .map_err(client_error)?;
    Ok(labeled("Lookup table rows", &result))
}

pub async fn lookup_table_row(
    client: &WorkatoClient,
    params: LookupTableRowParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .lookup_table_row(&params.lookup_table_id, &params.filters)
        .await
        .map_err(client_error)?;
    Ok(labeled("Lookup table row", &result))
}

pub async fn get_lookup_table_row(
    client: &WorkatoClient,
    params: LookupTableRowIdParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .get_lookup_table_row(&params.lookup_table_id, &params.row_id)
        .await
        .map_err(client_error)?;
    Ok(labeled("Lookup table row", &result))
}

pub async fn add_lookup_table_row(
    client: &WorkatoClient,
    params: AddLookupTableRowParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .add_lookup_table_row(&params.lookup_table_id, params.data)
        .await
        .map_err(client_error)?;
    Ok(labeled("Added lookup table row", &result))
}

pub async fn create_lookup_table(
    client: &WorkatoClient,
    params: CreateLookupTableParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .create_lookup_table(params.lookup_table)
        .await
        .map_err(client_error)?;
    Ok(labeled("Created lookup table", &result))
}

pub async fn batch_delete_lookup_tables(
    client: &WorkatoClient,
    params: BatchDeleteLookupTablesParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .batch_delete_lookup_tables(&params.ids)
        .await
        .map_err(client_error)?;
    Ok(labeled("Batch delete result", &result))
}

pub async fn update_lookup_table_row(
    client: &WorkatoClient,
    params: UpdateLookupTableRowParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .update_lookup_table_row(&params.lookup_table_id, &params.row_id, params.data)
        .await
        .map_err(client_error)?;
    Ok(labeled("Updated lookup table row", &result))
}

pub async fn delete_lookup_table_row(
    client: &WorkatoClient,
    params: LookupTableRowIdParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .delete_lookup_table_row(&params.lookup_table_id, &params.row_id)
        .await
        .map_err(client_error)?;
    Ok(labeled("Delete lookup table row result", &result))
}
