//! Export manifest and package tool implementations.
//!
//! Package archives cross the MCP boundary base64-encoded: `import_package` decodes
//! its `file_bytes` argument and `download_package` returns the zip as an embedded
//! blob resource.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use tracing::debug;

use workato_client::WorkatoClient;

use super::helpers::{client_error, labeled, package_resource};
use super::params::{
    CreateExportManifestParams, FolderAssetsParams, ImportPackageParams, ManifestIdParams,
    PackageIdParams, UpdateExportManifestParams,
};

pub async fn get_folder_assets(
    client: &WorkatoClient,
    params: FolderAssetsParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .get_folder_assets(&params.into())
        .await
        .map_err(client_error)?;
    Ok(labeled("Folder assets", &result))
}

pub async fn create_export_manifest(
    client: &WorkatoClient,
    params: CreateExportManifestParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .create_export_manifest(params.export_manifest)
        .await
        .map_err(client_error)?;
    Ok(labeled("Created export manifest", &result))
}

pub async fn update_export_manifest(
    client: &WorkatoClient,
    params: UpdateExportManifestParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .update_export_manifest(&params.manifest_id, params.export_manifest)
        .await
        .map_err(client_error)?;
    Ok(labeled("Updated export manifest", &result))
}

pub async fn get_export_manifest(
    client: &WorkatoClient,
    params: ManifestIdParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .get_export_manifest(&params.manifest_id)
        .await
        .map_err(client_error)?;
    Ok(labeled("Export manifest", &result))
}

pub async fn delete_export_manifest(
    client: &WorkatoClient,
    params: ManifestIdParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .delete_export_manifest(&params.manifest_id)
        .await
        .map_err(client_error)?;
    Ok(labeled("Delete export manifest result", &result))
}

pub async fn export_package(
    client: &WorkatoClient,
    params: ManifestIdParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .export_package(&params.manifest_id)
        .await
        .map_err(client_error)?;
    Ok(labeled("Export package result", &result))
}

pub async fn import_package(
    client: &WorkatoClient,
    params: ImportPackageParams,
) -> Result<CallToolResult, McpError> {
    let content = STANDARD.decode(params.file_bytes.trim()).map_err(|e| {
        McpError::invalid_params(format!("file_bytes is not valid base64: {e}"), None)
    })?;
    debug!(
        folder_id = %params.folder_id,
        size = content.len(),
        "Importing package"
    );

    let options = params.options();
    let result = client
        .import_package(&params.folder_id, content, &options)
        .await
        .map_err(client_error)?;
    Ok(labeled("Import package result", &result))
}

pub async fn get_package(
    client: &WorkatoClient,
    params: PackageIdParams,
) -> Result<CallToolResult, McpError> {
    let result = client
        .get_package(&params.package_id)
        .await
        .map_err(client_error)?;
    Ok(labeled("Package details", &result))
}

pub async fn download_package(
    client: &WorkatoClient,
    params: PackageIdParams,
) -> Result<CallToolResult, McpError> {
    let archive = client
        .download_package(&params.package_id)
        .await
        .map_err(client_error)?;
    let resource = package_resource(&params.package_id, STANDARD.encode(&archive))?;
    Ok(CallToolResult::success(vec![resource]))
}
