//! Export manifests and package import, export and download.
//!
//! A package is built from an export manifest (`export_package`), polled with
//! `get_package` until ready, then fetched as a zip with `download_package`. Import
//! goes the other way: the zip bytes are posted to a target folder.

use bytes::Bytes;
use serde_json::{json, Value};

use crate::client::WorkatoClient;
use crate::endpoint;
use crate::error::ClientResult;
use crate::models::{FolderAssetsQuery, ImportPackageOptions, JsonObject, ResourceId};
use crate::request::ApiRequest;

impl WorkatoClient {
    pub async fn get_folder_assets(&self, query: &FolderAssetsQuery) -> ClientResult<Value> {
        let request = ApiRequest::new(endpoint::FOLDER_ASSETS, &[])
            .query_opt("folder_id", query.folder_id)
            .query_flag("include_test_cases", query.include_test_cases)
            .query_flag("include_data", query.include_data);
        self.execute_json(request).await
    }

    pub async fn create_export_manifest(&self, manifest: JsonObject) -> ClientResult<Value> {
        let request = ApiRequest::new(endpoint::CREATE_EXPORT_MANIFEST, &[])
            .json(json!({ "export_manifest": manifest }));
        self.execute_json(request).await
    }

    pub async fn update_export_manifest(
        &self,
        manifest_id: &ResourceId,
        manifest: JsonObject,
    ) -> ClientResult<Value> {
        let request = ApiRequest::new(endpoint::UPDATE_EXPORT_MANIFEST, &[manifest_id])
            .json(json!({ "export_manifest": manifest }));
        self.execute_json(request).await
    }

    pub async fn get_export_manifest(&self, manifest_id: &ResourceId) -> ClientResult<Value> {
        self.execute_json(ApiRequest::new(endpoint::GET_EXPORT_MANIFEST, &[manifest_id]))
            .await
    }

    pub async fn delete_export_manifest(&self, manifest_id: &ResourceId) -> ClientResult<Value> {
        self.execute_json(ApiRequest::new(
            endpoint::DELETE_EXPORT_MANIFEST,
            &[manifest_id],
        ))
        .await
    }

    /// Start building a package from an export manifest.
    pub async fn export_package(&self, manifest_id: &ResourceId) -> ClientResult<Value> {
        self.execute_json(ApiRequest::new(endpoint::EXPORT_PACKAGE, &[manifest_id]))
            .await
    }

    /// Import a zip package into a folder.
    ///
    /// `restart_recipes` and `include_tags` are always sent as explicit `true`/`false`.
    pub async fn import_package(
        &self,
        folder_id: &ResourceId,
        content: impl Into<Bytes>,
        options: &ImportPackageOptions,
    ) -> ClientResult<Value> {
        let request = ApiRequest::new(endpoint::IMPORT_PACKAGE, &[folder_id])
            .query("restart_recipes", options.restart_recipes)
            .query("include_tags", options.include_tags)
            .query_opt(
                "folder_id_for_home_assets",
                options.folder_id_for_home_assets.as_deref(),
            )
            .binary(content);
        self.execute_json(request).await
    }

    pub async fn get_package(&self, package_id: &ResourceId) -> ClientResult<Value> {
        self.execute_json(ApiRequest::new(endpoint::GET_PACKAGE, &[package_id]))
            .await
    }

    /// Download a built package. The body is returned as-is, never decoded.
    pub async fn download_package(&self, package_id: &ResourceId) -> ClientResult<Bytes> {
        self.execute_bytes(ApiRequest::new(endpoint::DOWNLOAD_PACKAGE, &[package_id]))
            .await
    }
}
