//! Parameter structs for all MCP tools.
//!
//! Identifiers accept either a number or a string; defaults match the client's.

use schemars::JsonSchema;
use serde::Deserialize;

use workato_client::api::{DEFAULT_PER_PAGE, DEFAULT_ROWS_PER_PAGE};
use workato_client::{
    ConnectionFilter, FolderAssetsQuery, ImportPackageOptions, JobFilter, JsonObject, RecipeData,
    ResourceId, TestRecipeInput,
};

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn default_rows_per_page() -> u32 {
    DEFAULT_ROWS_PER_PAGE
}

// ── recipes ──

/// Parameters for the `list_recipes` tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListRecipesParams {
    #[schemars(description = "Include recipe tags in the response")]
    #[serde(default)]
    pub include_tags: bool,
}

/// Parameters for tools that act on a single recipe.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RecipeIdParams {
    #[schemars(description = "ID of the recipe")]
    pub recipe_id: ResourceId,
}

/// Parameters for the `test_recipe` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TestRecipeParams {
    #[schemars(description = "Recipe to test and the input data to run it with")]
    pub input: TestRecipeInput,
}

/// Parameters for the `create_recipe` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateRecipeParams {
    #[schemars(description = "Recipe definition")]
    pub recipe: RecipeData,
}

/// Parameters for the `update_recipe` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateRecipeParams {
    #[schemars(description = "ID of the recipe to update")]
    pub recipe_id: ResourceId,
    #[schemars(description = "Updated recipe definition")]
    pub recipe: RecipeData,
}

/// Parameters for the `copy_recipe` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CopyRecipeParams {
    #[schemars(description = "ID of the recipe to copy")]
    pub recipe_id: ResourceId,
    /// Destination folder. The remote default applies when omitted.
    #[schemars(description = "ID of the folder to copy the recipe into")]
    #[serde(default)]
    pub folder_id: Option<ResourceId>,
}

/// Parameters for the `update_recipe_connection` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateRecipeConnectionParams {
    #[schemars(description = "ID of the recipe")]
    pub recipe_id: ResourceId,
    #[schemars(description = "Name of the adapter whose connection changes")]
    pub adapter_name: String,
    #[schemars(description = "ID of the connection to use")]
    pub connection_id: i64,
}

/// Parameters for the `get_recipe_versions` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RecipeVersionsParams {
    #[schemars(description = "ID of the recipe")]
    pub recipe_id: ResourceId,
    #[schemars(description = "Page number (defaults to 1)")]
    #[serde(default = "default_page")]
    pub page: u32,
    #[schemars(description = "Versions per page (defaults to 100)")]
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

/// Parameters for the `get_recipe_version_details` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RecipeVersionParams {
    #[schemars(description = "ID of the recipe")]
    pub recipe_id: ResourceId,
    #[schemars(description = "ID of the version")]
    pub version_id: ResourceId,
}

/// Parameters for the `update_recipe_version_comment` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateRecipeVersionCommentParams {
    #[schemars(description = "ID of the recipe")]
    pub recipe_id: ResourceId,
    #[schemars(description = "ID of the version")]
    pub version_id: ResourceId,
    #[schemars(description = "New comment for the version")]
    pub comment: String,
}

// ── jobs ──

/// Parameters for the `list_jobs` tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListJobsParams {
    #[schemars(description = "Only jobs of this recipe")]
    #[serde(default)]
    pub recipe_id: Option<ResourceId>,
    #[schemars(description = "Only jobs with this status (e.g. 'success', 'failed')")]
    #[serde(default)]
    pub status: Option<String>,
    #[schemars(description = "Maximum number of jobs to return")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl From<ListJobsParams> for JobFilter {
    fn from(params: ListJobsParams) -> Self {
        Self {
            recipe_id: params.recipe_id,
            status: params.status,
            limit: params.limit,
        }
    }
}

/// Parameters for the `get_job` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct JobIdParams {
    #[schemars(description = "ID of the job")]
    pub job_id: ResourceId,
}

// ── export manifests & packages ──

/// Parameters for the `get_folder_assets` tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct FolderAssetsParams {
    #[schemars(description = "Folder to list; the home folder when omitted")]
    #[serde(default)]
    pub folder_id: Option<i64>,
    #[schemars(description = "Include recipe test cases")]
    #[serde(default)]
    pub include_test_cases: bool,
    #[schemars(description = "Include lookup table data")]
    #[serde(default)]
    pub include_data: bool,
}

impl From<FolderAssetsParams> for FolderAssetsQuery {
    fn from(params: FolderAssetsParams) -> Self {
        Self {
            folder_id: params.folder_id,
            include_test_cases: params.include_test_cases,
            include_data: params.include_data,
        }
    }
}

/// Parameters for the `create_export_manifest` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateExportManifestParams {
    #[schemars(description = "Export manifest definition (name, assets, folder_id, ...)")]
    pub export_manifest: JsonObject,
}

/// Parameters for the `update_export_manifest` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateExportManifestParams {
    #[schemars(description = "ID of the export manifest")]
    pub manifest_id: ResourceId,
    #[schemars(description = "Updated export manifest definition")]
    pub export_manifest: JsonObject,
}

/// Parameters for tools that act on a single export manifest.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ManifestIdParams {
    #[schemars(description = "ID of the export manifest")]
    pub manifest_id: ResourceId,
}

/// Parameters for the `import_package` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ImportPackageParams {
    #[schemars(description = "ID of the folder to import into")]
    pub folder_id: ResourceId,
    /// Zip archive, base64-encoded.
    #[schemars(description = "Package zip archive, base64-encoded")]
    pub file_bytes: String,
    #[schemars(description = "Restart running recipes after import")]
    #[serde(default)]
    pub restart_recipes: bool,
    #[schemars(description = "Import recipe tags")]
    #[serde(default)]
    pub include_tags: bool,
    #[schemars(description = "Folder to receive assets exported from the home folder")]
    #[serde(default)]
    pub folder_id_for_home_assets: Option<String>,
}

impl ImportPackageParams {
    pub fn options(&self) -> ImportPackageOptions {
        ImportPackageOptions {
            restart_recipes: self.restart_recipes,
            include_tags: self.include_tags,
            folder_id_for_home_assets: self.folder_id_for_home_assets.clone(),
        }
    }
}

/// Parameters for tools that act on a single package.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct PackageIdParams {
    #[schemars(description = "ID of the package")]
    pub package_id: ResourceId,
}

// ── custom connectors ──

/// Parameters for the `search_custom_connectors` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchCustomConnectorsParams {
    #[schemars(description = "Title of the custom connector")]
    pub title: String,
}

/// Parameters for tools that act on a single custom connector.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ConnectorIdParams {
    #[schemars(description = "ID of the custom connector")]
    pub connector_id: ResourceId,
}

/// Parameters for the `generate_schema_from_json` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SchemaFromJsonParams {
    #[schemars(description = "Sample JSON document")]
    pub sample: String,
}

/// Parameters for the `generate_schema_from_csv` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SchemaFromCsvParams {
    #[schemars(description = "Sample CSV content")]
    pub sample: String,
    #[schemars(description = "Column separator (comma, semicolon, space, tab, colon, pipe)")]
    #[serde(default)]
    pub col_sep: Option<String>,
}

/// Parameters for the `create_custom_connector` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateCustomConnectorParams {
    #[schemars(description = "Custom connector definition (title, description, code, ...)")]
    pub connector: JsonObject,
}

/// Parameters for the `update_custom_connector` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateCustomConnectorParams {
    #[schemars(description = "ID of the custom connector")]
    pub connector_id: ResourceId,
    #[schemars(description = "Updated custom connector definition")]
    pub connector: JsonObject,
}

// ── connections ──

/// Parameters for the `list_connections` tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListConnectionsParams {
    #[schemars(description = "Only connections in this folder")]
    #[serde(default)]
    pub folder_id: Option<String>,
    #[schemars(description = "Only connections with this parent connection")]
    #[serde(default)]
    pub parent_id: Option<String>,
    #[schemars(description = "Only connections with this external ID")]
    #[serde(default)]
    pub external_id: Option<String>,
    #[schemars(description = "Include runtime user connections ('true' or 'false')")]
    #[serde(default)]
    pub include_runtime_connections: Option<String>,
    #[schemars(description = "Additional fields to include (e.g. 'tags')")]
    #[serde(default)]
    pub includes: Option<Vec<String>>,
}

impl From<ListConnectionsParams> for ConnectionFilter {
    fn from(params: ListConnectionsParams) -> Self {
        Self {
            folder_id: params.folder_id,
            parent_id: params.parent_id,
            external_id: params.external_id,
            include_runtime_connections: params.include_runtime_connections,
            includes: params.includes.unwrap_or_default(),
        }
    }
}

/// Parameters for tools that act on a single connection.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ConnectionIdParams {
    #[schemars(description = "ID of the connection")]
    pub connection_id: ResourceId,
}

/// Parameters for the `create_connection` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateConnectionParams {
    #[schemars(description = "Connection definition (name, provider, folder_id, input, ...)")]
    pub connection: JsonObject,
}

/// Parameters for the `update_connection` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateConnectionParams {
    #[schemars(description = "ID of the connection")]
    pub connection_id: ResourceId,
    #[schemars(description = "Updated connection definition")]
    pub connection: JsonObject,
}

/// Parameters for the `disconnect_connection` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DisconnectConnectionParams {
    #[schemars(description = "ID of the connection")]
    pub connection_id: ResourceId,
    #[schemars(description = "Disconnect even if recipes are running")]
    #[serde(default)]
    pub force: bool,
}

// ── lookup tables ──

/// Parameters for the `list_lookup_tables` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListLookupTablesParams {
    #[schemars(description = "Page number (defaults to 1)")]
    #[serde(default = "default_page")]
    pub page: u32,
    #[schemars(description = "Tables per page (defaults to 100)")]
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for ListLookupTablesParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

/// Parameters for the `list_lookup_table_rows` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListLookupTableRowsParams {
    #[schemars(description = "ID of the lookup table")]
    pub lookup_table_id: ResourceId,
    #[schemars(description = "Page number (defaults to 1)")]
    #[serde(default = "default_page")]
    pub page: u32,
    #[schemars(description = "Rows per page (defaults to 500)")]
    #[serde(default = "default_rows_per_page")]
    pub per_page: u32,
    /// Column filters, e.g. `{"by_name": "alice"}`.
    #[schemars(description = "Column filters, e.g. {\"by_<column>\": value}")]
    #[serde(default)]
    pub filters: Option<JsonObject>,
}

/// Parameters for the `lookup_table_row` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct LookupTableRowParams {
    #[schemars(description = "ID of the lookup table")]
    pub lookup_table_id: ResourceId,
    #[schemars(description = "Column filters the row must match, e.g. {\"by_<column>\": value}")]
    pub filters: JsonObject,
}

/// Parameters for tools that act on a single lookup table row.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct LookupTableRowIdParams {
    #[schemars(description = "ID of the lookup table")]
    pub lookup_table_id: ResourceId,
    #[schemars(description = "ID of the row")]
    pub row_id: ResourceId,
}

/// Parameters for the `add_lookup_table_row` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddLookupTableRowParams {
    #[schemars(description = "ID of the lookup table")]
    pub lookup_table_id: ResourceId,
    #[schemars(description = "Row data keyed by column name")]
    pub data: JsonObject,
}

/// Parameters for the `create_lookup_table` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateLookupTableParams {
    #[schemars(description = "Lookup table definition (name, schema, folder_id, ...)")]
    pub lookup_table: JsonObject,
}

/// Parameters for the `batch_delete_lookup_tables` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct BatchDeleteLookupTablesParams {
    #[schemars(description = "IDs of the lookup tables to delete")]
    pub ids: Vec<ResourceId>,
}

/// Parameters for the `update_lookup_table_row` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateLookupTableRowParams {
    #[schemars(description = "ID of the lookup table")]
    pub lookup_table_id: ResourceId,
    #[schemars(description = "ID of the row")]
    pub row_id: ResourceId,
    #[schemars(description = "Column values to change")]
    pub data: JsonObject,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let params: RecipeVersionsParams =
            serde_json::from_value(json!({"recipe_id": 1})).unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, 100);

        let rows: ListLookupTableRowsParams =
            serde_json::from_value(json!({"lookup_table_id": "lt"})).unwrap();
        assert_eq!(rows.per_page, 500);
        assert!(rows.filters.is_none());

        let tables: ListLookupTablesParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(tables.page, 1);
        assert_eq!(tables.per_page, 100);
    }

    #[test]
    fn test_list_jobs_into_filter() {
        let params: ListJobsParams =
            serde_json::from_value(json!({"recipe_id": 1, "limit": 0})).unwrap();
        let filter = JobFilter::from(params);
        assert_eq!(filter.recipe_id, Some(ResourceId::Int(1)));
        assert_eq!(filter.status, None);
        assert_eq!(filter.limit, Some(0));
    }

    #[test]
    fn test_list_connections_into_filter() {
        let params: ListConnectionsParams =
            serde_json::from_value(json!({"includes": ["tags"]})).unwrap();
        let filter = ConnectionFilter::from(params);
        assert_eq!(filter.includes, vec!["tags".to_string()]);
        assert!(filter.folder_id.is_none());
    }

    #[test]
    fn test_import_defaults_to_false_flags() {
        let params: ImportPackageParams =
            serde_json::from_value(json!({"folder_id": 3, "file_bytes": "UEs="})).unwrap();
        let options = params.options();
        assert!(!options.restart_recipes);
        assert!(!options.include_tags);
        assert!(options.folder_id_for_home_assets.is_none());
    }

    #[test]
    fn test_test_recipe_input_nested() {
        let params: TestRecipeParams = serde_json::from_value(json!({
            "input": {"recipe_id": 7, "input_data": {"k": "v"}}
        }))
        .unwrap();
        assert_eq!(params.input.recipe_id, ResourceId::Int(7));
        assert_eq!(params.input.input_data.unwrap()["k"], "v");
    }
}
