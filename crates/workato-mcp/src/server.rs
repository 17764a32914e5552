//! MCP ServerHandler implementation for Workato.
//!
//! Every tool maps to exactly one Workato API call. Tools are registered in five
//! independent routers that are merged at construction:
//!
//! **Recipes & jobs**
//! - `list_recipes`, `get_recipe`, `create_recipe`, `update_recipe`, `delete_recipe`
//! - `start_recipe`, `stop_recipe`, `test_recipe`, `copy_recipe`, `poll_recipe_now`,
//!   `reset_recipe_trigger`, `update_recipe_connection`
//! - `get_recipe_versions`, `get_recipe_version_details`, `update_recipe_version_comment`
//! - `list_jobs`, `get_job`
//!
//! **Recipe lifecycle (export/import)**
//! - `get_folder_assets`, `create_export_manifest`, `update_export_manifest`,
//!   `get_export_manifest`, `delete_export_manifest`
//! - `export_package`, `import_package`, `get_package`, `download_package`
//!
//! **Custom connectors**
//! - `search_custom_connectors`, `get_custom_connector_code`, `create_custom_connector`,
//!   `update_custom_connector`, `release_custom_connector`, `share_custom_connector`
//! - `generate_schema_from_json`, `generate_schema_from_csv`
//!
//! **Connections & folders**
//! - `list_connections`, `get_connection`, `create_connection`, `update_connection`,
//!   `disconnect_connection`, `delete_connection`, `list_folders`
//!
//! **Lookup tables**
//! - `list_lookup_tables`, `create_lookup_table`, `batch_delete_lookup_tables`
//! - `list_lookup_table_rows`, `lookup_table_row`, `get_lookup_table_row`,
//!   `add_lookup_table_row`, `update_lookup_table_row`, `delete_lookup_table_row`

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};

use workato_client::WorkatoClient;

use crate::tools::*;

/// Workato MCP server handler.
#[derive(Debug, Clone)]
pub struct WorkatoMcpServer {
    tool_router: ToolRouter<Self>,
    client: WorkatoClient,
}

impl WorkatoMcpServer {
    /// Create a server that forwards every tool call through `client`.
    pub fn new(client: WorkatoClient) -> Self {
        Self {
            tool_router: Self::recipe_tools()
                + Self::lifecycle_tools()
                + Self::connector_tools()
                + Self::connection_tools()
                + Self::lookup_table_tools(),
            client,
        }
    }

    pub fn client(&self) -> &WorkatoClient {
        &self.client
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for WorkatoMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "workato-mcp".to_string(),
                title: Some("Workato MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "Workato workflow automation API exposed as MCP tools".to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Workato is a workflow automation platform. Each tool performs one Workato \
                 API call and returns the JSON response behind a short label.\n\
                 Recipes: list_recipes/get_recipe to find recipes, start_recipe/stop_recipe \
                 to control them, test_recipe and list_jobs/get_job to check runs, \
                 get_recipe_versions for history.\n\
                 Deployment: create_export_manifest → export_package → get_package until \
                 ready → download_package (zip as base64 blob). import_package takes the zip \
                 base64-encoded in file_bytes.\n\
                 Also available: custom connector SDK tools, connections, folders and \
                 lookup tables with row-level operations.\n\
                 Identifiers accept numbers or strings."
                    .to_string(),
            ),
        }
    }
}

#[tool_router(router = recipe_tools)]
impl WorkatoMcpServer {
    #[tool(
        name = "list_recipes",
        description = "List all recipes in the Workato account. Set include_tags to also return each recipe's tags."
    )]
    pub async fn list_recipes(
        &self,
        Parameters(params): Parameters<ListRecipesParams>,
    ) -> Result<CallToolResult, McpError> {
        recipes::list_recipes(&self.client, params).await
    }

    #[tool(name = "get_recipe", description = "Get details of a specific recipe.")]
    pub async fn get_recipe(
        &self,
        Parameters(params): Parameters<RecipeIdParams>,
    ) -> Result<CallToolResult, McpError> {
        recipes::get_recipe(&self.client, params).await
    }

    #[tool(name = "start_recipe", description = "Start a recipe.")]
    pub async fn start_recipe(
        &self,
        Parameters(params): Parameters<RecipeIdParams>,
    ) -> Result<CallToolResult, McpError> {
        recipes::start_recipe(&self.client, params).await
    }

    #[tool(name = "stop_recipe", description = "Stop a running recipe.")]
    pub async fn stop_recipe(
        &self,
        Parameters(params): Parameters<RecipeIdParams>,
    ) -> Result<CallToolResult, McpError> {
        recipes::stop_recipe(&self.client, params).await
    }

    #[tool(
        name = "test_recipe",
        description = "Test-run a recipe with optional input data."
    )]
    pub async fn test_recipe(
        &self,
        Parameters(params): Parameters<TestRecipeParams>,
    ) -> Result<CallToolResult, McpError> {
        recipes::test_recipe(&self.client, params).await
    }

    #[tool(
        name = "create_recipe",
        description = "Create a new recipe from a name and recipe code (JSON), optionally in a folder."
    )]
    pub async fn create_recipe(
        &self,
        Parameters(params): Parameters<CreateRecipeParams>,
    ) -> Result<CallToolResult, McpError> {
        recipes::create_recipe(&self.client, params).await
    }

    #[tool(name = "update_recipe", description = "Update an existing recipe.")]
    pub async fn update_recipe(
        &self,
        Parameters(params): Parameters<UpdateRecipeParams>,
    ) -> Result<CallToolResult, McpError> {
        recipes::update_recipe(&self.client, params).await
    }

    #[tool(name = "delete_recipe", description = "Delete a recipe.")]
    pub async fn delete_recipe(
        &self,
        Parameters(params): Parameters<RecipeIdParams>,
    ) -> Result<CallToolResult, McpError> {
        recipes::delete_recipe(&self.client, params).await
    }

    #[tool(
        name = "copy_recipe",
        description = "Copy a recipe, optionally into another folder."
    )]
    pub async fn copy_recipe(
        &self,
        Parameters(params): Parameters<CopyRecipeParams>,
    ) -> Result<CallToolResult, McpError> {
        recipes::copy_recipe(&self.client, params).await
    }

    #[tool(
        name = "reset_recipe_trigger",
        description = "Reset the trigger cursor of a recipe."
    )]
    pub async fn reset_recipe_trigger(
        &self,
        Parameters(params): Parameters<RecipeIdParams>,
    ) -> Result<CallToolResult, McpError> {
        recipes::reset_recipe_trigger(&self.client, params).await
    }

    #[tool(
        name = "update_recipe_connection",
        description = "Point one of a stopped recipe's adapters at a different connection."
    )]
    pub async fn update_recipe_connection(
        &self,
        Parameters(params): Parameters<UpdateRecipeConnectionParams>,
    ) -> Result<CallToolResult, McpError> {
        recipes::update_recipe_connection(&self.client, params).await
    }

    #[tool(
        name = "poll_recipe_now",
        description = "Trigger an immediate poll of a polling-trigger recipe."
    )]
    pub async fn poll_recipe_now(
        &self,
        Parameters(params): Parameters<RecipeIdParams>,
    ) -> Result<CallToolResult, McpError> {
        recipes::poll_recipe_now(&self.client, params).await
    }

    #[tool(
        name = "get_recipe_versions",
        description = "List the versions of a recipe, paginated (page defaults to 1, per_page to 100)."
    )]
    pub async fn get_recipe_versions(
        &self,
        Parameters(params): Parameters<RecipeVersionsParams>,
    ) -> Result<CallToolResult, McpError> {
        recipes::get_recipe_versions(&self.client, params).await
    }

    #[tool(
        name = "get_recipe_version_details",
        description = "Get details of one version of a recipe."
    )]
    pub async fn get_recipe_version_details(
        &self,
        Parameters(params): Parameters<RecipeVersionParams>,
    ) -> Result<CallToolResult, McpError> {
        recipes::get_recipe_version_details(&self.client, params).await
    }

    #[tool(
        name = "update_recipe_version_comment",
        description = "Set the comment on one version of a recipe."
    )]
    pub async fn update_recipe_version_comment(
        &self,
        Parameters(params): Parameters<UpdateRecipeVersionCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        recipes::update_recipe_version_comment(&self.client, params).await
    }

    #[tool(
        name = "list_jobs",
        description = "List jobs, optionally filtered by recipe, status and a maximum count."
    )]
    pub async fn list_jobs(
        &self,
        Parameters(params): Parameters<ListJobsParams>,
    ) -> Result<CallToolResult, McpError> {
        recipes::list_jobs(&self.client, params).await
    }

    #[tool(name = "get_job", description = "Get details of a specific job.")]
    pub async fn get_job(
        &self,
        Parameters(params): Parameters<JobIdParams>,
    ) -> Result<CallToolResult, McpError> {
        recipes::get_job(&self.client, params).await
    }
}

#[tool_router(router = lifecycle_tools)]
impl WorkatoMcpServer {
    #[tool(
        name = "get_folder_assets",
        description = "List the assets of a folder that can go into an export manifest."
    )]
    pub async fn get_folder_assets(
        &self,
        Parameters(params): Parameters<FolderAssetsParams>,
    ) -> Result<CallToolResult, McpError> {
        lifecycle::get_folder_assets(&self.client, params).await
    }

    #[tool(
        name = "create_export_manifest",
        description = "Create an export manifest describing the assets to package."
    )]
    pub async fn create_export_manifest(
        &self,
        Parameters(params): Parameters<CreateExportManifestParams>,
    ) -> Result<CallToolResult, McpError> {
        lifecycle::create_export_manifest(&self.client, params).await
    }

    #[tool(
        name = "update_export_manifest",
        description = "Update an existing export manifest."
    )]
    pub async fn update_export_manifest(
        &self,
        Parameters(params): Parameters<UpdateExportManifestParams>,
    ) -> Result<CallToolResult, McpError> {
        lifecycle::update_export_manifest(&self.client, params).await
    }

    #[tool(name = "get_export_manifest", description = "Get an export manifest.")]
    pub async fn get_export_manifest(
        &self,
        Parameters(params): Parameters<ManifestIdParams>,
    ) -> Result<CallToolResult, McpError> {
        lifecycle::get_export_manifest(&self.client, params).await
    }

    #[tool(
        name = "delete_export_manifest",
        description = "Delete an export manifest."
    )]
    pub async fn delete_export_manifest(
        &self,
        Parameters(params): Parameters<ManifestIdParams>,
    ) -> Result<CallToolResult, McpError> {
        lifecycle::delete_export_manifest(&self.client, params).await
    }

    #[tool(
        name = "export_package",
        description = "Start building a package from an export manifest. Poll get_package until it completes."
    )]
    pub async fn export_package(
        &self,
        Parameters(params): Parameters<ManifestIdParams>,
    ) -> Result<CallToolResult, McpError> {
        lifecycle::export_package(&self.client, params).await
    }

    #[tool(
        name = "import_package",
        description = "Import a package zip (base64-encoded in file_bytes) into a folder."
    )]
    pub async fn import_package(
        &self,
        Parameters(params): Parameters<ImportPackageParams>,
    ) -> Result<CallToolResult, McpError> {
        lifecycle::import_package(&self.client, params).await
    }

    #[tool(
        name = "get_package",
        description = "Get the status and details of an export or import package."
    )]
    pub async fn get_package(
        &self,
        Parameters(params): Parameters<PackageIdParams>,
    ) -> Result<CallToolResult, McpError> {
        lifecycle::get_package(&self.client, params).await
    }

    #[tool(
        name = "download_package",
        description = "Download a built package. Returns the zip archive as a binary resource."
    )]
    pub async fn download_package(
        &self,
        Parameters(params): Parameters<PackageIdParams>,
    ) -> Result<CallToolResult, McpError> {
        lifecycle::download_package(&self.client, params).await
    }
}

#[tool_router(router = connector_tools)]
impl WorkatoMcpServer {
    #[tool(
        name = "search_custom_connectors",
        description = "Search custom connectors by title."
    )]
    pub async fn search_custom_connectors(
        &self,
        Parameters(params): Parameters<SearchCustomConnectorsParams>,
    ) -> Result<CallToolResult, McpError> {
        connectors::search_custom_connectors(&self.client, params).await
    }

    #[tool(
        name = "get_custom_connector_code",
        description = "Get the source code of a custom connector."
    )]
    pub async fn get_custom_connector_code(
        &self,
        Parameters(params): Parameters<ConnectorIdParams>,
    ) -> Result<CallToolResult, McpError> {
        connectors::get_custom_connector_code(&self.client, params).await
    }

    #[tool(
        name = "generate_schema_from_json",
        description = "Generate a Workato schema from a sample JSON document."
    )]
    pub async fn generate_schema_from_json(
        &self,
        Parameters(params): Parameters<SchemaFromJsonParams>,
    ) -> Result<CallToolResult, McpError> {
        connectors::generate_schema_from_json(&self.client, params).await
    }

    #[tool(
        name = "generate_schema_from_csv",
        description = "Generate a Workato schema from sample CSV, with an optional column separator."
    )]
    pub async fn generate_schema_from_csv(
        &self,
        Parameters(params): Parameters<SchemaFromCsvParams>,
    ) -> Result<CallToolResult, McpError> {
        connectors::generate_schema_from_csv(&self.client, params).await
    }

    #[tool(
        name = "create_custom_connector",
        description = "Create a custom connector."
    )]
    pub async fn create_custom_connector(
        &self,
        Parameters(params): Parameters<CreateCustomConnectorParams>,
    ) -> Result<CallToolResult, McpError> {
        connectors::create_custom_connector(&self.client, params).await
    }

    #[tool(
        name = "update_custom_connector",
        description = "Update a custom connector."
    )]
    pub async fn update_custom_connector(
        &self,
        Parameters(params): Parameters<UpdateCustomConnectorParams>,
    ) -> Result<CallToolResult, McpError> {
        connectors::update_custom_connector(&self.client, params).await
    }

    #[tool(
        name = "release_custom_connector",
        description = "Release the latest version of a custom connector."
    )]
    pub async fn release_custom_connector(
        &self,
        Parameters(params): Parameters<ConnectorIdParams>,
    ) -> Result<CallToolResult, McpError> {
        connectors::release_custom_connector(&self.client, params).await
    }

    #[tool(
        name = "share_custom_connector",
        description = "Share a custom connector."
    )]
    pub async fn share_custom_connector(
        &self,
        Parameters(params): Parameters<ConnectorIdParams>,
    ) -> Result<CallToolResult, McpError> {
        connectors::share_custom_connector(&self.client, params).await
    }
}

#[tool_router(router = connection_tools)]
impl WorkatoMcpServer {
    #[tool(
        name = "list_connections",
        description = "List connections, optionally filtered by folder, parent or external ID."
    )]
    pub async fn list_connections(
        &self,
        Parameters(params): Parameters<ListConnectionsParams>,
    ) -> Result<CallToolResult, McpError> {
        connections::list_connections(&self.client, params).await
    }

    #[tool(name = "get_connection", description = "Get details of a connection.")]
    pub async fn get_connection(
        &self,
        Parameters(params): Parameters<ConnectionIdParams>,
    ) -> Result<CallToolResult, McpError> {
        connections::get_connection(&self.client, params).await
    }

    #[tool(name = "create_connection", description = "Create a connection.")]
    pub async fn create_connection(
        &self,
        Parameters(params): Parameters<CreateConnectionParams>,
    ) -> Result<CallToolResult, McpError> {
        connections::create_connection(&self.client, params).await
    }

    #[tool(name = "update_connection", description = "Update a connection.")]
    pub async fn update_connection(
        &self,
        Parameters(params): Parameters<UpdateConnectionParams>,
    ) -> Result<CallToolResult, McpError> {
        connections::update_connection(&self.client, params).await
    }

    #[tool(
        name = "disconnect_connection",
        description = "Disconnect a connection. Set force to disconnect even when active recipes use it."
    )]
    pub async fn disconnect_connection(
        &self,
        Parameters(params): Parameters<DisconnectConnectionParams>,
    ) -> Result<CallToolResult, McpError> {
        connections::disconnect_connection(&self.client, params).await
    }

    #[tool(name = "delete_connection", description = "Delete a connection.")]
    pub async fn delete_connection(
        &self,
        Parameters(params): Parameters<ConnectionIdParams>,
    ) -> Result<CallToolResult, McpError> {
        connections::delete_connection(&self.client, params).await
    }

    #[tool(name = "list_folders", description = "List all folders.")]
    pub async fn list_folders(&self) -> Result<CallToolResult, McpError> {
        connections::list_folders(&self.client).await
    }
}

#[tool_router(router = lookup_table_tools)]
impl WorkatoMcpServer {
    #[tool(
        name = "list_lookup_tables",
        description = "List lookup tables, paginated (page defaults to 1, per_page to 100)."
    )]
    pub async fn list_lookup_tables(
        &self,
        Parameters(params): Parameters<ListLookupTablesParams>,
    ) -> Result<CallToolResult, McpError> {
        lookup_tables::list_lookup_tables(&self.client, params).await
    }

    #[tool(
        name = "list_lookup_table_rows",
        description = "List rows of a lookup table, paginated (per_page defaults to 500), with optional column filters."
    )]
    pub async fn list_lookup_table_rows(
        &self,
        Parameters(params): Parameters<ListLookupTableRowsParams>,
    ) -> Result<CallToolResult, McpError> {
        lookup_tables::list_lookup_table_rows(&self.client, params).await
    }

    #[tool(
        name = "lookup_table_row",
        description = "Find the first row of a lookup table matching the given column filters."
    )]
    pub async fn lookup_table_row(
        &self,
        Parameters(params): Parameters<LookupTableRowParams>,
    ) -> Result<CallToolResult, McpError> {
        lookup_tables::lookup_table_row(&self.client, params).await
    }

    #[tool(
        name = "get_lookup_table_row",
        description = "Get one row of a lookup table by row ID."
    )]
    pub async fn get_lookup_table_row(
        &self,
        Parameters(params): Parameters<LookupTableRowIdParams>,
    ) -> Result<CallToolResult, McpError> {
        lookup_tables::get_lookup_table_row(&self.client, params).await
    }

    #[tool(
        name = "add_lookup_table_row",
        description = "Add a row to a lookup table."
    )]
    pub async fn add_lookup_table_row(
        &self,
        Parameters(params): Parameters<AddLookupTableRowParams>,
    ) -> Result<CallToolResult, McpError> {
        lookup_tables::add_lookup_table_row(&self.client, params).await
    }

    #[tool(name = "create_lookup_table", description = "Create a lookup table.")]
    pub async fn create_lookup_table(
        &self,
        Parameters(params): Parameters<CreateLookupTableParams>,
    ) -> Result<CallToolResult, McpError> {
        lookup_tables::create_lookup_table(&self.client, params).await
    }

    #[tool(
        name = "batch_delete_lookup_tables",
        description = "Delete several lookup tables at once."
    )]
    pub async fn batch_delete_lookup_tables(
        &self,
        Parameters(params): Parameters<BatchDeleteLookupTablesParams>,
    ) -> Result<CallToolResult, McpError> {
        lookup_tables::batch_delete_lookup_tables(&self.client, params).await
    }

    #[tool(
        name = "update_lookup_table_row",
        description = "Update a row of a lookup table."
    )]
    pub async fn update_lookup_table_row(
        &self,
        Parameters(params): Parameters<UpdateLookupTableRowParams>,
    ) -> Result<CallToolResult, McpError> {
        lookup_tables::update_lookup_table_row(&self.client, params).await
    }

    #[tool(
        name = "delete_lookup_table_row",
        description = "Delete a row of a lookup table."
    )]
    pub async fn delete_lookup_table_row(
        &self,
        Parameters(params): Parameters<LookupTableRowIdParams>,
    ) -> Result<CallToolResult, McpError> {
        lookup_tables::delete_lookup_table_row(&self.client, params).await
    }
}
