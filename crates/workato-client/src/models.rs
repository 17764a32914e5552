//! Request shapes sent to the Workato API.
//!
//! Response payloads are never modelled here; they come back as `serde_json::Value`.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Arbitrary JSON object forwarded verbatim to the remote API.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Remote identifier: Workato accepts numeric ids and string handles interchangeably.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ResourceId {
    Int(i64),
    Str(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Int(id) => write!(f, "{id}"),
            ResourceId::Str(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        ResourceId::Int(id)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        ResourceId::Str(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        ResourceId::Str(id)
    }
}

/// Recipe definition used by create and update.
///
/// `code` is the serialized workflow graph (trigger + actions). It is opaque here and
/// validated only by the remote platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RecipeData {
    /// Name of the recipe.
    #[schemars(description = "Name of the recipe")]
    pub name: String,
    /// Recipe code in JSON format.
    #[schemars(description = "Recipe code in JSON format")]
    pub code: String,
    #[schemars(description = "ID of the folder to place the recipe in")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    #[schemars(description = "Description of the recipe")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Test-run request for a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TestRecipeInput {
    #[schemars(description = "ID of the recipe to test")]
    pub recipe_id: ResourceId,
    #[schemars(description = "Input data for testing the recipe")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_data: Option<JsonObject>,
}

/// Filters for listing jobs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilter {
    pub recipe_id: Option<ResourceId>,
    pub status: Option<String>,
    pub limit: Option<u32>,
}

/// Filters for listing connections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionFilter {
    pub folder_id: Option<String>,
    pub parent_id: Option<String>,
    pub external_id: Option<String>,
    pub include_runtime_connections: Option<String>,
    /// Extra fields to include, sent as repeated `includes[]` parameters.
    pub includes: Vec<String>,
}

/// Query for the export-manifest folder asset listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderAssetsQuery {
    pub folder_id: Option<i64>,
    pub include_test_cases: bool,
    pub include_data: bool,
}

/// Options for importing a package into a folder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportPackageOptions {
    pub restart_recipes: bool,
    pub include_tags: bool,
    pub folder_id_for_home_assets: Option<String>,
}
