//! Declarative endpoint table for the Workato REST API.
//!
//! Each entry pairs an HTTP verb with a path template. `{}` placeholders are filled
//! in order from the identifiers supplied at call time. Only endpoints built with
//! [`Endpoint::redirecting`] follow HTTP redirects; every other 3xx is a failure.

use reqwest::Method;

use crate::models::ResourceId;

/// A single remote endpoint: verb plus path template relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
    pub follow_redirects: bool,
}

impl Endpoint {
    const fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            follow_redirects: false,
        }
    }

    const fn redirecting(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            follow_redirects: true,
        }
    }

    /// Number of identifiers the path template expects.
    pub fn arity(&self) -> usize {
        self.path.matches("{}").count()
    }

    /// Render the path with identifiers substituted in order.
    pub fn render(&self, ids: &[&ResourceId]) -> String {
        debug_assert_eq!(
            self.arity(),
            ids.len(),
            "identifier count mismatch for {}",
            self.path
        );

        let mut rendered = String::with_capacity(self.path.len() + 16);
        let mut ids = ids.iter();
        for (i, segment) in self.path.split("{}").enumerate() {
            if i > 0 {
                if let Some(id) = ids.next() {
                    rendered.push_str(&id.to_string());
                }
            }
            rendered.push_str(segment);
        }
        rendered
    }
}

// ── Recipes ──
pub const LIST_RECIPES: Endpoint = Endpoint::new(Method::GET, "/recipes");
pub const CREATE_RECIPE: Endpoint = Endpoint::new(Method::POST, "/recipes");
pub const GET_RECIPE: Endpoint = Endpoint::new(Method::GET, "/recipes/{}");
pub const UPDATE_RECIPE: Endpoint = Endpoint::new(Method::PUT, "/recipes/{}");
pub const DELETE_RECIPE: Endpoint = Endpoint::new(Method::DELETE, "/recipes/{}");
pub const START_RECIPE: Endpoint = Endpoint::new(Method::PUT, "/recipes/{}/start");
pub const STOP_RECIPE: Endpoint = Endpoint::new(Method::PUT, "/recipes/{}/stop");
pub const TEST_RECIPE: Endpoint = Endpoint::new(Method::POST, "/recipes/{}/test_run");
pub const COPY_RECIPE: Endpoint = Endpoint::new(Method::POST, "/recipes/{}/copy");
pub const RESET_RECIPE_TRIGGER: Endpoint = Endpoint::new(Method::POST, "/recipes/{}/reset_trigger");
pub const UPDATE_RECIPE_CONNECTION: Endpoint = Endpoint::new(Method::PUT, "/recipes/{}/connect");
pub const POLL_RECIPE_NOW: Endpoint = Endpoint::new(Method::POST, "/recipes/{}/poll_now");
pub const LIST_RECIPE_VERSIONS: Endpoint = Endpoint::new(Method::GET, "/recipes/{}/versions");
pub const GET_RECIPE_VERSION: Endpoint = Endpoint::new(Method::GET, "/recipes/{}/versions/{}");
pub const UPDATE_RECIPE_VERSION: Endpoint =
    Endpoint::new(Method::PATCH, "/recipes/{}/versions/{}");

// ── Jobs & folders ──
pub const LIST_JOBS: Endpoint = Endpoint::new(Method::GET, "/jobs");
pub const GET_JOB: Endpoint = Endpoint::new(Method::GET, "/jobs/{}");
pub const LIST_FOLDERS: Endpoint = Endpoint::new(Method::GET, "/folders");

// ── Connections ──
pub const LIST_CONNECTIONS: Endpoint = Endpoint::new(Method::GET, "/connections");
pub const CREATE_CONNECTION: Endpoint = Endpoint::new(Method::POST, "/connections");
pub const GET_CONNECTION: Endpoint = Endpoint::new(Method::GET, "/connections/{}");
pub const UPDATE_CONNECTION: Endpoint = Endpoint::new(Method::PUT, "/connections/{}");
pub const DELETE_CONNECTION: Endpoint = Endpoint::new(Method::DELETE, "/connections/{}");
pub const DISCONNECT_CONNECTION: Endpoint =
    Endpoint::new(Method::POST, "/connections/{}/disconnect");

// ── Export manifests & packages ──
pub const FOLDER_ASSETS: Endpoint = Endpoint::new(Method::GET, "/export_manifests/folder_assets");
pub const CREATE_EXPORT_MANIFEST: Endpoint = Endpoint::new(Method::POST, "/export_manifests");
pub const GET_EXPORT_MANIFEST: Endpoint = Endpoint::new(Method::GET, "/export_manifests/{}");
pub const UPDATE_EXPORT_MANIFEST: Endpoint = Endpoint::new(Method::PUT, "/export_manifests/{}");
pub const DELETE_EXPORT_MANIFEST: Endpoint =
    Endpoint::new(Method::DELETE, "/export_manifests/{}");
pub const EXPORT_PACKAGE: Endpoint = Endpoint::new(Method::POST, "/packages/export/{}");
pub const IMPORT_PACKAGE: Endpoint = Endpoint::new(Method::POST, "/packages/import/{}");
pub const GET_PACKAGE: Endpoint = Endpoint::new(Method::GET, "/packages/{}");
pub const DOWNLOAD_PACKAGE: Endpoint =
    Endpoint::redirecting(Method::GET, "/packages/{}/download");

// ── Custom connector SDK ──
pub const SEARCH_CUSTOM_CONNECTORS: Endpoint =
    Endpoint::new(Method::GET, "/custom_connectors/search");
pub const CREATE_CUSTOM_CONNECTOR: Endpoint = Endpoint::new(Method::POST, "/custom_connectors");
pub const UPDATE_CUSTOM_CONNECTOR: Endpoint = Endpoint::new(Method::PUT, "/custom_connectors/{}");
pub const CUSTOM_CONNECTOR_CODE: Endpoint =
    Endpoint::new(Method::GET, "/custom_connectors/{}/code");
pub const RELEASE_CUSTOM_CONNECTOR: Endpoint =
    Endpoint::new(Method::POST, "/custom_connectors/{}/release");
pub const SHARE_CUSTOM_CONNECTOR: Endpoint =
    Endpoint::new(Method::POST, "/custom_connectors/{}/share");
pub const GENERATE_SCHEMA_JSON: Endpoint = Endpoint::new(Method::POST, "/sdk/generate_schema/json");
pub const GENERATE_SCHEMA_CSV: Endpoint = Endpoint::new(Method::POST, "/sdk/generate_schema/csv");

// ── Lookup tables ──
pub const LIST_LOOKUP_TABLES: Endpoint = Endpoint::new(Method::GET, "/lookup_tables");
pub const CREATE_LOOKUP_TABLE: Endpoint = Endpoint::new(Method::POST, "/lookup_tables");
pub const BATCH_DELETE_LOOKUP_TABLES: Endpoint =
    Endpoint::new(Method::POST, "/lookup_tables/batch_delete");
pub const LIST_LOOKUP_TABLE_ROWS: Endpoint = Endpoint::new(Method::GET, "/lookup_tables/{}/rows");
pub const ADD_LOOKUP_TABLE_ROW: Endpoint = Endpoint::new(Method::POST, "/lookup_tables/{}/rows");
pub const LOOKUP_TABLE_ROW: Endpoint = Endpoint::new(Method::GET, "/lookup_tables/{}/lookup");
pub const GET_LOOKUP_TABLE_ROW: Endpoint = Endpoint::new(Method::GET, "/lookup_tables/{}/rows/{}");
pub const UPDATE_LOOKUP_TABLE_ROW: Endpoint =
    Endpoint::new(Method::PUT, "/lookup_tables/{}/rows/{}");
pub const DELETE_LOOKUP_TABLE_ROW: Endpoint =
    Endpoint::new(Method::DELETE, "/lookup_tables/{}/rows/{}");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_ids() {
        assert_eq!(LIST_RECIPES.render(&[]), "/recipes");
        assert_eq!(LIST_RECIPES.arity(), 0);
    }

    #[test]
    fn test_render_trailing_id() {
        assert_eq!(GET_RECIPE.render(&[&ResourceId::Int(42)]), "/recipes/42");
    }

    #[test]
    fn test_render_inner_id() {
        let id = ResourceId::from("abc");
        assert_eq!(START_RECIPE.render(&[&id]), "/recipes/abc/start");
    }

    #[test]
    fn test_render_two_ids_in_order() {
        let table = ResourceId::Int(7);
        let row = ResourceId::Int(99);
        assert_eq!(UPDATE_LOOKUP_TABLE_ROW.arity(), 2);
        assert_eq!(
            UPDATE_LOOKUP_TABLE_ROW.render(&[&table, &row]),
            "/lookup_tables/7/rows/99"
        );
        assert_eq!(
            GET_RECIPE_VERSION.render(&[&ResourceId::Int(1), &ResourceId::Int(3)]),
            "/recipes/1/versions/3"
        );
    }

    #[test]
    fn test_verbs_match_remote_api() {
        assert_eq!(START_RECIPE.method, Method::PUT);
        assert_eq!(UPDATE_RECIPE_VERSION.method, Method::PATCH);
        assert_eq!(SEARCH_CUSTOM_CONNECTORS.method, Method::GET);
        assert_eq!(BATCH_DELETE_LOOKUP_TABLES.method, Method::POST);
        assert_eq!(DELETE_LOOKUP_TABLE_ROW.method, Method::DELETE);
    }

    #[test]
    fn test_only_download_follows_redirects() {
        assert!(DOWNLOAD_PACKAGE.follow_redirects);
        for endpoint in [
            CREATE_RECIPE,
            GET_RECIPE,
            GET_PACKAGE,
            EXPORT_PACKAGE,
            IMPORT_PACKAGE,
            LIST_LOOKUP_TABLE_ROWS,
        ] {
            assert!(!endpoint.follow_redirects, "{} follows redirects", endpoint.path);
        }
    }
}
