//! # Workato API Client
//!
//! Async client for the Workato workflow automation REST API. One method per remote
//! endpoint, each issuing exactly one HTTP request:
//!
//! - [`api::recipes`]: recipe CRUD, lifecycle (start/stop/test/copy/poll), versions
//! - [`api::jobs`]: job listing and folder listing
//! - [`api::connections`]: connection listing and CRUD
//! - [`api::packages`]: export manifests and package import/export/download
//! - [`api::connectors`]: custom connector SDK and schema generation
//! - [`api::lookup_tables`]: lookup tables and row-level operations
//!
//! Responses are returned as `serde_json::Value` except package download, which
//! returns the raw bytes.

pub mod api;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod request;

pub use client::WorkatoClient;
pub use config::{ClientConfig, API_TOKEN_ENV, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::{ClientError, ClientResult};
pub use models::{
    ConnectionFilter, FolderAssetsQuery, ImportPackageOptions, JobFilter, JsonObject,
    RecipeData, ResourceId, TestRecipeInput,
};
pub use request::{ApiRequest, RequestBody};
