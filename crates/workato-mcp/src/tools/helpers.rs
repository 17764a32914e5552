//! Shared helper functions for MCP tool implementations.

use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;
use serde_json::{json, Value};

use workato_client::{ClientError, ResourceId};

pub const PACKAGE_MIME_TYPE: &str = "application/zip";

/// `"<label>: <json>"` as a single text block.
pub fn labeled(label: &str, value: &Value) -> CallToolResult {
    CallToolResult::success(vec![Content::text(format!("{label}: {value}"))])
}

/// `"<label>:\n\n<json>"` for single-record detail views.
pub fn details(label: &str, value: &Value) -> CallToolResult {
    CallToolResult::success(vec![Content::text(format!("{label}:\n\n{value}"))])
}

/// `"Found N <noun>:\n\n<json>"` for listings.
pub fn found(noun: &str, value: &Value) -> CallToolResult {
    let count = record_count(value);
    CallToolResult::success(vec![Content::text(format!(
        "Found {count} {noun}:\n\n{value}"
    ))])
}

/// Number of records in a listing response.
///
/// Arrays count their elements; objects wrapping an `items` array count that array;
/// any other non-null value counts as one record.
pub fn record_count(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(map) => map
            .get("items")
            .and_then(Value::as_array)
            .map_or(1, Vec::len),
        Value::Null => 0,
        _ => 1,
    }
}

/// Convert a client failure into an MCP error. Remote failures carry status and body.
pub fn client_error(error: ClientError) -> McpError {
    let data = error
        .status()
        .map(|status| json!({ "status": status, "body": error.body().unwrap_or_default() }));
    McpError::internal_error(error.to_string(), data)
}

/// Wrap package bytes as an embedded binary resource.
pub fn package_resource(package_id: &ResourceId, blob: String) -> Result<Content, McpError> {
    let resource = json!({
        "type": "resource",
        "resource": {
            "uri": format!("workato://packages/{package_id}/download"),
            "mimeType": PACKAGE_MIME_TYPE,
            "blob": blob,
        }
    });
    serde_json::from_value(resource).map_err(|e| {
        McpError::internal_error(format!("Failed to build package resource: {e}"), None)
    })
}
