//! Request assembly: path, query parameters and body for one endpoint call.

use bytes::Bytes;
use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::models::ResourceId;

/// Request payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    /// No body at all (not even `{}`).
    #[default]
    Empty,
    Json(Value),
    /// Raw bytes sent with `Content-Type: application/octet-stream`.
    Binary(Bytes),
}

/// Fully described call against one endpoint.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub(crate) endpoint: Endpoint,
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: RequestBody,
}

impl ApiRequest {
    pub fn new(endpoint: Endpoint, ids: &[&ResourceId]) -> Self {
        let path = endpoint.render(ids);
        Self {
            endpoint,
            path,
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a query parameter only when a value was supplied.
    pub fn query_opt<T: ToString>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Add `key=true` only when the flag is set.
    pub fn query_flag(self, key: &str, enabled: bool) -> Self {
        if enabled {
            self.query(key, "true")
        } else {
            self
        }
    }

    /// Add every key of a JSON filter object as a query parameter. A filter replaces
    /// any parameter already set under the same name.
    pub fn query_filters<'a, I>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a Value)>,
    {
        for (key, value) in filters {
            self.query.retain(|(existing, _)| existing != key);
            self.query.push((key.clone(), query_value(value)));
        }
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn binary(mut self, content: impl Into<Bytes>) -> Self {
        self.body = RequestBody::Binary(content.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }
}

/// Render a JSON filter value as a query string value: strings verbatim, everything
/// else as its JSON text.
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
