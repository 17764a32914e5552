//! HTTP client for the Workato REST API.
//!
//! Every endpoint method builds an [`ApiRequest`] and hands it to [`WorkatoClient::execute`],
//! which issues exactly one HTTP request with the shared header set. Redirects are
//! only followed for endpoints that opt in; anywhere else a 3xx is an API error.

use std::sync::Arc;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::redirect::Policy;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::request::{ApiRequest, RequestBody};

const JSON_CONTENT_TYPE: &str = "application/json";
const BINARY_CONTENT_TYPE: &str = "application/octet-stream";
const MAX_REDIRECTS: usize = 10;

/// Client for the Workato API.
///
/// Cheap to clone; clones share the connection pool and configuration.
#[derive(Debug, Clone)]
pub struct WorkatoClient {
    http: reqwest::Client,
    redirecting: reqwest::Client,
    config: Arc<ClientConfig>,
    headers: Arc<HeaderMap>,
}

impl WorkatoClient {
    /// Create a client from a resolved configuration.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let mut bearer = HeaderValue::from_str(&config.bearer())
            .map_err(|e| ClientError::config_error(format!("Invalid API token: {e}")))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        Ok(Self {
            http: reqwest::Client::builder().redirect(Policy::none()).build()?,
            redirecting: reqwest::Client::builder()
                .redirect(Policy::limited(MAX_REDIRECTS))
                .build()?,
            config: Arc::new(config),
            headers: Arc::new(headers),
        })
    }

    /// Create a client from explicit overrides with environment fallback.
    pub fn from_env(api_token: Option<String>, base_url: Option<String>) -> ClientResult<Self> {
        Self::new(ClientConfig::resolve(api_token, base_url)?)
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Headers sent with every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Issue one request and return the raw successful response.
    ///
    /// Non-success statuses become [`ClientError::Api`] carrying status and body.
    pub async fn execute(&self, request: ApiRequest) -> ClientResult<reqwest::Response> {
        let ApiRequest {
            endpoint,
            path,
            query,
            body,
        } = request;
        let url = format!("{}{}", self.config.base_url(), path);

        debug!(method = %endpoint.method, path = %path, "Sending Workato API request");

        let mut headers = HeaderMap::clone(&self.headers);
        if matches!(body, RequestBody::Binary(_)) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(BINARY_CONTENT_TYPE));
        }

        let http = if endpoint.follow_redirects {
            &self.redirecting
        } else {
            &self.http
        };
        let mut builder = http.request(endpoint.method.clone(), &url).headers(headers);
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.body(serde_json::to_vec(&value)?),
            RequestBody::Binary(content) => builder.body(content),
        };

        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(
                    method = %endpoint.method,
                    path = %path,
                    status = status.as_u16(),
                    error = %e,
                    "Failed to read error response body"
                );
                String::new()
            }
        };
        warn!(
            method = %endpoint.method,
            path = %path,
            status = status.as_u16(),
            "Workato API request failed"
        );
        Err(ClientError::api_error(status.as_u16(), body))
    }

    /// Issue one request and decode the body as JSON. An empty body decodes to `null`.
    pub async fn execute_json(&self, request: ApiRequest) -> ClientResult<Value> {
        let response = self.execute(request).await?;
        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&body)?)
    }

    /// Issue one request and return the body bytes untouched.
    pub async fn execute_bytes(&self, request: ApiRequest) -> ClientResult<Bytes> {
        let response = self.execute(request).await?;
        Ok(response.bytes().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> WorkatoClient {
        let config = ClientConfig::new("test_token", "https://test.workato.com/api").unwrap();
        WorkatoClient::new(config).unwrap()
    }

    #[test]
    fn test_shared_headers() {
        let client = client();
        let headers = client.headers();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer test_token");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), JSON_CONTENT_TYPE);
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
    }

    #[test]
    fn test_debug_hides_token() {
        let debug = format!("{:?}", client());
        assert!(!debug.contains("test_token"));
    }

    #[test]
    fn test_invalid_token_rejected() {
        let config = ClientConfig::new("bad\ntoken", "https://test.workato.com/api").unwrap();
        let err = WorkatoClient::new(config).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_base_url() {
        assert_eq!(client().base_url(), "https://test.workato.com/api");
    }
}
