//! Shared HTTP client

use crate::config::ClientConfig;
use crate::endpoints::{GeocodingApi, IrradianceApi};
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Request, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// SolarSite API client
///
/// Wraps `reqwest` with the shared configuration, a User-Agent suitable for
/// Nominatim's usage policy, and a correlation ID on every request. Requests
/// are issued once; there is no retry.
#[derive(Clone)]
pub struct SolarSiteClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl SolarSiteClient {
    /// Create a new client with configuration from environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| ApiError::config("user_agent contains invalid header characters"))?;
        default_headers.insert(USER_AGENT, agent);

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access Nominatim geocoding endpoints
    #[must_use]
    pub fn geocoding(&self) -> GeocodingApi {
        GeocodingApi::new(self.clone())
    }

    /// Access NASA POWER irradiance endpoints
    #[must_use]
    pub fn irradiance(&self) -> IrradianceApi {
        IrradianceApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Build a GET request for `base` + `path` with URL-encoded query parameters
    pub fn build_get<Q: Serialize + ?Sized>(
        &self,
        base: &str,
        path: &str,
        query: &Q,
    ) -> ApiResult<Request> {
        let raw = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
        let url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;

        self.inner
            .get(url)
            .query(query)
            .header(X_REQUEST_ID, Uuid::new_v4().to_string())
            .build()
            .map_err(ApiError::Request)
    }

    /// Execute a prepared request and deserialize the JSON body
    #[instrument(skip(self, request), fields(url = %request.url(), request_id))]
    pub async fn execute_json<T: DeserializeOwned>(&self, request: Request) -> ApiResult<T> {
        let request_id = request
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let start = Instant::now();
        let result = match self.inner.execute(request).await {
            Ok(response) => Self::handle_response(response).await,
            Err(e) => Err(ApiError::Request(e)),
        };
        let elapsed = start.elapsed();

        match &result {
            Ok(_) => debug!(
                request_id = %request_id,
                elapsed_ms = elapsed.as_millis(),
                "Request succeeded"
            ),
            Err(e) => warn!(
                request_id = %request_id,
                elapsed_ms = elapsed.as_millis(),
                kind = %e.kind(),
                error = %e,
                "Request failed"
            ),
        }

        result
    }

    /// Handle HTTP response and deserialize
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let message = response
                .text()
                .await
                .ok()
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
            Err(ApiError::api_response(status.as_u16(), message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn client() -> SolarSiteClient {
        SolarSiteClient::with_config(ClientConfig::default()).unwrap()
    }

    /// Serves `response` verbatim to the first connection and returns the base URL.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}")
    }

    async fn fetch(response: &'static str) -> ApiResult<serde_json::Value> {
        let base = serve_once(response).await;
        let client = client();
        let request = client.build_get(&base, "reverse", &[("format", "jsonv2")])?;
        client.execute_json(request).await
    }

    #[tokio::test]
    async fn test_execute_json_decodes_body() {
        let value = fetch(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 23\r\nConnection: close\r\n\r\n{\"display_name\":\"Pune\"}",
        )
        .await
        .unwrap();
        assert_eq!(value["display_name"], "Pune");
    }

    #[tokio::test]
    async fn test_execute_json_reports_error_status_with_body() {
        let err = fetch(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 4\r\nConnection: close\r\n\r\ndown",
        )
        .await
        .unwrap_err();

        assert_eq!(err.kind(), FailureKind::Status);
        match err {
            ApiError::ApiResponse { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "down");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_execute_json_falls_back_to_reason_for_empty_error_body() {
        let err = fetch("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::ApiResponse { status: 404, ref message } if message == "Not Found"
        ));
    }

    #[tokio::test]
    async fn test_execute_json_classifies_truncated_json_as_malformed() {
        let err = fetch(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 1\r\nConnection: close\r\n\r\n{",
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::Json(_)));
        assert_eq!(err.kind(), FailureKind::Malformed);
    }

    #[test]
    fn test_client_creation() {
        assert!(SolarSiteClient::with_config(ClientConfig::default()).is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = ClientConfig::default().with_power_url("");
        assert!(SolarSiteClient::with_config(config).is_err());
    }

    #[test]
    fn test_build_get_joins_paths_and_encodes_query() {
        let request = client()
            .build_get("https://example.com/", "/search", &[("q", "a b&c")])
            .unwrap();

        assert_eq!(request.url().path(), "/search");
        assert_eq!(request.url().query(), Some("q=a+b%26c"));
        assert!(request.headers().contains_key(X_REQUEST_ID));
    }

    #[test]
    fn test_build_get_rejects_bad_base() {
        let err = client().build_get("not a url", "search", &[("q", "x")]).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }
}
