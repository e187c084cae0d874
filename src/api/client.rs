use bytes::Bytes;
use reqwest::header;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;

use crate::api::session;

#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{code}: {reason}")]
    Status { code: u16, reason: String },
    #[error("Invalid response: {0}")]
    Parse(String),
}

/// Outcome of an API call. Exactly one of the fields is populated, except for
/// non-200 statuses with a readable body, where the backend's payload is kept
/// alongside the error so callers can inspect it.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub error: Option<ApiError>,
    pub value: Option<T>,
}

impl<T> ApiResponse<T> {
    fn failed(error: ApiError) -> Self {
        ApiResponse { error: Some(error), value: None }
    }

    /// Classify a parsed body by HTTP status. Only 200 counts as success;
    /// anything else keeps the body but attaches a status error.
    pub(crate) fn from_status(status: StatusCode, value: T) -> Self {
        if status == StatusCode::OK {
            ApiResponse { error: None, value: Some(value) }
        } else {
            let error = ApiError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown error").to_string(),
            };
            ApiResponse { error: Some(error), value: Some(value) }
        }
    }

    /// Collapse the envelope: any error wins, even when a body was attached.
    pub fn into_result(self) -> Result<T, ApiError> {
        match self.error {
            Some(error) => Err(error),
            None => self
                .value
                .ok_or_else(|| ApiError::Parse("empty response".to_string())),
        }
    }
}

/// Query-string (GET) or JSON-body (other verbs) parameters.
pub type Params = Vec<(&'static str, String)>;

#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        // On wasm, we can't use timeout
        #[cfg(target_arch = "wasm32")]
        let client = Client::new();

        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        ApiClient {
            inner: Arc::new(ApiClientInner {
                base_url: base_url.trim_end_matches('/').to_string(),
                client,
            }),
        }
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Params,
        require_auth: bool,
    ) -> ApiResponse<T> {
        self.request(Method::GET, path, params, require_auth).await
    }

    #[allow(dead_code)]
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Params,
        require_auth: bool,
    ) -> ApiResponse<T> {
        self.request(Method::POST, path, params, require_auth).await
    }

    #[allow(dead_code)]
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Params,
        require_auth: bool,
    ) -> ApiResponse<T> {
        self.request(Method::PUT, path, params, require_auth).await
    }

    #[allow(dead_code)]
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Params,
        require_auth: bool,
    ) -> ApiResponse<T> {
        self.request(Method::DELETE, path, params, require_auth).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: Params,
        require_auth: bool,
    ) -> ApiResponse<T> {
        let response = match self.send(method, path, params, require_auth).await {
            Ok(response) => response,
            Err(error) => return ApiResponse::failed(error),
        };

        let status = response.status();
        match response.json::<T>().await {
            Ok(value) => ApiResponse::from_status(status, value),
            Err(e) => ApiResponse::failed(ApiError::Parse(e.to_string())),
        }
    }

    /// Raw-byte variant of `get`, for file payloads the backend streams back.
    pub async fn get_bytes(
        &self,
        path: &str,
        params: Params,
        require_auth: bool,
    ) -> ApiResponse<Bytes> {
        let response = match self.send(Method::GET, path, params, require_auth).await {
            Ok(response) => response,
            Err(error) => return ApiResponse::failed(error),
        };

        let status = response.status();
        match response.bytes().await {
            Ok(body) => ApiResponse::from_status(status, body),
            Err(e) => ApiResponse::failed(ApiError::Network(e.to_string())),
        }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        params: Params,
        require_auth: bool,
    ) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.inner.base_url, path);
        let is_get = method == Method::GET;

        let mut request = self
            .inner
            .client
            .request(method, &url)
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json;charset=UTF-8");

        // The session token is best-effort: an unresolvable session still
        // sends the request unauthenticated.
        if require_auth {
            if let Some(token) = session::auth_token() {
                request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
            }
        }

        if !params.is_empty() {
            request = if is_get {
                request.query(&params)
            } else {
                let body: serde_json::Map<String, serde_json::Value> = params
                    .into_iter()
                    .map(|(key, value)| (key.to_string(), serde_json::Value::String(value)))
                    .collect();
                request.json(&body)
            };
        }

        request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}

// Global API client instance
static API_CLIENT: std::sync::OnceLock<ApiClient> = std::sync::OnceLock::new();

pub fn init_api_client(base_url: &str) {
    let _ = API_CLIENT.set(ApiClient::new(base_url));
}

pub fn api_client() -> &'static ApiClient {
    API_CLIENT.get().expect("API client not initialized. Call init_api_client first.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_status_keeps_body_without_error() {
        let response = ApiResponse::from_status(StatusCode::OK, 42);
        assert!(response.error.is_none());
        assert_eq!(response.value, Some(42));
        assert_eq!(response.into_result().unwrap(), 42);
    }

    #[test]
    fn test_error_status_keeps_body_alongside_error() {
        let response = ApiResponse::from_status(StatusCode::NOT_FOUND, "detalle");
        assert_eq!(response.value, Some("detalle"));
        match response.error {
            Some(ApiError::Status { code, ref reason }) => {
                assert_eq!(code, 404);
                assert_eq!(reason, "Not Found");
            }
            ref other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_status_error_message_is_code_and_reason() {
        let response = ApiResponse::from_status(StatusCode::INTERNAL_SERVER_ERROR, ());
        let error = response.into_result().unwrap_err();
        assert_eq!(error.to_string(), "500: Internal Server Error");
    }

    #[test]
    fn test_into_result_prefers_error_over_attached_body() {
        let response = ApiResponse::from_status(StatusCode::BAD_REQUEST, 7);
        assert!(response.into_result().is_err());
    }

    #[test]
    fn test_network_failure_carries_no_value() {
        let response: ApiResponse<()> = ApiResponse::failed(ApiError::Network("offline".into()));
        assert!(response.value.is_none());
        assert_eq!(
            response.into_result().unwrap_err().to_string(),
            "Network error: offline"
        );
    }
}
