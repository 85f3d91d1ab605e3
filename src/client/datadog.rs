//! Datadog API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::SensitiveDataScannerApi;
use super::models::{
    SensitiveDataScannerCreateGroupResponse, SensitiveDataScannerGetConfigResponse,
    SensitiveDataScannerGroupCreateRequest, SensitiveDataScannerGroupDeleteRequest,
    SensitiveDataScannerGroupDeleteResponse, SensitiveDataScannerGroupUpdateRequest,
    SensitiveDataScannerGroupUpdateResponse,
};
use crate::error::{ApiError, Result};

/// Datadog API base URL (US1 site)
pub const DEFAULT_API_URL: &str = "https://api.datadoghq.com";

/// Sensitive Data Scanner configuration path
const CONFIG_PATH: &str = "/api/v2/sensitive-data-scanner/config";

/// Path of the groups collection, or of one group when `group_id` is given
pub fn groups_path(group_id: Option<&str>) -> String {
    match group_id {
        Some(id) => format!("{}/groups/{}", CONFIG_PATH, id),
        None => format!("{}/groups", CONFIG_PATH),
    }
}

/// Client-side ceiling on request rate
const RATE_LIMIT_PER_SECOND: u32 = 10;

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Datadog REST client authenticated with an API key and an application key
pub struct DatadogClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
    app_key: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl DatadogClient {
    /// Create a client; `api_url` selects another Datadog site or a test server
    pub fn with_host(
        api_key: String,
        app_key: String,
        api_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("sdsgroup/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(
            NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap_or(NonZeroU32::MIN),
        );

        let base_url = api_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            http,
            base_url,
            api_key,
            app_key,
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make an authenticated API request with an optional JSON body
    async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut builder = self
            .http
            .request(method, &url)
            .header("DD-API-KEY", &self.api_key)
            .header("DD-APPLICATION-KEY", &self.app_key)
            .header("Accept", "application/json");
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(ApiError::from)?;

        let status = response.status();
        debug!("{} -> {}", url, status);

        if status.is_success() {
            let text = response.text().await.map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to read response: {}", e))
            })?;
            // 204 and some deletes answer with an empty body
            let body = if text.trim().is_empty() {
                "{}"
            } else {
                text.as_str()
            };
            return serde_json::from_str(body).map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
            });
        }

        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Resource not found".to_string());
                Err(ApiError::NotFound(error_msg).into())
            }
            StatusCode::CONFLICT => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Configuration version mismatch".to_string());
                Err(ApiError::Conflict(error_msg).into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("x-ratelimit-reset")
                    .or_else(|| response.headers().get("retry-after"))
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest {
                    status: status.as_u16(),
                    message: error_msg,
                }
                .into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError {
                    status: status.as_u16(),
                    message: error_msg,
                }
                .into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

#[async_trait]
impl SensitiveDataScannerApi for DatadogClient {
    async fn list_scanning_groups(&self) -> Result<SensitiveDataScannerGetConfigResponse> {
        self.request::<(), _>(Method::GET, CONFIG_PATH, None).await
    }

    async fn create_scanning_group(
        &self,
        body: SensitiveDataScannerGroupCreateRequest,
    ) -> Result<SensitiveDataScannerCreateGroupResponse> {
        let path = groups_path(None);
        self.request(Method::POST, &path, Some(&body)).await
    }

    async fn update_scanning_group(
        &self,
        group_id: &str,
        body: SensitiveDataScannerGroupUpdateRequest,
    ) -> Result<SensitiveDataScannerGroupUpdateResponse> {
        let path = groups_path(Some(group_id));
        self.request(Method::PATCH, &path, Some(&body)).await
    }

    async fn delete_scanning_group(
        &self,
        group_id: &str,
        body: SensitiveDataScannerGroupDeleteRequest,
    ) -> Result<SensitiveDataScannerGroupDeleteResponse> {
        let path = groups_path(Some(group_id));
        self.request(Method::DELETE, &path, Some(&body)).await
    }
}
