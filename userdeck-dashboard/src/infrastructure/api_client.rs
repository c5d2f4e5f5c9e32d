use reqwest::{Client, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::infrastructure::errors::{ApiError, ApiOperation, ApiResult};

/// Public JSONPlaceholder instance the dashboard talks to by default.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Thin JSON client over the users API.
///
/// One request per call: no retries, no client-side timeout beyond the
/// transport default.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> reqwest::Result<Self> {
        let client = Client::builder().build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        debug!("[ApiClient] Creating new API client with base URL: {}", base_url);

        Ok(Self { client, base_url })
    }

    /// Build an absolute URL for `path`; absolute inputs pass through.
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        format!("{}/{}", self.base_url, p.trim_start_matches('/'))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send the request and turn any non-2xx status into an [`ApiError`].
    async fn send(
        &self,
        request: RequestBuilder,
        operation: ApiOperation,
    ) -> ApiResult<Response> {
        let response = request.send().await.map_err(|e| {
            warn!("[ApiClient] {} request failed: {}", operation, e);
            ApiError::Transport {
                operation,
                source: e,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("[ApiClient] {} returned {}", operation, status);
            return Err(ApiError::from_status(operation, status));
        }

        Ok(response)
    }

    /// Execute a request and decode its JSON body
    async fn execute_request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        operation: ApiOperation,
    ) -> ApiResult<T> {
        let response = self.send(request, operation).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::from_reqwest(operation, e))
    }

    /// GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        operation: ApiOperation,
    ) -> ApiResult<T> {
        let url = self.build_url(path);
        debug!("GET request to: {}", url);

        self.execute_request(self.client.get(&url), operation).await
    }

    /// POST request with a JSON body
    pub async fn post<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
        operation: ApiOperation,
    ) -> ApiResult<R> {
        let url = self.build_url(path);
        debug!("POST request to: {}", url);

        self.execute_request(self.client.post(&url).json(body), operation)
            .await
    }

    /// PUT request with a JSON body
    pub async fn put<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
        operation: ApiOperation,
    ) -> ApiResult<R> {
        let url = self.build_url(path);
        debug!("PUT request to: {}", url);

        self.execute_request(self.client.put(&url).json(body), operation)
            .await
    }

    /// DELETE request; only the status matters, the body is ignored.
    pub async fn delete(&self, path: &str, operation: ApiOperation) -> ApiResult<()> {
        let url = self.build_url(path);
        debug!("DELETE request to: {}", url);

        self.send(self.client.delete(&url), operation).await?;
        Ok(())
    }
}
