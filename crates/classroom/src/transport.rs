//! HTTP transport layer for the Classroom client.

use crate::config::ClientConfig;
use crate::error::{ClassroomError, ClassroomResult};
use reqwest::{header, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

/// HTTP transport for making Classroom API requests.
///
/// One remote call per invocation, no retries: a failed call is final for
/// the request that issued it.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> ClassroomResult<Self> {
        let mut headers = header::HeaderMap::new();

        // Bearer credential from the long-lived access token
        if let Some(ref token) = config.access_token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|_| ClassroomError::Config("Invalid access token format".to_string()))?,
            );
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Build a URL for the given path.
    fn build_url(&self, path: &str) -> ClassroomResult<url::Url> {
        self.config.base_url.join(path).map_err(ClassroomError::InvalidUrl)
    }

    /// Execute a request, mapping non-success statuses to `Api` errors.
    async fn execute(&self, request: RequestBuilder) -> ClassroomResult<Response> {
        let response = request.send().await?;
        let status = response.status().as_u16();

        if response.status().is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ClassroomError::from_response(status, &body))
    }

    /// Execute a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClassroomResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request");

        let response = self.execute(self.client.get(url)).await?;
        let body = response.json().await?;
        Ok(body)
    }

    /// Execute a GET request with query parameters.
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClassroomResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request with query");

        let response = self.execute(self.client.get(url).query(query)).await?;
        let body = response.json().await?;
        Ok(body)
    }

    /// Execute a POST request.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClassroomResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request");

        let response = self.execute(self.client.post(url).json(body)).await?;
        let body = response.json().await?;
        Ok(body)
    }
}
