//! Main client for the Classroom API.

use crate::api::{CourseWorkApi, CoursesApi, StudentsApi, TeachersApi};
use crate::config::ClientConfig;
use crate::error::ClassroomResult;
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Client for the Google Classroom v1 API.
///
/// Stateless and cheap to construct; the gateway builds one per request
/// from the shared immutable credentials.
#[derive(Debug, Clone)]
pub struct ClassroomClient {
    pub(crate) http: HttpTransport,
}

impl ClassroomClient {
    /// Create a new client builder.
    pub fn builder() -> ClassroomClientBuilder {
        ClassroomClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> ClassroomResult<Self> {
        let http = HttpTransport::new(Arc::new(config))?;

        Ok(Self { http })
    }

    /// Get the courses API.
    pub fn courses(&self) -> CoursesApi<'_> {
        CoursesApi::new(self)
    }

    /// Get the course teachers API.
    pub fn teachers(&self) -> TeachersApi<'_> {
        TeachersApi::new(self)
    }

    /// Get the course students API.
    pub fn students(&self) -> StudentsApi<'_> {
        StudentsApi::new(self)
    }

    /// Get the course work API.
    pub fn course_work(&self) -> CourseWorkApi<'_> {
        CourseWorkApi::new(self)
    }
}

/// Builder for creating a ClassroomClient.
pub struct ClassroomClientBuilder {
    base_url: Option<String>,
    access_token: Option<String>,
    timeout: Duration,
}

impl ClassroomClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            access_token: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Override the API base URL (defaults to the public endpoint).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the OAuth access token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> ClassroomResult<ClassroomClient> {
        let base_url = match self.base_url {
            Some(ref url) => Url::parse(url)?,
            None => ClientConfig::default().base_url,
        };

        let config = ClientConfig {
            base_url,
            access_token: self.access_token,
            timeout: self.timeout,
        };

        ClassroomClient::from_config(config)
    }
}

impl Default for ClassroomClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
