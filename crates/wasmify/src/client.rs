use std::time::Duration;

use reqwest::{
    StatusCode,
    blocking::Client as HttpClient,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
    redirect::Policy,
};
use wasmify_config::{ClientConfig, ResolvedConfig};

use crate::{
    constants::{MAX_REDIRECTS, USER_AGENT},
    error::{WasmifyError, WasmifyResult},
    response::ResponseBuffer,
};

/// A configured connection to the Wasmify API.
///
/// The client owns its own copy of the settings and one reusable transfer
/// handle. Every call blocks the current thread until the exchange is over.
pub struct Client {
    config: ResolvedConfig,
    http: HttpClient,
    authorization: Option<HeaderValue>,
}

impl Client {
    /// Create a client, filling in defaults for anything `config` leaves unset.
    pub fn create(config: &ClientConfig) -> WasmifyResult<Self> {
        let config = config.resolve();

        let authorization = match &config.api_key {
            Some(key) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {key}"))
                    .map_err(|_| WasmifyError::InvalidParameter("api_key"))?;
                value.set_sensitive(true);
                Some(value)
            }
            None => None,
        };

        let http = HttpClient::builder()
            .timeout(config.timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                tracing::warn!("Failed to initialize the HTTP transport: {}", e);
                WasmifyError::Network
            })?;

        tracing::debug!(
            "Created client for {} (timeout {:?})",
            config.api_url,
            config.timeout
        );

        Ok(Self {
            config,
            http,
            authorization,
        })
    }

    /// Create a client against the default local API.
    pub fn with_defaults() -> WasmifyResult<Self> {
        Self::create(&ClientConfig::default())
    }

    /// Release the client. Equivalent to dropping it.
    pub fn destroy(self) {}

    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.config.api_key.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Absolute URL for `path` under the API base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url, path.trim_start_matches('/'))
    }

    /// Perform one JSON request and return the full response body.
    ///
    /// With a body the request is a POST, without one it is a GET. Only a
    /// `200 OK` counts as success; any other status and any transport failure
    /// come back as [`WasmifyError::Network`] and the body is discarded.
    pub fn execute_request(&self, url: &str, body: Option<&str>) -> WasmifyResult<ResponseBuffer> {
        if url.is_empty() {
            return Err(WasmifyError::InvalidParameter("url"));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(authorization) = &self.authorization {
            headers.insert(AUTHORIZATION, authorization.clone());
        }

        let request = match body {
            Some(body) => self.http.post(url).body(body.to_owned()),
            None => self.http.get(url),
        }
        .headers(headers);

        let mut response = request.send().map_err(|e| {
            tracing::debug!("Request to {} failed: {}", url, e);
            WasmifyError::Network
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!("Request to {} returned {}", url, status);
            return Err(WasmifyError::Network);
        }

        let mut buffer = ResponseBuffer::new();
        response.copy_to(&mut buffer).map_err(|e| {
            tracing::debug!("Failed to read response body from {}: {}", url, e);
            WasmifyError::Network
        })?;
        tracing::debug!("Received {} bytes from {}", buffer.size(), url);

        Ok(buffer)
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        tracing::debug!("Destroyed client for {}", self.config.api_url);
    }
}
