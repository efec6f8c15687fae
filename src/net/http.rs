//! Minimal HTTP transport abstraction shared by the resource clients.
//!
//! SYSTEM CONTEXT
//! ==============
//! Resource clients build an [`ApiRequest`] and hand it to a [`Transport`].
//! In the browser that is [`GlooTransport`] (`gloo-net` over `fetch`);
//! native builds get [`ReqwestTransport`]; tests substitute fakes.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx statuses surface as [`ApiError::Status`] with the raw body.
//! Nothing here retries.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[cfg(any(feature = "csr", not(target_arch = "wasm32")))]
use super::config::ApiConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    /// # Errors
    ///
    /// Returns an error if `body` cannot be encoded as JSON.
    pub fn post<B: serde::Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        Ok(Self { method: Method::Post, path: path.into(), body: Some(encode(body)?) })
    }

    /// # Errors
    ///
    /// Returns an error if `body` cannot be encoded as JSON.
    pub fn put<B: serde::Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        Ok(Self { method: Method::Put, path: path.into(), body: Some(encode(body)?) })
    }
}

fn encode<B: serde::Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("request failed: {status}")]
    Status { status: u16, body: String },
    #[error("failed to encode request body: {0}")]
    Encode(String),
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Sends one request and returns the raw response.
#[async_trait(?Send)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if no response was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Send `request`, require a 2xx status and decode the JSON body.
///
/// # Errors
///
/// Propagates transport failures, non-2xx statuses and decode failures.
pub async fn send_json<T: DeserializeOwned>(transport: &dyn Transport, request: ApiRequest) -> Result<T, ApiError> {
    log::debug!("api request: {} {}", request.method.as_str(), request.path);
    let response = transport.send(request).await?;
    if !response.ok() {
        return Err(ApiError::Status { status: response.status, body: response.body });
    }
    Ok(serde_json::from_str(&response.body)?)
}

/// Browser transport over `fetch`.
#[cfg(feature = "csr")]
#[derive(Clone, Debug, Default)]
pub struct GlooTransport {
    config: ApiConfig,
}

#[cfg(feature = "csr")]
impl GlooTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        use gloo_net::http::Request;

        let url = self.config.url(&request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
        };
        let sent = match &request.body {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| ApiError::Transport(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

/// Native transport over `reqwest`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    config: ApiConfig,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { client: reqwest::Client::new(), config }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.config.url(&request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
        };
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let resp = builder.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}
