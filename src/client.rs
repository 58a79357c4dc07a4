//! Slack Web API client trait, reqwest implementation and error types.
//!
//! Every Web API method is a `POST {base}/{method}` with a JSON body and a
//! bearer token. Slack reports logical failures inside an HTTP 200 body via
//! `ok: false`, so every response is decoded and checked before it is
//! returned.

use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::http::{add_extra_headers, build_http_client, RequestBuilderExt, ResponseExt};
use crate::model::{ApiEnvelope, JsonObject, UploadRequest, UploadTicket, UNKNOWN_ERROR};
use crate::options::ClientOptions;

const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Errors that can occur while calling the Web API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The backend answered with `ok: false`.
    #[error("Slack API Error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status with a body that is not JSON.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Whether the failure happened below the API layer (network or HTTP).
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Http(_) | ClientError::Status { .. })
    }

    /// Backend error code for logical API failures.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            ClientError::Api(code) => Some(code),
            _ => None,
        }
    }
}

/// Operations the dispatcher needs from a Web API session.
#[async_trait]
pub trait SlackApi: Send + Sync {
    /// Call a Web API method and return the full decoded body on success.
    async fn call(&self, method: &str, params: JsonObject) -> Result<Value, ClientError>;

    /// Send raw bytes to a one-time upload URL. No bearer header is attached.
    async fn upload_content(&self, upload_url: &str, content: Bytes) -> Result<(), ClientError>;

    /// Upload text content and share it.
    ///
    /// Reserves an upload slot, streams the bytes, then completes the upload.
    /// Each step runs only after the previous one succeeded. A failure in the
    /// completion step leaves the uploaded file unshared; nothing is rolled back.
    async fn upload_file(&self, request: UploadRequest) -> Result<Value, ClientError> {
        let ticket = self
            .call("files.getUploadURLExternal", request.ticket_params())
            .await?;
        let ticket = UploadTicket::deserialize(&ticket)?;

        self.upload_content(&ticket.upload_url, Bytes::from(request.content.clone()))
            .await?;

        let completion = match serde_json::to_value(request.completion(&ticket.file_id))? {
            Value::Object(map) => map,
            _ => JsonObject::new(),
        };
        self.call("files.completeUploadExternal", completion).await
    }
}

/// Web API session bound to a single bot token.
pub struct SlackClient {
    token: SecretString,
    options: ClientOptions,
    http: reqwest::Client,
}

impl fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackClient")
            .field("token", &"[REDACTED]")
            .field("options", &self.options)
            .finish()
    }
}

impl SlackClient {
    /// Create a client for `token`. An empty token is rejected.
    pub fn new(token: SecretString, options: ClientOptions) -> Result<Self, ClientError> {
        if token.expose_secret().trim().is_empty() {
            return Err(ClientError::Config("bot token must not be empty".to_string()));
        }
        let http = build_http_client(&options)?;
        Ok(Self {
            token,
            options,
            http,
        })
    }

    /// Whether this session was created for `token`.
    pub fn uses_token(&self, token: &SecretString) -> bool {
        self.token.expose_secret() == token.expose_secret()
    }

    fn headers(&self) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {}", self.token.expose_secret());
        let mut auth = HeaderValue::from_str(&bearer)
            .map_err(|_| ClientError::Config("Invalid bot token".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8));
        Ok(headers)
    }
}

#[async_trait]
impl SlackApi for SlackClient {
    async fn call(&self, method: &str, params: JsonObject) -> Result<Value, ClientError> {
        let url = self.options.method_url(method);
        tracing::debug!(method, "calling Slack API");

        let mut req = self.http.post(&url).headers(self.headers()?);
        req = add_extra_headers(req, &self.options);

        let response = req.json_logged(&params)?.send().await?;
        let body = response.json_or_status().await?;

        match ApiEnvelope::deserialize(&body) {
            Ok(envelope) if envelope.ok => Ok(body),
            Ok(envelope) => Err(ClientError::Api(envelope.error_code().to_string())),
            Err(_) => Err(ClientError::Api(UNKNOWN_ERROR.to_string())),
        }
    }

    async fn upload_content(&self, upload_url: &str, content: Bytes) -> Result<(), ClientError> {
        tracing::debug!(bytes = content.len(), "uploading file content");

        let response = self.http.post(upload_url).body(content).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = match response.text_logged().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(error = %e, "failed to read upload error body");
                String::new()
            }
        };
        Err(ClientError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
