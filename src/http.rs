//! HTTP client utilities for talking to the Slack Web API.

use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use crate::client::ClientError;
use crate::options::ClientOptions;

/// Build a configured HTTP client from client options.
pub fn build_http_client(options: &ClientOptions) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder();

    if let Some(t) = options.timeout {
        builder = builder.timeout(t);
    }
    if let Some(proxy_url) = &options.proxy {
        builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
    }

    builder.build()
}

/// Add extra headers to a request if specified in the options.
pub fn add_extra_headers(mut request: RequestBuilder, options: &ClientOptions) -> RequestBuilder {
    if let Some(h) = &options.headers {
        for (key, value) in h {
            request = request.header(key, value);
        }
    }
    request
}

/// Extension trait for RequestBuilder that logs request body.
pub trait RequestBuilderExt {
    /// Serialize `json` as the request body and log it.
    ///
    /// The body is written explicitly so the caller controls `Content-Type`.
    fn json_logged<T: serde::Serialize + ?Sized>(self, json: &T) -> Result<Self, ClientError>
    where
        Self: Sized;
}

impl RequestBuilderExt for RequestBuilder {
    fn json_logged<T: serde::Serialize + ?Sized>(self, json: &T) -> Result<Self, ClientError> {
        let body = serde_json::to_vec(json)?;
        tracing::debug!(
            "API request body ({} bytes):\n{}",
            body.len(),
            String::from_utf8_lossy(&body)
        );
        Ok(self.body(body))
    }
}

/// Extension trait for Response that logs response body.
#[async_trait::async_trait]
pub trait ResponseExt {
    /// Get response text and log it. Consumes the response.
    async fn text_logged(self) -> Result<String, reqwest::Error>;

    /// Read the whole body and decode it as JSON regardless of status.
    ///
    /// A body that is not JSON becomes [`ClientError::Status`] when the status
    /// is not a success, and [`ClientError::Parse`] otherwise.
    async fn json_or_status(self) -> Result<Value, ClientError>;
}

#[async_trait::async_trait]
impl ResponseExt for reqwest::Response {
    async fn text_logged(self) -> Result<String, reqwest::Error> {
        let text = self.text().await?;
        tracing::debug!("API response ({} bytes):\n{}", text.len(), text);
        Ok(text)
    }

    async fn json_or_status(self) -> Result<Value, ClientError> {
        let status = self.status();
        let bytes = self.bytes().await?;

        let text = String::from_utf8_lossy(&bytes);
        tracing::debug!("API response {} ({} bytes):\n{}", status, text.len(), text);

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => Err(ClientError::Status {
                status: status.as_u16(),
                body: text.into_owned(),
            }),
            Err(e) => Err(ClientError::Parse(e)),
        }
    }
}
