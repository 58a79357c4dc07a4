//! Wire shapes shared by the dispatcher and the API client.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

/// JSON object used for request parameters and tool arguments.
pub type JsonObject = Map<String, Value>;

/// Error code reported when the backend fails without naming a reason.
pub const UNKNOWN_ERROR: &str = "unknown_error";

/// The `{ok, error}` envelope every Web API response carries.
///
/// Only the envelope is decoded; method-specific fields stay in the raw body.
/// A missing `ok` counts as failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiEnvelope {
    /// The backend error code, or `unknown_error` when none was sent.
    pub fn error_code(&self) -> &str {
        self.error.as_deref().unwrap_or(UNKNOWN_ERROR)
    }
}

/// Text content to publish through the external upload flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub content: String,
    pub filename: String,
    pub channel_id: Option<String>,
    pub initial_comment: Option<String>,
    pub thread_ts: Option<String>,
}

impl UploadRequest {
    pub fn new(content: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            filename: filename.into(),
            channel_id: None,
            initial_comment: None,
            thread_ts: None,
        }
    }

    /// Parameters for `files.getUploadURLExternal`.
    pub fn ticket_params(&self) -> JsonObject {
        let mut params = JsonObject::new();
        params.insert("filename".into(), Value::String(self.filename.clone()));
        params.insert("length".into(), Value::from(self.content.len()));
        params
    }

    /// Body for `files.completeUploadExternal` once the bytes are stored.
    pub fn completion(&self, file_id: &str) -> CompleteUpload {
        let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());
        CompleteUpload {
            files: vec![UploadedFile {
                id: file_id.to_string(),
                title: self.filename.clone(),
            }],
            channel_id: non_empty(&self.channel_id),
            initial_comment: non_empty(&self.initial_comment),
            thread_ts: non_empty(&self.thread_ts),
        }
    }
}

/// Step 1 result: where to send the bytes and which file they become.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadTicket {
    pub upload_url: String,
    pub file_id: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UploadedFile {
    pub id: String,
    pub title: String,
}

/// Step 3 body. Optional fields are omitted rather than sent as null.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CompleteUpload {
    pub files: Vec<UploadedFile>,
    pub channel_id: Option<String>,
    pub initial_comment: Option<String>,
    pub thread_ts: Option<String>,
}
