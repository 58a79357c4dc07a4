//! Tool service seam binding the catalog and dispatcher to one API session.

use std::sync::Arc;

use async_trait::async_trait;
pub use rmcp::model::Tool;
use serde_json::Value;

use crate::catalog;
use crate::client::{ClientError, SlackApi};
use crate::dispatch::dispatch;
use crate::model::JsonObject;

/// Error type for tool execution.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Something that can list and run tools.
#[async_trait]
pub trait ToolService: Send + Sync {
    /// List available tools.
    async fn list_tools(&self) -> Result<Vec<Tool>, ToolError>;

    /// Execute a tool.
    async fn call_tool(&self, name: String, args: Value) -> Result<Value, ToolError>;
}

/// The Slack tool set running against one API session.
#[derive(Clone)]
pub struct Toolbox {
    api: Arc<dyn SlackApi>,
}

impl Toolbox {
    pub fn new(api: Arc<dyn SlackApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ToolService for Toolbox {
    async fn list_tools(&self) -> Result<Vec<Tool>, ToolError> {
        Ok(catalog::tools())
    }

    async fn call_tool(&self, name: String, args: Value) -> Result<Value, ToolError> {
        let args = match args {
            Value::Object(map) => map,
            Value::Null => JsonObject::new(),
            other => {
                return Err(ToolError::InvalidArguments {
                    tool: name,
                    reason: format!("arguments must be an object, got {other}"),
                })
            }
        };
        dispatch(self.api.as_ref(), &name, args).await
    }
}
