//! MCP server adapter.
//!
//! This is the outermost boundary: every tool failure, whatever its source,
//! comes back as a tool result flagged as an error with an `Error: ` text,
//! never as a protocol error. Only prompt and resource lookups produce
//! protocol errors.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, GetPromptRequestParam, GetPromptResult,
    Implementation, ListPromptsResult, ListResourcesResult, ListToolsResult,
    PaginatedRequestParam, ReadResourceRequestParam, ReadResourceResult, ServerCapabilities,
    ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog;
use crate::client::ClientError;
use crate::config::Config;
use crate::model::JsonObject;
use crate::prompts;
use crate::session::SessionCache;
use crate::status::{self, ServerStatus, SERVER_INFO_URI, SERVER_NAME};
use crate::tools::{ToolError, ToolService, Toolbox};

const MISSING_TOKEN: &str =
    "SLACK_BOT_TOKEN is required. Set it as an environment variable or pass via config.";

const INSTRUCTIONS: &str = "Slack Web API tools. Channel IDs start with C (public), G (private) or D (DM). \
Read-only tools accept a `_fields` hint that is never forwarded to Slack. \
Use the prompts for message-management and search workflows.";

#[derive(Debug, Error)]
pub enum MCPError {
    #[error("Prompt not found: {0}")]
    PromptNotFound(String),
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<MCPError> for ErrorData {
    fn from(err: MCPError) -> Self {
        let message = err.to_string();
        match err {
            MCPError::PromptNotFound(_) => ErrorData::invalid_params(message, None),
            MCPError::ResourceNotFound(_) => ErrorData::resource_not_found(message, None),
            MCPError::Serialize(_) => ErrorData::internal_error(message, None),
        }
    }
}

/// Slack tools, prompts and status resource served over MCP.
#[derive(Debug, Clone)]
pub struct SlackMcpServer {
    config: Arc<Config>,
    sessions: Arc<SessionCache>,
}

impl SlackMcpServer {
    pub fn new(config: Config) -> Self {
        let sessions = SessionCache::new(config.client.clone());
        Self {
            config: Arc::new(config),
            sessions: Arc::new(sessions),
        }
    }

    /// Resolve the credential and run one tool.
    pub async fn invoke(&self, name: &str, args: JsonObject) -> Result<Value, ToolError> {
        if catalog::find(name).is_none() {
            return Err(ToolError::UnknownTool(name.to_string()));
        }

        let token = self
            .config
            .resolve_token(&args)
            .ok_or_else(|| ClientError::Config(MISSING_TOKEN.to_string()))?;
        let client = self.sessions.client_for(&token)?;

        Toolbox::new(client)
            .call_tool(name.to_string(), Value::Object(args))
            .await
    }

    /// Run one tool and render the outcome as a tool result.
    pub async fn call(&self, name: &str, args: JsonObject) -> CallToolResult {
        debug!(tool = name, "tool call");
        let outcome = match self.invoke(name, args).await {
            Ok(value) => serde_json::to_string_pretty(&value).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match outcome {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(message) => {
                warn!(tool = name, error = %message, "tool call failed");
                CallToolResult::error(vec![Content::text(format!("Error: {message}"))])
            }
        }
    }

    pub fn status(&self) -> ServerStatus {
        ServerStatus::current(self.config.has_bot_token())
    }
}

impl ServerHandler for SlackMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .enable_resources()
                .build(),
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(catalog::tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let args = request.arguments.unwrap_or_default();
        Ok(self.call(&request.name, args).await)
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, ErrorData> {
        Ok(ListPromptsResult::with_all_items(prompts::prompts()))
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, ErrorData> {
        prompts::find(&request.name)
            .map(prompts::Guide::render)
            .ok_or_else(|| MCPError::PromptNotFound(request.name.clone()).into())
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(vec![status::resource()]))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        if request.uri != SERVER_INFO_URI {
            return Err(MCPError::ResourceNotFound(request.uri).into());
        }
        Ok(self.status().read().map_err(MCPError::from)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(t) => t.text.clone(),
            _ => panic!("Expected text content"),
        }
    }

    #[tokio::test]
    async fn test_unknown_tool_is_error_result() {
        let server = SlackMcpServer::new(Config::new().with_bot_token("xoxb-test"));
        let result = server.call("slack_not_a_tool", JsonObject::new()).await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error: Unknown tool: slack_not_a_tool");
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_network() {
        let server = SlackMcpServer::new(Config::new());
        let args = json!({"channel": "C1", "text": "hi"});
        let result = server
            .call("slack_send_message", args.as_object().cloned().unwrap())
            .await;
        assert_eq!(result.is_error, Some(true));
        let text = text_of(&result);
        assert!(text.starts_with("Error: "));
        assert!(text.contains("SLACK_BOT_TOKEN is required"));
    }

    #[test]
    fn test_status_reports_static_token() {
        assert!(!SlackMcpServer::new(Config::new()).status().connected);
        assert!(
            SlackMcpServer::new(Config::new().with_bot_token("xoxb-1"))
                .status()
                .connected
        );
    }

    #[test]
    fn test_info_advertises_capabilities() {
        let info = SlackMcpServer::new(Config::new()).get_info();
        assert_eq!(info.server_info.name, "slack-mcp");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert!(info.capabilities.resources.is_some());
    }
}
