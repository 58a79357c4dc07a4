//! # slack-mcp - Slack Web API over the Model Context Protocol
//!
//! A Model Context Protocol server that exposes a fixed catalog of Slack Web
//! API operations as tools, plus two usage prompts and a status resource.
//!
//! ## Architecture
//!
//! 1. **Catalog** declares every tool: name, description, parameters and
//!    behavioral hints.
//! 2. **Dispatch** maps a tool call onto one Slack method, forwarding only
//!    declared parameters.
//! 3. **Client** performs authenticated calls and the three-step file upload.
//! 4. **Server** resolves the bot token, keeps one live session and turns
//!    every outcome into an MCP tool result.
//!
//! ## Example
//! ```no_run
//! use slack_mcp::rmcp::{transport::stdio, ServiceExt};
//! use slack_mcp::{Config, SlackMcpServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = SlackMcpServer::new(Config::from_env());
//!     server.serve(stdio()).await?.waiting().await?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod http;
pub mod mcp;
pub mod model;
pub mod options;
pub mod prompts;
pub mod session;
pub mod status;
pub mod tools;

pub use client::{ClientError, SlackApi, SlackClient};
pub use config::Config;
pub use mcp::{MCPError, SlackMcpServer};
pub use model::{JsonObject, UploadRequest};
pub use options::ClientOptions;
pub use tools::{Tool, ToolError, ToolService, Toolbox};

// Re-export rmcp for convenience
pub use rmcp;
