//! The `slack://server-info` status document.

use rmcp::model::{AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents};
use serde::Serialize;
use serde_with::{serde_as, Map};

use crate::catalog;

pub const SERVER_NAME: &str = "slack-mcp";
pub const SERVER_INFO_URI: &str = "slack://server-info";

#[serde_as]
#[derive(Debug, Clone, Serialize)]
pub struct ServerStatus {
    pub name: &'static str,
    pub version: &'static str,
    /// Whether a bot token was configured at startup.
    pub connected: bool,
    pub tools_available: usize,
    /// Rendered as a JSON object, keys in category order.
    #[serde_as(as = "Map<_, _>")]
    pub tool_categories: Vec<(&'static str, usize)>,
}

impl ServerStatus {
    pub fn current(connected: bool) -> Self {
        Self {
            name: SERVER_NAME,
            version: env!("CARGO_PKG_VERSION"),
            connected,
            tools_available: catalog::TOOLS.len(),
            tool_categories: catalog::category_counts(),
        }
    }

    pub fn read(&self) -> Result<ReadResourceResult, serde_json::Error> {
        let text = serde_json::to_string_pretty(self)?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, SERVER_INFO_URI)],
        })
    }
}

pub fn resource() -> Resource {
    let mut raw = RawResource::new(SERVER_INFO_URI, "server-info");
    raw.description =
        Some("Connection status and available tools for this Slack MCP server".to_string());
    raw.mime_type = Some("application/json".to_string());
    raw.no_annotation()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_come_from_catalog() {
        let status = ServerStatus::current(false);
        assert_eq!(status.tools_available, 38);
        assert_eq!(status.tool_categories[1], ("conversations", 12));
        assert_eq!(status.tool_categories.iter().map(|(_, n)| n).sum::<usize>(), 38);
    }

    #[test]
    fn test_read_is_json() {
        let result = ServerStatus::current(true).read().unwrap();
        match &result.contents[0] {
            ResourceContents::TextResourceContents { uri, text, .. } => {
                assert_eq!(uri, SERVER_INFO_URI);
                let doc: serde_json::Value = serde_json::from_str(text).unwrap();
                assert_eq!(doc["connected"], serde_json::json!(true));
                assert_eq!(doc["name"], serde_json::json!("slack-mcp"));
                assert_eq!(doc["tool_categories"]["conversations"], serde_json::json!(12));
                let messages = text.find("\"messages\"").unwrap();
                let conversations = text.find("\"conversations\"").unwrap();
                let emoji = text.find("\"emoji\"").unwrap();
                assert!(messages < conversations && conversations < emoji);
            }
            _ => panic!("Expected text resource"),
        }
    }
}
