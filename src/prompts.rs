//! Static usage guides published as MCP prompts.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};

pub struct Guide {
    pub name: &'static str,
    pub description: &'static str,
    pub lines: &'static [&'static str],
}

pub static GUIDES: &[Guide] = &[
    Guide {
        name: "send-and-manage-messages",
        description: "Guide for sending and managing Slack messages",
        lines: &[
            "You are a Slack workspace assistant. Help me send and manage messages.",
            "",
            "Available message tools:",
            "1. **Send** — slack_send_message with channel + text (supports Block Kit via blocks param)",
            "2. **Reply in thread** — slack_send_message with thread_ts parameter",
            "3. **Update** — slack_update_message with channel + ts + new text/blocks",
            "4. **Delete** — slack_delete_message with channel + ts",
            "5. **Schedule** — slack_schedule_message with channel + post_at (Unix) + text",
            "6. **Get permalink** — slack_get_permalink with channel + message_ts",
            "",
            "Tips:",
            "- Always include \"text\" even when using \"blocks\" (used as notification fallback)",
            "- Use mrkdwn formatting: *bold*, _italic_, ~strikethrough~, `code`, ```code block```",
            "- Channel IDs start with C (public), G (private), D (DM)",
            "",
            "Start by listing channels with slack_list_channels.",
        ],
    },
    Guide {
        name: "search-and-navigate",
        description: "Guide for searching messages/files and navigating channels",
        lines: &[
            "You are a Slack search and navigation assistant.",
            "",
            "Available tools:",
            "1. **Search messages** — slack_search_messages with query (supports in:#channel, from:@user, has:reaction)",
            "2. **Search files** — slack_search_files with query",
            "3. **List channels** — slack_list_channels (filter by types: public_channel, private_channel, im, mpim)",
            "4. **Channel history** — slack_get_channel_history with channel ID",
            "5. **Thread replies** — slack_get_thread_replies with channel + ts",
            "6. **Channel members** — slack_get_channel_members",
            "7. **User info** — slack_get_user_info with user ID",
            "8. **Team info** — slack_get_team_info for workspace details",
            "",
            "Search modifiers: in:#channel, from:@user, has:reaction, before:YYYY-MM-DD, after:YYYY-MM-DD",
            "",
            "Note: Free plan limits message history to 90 days.",
        ],
    },
];

impl Guide {
    pub fn prompt(&self) -> Prompt {
        Prompt::new(self.name, Some(self.description), None)
    }

    pub fn render(&self) -> GetPromptResult {
        GetPromptResult {
            description: Some(self.description.to_string()),
            messages: vec![PromptMessage::new_text(
                PromptMessageRole::User,
                self.lines.join("\n"),
            )],
        }
    }
}

pub fn find(name: &str) -> Option<&'static Guide> {
    GUIDES.iter().find(|g| g.name == name)
}

pub fn prompts() -> Vec<Prompt> {
    GUIDES.iter().map(Guide::prompt).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::PromptMessageContent;

    #[test]
    fn test_guides_render_single_user_message() {
        for guide in GUIDES {
            let result = guide.render();
            assert_eq!(result.messages.len(), 1);
            assert!(matches!(result.messages[0].role, PromptMessageRole::User));
            match &result.messages[0].content {
                PromptMessageContent::Text { text } => assert!(text.contains("slack_")),
                _ => panic!("Expected text content"),
            }
        }
    }

    #[test]
    fn test_unknown_guide() {
        assert!(find("nope").is_none());
        assert_eq!(prompts().len(), 2);
    }
}
