//! Static catalog of the Slack tools exposed over MCP.
//!
//! Each [`ToolSpec`] carries everything a host needs to validate arguments
//! and render safety hints without touching the backend. The dispatcher
//! checks required parameters against the same lists.

use std::sync::Arc;

use rmcp::model::{Tool, ToolAnnotations};
use serde_json::{json, Value};

use crate::model::JsonObject;

use ParamKind::{Array, Boolean, Number, String as Str};

/// Argument that only narrows what a host displays. Never sent to Slack.
pub const FIELDS_HINT: &str = "_fields";

/// JSON-Schema type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Boolean,
    Array,
}

impl ParamKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
            ParamKind::Array => "array",
        }
    }
}

/// One declared property of a tool's input schema.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
    pub required: bool,
}

const fn req(name: &'static str, kind: ParamKind, description: &'static str) -> Param {
    Param {
        name,
        kind,
        description,
        required: true,
    }
}

const fn opt(name: &'static str, kind: ParamKind, description: &'static str) -> Param {
    Param {
        name,
        kind,
        description,
        required: false,
    }
}

const FIELDS: Param = opt(
    FIELDS_HINT,
    ParamKind::String,
    "Comma-separated list of fields to include in the response",
);

/// Advisory behavior hints. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hints {
    pub read_only: bool,
    pub destructive: bool,
    pub idempotent: Option<bool>,
    pub open_world: bool,
}

const READ: Hints = Hints {
    read_only: true,
    destructive: false,
    idempotent: None,
    open_world: true,
};

const WRITE: Hints = Hints {
    read_only: false,
    destructive: false,
    idempotent: None,
    open_world: false,
};

const IDEMPOTENT_WRITE: Hints = Hints {
    idempotent: Some(true),
    ..WRITE
};

const DESTRUCTIVE: Hints = Hints {
    read_only: false,
    destructive: true,
    idempotent: None,
    open_world: false,
};

/// Resource group a tool belongs to, used for status reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Messages,
    Conversations,
    Users,
    Reactions,
    Search,
    Files,
    Pins,
    Bookmarks,
    Team,
    Emoji,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Messages,
        Category::Conversations,
        Category::Users,
        Category::Reactions,
        Category::Search,
        Category::Files,
        Category::Pins,
        Category::Bookmarks,
        Category::Team,
        Category::Emoji,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Messages => "messages",
            Category::Conversations => "conversations",
            Category::Users => "users",
            Category::Reactions => "reactions",
            Category::Search => "search",
            Category::Files => "files",
            Category::Pins => "pins",
            Category::Bookmarks => "bookmarks",
            Category::Team => "team",
            Category::Emoji => "emoji",
        }
    }
}

/// Descriptor for one tool.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub hints: Hints,
    pub params: &'static [Param],
}

impl ToolSpec {
    /// Look up a declared parameter by name.
    pub fn param(&self, name: &str) -> Option<&'static Param> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn required(&self) -> impl Iterator<Item = &'static Param> {
        self.params.iter().filter(|p| p.required)
    }

    /// Whether the tool accepts the `_fields` selection hint.
    pub fn accepts_fields_hint(&self) -> bool {
        self.param(FIELDS_HINT).is_some()
    }

    /// Standalone JSON-Schema object for the tool input.
    pub fn input_schema(&self) -> JsonObject {
        let properties: JsonObject = self
            .params
            .iter()
            .map(|p| {
                (
                    p.name.to_string(),
                    json!({ "type": p.kind.as_str(), "description": p.description }),
                )
            })
            .collect();

        let mut schema = JsonObject::new();
        schema.insert("type".into(), Value::from("object"));
        schema.insert("properties".into(), Value::Object(properties));

        let required: Vec<Value> = self.required().map(|p| Value::from(p.name)).collect();
        if !required.is_empty() {
            schema.insert("required".into(), Value::Array(required));
        }
        schema
    }

    pub fn annotations(&self) -> ToolAnnotations {
        ToolAnnotations {
            title: Some(self.title.to_string()),
            read_only_hint: Some(self.hints.read_only),
            destructive_hint: Some(self.hints.destructive),
            idempotent_hint: self.hints.idempotent,
            open_world_hint: Some(self.hints.open_world),
        }
    }

    /// Convert into the rmcp tool descriptor published to hosts.
    pub fn to_tool(&self) -> Tool {
        Tool::new(self.name, self.description, Arc::new(self.input_schema()))
            .annotate(self.annotations())
    }
}

/// Find a tool by exact name.
pub fn find(name: &str) -> Option<&'static ToolSpec> {
    TOOLS.iter().find(|t| t.name == name)
}

/// All tools as rmcp descriptors, in catalog order.
pub fn tools() -> Vec<Tool> {
    TOOLS.iter().map(ToolSpec::to_tool).collect()
}

/// Number of tools per category in declaration order, computed from the live catalog.
pub fn category_counts() -> Vec<(&'static str, usize)> {
    Category::ALL
        .iter()
        .map(|c| (c.as_str(), TOOLS.iter().filter(|t| t.category == *c).count()))
        .collect()
}

pub static TOOLS: &[ToolSpec] = &[
    // Messages
    ToolSpec {
        name: "slack_send_message",
        title: "Send Message",
        description: "Send a message to a Slack channel, DM, or thread. Supports Block Kit for rich formatting. Always provide \"text\" as notification fallback even when using \"blocks\". Rate limit: 1 message/sec/channel.",
        category: Category::Messages,
        hints: WRITE,
        params: &[
            req("channel", Str, "Channel ID (C...), DM ID (D...), or user ID to send to"),
            req("text", Str, "Message text (required as fallback even when using blocks). Supports mrkdwn formatting."),
            opt("blocks", Array, "Block Kit blocks for rich message layout (JSON array of block objects)"),
            opt("thread_ts", Str, "Thread timestamp to reply in a thread (e.g. \"1234567890.123456\")"),
            opt("reply_broadcast", Boolean, "Also post threaded reply to channel (only with thread_ts)"),
            opt("unfurl_links", Boolean, "Enable link unfurling (default: true)"),
            opt("unfurl_media", Boolean, "Enable media unfurling (default: true)"),
            opt("mrkdwn", Boolean, "Enable markdown parsing (default: true)"),
        ],
    },
    ToolSpec {
        name: "slack_update_message",
        title: "Update Message",
        description: "Update an existing message. Bot can only update messages it posted. Provide new text and/or blocks.",
        category: Category::Messages,
        hints: IDEMPOTENT_WRITE,
        params: &[
            req("channel", Str, "Channel containing the message"),
            req("ts", Str, "Timestamp of the message to update (e.g. \"1234567890.123456\")"),
            opt("text", Str, "New message text"),
            opt("blocks", Array, "New Block Kit blocks"),
            opt("attachments", Array, "New attachments array"),
        ],
    },
    ToolSpec {
        name: "slack_delete_message",
        title: "Delete Message",
        description: "Delete a message. Bot can only delete messages it posted.",
        category: Category::Messages,
        hints: DESTRUCTIVE,
        params: &[
            req("channel", Str, "Channel containing the message"),
            req("ts", Str, "Timestamp of the message to delete"),
        ],
    },
    ToolSpec {
        name: "slack_schedule_message",
        title: "Schedule Message",
        description: "Schedule a message for future delivery. Max 120 days in the future. Max 30 scheduled messages per channel per 5 minutes.",
        category: Category::Messages,
        hints: WRITE,
        params: &[
            req("channel", Str, "Channel ID to post to"),
            req("post_at", Number, "Unix timestamp for when to deliver the message"),
            req("text", Str, "Message text"),
            opt("blocks", Array, "Block Kit blocks for rich layout"),
            opt("thread_ts", Str, "Thread timestamp to reply in"),
        ],
    },
    ToolSpec {
        name: "slack_delete_scheduled_message",
        title: "Delete Scheduled Message",
        description: "Delete a pending scheduled message before it is sent. Cannot delete messages posting within 60 seconds.",
        category: Category::Messages,
        hints: DESTRUCTIVE,
        params: &[
            req("channel", Str, "Channel of the scheduled message"),
            req("scheduled_message_id", Str, "Scheduled message ID (from schedule_message response)"),
        ],
    },
    ToolSpec {
        name: "slack_list_scheduled_messages",
        title: "List Scheduled Messages",
        description: "List pending scheduled messages. Optionally filter by channel or time range.",
        category: Category::Messages,
        hints: READ,
        params: &[
            opt("channel", Str, "Filter by channel ID"),
            opt("oldest", Str, "Start of time range (Unix timestamp)"),
            opt("latest", Str, "End of time range (Unix timestamp)"),
            opt("cursor", Str, "Pagination cursor from previous response"),
            opt("limit", Number, "Max results per page (default: 100)"),
            FIELDS,
        ],
    },
    ToolSpec {
        name: "slack_get_permalink",
        title: "Get Message Permalink",
        description: "Get a permanent URL for a specific message.",
        category: Category::Messages,
        hints: READ,
        params: &[
            req("channel", Str, "Channel containing the message"),
            req("message_ts", Str, "Timestamp of the message"),
            FIELDS,
        ],
    },
    // Conversations
    ToolSpec {
        name: "slack_list_channels",
        title: "List Channels",
        description: "List channels in the workspace. Filter by type: public_channel, private_channel, im, mpim.",
        category: Category::Conversations,
        hints: READ,
        params: &[
            opt("types", Str, "Comma-separated types: public_channel, private_channel, im, mpim (default: public_channel)"),
            opt("exclude_archived", Boolean, "Exclude archived channels (default: false)"),
            opt("limit", Number, "Max results per page (recommended: 200, max: 1000)"),
            opt("cursor", Str, "Pagination cursor from previous response"),
            FIELDS,
        ],
    },
    ToolSpec {
        name: "slack_get_channel_info",
        title: "Get Channel Info",
        description: "Get detailed information about a channel including topic, purpose, member count.",
        category: Category::Conversations,
        hints: READ,
        params: &[
            req("channel", Str, "Channel ID (e.g. \"C1234567890\")"),
            opt("include_locale", Boolean, "Include locale info"),
            opt("include_num_members", Boolean, "Include member count"),
            FIELDS,
        ],
    },
    ToolSpec {
        name: "slack_get_channel_history",
        title: "Get Channel History",
        description: "Get message history from a channel. Returns messages in reverse chronological order. Free plan: 90-day history limit.",
        category: Category::Conversations,
        hints: READ,
        params: &[
            req("channel", Str, "Channel ID"),
            opt("oldest", Str, "Start of time range (Unix timestamp, inclusive)"),
            opt("latest", Str, "End of time range (Unix timestamp)"),
            opt("inclusive", Boolean, "Include messages at boundary timestamps"),
            opt("limit", Number, "Max messages to return (default: 100, max: 1000)"),
            opt("cursor", Str, "Pagination cursor from previous response"),
            FIELDS,
        ],
    },
    ToolSpec {
        name: "slack_get_thread_replies",
        title: "Get Thread Replies",
        description: "Get replies in a message thread. Returns the parent message and all replies.",
        category: Category::Conversations,
        hints: READ,
        params: &[
            req("channel", Str, "Channel containing the thread"),
            req("ts", Str, "Timestamp of the parent message"),
            opt("oldest", Str, "Start of time range"),
            opt("latest", Str, "End of time range"),
            opt("inclusive", Boolean, "Include messages at boundary timestamps"),
            opt("limit", Number, "Max results (recommended: 200)"),
            opt("cursor", Str, "Pagination cursor"),
            FIELDS,
        ],
    },
    ToolSpec {
        name: "slack_get_channel_members",
        title: "Get Channel Members",
        description: "List all members of a channel. Returns user IDs with cursor-based pagination.",
        category: Category::Conversations,
        hints: READ,
        params: &[
            req("channel", Str, "Channel ID"),
            opt("limit", Number, "Max results per page (recommended: 200, max: 1000)"),
            opt("cursor", Str, "Pagination cursor"),
            FIELDS,
        ],
    },
    ToolSpec {
        name: "slack_create_channel",
        title: "Create Channel",
        description: "Create a new public or private channel. Name must be lowercase, numbers, hyphens, underscores (max 80 chars).",
        category: Category::Conversations,
        hints: WRITE,
        params: &[
            req("name", Str, "Channel name (lowercase, numbers, hyphens, underscores, max 80 chars)"),
            opt("is_private", Boolean, "Create a private channel (default: false)"),
        ],
    },
    ToolSpec {
        name: "slack_archive_channel",
        title: "Archive Channel",
        description: "Archive a channel. Archived channels can be unarchived later.",
        category: Category::Conversations,
        hints: DESTRUCTIVE,
        params: &[req("channel", Str, "Channel ID to archive")],
    },
    ToolSpec {
        name: "slack_invite_to_channel",
        title: "Invite to Channel",
        description: "Invite one or more users to a channel. Supports up to 1000 user IDs.",
        category: Category::Conversations,
        hints: WRITE,
        params: &[
            req("channel", Str, "Channel ID"),
            req("users", Str, "Comma-separated user IDs to invite (1-1000)"),
        ],
    },
    ToolSpec {
        name: "slack_kick_from_channel",
        title: "Kick from Channel",
        description: "Remove a user from a channel.",
        category: Category::Conversations,
        hints: DESTRUCTIVE,
        params: &[
            req("channel", Str, "Channel ID"),
            req("user", Str, "User ID to remove"),
        ],
    },
    ToolSpec {
        name: "slack_join_channel",
        title: "Join Channel",
        description: "Join a public channel. Bot must have channels:join scope.",
        category: Category::Conversations,
        hints: WRITE,
        params: &[req("channel", Str, "Public channel ID to join")],
    },
    ToolSpec {
        name: "slack_set_channel_topic",
        title: "Set Channel Topic",
        description: "Set or update the topic of a channel.",
        category: Category::Conversations,
        hints: IDEMPOTENT_WRITE,
        params: &[
            req("channel", Str, "Channel ID"),
            req("topic", Str, "New topic text"),
        ],
    },
    ToolSpec {
        name: "slack_open_conversation",
        title: "Open Conversation",
        description: "Open a DM or multi-person DM. Pass 1 user ID for DM, 2-8 for group DM.",
        category: Category::Conversations,
        hints: WRITE,
        params: &[
            req("users", Str, "Comma-separated user IDs (1 = DM, 2-8 = group DM)"),
            opt("return_im", Boolean, "Return full conversation object"),
        ],
    },
    // Users
    ToolSpec {
        name: "slack_list_users",
        title: "List Users",
        description: "List all users in the workspace including deactivated users. Supports cursor-based pagination.",
        category: Category::Users,
        hints: READ,
        params: &[
            opt("limit", Number, "Max results per page (recommended: 200, max: 1000)"),
            opt("cursor", Str, "Pagination cursor"),
            opt("include_locale", Boolean, "Include locale info for each user"),
            FIELDS,
        ],
    },
    ToolSpec {
        name: "slack_get_user_info",
        title: "Get User Info",
        description: "Get detailed information about a user including profile, status, admin flags.",
        category: Category::Users,
        hints: READ,
        params: &[
            req("user", Str, "User ID (e.g. \"U1234567890\")"),
            opt("include_locale", Boolean, "Include locale info"),
            FIELDS,
        ],
    },
    // Reactions
    ToolSpec {
        name: "slack_add_reaction",
        title: "Add Reaction",
        description: "Add an emoji reaction to a message. Use emoji name without colons (e.g. \"thumbsup\" not \":thumbsup:\").",
        category: Category::Reactions,
        hints: WRITE,
        params: &[
            req("channel", Str, "Channel containing the message"),
            req("timestamp", Str, "Timestamp of the message to react to"),
            req("name", Str, "Emoji name without colons (e.g. \"thumbsup\", \"heart\", \"eyes\")"),
        ],
    },
    ToolSpec {
        name: "slack_remove_reaction",
        title: "Remove Reaction",
        description: "Remove an emoji reaction from a message.",
        category: Category::Reactions,
        hints: DESTRUCTIVE,
        params: &[
            req("channel", Str, "Channel containing the message"),
            req("timestamp", Str, "Timestamp of the message"),
            req("name", Str, "Emoji name to remove (without colons)"),
        ],
    },
    ToolSpec {
        name: "slack_get_reactions",
        title: "Get Reactions",
        description: "Get all reactions for a specific message, including emoji names, counts, and user IDs.",
        category: Category::Reactions,
        hints: READ,
        params: &[
            req("channel", Str, "Channel containing the message"),
            req("timestamp", Str, "Timestamp of the message"),
            FIELDS,
        ],
    },
    // Search
    ToolSpec {
        name: "slack_search_messages",
        title: "Search Messages",
        description: "Search for messages matching a query. Supports modifiers: in:#channel, from:@user, has:reaction, before:date, after:date. Free plan: 90-day history limit.",
        category: Category::Search,
        hints: READ,
        params: &[
            req("query", Str, "Search query (supports in:#channel, from:@user, has:reaction, before:YYYY-MM-DD, after:YYYY-MM-DD)"),
            opt("sort", Str, "\"score\" (relevance) or \"timestamp\" (default: score)"),
            opt("sort_dir", Str, "\"asc\" or \"desc\" (default: desc)"),
            opt("count", Number, "Results per page (max: 100)"),
            opt("page", Number, "Page number (max: 100)"),
            opt("highlight", Boolean, "Mark matching query terms in results"),
            FIELDS,
        ],
    },
    ToolSpec {
        name: "slack_search_files",
        title: "Search Files",
        description: "Search for files matching a query. Supports same modifiers as message search.",
        category: Category::Search,
        hints: READ,
        params: &[
            req("query", Str, "Search query"),
            opt("sort", Str, "\"score\" or \"timestamp\""),
            opt("sort_dir", Str, "\"asc\" or \"desc\""),
            opt("count", Number, "Results per page (max: 100)"),
            opt("page", Number, "Page number (max: 100)"),
            opt("highlight", Boolean, "Highlight matching terms"),
            FIELDS,
        ],
    },
    // Files
    ToolSpec {
        name: "slack_upload_file",
        title: "Upload File",
        description: "Upload a text file to Slack. Uses the 2-step upload process (getUploadURLExternal + completeUploadExternal). For text/code content only.",
        category: Category::Files,
        hints: WRITE,
        params: &[
            req("content", Str, "File content as text string"),
            req("filename", Str, "Filename with extension (e.g. \"report.txt\", \"data.csv\", \"code.py\")"),
            opt("channel_id", Str, "Channel ID to share the file in"),
            opt("initial_comment", Str, "Comment to post with the file"),
            opt("thread_ts", Str, "Thread timestamp to post file in"),
        ],
    },
    ToolSpec {
        name: "slack_list_files",
        title: "List Files",
        description: "List files in the workspace. Filter by channel, user, or type. Free plan: files older than 90 days are deleted.",
        category: Category::Files,
        hints: READ,
        params: &[
            opt("channel", Str, "Filter by channel ID"),
            opt("user", Str, "Filter by user ID"),
            opt("types", Str, "Filter by type: all, spaces, snippets, images, gdocs, zips, pdfs"),
            opt("count", Number, "Items per page"),
            opt("page", Number, "Page number"),
            opt("ts_from", Str, "Filter from timestamp (Unix)"),
            opt("ts_to", Str, "Filter to timestamp (Unix)"),
            FIELDS,
        ],
    },
    ToolSpec {
        name: "slack_delete_file",
        title: "Delete File",
        description: "Delete a file from the workspace.",
        category: Category::Files,
        hints: DESTRUCTIVE,
        params: &[req("file", Str, "File ID to delete")],
    },
    // Pins
    ToolSpec {
        name: "slack_pin_message",
        title: "Pin Message",
        description: "Pin a message to a channel. Cannot pin channel join messages or files.",
        category: Category::Pins,
        hints: WRITE,
        params: &[
            req("channel", Str, "Channel ID"),
            req("timestamp", Str, "Timestamp of the message to pin"),
        ],
    },
    ToolSpec {
        name: "slack_unpin_message",
        title: "Unpin Message",
        description: "Unpin a message from a channel.",
        category: Category::Pins,
        hints: DESTRUCTIVE,
        params: &[
            req("channel", Str, "Channel ID"),
            req("timestamp", Str, "Timestamp of the message to unpin"),
        ],
    },
    ToolSpec {
        name: "slack_list_pins",
        title: "List Pins",
        description: "List all pinned items in a channel.",
        category: Category::Pins,
        hints: READ,
        params: &[req("channel", Str, "Channel ID"), FIELDS],
    },
    // Bookmarks
    ToolSpec {
        name: "slack_add_bookmark",
        title: "Add Bookmark",
        description: "Add a bookmark (link) to a channel. Max 100 bookmarks per channel.",
        category: Category::Bookmarks,
        hints: WRITE,
        params: &[
            req("channel_id", Str, "Channel ID"),
            req("title", Str, "Bookmark title"),
            req("link", Str, "URL for the bookmark"),
            opt("type", Str, "Bookmark type (currently only \"link\")"),
            opt("emoji", Str, "Emoji for the bookmark icon (e.g. \":link:\")"),
        ],
    },
    ToolSpec {
        name: "slack_edit_bookmark",
        title: "Edit Bookmark",
        description: "Update an existing bookmark in a channel.",
        category: Category::Bookmarks,
        hints: IDEMPOTENT_WRITE,
        params: &[
            req("bookmark_id", Str, "Bookmark ID"),
            req("channel_id", Str, "Channel ID"),
            opt("title", Str, "New title"),
            opt("link", Str, "New URL"),
            opt("emoji", Str, "New emoji"),
        ],
    },
    ToolSpec {
        name: "slack_remove_bookmark",
        title: "Remove Bookmark",
        description: "Remove a bookmark from a channel.",
        category: Category::Bookmarks,
        hints: DESTRUCTIVE,
        params: &[
            req("bookmark_id", Str, "Bookmark ID"),
            req("channel_id", Str, "Channel ID"),
        ],
    },
    ToolSpec {
        name: "slack_list_bookmarks",
        title: "List Bookmarks",
        description: "List all bookmarks in a channel.",
        category: Category::Bookmarks,
        hints: READ,
        params: &[req("channel_id", Str, "Channel ID"), FIELDS],
    },
    // Team
    ToolSpec {
        name: "slack_get_team_info",
        title: "Get Team Info",
        description: "Get information about the workspace/team: name, domain, icon, etc.",
        category: Category::Team,
        hints: READ,
        params: &[
            opt("team", Str, "Team ID (for org-level tokens; optional for single-workspace tokens)"),
            FIELDS,
        ],
    },
    // Emoji
    ToolSpec {
        name: "slack_list_emoji",
        title: "List Emoji",
        description: "List all custom emoji in the workspace. Returns emoji name-to-URL mapping. Aliases use \"alias:emoji_name\" format.",
        category: Category::Emoji,
        hints: READ,
        params: &[
            opt("include_categories", Boolean, "Include emoji category info"),
            FIELDS,
        ],
    },
];
