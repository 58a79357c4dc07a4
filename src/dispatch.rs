//! Routing from tool invocations to Web API calls.
//!
//! Lookup is by exact tool name. The request body carries every caller
//! argument except the `_fields` hint and a per-call bot token, which stay
//! on this side of the wire.

use serde_json::Value;
use tracing::debug;

use crate::catalog::{self, ToolSpec, FIELDS_HINT};
use crate::client::SlackApi;
use crate::config::TOKEN_VAR;
use crate::model::{JsonObject, UploadRequest};
use crate::tools::ToolError;

/// How one tool reaches the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Forward the declared arguments to a Web API method.
    Call(&'static str),
    /// Like `Call`, with defaults that caller arguments may overwrite.
    CallWithDefaults(&'static str, &'static [(&'static str, &'static str)]),
    /// The three-step external upload.
    Upload,
}

impl Route {
    /// Web API method, or `None` for the multi-step upload.
    pub fn method(&self) -> Option<&'static str> {
        match self {
            Route::Call(m) | Route::CallWithDefaults(m, _) => Some(m),
            Route::Upload => None,
        }
    }
}

/// Route table, in catalog order.
pub static ROUTES: &[(&str, Route)] = &[
    ("slack_send_message", Route::Call("chat.postMessage")),
    ("slack_update_message", Route::Call("chat.update")),
    ("slack_delete_message", Route::Call("chat.delete")),
    ("slack_schedule_message", Route::Call("chat.scheduleMessage")),
    ("slack_delete_scheduled_message", Route::Call("chat.deleteScheduledMessage")),
    ("slack_list_scheduled_messages", Route::Call("chat.scheduledMessages.list")),
    ("slack_get_permalink", Route::Call("chat.getPermalink")),
    ("slack_list_channels", Route::Call("conversations.list")),
    ("slack_get_channel_info", Route::Call("conversations.info")),
    ("slack_get_channel_history", Route::Call("conversations.history")),
    ("slack_get_thread_replies", Route::Call("conversations.replies")),
    ("slack_get_channel_members", Route::Call("conversations.members")),
    ("slack_create_channel", Route::Call("conversations.create")),
    ("slack_archive_channel", Route::Call("conversations.archive")),
    ("slack_invite_to_channel", Route::Call("conversations.invite")),
    ("slack_kick_from_channel", Route::Call("conversations.kick")),
    ("slack_join_channel", Route::Call("conversations.join")),
    ("slack_set_channel_topic", Route::Call("conversations.setTopic")),
    ("slack_open_conversation", Route::Call("conversations.open")),
    ("slack_list_users", Route::Call("users.list")),
    ("slack_get_user_info", Route::Call("users.info")),
    ("slack_add_reaction", Route::Call("reactions.add")),
    ("slack_remove_reaction", Route::Call("reactions.remove")),
    ("slack_get_reactions", Route::Call("reactions.get")),
    ("slack_search_messages", Route::Call("search.messages")),
    ("slack_search_files", Route::Call("search.files")),
    ("slack_upload_file", Route::Upload),
    ("slack_list_files", Route::Call("files.list")),
    ("slack_delete_file", Route::Call("files.delete")),
    ("slack_pin_message", Route::Call("pins.add")),
    ("slack_unpin_message", Route::Call("pins.remove")),
    ("slack_list_pins", Route::Call("pins.list")),
    (
        "slack_add_bookmark",
        Route::CallWithDefaults("bookmarks.add", &[("type", "link")]),
    ),
    ("slack_edit_bookmark", Route::Call("bookmarks.edit")),
    ("slack_remove_bookmark", Route::Call("bookmarks.remove")),
    ("slack_list_bookmarks", Route::Call("bookmarks.list")),
    ("slack_get_team_info", Route::Call("team.info")),
    ("slack_list_emoji", Route::Call("emoji.list")),
];

/// Find the route for a tool name.
pub fn route(name: &str) -> Option<Route> {
    ROUTES
        .iter()
        .find(|(tool, _)| *tool == name)
        .map(|(_, route)| *route)
}

/// Invoke one tool against `api`.
///
/// Performs exactly one backend operation (three sequential calls for the
/// upload) and returns its result unmodified.
pub async fn dispatch<A>(api: &A, name: &str, args: JsonObject) -> Result<Value, ToolError>
where
    A: SlackApi + ?Sized,
{
    let (spec, route) = catalog::find(name)
        .zip(route(name))
        .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

    check_required(spec, &args)?;

    match route {
        Route::Call(method) => {
            let params = build_params(spec, &[], args);
            Ok(api.call(method, params).await?)
        }
        Route::CallWithDefaults(method, defaults) => {
            let params = build_params(spec, defaults, args);
            Ok(api.call(method, params).await?)
        }
        Route::Upload => {
            let request = upload_request(spec, &args)?;
            Ok(api.upload_file(request).await?)
        }
    }
}

fn check_required(spec: &ToolSpec, args: &JsonObject) -> Result<(), ToolError> {
    let missing: Vec<&str> = spec
        .required()
        .filter(|p| args.get(p.name).map_or(true, Value::is_null))
        .map(|p| p.name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ToolError::InvalidArguments {
            tool: spec.name.to_string(),
            reason: format!("missing required field(s): {}", missing.join(", ")),
        })
    }
}

/// Defaults first, then caller arguments, so callers win on collision.
///
/// Arguments the catalog does not declare are forwarded too, so backend
/// options such as `icon_emoji` reach Slack. Only host-side keys are dropped.
fn build_params(
    spec: &ToolSpec,
    defaults: &[(&'static str, &'static str)],
    args: JsonObject,
) -> JsonObject {
    let mut params: JsonObject = defaults
        .iter()
        .map(|(k, v)| (k.to_string(), Value::from(*v)))
        .collect();

    for (key, value) in args {
        if key == FIELDS_HINT || key == TOKEN_VAR || value.is_null() {
            debug!(tool = spec.name, field = %key, "not forwarding argument");
            continue;
        }
        params.insert(key, value);
    }
    params
}

fn upload_request(spec: &ToolSpec, args: &JsonObject) -> Result<UploadRequest, ToolError> {
    let text = |field: &str| -> Result<Option<String>, ToolError> {
        match args.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(ToolError::InvalidArguments {
                tool: spec.name.to_string(),
                reason: format!("field '{field}' must be a string"),
            }),
        }
    };

    let mut request = UploadRequest::new(
        text("content")?.unwrap_or_default(),
        text("filename")?.unwrap_or_default(),
    );
    request.channel_id = text("channel_id")?;
    request.initial_comment = text("initial_comment")?;
    request.thread_ts = text("thread_ts")?;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_routes_match_catalog_order() {
        let routed: Vec<&str> = ROUTES.iter().map(|(name, _)| *name).collect();
        let declared: Vec<&str> = catalog::TOOLS.iter().map(|t| t.name).collect();
        assert_eq!(routed, declared);
    }

    #[test]
    fn test_build_params_forwards_extras_but_not_host_keys() {
        let spec = catalog::find("slack_send_message").unwrap();
        let params = build_params(
            spec,
            &[],
            args(json!({
                "channel": "C1",
                "text": "hi",
                "icon_emoji": ":robot:",
                "thread_ts": null,
                "_fields": "ts",
                "SLACK_BOT_TOKEN": "xoxb-leak"
            })),
        );
        assert_eq!(
            Value::Object(params),
            json!({"channel": "C1", "text": "hi", "icon_emoji": ":robot:"})
        );
    }

    #[test]
    fn test_defaults_yield_to_arguments() {
        let spec = catalog::find("slack_add_bookmark").unwrap();
        let defaults: &[(&str, &str)] = &[("type", "link")];

        let params = build_params(spec, defaults, args(json!({"channel_id": "C1"})));
        assert_eq!(params["type"], json!("link"));

        let params = build_params(spec, defaults, args(json!({"type": "folder"})));
        assert_eq!(params["type"], json!("folder"));
    }

    #[test]
    fn test_upload_request_rejects_non_string_content() {
        let spec = catalog::find("slack_upload_file").unwrap();
        let err = upload_request(spec, &args(json!({"content": 5, "filename": "a.txt"})))
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { .. }));
    }
}
