use rmcp::model::{
    CallToolRequestParam, CallToolResult, GetPromptRequestParam, PromptMessageContent,
    RawContent, ReadResourceRequestParam, ResourceContents,
};
use rmcp::service::RunningService;
use rmcp::{RoleClient, ServiceExt};
use serde_json::{json, Value};
use slack_mcp::{ClientOptions, Config, SlackMcpServer};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn connect(config: Config) -> RunningService<RoleClient, ()> {
    let server = SlackMcpServer::new(config);
    let (client_transport, server_transport) = tokio::io::duplex(4096);

    tokio::spawn(async move {
        let service = server
            .serve(server_transport)
            .await
            .expect("Failed to start server");
        service.waiting().await.expect("Server error");
    });

    ().serve(client_transport)
        .await
        .expect("Failed to start client")
}

fn config_for(backend: &MockServer) -> Config {
    Config::new().with_client_options(ClientOptions::new().with_base_url(backend.uri()))
}

fn text_of(result: &CallToolResult) -> String {
    match &result.content[0].raw {
        RawContent::Text(t) => t.text.clone(),
        _ => panic!("Expected text content"),
    }
}

async fn call(
    client: &RunningService<RoleClient, ()>,
    name: &str,
    args: Value,
) -> CallToolResult {
    client
        .call_tool(CallToolRequestParam {
            name: name.to_string().into(),
            arguments: args.as_object().cloned(),
        })
        .await
        .expect("call_tool failed")
}

#[tokio::test]
async fn test_send_message_end_to_end() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat.postMessage"))
        .and(header("authorization", "Bearer xoxb-config"))
        .and(body_json(json!({"channel": "C123", "text": "hi"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": true, "channel": "C123", "ts": "1700000000.000100"})),
        )
        .expect(1)
        .mount(&backend)
        .await;

    let client = connect(config_for(&backend).with_bot_token("xoxb-config")).await;
    let result = call(
        &client,
        "slack_send_message",
        json!({"channel": "C123", "text": "hi", "SLACK_BOT_TOKEN": "xoxb-arg"}),
    )
    .await;

    assert_ne!(result.is_error, Some(true));
    let body: Value = serde_json::from_str(&text_of(&result)).unwrap();
    assert_eq!(body["ts"], json!("1700000000.000100"));

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_argument_token_used_without_config() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/team.info"))
        .and(header("authorization", "Bearer xoxb-arg"))
        .and(body_json(json!({})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"ok": true, "team": {"id": "T1"}})),
        )
        .expect(1)
        .mount(&backend)
        .await;

    let client = connect(config_for(&backend)).await;
    let result = call(
        &client,
        "slack_get_team_info",
        json!({"SLACK_BOT_TOKEN": "xoxb-arg"}),
    )
    .await;

    assert_ne!(result.is_error, Some(true));
    assert!(text_of(&result).contains("T1"));

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_missing_token_is_tool_error() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(0)
        .mount(&backend)
        .await;

    let client = connect(config_for(&backend)).await;
    let result = call(&client, "slack_list_channels", json!({})).await;

    assert_eq!(result.is_error, Some(true));
    let text = text_of(&result);
    assert!(text.starts_with("Error: "));
    assert!(text.contains("SLACK_BOT_TOKEN is required"));

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_api_error_is_tool_error() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/conversations.info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": false, "error": "channel_not_found"})),
        )
        .mount(&backend)
        .await;

    let client = connect(config_for(&backend).with_bot_token("xoxb-config")).await;
    let result = call(&client, "slack_get_channel_info", json!({"channel": "C404"})).await;

    assert_eq!(result.is_error, Some(true));
    assert_eq!(text_of(&result), "Error: Slack API Error: channel_not_found");

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_unknown_tool_is_tool_error() {
    let client = connect(Config::new().with_bot_token("xoxb-config")).await;
    let result = call(&client, "slack_nope", json!({})).await;

    assert_eq!(result.is_error, Some(true));
    assert_eq!(text_of(&result), "Error: Unknown tool: slack_nope");

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_listing_tools_prompts_and_resources() {
    let client = connect(Config::new()).await;

    let tools = client.list_all_tools().await.unwrap();
    assert_eq!(tools.len(), 38);
    let send = tools
        .iter()
        .find(|t| t.name == "slack_send_message")
        .unwrap();
    let annotations = send.annotations.as_ref().unwrap();
    assert_eq!(annotations.read_only_hint, Some(false));

    let prompts = client.list_all_prompts().await.unwrap();
    let names: Vec<&str> = prompts.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["send-and-manage-messages", "search-and-navigate"]);

    let resources = client.list_all_resources().await.unwrap();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].uri, "slack://server-info");

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_read_server_info() {
    let client = connect(Config::new().with_bot_token("xoxb-config")).await;

    let result = client
        .read_resource(ReadResourceRequestParam {
            uri: "slack://server-info".to_string(),
        })
        .await
        .unwrap();

    match &result.contents[0] {
        ResourceContents::TextResourceContents { text, .. } => {
            let doc: Value = serde_json::from_str(text).unwrap();
            assert_eq!(doc["name"], json!("slack-mcp"));
            assert_eq!(doc["connected"], json!(true));
            assert_eq!(doc["tools_available"], json!(38));
            assert_eq!(doc["tool_categories"]["conversations"], json!(12));
        }
        _ => panic!("Expected text resource"),
    }

    let missing = client
        .read_resource(ReadResourceRequestParam {
            uri: "slack://nothing".to_string(),
        })
        .await;
    assert!(missing.is_err());

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_get_prompt() {
    let client = connect(Config::new()).await;

    let result = client
        .get_prompt(GetPromptRequestParam {
            name: "search-and-navigate".to_string(),
            arguments: None,
        })
        .await
        .unwrap();

    assert_eq!(result.messages.len(), 1);
    match &result.messages[0].content {
        PromptMessageContent::Text { text } => assert!(text.contains("slack_search_messages")),
        _ => panic!("Expected text content"),
    }

    let missing = client
        .get_prompt(GetPromptRequestParam {
            name: "nope".to_string(),
            arguments: None,
        })
        .await;
    assert!(missing.is_err());

    client.cancel().await.unwrap();
}
