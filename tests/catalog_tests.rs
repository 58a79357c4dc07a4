use std::collections::HashSet;

use serde_json::Value;
use slack_mcp::catalog::{self, Category, FIELDS_HINT};
use slack_mcp::dispatch;

#[test]
fn test_catalog_size_and_unique_names() {
    assert_eq!(catalog::TOOLS.len(), 38);

    let names: HashSet<&str> = catalog::TOOLS.iter().map(|t| t.name).collect();
    assert_eq!(names.len(), catalog::TOOLS.len());
    assert!(catalog::TOOLS.iter().all(|t| t.name.starts_with("slack_")));
}

#[test]
fn test_required_fields_are_declared_properties() {
    for tool in catalog::tools() {
        let schema = Value::Object((*tool.input_schema).clone());
        assert_eq!(schema["type"], "object", "{}", tool.name);

        let properties = schema["properties"].as_object().unwrap();
        if let Some(required) = schema.get("required") {
            for field in required.as_array().unwrap() {
                let field = field.as_str().unwrap();
                assert!(
                    properties.contains_key(field),
                    "{} requires undeclared {}",
                    tool.name,
                    field
                );
            }
        }
    }
}

#[test]
fn test_fields_hint_only_on_read_only_tools() {
    for spec in catalog::TOOLS {
        if spec.accepts_fields_hint() {
            assert!(spec.hints.read_only, "{} is not read-only", spec.name);
        }
        if spec.hints.read_only {
            assert!(spec.accepts_fields_hint(), "{} lacks _fields", spec.name);
        }
        if let Some(param) = spec.param(FIELDS_HINT) {
            assert!(!param.required);
        }
    }
}

#[test]
fn test_hints_are_consistent() {
    for spec in catalog::TOOLS {
        if spec.hints.read_only {
            assert!(!spec.hints.destructive, "{}", spec.name);
            assert!(spec.hints.open_world, "{}", spec.name);
        }
    }

    let destructive: Vec<&str> = catalog::TOOLS
        .iter()
        .filter(|t| t.hints.destructive)
        .map(|t| t.name)
        .collect();
    assert!(destructive.contains(&"slack_delete_message"));
    assert!(destructive.contains(&"slack_delete_file"));
    assert!(destructive.contains(&"slack_archive_channel"));
}

#[test]
fn test_every_tool_is_routed() {
    for spec in catalog::TOOLS {
        let route = dispatch::route(spec.name);
        assert!(route.is_some(), "{} has no route", spec.name);
    }
    assert!(dispatch::route("slack_upload_file")
        .and_then(|r| r.method())
        .is_none());
    assert_eq!(
        dispatch::route("slack_list_emoji").and_then(|r| r.method()),
        Some("emoji.list")
    );
}

#[test]
fn test_category_counts() {
    let counts = catalog::category_counts();
    assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 38);
    assert_eq!(counts.len(), Category::ALL.len());
    assert_eq!(counts[0], (Category::Messages.as_str(), 7));
    assert_eq!(counts[1], (Category::Conversations.as_str(), 12));
}
