//! Interpreting model output: either prose for the visitor or a structured tool request.

use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum AssistantReply {
    PlainText(String),
    /// The model asked the host to act. `args` holds every other top-level field.
    ToolCall { name: String, args: Map<String, Value> },
}

impl AssistantReply {
    /// A reply is a tool call only when the whole text is a JSON object with a
    /// non-empty string `tool` field. Anything else is shown as-is.
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str::<Value>(text.trim()) {
            Ok(Value::Object(mut fields)) => match fields.remove("tool") {
                Some(Value::String(name)) if !name.is_empty() => AssistantReply::ToolCall { name, args: fields },
                _ => AssistantReply::PlainText(text.to_string()),
            },
            _ => AssistantReply::PlainText(text.to_string()),
        }
    }
}

/// `candidates[0].content.parts[0].text` of a `generateContent` response.
pub fn candidate_text(body: &Value) -> Option<&str> {
    body.pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
}

/// String field from tool arguments, empty when absent or not a string.
pub(crate) fn arg_str<'a>(args: &'a Map<String, Value>, key: &str) -> &'a str {
    args.get(key).and_then(Value::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prose_stays_prose() {
        assert_eq!(
            AssistantReply::parse("Hello! How can I help?"),
            AssistantReply::PlainText("Hello! How can I help?".into())
        );
        // valid JSON, but not a tool request
        assert!(matches!(AssistantReply::parse("[1,2]"), AssistantReply::PlainText(_)));
        assert!(matches!(AssistantReply::parse(r#"{"name":"x"}"#), AssistantReply::PlainText(_)));
        assert!(matches!(AssistantReply::parse(r#"{"tool":""}"#), AssistantReply::PlainText(_)));
        assert!(matches!(AssistantReply::parse(r#"{"tool":7}"#), AssistantReply::PlainText(_)));
    }

    #[test]
    fn tool_object_becomes_a_call() {
        let reply = AssistantReply::parse("  {\"tool\":\"booking_complete\",\"name\":\"Asha\",\"time\":\"10am\"}\n");
        match reply {
            AssistantReply::ToolCall { name, args } => {
                assert_eq!(name, "booking_complete");
                assert_eq!(arg_str(&args, "name"), "Asha");
                assert_eq!(arg_str(&args, "email"), "");
                assert!(!args.contains_key("tool"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn candidate_text_follows_the_first_part() {
        let body = json!({ "candidates": [{ "content": { "parts": [{ "text": "hi" }, { "text": "ignored" }] } }] });
        assert_eq!(candidate_text(&body), Some("hi"));
        assert_eq!(candidate_text(&json!({ "candidates": [] })), None);
        assert_eq!(candidate_text(&json!({ "promptFeedback": {} })), None);
    }
}
