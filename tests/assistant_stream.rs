use poker_ranges::assistant::{
    parse_sse_line, Assistant, AssistantError, ChatRequest, Conversation, HttpAssistant, Role,
    StreamEvent, MAX_MESSAGE_CHARS,
};
use poker_ranges::range::RangeBook;

#[test]
fn sse_body_folds_into_reply() {
    let body = "\
data: {\"type\":\"conversation_id\",\"conversation_id\":\"c-9\"}

data: {\"type\":\"content\",\"content\":\"Tighten \"}
: ping
data: {\"type\":\"content\",\"content\":\"early.\"}
data: not json
data: {\"type\":\"done\",\"timestamp\":\"2024-01-01T00:00:00\"}
";
    let mut convo = Conversation::default();
    convo.begin("Is UTG too wide?");
    for ev in body.lines().filter_map(parse_sse_line) {
        convo.apply(ev);
    }
    assert_eq!(convo.id(), Some("c-9"));
    assert!(!convo.is_pending());
    let reply = &convo.messages()[1];
    assert_eq!(reply.role, Role::Assistant);
    assert_eq!(reply.content, "Tighten early.");
}

#[test]
fn error_event_parses() {
    let ev = parse_sse_line(r#"data: {"type":"error","error":"rate limited"}"#);
    assert_eq!(ev, Some(StreamEvent::Error { error: "rate limited".into() }));
    assert_eq!(parse_sse_line("data:"), None);
    assert_eq!(parse_sse_line("event: message"), None);
}

#[test]
fn request_carries_range_context() {
    let book = RangeBook::with_presets();
    let ctx = book.get("preset-utg-open").map(|r| r.context());
    let req = ChatRequest::new("review this", Some("c-1".into()), ctx).unwrap();
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["conversation_id"], "c-1");
    assert_eq!(value["range_context"]["name"], "UTG Open (15-20%)");
    assert!(value["range_context"]["total_combinations"].as_u64().unwrap() > 0);
    assert!(value["range_context"]["hands"].is_array());
}

#[test]
fn message_length_limit_is_in_characters() {
    let at_limit = "é".repeat(MAX_MESSAGE_CHARS);
    assert!(ChatRequest::new(&at_limit, None, None).is_ok());
    let over = "é".repeat(MAX_MESSAGE_CHARS + 1);
    let err = ChatRequest::new(&over, None, None).unwrap_err();
    assert!(matches!(err, AssistantError::Message(n) if n == MAX_MESSAGE_CHARS + 1));
}

#[test]
fn unreachable_service_is_http_error() {
    // port 9 (discard) on localhost is closed in test environments
    let client = HttpAssistant::new("http://127.0.0.1:9/").unwrap();
    assert_eq!(client.base_url(), "http://127.0.0.1:9");
    let req = ChatRequest::new("hi", None, None).unwrap();
    let mut events = Vec::new();
    let err = client.chat_stream(&req, &mut |ev| events.push(ev)).unwrap_err();
    assert!(matches!(err, AssistantError::Http(_)));
    assert!(events.is_empty());
}
