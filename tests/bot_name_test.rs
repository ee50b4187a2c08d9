//! BotName integration tests
//! Run with: cargo test --test bot_name_test

use std::sync::Once;

use serde_json::json;
use tg_botname::infrastructure::adapters::telegram::{
    decode_bot_name, ApiResponse, GetMyName, SetMyName, TelegramApi,
};
use tg_botname::infrastructure::config::Config;
use tg_botname::{ApiObject, BotError, BotName, ParseError};

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// The name comes back exactly as sent
#[test]
fn test_name_is_preserved() {
    ensure_init();

    let long = "x".repeat(300);
    for name in ["MyBot", "", "  padded  ", "Бот-помощник", "🤖 robo", long.as_str()] {
        let data = json!({ "name": name });
        let bot_name = BotName::parse(Some(&data))
            .expect("well-formed object should parse")
            .expect("present object should yield a value");
        assert_eq!(bot_name.name(), name);
    }
}

/// Absent input is a normal outcome, not an error
#[test]
fn test_absence_is_not_an_error() {
    ensure_init();

    assert_eq!(BotName::parse(None).unwrap(), None);
    assert_eq!(BotName::parse(Some(&json!(null))).unwrap(), None);
    assert_eq!(BotName::from_json("null").unwrap(), None);
}

/// Only a mapping can produce a BotName
#[test]
fn test_non_object_is_rejected() {
    ensure_init();

    let result = BotName::from_json(r#"["MyBot"]"#);
    assert!(matches!(result, Err(ParseError::Decode(_))));

    let result = BotName::from_json("[]");
    assert!(matches!(result, Err(ParseError::Decode(_))));

    let result = decode_bot_name(r#"{"ok":true,"result":["MyBot"]}"#);
    assert!(matches!(result, Err(BotError::Parse(ParseError::Decode(_)))));
}

/// A present object without `name` fails and returns nothing
#[test]
fn test_missing_name_fails() {
    ensure_init();

    let result = BotName::parse(Some(&json!({})));
    assert!(matches!(result, Err(ParseError::MissingField("name"))));

    let result = BotName::from_json(r#"{"first_name":"MyBot"}"#);
    assert!(matches!(result, Err(ParseError::MissingField("name"))));
}

#[test]
fn test_parsed_equals_constructed() {
    ensure_init();

    let parsed = BotName::from_json(r#"{"name":"MyBot"}"#).unwrap();
    assert_eq!(parsed, Some(BotName::new("MyBot")));
    assert_ne!(parsed, Some(BotName::new("OtherBot")));
}

#[test]
fn test_serializes_back_to_api_shape() {
    let value = serde_json::to_value(BotName::new("MyBot")).unwrap();
    assert_eq!(value, json!({ "name": "MyBot" }));
}

/// Full getMyName exchange, minus the HTTP call
#[test]
fn test_get_my_name_flow() {
    ensure_init();

    let mut config = Config::default();
    config.apply_env(|key| match key {
        "BOT_TOKEN" => Some("1:test".to_string()),
        _ => None,
    });

    let api = TelegramApi::from_config(&config).unwrap();
    let request = api.prepare(&GetMyName::new().with_language_code("es")).unwrap();
    assert_eq!(
        request.url,
        "https://api.telegram.org/bot1:test/getMyName"
    );
    assert_eq!(request.body, r#"{"language_code":"es"}"#);

    let response = r#"{"ok":true,"result":{"name":"Mi Bot"}}"#;
    assert_eq!(decode_bot_name(response).unwrap(), Some(BotName::new("Mi Bot")));
}

#[test]
fn test_api_failure_is_reported() {
    ensure_init();

    let response = r#"{"ok":false,"error_code":404,"description":"Not Found"}"#;
    let err = decode_bot_name(response).unwrap_err();
    assert!(matches!(err, BotError::Api { code: Some(404), .. }));

    let envelope = ApiResponse::from_json(r#"{"ok":false}"#).unwrap();
    match envelope.into_object::<BotName>() {
        Err(BotError::Api { code, description }) => {
            assert_eq!(code, None);
            assert_eq!(description, "unknown error");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[test]
fn test_set_my_name_rejects_long_names() {
    ensure_init();

    let api = TelegramApi::new("1:x", "https://api.telegram.org");
    let result = api.prepare(&SetMyName::new().with_name("n".repeat(65)));
    assert!(matches!(result, Err(BotError::InvalidRequest(_))));

    let request = api.prepare(&SetMyName::new()).unwrap();
    assert_eq!(request.body, "{}");
}
