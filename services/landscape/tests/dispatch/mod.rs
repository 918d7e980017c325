
use std::collections::HashMap;

use http::header::{CONTENT_TYPE, USER_AGENT};
use http::Method;
use landscape_api::{pathlist, Client, Config, ParameterSet};
use landscape_core::{ApiErrorCode, Context, ErrorKind, StaticEnv};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use super::{decode_fields, field, init_logger, test_client, test_config, test_time, MockHttpSend};

#[test]
fn test_build_request() {
    let client = test_client(&MockHttpSend::ok(""));
    let req = client
        .build_request("GetComputers", ParameterSet::new())
        .expect("request must be built");

    assert_eq!(req.method(), Method::POST);
    assert_eq!(req.uri(), "https://landscape.canonical.com/api/");
    assert_eq!(
        req.headers()[CONTENT_TYPE],
        "application/x-www-form-urlencoded"
    );
    assert_eq!(req.headers()[USER_AGENT], "landscape-api-rust");
    assert_eq!(
        &req.body()[..],
        b"access_key_id=not+a+key&action=GetComputers&signature=lBTA%2BRRW1zf4HDEZpMY88h8viNdN2rSupTxPicyqSuc%3D&signature_method=HmacSHA256&signature_version=2&timestamp=2012-09-14T17%3A12%3A12Z&version=2011-08-01"
    );
}

#[test]
fn test_body_decodes_to_signed_fields() {
    let client = test_client(&MockHttpSend::ok(""));
    let params = pathlist("tags", ["web", "server & db"])
        .with("query", "tag:web OR ~name")
        .with_opt("limit", Some(10));

    let fields = client
        .signed_fields("GetComputers", params.clone())
        .expect("fields must be signed");
    let req = client
        .build_request("GetComputers", params)
        .expect("request must be built");

    assert_eq!(decode_fields(req.body()), fields);
    assert_eq!(field(&fields, "tags.2"), Some("server & db"));
    assert_eq!(field(&fields, "limit"), Some("10"));
}

#[tokio::test]
async fn test_fetch_returns_body() {
    let send = MockHttpSend::ok(r#"[{"id": 1, "title": "web-1"}]"#);
    let client = test_client(&send);

    let body = client
        .fetch("GetComputers", pathlist("tags", "web"))
        .await
        .expect("fetch must succeed");
    assert_eq!(&body[..], br#"[{"id": 1, "title": "web-1"}]"#);

    let reqs = send.requests();
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].method, Method::POST);
    assert_eq!(reqs[0].uri, "https://landscape.canonical.com/api/");
    assert_eq!(reqs[0].headers[USER_AGENT], "landscape-api-rust");

    let fields = send.sent_fields();
    assert_eq!(field(&fields, "action"), Some("GetComputers"));
    assert_eq!(field(&fields, "tags.1"), Some("web"));
}

#[tokio::test]
async fn test_fetch_json() {
    let send = MockHttpSend::ok(r#"[{"id": 1, "title": "web-1"}]"#);
    let client = test_client(&send);

    let computers: serde_json::Value = client
        .fetch_json("GetComputers", ParameterSet::new())
        .await
        .expect("fetch must succeed");
    assert_eq!(computers, json!([{"id": 1, "title": "web-1"}]));
}

#[tokio::test]
async fn test_fetch_json_malformed_body() {
    let client = test_client(&MockHttpSend::ok("not json"));

    let err = client
        .fetch_json::<serde_json::Value>("GetComputers", ParameterSet::new())
        .await
        .expect_err("body must not decode");
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[tokio::test]
async fn test_empty_action_is_rejected_before_sending() {
    let send = MockHttpSend::ok("");
    let client = test_client(&send);

    let err = client
        .fetch("", ParameterSet::new())
        .await
        .expect_err("empty action must be rejected");

    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(send.requests().is_empty());
}

#[test_case(500, "Internal Server Error"; "internal server error")]
#[test_case(502, "<html>Bad Gateway</html>"; "bad gateway")]
#[test_case(503, r#"{"error": "UnknownRole", "message": "ignored"}"#; "json is not parsed")]
#[tokio::test]
async fn test_server_error(status: u16, body: &'static str) {
    let client = test_client(&MockHttpSend::new(status, body));

    let err = client
        .fetch("GetComputers", ParameterSet::new())
        .await
        .expect_err("server error must fail");

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.code(), None);
    assert!(err.message().contains(body), "{err}");
}

#[test_case(400, "UnknownRole", ApiErrorCode::UnknownRole; "unknown role")]
#[test_case(400, "ReadOnlyRole", ApiErrorCode::ReadOnlyRole; "read only role")]
#[test_case(409, "DuplicateAccessGroup", ApiErrorCode::DuplicateAccessGroup; "duplicate access group")]
#[test_case(404, "UnknownComputer", ApiErrorCode::Unknown("UnknownComputer".to_string()); "unknown code")]
#[tokio::test]
async fn test_api_error(status: u16, code: &'static str, expected: ApiErrorCode) {
    let body = json!({"error": code, "message": format!("{code} happened")}).to_string();
    let client = test_client(&MockHttpSend::new(status, body));

    let err = client
        .fetch("GetComputers", ParameterSet::new())
        .await
        .expect_err("api error must fail");

    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.code(), Some(&expected));
    assert_eq!(err.message(), format!("{code} happened"));
}

#[tokio::test]
async fn test_malformed_error_body() {
    let client = test_client(&MockHttpSend::new(403, "<html>Forbidden</html>"));

    let err = client
        .fetch("GetComputers", ParameterSet::new())
        .await
        .expect_err("error must fail");
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[tokio::test]
async fn test_without_http_send() {
    init_logger();

    let client = Client::new(Context::new(), test_config()).expect("client must be valid");
    let err = client
        .fetch("GetComputers", ParameterSet::new())
        .await
        .expect_err("noop http send must fail");
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[test_case(Config::new().with_secret_access_key("not a secret"); "missing access key id")]
#[test_case(Config::new().with_access_key_id("not a key"); "missing secret access key")]
#[test_case(Config::new().with_access_key_id("").with_secret_access_key("not a secret"); "empty access key id")]
#[test_case(test_config().with_endpoint("ftp://example.com/api/"); "unsupported endpoint")]
fn test_invalid_config(config: Config) {
    init_logger();

    let err = Client::new(Context::new(), config).expect_err("config must be rejected");
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}

#[tokio::test]
async fn test_custom_endpoint() {
    init_logger();

    let send = MockHttpSend::ok("[]");
    let ctx = Context::new().with_http_send(send.clone());
    let config = test_config()
        .with_endpoint("http://localhost:8080/api/")
        .with_version("2013-11-04");
    let client = Client::new(ctx, config)
        .expect("client must be valid")
        .with_time(test_time());

    client
        .fetch("GetComputers", ParameterSet::new())
        .await
        .expect("fetch must succeed");

    assert_eq!(send.requests()[0].uri, "http://localhost:8080/api/");
    assert_eq!(field(&send.sent_fields(), "version"), Some("2013-11-04"));
}

#[tokio::test]
async fn test_client_from_env() {
    init_logger();

    let send = MockHttpSend::ok("[]");
    let ctx = Context::new()
        .with_http_send(send.clone())
        .with_env(StaticEnv {
            envs: HashMap::from([
                ("LANDSCAPE_API_KEY".to_string(), "env key".to_string()),
                ("LANDSCAPE_API_SECRET".to_string(), "env secret".to_string()),
                (
                    "LANDSCAPE_API_URI".to_string(),
                    "https://landscape.example.com/api/".to_string(),
                ),
            ]),
        });
    let client = Client::from_env(ctx).expect("client must be valid");

    client
        .fetch("GetComputers", ParameterSet::new())
        .await
        .expect("fetch must succeed");

    assert_eq!(send.requests()[0].uri, "https://landscape.example.com/api/");
    assert_eq!(field(&send.sent_fields(), "access_key_id"), Some("env key"));
}

#[test]
fn test_client_from_env_without_credential() {
    init_logger();

    let err = Client::from_env(Context::new().with_env(StaticEnv::default()))
        .expect_err("credential must be required");
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}
