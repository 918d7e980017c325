use http::Method;
use landscape_api::{pathlist, sign, Client, Config, ParameterSet, RequestSigner};
use landscape_core::time::parse_rfc3339;
use landscape_core::Context;
use pretty_assertions::assert_eq;

use super::{field, init_logger, test_client, test_config, test_time, MockHttpSend};

const GET_COMPUTERS_SIGNATURE: &str = "lBTA+RRW1zf4HDEZpMY88h8viNdN2rSupTxPicyqSuc=";
const GET_COMPUTERS_WITH_TAGS_SIGNATURE: &str = "NQmtWOtLQTqawygcrD9sDP24s3KVOASLOUVn0tumdkE=";

fn signature_of(client: &Client, action: &str, params: ParameterSet) -> String {
    let fields = client
        .signed_fields(action, params)
        .expect("fields must be signed");
    field(&fields, "signature")
        .expect("signature must be present")
        .to_string()
}

#[test]
fn test_canonical_string_of_get_computers() {
    init_logger();

    let signer = RequestSigner::new(Method::POST, "landscape.canonical.com", "/api/");
    let params = [
        ("version", "2011-08-01"),
        ("timestamp", "2012-09-14T17:12:12Z"),
        ("signature_version", "2"),
        ("signature_method", "HmacSHA256"),
        ("action", "GetComputers"),
        ("access_key_id", "not a key"),
    ];

    assert_eq!(
        signer.canonical_string(&params),
        "POST\nlandscape.canonical.com\n/api/\naccess_key_id=not%20a%20key&action=GetComputers&signature_method=HmacSHA256&signature_version=2&timestamp=2012-09-14T17%3A12%3A12Z&version=2011-08-01"
    );
}

#[test]
fn test_signed_fields() {
    let client = test_client(&MockHttpSend::ok(""));
    let fields = client
        .signed_fields("GetComputers", ParameterSet::new())
        .expect("fields must be signed");

    assert_eq!(
        fields,
        vec![
            ("access_key_id".to_string(), "not a key".to_string()),
            ("action".to_string(), "GetComputers".to_string()),
            ("signature".to_string(), GET_COMPUTERS_SIGNATURE.to_string()),
            ("signature_method".to_string(), "HmacSHA256".to_string()),
            ("signature_version".to_string(), "2".to_string()),
            ("timestamp".to_string(), "2012-09-14T17:12:12Z".to_string()),
            ("version".to_string(), "2011-08-01".to_string()),
        ]
    );
}

#[test]
fn test_signature_with_pathlist() {
    let client = test_client(&MockHttpSend::ok(""));

    assert_eq!(
        signature_of(&client, "GetComputers", pathlist("tags", ["web", "server"])),
        GET_COMPUTERS_WITH_TAGS_SIGNATURE
    );
}

#[test]
fn test_signature_ignores_insertion_order() {
    let client = test_client(&MockHttpSend::ok(""));

    let forward = ParameterSet::new()
        .with("tags.1", "web")
        .with("tags.2", "server");
    let backward = ParameterSet::new()
        .with("tags.2", "server")
        .with("tags.1", "web");

    assert_eq!(
        signature_of(&client, "GetComputers", forward),
        signature_of(&client, "GetComputers", backward)
    );
}

#[test]
fn test_signature_ignores_absent_and_empty_params() {
    let client = test_client(&MockHttpSend::ok(""));
    let params = ParameterSet::new()
        .with("description", "")
        .with_opt("parent", None::<String>);

    assert_eq!(
        signature_of(&client, "GetComputers", params),
        GET_COMPUTERS_SIGNATURE
    );
}

#[test]
fn test_signature_ignores_caller_protocol_fields() {
    let client = test_client(&MockHttpSend::ok(""));
    let params = ParameterSet::new()
        .with("signature", "forged")
        .with("action", "RemoveRole")
        .with("timestamp", "1999-01-01T00:00:00Z");

    let fields = client
        .signed_fields("GetComputers", params)
        .expect("fields must be signed");

    assert_eq!(fields.len(), 7);
    assert_eq!(field(&fields, "action"), Some("GetComputers"));
    assert_eq!(field(&fields, "timestamp"), Some("2012-09-14T17:12:12Z"));
    assert_eq!(field(&fields, "signature"), Some(GET_COMPUTERS_SIGNATURE));
}

#[test]
fn test_signature_depends_on_secret() {
    init_logger();

    let ctx = Context::new();
    let other = Client::new(ctx, test_config().with_secret_access_key("another secret"))
        .expect("client must be valid")
        .with_time(test_time());

    assert_ne!(
        signature_of(&other, "GetComputers", ParameterSet::new()),
        GET_COMPUTERS_SIGNATURE
    );
}

#[test]
fn test_signature_uses_endpoint_host_and_path() {
    init_logger();

    let config = test_config().with_endpoint("http://localhost:8080/message-system/api/");
    let client = Client::new(Context::new(), config)
        .expect("client must be valid")
        .with_time(test_time());

    let mut fields = client
        .signed_fields("GetComputers", ParameterSet::new())
        .expect("fields must be signed");
    let signature = fields.remove(
        fields
            .iter()
            .position(|(k, _)| k == "signature")
            .expect("signature must be present"),
    );

    assert_eq!(
        signature.1,
        sign(
            "not a secret",
            Method::POST,
            "localhost",
            "/message-system/api/",
            &fields,
            false
        )
    );
    assert_ne!(signature.1, GET_COMPUTERS_SIGNATURE);
}

#[test]
fn test_sign_urlencoded() {
    init_logger();

    let params = [
        ("access_key_id", "not a key"),
        ("action", "GetComputers"),
        ("signature_method", "HmacSHA256"),
        ("signature_version", "2"),
        ("timestamp", "2012-09-14T17:12:12Z"),
        ("version", "2011-08-01"),
    ];
    let signature = sign(
        "not a secret",
        Method::POST,
        "landscape.canonical.com",
        "/api/",
        &params,
        true,
    );

    assert_eq!(signature, "lBTA%2BRRW1zf4HDEZpMY88h8viNdN2rSupTxPicyqSuc%3D");
}

#[test]
fn test_timestamp_defaults_to_now() {
    init_logger();

    let client = Client::new(Context::new(), test_config()).expect("client must be valid");
    let fields = client
        .signed_fields("GetComputers", ParameterSet::new())
        .expect("fields must be signed");
    let timestamp = field(&fields, "timestamp").expect("timestamp must be present");

    assert_eq!(timestamp.len(), "2012-09-14T17:12:12Z".len());
    assert!(timestamp.ends_with('Z'), "{timestamp}");
    let signed_at = parse_rfc3339(timestamp).expect("timestamp must be rfc3339");
    assert!(signed_at > test_time());
}

#[test]
fn test_default_config_values() {
    init_logger();

    let config = Config::new()
        .with_access_key_id("k")
        .with_secret_access_key("s");
    let client = Client::new(Context::new(), config).expect("client must be valid");

    assert_eq!(
        client.endpoint().to_string(),
        "https://landscape.canonical.com/api/"
    );
    assert_eq!(client.version(), "2011-08-01");
}
