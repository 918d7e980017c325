use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// Env holding the access key id.
pub const LANDSCAPE_API_KEY: &str = "LANDSCAPE_API_KEY";
/// Env holding the secret access key.
pub const LANDSCAPE_API_SECRET: &str = "LANDSCAPE_API_SECRET";
/// Env holding the endpoint.
pub const LANDSCAPE_API_URI: &str = "LANDSCAPE_API_URI";

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://landscape.canonical.com/api/";
/// API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "2011-08-01";

pub const SIGNATURE_VERSION: &str = "2";
pub const SIGNATURE_METHOD: &str = "HmacSHA256";
pub const CLIENT_USER_AGENT: &str = "landscape-api-rust";

// Fields every request carries.
pub const FIELD_ACTION: &str = "action";
pub const FIELD_SIGNATURE_VERSION: &str = "signature_version";
pub const FIELD_SIGNATURE_METHOD: &str = "signature_method";
pub const FIELD_ACCESS_KEY_ID: &str = "access_key_id";
pub const FIELD_VERSION: &str = "version";
pub const FIELD_TIMESTAMP: &str = "timestamp";
pub const FIELD_SIGNATURE: &str = "signature";

/// AsciiSet for [RFC 3986](https://www.rfc-editor.org/rfc/rfc3986#section-2.3) percent-encoding.
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// - Space is encoded as `%20`, never `+`.
pub static LANDSCAPE_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
