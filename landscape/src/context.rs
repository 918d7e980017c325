use landscape_core::{Context, OsEnv};
use landscape_http_send_reqwest::ReqwestHttpSend;

/// Create a context that sends requests with a default [`reqwest::Client`]
/// and reads the process environment.
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}

/// Create a context that sends requests with the given [`reqwest::Client`].
pub fn context_with_client(client: reqwest::Client) -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::new(client))
        .with_env(OsEnv)
}
