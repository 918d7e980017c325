use bytes::Bytes;
use http::header::{CONTENT_TYPE, USER_AGENT};
use http::{Method, StatusCode};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::constants::*;
use crate::{Config, Credential, Endpoint, ParameterSet, RequestSigner};
use landscape_core::time::{format_iso8601, now, DateTime};
use landscape_core::{ApiErrorCode, Context, Error, Result};

/// Client dispatches signed requests to the Landscape API.
///
/// Everything a client holds is immutable after construction, so it can be
/// cloned and shared freely. Each call signs with a fresh timestamp.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    credential: Credential,
    endpoint: Endpoint,
    version: String,
    signer: RequestSigner,

    time: Option<DateTime>,
}

impl Client {
    /// Create a new client.
    ///
    /// Returns an error if the access key id or the secret access key is
    /// missing or empty, or if the endpoint can not be parsed.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let credential = Credential::new(
            config.access_key_id.unwrap_or_default(),
            config.secret_access_key.unwrap_or_default(),
        )?;
        let endpoint = match config.endpoint.as_deref() {
            Some(v) => Endpoint::parse(v)?,
            None => Endpoint::default(),
        };
        let version = config
            .version
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());
        let signer = RequestSigner::for_endpoint(&endpoint);

        debug!("created landscape client for {endpoint}, credential {credential:?}");
        Ok(Self {
            ctx,
            credential,
            endpoint,
            version,
            signer,

            time: None,
        })
    }

    /// Create a new client configured from the environment of `ctx`.
    pub fn from_env(ctx: Context) -> Result<Self> {
        let config = Config::new().from_env(&ctx);
        Self::new(ctx, config)
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// The endpoint this client talks to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// The API version sent with every request.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Build the full field list of a request, signature included.
    ///
    /// Fields are sorted by key. Absent and empty parameters are dropped and
    /// parameters named like a protocol field are replaced by it.
    pub fn signed_fields(&self, action: &str, params: ParameterSet) -> Result<Vec<(String, String)>> {
        if action.is_empty() {
            return Err(Error::request_invalid("action must be provided"));
        }

        let timestamp = format_iso8601(self.time.unwrap_or_else(now));
        let protocol = [
            (FIELD_ACTION, action),
            (FIELD_SIGNATURE_VERSION, SIGNATURE_VERSION),
            (FIELD_SIGNATURE_METHOD, SIGNATURE_METHOD),
            (FIELD_ACCESS_KEY_ID, self.credential.access_key_id.as_str()),
            (FIELD_VERSION, self.version.as_str()),
            (FIELD_TIMESTAMP, timestamp.as_str()),
        ];

        let unsigned: Vec<(String, String)> = params
            .into_present()
            .into_iter()
            .filter(|(k, _)| k != FIELD_SIGNATURE && !protocol.iter().any(|(p, _)| p == k))
            .chain(protocol.iter().map(|(k, v)| (k.to_string(), v.to_string())))
            .collect();

        let signature = self
            .signer
            .sign(&self.credential.secret_access_key, &unsigned, false);

        let mut signed = unsigned;
        signed.push((FIELD_SIGNATURE.to_string(), signature));
        signed.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(signed)
    }

    /// Build the http request of an action without sending it.
    pub fn build_request(&self, action: &str, params: ParameterSet) -> Result<http::Request<Bytes>> {
        let fields = self.signed_fields(action, params)?;
        let body = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&fields)
            .finish();

        let req = http::Request::builder()
            .method(Method::POST)
            .uri(self.endpoint.request_uri())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .body(Bytes::from(body))?;
        Ok(req)
    }

    /// Call an action and return the raw response body.
    ///
    /// ```no_run
    /// # async fn example(client: landscape_api::Client) -> landscape_core::Result<()> {
    /// use landscape_api::pathlist;
    ///
    /// let body = client.fetch("GetComputers", pathlist("tags", ["web", "server"])).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch(&self, action: &str, params: ParameterSet) -> Result<Bytes> {
        let req = self.build_request(action, params)?;

        debug!("dispatching {action} to {}", self.endpoint);
        let resp = self.ctx.http_send(req).await?;
        debug!("{action} responded with {}", resp.status());

        parse_response(resp)
    }

    /// Call an action and decode the response body from JSON.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        action: &str,
        params: ParameterSet,
    ) -> Result<T> {
        let body = self.fetch(action, params).await?;
        serde_json::from_slice(&body).map_err(|e| {
            Error::protocol(format!("decode response of {action} failed: {e}")).with_source(e)
        })
    }
}

/// Error body returned by the API for a rejected request.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
    #[serde(default)]
    message: String,
}

/// Classify the response into the body on success or a typed error.
fn parse_response(resp: http::Response<Bytes>) -> Result<Bytes> {
    let status = resp.status();
    let body = resp.into_body();

    if status.is_success() {
        return Ok(body);
    }

    // Server errors are not guaranteed to be JSON.
    if status.is_server_error() {
        return Err(server_error(status, &body));
    }

    let resp: ErrorResponse = serde_json::from_slice(&body).map_err(|e| {
        Error::protocol(format!(
            "decode error response with status {status} failed: {e}"
        ))
        .with_source(e)
    })?;
    let code = ApiErrorCode::from(resp.error.as_str());
    debug!("api returned error {code}: {}", resp.message);

    Err(Error::api(code, resp.message))
}

fn server_error(status: StatusCode, body: &Bytes) -> Error {
    Error::transport(format!(
        "unexpected server error {status}, response body is: {}",
        String::from_utf8_lossy(body)
    ))
}
