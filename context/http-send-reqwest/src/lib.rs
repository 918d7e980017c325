//! [`HttpSend`] implementation backed by [`reqwest`].
//!
//! ```no_run
//! use landscape_core::Context;
//! use landscape_http_send_reqwest::ReqwestHttpSend;
//!
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use landscape_core::{Error, HttpSend, Result};
use log::debug;
use reqwest::{Client, Request};

/// ReqwestHttpSend sends requests with a [`reqwest::Client`].
///
/// The client is used as is: timeouts, proxies and TLS settings are whatever
/// the caller configured on it.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::request_invalid("convert request into reqwest failed").with_source(e))?;
        debug!("sending {} {}", req.method(), req.url());

        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport(format!("send request failed: {e}")).with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport(format!("read response body failed: {e}")).with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
