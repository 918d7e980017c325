use std::fmt::{Display, Formatter};
use std::str::FromStr;

use http::uri::Scheme;
use http::Uri;
use landscape_core::{Error, Result};

use crate::constants::DEFAULT_ENDPOINT;

/// Endpoint is the parsed location of the Landscape API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    uri: Uri,
    scheme: Scheme,
    host: String,
    port: u16,
}

impl Endpoint {
    /// Parse an endpoint from a url like `https://landscape.canonical.com/api/`.
    pub fn parse(endpoint: &str) -> Result<Self> {
        let uri = Uri::from_str(endpoint)?;
        Self::from_uri(uri)
    }

    fn from_uri(uri: Uri) -> Result<Self> {
        let scheme = match uri.scheme() {
            Some(s) if *s == Scheme::HTTPS || *s == Scheme::HTTP => s.clone(),
            Some(s) => {
                return Err(Error::config_invalid(format!(
                    "endpoint scheme {s} is not supported, use http or https"
                )))
            }
            None => return Err(Error::config_invalid("endpoint must have a scheme")),
        };
        let host = uri
            .host()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| Error::config_invalid("endpoint must have a host"))?
            .to_string();
        let port = uri.port_u16().unwrap_or_else(|| default_port(&scheme));

        Ok(Self {
            uri,
            scheme,
            host,
            port,
        })
    }

    /// Scheme of the endpoint, `http` or `https`.
    pub fn scheme(&self) -> &str {
        self.scheme.as_str()
    }

    /// Host of the endpoint, used as the host line of the canonical string.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port of the endpoint, derived from the scheme if not given.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Path of the endpoint, used as the path line of the canonical string.
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// The uri requests are posted to.
    ///
    /// The port is only spelled out when it differs from the scheme default.
    pub fn request_uri(&self) -> String {
        if self.port == default_port(&self.scheme) {
            format!("{}://{}{}", self.scheme, self.host, self.path())
        } else {
            format!("{}://{}:{}{}", self.scheme, self.host, self.port, self.path())
        }
    }
}

fn default_port(scheme: &Scheme) -> u16 {
    if *scheme == Scheme::HTTPS {
        443
    } else {
        80
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::from_uri(Uri::from_static(DEFAULT_ENDPOINT)).expect("default endpoint must be valid")
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uri)
    }
}
