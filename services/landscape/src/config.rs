use std::fmt::{Debug, Formatter};

use crate::constants::*;
use landscape_core::{utils::Redact, Context};

/// Config carries all the configuration for the Landscape API client.
#[derive(Clone, Default)]
pub struct Config {
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`LANDSCAPE_API_URI`]
    /// - default to `https://landscape.canonical.com/api/`
    pub endpoint: Option<String>,
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`LANDSCAPE_API_KEY`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`LANDSCAPE_API_SECRET`]
    pub secret_access_key: Option<String>,
    /// `version` of the API, default to `2011-08-01`.
    pub version: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set access_key_id
    pub fn with_access_key_id(mut self, access_key_id: impl Into<String>) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self
    }

    /// Set secret_access_key
    pub fn with_secret_access_key(mut self, secret_access_key: impl Into<String>) -> Self {
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Set API version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Load config from env.
    ///
    /// Values already set on this config are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(LANDSCAPE_API_URI) {
            self.endpoint.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(LANDSCAPE_API_KEY) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(LANDSCAPE_API_SECRET) {
            self.secret_access_key.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("version", &self.version)
            .finish()
    }
}
