//! Landscape API client with convenience constructors.

pub use landscape_api::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Result};

/// Create a client configured from the process environment.
///
/// The client uses the default context, so requests are sent with reqwest and
/// the configuration is read from `LANDSCAPE_API_KEY`,
/// `LANDSCAPE_API_SECRET` and `LANDSCAPE_API_URI`.
#[cfg(feature = "default-context")]
pub fn default_client() -> Result<Client> {
    Client::from_env(default_context())
}

/// Create a client from an explicit config, using the default context.
///
/// Values missing from `config` are still read from the environment.
#[cfg(feature = "default-context")]
pub fn client_with_config(config: Config) -> Result<Client> {
    let ctx = default_context();
    let config = config.from_env(&ctx);
    Client::new(ctx, config)
}
