//! Signed requests for the Landscape API.
//!
//! [`Client`] signs every call with the access key of its [`Config`] and
//! sends it through the [`HttpSend`](landscape_core::HttpSend) of its
//! [`Context`](landscape_core::Context).
//!
//! ```no_run
//! use landscape_api::{pathlist, Client, Config};
//! use landscape_core::Context;
//!
//! # async fn example(ctx: Context) -> landscape_core::Result<()> {
//! let config = Config::new()
//!     .with_access_key_id("access_key_id")
//!     .with_secret_access_key("secret_access_key");
//! let client = Client::new(ctx, config)?;
//!
//! let computers = client
//!     .fetch("GetComputers", pathlist("tags", ["web", "server"]))
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod constants;
pub use constants::{
    DEFAULT_API_VERSION, DEFAULT_ENDPOINT, LANDSCAPE_API_KEY, LANDSCAPE_API_SECRET,
    LANDSCAPE_API_URI,
};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod endpoint;
pub use endpoint::Endpoint;

mod params;
pub use params::{pathlist, ParameterSet, ValueList};

mod sign_request;
pub use sign_request::{percent_encode, sign, RequestSigner};

mod client;
pub use client::Client;

pub mod rbac;
