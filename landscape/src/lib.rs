//! Signed requests for the Landscape API without effort.
//!
//! This crate bundles the landscape crates behind one dependency:
//!
//! - the core types ([`Context`], [`Error`], ...) at the crate root
//! - the API client in [`api`]
//! - with the `default-context` feature (enabled by default), a [`Context`]
//!   backed by reqwest and the process environment
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> landscape::Result<()> {
//! // Reads LANDSCAPE_API_KEY, LANDSCAPE_API_SECRET and LANDSCAPE_API_URI.
//! let client = landscape::api::default_client()?;
//!
//! let roles = client.get_roles(["GlobalAdmin"]).await?;
//! println!("{roles:?}");
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use landscape_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::{context_with_client, default_context};

pub mod api;
