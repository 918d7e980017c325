//! Core components for talking to the Landscape API.
//!
//! This crate provides the foundational types shared by the landscape crates.
//! It keeps the pieces that have nothing to do with a particular API action so
//! that signing and dispatching can be tested without a network.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Error**: The error taxonomy every landscape call reports through
//! - **Utilities**: HMAC hashing, timestamps and secret redaction
//!
//! ## Example
//!
//! ```no_run
//! use bytes::Bytes;
//! use landscape_core::{Context, HttpSend, Result, StaticEnv};
//! use async_trait::async_trait;
//!
//! // A transport that answers every request with an empty JSON list.
//! #[derive(Debug)]
//! struct EmptyList;
//!
//! #[async_trait]
//! impl HttpSend for EmptyList {
//!     async fn http_send(&self, _: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
//!         Ok(http::Response::new(Bytes::from_static(b"[]")))
//!     }
//! }
//!
//! let ctx = Context::new()
//!     .with_http_send(EmptyList)
//!     .with_env(StaticEnv::default());
//! ```
//!
//! ## Traits
//!
//! - [`HttpSend`]: For sending HTTP requests
//! - [`Env`]: For environment variable access

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod error;
pub use error::{ApiErrorCode, Error, ErrorKind, Result};
