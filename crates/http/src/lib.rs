//! Portico HTTP module providing the intercepting API client
//!
//! Every outgoing request passes through a request interceptor that rebases
//! relative paths onto the API base URL and attaches the stored login token
//! as a bearer credential.

pub mod types;

#[cfg(feature = "client")]
pub mod client;
