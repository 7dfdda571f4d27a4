//! Shared frontend plumbing for the Portico web UI
//!
//! Configures the per-resource API clients so that relative request paths
//! are rebased onto the current page's origin under `/api/v1`, and so that
//! the login token kept in browser local storage rides along on every
//! outgoing request.

pub mod client;
pub mod config;
pub mod logging;
pub mod services;
pub mod storage;

pub use client::{auth_client, items_client, users_client};
pub use config::ApiConfig;
pub use services::{AuthService, ItemsService, UsersService};
pub use storage::BrowserTokenStore;
