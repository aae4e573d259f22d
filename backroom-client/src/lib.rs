//! Backroom Client - HTTP client for the back-office API
//!
//! Translates per-entity CRUD intents into requests against the backend's
//! `/api/v1/<entity>` endpoints and decodes the JSON responses.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::{EntityApi, EntityClient};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use http::HttpClient;

// Re-export for error construction and matching by callers
pub use reqwest::StatusCode;
