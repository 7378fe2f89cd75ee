//! LinkShort API Client
//!
//! Single HTTP boundary to the shortener backend:
//! - One `reqwest` client with a fixed 8-second timeout
//! - Every outbound request passes through one credential-attachment
//!   point; callers never set the `Authorization` header themselves
//! - Typed wrappers for the link and auth endpoints
//! - Non-success responses propagate as [`ApiError`]; no retry, no
//!   suppression, no client-side recovery
//!
//! `signup` and `login` are the only operations that mutate the session
//! store.

mod client;
mod config;
mod error;
mod types;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use types::{
    AuthResponse, LinkCreatePayload, LinkCreateResponse, LinkStats, PublicLinkInfo,
};

pub type Result<T> = std::result::Result<T, ApiError>;
