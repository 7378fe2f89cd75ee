//! LinkShort Client Core
//!
//! Central coordination layer for the shortener client. Wires the
//! durable storage, session store, API client and navigation guard into
//! one [`Client`] with a defined lifecycle: state is read from storage
//! at construction, mutated only through the session store's accessors,
//! and handed to collaborators by reference rather than through ambient
//! globals.

mod client;
mod config;
mod error;

pub use client::Client;
pub use config::Config;
pub use error::CoreError;

// Re-export core components
pub use linkshort_api::{
    ApiClient, ApiConfig, ApiError, AuthResponse, LinkCreatePayload, LinkCreateResponse,
    LinkStats, PublicLinkInfo,
};
pub use linkshort_routes::{NavigationGuard, Route, RouteError};
pub use linkshort_session::{SessionError, SessionStore, Subscription};
pub use linkshort_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
