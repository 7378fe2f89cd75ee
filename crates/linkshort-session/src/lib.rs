//! LinkShort Session Management
//!
//! Single source of truth for "is a user logged in" and "which email":
//! - The session is one optional `{token, email}` record in durable storage
//! - Token and email are always written and cleared together
//! - Absence of the token is the canonical logged-out state
//! - Every mutation notifies all registered subscribers after the write
//!   is durable
//!
//! No expiry is tracked client-side; an expired token surfaces only as
//! request failures from the backend.

mod error;
mod store;
mod subscription;

pub use error::SessionError;
pub use store::SessionStore;
pub use subscription::Subscription;

pub type Result<T> = std::result::Result<T, SessionError>;
