//! LinkShort Navigation
//!
//! Route surface:
//! - `/` — home
//! - `/admin` — administrative area (protected)
//! - `/go/:code` — public resolution of a short code
//! - `/auth` — login / signup
//!
//! Navigating to the protected destination without an active session
//! transparently substitutes the authentication destination. The guard
//! decision is pure and synchronous; session presence is a local read.

mod error;
mod guard;
mod route;

pub use error::RouteError;
pub use guard::NavigationGuard;
pub use route::Route;

pub type Result<T> = std::result::Result<T, RouteError>;
