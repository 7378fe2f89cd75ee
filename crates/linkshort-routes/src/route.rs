//! Named route destinations

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Landing page, link creation form
    Home,
    /// Administrative area listing the owner's links (protected)
    Admin,
    /// Public resolution page for a short code
    Go { code: String },
    /// Login / signup page
    Auth,
}

impl Route {
    /// Parse a path into a route destination.
    pub fn parse(path: &str) -> Result<Self> {
        let path = path.trim();
        let trimmed = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);

        match trimmed {
            "/" | "" => Ok(Route::Home),
            "/admin" => Ok(Route::Admin),
            "/auth" => Ok(Route::Auth),
            _ => {
                if let Some(code) = trimmed.strip_prefix("/go/") {
                    if !code.is_empty() && !code.contains('/') {
                        return Ok(Route::Go {
                            code: code.to_string(),
                        });
                    }
                }
                Err(RouteError::UnknownPath(path.to_string()))
            }
        }
    }

    /// The canonical path for this destination.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Admin => "/admin".to_string(),
            Route::Go { code } => format!("/go/{}", code),
            Route::Auth => "/auth".to_string(),
        }
    }

    /// Stable route name for logging and display.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Admin => "admin",
            Route::Go { .. } => "go",
            Route::Auth => "auth",
        }
    }

    /// Whether this destination requires an active session.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Admin)
    }
}
