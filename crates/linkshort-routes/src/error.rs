//! Route error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("Unknown path: {0}")]
    UnknownPath(String),
}
