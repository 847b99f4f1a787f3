//! Error types for goss operations.

use thiserror::Error;

/// Errors that can occur while rendering or loading style trees.
#[derive(Error, Debug)]
pub enum Error {
    #[error("class namer configured without a class map")]
    MissingClassMap,

    #[error("no display node with id {0}")]
    UnknownNode(u32),

    #[error("Invalid declaration: {0}")]
    InvalidDeclaration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
