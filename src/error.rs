//! Application error type shared by repositories and resolvers.
//!
//! Failures are classified, never recovered: every error reaches the
//! GraphQL caller with a stable `extensions.code`.

use async_graphql::ErrorExtensions;
use mongodb::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{message}")]
    InvalidArgument { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Connectivity { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn connectivity(message: impl Into<String>) -> Self {
        Self::Connectivity {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Machine-readable code reported in GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::Connectivity { .. } => "CONNECTIVITY_ERROR",
            AppError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        map_mongo_error(e)
    }
}

/// Classifies a driver error as a connectivity failure or an internal one.
pub fn map_mongo_error(e: mongodb::error::Error) -> AppError {
    match e.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::DnsResolve { .. } => {
            tracing::warn!("Store unreachable: {}", e);
            AppError::connectivity(format!("Store unreachable: {e}"))
        }
        _ => {
            tracing::warn!("Store error: {}", e);
            AppError::internal(format!("Store error: {e}"))
        }
    }
}
