use docket_store::StoreError;
use docket_types::ItemId;
use thiserror::Error;

/// Status category of a [`ServiceError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller sent something that could not be decoded.
    BadInput,
    /// The addressed item does not exist.
    NotFound,
    /// No operation matches the attempted method and path.
    UnknownRoute,
    /// The store failed.
    Internal,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    BadInput(String),

    #[error("no item found for id: {0}")]
    NotFound(ItemId),

    #[error("unknown route: {method} {path}")]
    UnknownRoute { method: String, path: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BadInput(_) => ErrorKind::BadInput,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::UnknownRoute { .. } => ErrorKind::UnknownRoute,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn unknown_route(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self::UnknownRoute {
            method: method.into(),
            path: path.into(),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => Self::NotFound(id),
            other => Self::Internal(other.to_string()),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
