//! Error types for itemctl-server

use std::fmt;

use thiserror::Error;

use crate::db::StoreError;
use crate::models::ValidationError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Which service operation an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Delete,
    Update,
}

impl Operation {
    /// User-facing message when the store fails during this operation
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::List => "Failed to fetch items from database",
            Self::Create => "Failed to add item to database",
            Self::Delete => "Failed to delete item from database",
            Self::Update => "Failed to update item in database",
        }
    }

    /// User-facing message when the request body is rejected
    pub fn invalid_input_message(self) -> &'static str {
        match self {
            Self::Create => {
                "Invalid item format. Name (string) and number (number) are required."
            }
            Self::Update => "Invalid update format. Number must be a number.",
            Self::List | Self::Delete => "Invalid request.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Update => "update",
        };
        f.write_str(name)
    }
}

/// Outcome taxonomy of the item service
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("invalid input for {operation}: {source}")]
    InvalidInput {
        operation: Operation,
        #[source]
        source: ValidationError,
    },

    #[error("item '{name}' already exists")]
    Conflict { name: String },

    #[error("item '{name}' not found")]
    NotFound { name: String },

    #[error("store unavailable during {operation}: {source}")]
    StoreUnavailable {
        operation: Operation,
        #[source]
        source: StoreError,
    },
}

impl ServiceError {
    pub fn invalid(operation: Operation) -> impl FnOnce(ValidationError) -> Self {
        move |source| Self::InvalidInput { operation, source }
    }

    pub fn unavailable(operation: Operation) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::StoreUnavailable { operation, source }
    }
}
