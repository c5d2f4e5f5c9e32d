use std::fmt;

use thiserror::Error;

/// The remote call an [`ApiError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl ApiOperation {
    /// Message shown when the request never produced a response.
    pub fn transport_message(&self) -> &'static str {
        match self {
            ApiOperation::List => {
                "Failed to fetch users. Please check your connection."
            }
            ApiOperation::Get => "Failed to fetch user details.",
            ApiOperation::Create => "Failed to create user.",
            ApiOperation::Update => "Failed to update user.",
            ApiOperation::Delete => "Failed to delete user.",
        }
    }

    /// Prefix used for non-2xx responses.
    pub fn status_prefix(&self) -> &'static str {
        match self {
            ApiOperation::Delete => "Failed to delete user",
            _ => "API Error",
        }
    }
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApiOperation::List => "list users",
            ApiOperation::Get => "get user",
            ApiOperation::Create => "create user",
            ApiOperation::Update => "update user",
            ApiOperation::Delete => "delete user",
        };
        f.write_str(name)
    }
}

/// Failure of a single round trip to the users API.
///
/// `Display` is the message the dashboard shows to the operator.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}: {status} {reason}", .operation.status_prefix())]
    Status {
        operation: ApiOperation,
        status: u16,
        reason: String,
    },

    #[error("{}", .operation.transport_message())]
    Transport {
        operation: ApiOperation,
        #[source]
        source: reqwest::Error,
    },

    /// The response arrived with a success status but its body did not
    /// decode into the expected shape.
    #[error("{operation}: malformed response body")]
    Decode {
        operation: ApiOperation,
        #[source]
        source: reqwest::Error,
    },

    /// Raised by in-process gateways (test doubles, fakes).
    #[error("{message}")]
    Other {
        operation: ApiOperation,
        message: String,
    },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn operation(&self) -> ApiOperation {
        match self {
            ApiError::Status { operation, .. }
            | ApiError::Transport { operation, .. }
            | ApiError::Decode { operation, .. }
            | ApiError::Other { operation, .. } => *operation,
        }
    }

    /// Whether the failure has no operator-facing message of its own.
    pub fn is_unexpected(&self) -> bool {
        matches!(self, ApiError::Decode { .. })
    }

    pub(crate) fn from_status(
        operation: ApiOperation,
        status: reqwest::StatusCode,
    ) -> Self {
        ApiError::Status {
            operation,
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    pub(crate) fn from_reqwest(
        operation: ApiOperation,
        source: reqwest::Error,
    ) -> Self {
        if source.is_decode() {
            ApiError::Decode { operation, source }
        } else {
            ApiError::Transport { operation, source }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
