//! Error types for dms-client

use dms_model::ServiceError;
use thiserror::Error;

use crate::transport::TransportError;

/// Errors returned by client calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with an error response.
    #[error("service error (HTTP {status}): {error}")]
    Service {
        error: ServiceError,
        status: u16,
        request_id: Option<String>,
    },

    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("failed to encode {operation} payload: {message}")]
    Serialize {
        operation: &'static str,
        message: String,
    },

    #[error("failed to decode {operation} payload: {message}")]
    Deserialize {
        operation: &'static str,
        message: String,
    },

    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// The service exception, when the service answered with one.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            ClientError::Service { error, .. } => Some(error),
            _ => None,
        }
    }

    /// The `x-amzn-RequestId` of a failed call, if the service sent one.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            ClientError::Service { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of a service error response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display() {
        let err = ClientError::Service {
            error: ServiceError::from_code("ResourceNotFoundFault", "no such endpoint"),
            status: 400,
            request_id: Some("req-1".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "service error (HTTP 400): ResourceNotFoundFault: no such endpoint"
        );
        assert_eq!(err.request_id(), Some("req-1"));
        assert_eq!(err.status(), Some(400));
        assert!(matches!(
            err.service_error(),
            Some(ServiceError::ResourceNotFound { .. })
        ));
    }

    #[test]
    fn test_non_service_errors_have_no_service_details() {
        let err = ClientError::InvalidConfig("empty region".to_string());
        assert!(err.service_error().is_none());
        assert!(err.request_id().is_none());
        assert!(err.status().is_none());
    }
}
