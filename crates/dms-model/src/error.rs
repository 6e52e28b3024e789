//! Error taxonomy for the DMS model.
//!
//! Two families live here:
//! - [`ModelError`]: local failures (strict enum lookup).
//! - [`ServiceError`]: the named exceptions the service can answer with.
//!   They carry a message and nothing else.

use std::fmt;

/// Local model errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("{type_name} value must not be empty")]
    EmptyValue { type_name: &'static str },

    #[error("invalid {type_name} value: {value:?}")]
    InvalidValue {
        type_name: &'static str,
        value: String,
    },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

macro_rules! service_errors {
    ($(
        $(#[$meta:meta])*
        $variant:ident => $code:literal
    ),+ $(,)?) => {
        /// Named exceptions returned by the service.
        ///
        /// Every variant maps one-to-one onto a wire error code; anything
        /// else lands in [`ServiceError::Unhandled`] with the raw code kept.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum ServiceError {
            $(
                $(#[$meta])*
                $variant { message: String },
            )+
            /// A code outside the modelled set.
            Unhandled { code: String, message: String },
        }

        impl ServiceError {
            /// Wire error codes of every modelled exception.
            pub const CODES: &'static [&'static str] = &[$($code),+];

            /// Build the exception matching `code`.
            ///
            /// `code` may carry the decorations the service puts on
            /// `__type` (`namespace#Code`, `Code:detail`); both are stripped
            /// before lookup.
            pub fn from_code(code: &str, message: impl Into<String>) -> Self {
                let message = message.into();
                match normalize_code(code) {
                    $($code => Self::$variant { message },)+
                    other => Self::Unhandled {
                        code: other.to_string(),
                        message,
                    },
                }
            }

            /// Wire error code of this exception.
            pub fn code(&self) -> &str {
                match self {
                    $(Self::$variant { .. } => $code,)+
                    Self::Unhandled { code, .. } => code,
                }
            }

            /// Message supplied by the service (may be empty).
            pub fn message(&self) -> &str {
                match self {
                    $(Self::$variant { message } => message,)+
                    Self::Unhandled { message, .. } => message,
                }
            }
        }
    };
}

service_errors! {
    /// The caller lacks permission for the action.
    AccessDenied => "AccessDeniedFault",
    /// Not enough capacity to satisfy the request.
    InsufficientResourceCapacity => "InsufficientResourceCapacityFault",
    /// The certificate was not valid.
    InvalidCertificate => "InvalidCertificateFault",
    /// The resource is in a state that prevents it from being used.
    InvalidResourceState => "InvalidResourceStateFault",
    /// The subnet provided is invalid.
    InvalidSubnet => "InvalidSubnet",
    /// The ciphertext references a key that doesn't exist or isn't accessible.
    KmsAccessDenied => "KMSAccessDeniedFault",
    /// The specified master key (CMK) isn't enabled.
    KmsDisabled => "KMSDisabledFault",
    /// The state of the specified KMS resource isn't valid for this request.
    KmsInvalidState => "KMSInvalidStateFault",
    /// DMS cannot access the KMS key.
    KmsKeyNotAccessible => "KMSKeyNotAccessibleFault",
    /// The specified KMS entity or resource can't be found.
    KmsNotFound => "KMSNotFoundFault",
    /// This request triggered KMS request throttling.
    KmsThrottling => "KMSThrottlingFault",
    /// The replication subnet group does not cover enough Availability Zones.
    /// It must span at least two.
    ReplicationSubnetGroupDoesNotCoverEnoughAzs => "ReplicationSubnetGroupDoesNotCoverEnoughAZs",
    /// The resource you are attempting to create already exists.
    ResourceAlreadyExists => "ResourceAlreadyExistsFault",
    /// The resource could not be found.
    ResourceNotFound => "ResourceNotFoundFault",
    /// The quota for this resource quota has been exceeded.
    ResourceQuotaExceeded => "ResourceQuotaExceededFault",
    /// The SNS topic is invalid.
    SnsInvalidTopic => "SNSInvalidTopicFault",
    /// Not authorized to access the SNS topic.
    SnsNoAuthorization => "SNSNoAuthorizationFault",
    /// The storage quota has been exceeded.
    StorageQuotaExceeded => "StorageQuotaExceededFault",
    /// The specified subnet is already in use.
    SubnetAlreadyInUse => "SubnetAlreadyInUse",
    /// An upgrade dependency is preventing the database migration.
    UpgradeDependencyFailure => "UpgradeDependencyFailureFault",
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.message();
        if message.is_empty() {
            f.write_str(self.code())
        } else {
            write!(f, "{}: {}", self.code(), message)
        }
    }
}

impl std::error::Error for ServiceError {}

/// Strip `namespace#` prefixes and `:detail` suffixes from an error code.
pub fn normalize_code(raw: &str) -> &str {
    let code = raw.rsplit('#').next().unwrap_or(raw);
    let code = code.split(':').next().unwrap_or(code);
    code.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_display() {
        let err = ModelError::EmptyValue {
            type_name: "DmsSslModeValue",
        };
        assert_eq!(err.to_string(), "DmsSslModeValue value must not be empty");

        let err = ModelError::InvalidValue {
            type_name: "EncodingTypeValue",
            value: "PLAIN".to_string(),
        };
        assert!(err.to_string().contains("EncodingTypeValue"));
        assert!(err.to_string().contains("\"PLAIN\""));
    }

    #[test]
    fn test_from_code_known() {
        let err = ServiceError::from_code("ReplicationSubnetGroupDoesNotCoverEnoughAZs", "need 2 AZs");
        assert_eq!(
            err,
            ServiceError::ReplicationSubnetGroupDoesNotCoverEnoughAzs {
                message: "need 2 AZs".to_string()
            }
        );
        assert_eq!(err.code(), "ReplicationSubnetGroupDoesNotCoverEnoughAZs");
        assert_eq!(err.message(), "need 2 AZs");
    }

    #[test]
    fn test_from_code_decorated() {
        let err = ServiceError::from_code("com.amazonaws.dms#ResourceNotFoundFault", "");
        assert!(matches!(err, ServiceError::ResourceNotFound { .. }));

        let err = ServiceError::from_code("AccessDeniedFault:http://internal.amazon.com/", "no");
        assert!(matches!(err, ServiceError::AccessDenied { .. }));
    }

    #[test]
    fn test_from_code_unhandled_keeps_code() {
        let err = ServiceError::from_code("ThrottlingException", "slow down");
        assert_eq!(err.code(), "ThrottlingException");
        assert_eq!(err.to_string(), "ThrottlingException: slow down");
    }

    #[test]
    fn test_every_code_round_trips() {
        for code in ServiceError::CODES {
            let err = ServiceError::from_code(code, "m");
            assert_eq!(err.code(), *code);
            assert!(!matches!(err, ServiceError::Unhandled { .. }), "{code}");
        }
    }

    #[test]
    fn test_display_without_message() {
        let err = ServiceError::from_code("InvalidSubnet", "");
        assert_eq!(err.to_string(), "InvalidSubnet");
    }
}
