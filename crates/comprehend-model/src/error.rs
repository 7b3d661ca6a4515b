/*
[INPUT]:  Error sources (serialization, endpoint URLs, config, service error bodies)
[OUTPUT]: Structured error types with retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or service exception types
*/

use std::fmt;

use thiserror::Error;

/// Main error type for the Comprehend model crate
#[derive(Error, Debug)]
pub enum ComprehendError {
    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No operation with this name in the catalog
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// The service rejected the call
    #[error("Service error: {0}")]
    Service(ServiceError),
}

impl ComprehendError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            ComprehendError::Service(err) => err.is_retryable(),
            _ => false,
        }
    }

    /// The service error, when the failure came from the service
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            ComprehendError::Service(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ServiceError> for ComprehendError {
    fn from(err: ServiceError) -> Self {
        ComprehendError::Service(err)
    }
}

/// Result type alias for Comprehend operations
pub type Result<T> = std::result::Result<T, ComprehendError>;

/// Exception types the service reports in the `__type` member of error bodies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceErrorKind {
    BatchSizeLimitExceeded,
    ConcurrentModification,
    InternalServer,
    InvalidFilter,
    InvalidRequest,
    JobNotFound,
    KmsKeyValidation,
    ResourceInUse,
    ResourceLimitExceeded,
    ResourceNotFound,
    ResourceUnavailable,
    TextSizeLimitExceeded,
    TooManyRequests,
    TooManyTagKeys,
    TooManyTags,
    UnsupportedLanguage,
    /// Exception name not known to this client, kept verbatim
    Unknown(String),
}

impl ServiceErrorKind {
    pub fn from_code(code: &str) -> Self {
        match code {
            "BatchSizeLimitExceededException" => Self::BatchSizeLimitExceeded,
            "ConcurrentModificationException" => Self::ConcurrentModification,
            "InternalServerException" => Self::InternalServer,
            "InvalidFilterException" => Self::InvalidFilter,
            "InvalidRequestException" => Self::InvalidRequest,
            "JobNotFoundException" => Self::JobNotFound,
            "KmsKeyValidationException" => Self::KmsKeyValidation,
            "ResourceInUseException" => Self::ResourceInUse,
            "ResourceLimitExceededException" => Self::ResourceLimitExceeded,
            "ResourceNotFoundException" => Self::ResourceNotFound,
            "ResourceUnavailableException" => Self::ResourceUnavailable,
            "TextSizeLimitExceededException" => Self::TextSizeLimitExceeded,
            "TooManyRequestsException" => Self::TooManyRequests,
            "TooManyTagKeysException" => Self::TooManyTagKeys,
            "TooManyTagsException" => Self::TooManyTags,
            "UnsupportedLanguageException" => Self::UnsupportedLanguage,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Exception name as it appears on the wire
    pub fn code(&self) -> &str {
        match self {
            Self::BatchSizeLimitExceeded => "BatchSizeLimitExceededException",
            Self::ConcurrentModification => "ConcurrentModificationException",
            Self::InternalServer => "InternalServerException",
            Self::InvalidFilter => "InvalidFilterException",
            Self::InvalidRequest => "InvalidRequestException",
            Self::JobNotFound => "JobNotFoundException",
            Self::KmsKeyValidation => "KmsKeyValidationException",
            Self::ResourceInUse => "ResourceInUseException",
            Self::ResourceLimitExceeded => "ResourceLimitExceededException",
            Self::ResourceNotFound => "ResourceNotFoundException",
            Self::ResourceUnavailable => "ResourceUnavailableException",
            Self::TextSizeLimitExceeded => "TextSizeLimitExceededException",
            Self::TooManyRequests => "TooManyRequestsException",
            Self::TooManyTagKeys => "TooManyTagKeysException",
            Self::TooManyTags => "TooManyTagsException",
            Self::UnsupportedLanguage => "UnsupportedLanguageException",
            Self::Unknown(code) => code,
        }
    }
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An error reported by the service in a non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    pub kind: ServiceErrorKind,
    pub message: Option<String>,
    /// Sub-reason carried by `InvalidRequestException`
    pub reason: Option<String>,
    pub status: u16,
}

impl ServiceError {
    /// Check if the call may succeed when repeated unchanged
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            ServiceErrorKind::TooManyRequests
                | ServiceErrorKind::InternalServer
                | ServiceErrorKind::ResourceUnavailable
        )
    }

    pub fn is_throttling(&self) -> bool {
        self.kind == ServiceErrorKind::TooManyRequests
    }

    /// Check if the request itself has to change before it can succeed
    pub fn is_client_error(&self) -> bool {
        !self.is_retryable() && !matches!(self.kind, ServiceErrorKind::Unknown(_))
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HTTP {})", self.kind, self.status)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(reason) = &self.reason {
            write!(f, " [{reason}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for ServiceError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_error(kind: ServiceErrorKind) -> ServiceError {
        ServiceError {
            kind,
            message: None,
            reason: None,
            status: 400,
        }
    }

    #[test]
    fn test_error_retryable() {
        let throttled = ComprehendError::Service(service_error(ServiceErrorKind::TooManyRequests));
        assert!(throttled.is_retryable());

        let invalid = ComprehendError::Service(service_error(ServiceErrorKind::InvalidRequest));
        assert!(!invalid.is_retryable());

        let config = ComprehendError::Config("region must not be empty".to_string());
        assert!(!config.is_retryable());
    }

    #[test]
    fn test_client_error_classification() {
        assert!(service_error(ServiceErrorKind::TextSizeLimitExceeded).is_client_error());
        assert!(!service_error(ServiceErrorKind::InternalServer).is_client_error());
        assert!(!service_error(ServiceErrorKind::Unknown("Odd".to_string())).is_client_error());
        assert!(service_error(ServiceErrorKind::TooManyRequests).is_throttling());
    }

    #[test]
    fn test_kind_codes_round_trip() {
        for code in [
            "InvalidRequestException",
            "ResourceNotFoundException",
            "UnsupportedLanguageException",
            "SomethingNewException",
        ] {
            assert_eq!(ServiceErrorKind::from_code(code).code(), code);
        }
    }

    #[test]
    fn test_service_error_display() {
        let err = ServiceError {
            kind: ServiceErrorKind::InvalidRequest,
            message: Some("Text is empty".to_string()),
            reason: Some("INVALID_DOCUMENT".to_string()),
            status: 400,
        };
        assert_eq!(
            err.to_string(),
            "InvalidRequestException (HTTP 400): Text is empty [INVALID_DOCUMENT]"
        );
    }
}
