use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The error type for landscape operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    code: Option<ApiErrorCode>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration error (missing credentials, invalid endpoint)
    ConfigInvalid,

    /// Request cannot be built (missing action, missing required fields, etc.)
    RequestInvalid,

    /// The service rejected the request with a structured error
    Api,

    /// The service failed with a 5xx status or the request never reached it
    Transport,

    /// The service answered with a body we could not decode
    Protocol,

    /// Unexpected errors (formatting, encoding, etc.)
    Unexpected,
}

/// Error codes reported by the Landscape API in the `error` field of a
/// failed response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApiErrorCode {
    /// One or more access groups do not exist.
    UnknownAccessGroups,
    /// The role does not exist.
    UnknownRole,
    /// The role can not be modified.
    ReadOnlyRole,
    /// One or more permissions are not valid.
    InvalidPermissions,
    /// One or more persons do not exist.
    UnknownPersons,
    /// An access group with the same name already exists.
    DuplicateAccessGroup,
    /// The access group name or parent is not valid.
    InvalidAccessGroup,
    /// A role with the same name already exists.
    DuplicateRole,
    /// The role name is not valid.
    InvalidRoleName,
    /// A code this client does not know about, kept verbatim.
    Unknown(String),
}

impl ApiErrorCode {
    /// The code as sent by the server.
    pub fn as_str(&self) -> &str {
        match self {
            ApiErrorCode::UnknownAccessGroups => "UnknownAccessGroups",
            ApiErrorCode::UnknownRole => "UnknownRole",
            ApiErrorCode::ReadOnlyRole => "ReadOnlyRole",
            ApiErrorCode::InvalidPermissions => "InvalidPermissions",
            ApiErrorCode::UnknownPersons => "UnknownPersons",
            ApiErrorCode::DuplicateAccessGroup => "DuplicateAccessGroup",
            ApiErrorCode::InvalidAccessGroup => "InvalidAccessGroup",
            ApiErrorCode::DuplicateRole => "DuplicateRole",
            ApiErrorCode::InvalidRoleName => "InvalidRoleName",
            ApiErrorCode::Unknown(code) => code,
        }
    }

    /// Check if this code is one the client knows about.
    pub fn is_known(&self) -> bool {
        !matches!(self, ApiErrorCode::Unknown(_))
    }
}

impl From<&str> for ApiErrorCode {
    fn from(s: &str) -> Self {
        match s {
            "UnknownAccessGroups" => ApiErrorCode::UnknownAccessGroups,
            "UnknownRole" => ApiErrorCode::UnknownRole,
            "ReadOnlyRole" => ApiErrorCode::ReadOnlyRole,
            "InvalidPermissions" => ApiErrorCode::InvalidPermissions,
            "UnknownPersons" => ApiErrorCode::UnknownPersons,
            "DuplicateAccessGroup" => ApiErrorCode::DuplicateAccessGroup,
            "InvalidAccessGroup" => ApiErrorCode::InvalidAccessGroup,
            "DuplicateRole" => ApiErrorCode::DuplicateRole,
            "InvalidRoleName" => ApiErrorCode::InvalidRoleName,
            v => ApiErrorCode::Unknown(v.to_string()),
        }
    }
}

impl FromStr for ApiErrorCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ApiErrorCode::from(s))
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the API error code, only set for [`ErrorKind::Api`].
    pub fn code(&self) -> Option<&ApiErrorCode> {
        self.code.as_ref()
    }

    /// Check if the service reported this error.
    pub fn is_api_error(&self) -> bool {
        self.kind == ErrorKind::Api
    }
}

// Convenience constructors
impl Error {
    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create an API error carrying the server error code
    pub fn api(code: ApiErrorCode, message: impl Into<String>) -> Self {
        let mut err = Self::new(ErrorKind::Api, message);
        err.code = Some(code);
        err
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Create a protocol error
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Protocol, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::Api => write!(f, "api error"),
            ErrorKind::Transport => write!(f, "transport error"),
            ErrorKind::Protocol => write!(f, "protocol error"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::config_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
