use crate::codes;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure raised while acquiring a token.
///
/// `error_code` is the stable identifier to branch on; `message` is meant
/// for humans. The `Display` form appends an `ErrorCode:` line so the code
/// survives even when only the rendered text reaches a log.
#[derive(Debug, thiserror::Error)]
#[error("{message}\n\tErrorCode: {error_code}")]
pub struct AuthError {
    error_code: String,
    message: String,
    #[source]
    cause: Option<BoxError>,
}

pub type Result<T, E = AuthError> = std::result::Result<T, E>;

impl AuthError {
    /// Generic failure: `unknown_error` with the generic message.
    pub fn unknown() -> Self {
        Self {
            error_code: codes::UNKNOWN_ERROR.to_string(),
            message: codes::UNKNOWN_ERROR_MESSAGE.to_string(),
            cause: None,
        }
    }

    /// Error with a code only. The message is derived from the registry
    /// as `"{code}: {text}"`; unregistered codes get the generic text.
    pub fn new(error_code: impl Into<String>) -> Self {
        let error_code = error_code.into();
        Self {
            message: codes::describe(&error_code),
            error_code,
            cause: None,
        }
    }

    /// Error with an explicit message, used verbatim.
    pub fn with_message(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            cause: None,
        }
    }

    /// Error wrapping a lower-level failure. The message is derived as in
    /// [`AuthError::new`].
    pub fn with_cause(error_code: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self {
            cause: Some(cause.into()),
            ..Self::new(error_code)
        }
    }

    pub fn with_message_and_cause(
        error_code: impl Into<String>,
        message: impl Into<String>,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Exact comparison against a code, e.g. `err.is(codes::AUTHENTICATION_CANCELED)`.
    pub fn is(&self, error_code: &str) -> bool {
        self.error_code == error_code
    }

    /// Whether the stored code has a registry entry.
    pub fn is_known(&self) -> bool {
        codes::is_known(&self.error_code)
    }
}

impl Default for AuthError {
    fn default() -> Self {
        Self::unknown()
    }
}
