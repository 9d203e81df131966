use crate::AuthError;
use crate::http::HttpResponse;

/// Shape of an error body returned by an identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorFormat {
    /// OAuth2 error JSON with a string `error` field (RFC 6749 Section 5.2).
    Json,
    /// Anything else: HTML error pages, plain text, unrelated JSON.
    Other,
}

impl std::fmt::Display for ErrorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorFormat::Json => f.write_str("OAuth2 JSON"),
            ErrorFormat::Other => f.write_str("unrecognized"),
        }
    }
}

/// Lower-level failure reported by a remote service, attached as the
/// cause of the [`AuthError`] built from it.
#[derive(Debug, Clone, thiserror::Error)]
#[error("service responded with HTTP {status} ({format} body)")]
pub struct ServiceError {
    pub status: u16,
    pub format: ErrorFormat,
    pub code: Option<String>,
    pub description: Option<String>,
    pub uri: Option<String>,
    pub body: String,
}

impl ServiceError {
    fn parse(response: &HttpResponse) -> Self {
        let body = response.body_text();
        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(json) if json.get("error").and_then(|e| e.as_str()).is_some() => {
                let field = |name: &str| json.get(name).and_then(|v| v.as_str()).map(String::from);
                Self {
                    status: response.status,
                    format: ErrorFormat::Json,
                    code: field("error"),
                    description: field("error_description"),
                    uri: field("error_uri"),
                    body,
                }
            }
            _ => Self {
                status: response.status,
                format: ErrorFormat::Other,
                code: None,
                description: None,
                uri: None,
                body,
            },
        }
    }
}

impl AuthError {
    /// Interpret an error response from an identity provider.
    ///
    /// - OAuth2 error JSON: the `error` field becomes the code and
    ///   `error_description`, when present and not blank, the message.
    /// - Any other body: `fallback_code` is used and the message comes
    ///   from the registry.
    ///
    /// The parsed [`ServiceError`] is always attached as the cause.
    pub fn from_service_response(fallback_code: &str, response: &HttpResponse) -> Self {
        let service_error = ServiceError::parse(response);
        tracing::debug!(
            status = service_error.status,
            format = ?service_error.format,
            code = service_error.code.as_deref(),
            "interpreting service error response"
        );

        let code = service_error
            .code
            .clone()
            .unwrap_or_else(|| fallback_code.to_string());
        let description = service_error
            .description
            .clone()
            .filter(|d| !d.trim().is_empty());
        match description {
            Some(description) => {
                AuthError::with_message_and_cause(code, description, service_error)
            }
            None => AuthError::with_cause(code, service_error),
        }
    }
}
