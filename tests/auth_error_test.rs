mod common;

use std::error::Error as _;

use arctic_auth_error::{AuthError, ErrorFormat, ServiceError, codes};
use common::fixtures::{DnsFailure, oauth_error_response};

const SUFFIX_PREFIX: &str = "\n\tErrorCode: ";

#[test]
fn every_registered_code_derives_prefixed_message() {
    for code in codes::known_codes() {
        let err = AuthError::new(code);
        let text = codes::default_message(code).unwrap();
        assert_eq!(err.error_code(), code);
        assert_eq!(err.message(), format!("{code}: {text}"));
    }
}

#[test]
fn explicit_message_wins_for_every_registered_code() {
    for code in codes::known_codes() {
        let err = AuthError::with_message(code, "custom override");
        assert_eq!(err.message(), "custom override");
    }
}

#[test]
fn display_always_ends_with_stored_code() {
    let errors = [
        AuthError::unknown(),
        AuthError::new(codes::AUTHENTICATION_CANCELED),
        AuthError::new("totally_unknown_code"),
        AuthError::with_message(codes::NETWORK_NOT_AVAILABLE, "custom override"),
        AuthError::with_cause(codes::NETWORK_NOT_AVAILABLE, DnsFailure {
            host: "login.example.com".into(),
        }),
        AuthError::with_message_and_cause("", "empty code", "inner"),
    ];

    for err in &errors {
        let rendered = err.to_string();
        let expected_suffix = format!("{SUFFIX_PREFIX}{}", err.error_code());
        assert!(
            rendered.ends_with(&expected_suffix),
            "{rendered:?} should end with {expected_suffix:?}"
        );
        assert!(!err.message().is_empty());
    }
}

#[test]
fn cause_is_retained_unchanged() {
    let err = AuthError::with_cause(
        codes::IDENTITY_PROVIDER_REQUEST_FAILED,
        DnsFailure {
            host: "login.example.com".into(),
        },
    );

    let dns = err
        .source()
        .and_then(|s| s.downcast_ref::<DnsFailure>())
        .expect("cause should be DnsFailure");
    assert_eq!(dns.host, "login.example.com");
}

#[test]
fn cause_chain_walks_through_nested_auth_errors() {
    let inner = AuthError::new(codes::NETWORK_NOT_AVAILABLE);
    let outer = AuthError::with_cause(codes::STS_TOKEN_REQUEST_FAILED, inner);

    let inner = outer
        .source()
        .and_then(|s| s.downcast_ref::<AuthError>())
        .unwrap();
    assert!(inner.is(codes::NETWORK_NOT_AVAILABLE));
    assert!(inner.source().is_none());
}

#[test]
fn propagates_with_question_mark() {
    fn acquire(cancel: bool) -> arctic_auth_error::Result<&'static str> {
        if cancel {
            return Err(AuthError::new(codes::AUTHENTICATION_CANCELED));
        }
        Ok("token")
    }

    fn caller() -> Result<&'static str, Box<dyn std::error::Error + Send + Sync>> {
        Ok(acquire(true)?)
    }

    let err = caller().unwrap_err();
    let auth = err.downcast_ref::<AuthError>().unwrap();
    assert!(auth.is(codes::AUTHENTICATION_CANCELED));
}

#[test]
fn service_response_flows_into_error() {
    let response = oauth_error_response(
        400,
        serde_json::json!({
            "error": "multiple_matching_tokens_detected",
        }),
    );
    let err = AuthError::from_service_response(codes::STS_TOKEN_REQUEST_FAILED, &response);

    assert!(err.is_known());
    assert_eq!(err.message(), codes::describe(codes::MULTIPLE_TOKENS_MATCHED));
    let service = err.cause().unwrap().downcast_ref::<ServiceError>().unwrap();
    assert_eq!(service.format, ErrorFormat::Json);
    assert!(err.to_string().ends_with("\n\tErrorCode: multiple_matching_tokens_detected"));
}

#[test]
fn errors_cross_threads() {
    let err = AuthError::with_cause(codes::NETWORK_NOT_AVAILABLE, "offline");
    let handle = std::thread::spawn(move || err.error_code().to_string());
    assert_eq!(handle.join().unwrap(), "network_not_available");
}
