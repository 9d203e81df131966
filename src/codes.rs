use std::collections::HashMap;
use std::sync::LazyLock;

/// Generic failure code, used when nothing more specific is known.
pub const UNKNOWN_ERROR: &str = "unknown_error";

pub const INVALID_CREDENTIAL_TYPE: &str = "invalid_credential_type";
pub const IDENTITY_PROTOCOL_LOGIN_URL_NULL: &str = "identity_protocol_login_url_null";
pub const IDENTITY_PROTOCOL_MISMATCH: &str = "identity_protocol_mismatch";
pub const EMAIL_ADDRESS_SUFFIX_MISMATCH: &str = "email_address_suffix_mismatch";
pub const IDENTITY_PROVIDER_REQUEST_FAILED: &str = "identity_provider_request_failed";
pub const STS_TOKEN_REQUEST_FAILED: &str = "sts_token_request_failed";
pub const ENCODED_TOKEN_TOO_LONG: &str = "encoded_token_too_long";
pub const STS_METADATA_REQUEST_FAILED: &str = "sts_metadata_request_failed";
pub const AUTHORITY_NOT_IN_VALID_LIST: &str = "authority_not_in_valid_list";
pub const UNKNOWN_USER_TYPE: &str = "unknown_user_type";
pub const UNKNOWN_USER: &str = "unknown_user";
pub const USER_REALM_DISCOVERY_FAILED: &str = "user_realm_discovery_failed";
pub const ACCESSING_WS_METADATA_EXCHANGE_FAILED: &str = "accessing_ws_metadata_exchange_failed";
pub const PARSING_WS_METADATA_EXCHANGE_FAILED: &str = "parsing_ws_metadata_exchange_failed";
pub const WS_TRUST_ENDPOINT_NOT_FOUND: &str = "wstrust_endpoint_not_found";
pub const PARSING_WS_TRUST_RESPONSE_FAILED: &str = "parsing_wstrust_response_failed";
pub const AUTHENTICATION_CANCELED: &str = "authentication_canceled";
pub const NETWORK_NOT_AVAILABLE: &str = "network_not_available";
pub const AUTHENTICATION_UI_FAILED: &str = "authentication_ui_failed";
pub const USER_INTERACTION_REQUIRED: &str = "user_interaction_required";
pub const MISSING_FEDERATION_METADATA_URL: &str = "missing_federation_metadata_url";
pub const INTEGRATED_AUTH_FAILED: &str = "integrated_authentication_failed";
pub const UNAUTHORIZED_RESPONSE_EXPECTED: &str = "unauthorized_response_expected";
pub const MULTIPLE_TOKENS_MATCHED: &str = "multiple_matching_tokens_detected";
pub const PASSWORD_REQUIRED_FOR_MANAGED_USER: &str = "password_required_for_managed_user";
pub const GET_USER_NAME_FAILED: &str = "get_user_name_failed";
pub const INTERACTION_REQUIRED: &str = "interaction_required";

/// Text used for any code without a registry entry.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error.";

/// Known codes and their canned messages, in declaration order.
const KNOWN_ERRORS: &[(&str, &str)] = &[
    (INVALID_CREDENTIAL_TYPE, "Invalid credential type."),
    (
        IDENTITY_PROTOCOL_LOGIN_URL_NULL,
        "The login URL of the identity provider cannot be empty.",
    ),
    (
        IDENTITY_PROTOCOL_MISMATCH,
        "No identity provider with a matching protocol was found.",
    ),
    (
        EMAIL_ADDRESS_SUFFIX_MISMATCH,
        "No identity provider email address suffix matches the provided address.",
    ),
    (
        IDENTITY_PROVIDER_REQUEST_FAILED,
        "Token request to the identity provider failed. Check the cause for more details.",
    ),
    (
        STS_TOKEN_REQUEST_FAILED,
        "Token request to the security token service failed. Check the cause for more details.",
    ),
    (
        ENCODED_TOKEN_TOO_LONG,
        "Encoded token size is beyond the upper limit.",
    ),
    (
        STS_METADATA_REQUEST_FAILED,
        "Metadata request to the security token service failed. Check the cause for more details.",
    ),
    (
        AUTHORITY_NOT_IN_VALID_LIST,
        "The authority is not in the list of valid addresses.",
    ),
    (UNKNOWN_USER_TYPE, "Unknown user type."),
    (UNKNOWN_USER, "Could not identify the logged in user."),
    (USER_REALM_DISCOVERY_FAILED, "User realm discovery failed."),
    (
        ACCESSING_WS_METADATA_EXCHANGE_FAILED,
        "Accessing the WS metadata exchange failed.",
    ),
    (
        PARSING_WS_METADATA_EXCHANGE_FAILED,
        "Parsing the WS metadata exchange failed.",
    ),
    (
        WS_TRUST_ENDPOINT_NOT_FOUND,
        "WS-Trust endpoint not found in the metadata document.",
    ),
    (
        PARSING_WS_TRUST_RESPONSE_FAILED,
        "Parsing the WS-Trust response failed.",
    ),
    (AUTHENTICATION_CANCELED, "User canceled authentication."),
    (
        NETWORK_NOT_AVAILABLE,
        "The network is down so authentication cannot proceed.",
    ),
    (
        AUTHENTICATION_UI_FAILED,
        "The browser based authentication dialog failed to complete.",
    ),
    (
        USER_INTERACTION_REQUIRED,
        "User interaction is required but the request did not allow prompting, \
         or a silent web authentication did not complete in time.",
    ),
    (
        MISSING_FEDERATION_METADATA_URL,
        "Federation metadata URL is missing for a federated user. This user type is unsupported.",
    ),
    (
        INTEGRATED_AUTH_FAILED,
        "Integrated authentication failed. You may try an alternative authentication method.",
    ),
    (
        UNAUTHORIZED_RESPONSE_EXPECTED,
        "An unauthorized (401) HTTP status code was expected in the response.",
    ),
    (
        MULTIPLE_TOKENS_MATCHED,
        "The cache contains multiple tokens satisfying the requirements. \
         Acquire the token again with more specific arguments.",
    ),
    (
        PASSWORD_REQUIRED_FOR_MANAGED_USER,
        "A password is required for a managed user.",
    ),
    (GET_USER_NAME_FAILED, "Failed to get the user name."),
    (
        INTERACTION_REQUIRED,
        "The request requires user interaction to complete.",
    ),
];

static REGISTRY: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| KNOWN_ERRORS.iter().copied().collect());

/// Look up the canned message for a code. Exact, case-sensitive match.
pub fn default_message(code: &str) -> Option<&'static str> {
    REGISTRY.get(code).copied()
}

pub fn is_known(code: &str) -> bool {
    REGISTRY.contains_key(code)
}

/// Every registered code, in declaration order.
pub fn known_codes() -> impl Iterator<Item = &'static str> {
    KNOWN_ERRORS.iter().map(|(code, _)| *code)
}

/// Build the derived message `"{code}: {text}"`, falling back to the
/// generic text for unregistered codes.
pub fn describe(code: &str) -> String {
    let text = default_message(code).unwrap_or(UNKNOWN_ERROR_MESSAGE);
    format!("{code}: {text}")
}
