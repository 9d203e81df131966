use arctic_auth_error::HttpResponse;

/// Build a response carrying an OAuth2 error JSON body.
pub fn oauth_error_response(status: u16, body: serde_json::Value) -> HttpResponse {
    HttpResponse::new(status, serde_json::to_vec(&body).unwrap())
}

/// Low-level failure used as a cause in tests.
#[derive(Debug, thiserror::Error)]
#[error("dns lookup failed for {host}")]
pub struct DnsFailure {
    pub host: String,
}
