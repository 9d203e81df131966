pub mod codes;
mod error;
mod http;
mod response;

pub use error::{AuthError, Result};
pub use http::HttpResponse;
pub use response::{ErrorFormat, ServiceError};
