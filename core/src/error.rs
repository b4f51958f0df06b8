//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` keeps a dedicated variant so hosts can tell "no such todo" from
//! other statuses, but every variant renders through `Display` into the one
//! message a view stores when it fails. Views never branch on the variant.

/// Errors returned by `TodoClient` parse methods and `Transport`s.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("HTTP error! Status: 404")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP error! Status: {status}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("transport failed: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_name_the_code() {
        assert_eq!(ApiError::NotFound.to_string(), "HTTP error! Status: 404");
        let err = ApiError::HttpError {
            status: 503,
            body: "down".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error! Status: 503");
    }

    #[test]
    fn transport_errors_keep_the_cause() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "transport failed: connection refused");
    }
}
