use reqwest::StatusCode;

/// Errors that can occur while delivering the contact form.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The request never produced a response (DNS, refused connection, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned {status}: {body}")]
    Status {
        /// The HTTP status received.
        status: StatusCode,
        /// The response body, for diagnostics.
        body: String,
    },

    /// The endpoint answered successfully but the body was not JSON.
    #[error("invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),
}
