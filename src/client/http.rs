use serde_json::Value;
use tracing::{debug, info};

use super::error::SubmitError;
use crate::model::ContactForm;

/// The collection endpoint contact forms are posted to.
pub const DEFAULT_ENDPOINT: &str = "https://vernanbackend.ezlab.in/api/contact-us/";

/// Delivers a contact form and returns the parsed JSON response.
pub trait Submitter {
    /// Sends `form` once. No retries.
    fn submit(&self, form: &ContactForm) -> impl Future<Output = Result<Value, SubmitError>> + Send;
}

/// Posts the form as JSON to a fixed URL.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitter {
    /// Creates a submitter for `endpoint` using the transport's default timeouts.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Returns the URL forms are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl Submitter for HttpSubmitter {
    async fn submit(&self, form: &ContactForm) -> Result<Value, SubmitError> {
        info!(endpoint = %self.endpoint, "submitting contact form");
        let resp = self.http.post(&self.endpoint).json(form).send().await?;
        handle_response(resp).await
    }
}

async fn handle_response(resp: reqwest::Response) -> Result<Value, SubmitError> {
    let status = resp.status();
    debug!(%status, "contact endpoint responded");
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(SubmitError::Status { status, body });
    }
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
