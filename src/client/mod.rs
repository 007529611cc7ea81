//! Delivery of validated contact forms to the remote collection endpoint.
//!
//! [`Submitter`] is the seam the controller and TUI talk to;
//! [`HttpSubmitter`] is the production implementation backed by `reqwest`.

mod error;
mod http;

pub use error::SubmitError;
pub use http::{DEFAULT_ENDPOINT, HttpSubmitter, Submitter};
