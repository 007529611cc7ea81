//! Reusable TUI widgets.

pub mod form;
pub mod status_bar;

pub use form::{Form, InputSpec, draw_form};
pub use status_bar::{StatusBarContext, SubmitIndicator, draw_status_bar, endpoint_host};
