#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Terminal landing page with a validated contact form.

pub mod client;
pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod tui;
