//! HTTP client and form-state controller for the churn prediction service.
//!
//! [`api::PredictionApi`] wraps the service's REST endpoint via
//! [`reqwest`]; [`controller::PredictionController`] owns the editable
//! draft, the request lifecycle (idle -> loading -> success/error), and
//! the last successful result -- exactly the state a form shell needs
//! to render.  The binary entrypoint lives in `main.rs`.

pub mod api;
pub mod config;
pub mod controller;
