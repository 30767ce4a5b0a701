//! Core domain types for the churn prediction client.
//!
//! Defines the customer attribute schema submitted to the prediction
//! service ([`customer`]) and the typed prediction result it returns,
//! plus the presentation helpers a form shell needs to render one
//! ([`prediction`]).  No I/O lives here.

pub mod customer;
pub mod prediction;
