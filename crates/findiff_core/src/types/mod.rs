//! Shared types.
//!
//! This module provides:
//! - `error`: Structured error types for estimator configuration
//!
//! # Re-exports
//!
//! - [`EstimatorError`] from `error`

pub mod error;

pub use error::EstimatorError;
