//! Numerical methods.
//!
//! - `finite_difference`: Recursive forward-difference derivative estimation

pub mod finite_difference;
