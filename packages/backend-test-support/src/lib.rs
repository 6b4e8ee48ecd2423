//! Backend test support utilities
//!
//! Shared logging initialization and Problem Details assertions for the
//! tombola backend test binaries.

pub mod logging;
pub mod problem_details;
