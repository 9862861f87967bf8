#![no_std]

//! Shared utility library for the yield ledger contracts
//!
//! This library provides common functions, helpers, and patterns used across
//! the ledger and its strategy adapters including:
//! - Math utilities (checked arithmetic, mul-div with rounding, basis points)
//! - Validation utilities
//! - Storage helpers
//! - Error helpers and the shared error code catalogue
//! - Access control patterns
//! - Event emission patterns
//! - Emergency mode control

pub mod access_control;
pub mod emergency;
pub mod error_codes;
pub mod errors;
pub mod events;
pub mod math;
pub mod storage;
pub mod validation;


// Re-export commonly used items
pub use access_control::*;
pub use emergency::EmergencyControl;
pub use error_codes::*;
pub use errors::*;
pub use events::*;
pub use math::*;
pub use storage::Storage;
pub use validation::*;
