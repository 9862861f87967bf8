//! Error logging helpers shared by the ledger contracts

use crate::error_codes::message_for_code;
use soroban_sdk::{log, Env};

/// Error helper functions
pub struct ErrorHelper;

impl ErrorHelper {
    /// Log an error with context
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `context` - The error context
    /// * `message` - The error message
    pub fn log_error_with_context(e: &Env, context: &str, message: &str) {
        log!(e, "Error [{}]: {}", context, message);
    }

    /// Log a rejected operation by its numeric error code.
    ///
    /// Returns the code unchanged so callers can log and return in one
    /// expression.
    pub fn log_rejection(e: &Env, context: &str, code: u32) -> u32 {
        log!(e, "Rejected [{}]: code {} ({})", context, code, message_for_code(code));
        code
    }
}
