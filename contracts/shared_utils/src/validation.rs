//! Validation utilities for common input validation patterns
//!
//! Each check takes the caller's own error value so contracts keep their
//! typed `contracterror` enums.

use soroban_sdk::Address;

/// Validation utility functions
pub struct Validation;

impl Validation {
    /// Validate that an amount is greater than zero
    pub fn require_positive<E>(amount: i128, err: E) -> Result<(), E> {
        if amount <= 0 {
            return Err(err);
        }
        Ok(())
    }

    /// Validate that `index` addresses an element of a list of length `len`
    pub fn require_index<E>(index: u32, len: u32, err: E) -> Result<(), E> {
        if index >= len {
            return Err(err);
        }
        Ok(())
    }

    /// Validate that `address` is none of `forbidden`.
    ///
    /// Soroban has no zero address; contracts use this to reject addresses
    /// that cannot play the expected role (e.g. the contract itself).
    pub fn require_not_any<E>(address: &Address, forbidden: &[&Address], err: E) -> Result<(), E> {
        if forbidden.iter().any(|f| *f == address) {
            return Err(err);
        }
        Ok(())
    }
}
