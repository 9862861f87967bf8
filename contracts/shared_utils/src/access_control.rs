//! Access control patterns and utilities

use super::storage::Storage;
use soroban_sdk::{Address, Env};

/// Outcome of checking a caller against the stored controller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AdminCheck {
    Authorized,
    NotInitialized,
    Unauthorized,
}

/// Access control helper functions
pub struct AccessControl;

impl AccessControl {
    /// Check whether `caller` is the controller, requiring its signature.
    ///
    /// The caller's auth is demanded before the identity comparison so an
    /// unsigned call never learns who the controller is.
    pub fn check_admin(e: &Env, caller: &Address) -> AdminCheck {
        caller.require_auth();
        match Storage::admin(e) {
            None => AdminCheck::NotInitialized,
            Some(admin) if admin == *caller => AdminCheck::Authorized,
            Some(_) => AdminCheck::Unauthorized,
        }
    }

    /// Hand the controller role to `new_admin`. Caller must already be checked.
    pub fn transfer_admin(e: &Env, new_admin: &Address) {
        Storage::set_admin(e, new_admin);
    }
}
