//! Emergency control utilities
use super::events::Events;
use soroban_sdk::{symbol_short, Env};

pub mod keys {
    use soroban_sdk::{symbol_short, Symbol};
    pub const EMERGENCY_MODE: Symbol = symbol_short!("EMG_MODE");
}

pub struct EmergencyControl;

impl EmergencyControl {
    /// Check if the contract is in emergency mode
    pub fn is_emergency_mode(e: &Env) -> bool {
        e.storage()
            .instance()
            .get::<_, bool>(&keys::EMERGENCY_MODE)
            .unwrap_or(false)
    }

    /// Set emergency mode status
    pub fn set_emergency_mode(e: &Env, enabled: bool) {
        e.storage().instance().set(&keys::EMERGENCY_MODE, &enabled);

        let event_type = if enabled {
            symbol_short!("EMG_ON")
        } else {
            symbol_short!("EMG_OFF")
        };
        Events::emit(
            e,
            symbol_short!("EmgMode"),
            (event_type, e.ledger().timestamp()),
        );
    }
}
