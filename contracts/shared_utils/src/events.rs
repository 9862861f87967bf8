//! Event emission patterns and utilities

use soroban_sdk::{symbol_short, Address, Env, Symbol, Topics};

/// Event emission helper functions
pub struct Events;

impl Events {
    /// Emit a simple event with topic and data
    pub fn emit<T>(e: &Env, topic: Symbol, data: T)
    where
        T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        e.events().publish((topic,), data);
    }

    /// Emit an event with multiple topics
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `topics` - Tuple of topics (must implement Topics)
    /// * `data` - The event data
    pub fn emit_with_topics<T, U>(e: &Env, topics: T, data: U)
    where
        T: Topics,
        U: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        e.events().publish(topics, data);
    }

    /// Emit a per-asset event: topics `(name, asset_id)`.
    pub fn emit_for_asset<T>(e: &Env, name: Symbol, asset_id: u32, data: T)
    where
        T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        Self::emit_with_topics(e, (name, asset_id), data);
    }

    /// Emit a share transfer between holders of one asset
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `asset_id` - The pool whose shares moved
    /// * `from` - The sender address
    /// * `to` - The recipient address
    /// * `shares` - The number of shares moved
    pub fn emit_transfer(e: &Env, asset_id: u32, from: &Address, to: &Address, shares: i128) {
        Self::emit_with_topics(
            e,
            (symbol_short!("Transfer"), asset_id, from.clone(), to.clone()),
            (shares, e.ledger().timestamp()),
        );
    }

    /// Emit a controller handover
    pub fn emit_admin_changed(e: &Env, old_admin: &Address, new_admin: &Address) {
        Self::emit_with_topics(
            e,
            (symbol_short!("AdminSet"),),
            (old_admin.clone(), new_admin.clone()),
        );
    }
}
