//! Storage layout and typed accessors for the ledger.
//!
//! Instance storage: config, asset id index, per-asset locks.
//! Persistent storage: pools, strategy lists, token lookups, share balances.

use crate::adapter::StrategyInfo;
use crate::error::LedgerError;
use crate::{LedgerConfig, Pool};
use soroban_sdk::{contracttype, Address, Env, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    AssetIds,             // Vec<u32> of registered ids, compacted by swap-with-last
    Pool(u32),
    AssetOf(Address),     // token -> asset id
    Strategies(u32),      // Vec<StrategyInfo>
    Shares(Address, u32), // (holder, asset id) -> i128
    Lock(u32),
}

pub fn config(env: &Env) -> Option<LedgerConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &LedgerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn asset_ids(env: &Env) -> Vec<u32> {
    env.storage()
        .instance()
        .get(&DataKey::AssetIds)
        .unwrap_or(Vec::new(env))
}

pub fn set_asset_ids(env: &Env, ids: &Vec<u32>) {
    env.storage().instance().set(&DataKey::AssetIds, ids);
}

pub fn has_pool(env: &Env, asset_id: u32) -> bool {
    env.storage().persistent().has(&DataKey::Pool(asset_id))
}

pub fn load_pool(env: &Env, asset_id: u32) -> Result<Pool, LedgerError> {
    env.storage()
        .persistent()
        .get(&DataKey::Pool(asset_id))
        .ok_or(LedgerError::AssetNotRegistered)
}

pub fn save_pool(env: &Env, pool: &Pool) {
    env.storage()
        .persistent()
        .set(&DataKey::Pool(pool.asset_id), pool);
}

pub fn remove_pool(env: &Env, pool: &Pool) {
    env.storage().persistent().remove(&DataKey::Pool(pool.asset_id));
    env.storage().persistent().remove(&DataKey::AssetOf(pool.token.clone()));
    env.storage()
        .persistent()
        .remove(&DataKey::Strategies(pool.asset_id));
}

pub fn asset_of(env: &Env, token: &Address) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::AssetOf(token.clone()))
}

pub fn set_asset_of(env: &Env, token: &Address, asset_id: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::AssetOf(token.clone()), &asset_id);
}

pub fn strategies(env: &Env, asset_id: u32) -> Vec<StrategyInfo> {
    env.storage()
        .persistent()
        .get(&DataKey::Strategies(asset_id))
        .unwrap_or(Vec::new(env))
}

pub fn set_strategies(env: &Env, asset_id: u32, list: &Vec<StrategyInfo>) {
    env.storage()
        .persistent()
        .set(&DataKey::Strategies(asset_id), list);
}

pub fn shares_of(env: &Env, holder: &Address, asset_id: u32) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Shares(holder.clone(), asset_id))
        .unwrap_or(0)
}

/// Zero balances are dropped rather than stored.
pub fn set_shares(env: &Env, holder: &Address, asset_id: u32, shares: i128) {
    let key = DataKey::Shares(holder.clone(), asset_id);
    if shares == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &shares);
    }
}

/// Per-asset mutual exclusion over the span from reading live assets to the
/// last external call of an operation.
pub struct PoolLock;

impl PoolLock {
    pub fn acquire(env: &Env, asset_id: u32) -> Result<(), LedgerError> {
        let key = DataKey::Lock(asset_id);
        if env.storage().instance().has(&key) {
            return Err(LedgerError::ReentrancyDetected);
        }
        env.storage().instance().set(&key, &true);
        Ok(())
    }

    pub fn release(env: &Env, asset_id: u32) {
        env.storage().instance().remove(&DataKey::Lock(asset_id));
    }

    #[cfg(test)]
    pub fn is_held(env: &Env, asset_id: u32) -> bool {
        env.storage().instance().has(&DataKey::Lock(asset_id))
    }
}
