//! Per-asset strategy registry.
//!
//! Adapters are kept in an ordered list with one active index that receives new
//! deposits. Removal is swap-with-last, so indices are only meaningful at call
//! time: callers must re-read `get_strategies` after any removal instead of
//! caching positions.

use crate::adapter::{StrategyAdapterClient, StrategyInfo};
use crate::error::LedgerError;
use crate::storage;
use crate::Pool;
use shared_utils::Validation;
use soroban_sdk::{Address, Env};

pub struct StrategyRegistry;

impl StrategyRegistry {
    /// Append an adapter. The first adapter of an empty registry becomes active.
    ///
    /// # Returns
    /// The index the adapter was stored at
    pub fn add(env: &Env, pool: &mut Pool, info: StrategyInfo) -> Result<u32, LedgerError> {
        let ledger = env.current_contract_address();
        Validation::require_not_any(&info.adapter, &[&ledger, &pool.token], LedgerError::ZeroAdapter)?;

        let mut list = storage::strategies(env, pool.asset_id);
        if list.iter().any(|existing| existing.adapter == info.adapter) {
            return Err(LedgerError::AdapterAlreadyAdded);
        }

        let index = list.len();
        list.push_back(info);
        storage::set_strategies(env, pool.asset_id, &list);

        if pool.active_index.is_none() {
            pool.active_index = Some(index);
        }
        Ok(index)
    }

    /// Fail unless the adapter at `index` reports no managed assets.
    ///
    /// An adapter that cannot answer is reported as `InvalidStrategy`; the
    /// controller detaches it with a forced removal instead.
    pub fn ensure_empty(env: &Env, pool: &Pool, index: u32) -> Result<(), LedgerError> {
        let list = storage::strategies(env, pool.asset_id);
        Validation::require_index(index, list.len(), LedgerError::IndexOutOfBounds)?;

        let adapter = list.get_unchecked(index).adapter;
        match StrategyAdapterClient::new(env, &adapter).try_total_assets() {
            Ok(Ok(0)) => Ok(()),
            Ok(Ok(_)) => Err(LedgerError::StrategyNotEmpty),
            _ => Err(LedgerError::InvalidStrategy),
        }
    }

    /// Remove the adapter at `index` by moving the last adapter into its slot.
    /// The adapter itself is never called.
    ///
    /// The active index becomes `None` when the registry empties and resets to
    /// 0 when it falls outside the shortened list.
    pub fn remove(env: &Env, pool: &mut Pool, index: u32) -> Result<StrategyInfo, LedgerError> {
        let mut list = storage::strategies(env, pool.asset_id);
        Validation::require_index(index, list.len(), LedgerError::IndexOutOfBounds)?;

        let removed = list.get_unchecked(index);

        let last = list.len() - 1;
        if index != last {
            let moved = list.get_unchecked(last);
            list.set(index, moved);
        }
        list.pop_back();
        storage::set_strategies(env, pool.asset_id, &list);

        let new_len = list.len();
        pool.active_index = match pool.active_index {
            _ if new_len == 0 => None,
            Some(active) if active >= new_len => Some(0),
            other => other,
        };
        Ok(removed)
    }

    pub fn set_active(env: &Env, pool: &mut Pool, index: u32) -> Result<(), LedgerError> {
        let list = storage::strategies(env, pool.asset_id);
        Validation::require_index(index, list.len(), LedgerError::IndexOutOfBounds)?;
        pool.active_index = Some(index);
        Ok(())
    }

    /// Adapter at `index`, if any.
    pub fn resolve(env: &Env, asset_id: u32, index: u32) -> Option<Address> {
        storage::strategies(env, asset_id)
            .get(index)
            .map(|info| info.adapter)
    }

    /// Adapter receiving new deposits. `None` means operate on idle balance only.
    pub fn resolve_active(env: &Env, pool: &Pool) -> Option<Address> {
        pool.active_index
            .and_then(|index| Self::resolve(env, pool.asset_id, index))
    }
}
