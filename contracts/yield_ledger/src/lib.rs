// Multi-asset Yield Ledger Contract
#![no_std]

//! Pools deposits per asset, issues proportional shares, and routes pooled
//! capital to strategy adapters chosen by a single controller address.
//!
//! Every pool is priced against its *live assets*: the ledger's idle balance of
//! the pool token plus what each registered adapter reports. `principal` is the
//! accounting base, advanced by deposits and by `harvest`; it is never moved by
//! passive balance growth.

mod adapter;
mod conversion;
mod error;
mod registry;
mod storage;

pub use adapter::{AdapterKind, StrategyAdapter, StrategyAdapterClient, StrategyInfo};
pub use conversion::ConversionMath;
pub use error::LedgerError;

use error::reject;
use registry::StrategyRegistry;
use shared_utils::{
    AccessControl, AdminCheck, EmergencyControl, ErrorHelper, Events, Rounding, SafeMath, Storage,
    Validation,
};
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, token, Address, Env, Vec,
};
use storage::PoolLock;

/// Default virtual share padding.
pub const DEFAULT_VIRTUAL_SHARES: i128 = 1;
/// Default virtual asset padding.
pub const DEFAULT_VIRTUAL_ASSETS: i128 = 1;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    pub virtual_shares: i128,
    pub virtual_assets: i128,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            virtual_shares: DEFAULT_VIRTUAL_SHARES,
            virtual_assets: DEFAULT_VIRTUAL_ASSETS,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    pub asset_id: u32,
    pub token: Address,
    pub principal: i128,
    pub share_supply: i128,
    pub active_index: Option<u32>,
    pub created_at: u64,
    pub updated_at: u64,
}

// ============================================================================
// MAIN CONTRACT
// ============================================================================

#[contract]
pub struct YieldLedgerContract;

#[contractimpl]
impl YieldLedgerContract {
    // ========================================================================
    // INITIALIZATION & CONFIGURATION
    // ========================================================================

    pub fn initialize(env: Env, admin: Address, config: LedgerConfig) -> Result<(), LedgerError> {
        if Storage::is_initialized(&env) {
            return Err(LedgerError::AlreadyInitialized);
        }
        admin.require_auth();

        if config.virtual_shares <= 0 || config.virtual_assets <= 0 {
            return Err(reject(&env, LedgerError::InvalidConfig, "initialize"));
        }

        Storage::set_admin(&env, &admin);
        Storage::set_initialized(&env);
        storage::set_config(&env, &config);
        storage::set_asset_ids(&env, &Vec::new(&env));
        Storage::bump_instance(&env);

        env.events()
            .publish((symbol_short!("init"), symbol_short!("ledger")), admin);

        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, LedgerError> {
        Storage::admin(&env).ok_or(LedgerError::NotInitialized)
    }

    /// Hand the controller role to `new_admin`.
    pub fn set_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), LedgerError> {
        Self::require_admin(&env, &admin, "set_admin")?;
        AccessControl::transfer_admin(&env, &new_admin);
        Events::emit_admin_changed(&env, &admin, &new_admin);
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<LedgerConfig, LedgerError> {
        storage::config(&env).ok_or(LedgerError::NotInitialized)
    }

    /// Toggle emergency mode. While on, deposits are refused; withdrawals,
    /// harvest and rebalance stay available so capital can be recovered.
    pub fn set_emergency_mode(env: Env, admin: Address, enabled: bool) -> Result<(), LedgerError> {
        Self::require_admin(&env, &admin, "set_emergency_mode")?;
        EmergencyControl::set_emergency_mode(&env, enabled);
        Ok(())
    }

    pub fn is_emergency_mode(env: Env) -> bool {
        EmergencyControl::is_emergency_mode(&env)
    }

    // ========================================================================
    // ASSET LIFECYCLE
    // ========================================================================

    /// Register a pool for `token` under the next sequential id.
    ///
    /// The next id is the number of currently registered assets. Because
    /// removal compacts the id list, a freed id can be handed out again, and
    /// the computed id may still be held by a live pool, in which case the
    /// registration fails with `AlreadyRegistered`.
    pub fn register_asset(env: Env, admin: Address, token: Address) -> Result<u32, LedgerError> {
        Self::require_admin(&env, &admin, "register_asset")?;

        if storage::asset_of(&env, &token).is_some() {
            return Err(reject(&env, LedgerError::AlreadyRegistered, "register_asset"));
        }

        let mut ids = storage::asset_ids(&env);
        let asset_id = ids.len();
        if storage::has_pool(&env, asset_id) {
            return Err(reject(&env, LedgerError::AlreadyRegistered, "register_asset"));
        }

        let now = env.ledger().timestamp();
        let pool = Pool {
            asset_id,
            token: token.clone(),
            principal: 0,
            share_supply: 0,
            active_index: None,
            created_at: now,
            updated_at: now,
        };
        storage::save_pool(&env, &pool);
        storage::set_asset_of(&env, &token, asset_id);
        ids.push_back(asset_id);
        storage::set_asset_ids(&env, &ids);
        Storage::bump_instance(&env);

        Events::emit_for_asset(&env, symbol_short!("asset_reg"), asset_id, token);
        Ok(asset_id)
    }

    /// Remove an empty pool. All strategies must have been removed first.
    pub fn remove_asset(env: Env, admin: Address, asset_id: u32) -> Result<(), LedgerError> {
        Self::require_admin(&env, &admin, "remove_asset")?;
        let pool = Self::load_pool(&env, asset_id, "remove_asset")?;

        if pool.share_supply != 0 {
            return Err(reject(&env, LedgerError::PoolNotEmpty, "remove_asset"));
        }
        if !storage::strategies(&env, asset_id).is_empty() {
            return Err(reject(&env, LedgerError::StrategiesRegistered, "remove_asset"));
        }

        storage::remove_pool(&env, &pool);

        let mut ids = storage::asset_ids(&env);
        if let Some(position) = ids.first_index_of(asset_id) {
            let last = ids.len() - 1;
            if position != last {
                ids.set(position, ids.get_unchecked(last));
            }
            ids.pop_back();
        }
        storage::set_asset_ids(&env, &ids);

        Events::emit_for_asset(&env, symbol_short!("asset_rm"), asset_id, pool.token);
        Ok(())
    }

    // ========================================================================
    // STRATEGY REGISTRY
    // ========================================================================

    /// Append an adapter to the pool's registry; returns its index.
    pub fn add_strategy(
        env: Env,
        admin: Address,
        asset_id: u32,
        adapter: Address,
        kind: AdapterKind,
    ) -> Result<u32, LedgerError> {
        Self::require_admin(&env, &admin, "add_strategy")?;
        let mut pool = Self::load_pool(&env, asset_id, "add_strategy")?;

        let info = StrategyInfo {
            adapter: adapter.clone(),
            kind,
            added_at: env.ledger().timestamp(),
        };
        let index = StrategyRegistry::add(&env, &mut pool, info)
            .map_err(|err| reject(&env, err, "add_strategy"))?;
        Self::touch(&env, &mut pool);

        Events::emit_for_asset(&env, symbol_short!("strat_add"), asset_id, (adapter, kind, index));
        Ok(index)
    }

    /// Remove the adapter at `index` (swap-with-last; see `get_strategies`).
    ///
    /// Refuses while the adapter still reports managed assets
    /// (`StrategyNotEmpty`) or cannot be queried (`InvalidStrategy`).
    pub fn remove_strategy(
        env: Env,
        admin: Address,
        asset_id: u32,
        index: u32,
    ) -> Result<(), LedgerError> {
        Self::require_admin(&env, &admin, "remove_strategy")?;
        let mut pool = Self::load_pool(&env, asset_id, "remove_strategy")?;

        StrategyRegistry::ensure_empty(&env, &pool, index)
            .map_err(|err| reject(&env, err, "remove_strategy"))?;
        let removed = StrategyRegistry::remove(&env, &mut pool, index)
            .map_err(|err| reject(&env, err, "remove_strategy"))?;
        Self::touch(&env, &mut pool);

        Events::emit_for_asset(&env, symbol_short!("strat_rm"), asset_id, (removed.adapter, index));
        Ok(())
    }

    /// Detach the adapter at `index` without calling it.
    ///
    /// Recovery path for a reverting or frozen backend. Whatever it still held
    /// drops out of live assets; follow up with `realize_loss` to mark
    /// principal down.
    pub fn force_remove_strategy(
        env: Env,
        admin: Address,
        asset_id: u32,
        index: u32,
    ) -> Result<(), LedgerError> {
        Self::require_admin(&env, &admin, "force_remove_strategy")?;
        let mut pool = Self::load_pool(&env, asset_id, "force_remove_strategy")?;

        let removed = StrategyRegistry::remove(&env, &mut pool, index)
            .map_err(|err| reject(&env, err, "force_remove_strategy"))?;
        Self::touch(&env, &mut pool);

        ErrorHelper::log_error_with_context(&env, "force_remove_strategy", "adapter detached unchecked");
        Events::emit_for_asset(&env, symbol_short!("strat_frm"), asset_id, (removed.adapter, index));
        Ok(())
    }

    pub fn set_active_strategy(
        env: Env,
        admin: Address,
        asset_id: u32,
        index: u32,
    ) -> Result<(), LedgerError> {
        Self::require_admin(&env, &admin, "set_active_strategy")?;
        let mut pool = Self::load_pool(&env, asset_id, "set_active_strategy")?;

        StrategyRegistry::set_active(&env, &mut pool, index)
            .map_err(|err| reject(&env, err, "set_active_strategy"))?;
        Self::touch(&env, &mut pool);

        Events::emit_for_asset(&env, symbol_short!("strat_act"), asset_id, index);
        Ok(())
    }

    /// Registered adapters in index order.
    ///
    /// Indices are only valid until the next `remove_strategy` on this pool.
    pub fn get_strategies(env: Env, asset_id: u32) -> Result<Vec<StrategyInfo>, LedgerError> {
        storage::load_pool(&env, asset_id)?;
        Ok(storage::strategies(&env, asset_id))
    }

    /// The adapter new deposits are routed to; `None` when the registry is empty.
    pub fn get_active_strategy(env: Env, asset_id: u32) -> Result<Option<Address>, LedgerError> {
        let pool = storage::load_pool(&env, asset_id)?;
        Ok(StrategyRegistry::resolve_active(&env, &pool))
    }

    // ========================================================================
    // DEPOSIT / WITHDRAW
    // ========================================================================

    /// Deposit `amount` of the pool token and mint shares to `caller`.
    ///
    /// Pool totals and the caller's balance are committed before the token
    /// pull and before the amount is forwarded to the active adapter.
    ///
    /// # Returns
    /// Shares minted
    pub fn deposit(env: Env, caller: Address, asset_id: u32, amount: i128) -> Result<i128, LedgerError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        let pool = Self::load_pool(&env, asset_id, "deposit")?;
        Validation::require_positive(amount, LedgerError::ZeroAmount)
            .map_err(|err| reject(&env, err, "deposit"))?;
        if EmergencyControl::is_emergency_mode(&env) {
            return Err(reject(&env, LedgerError::EmergencyMode, "deposit"));
        }

        PoolLock::acquire(&env, asset_id).map_err(|err| reject(&env, err, "deposit"))?;
        let result = Self::deposit_locked(&env, &caller, pool, amount);
        PoolLock::release(&env, asset_id);
        result.map_err(|err| reject(&env, err, "deposit"))
    }

    /// Burn `shares` from `caller` and pay out their current value.
    ///
    /// The idle balance pays first; any shortfall is requested from the
    /// active adapter only. If the adapter returns too little the whole call
    /// fails with `InsufficientLiquidity` and the controller is expected to
    /// rebalance.
    ///
    /// # Returns
    /// Assets paid to the caller
    pub fn withdraw(env: Env, caller: Address, asset_id: u32, shares: i128) -> Result<i128, LedgerError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        let pool = Self::load_pool(&env, asset_id, "withdraw")?;
        Validation::require_positive(shares, LedgerError::ZeroShares)
            .map_err(|err| reject(&env, err, "withdraw"))?;
        if pool.share_supply == 0 {
            return Err(reject(&env, LedgerError::NoSharesExist, "withdraw"));
        }
        if storage::shares_of(&env, &caller, asset_id) < shares {
            return Err(reject(&env, LedgerError::InsufficientShares, "withdraw"));
        }

        PoolLock::acquire(&env, asset_id).map_err(|err| reject(&env, err, "withdraw"))?;
        let result = Self::withdraw_locked(&env, &caller, pool, shares);
        PoolLock::release(&env, asset_id);
        result.map_err(|err| reject(&env, err, "withdraw"))
    }

    // ========================================================================
    // SHARE BALANCES
    // ========================================================================

    pub fn balance(env: Env, holder: Address, asset_id: u32) -> i128 {
        storage::shares_of(&env, &holder, asset_id)
    }

    /// Move shares between holders of one pool. Share supply is unchanged.
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        asset_id: u32,
        shares: i128,
    ) -> Result<(), LedgerError> {
        from.require_auth();
        Self::load_pool(&env, asset_id, "transfer")?;
        Validation::require_positive(shares, LedgerError::ZeroShares)
            .map_err(|err| reject(&env, err, "transfer"))?;

        let from_balance = storage::shares_of(&env, &from, asset_id);
        if from_balance < shares {
            return Err(reject(&env, LedgerError::InsufficientShares, "transfer"));
        }
        storage::set_shares(&env, &from, asset_id, from_balance - shares);

        let to_balance = storage::shares_of(&env, &to, asset_id);
        let credited = SafeMath::add(to_balance, shares).ok_or(LedgerError::ArithmeticOverflow)?;
        storage::set_shares(&env, &to, asset_id, credited);

        Events::emit_transfer(&env, asset_id, &from, &to, shares);
        Ok(())
    }

    // ========================================================================
    // PREVIEWS & CONVERSIONS
    // ========================================================================

    /// Shares a deposit of `amount` would mint now (rounded down).
    pub fn preview_deposit(env: Env, asset_id: u32, amount: i128) -> Result<i128, LedgerError> {
        let pool = storage::load_pool(&env, asset_id)?;
        let live = Self::compute_live_assets(&env, &pool)?;
        ConversionMath::assets_to_shares(&Self::config(&env)?, amount, pool.share_supply, live, Rounding::Down)
    }

    /// Assets a withdrawal of `shares` would pay now (rounded up, capped at
    /// live assets).
    pub fn preview_withdraw(env: Env, asset_id: u32, shares: i128) -> Result<i128, LedgerError> {
        let pool = storage::load_pool(&env, asset_id)?;
        let live = Self::compute_live_assets(&env, &pool)?;
        let owed = ConversionMath::shares_to_assets(
            &Self::config(&env)?,
            shares,
            pool.share_supply,
            live,
            Rounding::Up,
        )?;
        Ok(owed.min(live))
    }

    pub fn convert_to_shares(env: Env, asset_id: u32, assets: i128) -> Result<i128, LedgerError> {
        let pool = storage::load_pool(&env, asset_id)?;
        let live = Self::compute_live_assets(&env, &pool)?;
        ConversionMath::assets_to_shares(&Self::config(&env)?, assets, pool.share_supply, live, Rounding::Down)
    }

    pub fn convert_to_assets(env: Env, asset_id: u32, shares: i128) -> Result<i128, LedgerError> {
        let pool = storage::load_pool(&env, asset_id)?;
        let live = Self::compute_live_assets(&env, &pool)?;
        ConversionMath::shares_to_assets(&Self::config(&env)?, shares, pool.share_supply, live, Rounding::Down)
    }

    // ========================================================================
    // HARVEST / REBALANCE
    // ========================================================================

    /// Fold observed yield into principal.
    ///
    /// Fails with `InvariantViolated` when live assets are below principal;
    /// a loss is never absorbed here.
    ///
    /// # Returns
    /// The new principal
    pub fn harvest(env: Env, admin: Address, asset_id: u32) -> Result<i128, LedgerError> {
        Self::require_admin(&env, &admin, "harvest")?;
        let mut pool = Self::load_pool(&env, asset_id, "harvest")?;

        PoolLock::acquire(&env, asset_id).map_err(|err| reject(&env, err, "harvest"))?;
        let live = Self::compute_live_assets(&env, &pool);
        PoolLock::release(&env, asset_id);
        let live = live.map_err(|err| reject(&env, err, "harvest"))?;

        if live < pool.principal {
            ErrorHelper::log_error_with_context(&env, "harvest", "live assets below principal");
            return Err(reject(&env, LedgerError::InvariantViolated, "harvest"));
        }

        let previous = pool.principal;
        pool.principal = live;
        Self::touch(&env, &mut pool);

        Events::emit_for_asset(&env, symbol_short!("harvest"), asset_id, (previous, live));
        Ok(live)
    }

    /// Explicitly mark principal down to live assets after a backend loss.
    ///
    /// This is the administrative counterpart to a failing `harvest`; it only
    /// applies when live assets are below principal.
    ///
    /// # Returns
    /// The loss written off
    pub fn realize_loss(env: Env, admin: Address, asset_id: u32) -> Result<i128, LedgerError> {
        Self::require_admin(&env, &admin, "realize_loss")?;
        let mut pool = Self::load_pool(&env, asset_id, "realize_loss")?;

        PoolLock::acquire(&env, asset_id).map_err(|err| reject(&env, err, "realize_loss"))?;
        let live = Self::compute_live_assets(&env, &pool);
        PoolLock::release(&env, asset_id);
        let live = live.map_err(|err| reject(&env, err, "realize_loss"))?;

        if live >= pool.principal {
            return Err(reject(&env, LedgerError::InvariantViolated, "realize_loss"));
        }

        let loss = pool.principal - live;
        pool.principal = live;
        Self::touch(&env, &mut pool);

        Events::emit_for_asset(&env, symbol_short!("loss"), asset_id, (loss, live));
        Ok(loss)
    }

    /// Move capital from one adapter to another within a pool.
    ///
    /// Principal and share supply are untouched. Whatever the source adapter
    /// actually pays back is forwarded; a short return shows up as a loss at
    /// the next harvest.
    ///
    /// # Returns
    /// Amount delivered to the destination adapter
    pub fn rebalance(
        env: Env,
        admin: Address,
        asset_id: u32,
        from_index: u32,
        to_index: u32,
        amount: i128,
    ) -> Result<i128, LedgerError> {
        Self::require_admin(&env, &admin, "rebalance")?;
        let pool = Self::load_pool(&env, asset_id, "rebalance")?;

        if from_index == to_index {
            return Err(reject(&env, LedgerError::SameStrategy, "rebalance"));
        }
        Validation::require_positive(amount, LedgerError::AmountMustBePositive)
            .map_err(|err| reject(&env, err, "rebalance"))?;
        let (source, destination) = match (
            StrategyRegistry::resolve(&env, asset_id, from_index),
            StrategyRegistry::resolve(&env, asset_id, to_index),
        ) {
            (Some(source), Some(destination)) => (source, destination),
            _ => return Err(reject(&env, LedgerError::InvalidStrategy, "rebalance")),
        };

        PoolLock::acquire(&env, asset_id).map_err(|err| reject(&env, err, "rebalance"))?;
        let token = token::Client::new(&env, &pool.token);
        let moved = Self::pull_from_adapter(&env, &token, &source, amount);
        if moved > 0 {
            Self::push_to_adapter(&env, &token, &destination, moved);
        }
        PoolLock::release(&env, asset_id);

        env.events().publish(
            (symbol_short!("rebalance"), asset_id),
            (source, destination, amount, moved),
        );
        Ok(moved)
    }

    // ========================================================================
    // VIEW FUNCTIONS
    // ========================================================================

    pub fn get_pool(env: Env, asset_id: u32) -> Result<Pool, LedgerError> {
        storage::load_pool(&env, asset_id)
    }

    /// Idle balance plus every adapter's reported assets.
    pub fn live_assets(env: Env, asset_id: u32) -> Result<i128, LedgerError> {
        let pool = storage::load_pool(&env, asset_id)?;
        Self::compute_live_assets(&env, &pool)
    }

    pub fn get_asset_ids(env: Env) -> Vec<u32> {
        storage::asset_ids(&env)
    }

    pub fn asset_id_of(env: Env, token: Address) -> Option<u32> {
        storage::asset_of(&env, &token)
    }

    pub fn is_initialized(env: Env) -> bool {
        Storage::is_initialized(&env)
    }

    // ========================================================================
    // INTERNAL HELPER FUNCTIONS
    // ========================================================================

    fn deposit_locked(env: &Env, caller: &Address, mut pool: Pool, amount: i128) -> Result<i128, LedgerError> {
        let config = Self::config(env)?;
        let live = Self::compute_live_assets(env, &pool)?;
        let shares =
            ConversionMath::assets_to_shares(&config, amount, pool.share_supply, live, Rounding::Down)?;
        if shares == 0 {
            return Err(LedgerError::ZeroShares);
        }

        // EFFECTS
        pool.principal = SafeMath::add(pool.principal, amount).ok_or(LedgerError::ArithmeticOverflow)?;
        pool.share_supply =
            SafeMath::add(pool.share_supply, shares).ok_or(LedgerError::ArithmeticOverflow)?;
        Self::touch(env, &mut pool);
        let balance = storage::shares_of(env, caller, pool.asset_id);
        let credited = SafeMath::add(balance, shares).ok_or(LedgerError::ArithmeticOverflow)?;
        storage::set_shares(env, caller, pool.asset_id, credited);

        // INTERACTIONS
        let token = token::Client::new(env, &pool.token);
        token.transfer(caller, &env.current_contract_address(), &amount);

        let adapter = StrategyRegistry::resolve_active(env, &pool);
        let routed = match &adapter {
            Some(adapter) => {
                Self::push_to_adapter(env, &token, adapter, amount);
                amount
            }
            None => 0,
        };

        env.events().publish(
            (symbol_short!("deposit"), pool.asset_id, caller.clone()),
            (adapter, shares, routed),
        );
        Ok(shares)
    }

    fn withdraw_locked(env: &Env, caller: &Address, mut pool: Pool, shares: i128) -> Result<i128, LedgerError> {
        let config = Self::config(env)?;
        let live = Self::compute_live_assets(env, &pool)?;
        let owed = ConversionMath::shares_to_assets(
            &config,
            shares,
            pool.share_supply,
            live,
            Rounding::Up,
        )?
        .min(live);

        // EFFECTS: burn before any external call
        if shares == pool.share_supply {
            pool.principal = 0;
            pool.share_supply = 0;
        } else {
            let retired = ConversionMath::principal_portion(shares, pool.principal, pool.share_supply)?;
            pool.principal =
                SafeMath::sub(pool.principal, retired).ok_or(LedgerError::ArithmeticOverflow)?;
            pool.share_supply =
                SafeMath::sub(pool.share_supply, shares).ok_or(LedgerError::ArithmeticOverflow)?;
        }
        Self::touch(env, &mut pool);
        let balance = storage::shares_of(env, caller, pool.asset_id);
        storage::set_shares(env, caller, pool.asset_id, balance - shares);

        // INTERACTIONS
        let token = token::Client::new(env, &pool.token);
        let ledger = env.current_contract_address();
        let idle = token.balance(&ledger);
        if idle < owed {
            if let Some(adapter) = StrategyRegistry::resolve_active(env, &pool) {
                Self::pull_from_adapter(env, &token, &adapter, owed - idle);
            }
        }
        if token.balance(&ledger) < owed {
            return Err(LedgerError::InsufficientLiquidity);
        }
        if owed > 0 {
            token.transfer(&ledger, caller, &owed);
        }

        env.events().publish(
            (symbol_short!("withdraw"), pool.asset_id, caller.clone()),
            (shares, owed),
        );
        Ok(owed)
    }

    /// Ask `adapter` for `amount` and measure what actually arrived.
    fn pull_from_adapter(env: &Env, token: &token::Client, adapter: &Address, amount: i128) -> i128 {
        let ledger = env.current_contract_address();
        let before = token.balance(&ledger);
        let reported = StrategyAdapterClient::new(env, adapter).withdraw(&amount);
        let received = (token.balance(&ledger) - before).max(0);
        if reported != received {
            ErrorHelper::log_error_with_context(env, "adapter_withdraw", "reported amount differs from received");
        }
        received
    }

    fn push_to_adapter(env: &Env, token: &token::Client, adapter: &Address, amount: i128) {
        token.transfer(&env.current_contract_address(), adapter, &amount);
        StrategyAdapterClient::new(env, adapter).deposit(&amount);
    }

    fn compute_live_assets(env: &Env, pool: &Pool) -> Result<i128, LedgerError> {
        let token = token::Client::new(env, &pool.token);
        let mut total = token.balance(&env.current_contract_address());
        for info in storage::strategies(env, pool.asset_id).iter() {
            let reported = StrategyAdapterClient::new(env, &info.adapter).total_assets();
            if reported < 0 {
                return Err(LedgerError::InvariantViolated);
            }
            total = SafeMath::add(total, reported).ok_or(LedgerError::ArithmeticOverflow)?;
        }
        Ok(total)
    }

    fn touch(env: &Env, pool: &mut Pool) {
        pool.updated_at = env.ledger().timestamp();
        storage::save_pool(env, pool);
    }

    fn config(env: &Env) -> Result<LedgerConfig, LedgerError> {
        storage::config(env).ok_or(LedgerError::NotInitialized)
    }

    fn load_pool(env: &Env, asset_id: u32, context: &str) -> Result<Pool, LedgerError> {
        storage::load_pool(env, asset_id).map_err(|err| reject(env, err, context))
    }

    fn require_initialized(env: &Env) -> Result<(), LedgerError> {
        if !Storage::is_initialized(env) {
            return Err(LedgerError::NotInitialized);
        }
        Ok(())
    }

    fn require_admin(env: &Env, admin: &Address, context: &str) -> Result<(), LedgerError> {
        match AccessControl::check_admin(env, admin) {
            AdminCheck::Authorized => Ok(()),
            AdminCheck::NotInitialized => Err(reject(env, LedgerError::NotInitialized, context)),
            AdminCheck::Unauthorized => Err(reject(env, LedgerError::Unauthorized, context)),
        }
    }
}

// ============================================================================
// TESTS MODULE
// ============================================================================
