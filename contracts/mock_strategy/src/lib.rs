#![no_std]

//! Mock Strategy Adapter for Ledger Testing
//!
//! This contract simulates a yield backend for testing purposes. It holds the
//! pool token it is funded with and allows test control over:
//! - Yield (mint tokens straight to the adapter address)
//! - Losses (`simulate_loss` burns part of the holdings)
//! - Withdrawal slippage (a basis-point haircut burned on every withdraw)
//! - Liquidity caps (at most `max_withdraw` is paid out per call)

use shared_utils::SafeMath;
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, token, Address, Env,
};

/// Adapter-specific errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StrategyError {
    /// Contract not initialized
    NotInitialized = 1,
    /// Contract already initialized
    AlreadyInitialized = 2,
    /// Invalid amount or basis points
    InvalidAmount = 3,
}

/// Storage keys for the mock adapter
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Pool token held by the adapter
    Token,
    /// Ledger allowed to deposit and withdraw
    Ledger,
    /// Haircut applied to withdrawals, in basis points
    SlippageBps,
    /// Cap on a single withdrawal payout; absent means uncapped
    MaxWithdraw,
    /// Sum of amounts reported through `deposit`
    Deposited,
}

#[contract]
pub struct MockStrategyContract;

#[contractimpl]
impl MockStrategyContract {
    /// Initialize the adapter for one pool token and one ledger
    pub fn initialize(e: Env, token: Address, ledger: Address) -> Result<(), StrategyError> {
        if e.storage().instance().has(&DataKey::Token) {
            return Err(StrategyError::AlreadyInitialized);
        }
        e.storage().instance().set(&DataKey::Token, &token);
        e.storage().instance().set(&DataKey::Ledger, &ledger);
        e.storage().instance().set(&DataKey::SlippageBps, &0u32);
        e.storage().instance().set(&DataKey::Deposited, &0i128);
        Ok(())
    }

    /// Record funds the ledger already pushed to this contract
    pub fn deposit(e: Env, amount: i128) -> Result<(), StrategyError> {
        let ledger = Self::ledger(&e)?;
        ledger.require_auth();
        if amount < 0 {
            return Err(StrategyError::InvalidAmount);
        }

        let deposited: i128 = e
            .storage()
            .instance()
            .get(&DataKey::Deposited)
            .unwrap_or(0);
        e.storage()
            .instance()
            .set(&DataKey::Deposited, &(deposited + amount));

        e.events().publish((symbol_short!("mock_dep"),), amount);
        Ok(())
    }

    /// Pay up to `amount` back to the ledger, minus slippage
    ///
    /// # Returns
    /// The amount actually transferred to the ledger
    pub fn withdraw(e: Env, amount: i128) -> Result<i128, StrategyError> {
        let ledger = Self::ledger(&e)?;
        ledger.require_auth();
        if amount < 0 {
            return Err(StrategyError::InvalidAmount);
        }

        let token = token::Client::new(&e, &Self::token(&e)?);
        let this = e.current_contract_address();

        let mut available = amount.min(token.balance(&this));
        if let Some(cap) = e.storage().instance().get::<_, i128>(&DataKey::MaxWithdraw) {
            available = available.min(cap);
        }

        let bps: u32 = e
            .storage()
            .instance()
            .get(&DataKey::SlippageBps)
            .unwrap_or(0);
        let haircut = SafeMath::bps_of(available, bps).ok_or(StrategyError::InvalidAmount)?;
        let returned = available - haircut;

        if haircut > 0 {
            token.burn(&this, &haircut);
        }
        if returned > 0 {
            token.transfer(&this, &ledger, &returned);
        }

        e.events()
            .publish((symbol_short!("mock_wd"),), (amount, returned));
        Ok(returned)
    }

    /// Assets under management: the adapter's token balance
    pub fn total_assets(e: Env) -> Result<i128, StrategyError> {
        let token = token::Client::new(&e, &Self::token(&e)?);
        Ok(token.balance(&e.current_contract_address()))
    }

    // ========================================================================
    // TEST CONTROLS
    // ========================================================================

    /// Set the withdrawal haircut in basis points (0-10000)
    pub fn set_slippage_bps(e: Env, bps: u32) -> Result<(), StrategyError> {
        if bps > 10_000 {
            return Err(StrategyError::InvalidAmount);
        }
        e.storage().instance().set(&DataKey::SlippageBps, &bps);
        Ok(())
    }

    /// Cap every withdrawal payout at `cap`
    pub fn set_max_withdraw(e: Env, cap: i128) -> Result<(), StrategyError> {
        if cap < 0 {
            return Err(StrategyError::InvalidAmount);
        }
        e.storage().instance().set(&DataKey::MaxWithdraw, &cap);
        Ok(())
    }

    /// Burn `amount` of the holdings to simulate a protocol loss
    pub fn simulate_loss(e: Env, amount: i128) -> Result<(), StrategyError> {
        if amount <= 0 {
            return Err(StrategyError::InvalidAmount);
        }
        let token = token::Client::new(&e, &Self::token(&e)?);
        token.burn(&e.current_contract_address(), &amount);
        Ok(())
    }

    /// Sum of amounts the ledger reported through `deposit`
    pub fn deposited(e: Env) -> i128 {
        e.storage()
            .instance()
            .get(&DataKey::Deposited)
            .unwrap_or(0)
    }

    fn token(e: &Env) -> Result<Address, StrategyError> {
        e.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(StrategyError::NotInitialized)
    }

    fn ledger(e: &Env) -> Result<Address, StrategyError> {
        e.storage()
            .instance()
            .get(&DataKey::Ledger)
            .ok_or(StrategyError::NotInitialized)
    }
}
