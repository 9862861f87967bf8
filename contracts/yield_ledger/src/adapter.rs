//! Strategy adapter capability consumed by the ledger.

use soroban_sdk::{contractclient, contracttype, Address, Env};

/// Interface every yield backend exposes to the ledger.
///
/// Funding is push-based: the ledger transfers `amount` of the pool token to
/// the adapter and then calls `deposit`. On `withdraw` the adapter transfers up
/// to `amount` back to the caller and returns what it sent; returning less than
/// requested is the expected degraded path, not an error.
#[contractclient(name = "StrategyAdapterClient")]
pub trait StrategyAdapter {
    fn deposit(env: Env, amount: i128);
    fn withdraw(env: Env, amount: i128) -> i128;
    fn total_assets(env: Env) -> i128;
}

/// Protocol family behind an adapter. Informational; dispatch is by index.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AdapterKind {
    Lending,
    Market,
    Staking,
    Liquidity,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrategyInfo {
    pub adapter: Address,
    pub kind: AdapterKind,
    pub added_at: u64,
}
