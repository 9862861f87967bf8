//! Ledger error codes.
//! Discriminants follow the `shared_utils::error_codes` catalogue so off-chain
//! indexers can classify failures by range.

use shared_utils::{message_for_code, ErrorHelper};
use soroban_sdk::{contracterror, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    // Configuration (1-99)
    AssetNotRegistered = 1,
    AlreadyRegistered = 2,
    ZeroAdapter = 3,
    ZeroAmount = 4,
    IndexOutOfBounds = 5,
    SameStrategy = 6,
    AmountMustBePositive = 7,
    InvalidStrategy = 8,
    AdapterAlreadyAdded = 9,
    PoolNotEmpty = 10,
    StrategiesRegistered = 11,
    StrategyNotEmpty = 12,
    InvalidConfig = 13,
    // Authorization (100-199)
    Unauthorized = 100,
    // State (200-299)
    AlreadyInitialized = 200,
    NotInitialized = 201,
    ReentrancyDetected = 202,
    EmergencyMode = 203,
    // Accounting (300-399)
    InsufficientShares = 300,
    NoSharesExist = 301,
    ZeroShares = 302,
    InsufficientLiquidity = 303,
    ArithmeticOverflow = 304,
    // Invariant (400-499)
    InvariantViolated = 400,
}

impl LedgerError {
    /// Human-readable message for this error (for logs and clients).
    pub fn message(&self) -> &'static str {
        message_for_code(*self as u32)
    }
}

/// Log a rejected operation and hand the error back for `Err(..)`.
pub(crate) fn reject(env: &Env, err: LedgerError, context: &str) -> LedgerError {
    ErrorHelper::log_rejection(env, context, err as u32);
    err
}
