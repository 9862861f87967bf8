//! Standardized error codes and messages for the ledger contracts.
//!
//! Error code ranges (for documentation and off-chain indexing):
//! - Configuration: 1-99 (unknown asset/strategy, bad index, zero amount)
//! - Authorization: 100-199 (caller is not the controller)
//! - State: 200-299 (initialization, reentrancy, emergency mode)
//! - Accounting: 300-399 (share guards, liquidity, arithmetic)
//! - Invariant: 400-499 (conditions requiring administrative investigation)

/// Error category boundaries for documentation and indexing.
pub mod category {
    pub const CONFIG_START: u32 = 1;
    pub const CONFIG_END: u32 = 99;
    pub const AUTH_START: u32 = 100;
    pub const AUTH_END: u32 = 199;
    pub const STATE_START: u32 = 200;
    pub const STATE_END: u32 = 299;
    pub const ACCOUNTING_START: u32 = 300;
    pub const ACCOUNTING_END: u32 = 399;
    pub const INVARIANT_START: u32 = 400;
    pub const INVARIANT_END: u32 = 499;
}

/// Broad class of an error code.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    Configuration,
    Authorization,
    State,
    Accounting,
    Invariant,
    Unknown,
}

/// Standard error code constants (numeric only; contracts use their own contracterror enums).
pub mod code {
    // Configuration (1-99)
    pub const ASSET_NOT_REGISTERED: u32 = 1;
    pub const ALREADY_REGISTERED: u32 = 2;
    pub const ZERO_ADAPTER: u32 = 3;
    pub const ZERO_AMOUNT: u32 = 4;
    pub const INDEX_OUT_OF_BOUNDS: u32 = 5;
    pub const SAME_STRATEGY: u32 = 6;
    pub const AMOUNT_MUST_BE_POSITIVE: u32 = 7;
    pub const INVALID_STRATEGY: u32 = 8;
    pub const ADAPTER_ALREADY_ADDED: u32 = 9;
    pub const POOL_NOT_EMPTY: u32 = 10;
    pub const STRATEGIES_REGISTERED: u32 = 11;
    pub const STRATEGY_NOT_EMPTY: u32 = 12;
    pub const INVALID_CONFIG: u32 = 13;

    // Authorization (100-199)
    pub const UNAUTHORIZED: u32 = 100;

    // State (200-299)
    pub const ALREADY_INITIALIZED: u32 = 200;
    pub const NOT_INITIALIZED: u32 = 201;
    pub const REENTRANCY: u32 = 202;
    pub const EMERGENCY_MODE: u32 = 203;

    // Accounting (300-399)
    pub const INSUFFICIENT_SHARES: u32 = 300;
    pub const NO_SHARES_EXIST: u32 = 301;
    pub const ZERO_SHARES: u32 = 302;
    pub const INSUFFICIENT_LIQUIDITY: u32 = 303;
    pub const ARITHMETIC_OVERFLOW: u32 = 304;

    // Invariant (400-499)
    pub const INVARIANT_VIOLATED: u32 = 400;
}

/// Classify a numeric error code by its range.
pub fn category_of(code: u32) -> ErrorCategory {
    match code {
        category::CONFIG_START..=category::CONFIG_END => ErrorCategory::Configuration,
        category::AUTH_START..=category::AUTH_END => ErrorCategory::Authorization,
        category::STATE_START..=category::STATE_END => ErrorCategory::State,
        category::ACCOUNTING_START..=category::ACCOUNTING_END => ErrorCategory::Accounting,
        category::INVARIANT_START..=category::INVARIANT_END => ErrorCategory::Invariant,
        _ => ErrorCategory::Unknown,
    }
}

/// Returns a human-readable message for a given error code (for events/logging).
pub fn message_for_code(code: u32) -> &'static str {
    match code {
        1 => "Asset not registered",
        2 => "Asset already registered",
        3 => "Adapter address is not a usable backend",
        4 => "Invalid amount: must be greater than zero",
        5 => "Strategy index out of bounds",
        6 => "Source and destination strategy are the same",
        7 => "Rebalance amount must be positive",
        8 => "Strategy does not resolve to an adapter",
        9 => "Adapter already registered for this asset",
        10 => "Pool still has outstanding shares",
        11 => "Pool still has registered strategies",
        12 => "Strategy still reports managed assets",
        13 => "Invalid ledger configuration",
        100 => "Unauthorized: caller is not the controller",
        200 => "Contract already initialized",
        201 => "Contract not initialized",
        202 => "Reentrancy detected",
        203 => "Action not allowed in emergency mode",
        300 => "Insufficient shares",
        301 => "No shares exist for this pool",
        302 => "Operation would mint or move zero shares",
        303 => "Insufficient liquidity to pay withdrawal",
        304 => "Arithmetic overflow",
        400 => "Invariant violated: live assets below principal",
        _ => "Unknown error",
    }
}
