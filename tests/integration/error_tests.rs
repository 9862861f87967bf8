//! Error and Edge Case Tests
//!
//! These tests verify:
//! - Unauthorized access attempts
//! - Invalid input handling
//! - Degraded adapters (slippage, liquidity caps, losses)
//! - Boundary values (0, empty pools, empty registries)
//! - Expected error assertions

use crate::harness::{TestHarness, DEFAULT_USER_BALANCE};
use soroban_sdk::{testutils::Address as _, Address};

use yield_ledger::{AdapterKind, LedgerError};

// ============================================================================
// Unauthorized Access Tests
// ============================================================================

/// Test: non-controller cannot touch any administrative operation
#[test]
fn test_error_unauthorized_admin_operations() {
    let harness = TestHarness::new();
    let ledger = harness.ledger();
    let attacker = &harness.accounts.attacker;
    let id = harness.asset_id;
    let rogue = Address::generate(&harness.env);

    assert_eq!(
        ledger.try_register_asset(attacker, &rogue),
        Err(Ok(LedgerError::Unauthorized))
    );
    assert_eq!(
        ledger.try_add_strategy(attacker, &id, &rogue, &AdapterKind::Market),
        Err(Ok(LedgerError::Unauthorized))
    );
    assert_eq!(
        ledger.try_remove_strategy(attacker, &id, &0),
        Err(Ok(LedgerError::Unauthorized))
    );
    assert_eq!(
        ledger.try_set_active_strategy(attacker, &id, &1),
        Err(Ok(LedgerError::Unauthorized))
    );
    assert_eq!(
        ledger.try_rebalance(attacker, &id, &0, &1, &10),
        Err(Ok(LedgerError::Unauthorized))
    );
    assert_eq!(
        ledger.try_harvest(attacker, &id),
        Err(Ok(LedgerError::Unauthorized))
    );
    assert_eq!(
        ledger.try_set_admin(attacker, attacker),
        Err(Ok(LedgerError::Unauthorized))
    );
    assert_eq!(
        ledger.try_remove_asset(attacker, &id),
        Err(Ok(LedgerError::Unauthorized))
    );
}

/// Test: attacker cannot spend another holder's shares
#[test]
fn test_error_attacker_has_no_shares() {
    let harness = TestHarness::new();
    let attacker = &harness.accounts.attacker;

    harness.deposit(&harness.accounts.user1, 1_000);
    assert_eq!(
        harness
            .ledger()
            .try_withdraw(attacker, &harness.asset_id, &1_000),
        Err(Ok(LedgerError::InsufficientShares))
    );
    assert_eq!(harness.balance(attacker), DEFAULT_USER_BALANCE);
}

// ============================================================================
// Invalid Input Tests
// ============================================================================

#[test]
fn test_error_unregistered_asset() {
    let harness = TestHarness::new();
    let ledger = harness.ledger();
    let user = &harness.accounts.user1;

    assert_eq!(
        ledger.try_deposit(user, &42, &100),
        Err(Ok(LedgerError::AssetNotRegistered))
    );
    assert_eq!(
        ledger.try_withdraw(user, &42, &100),
        Err(Ok(LedgerError::AssetNotRegistered))
    );
    assert_eq!(
        ledger.try_live_assets(&42),
        Err(Ok(LedgerError::AssetNotRegistered))
    );
    assert_eq!(
        ledger.try_get_strategies(&42),
        Err(Ok(LedgerError::AssetNotRegistered))
    );
}

#[test]
fn test_error_zero_amounts() {
    let harness = TestHarness::new();
    let ledger = harness.ledger();
    let user = &harness.accounts.user1;
    let id = harness.asset_id;

    assert_eq!(
        ledger.try_deposit(user, &id, &0),
        Err(Ok(LedgerError::ZeroAmount))
    );
    assert_eq!(
        ledger.try_withdraw(user, &id, &0),
        Err(Ok(LedgerError::ZeroShares))
    );
    assert_eq!(
        ledger.try_rebalance(&harness.accounts.admin, &id, &0, &1, &0),
        Err(Ok(LedgerError::AmountMustBePositive))
    );
}

#[test]
fn test_error_empty_pool() {
    let harness = TestHarness::new();
    let ledger = harness.ledger();

    assert_eq!(
        ledger.try_withdraw(&harness.accounts.user1, &harness.asset_id, &1),
        Err(Ok(LedgerError::NoSharesExist))
    );
    assert_eq!(
        ledger.try_preview_withdraw(&harness.asset_id, &1),
        Err(Ok(LedgerError::NoSharesExist))
    );
    // an empty pool previews 1:1 deposits
    assert_eq!(ledger.preview_deposit(&harness.asset_id, &777), 777);
}

// ============================================================================
// Degraded Adapter Tests
// ============================================================================

/// Test: capped adapter fails the whole withdrawal and leaves state intact
#[test]
fn test_error_adapter_liquidity_cap() {
    let harness = TestHarness::new();
    let user = &harness.accounts.user1;

    harness.deposit(user, 1_000);
    harness.lending().set_max_withdraw(&100);

    assert_eq!(
        harness
            .ledger()
            .try_withdraw(user, &harness.asset_id, &500),
        Err(Ok(LedgerError::InsufficientLiquidity))
    );
    assert_eq!(harness.shares(user), 1_000);
    assert_eq!(harness.balance(user), DEFAULT_USER_BALANCE - 1_000);
}

/// Test: a loss blocks harvest until written off
#[test]
fn test_error_loss_blocks_harvest() {
    let harness = TestHarness::new();
    let ledger = harness.ledger();
    let admin = &harness.accounts.admin;

    harness.deposit(&harness.accounts.user1, 1_000);
    harness.lending().simulate_loss(&100);

    assert_eq!(
        ledger.try_harvest(admin, &harness.asset_id),
        Err(Ok(LedgerError::InvariantViolated))
    );
    assert_eq!(ledger.realize_loss(admin, &harness.asset_id), 100);
    assert_eq!(harness.harvest(), 900);
}

/// Test: adapter still holding funds cannot be removed
#[test]
fn test_error_remove_funded_strategy() {
    let harness = TestHarness::new();
    harness.deposit(&harness.accounts.user1, 10);

    assert_eq!(
        harness
            .ledger()
            .try_remove_strategy(&harness.accounts.admin, &harness.asset_id, &0),
        Err(Ok(LedgerError::StrategyNotEmpty))
    );
}

// ============================================================================
// Lifecycle Edge Cases
// ============================================================================

#[test]
fn test_error_remove_pool_with_depositors() {
    let harness = TestHarness::minimal();
    harness.deposit(&harness.accounts.user1, 10);

    assert_eq!(
        harness
            .ledger()
            .try_remove_asset(&harness.accounts.admin, &harness.asset_id),
        Err(Ok(LedgerError::PoolNotEmpty))
    );
}

#[test]
fn test_error_emergency_mode() {
    let harness = TestHarness::new();
    let ledger = harness.ledger();
    let user = &harness.accounts.user1;

    harness.deposit(user, 300);
    ledger.set_emergency_mode(&harness.accounts.admin, &true);

    assert_eq!(
        ledger.try_deposit(user, &harness.asset_id, &100),
        Err(Ok(LedgerError::EmergencyMode))
    );
    // capital can still be moved and withdrawn
    ledger.rebalance(&harness.accounts.admin, &harness.asset_id, &0, &1, &300);
    ledger.set_active_strategy(&harness.accounts.admin, &harness.asset_id, &1);
    assert_eq!(harness.withdraw(user, 300), 300);
}
