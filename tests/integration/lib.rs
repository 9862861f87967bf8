//! Integration Test Suite for the Yield Ledger
//!
//! Deploys the ledger together with a Stellar asset token and mock strategy
//! adapters and drives them the way an operator and depositors would.
//!
//! # Test Organization
//! - `harness`: Reusable test harness and helpers
//! - `e2e_tests`: End-to-end deposit, yield, harvest and exit flows
//! - `error_tests`: Error and edge case tests

#![cfg(test)]

pub mod e2e_tests;
pub mod error_tests;

pub use harness::*;
