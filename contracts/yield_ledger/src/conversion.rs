//! Share/asset conversion for a single pool.
//!
//! Both directions pad the ratio with the configured virtual shares and
//! virtual assets so a donation made before the first deposit cannot push the
//! share price far enough to round a later depositor down to nothing.
//!
//! | Use                         | Direction        | Rounding |
//! |-----------------------------|------------------|----------|
//! | deposit / preview_deposit   | assets -> shares | Down     |
//! | withdraw payout / preview   | shares -> assets | Up       |
//! | principal removed on exit   | shares -> base   | Down     |

use crate::error::LedgerError;
use crate::LedgerConfig;
use shared_utils::{Rounding, SafeMath};

pub struct ConversionMath;

impl ConversionMath {
    /// Shares minted for `assets`.
    ///
    /// An empty pool (no shares or no live assets) mints 1:1.
    pub fn assets_to_shares(
        config: &LedgerConfig,
        assets: i128,
        share_supply: i128,
        live_assets: i128,
        rounding: Rounding,
    ) -> Result<i128, LedgerError> {
        if share_supply == 0 || live_assets == 0 {
            return Ok(assets);
        }
        let shares_side =
            SafeMath::add(share_supply, config.virtual_shares).ok_or(LedgerError::ArithmeticOverflow)?;
        let assets_side =
            SafeMath::add(live_assets, config.virtual_assets).ok_or(LedgerError::ArithmeticOverflow)?;
        SafeMath::mul_div(assets, shares_side, assets_side, rounding)
            .ok_or(LedgerError::ArithmeticOverflow)
    }

    /// Assets owed for `shares`. Fails with `NoSharesExist` on an empty pool.
    pub fn shares_to_assets(
        config: &LedgerConfig,
        shares: i128,
        share_supply: i128,
        live_assets: i128,
        rounding: Rounding,
    ) -> Result<i128, LedgerError> {
        if share_supply == 0 {
            return Err(LedgerError::NoSharesExist);
        }
        let assets_side =
            SafeMath::add(live_assets, config.virtual_assets).ok_or(LedgerError::ArithmeticOverflow)?;
        let shares_side =
            SafeMath::add(share_supply, config.virtual_shares).ok_or(LedgerError::ArithmeticOverflow)?;
        SafeMath::mul_div(shares, assets_side, shares_side, rounding)
            .ok_or(LedgerError::ArithmeticOverflow)
    }

    /// Portion of `principal` retired when `shares` leave the pool.
    ///
    /// A full exit retires the whole principal so no rounding residue is left
    /// behind an empty share supply.
    pub fn principal_portion(
        shares: i128,
        principal: i128,
        share_supply: i128,
    ) -> Result<i128, LedgerError> {
        if share_supply == 0 {
            return Err(LedgerError::NoSharesExist);
        }
        if shares == share_supply {
            return Ok(principal);
        }
        SafeMath::mul_div(shares, principal, share_supply, Rounding::Down)
            .ok_or(LedgerError::ArithmeticOverflow)
    }
}
