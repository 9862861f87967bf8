//! Math utilities for checked arithmetic, rounded mul-div and basis points

/// Basis points in one whole (100%).
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Rounding direction for integer division.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rounding {
    /// Truncate toward zero.
    Down,
    /// Round any non-zero remainder away from zero.
    Up,
}

/// Checked math operations returning `None` on overflow, underflow or
/// division by zero. Callers map `None` to their own overflow error.
pub struct SafeMath;

impl SafeMath {
    /// Checked addition of two i128 values
    pub fn add(a: i128, b: i128) -> Option<i128> {
        a.checked_add(b)
    }

    /// Checked subtraction of two i128 values
    pub fn sub(a: i128, b: i128) -> Option<i128> {
        a.checked_sub(b)
    }

    /// Computes `a * b / denominator` with the given rounding.
    ///
    /// All three operands must be non-negative and `denominator` non-zero.
    ///
    /// # Returns
    /// `None` if any operand is negative, the denominator is zero, or the
    /// intermediate product overflows.
    pub fn mul_div(a: i128, b: i128, denominator: i128, rounding: Rounding) -> Option<i128> {
        if a < 0 || b < 0 || denominator <= 0 {
            return None;
        }
        let product = a.checked_mul(b)?;
        let quotient = product / denominator;
        match rounding {
            Rounding::Down => Some(quotient),
            Rounding::Up if product % denominator != 0 => quotient.checked_add(1),
            Rounding::Up => Some(quotient),
        }
    }

    /// Calculate `value * bps / 10_000`, rounded down.
    ///
    /// # Returns
    /// `None` if `bps` exceeds 10_000 or the product overflows
    pub fn bps_of(value: i128, bps: u32) -> Option<i128> {
        if bps as i128 > BPS_DENOMINATOR {
            return None;
        }
        Self::mul_div(value, bps as i128, BPS_DENOMINATOR, Rounding::Down)
    }
}
