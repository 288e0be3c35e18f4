//! Stock Levels
//!
//! Status thresholds and the count arithmetic behind "use" and "restock".

use crate::error::ValidationError;
use crate::models::StockStatus;

/// Counts at or below this are critical
pub const CRITICAL_MAX: u32 = 30;
/// Counts at or below this (and above `CRITICAL_MAX`) are low
pub const LOW_MAX: u32 = 150;

pub fn stock_status(count: u32) -> StockStatus {
    if count <= CRITICAL_MAX {
        StockStatus::Critical
    } else if count <= LOW_MAX {
        StockStatus::Low
    } else {
        StockStatus::High
    }
}

/// Count left after consuming `amount`; never drops below zero
pub fn count_after_use(count: u32, amount: u32) -> Result<u32, ValidationError> {
    if amount == 0 {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(count.saturating_sub(amount))
}

pub fn count_after_restock(count: u32, amount: u32) -> Result<u32, ValidationError> {
    if amount == 0 {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(count.saturating_add(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(stock_status(0), StockStatus::Critical);
        assert_eq!(stock_status(30), StockStatus::Critical);
        assert_eq!(stock_status(31), StockStatus::Low);
        assert_eq!(stock_status(150), StockStatus::Low);
        assert_eq!(stock_status(151), StockStatus::High);
        assert_eq!(stock_status(200), StockStatus::High);
    }

    #[test]
    fn test_use_clamps_at_zero() {
        assert_eq!(count_after_use(10, 3), Ok(7));
        assert_eq!(count_after_use(2, 5), Ok(0));
        assert_eq!(count_after_use(2, 0), Err(ValidationError::NonPositiveAmount));
    }

    #[test]
    fn test_restock_adds() {
        assert_eq!(count_after_restock(10, 5), Ok(15));
        assert_eq!(count_after_restock(u32::MAX, 1), Ok(u32::MAX));
        assert_eq!(count_after_restock(1, 0), Err(ValidationError::NonPositiveAmount));
    }
}
