//! Linear equal-installment release math.
//! - installment k (0-based) unlocks at first_vesting_date + k * vesting_duration
//! - elapsed_periods = clamp(1 + floor((now - first) / duration), 0, count), 0 before start
//! - entitled = floor(total * elapsed / count); equals total once elapsed == count

use crate::error::VestingError;

/// True once the first installment has unlocked (inclusive at the boundary).
pub fn is_started(now_ts: i64, first_vesting_date: i64) -> bool {
    now_ts >= first_vesting_date
}

/// Number of installments unlocked at `now_ts`, saturating at `vesting_count`.
pub fn elapsed_periods(
    now_ts: i64,
    first_vesting_date: i64,
    vesting_duration: i64,
    vesting_count: u32,
) -> Result<u32, VestingError> {
    if vesting_count == 0 || vesting_duration <= 0 {
        return Err(VestingError::InvalidArgument);
    }
    if !is_started(now_ts, first_vesting_date) {
        return Ok(0);
    }
    // Clamped to vesting_count below, so saturating here never under-counts.
    let since_start = now_ts.saturating_sub(first_vesting_date);
    let periods = (since_start / vesting_duration).saturating_add(1);
    Ok(periods.min(vesting_count as i64) as u32)
}

/// Cumulative amount unlocked after `elapsed` installments (floor division).
pub fn entitled_amount(
    total_allocation: u64,
    elapsed: u32,
    vesting_count: u32,
) -> Result<u64, VestingError> {
    if vesting_count == 0 {
        return Err(VestingError::InvalidArgument);
    }
    let elapsed = elapsed.min(vesting_count);
    let v = (total_allocation as u128)
        .checked_mul(elapsed as u128)
        .ok_or(VestingError::MathOverflow)?
        / (vesting_count as u128);
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}

/// Unlock timestamp of the installment following `elapsed`, clamped to the
/// final installment. Saturating so read paths never fail.
pub fn next_vesting_date(
    first_vesting_date: i64,
    vesting_duration: i64,
    vesting_count: u32,
    elapsed: u32,
) -> i64 {
    let last_index = vesting_count.saturating_sub(1) as i64;
    let next_index = (elapsed as i64).min(last_index);
    first_vesting_date.saturating_add(next_index.saturating_mul(vesting_duration))
}
