use crate::constants::{BPS_DENOMINATOR, MAX_CATEGORIES, MAX_VESTING_STEPS};
use crate::error::VestingDistributorError;
use crate::state::CategorySchedule;
use anchor_lang::prelude::*;

/// Validates the immutable distributor configuration
///
/// Rejects a zero deposit, the all-zero merkle root, a TGE timestamp not
/// strictly later than the configuration time, and a schedule table that
/// is empty, exceeds the fixed capacity, or carries an entry with a
/// fraction beyond 10000 bps or a non-positive step duration. Pure so the
/// rejection cases are testable without an account context.
pub fn validate_distributor_config(
    initial_total_amount: u64,
    merkle_root: &[u8; 32],
    tge_timestamp: i64,
    current_time: i64,
    schedules: &[CategorySchedule],
) -> Result<()> {
    require!(
        initial_total_amount > 0,
        VestingDistributorError::InvalidAmount
    );

    // An empty merkle root would allow no valid claims
    require!(
        *merkle_root != [0; 32],
        VestingDistributorError::ZeroMerkleRoot
    );

    // TGE must be strictly in the future relative to configuration time
    require!(
        tge_timestamp > current_time,
        VestingDistributorError::InvalidTgeTimestamp
    );

    require!(
        !schedules.is_empty() && schedules.len() <= MAX_CATEGORIES,
        VestingDistributorError::InvalidScheduleTable
    );
    for schedule in schedules.iter() {
        require!(
            (schedule.cliff_bps as u64) <= BPS_DENOMINATOR
                && (schedule.step_bps as u64) <= BPS_DENOMINATOR,
            VestingDistributorError::InvalidScheduleTable
        );
        require!(
            schedule.step_duration > 0,
            VestingDistributorError::InvalidScheduleTable
        );
    }

    Ok(())
}

/// Computes the vested fraction of an allocation, in basis points
///
/// `steps = elapsed / step_duration` with truncating integer division, so
/// the step fraction unlocks only once a full step has elapsed. The step
/// count is bounded by MAX_VESTING_STEPS before the multiplication so a
/// pathological far-future timestamp stays harmless. The result saturates
/// at 10000 bps, which is the formal model of "fully vested".
pub fn vested_fraction_bps(schedule: &CategorySchedule, elapsed_seconds: i64) -> Result<u64> {
    require!(elapsed_seconds >= 0, VestingDistributorError::TgeNotStarted);
    require!(
        schedule.step_duration > 0,
        VestingDistributorError::InvalidScheduleTable
    );

    let steps = (elapsed_seconds / schedule.step_duration) as u64;
    let steps = steps.min(MAX_VESTING_STEPS);

    // u16 bps inputs and the bounded step count keep this within u64.
    let raw = schedule.cliff_bps as u64 + schedule.step_bps as u64 * steps;

    Ok(raw.min(BPS_DENOMINATOR))
}

/// Computes the vested amount for an allocation at a given fraction
///
/// `floor(amount * vested_bps / 10000)` with truncating division; rounding
/// always favors the pool and never overpays. The interim product is taken
/// in u128, and the quotient always fits back into u64 because vested_bps
/// never exceeds the denominator.
pub fn vested_amount(amount: u64, vested_bps: u64) -> Result<u64> {
    let vested = (amount as u128)
        .checked_mul(vested_bps as u128)
        .ok_or(VestingDistributorError::ArithmeticOverflow)?
        / BPS_DENOMINATOR as u128;

    u64::try_from(vested).map_err(|_| error!(VestingDistributorError::ArithmeticOverflow))
}

/// Computes the newly claimable delta for one allocation
///
/// Evaluates the schedule at `elapsed_seconds`, converts the fraction into
/// an amount, and subtracts what the claimant has already received. Because
/// the vested fraction is monotonically non-decreasing in time, the delta
/// is never negative; a zero delta fails with NothingToClaim.
pub fn claimable_amount(
    schedule: &CategorySchedule,
    amount: u64,
    elapsed_seconds: i64,
    already_claimed: u64,
) -> Result<u64> {
    let vested_bps = vested_fraction_bps(schedule, elapsed_seconds)?;
    let vested = vested_amount(amount, vested_bps)?;

    let claimable = vested
        .checked_sub(already_claimed)
        .ok_or(VestingDistributorError::ArithmeticOverflow)?;
    require!(claimable > 0, VestingDistributorError::NothingToClaim);

    Ok(claimable)
}
