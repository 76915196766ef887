use crate::state::CategorySchedule;
use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines all the constant values used throughout the vesting
 * distributor program: vesting arithmetic bounds, PDA derivation seeds, and
 * the reference schedule table.
 */

#[constant]
/// ===== VESTING CONSTANTS =====

/// Denominator for all vesting fractions
/// - Fractions are expressed in basis points: 1 bps = 0.01%
/// - A fully vested allocation corresponds to 10000 bps
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Seconds per day, used by the reference schedule table
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Upper bound on the number of elapsed vesting steps
/// - Caps the step count before the bps multiplication so a pathological
///   far-future timestamp cannot overflow the fraction arithmetic
/// - Any realistic schedule saturates at 10000 bps far below this bound
pub const MAX_VESTING_STEPS: u64 = 100_000;

/// Maximum number of configurable vesting categories
/// - The schedule table is stored inline in the distributor account, so
///   its capacity must be fixed at compile time
pub const MAX_CATEGORIES: usize = 8;

/// ===== PDA SEED CONSTANTS =====

/// Seed for distributor PDA derivation
/// - Used in: ["distributor", token_mint, owner]
/// - One distributor per (token, owner) pair
pub const DISTRIBUTOR_SEED: &str = "distributor";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", distributor_key]
/// - Creates a unique vault controlled by the distributor PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for claim status PDA derivation
/// - Used in: ["claim", distributor_key, claimant_key]
/// - One cumulative claim ledger entry per (distributor, claimant) pair
pub const CLAIM_SEED: &str = "claim";

/// ===== REFERENCE SCHEDULE TABLE =====

/// Reference vesting schedules, index i configures category i + 1
/// - Category 0 is reserved and always invalid
/// - cliff_bps unlocks immediately at TGE; step_bps unlocks per elapsed
///   step of step_duration seconds; the total saturates at 10000 bps
pub const REFERENCE_SCHEDULES: [CategorySchedule; 5] = [
    // category 1: 10% cliff, 6% per 30 days
    CategorySchedule { cliff_bps: 1000, step_bps: 600, step_duration: 30 * SECONDS_PER_DAY },
    // category 2: 10% cliff, 7.5% per 30 days
    CategorySchedule { cliff_bps: 1000, step_bps: 750, step_duration: 30 * SECONDS_PER_DAY },
    // category 3: 10% cliff, 22.5% per 30 days
    CategorySchedule { cliff_bps: 1000, step_bps: 2250, step_duration: 30 * SECONDS_PER_DAY },
    // category 4: 20% cliff, 10% per 7 days
    CategorySchedule { cliff_bps: 2000, step_bps: 1000, step_duration: 7 * SECONDS_PER_DAY },
    // category 5: 4.17% cliff, 4.17% per 30 days
    CategorySchedule { cliff_bps: 417, step_bps: 417, step_duration: 30 * SECONDS_PER_DAY },
];
