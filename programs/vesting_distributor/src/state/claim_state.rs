use anchor_lang::prelude::*;

/**
 * Individual claim status account
 *
 * This struct is the per-claimant claim ledger entry: the cumulative amount
 * already paid out to one claimant for one distributor.
 *
 * Derivation: ["claim", distributor_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created on first claim (using init_if_needed), implicitly zero
 * 2. Monotonically increased by each successful claim
 * 3. Never closed or deleted; the entry is permanent once created
 *
 * Design Notes:
 * - One ClaimStatus account per (distributor, claimant) pair
 * - The claim handler computes each payout as the delta between the vested
 *   amount and this cumulative figure, so the entry is what makes claims
 *   exactly-once per unit vested
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimStatus {
    /// Total amount claimed by this claimant (cumulative)
    pub claimed_amount: u64,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimStatus>();
}
