use anchor_lang::prelude::*;

declare_id!("199Cmq9FERPNHbNzmavvEcbUu8oiakT78nJDr6yyUab");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::CategorySchedule;

/**
 * Vesting Distributor Program
 *
 * A Solana program that releases a token allocation to each holder of a
 * merkle-committed (claimant, category, amount) entitlement according to a
 * category-specific time-based vesting schedule.
 *
 * Key Features:
 * - Merkle tree-based claim verification (sorted-pair keccak256 tree built
 *   off-chain; the program only verifies leaf + proof against the root)
 * - Per-category vesting schedules: an immediate cliff fraction at TGE plus
 *   a fixed fraction per elapsed step, expressed in basis points of 10000
 * - Incremental claiming: each claim pays out exactly the newly vested
 *   delta over what the claimant has already received
 * - Immutable configuration: merkle root, TGE timestamp, and the schedule
 *   table are fixed at creation and never change
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Distributor PDA: stores root, TGE timestamp, and the schedule table
 * - Token Vault PDA: holds the tokens to be distributed
 * - Claim Status PDAs: track how much each claimant has received
 *
 * Workflow:
 * 1. Off-chain generator builds the allocation tree and publishes the root
 * 2. Owner creates the distributor with root, TGE, schedules and deposits
 *    the distribution pool into the vault
 * 3. Once TGE has passed, holders claim their vested delta with a proof,
 *    repeatedly as more steps elapse, until the allocation is exhausted
 */
#[program]
pub mod vesting_distributor {
    use super::*;

    /**
     * Creates a new vesting distributor
     *
     * Initializes the distributor and vault PDAs, validates the immutable
     * configuration (merkle root, TGE timestamp, schedule table), and
     * deposits the distribution pool from the owner into the vault.
     *
     * @param ctx - Account context containing distributor, vault, and owner accounts
     * @param initial_total_amount - Total amount of tokens deposited for distribution
     * @param merkle_root - 32-byte root of the allocation tree, non-zero
     * @param tge_timestamp - Unix timestamp vesting is measured from, strictly in the future
     * @param schedules - Vesting schedule per category; index i configures category i + 1
     *
     * Access Control: Owner only
     */
    pub fn create_distributor(
        ctx: Context<CreateDistributor>,
        initial_total_amount: u64,
        merkle_root: [u8; 32],
        tge_timestamp: i64,
        schedules: Vec<CategorySchedule>,
    ) -> Result<()> {
        handle_create_distributor(ctx, initial_total_amount, merkle_root, tge_timestamp, schedules)
    }

    /**
     * Checks a claim proof without touching any state
     *
     * Recomputes the leaf for (claimant, category, amount) and verifies the
     * proof against the distributor's merkle root. Intended for off-chain
     * pre-flight validation before submitting an actual claim.
     *
     * @param ctx - Account context containing only the distributor
     * @param claimant - Address the entitlement is committed to
     * @param category - Vesting category of the entitlement
     * @param amount - Total allocation of the entitlement
     * @param proof - Array of 32-byte sibling hashes forming the merkle proof
     *
     * @returns true iff (claimant, category, amount) is committed at that leaf
     */
    pub fn check_claim(
        ctx: Context<CheckClaim>,
        claimant: Pubkey,
        category: u8,
        amount: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<bool> {
        handle_check_claim(ctx, claimant, category, amount, proof)
    }

    /**
     * Claims the newly vested portion of the caller's allocation
     *
     * Verifies the merkle proof for (claimant, category, amount), evaluates
     * the category's schedule at the current time, and transfers the newly
     * vested delta over what the claimant has already received.
     *
     * @param ctx - Account context containing distributor, claim status, and token accounts
     * @param category - Vesting category of the caller's entitlement
     * @param amount - Total allocation committed to the caller
     * @param proof - Array of 32-byte sibling hashes forming the merkle proof
     *
     * @returns the amount transferred by this call
     *
     * Access Control: Any claimant with a valid merkle proof for their own address
     */
    pub fn claim(
        ctx: Context<Claim>,
        category: u8,
        amount: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<u64> {
        handle_claim(ctx, category, amount, proof)
    }
}
