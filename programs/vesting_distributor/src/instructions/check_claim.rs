use crate::state::*;
use crate::utils::{leaf_of, verify};
use anchor_lang::prelude::*;

/**
 * Account context for checking a claim proof
 *
 * Read-only: the distributor is the only account involved and nothing is
 * mutated. Callers use this to validate a proof off-chain (or from another
 * program) before spending resources on an actual claim.
 */
#[derive(Accounts)]
pub struct CheckClaim<'info> {
    /// The distributor whose merkle root the proof is checked against
    pub distributor: Account<'info, VestingDistributor>,
}

/**
 * Checks whether (claimant, category, amount) is committed in the tree
 *
 * @param ctx - The account context containing the distributor
 * @param claimant - Address the entitlement is committed to
 * @param category - Vesting category of the entitlement
 * @param amount - Total allocation of the entitlement
 * @param proof - Array of 32-byte sibling hashes forming the merkle proof
 *
 * @returns true iff the proof folds the triple's leaf to the committed root
 *
 * The commitment binds all three fields jointly: mutating any one of them
 * produces a different leaf, so the result flips to false.
 */
pub fn handle_check_claim(
    ctx: Context<CheckClaim>,
    claimant: Pubkey,
    category: u8,
    amount: u64,
    proof: Vec<[u8; 32]>,
) -> Result<bool> {
    let leaf = leaf_of(&claimant, category, amount);
    Ok(verify(proof, ctx.accounts.distributor.merkle_root, leaf))
}
