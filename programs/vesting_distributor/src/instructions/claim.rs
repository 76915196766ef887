use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{claimable_amount, leaf_of, transfer_token, verify};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

/**
 * Account context for claiming vested tokens
 *
 * This instruction lets a committed claimant withdraw the portion of their
 * allocation that has vested since TGE and has not been paid out yet. The
 * proof binds (claimant, category, amount) jointly, so a structurally valid
 * proof submitted with any field altered fails verification outright.
 *
 * Access Control: Any claimant with a valid merkle proof for their own
 * address. Payout always goes to the committed address's token account.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The distributor account containing the distribution configuration
    /// - Will be modified to update the total_claimed aggregate
    #[account(mut)]
    pub distributor: Account<'info, VestingDistributor>,

    /// Individual claim ledger entry for this claimant
    /// - Tracks how much this claimant has already received
    /// - Derived from: ["claim", distributor_key, claimant_key]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), distributor.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Token vault holding the tokens to be distributed
    /// - Controlled by the distributor PDA
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    /// - Must be owned by the claimant
    /// - Must be for the correct token mint
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    /// - Must match the distributor's token mint
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ VestingDistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The claimant attempting to claim tokens
    /// - Must sign the transaction
    /// - Must be the address embedded in the committed triple
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a vesting claim
 *
 * @param ctx - The account context containing all required accounts
 * @param category - Vesting category of the claimant's committed allocation
 * @param amount - Total allocation committed to the claimant (from the tree)
 * @param proof - Array of 32-byte hashes forming the merkle proof path
 *
 * @returns the amount transferred by this call, via instruction return data
 *
 * Validation Process:
 * 1. Check that TGE has passed (time read once for the whole call)
 * 2. Verify the merkle proof for the (claimant, category, amount) triple
 * 3. Check the category is configured and the allocation is non-zero
 * 4. Compute the newly vested delta and transfer it
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    category: u8,
    amount: u64,
    proof: Vec<[u8; 32]>,
) -> Result<u64> {
    let distributor = &mut ctx.accounts.distributor;
    let claim_status = &mut ctx.accounts.claim_status;

    // ===== VALIDATION PHASE =====

    // Vesting is measured from TGE; nothing is claimable before it.
    // "now" is read once so every computation in this call agrees on it.
    let current_time = Clock::get()?.unix_timestamp;
    require!(
        current_time >= distributor.tge_timestamp,
        VestingDistributorError::TgeNotStarted
    );

    // ===== MERKLE PROOF VERIFICATION =====

    let claimant_account = &ctx.accounts.claimant;

    // Recompute the leaf for the caller's asserted triple. The commitment
    // binds claimant, category, and amount jointly, so this single check
    // rejects a wrong amount, wrong category, or wrong address alike.
    let leaf = leaf_of(&claimant_account.key(), category, amount);
    require!(
        verify(proof, distributor.merkle_root, leaf),
        VestingDistributorError::InvalidProof
    );

    // The category must have a configured schedule. A committed leaf with
    // an unconfigured category (including the reserved category 0) exists
    // in the tree but can never be claimed.
    let schedule = *distributor.schedule_for(category)?;

    // A zero-value leaf can exist in the commitment but may never be claimed
    require!(amount > 0, VestingDistributorError::InvalidAmount);

    // ===== VESTING ARITHMETIC =====

    let elapsed = current_time - distributor.tge_timestamp;
    let claimed_amount = claim_status.claimed_amount;

    // Newly vested delta over what was already paid out; fails with
    // NothingToClaim when the schedule has not advanced since the last claim
    // or the allocation is fully drawn down.
    let pending_amount = claimable_amount(&schedule, amount, elapsed, claimed_amount)?;

    // Check vault has sufficient balance before proceeding
    require!(
        ctx.accounts.token_vault.amount >= pending_amount,
        VestingDistributorError::InsufficientVaultBalance
    );

    // ===== EFFECTS PHASE (State Updates) =====

    // Prepare immutable references before the mutable updates
    let token_mint_key = distributor.token_mint;
    let owner_key = distributor.owner;
    let distributor_bump = distributor.bump;
    let distributor_key = distributor.key();

    // Update the claim ledger (CEI pattern - effects before interactions).
    // A re-entrant claim observes the updated ledger, computes a zero
    // delta, and fails with NothingToClaim instead of double-paying.
    let new_claimed_amount = claimed_amount
        .checked_add(pending_amount)
        .ok_or(VestingDistributorError::ArithmeticOverflow)?;
    claim_status.claimed_amount = new_claimed_amount;

    // Calculate new total claimed amount with overflow protection
    let new_total_claimed = distributor
        .total_claimed
        .checked_add(pending_amount)
        .ok_or(VestingDistributorError::ArithmeticOverflow)?;
    distributor.total_claimed = new_total_claimed;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    // Prepare PDA signing seeds for token transfer
    let seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        token_mint_key.as_ref(),
        owner_key.as_ref(),
        &[distributor_bump],
    ];
    let signer = &[&seeds[..]];

    // Transfer tokens from vault to claimant using PDA authority.
    // A failed transfer aborts the whole instruction, ledger update included.
    transfer_token(
        ctx.accounts.distributor.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.claimant_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        pending_amount,
        ctx.accounts.token_mint.decimals,
        Some(signer), // PDA signing for secure transfer
    )?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(TokensClaimed {
        distributor: distributor_key,
        claimant: ctx.accounts.claimant.key(),
        category,
        amount_claimed: pending_amount,
        claimant_total_claimed: new_claimed_amount,
        allocation: amount,
        total_claimed: new_total_claimed,
    });

    Ok(pending_amount)
}
