use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{transfer_token, validate_distributor_config};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new vesting distributor
 *
 * This instruction initializes a fully configured distribution in one shot:
 * - Creates the distributor PDA holding the immutable configuration
 * - Creates a token vault PDA to hold the tokens to be distributed
 * - Transfers the distribution pool from owner to the vault
 *
 * The merkle root, TGE timestamp, and schedule table are fixed here and
 * never change afterward; there are no post-creation configuration
 * instructions.
 *
 * Access Control: Only the owner can create a distributor
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateDistributor<'info> {
    /// The main distributor account (PDA)
    /// - Stores the immutable distribution configuration
    /// - Derived from: ["distributor", token_mint, owner]
    #[account(
        init,
        payer = owner,
        space = VestingDistributor::LEN,
        seeds = [
            DISTRIBUTOR_SEED.as_bytes(),
            token_mint.key().as_ref(),
            owner.key().as_ref()
        ],
        bump
    )]
    pub distributor: Account<'info, VestingDistributor>,

    /// Token vault account (PDA) that holds the tokens to be distributed
    /// - Controlled by the distributor PDA as token authority
    /// - Derived from: ["vault", distributor_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = distributor,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for the tokens being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Owner's token account containing the tokens to be deposited
    /// - Must be owned by the owner signer
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The owner of the distributor
    /// - Funds the distribution pool and pays for account creation
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates a new vesting distributor
 *
 * @param ctx - The account context containing all required accounts
 * @param initial_total_amount - Total amount of tokens to be distributed
 * @param merkle_root - 32-byte root committing every (claimant, category, amount) entitlement
 * @param tge_timestamp - Unix timestamp vesting is measured from
 * @param schedules - Vesting schedule per category; index i configures category i + 1
 *
 * Validation Rules:
 * - The deposit must be positive
 * - The merkle root must not be the all-zero hash
 * - The TGE timestamp must be strictly later than the current time
 * - The schedule table must be non-empty, fit the fixed capacity, and every
 *   entry must have bps fractions within 10000 and a positive step duration
 */
pub fn handle_create_distributor(
    ctx: Context<CreateDistributor>,
    initial_total_amount: u64,
    merkle_root: [u8; 32],
    tge_timestamp: i64,
    schedules: Vec<CategorySchedule>,
) -> Result<()> {
    // Validate the full immutable configuration before touching any state
    let current_time = Clock::get()?.unix_timestamp;
    validate_distributor_config(
        initial_total_amount,
        &merkle_root,
        tge_timestamp,
        current_time,
        &schedules,
    )?;

    let distributor = &mut ctx.accounts.distributor;

    // Initialize distributor state
    distributor.bump = ctx.bumps.distributor;
    distributor.owner = ctx.accounts.owner.key();
    distributor.token_mint = ctx.accounts.token_mint.key();
    distributor.token_vault = ctx.accounts.token_vault.key();
    distributor.merkle_root = merkle_root;
    distributor.tge_timestamp = tge_timestamp;
    distributor.initial_total_amount = initial_total_amount;
    distributor.category_count = schedules.len() as u8;
    for (slot, schedule) in distributor.schedules.iter_mut().zip(schedules.iter()) {
        *slot = *schedule;
    }
    // Note: total_claimed and unused schedule slots keep default values (0)

    // Transfer tokens from owner to vault
    // This ensures the vault has the tokens available for distribution
    // Uses transfer_checked for compatibility with both SPL Token and Token 2022
    transfer_token(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        initial_total_amount,
        ctx.accounts.token_mint.decimals,
        None, // No signer seeds needed for owner-signed transfer
    )?;

    // Emit event for off-chain indexing and monitoring
    // Uses emit_cpi! for cross-program call compatibility
    emit_cpi!(DistributorCreated {
        distributor: distributor.key(),
        owner: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        merkle_root,
        tge_timestamp,
        category_count: distributor.category_count,
        initial_total_amount,
    });

    Ok(())
}
