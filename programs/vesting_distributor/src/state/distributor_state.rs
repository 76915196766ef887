use crate::constants::MAX_CATEGORIES;
use crate::error::VestingDistributorError;
use anchor_lang::prelude::*;

/**
 * Vesting schedule for one category
 *
 * The fraction of an allocation released after `elapsed` seconds since TGE is
 * `cliff_bps + step_bps * (elapsed / step_duration)`, saturating at 10000 bps.
 * The cliff unlocks immediately once TGE has passed (step count zero).
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct CategorySchedule {
    /// Fraction unlocked at TGE, in basis points of 10000
    pub cliff_bps: u16,
    /// Additional fraction unlocked per elapsed step, in basis points of 10000
    pub step_bps: u16,
    /// Length of one vesting step in seconds, must be positive
    pub step_duration: i64,
}

/**
 * Main distributor state account
 *
 * This struct holds the immutable configuration of one distribution: the
 * merkle root committing the allocation list, the TGE timestamp vesting is
 * measured from, and the per-category schedule table. The only field that
 * changes after creation is the aggregate `total_claimed`.
 *
 * Derivation: ["distributor", token_mint, owner]
 *
 * Lifecycle:
 * 1. Created and fully configured during create_distributor
 * 2. total_claimed increments with each successful claim
 * 3. Never closed; the distribution has no end time
 */
#[account]
#[derive(Default, Debug)]
pub struct VestingDistributor {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation during claim operations
    pub bump: u8,

    /// Owner who created and funded the distributor
    pub owner: Pubkey,

    /// Token mint address
    /// - Specifies which token is being distributed
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA that holds the tokens to be distributed
    /// - Controlled by the distributor PDA
    /// - Derived from: ["vault", distributor_key]
    pub token_vault: Pubkey,

    /// Merkle root of the allocation tree
    /// - Commits every (claimant, category, amount) entitlement
    /// - Set once at creation, never updated
    pub merkle_root: [u8; 32],

    /// TGE timestamp (Unix) vesting is measured from
    /// - Claims before this time fail with TgeNotStarted
    pub tge_timestamp: i64,

    /// Initial total amount of tokens deposited
    pub initial_total_amount: u64,

    /// Total amount of tokens claimed by all claimants
    pub total_claimed: u64,

    /// Number of configured vesting categories
    /// - Categories 1..=category_count are valid; 0 is always invalid
    pub category_count: u8,

    /// Schedule table, slot i configures category i + 1
    /// - Slots at or past category_count are unused
    pub schedules: [CategorySchedule; MAX_CATEGORIES],
}

impl VestingDistributor {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<VestingDistributor>();

    /// Look up the schedule for a category
    /// - Category 0 and anything past the configured set is invalid
    pub fn schedule_for(&self, category: u8) -> Result<&CategorySchedule> {
        if category == 0 || category > self.category_count {
            return err!(VestingDistributorError::InvalidCategory);
        }
        Ok(&self.schedules[category as usize - 1])
    }
}
