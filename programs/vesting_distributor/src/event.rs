use anchor_lang::prelude::*;

/// Event emitted when a new distributor is created
#[event]
pub struct DistributorCreated {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Owner of the distributor
    pub owner: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Merkle root of the allocation tree
    pub merkle_root: [u8; 32],
    /// TGE timestamp vesting is measured from
    pub tge_timestamp: i64,
    /// Number of configured vesting categories
    pub category_count: u8,
    /// Initial total amount of tokens deposited
    pub initial_total_amount: u64,
}

/// Event emitted when a vested portion is claimed
#[event]
pub struct TokensClaimed {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Vesting category of the claimant's allocation
    pub category: u8,
    /// Amount of tokens transferred by this claim
    pub amount_claimed: u64,
    /// Cumulative amount claimed by this claimant so far
    pub claimant_total_claimed: u64,
    /// Total allocation committed to this claimant
    pub allocation: u64,
    /// Total amount claimed from the distributor by all claimants
    pub total_claimed: u64,
}
