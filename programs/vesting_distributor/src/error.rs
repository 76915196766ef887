use anchor_lang::prelude::*;

#[error_code]
pub enum VestingDistributorError {
    // Configuration errors (rejected at creation)
    #[msg("Merkle root cannot be zero")]
    ZeroMerkleRoot,
    #[msg("TGE timestamp must be strictly in the future")]
    InvalidTgeTimestamp,
    #[msg("Invalid vesting schedule table")]
    InvalidScheduleTable,

    // Timing errors
    #[msg("TGE has not started yet")]
    TgeNotStarted,

    // Merkle proof errors
    #[msg("Invalid merkle proof")]
    InvalidProof,

    // Claim validation errors
    #[msg("Invalid vesting category")]
    InvalidCategory,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("No tokens to claim")]
    NothingToClaim,
    #[msg("Insufficient vault balance for this claim")]
    InsufficientVaultBalance,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match distributor's token mint")]
    TokenMintMismatch,
}
