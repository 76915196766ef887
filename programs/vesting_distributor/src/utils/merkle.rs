use anchor_lang::solana_program::keccak::hashv;
use anchor_lang::solana_program::pubkey::Pubkey;

/// Computes the leaf hash for one allocation entry
///
/// The leaf is keccak256 of the tightly packed (claimant, category, amount)
/// triple, in that field order, with no padding between fields and no
/// separate leaf-hashing step. This must match the off-chain tree generator
/// byte for byte; a single differing byte makes every proof invalid.
pub fn leaf_of(claimant: &Pubkey, category: u8, amount: u64) -> [u8; 32] {
    hashv(&[claimant.as_ref(), &[category], &amount.to_le_bytes()]).0
}

/// Verifies a merkle proof against a committed root
///
/// Folds the leaf with each sibling hash in proof order. At every step the
/// parent is keccak256 of the two nodes concatenated in ascending byte
/// order (the generator builds the tree with sorted pairs, so proofs carry
/// no left/right index). Returns true iff the final accumulator equals the
/// root. Pure and side-effect-free.
pub fn verify(proof: Vec<[u8; 32]>, root: [u8; 32], leaf: [u8; 32]) -> bool {
    let mut computed = leaf;
    for sibling in proof.iter() {
        if computed <= *sibling {
            computed = hashv(&[&computed, sibling]).0;
        } else {
            computed = hashv(&[sibling, &computed]).0;
        }
    }
    computed == root
}
