use anchor_lang::prelude::*;

/// Terms of one open offer. Lives at `["escrow", maker, seed]` so a maker
/// can keep several offers open at once, one per seed.
#[account]
#[derive(InitSpace)]
pub struct Escrow {
    /// Client-chosen seed that distinguishes this offer
    pub seed: u64,
    /// Creator of the offer; refund authority and Token B recipient
    pub maker: Pubkey,
    /// Mint the maker deposited
    pub mint_a: Pubkey,
    /// Mint the maker wants in return
    pub mint_b: Pubkey,
    /// Amount of Token B the maker asks for
    pub receive: u64,
    /// Cached PDA bump
    pub bump: u8,
}
