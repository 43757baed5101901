use anchor_lang::prelude::*;

/// Per-user vault bookkeeping. Lives at `["state", user]`; the lamports
/// themselves sit in a dataless system account at `["vault", user]`.
#[account]
#[derive(InitSpace)]
pub struct VaultState {
    pub state_bump: u8,
    pub vault_bump: u8,
}
