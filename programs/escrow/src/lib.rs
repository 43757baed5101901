use anchor_lang::prelude::*;

mod errors;
mod instructions;
mod state;

use instructions::*;

declare_id!("HyrodCdYTKX4TFPpDpuH8pDVb2cKmzkn824btBf1DmvY");

#[program]
pub mod escrow {
    use super::*;

    /// Open an offer: deposit Token A into the vault and record the terms
    pub fn make(ctx: Context<Make>, seed: u64, deposit: u64, receive: u64) -> Result<()> {
        instructions::make::handler(ctx, seed, deposit, receive)
    }

    /// Accept an offer: pay Token B to the maker, receive the vaulted Token A
    pub fn take(ctx: Context<Take>) -> Result<()> {
        instructions::take::handler(ctx)
    }

    /// Cancel an offer: return the vaulted Token A to the maker
    pub fn refund(ctx: Context<Refund>, _seed: u64) -> Result<()> {
        instructions::refund::handler(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::{Discriminator, InstructionData};
    use anchor_spl::associated_token::get_associated_token_address;
    use solana_sha256_hasher::hash;

    use crate::errors::EscrowError;
    use crate::instructions::make::validate_terms;
    use crate::state::Escrow;

    fn sighash(name: &str) -> [u8; 8] {
        let preimage = format!("global:{name}");
        hash(preimage.as_bytes()).to_bytes()[..8].try_into().unwrap()
    }

    fn escrow_pda(maker: &Pubkey, seed: u64) -> Pubkey {
        Pubkey::find_program_address(
            &[b"escrow", maker.as_ref(), &seed.to_le_bytes()],
            &crate::ID,
        )
        .0
    }

    #[test]
    fn escrow_pda_is_unique_per_maker_and_seed() {
        let maker = Pubkey::new_unique();
        let other = Pubkey::new_unique();

        assert_eq!(escrow_pda(&maker, 1), escrow_pda(&maker, 1));
        assert_ne!(escrow_pda(&maker, 1), escrow_pda(&maker, 2));
        assert_ne!(escrow_pda(&maker, 1), escrow_pda(&other, 1));
    }

    #[test]
    fn vault_is_the_escrow_ata_for_mint_a() {
        let maker = Pubkey::new_unique();
        let mint_a = Pubkey::new_unique();
        let escrow = escrow_pda(&maker, 1);

        // Same derivation the client uses: getAssociatedTokenAddress(mintA, escrow, true)
        let (expected, _) = Pubkey::find_program_address(
            &[
                escrow.as_ref(),
                anchor_spl::token::ID.as_ref(),
                mint_a.as_ref(),
            ],
            &anchor_spl::associated_token::ID,
        );

        assert_eq!(get_associated_token_address(&escrow, &mint_a), expected);
    }

    #[test]
    fn zero_amount_terms_are_rejected() {
        let invalid = anchor_lang::error::Error::from(EscrowError::InvalidAmount).to_string();

        assert_eq!(validate_terms(0, 1).unwrap_err().to_string(), invalid);
        assert_eq!(validate_terms(1, 0).unwrap_err().to_string(), invalid);
        assert!(validate_terms(1, 1).is_ok());
    }

    #[test]
    fn escrow_account_size_matches_layout() {
        // seed + maker + mint_a + mint_b + receive + bump
        assert_eq!(Escrow::INIT_SPACE, 8 + 32 + 32 + 32 + 8 + 1);
        assert_eq!(
            Escrow::DISCRIMINATOR,
            &hash(b"account:Escrow").to_bytes()[..8]
        );
    }

    #[test]
    fn make_encoding_matches_client() {
        let data = crate::instruction::Make {
            seed: 1,
            deposit: 1_000_000,
            receive: 2_000_000,
        }
        .data();

        assert_eq!(data.len(), 8 + 8 + 8 + 8);
        assert_eq!(data[..8], sighash("make"));
        assert_eq!(data[8..16], 1u64.to_le_bytes());
        assert_eq!(data[16..24], 1_000_000u64.to_le_bytes());
        assert_eq!(data[24..32], 2_000_000u64.to_le_bytes());
    }

    #[test]
    fn refund_encoding_matches_client() {
        let data = crate::instruction::Refund { _seed: 7 }.data();

        assert_eq!(data[..8], sighash("refund"));
        assert_eq!(data[8..], 7u64.to_le_bytes());
    }

    #[test]
    fn take_encoding_matches_client() {
        let data = crate::instruction::Take {}.data();

        assert_eq!(data, sighash("take"));
    }
}
