use anchor_lang::prelude::*;
use crate::errors::RegistryError;
use crate::fhe::Handle;
use crate::state::AUTHOR_SEED;

#[account]
#[derive(Default)]
pub struct AuthorProfile {
    pub authority: Pubkey,
    pub registered: bool,
    pub encrypted_author_id: Handle,
    pub work_count: u64,
    pub total_disputes: u64,
    pub won_disputes: u64,
    pub registered_at: i64,
    pub work_ids: Vec<u64>,         // grows by 8 bytes per registered work
    pub bump: u8,
}

impl AuthorProfile {
    // 8 (discriminator)
    // 32 (authority) + 1 (registered) + 32 (encrypted_author_id)
    // 8 * 3 (counters) + 8 (registered_at)
    // 4 + 8 * works (work_ids)
    // 1 (bump)
    pub const fn space(works: usize) -> usize {
        8 + 32 + 1 + Handle::LEN + 8 * 3 + 8 + (4 + 8 * works) + 1
    }

    pub fn address(author: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[AUTHOR_SEED, author.as_ref()], program_id)
    }

    pub fn ensure_registered(&self) -> Result<()> {
        require!(self.registered, RegistryError::AuthorNotRegistered);
        Ok(())
    }

    pub fn stats(&self) -> AuthorStats {
        AuthorStats {
            registered: self.registered,
            work_count: self.work_count,
            total_disputes: self.total_disputes,
            won_disputes: self.won_disputes,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct AuthorStats {
    pub registered: bool,
    pub work_count: u64,
    pub total_disputes: u64,
    pub won_disputes: u64,
}
