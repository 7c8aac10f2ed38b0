use anchor_lang::prelude::*;
use crate::errors::RegistryError;
use crate::fhe::Handle;

pub const MAX_TITLE_LEN: usize = 128;
pub const MAX_CATEGORY_LEN: usize = 64;

#[account]
#[derive(Default)]
pub struct Work {
    pub work_id: u64,
    pub registrant: Pubkey,
    pub encrypted_content_hash: Handle,
    pub title: String,              // max 128 bytes
    pub category: String,           // max 64 bytes
    pub timestamp: i64,
    pub verified: bool,
    pub dispute_count: u32,
    pub bump: u8,
}

impl Work {
    // 8 (discriminator)
    // 8 (work_id) + 32 (registrant) + 32 (encrypted_content_hash)
    // 4 + 128 (title) + 4 + 64 (category)
    // 8 (timestamp) + 1 (verified) + 4 (dispute_count) + 1 (bump)
    pub const LEN: usize = 8 + 8 + 32 + Handle::LEN + (4 + MAX_TITLE_LEN) + (4 + MAX_CATEGORY_LEN) + 8 + 1 + 4 + 1;

    pub fn validate_metadata(title: &str, category: &str) -> Result<()> {
        require!(!title.is_empty(), RegistryError::TitleRequired);
        require!(!category.is_empty(), RegistryError::CategoryRequired);
        require!(title.len() <= MAX_TITLE_LEN, RegistryError::TitleTooLong);
        require!(category.len() <= MAX_CATEGORY_LEN, RegistryError::CategoryTooLong);
        Ok(())
    }

    pub fn check_dispute_index(&self, dispute_index: u32) -> Result<()> {
        require!(dispute_index < self.dispute_count, RegistryError::InvalidDisputeIndex);
        Ok(())
    }

    pub fn info(&self) -> WorkInfo {
        WorkInfo {
            work_id: self.work_id,
            registrant: self.registrant,
            encrypted_content_hash: self.encrypted_content_hash,
            title: self.title.clone(),
            category: self.category.clone(),
            timestamp: self.timestamp,
            verified: self.verified,
            dispute_count: self.dispute_count,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct WorkInfo {
    pub work_id: u64,
    pub registrant: Pubkey,
    pub encrypted_content_hash: Handle,
    pub title: String,
    pub category: String,
    pub timestamp: i64,
    pub verified: bool,
    pub dispute_count: u32,
}
