use anchor_lang::prelude::*;
use crate::errors::RegistryError;
use crate::state::WinnerPolicy;

#[account]
#[derive(Default)]
pub struct Registry {
    pub owner: Pubkey,              // 32, fixed at initialization
    pub gateway: Pubkey,            // 32, signs decryption callbacks
    pub work_counter: u64,          // 8, works ever created
    pub next_request_id: u64,       // 8
    pub policy: WinnerPolicy,       // 2
    pub bump: u8,                   // 1
}

impl Registry {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 2 + 1;

    pub fn assert_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, RegistryError::NotAuthorized);
        Ok(())
    }

    pub fn assert_gateway(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.gateway, RegistryError::NotGateway);
        Ok(())
    }

    /// Id the next registered work will receive. Used for PDA derivation.
    pub fn next_work_id(&self) -> u64 {
        self.work_counter.saturating_add(1)
    }

    pub fn check_work_id(&self, work_id: u64) -> Result<()> {
        require!(
            work_id >= 1 && work_id <= self.work_counter,
            RegistryError::InvalidWorkId
        );
        Ok(())
    }
}
