use anchor_lang::prelude::*;
use crate::errors::RegistryError;
use crate::fhe::Handle;

/// Pending-decryption entry: maps a gateway request id back to the dispute
/// it settles.
#[account]
#[derive(Default)]
pub struct DecryptionRequest {
    pub request_id: u64,
    pub work_id: u64,
    pub dispute_index: u32,
    pub result_handle: Handle,
    pub requested_at: i64,
    pub fulfilled: bool,
    pub bump: u8,
}

impl DecryptionRequest {
    pub const LEN: usize = 8 + 8 + 8 + 4 + Handle::LEN + 8 + 1 + 1;

    pub fn check_fulfillable(&self, result_handle: &Handle) -> Result<()> {
        require!(!self.fulfilled, RegistryError::RequestAlreadyFulfilled);
        require!(self.result_handle == *result_handle, RegistryError::HandleMismatch);
        Ok(())
    }
}
