use anchor_lang::prelude::*;
use crate::errors::RegistryError;
use crate::fhe::Handle;
use crate::state::DISPUTE_SEED;

#[account]
#[derive(Default)]
pub struct Dispute {
    pub work_id: u64,
    pub dispute_index: u32,
    pub challenger: Pubkey,
    pub challenger_content_hash: Handle,
    pub timestamp: i64,
    pub resolved: bool,
    pub winner: Option<Pubkey>,
    pub pending_request: Option<u64>,
    pub resolved_at: Option<i64>,
    pub bump: u8,
}

impl Dispute {
    // 8 (discriminator)
    // 8 (work_id) + 4 (dispute_index) + 32 (challenger) + 32 (challenger_content_hash)
    // 8 (timestamp) + 1 (resolved)
    // 1+32 (winner option) + 1+8 (pending_request option) + 1+8 (resolved_at option)
    // 1 (bump)
    pub const LEN: usize = 8 + 8 + 4 + 32 + Handle::LEN + 8 + 1 + 33 + 9 + 9 + 1;

    pub fn address(work_id: u64, dispute_index: u32, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[DISPUTE_SEED, work_id.to_le_bytes().as_ref(), dispute_index.to_le_bytes().as_ref()],
            program_id,
        )
    }

    pub fn ensure_resolvable(&self) -> Result<()> {
        require!(!self.resolved, RegistryError::AlreadyResolved);
        require!(self.pending_request.is_none(), RegistryError::AlreadyPending);
        Ok(())
    }

    pub fn info(&self) -> DisputeInfo {
        DisputeInfo {
            work_id: self.work_id,
            dispute_index: self.dispute_index,
            challenger: self.challenger,
            timestamp: self.timestamp,
            resolved: self.resolved,
            winner: self.winner,
            pending: self.pending_request.is_some(),
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct DisputeInfo {
    pub work_id: u64,
    pub dispute_index: u32,
    pub challenger: Pubkey,
    pub timestamp: i64,
    pub resolved: bool,
    pub winner: Option<Pubkey>,
    pub pending: bool,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Party {
    Registrant,
    Challenger,
}

/// Who wins a dispute once the fingerprint comparison is decrypted.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct WinnerPolicy {
    pub on_match: Party,
    pub on_mismatch: Party,
}

impl Default for WinnerPolicy {
    fn default() -> Self {
        Self {
            on_match: Party::Challenger,
            on_mismatch: Party::Registrant,
        }
    }
}

impl WinnerPolicy {
    pub fn pick(&self, matched: bool) -> Party {
        if matched {
            self.on_match
        } else {
            self.on_mismatch
        }
    }
}
