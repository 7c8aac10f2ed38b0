use anchor_lang::prelude::*;
use crate::fhe::Handle;
use crate::state::WinnerPolicy;

#[event]
pub struct RegistryInitialized {
    pub owner: Pubkey,
    pub gateway: Pubkey,
}

#[event]
pub struct AuthorRegistered {
    pub author: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct WorkRegistered {
    pub work_id: u64,
    pub registrant: Pubkey,
    pub title: String,
    pub timestamp: i64,
}

#[event]
pub struct WorkVerified {
    pub work_id: u64,
    pub verifier: Pubkey,
}

#[event]
pub struct DisputeFiled {
    pub work_id: u64,
    pub challenger: Pubkey,
    pub dispute_index: u32,
}

#[event]
pub struct DisputeResolutionRequested {
    pub work_id: u64,
    pub dispute_index: u32,
    pub request_id: u64,
}

#[event]
pub struct DisputeResolved {
    pub work_id: u64,
    pub dispute_index: u32,
    pub winner: Pubkey,
}

#[event]
pub struct GatewayUpdated {
    pub old_gateway: Pubkey,
    pub new_gateway: Pubkey,
}

#[event]
pub struct WinnerPolicyUpdated {
    pub policy: WinnerPolicy,
}

/// Published by the on-chain coprocessor so the off-chain service can
/// mirror its access-control list.
#[event]
pub struct HandleAllowed {
    pub handle: Handle,
    pub principal: Pubkey,
}

#[event]
pub struct DecryptionRequested {
    pub request_id: u64,
    pub handle: Handle,
}
