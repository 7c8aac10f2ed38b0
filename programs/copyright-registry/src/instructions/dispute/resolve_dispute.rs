use anchor_lang::prelude::*;
use crate::state::{
    DecryptionRequest, Dispute, Registry, Work, DECRYPTION_SEED, DISPUTE_SEED, REGISTRY_SEED,
    WORK_SEED,
};
use crate::fhe::{Coprocessor, FheBackend};
use crate::events::DisputeResolutionRequested;
use crate::errors::RegistryError;
use crate::utils::{create_pda_account, load_dispute, load_work, store};

#[derive(Accounts)]
#[instruction(work_id: u64, dispute_index: u32)]
pub struct ResolveDispute<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: Decoded by `load_work`; nothing at this address means an unknown id.
    #[account(
        seeds = [WORK_SEED, work_id.to_le_bytes().as_ref()],
        bump
    )]
    pub work: UncheckedAccount<'info>,

    /// CHECK: Decoded by `load_dispute`; nothing at this address means an unknown index.
    #[account(
        mut,
        seeds = [DISPUTE_SEED, work_id.to_le_bytes().as_ref(), dispute_index.to_le_bytes().as_ref()],
        bump
    )]
    pub dispute: UncheckedAccount<'info>,

    /// CHECK: Created by the handler once the dispute is known to be resolvable.
    #[account(
        mut,
        seeds = [DECRYPTION_SEED, registry.next_request_id.to_le_bytes().as_ref()],
        bump
    )]
    pub decryption_request: UncheckedAccount<'info>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// First half of a resolution: compares the two fingerprints under
/// encryption and queues decryption of the result. The dispute stays
/// pending until the gateway answers through `fulfill_decryption`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn apply_resolve_dispute<F: FheBackend>(
    fhe: &mut F,
    registry_key: &Pubkey,
    registry: &mut Registry,
    work: &Work,
    dispute: &mut Dispute,
    request: &mut DecryptionRequest,
    caller: &Pubkey,
    work_id: u64,
    dispute_index: u32,
    now: i64,
    bump: u8,
) -> Result<u64> {
    registry.assert_owner(caller)?;
    registry.check_work_id(work_id)?;
    work.check_dispute_index(dispute_index)?;
    dispute.ensure_resolvable()?;

    let request_id = registry.next_request_id;
    let next_request_id = request_id.checked_add(1).ok_or(RegistryError::MathOverflow)?;

    let result = fhe.eq(&work.encrypted_content_hash, &dispute.challenger_content_hash)?;
    fhe.allow(&result, registry_key)?;

    request.request_id = request_id;
    request.work_id = work_id;
    request.dispute_index = dispute_index;
    request.result_handle = result;
    request.requested_at = now;
    request.fulfilled = false;
    request.bump = bump;

    dispute.pending_request = Some(request_id);
    registry.next_request_id = next_request_id;

    fhe.request_decryption(&result, request_id)?;

    Ok(request_id)
}

pub fn process_resolve_dispute(
    ctx: Context<ResolveDispute>,
    work_id: u64,
    dispute_index: u32,
) -> Result<u64> {
    let program_id = ctx.program_id;
    let owner = ctx.accounts.owner.key();
    ctx.accounts.registry.assert_owner(&owner)?;

    let work = load_work(&ctx.accounts.work, program_id, &ctx.accounts.registry, work_id)?;
    let mut dispute = load_dispute(&ctx.accounts.dispute, program_id, &work, dispute_index)?;

    let clock = Clock::get()?;
    let registry_key = ctx.accounts.registry.key();
    let mut fhe = Coprocessor::new(*program_id);
    let mut request = DecryptionRequest::default();

    let request_id = apply_resolve_dispute(
        &mut fhe,
        &registry_key,
        &mut ctx.accounts.registry,
        &work,
        &mut dispute,
        &mut request,
        &owner,
        work_id,
        dispute_index,
        clock.unix_timestamp,
        ctx.bumps.decryption_request,
    )?;

    let accounts = &ctx.accounts;
    let request_id_bytes = request_id.to_le_bytes();
    let bump = [request.bump];
    create_pda_account(
        &accounts.owner.to_account_info(),
        &accounts.decryption_request.to_account_info(),
        &accounts.system_program.to_account_info(),
        program_id,
        DecryptionRequest::LEN,
        &[DECRYPTION_SEED, request_id_bytes.as_ref(), bump.as_ref()],
    )?;
    store(&accounts.decryption_request, &request)?;
    store(&accounts.dispute, &dispute)?;

    msg!("Dispute {}/{} awaiting decryption request {}", work_id, dispute_index, request_id);
    emit!(DisputeResolutionRequested {
        work_id,
        dispute_index,
        request_id,
    });

    Ok(request_id)
}
