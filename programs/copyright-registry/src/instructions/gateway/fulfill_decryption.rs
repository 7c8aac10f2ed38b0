use anchor_lang::prelude::*;
use crate::state::{
    AuthorProfile, DecryptionRequest, Dispute, Party, Registry, Work, AUTHOR_SEED,
    DECRYPTION_SEED, DISPUTE_SEED, REGISTRY_SEED, WORK_SEED,
};
use crate::fhe::Handle;
use crate::events::DisputeResolved;
use crate::errors::RegistryError;

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct FulfillDecryption<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        seeds = [DECRYPTION_SEED, request_id.to_le_bytes().as_ref()],
        bump = decryption_request.bump
    )]
    pub decryption_request: Account<'info, DecryptionRequest>,

    #[account(
        seeds = [WORK_SEED, decryption_request.work_id.to_le_bytes().as_ref()],
        bump = work.bump
    )]
    pub work: Account<'info, Work>,

    #[account(
        mut,
        seeds = [
            DISPUTE_SEED,
            decryption_request.work_id.to_le_bytes().as_ref(),
            decryption_request.dispute_index.to_le_bytes().as_ref()
        ],
        bump = dispute.bump
    )]
    pub dispute: Account<'info, Dispute>,

    #[account(
        mut,
        seeds = [AUTHOR_SEED, work.registrant.as_ref()],
        bump = registrant_profile.bump
    )]
    pub registrant_profile: Account<'info, AuthorProfile>,

    #[account(
        mut,
        seeds = [AUTHOR_SEED, dispute.challenger.as_ref()],
        bump = challenger_profile.bump
    )]
    pub challenger_profile: Account<'info, AuthorProfile>,

    pub gateway: Signer<'info>,
}

/// Second half of a resolution, driven by the gateway with the decrypted
/// comparison. Each request settles its dispute at most once.
#[allow(clippy::too_many_arguments)]
pub(crate) fn apply_fulfill_decryption(
    registry: &Registry,
    request: &mut DecryptionRequest,
    work: &Work,
    dispute: &mut Dispute,
    registrant_profile: &mut AuthorProfile,
    challenger_profile: &mut AuthorProfile,
    caller: &Pubkey,
    result_handle: &Handle,
    matched: bool,
    now: i64,
) -> Result<Pubkey> {
    registry.assert_gateway(caller)?;
    request.check_fulfillable(result_handle)?;
    require!(!dispute.resolved, RegistryError::AlreadyResolved);
    require!(
        dispute.pending_request == Some(request.request_id),
        RegistryError::RequestMismatch
    );

    let (winner, winner_profile) = match registry.policy.pick(matched) {
        Party::Challenger => (dispute.challenger, challenger_profile),
        Party::Registrant => (work.registrant, registrant_profile),
    };
    winner_profile.won_disputes = winner_profile
        .won_disputes
        .checked_add(1)
        .ok_or(RegistryError::MathOverflow)?;

    request.fulfilled = true;
    dispute.resolved = true;
    dispute.winner = Some(winner);
    dispute.pending_request = None;
    dispute.resolved_at = Some(now);

    Ok(winner)
}

pub fn process_fulfill_decryption(
    ctx: Context<FulfillDecryption>,
    _request_id: u64,
    result_handle: Handle,
    matched: bool,
) -> Result<()> {
    let clock = Clock::get()?;
    let gateway = ctx.accounts.gateway.key();

    let winner = apply_fulfill_decryption(
        &ctx.accounts.registry,
        &mut ctx.accounts.decryption_request,
        &ctx.accounts.work,
        &mut ctx.accounts.dispute,
        &mut ctx.accounts.registrant_profile,
        &mut ctx.accounts.challenger_profile,
        &gateway,
        &result_handle,
        matched,
        clock.unix_timestamp,
    )?;

    let dispute = &ctx.accounts.dispute;
    msg!(
        "Dispute {}/{} resolved (match: {}), winner {}",
        dispute.work_id,
        dispute.dispute_index,
        matched,
        winner
    );
    emit!(DisputeResolved {
        work_id: dispute.work_id,
        dispute_index: dispute.dispute_index,
        winner,
    });

    Ok(())
}
