use anchor_lang::prelude::*;
use crate::state::{
    AuthorProfile, Dispute, Registry, Work, AUTHOR_SEED, DISPUTE_SEED, REGISTRY_SEED, WORK_SEED,
};
use crate::fhe::{Coprocessor, EncryptedInput, FheBackend};
use crate::events::DisputeFiled;
use crate::errors::RegistryError;
use crate::utils::{create_pda_account, load_author_profile, load_profile, load_work, store};

#[derive(Accounts)]
#[instruction(work_id: u64)]
pub struct FileDispute<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: Decoded by `load_work`; nothing at this address means an unknown id.
    #[account(
        mut,
        seeds = [WORK_SEED, work_id.to_le_bytes().as_ref()],
        bump
    )]
    pub work: UncheckedAccount<'info>,

    /// CHECK: Created by the handler at `["dispute", work_id, dispute_count]`.
    #[account(mut)]
    pub dispute: UncheckedAccount<'info>,

    /// CHECK: An address without a profile reads as unregistered.
    #[account(
        mut,
        seeds = [AUTHOR_SEED, challenger.key().as_ref()],
        bump
    )]
    pub challenger_profile: UncheckedAccount<'info>,

    /// CHECK: Checked against the work's registrant by `load_author_profile`.
    #[account(mut)]
    pub registrant_profile: UncheckedAccount<'info>,

    #[account(mut)]
    pub challenger: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn apply_file_dispute<F: FheBackend>(
    fhe: &mut F,
    registry_key: &Pubkey,
    registry: &Registry,
    work: &mut Work,
    dispute: &mut Dispute,
    challenger_profile: &mut AuthorProfile,
    registrant_profile: &mut AuthorProfile,
    challenger_content_hash: &EncryptedInput,
    work_id: u64,
    now: i64,
    bump: u8,
) -> Result<u32> {
    challenger_profile.ensure_registered()?;
    registry.check_work_id(work_id)?;
    let challenger = challenger_profile.authority;
    require_keys_neq!(challenger, work.registrant, RegistryError::CannotDisputeOwnWork);
    challenger_content_hash.validate()?;

    let dispute_index = work.dispute_count;
    let dispute_count = dispute_index.checked_add(1).ok_or(RegistryError::MathOverflow)?;
    let challenger_disputes = challenger_profile
        .total_disputes
        .checked_add(1)
        .ok_or(RegistryError::MathOverflow)?;
    let registrant_disputes = registrant_profile
        .total_disputes
        .checked_add(1)
        .ok_or(RegistryError::MathOverflow)?;

    let handle = fhe.ingest(challenger_content_hash, &challenger)?;
    fhe.allow(&handle, registry_key)?;
    fhe.allow(&handle, &challenger)?;

    dispute.work_id = work_id;
    dispute.dispute_index = dispute_index;
    dispute.challenger = challenger;
    dispute.challenger_content_hash = handle;
    dispute.timestamp = now;
    dispute.resolved = false;
    dispute.winner = None;
    dispute.pending_request = None;
    dispute.resolved_at = None;
    dispute.bump = bump;

    work.dispute_count = dispute_count;
    challenger_profile.total_disputes = challenger_disputes;
    registrant_profile.total_disputes = registrant_disputes;

    Ok(dispute_index)
}

pub fn process_file_dispute(
    ctx: Context<FileDispute>,
    work_id: u64,
    challenger_content_hash: EncryptedInput,
) -> Result<u32> {
    let program_id = ctx.program_id;
    let accounts = &ctx.accounts;

    let mut challenger_profile = load_profile(&accounts.challenger_profile, program_id)?;
    challenger_profile.ensure_registered()?;
    let mut work = load_work(&accounts.work, program_id, &accounts.registry, work_id)?;
    let mut registrant_profile = load_author_profile(&accounts.registrant_profile, program_id, &work.registrant)?;

    let (dispute_address, dispute_bump) = Dispute::address(work_id, work.dispute_count, program_id);
    require_keys_eq!(accounts.dispute.key(), dispute_address, anchor_lang::error::ErrorCode::ConstraintSeeds);

    let clock = Clock::get()?;
    let registry_key = accounts.registry.key();
    let mut fhe = Coprocessor::new(*program_id);
    let mut dispute = Dispute::default();

    let dispute_index = apply_file_dispute(
        &mut fhe,
        &registry_key,
        &accounts.registry,
        &mut work,
        &mut dispute,
        &mut challenger_profile,
        &mut registrant_profile,
        &challenger_content_hash,
        work_id,
        clock.unix_timestamp,
        dispute_bump,
    )?;

    let work_id_bytes = work_id.to_le_bytes();
    let index_bytes = dispute_index.to_le_bytes();
    let bump = [dispute_bump];
    create_pda_account(
        &accounts.challenger.to_account_info(),
        &accounts.dispute.to_account_info(),
        &accounts.system_program.to_account_info(),
        program_id,
        Dispute::LEN,
        &[DISPUTE_SEED, work_id_bytes.as_ref(), index_bytes.as_ref(), bump.as_ref()],
    )?;
    store(&accounts.dispute, &dispute)?;
    store(&accounts.work, &work)?;
    store(&accounts.challenger_profile, &challenger_profile)?;
    store(&accounts.registrant_profile, &registrant_profile)?;

    emit!(DisputeFiled {
        work_id,
        challenger: accounts.challenger.key(),
        dispute_index,
    });

    Ok(dispute_index)
}
