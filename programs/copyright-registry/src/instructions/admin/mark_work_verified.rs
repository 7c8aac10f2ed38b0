use anchor_lang::prelude::*;
use crate::state::{Registry, Work, REGISTRY_SEED, WORK_SEED};
use crate::events::WorkVerified;
use crate::utils::{load_work, store};

#[derive(Accounts)]
#[instruction(work_id: u64)]
pub struct MarkWorkAsVerified<'info> {
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

    pub owner: Signer<'info>,
}

pub(crate) fn apply_mark_verified(
    registry: &Registry,
    work: &mut Work,
    caller: &Pubkey,
    work_id: u64,
) -> Result<WorkVerified> {
    registry.assert_owner(caller)?;
    registry.check_work_id(work_id)?;
    work.verified = true;
    Ok(WorkVerified {
        work_id,
        verifier: *caller,
    })
}

pub fn process_mark_work_as_verified(ctx: Context<MarkWorkAsVerified>, work_id: u64) -> Result<()> {
    let verifier = ctx.accounts.owner.key();
    let registry = &ctx.accounts.registry;
    registry.assert_owner(&verifier)?;

    let mut work = load_work(&ctx.accounts.work, ctx.program_id, registry, work_id)?;
    let verified = apply_mark_verified(registry, &mut work, &verifier, work_id)?;
    store(&ctx.accounts.work, &work)?;

    emit!(verified);

    Ok(())
}
