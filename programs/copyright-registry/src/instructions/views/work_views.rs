use anchor_lang::prelude::*;
use crate::state::{Registry, WorkInfo, REGISTRY_SEED, WORK_SEED};
use crate::utils::load_work;

#[derive(Accounts)]
pub struct RegistryView<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,
}

#[derive(Accounts)]
#[instruction(work_id: u64)]
pub struct WorkView<'info> {
    #[account(
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
}

pub fn process_get_total_works(ctx: Context<RegistryView>) -> Result<u64> {
    Ok(ctx.accounts.registry.work_counter)
}

pub fn process_get_work_info(ctx: Context<WorkView>, work_id: u64) -> Result<WorkInfo> {
    let work = load_work(&ctx.accounts.work, ctx.program_id, &ctx.accounts.registry, work_id)?;
    Ok(work.info())
}

pub fn process_get_dispute_count(ctx: Context<WorkView>, work_id: u64) -> Result<u32> {
    let work = load_work(&ctx.accounts.work, ctx.program_id, &ctx.accounts.registry, work_id)?;
    Ok(work.dispute_count)
}
