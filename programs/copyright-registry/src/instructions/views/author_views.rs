use anchor_lang::prelude::*;
use crate::state::{AuthorStats, AUTHOR_SEED};
use crate::utils::load_profile;

#[derive(Accounts)]
#[instruction(address: Pubkey)]
pub struct AuthorView<'info> {
    /// CHECK: May not exist yet; owner and discriminator are checked in `load_profile`.
    #[account(
        seeds = [AUTHOR_SEED, address.as_ref()],
        bump
    )]
    pub author_profile: UncheckedAccount<'info>,
}

pub fn process_is_registered_author(ctx: Context<AuthorView>, _address: Pubkey) -> Result<bool> {
    let profile = load_profile(&ctx.accounts.author_profile, ctx.program_id)?;
    Ok(profile.registered)
}

pub fn process_get_author_stats(ctx: Context<AuthorView>, _address: Pubkey) -> Result<AuthorStats> {
    let profile = load_profile(&ctx.accounts.author_profile, ctx.program_id)?;
    Ok(profile.stats())
}

pub fn process_get_author_works(ctx: Context<AuthorView>, _address: Pubkey) -> Result<Vec<u64>> {
    let profile = load_profile(&ctx.accounts.author_profile, ctx.program_id)?;
    Ok(profile.work_ids)
}
