use anchor_lang::prelude::*;
use crate::state::{AuthorProfile, Registry, AUTHOR_SEED, REGISTRY_SEED};
use crate::fhe::{Coprocessor, EncryptedInput, FheBackend};
use crate::events::AuthorRegistered;
use crate::errors::RegistryError;
use crate::utils::{create_pda_account, load_profile, store};

#[derive(Accounts)]
pub struct RegisterAuthor<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: Created by the handler on first registration; an existing
    /// profile means the author is already registered.
    #[account(
        mut,
        seeds = [AUTHOR_SEED, author.key().as_ref()],
        bump
    )]
    pub author_profile: UncheckedAccount<'info>,

    #[account(mut)]
    pub author: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Binds the encrypted author id to `author` and opens the profile.
/// The registry and the author both get read access to the id handle.
pub(crate) fn apply_register_author<F: FheBackend>(
    fhe: &mut F,
    registry_key: &Pubkey,
    profile: &mut AuthorProfile,
    author: Pubkey,
    author_id: &EncryptedInput,
    now: i64,
    bump: u8,
) -> Result<()> {
    require!(!profile.registered, RegistryError::AlreadyRegistered);
    author_id.validate()?;

    let handle = fhe.ingest(author_id, &author)?;
    fhe.allow(&handle, registry_key)?;
    fhe.allow(&handle, &author)?;

    profile.authority = author;
    profile.registered = true;
    profile.encrypted_author_id = handle;
    profile.work_count = 0;
    profile.total_disputes = 0;
    profile.won_disputes = 0;
    profile.registered_at = now;
    profile.work_ids = Vec::new();
    profile.bump = bump;

    Ok(())
}

pub fn process_register_author(ctx: Context<RegisterAuthor>, author_id: EncryptedInput) -> Result<()> {
    let mut profile = load_profile(&ctx.accounts.author_profile, ctx.program_id)?;
    let clock = Clock::get()?;
    let registry_key = ctx.accounts.registry.key();
    let author = ctx.accounts.author.key();
    let mut fhe = Coprocessor::new(*ctx.program_id);

    apply_register_author(
        &mut fhe,
        &registry_key,
        &mut profile,
        author,
        &author_id,
        clock.unix_timestamp,
        ctx.bumps.author_profile,
    )?;

    let profile_info = ctx.accounts.author_profile.to_account_info();
    let bump = [profile.bump];
    create_pda_account(
        &ctx.accounts.author.to_account_info(),
        &profile_info,
        &ctx.accounts.system_program.to_account_info(),
        ctx.program_id,
        AuthorProfile::space(0),
        &[AUTHOR_SEED, author.as_ref(), bump.as_ref()],
    )?;
    store(&profile_info, &profile)?;

    emit!(AuthorRegistered {
        author,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
