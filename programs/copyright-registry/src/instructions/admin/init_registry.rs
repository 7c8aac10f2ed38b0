use anchor_lang::prelude::*;
use crate::state::{Registry, WinnerPolicy, REGISTRY_SEED};
use crate::events::RegistryInitialized;

#[derive(Accounts)]
pub struct InitRegistry<'info> {
    #[account(
        init,
        seeds = [REGISTRY_SEED],
        bump,
        payer = owner,
        space = Registry::LEN
    )]
    pub registry: Account<'info, Registry>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_init_registry(
    ctx: Context<InitRegistry>,
    gateway: Pubkey,
    policy: WinnerPolicy,
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.owner = ctx.accounts.owner.key();
    registry.gateway = gateway;
    registry.work_counter = 0;
    registry.next_request_id = 0;
    registry.policy = policy;
    registry.bump = ctx.bumps.registry;

    emit!(RegistryInitialized {
        owner: registry.owner,
        gateway,
    });

    Ok(())
}
