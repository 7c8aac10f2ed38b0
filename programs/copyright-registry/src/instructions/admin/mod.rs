pub mod init_registry;
pub mod mark_work_verified;
pub mod update_gateway;
pub mod update_winner_policy;

pub use init_registry::*;
pub use mark_work_verified::*;
pub use update_gateway::*;
pub use update_winner_policy::*;

use anchor_lang::prelude::*;
use crate::state::{Registry, REGISTRY_SEED};

/// Owner-only registry configuration changes.
#[derive(Accounts)]
pub struct RegistryAdmin<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,
    pub owner: Signer<'info>,
}
