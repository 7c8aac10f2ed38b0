use anchor_lang::prelude::*;
use crate::state::WinnerPolicy;
use crate::events::WinnerPolicyUpdated;
use super::RegistryAdmin;

pub fn process_update_winner_policy(ctx: Context<RegistryAdmin>, policy: WinnerPolicy) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.assert_owner(&ctx.accounts.owner.key())?;
    registry.policy = policy;

    msg!("Winner policy: match -> {:?}, mismatch -> {:?}", policy.on_match, policy.on_mismatch);
    emit!(WinnerPolicyUpdated { policy });

    Ok(())
}
